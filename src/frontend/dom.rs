use js_sys::{Function, Reflect};
use portfolio_interactions::a11y::REDUCED_MOTION_QUERY;
use portfolio_interactions::navigation::{MenuIcon, MenuSurface, MENU_OPEN_CLASS};
use portfolio_interactions::theme::{PreferenceStore, StagedClass, ThemeRoot};
use portfolio_interactions::viewport::Rect;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, Element, HtmlElement, Storage};

const MENU_PANEL_SELECTOR: &str = ".nav-menu";
const MENU_ICON_SELECTOR: &str = ".hamburger i";

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

pub fn root_element() -> Option<Element> {
    document()?.document_element()
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_all<T: JsCast>(selector: &str) -> Vec<T> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Monotonic milliseconds for throttling; wall clock if the Performance API
/// is missing.
pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn bounding_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect {
        top: rect.top(),
        left: rect.left(),
        bottom: rect.bottom(),
        right: rect.right(),
    }
}

/// Writes inline declarations; an empty value removes the property.
pub fn set_styles(element: &HtmlElement, declarations: &[(&str, &str)]) {
    let style = element.style();
    for (property, value) in declarations {
        if value.is_empty() {
            let _ = style.remove_property(property);
        } else {
            let _ = style.set_property(property, value);
        }
    }
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Menu panel, toggle icon and body, looked up on each use so a missing
/// piece just turns its part into a no-op.
pub struct DomMenu {
    panel: Option<Element>,
    icon: Option<Element>,
    body: Option<HtmlElement>,
}

impl DomMenu {
    pub fn locate() -> Self {
        Self {
            panel: query(MENU_PANEL_SELECTOR),
            icon: query(MENU_ICON_SELECTOR),
            body: body(),
        }
    }
}

impl MenuSurface for DomMenu {
    fn set_panel_open(&mut self, open: bool) {
        if let Some(panel) = &self.panel {
            let _ = panel.class_list().toggle_with_force(MENU_OPEN_CLASS, open);
        }
    }

    fn set_icon(&mut self, icon: MenuIcon) {
        if let Some(element) = &self.icon {
            let classes = element.class_list();
            let _ = classes.remove_2(MenuIcon::Bars.class_name(), MenuIcon::Close.class_name());
            let _ = classes.add_1(icon.class_name());
        }
    }

    fn body_overflow(&self) -> String {
        self.body
            .as_ref()
            .and_then(|body| body.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    fn set_body_overflow(&mut self, value: &str) {
        if let Some(body) = &self.body {
            set_styles(body, &[("overflow", value)]);
        }
    }
}

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// `localStorage`; writes are dropped when storage is unavailable.
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// The `<html>` element's class attribute.
pub struct DocumentRoot;

impl ThemeRoot for DocumentRoot {
    fn class_name(&self) -> String {
        root_element()
            .map(|root| root.class_name())
            .unwrap_or_default()
    }

    fn set_class_name(&mut self, value: &str) {
        if let Some(root) = root_element() {
            root.set_class_name(value);
        }
    }
}

/// Like [`DocumentRoot`], but swaps the class inside a view transition when
/// the browser has one and the visitor has not asked for reduced motion.
/// Until the swap lands, reads return the staged class.
pub struct TransitionRoot {
    staged: StagedClass,
}

impl TransitionRoot {
    pub fn new(staged: StagedClass) -> Self {
        Self { staged }
    }
}

impl ThemeRoot for TransitionRoot {
    fn class_name(&self) -> String {
        self.staged.current_or(DocumentRoot.class_name())
    }

    fn set_class_name(&mut self, value: &str) {
        self.staged.stage(value);

        let staged = self.staged.clone();
        let value = value.to_string();
        run_in_view_transition(move || {
            DocumentRoot.set_class_name(&value);
            staged.settle(&value);
        });
    }
}

fn view_transition_entry() -> Option<(JsValue, Function)> {
    if prefers_reduced_motion() {
        return None;
    }

    let document = JsValue::from(document()?);
    let entry = Reflect::get(&document, &JsValue::from_str("startViewTransition")).ok()?;
    let entry = entry.dyn_into::<Function>().ok()?;
    Some((document, entry))
}

/// Runs `update` as the DOM mutation of a view transition, or right away when
/// there is no transition to run it in.
fn run_in_view_transition<F>(update: F)
where
    F: FnOnce() + 'static,
{
    let Some((document, entry)) = view_transition_entry() else {
        update();
        return;
    };

    let slot = Rc::new(RefCell::new(Some(update)));
    let deferred = slot.clone();
    let callback = Closure::once_into_js(move || {
        let update = deferred.borrow_mut().take();
        if let Some(update) = update {
            update();
        }
    });

    if entry.call1(&document, &callback).is_err() {
        let update = slot.borrow_mut().take();
        if let Some(update) = update {
            update();
        }
    }
}
