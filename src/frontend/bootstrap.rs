use super::dom::{self, bounding_rect, now_ms, set_styles, viewport_size};
use super::site::Site;
use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use js_sys::{Array, Reflect};
use portfolio_interactions::a11y::{is_escape, ANIMATION_DURATION_VARIABLE, REDUCED_ANIMATION_DURATION};
use portfolio_interactions::animation::{
    progress_width, scroll_progress, FADE_IN_SELECTOR, PROGRESS_BAR_SELECTOR, REVEALED_STYLE,
};
use portfolio_interactions::diagnostics::{report_script_error, report_unhandled_rejection, ScriptErrorReport};
use portfolio_interactions::logging::LogLevel;
use portfolio_interactions::navigation::{anchor_target, NAVBAR_SCROLLED_CLASS};
use portfolio_interactions::perf::{
    preload_hints, promoted_source, DEFERRED_SOURCE_ATTRIBUTE, LAZY_IMAGE_SELECTOR,
};
use portfolio_interactions::viewport::{is_in_viewport, scroll_target};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, ErrorEvent, HtmlElement, HtmlLinkElement, IntersectionObserver,
    IntersectionObserverEntry, KeyboardEvent, PromiseRejectionEvent, ScrollBehavior,
    ScrollToOptions,
};

const NAVBAR_SELECTOR: &str = ".navbar";
const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
const LAZY_CLASS: &str = "lazy";

/// Elements captured once at mount.
struct Page {
    fade_ins: Vec<HtmlElement>,
    progress_bar: Option<HtmlElement>,
    navbar: Option<Element>,
    /// Deferred images still waiting when IntersectionObserver is missing.
    unobserved_images: RefCell<Vec<Element>>,
}

struct LazyImages {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for LazyImages {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Listener and observer handles; dropping this unwires the page.
pub struct Wiring {
    _listeners: Vec<EventListener>,
    _lazy_images: Option<LazyImages>,
    _resize_timer: Rc<RefCell<Option<Timeout>>>,
}

pub fn wire(site: Rc<Site>) -> Wiring {
    let page = Rc::new(Page {
        fade_ins: dom::query_all::<HtmlElement>(FADE_IN_SELECTOR),
        progress_bar: dom::query(PROGRESS_BAR_SELECTOR).and_then(|el| el.dyn_into().ok()),
        navbar: dom::query(NAVBAR_SELECTOR),
        unobserved_images: RefCell::new(Vec::new()),
    });

    let path = window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    site.analytics.page_view(&path);

    insert_preload_hints(&site);
    apply_reduced_motion(&site);
    let lazy_images = observe_lazy_images(&site, &page);

    let mut listeners = Vec::new();
    let resize_timer = Rc::new(RefCell::new(None));

    if let Some(win) = window() {
        listeners.push(error_listener(&win, &site));
        listeners.push(rejection_listener(&win, &site));
        listeners.extend(scroll_listeners(&win, &site, &page));
        listeners.push(resize_listener(&win, &site, &page, &resize_timer));
    }

    if let Some(document) = dom::document() {
        listeners.push(keydown_listener(&document, &site));
        let site = site.clone();
        listeners.push(EventListener::new(&document, "mousedown", move |_event| {
            let next = site.state.borrow().modality.on_pointer_down();
            site.set_modality(next);
        }));
    }

    listeners.extend(anchor_listeners(&site));

    update_navbar(&site, &page);
    reveal_pass(&site, &page);
    progress_pass(&page);
    promote_visible_fallback_images(&page);

    site.logger.event(
        LogLevel::Debug,
        "interactions_wired",
        json!({
            "listeners": listeners.len(),
            "fadeIns": page.fade_ins.len(),
            "lazyObserver": lazy_images.is_some(),
        }),
    );

    Wiring {
        _listeners: listeners,
        _lazy_images: lazy_images,
        _resize_timer: resize_timer,
    }
}

fn reveal_pass(site: &Site, page: &Page) {
    let (_, viewport_height) = viewport_size();
    let items = page
        .fade_ins
        .iter()
        .enumerate()
        .map(|(index, element)| (index, element.get_bounding_client_rect().top()));

    let revealed = site.state.borrow_mut().reveals.scan(items, viewport_height);
    for index in revealed {
        if let Some(element) = page.fade_ins.get(index) {
            set_styles(element, REVEALED_STYLE);
        }
    }
}

fn progress_pass(page: &Page) {
    let Some(bar) = &page.progress_bar else {
        return;
    };
    let Some(root) = dom::root_element() else {
        return;
    };

    let (_, viewport_height) = viewport_size();
    let scroll_top = window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_else(|| f64::from(root.scroll_top()));
    let percent = scroll_progress(scroll_top, f64::from(root.scroll_height()), viewport_height);

    set_styles(bar, &[("width", &progress_width(percent))]);
}

fn update_navbar(site: &Site, page: &Page) {
    let Some(navbar) = &page.navbar else {
        return;
    };

    let scroll_y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
    if let Some(scrolled) = site.state.borrow_mut().update_scrolled(scroll_y) {
        let _ = navbar
            .class_list()
            .toggle_with_force(NAVBAR_SCROLLED_CLASS, scrolled);
    }
}

fn scroll_listeners(win: &web_sys::Window, site: &Rc<Site>, page: &Rc<Page>) -> Vec<EventListener> {
    let navbar = {
        let site = site.clone();
        let page = page.clone();
        EventListener::new(win, "scroll", move |_event| update_navbar(&site, &page))
    };

    let reveal = {
        let site = site.clone();
        let page = page.clone();
        EventListener::new(win, "scroll", move |_event| {
            let admitted = site.state.borrow_mut().reveal_throttle.try_acquire(now_ms());
            if admitted {
                reveal_pass(&site, &page);
                promote_visible_fallback_images(&page);
            }
        })
    };

    let progress = {
        let site = site.clone();
        let page = page.clone();
        EventListener::new(win, "scroll", move |_event| {
            let admitted = site.state.borrow_mut().progress_throttle.try_acquire(now_ms());
            if admitted {
                progress_pass(&page);
            }
        })
    };

    vec![navbar, reveal, progress]
}

fn resize_listener(
    win: &web_sys::Window,
    site: &Rc<Site>,
    page: &Rc<Page>,
    timer: &Rc<RefCell<Option<Timeout>>>,
) -> EventListener {
    let site = site.clone();
    let page = page.clone();
    let timer = timer.clone();

    EventListener::new(win, "resize", move |_event| {
        let delay = {
            let mut state = site.state.borrow_mut();
            state.resize_debounce.call(now_ms());
            state.resize_debounce.delay_ms()
        };

        let site = site.clone();
        let page = page.clone();
        let pending = Timeout::new(u32::try_from(delay).unwrap_or(u32::MAX), move || {
            let due = site.state.borrow_mut().resize_debounce.flush();
            if due {
                reveal_pass(&site, &page);
                progress_pass(&page);
            }
        });

        // Replacing the handle cancels the previous timer.
        timer.borrow_mut().replace(pending);
    })
}

fn anchor_listeners(site: &Rc<Site>) -> Vec<EventListener> {
    dom::query_all::<Element>(ANCHOR_SELECTOR)
        .into_iter()
        .map(|anchor| {
            let site = site.clone();
            let href = anchor.get_attribute("href").unwrap_or_default();
            EventListener::new_with_options(
                &anchor,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    let Some(target) = anchor_target(&href).and_then(dom::query) else {
                        return;
                    };
                    smooth_scroll_to(&target, site.config.anchor_offset_px as f64);
                    site.close_menu();
                },
            )
        })
        .collect()
}

fn smooth_scroll_to(target: &Element, offset: f64) {
    let Some(win) = window() else {
        return;
    };

    let scroll_y = win.scroll_y().unwrap_or(0.0);
    let top = scroll_target(target.get_bounding_client_rect().top(), scroll_y, offset);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

fn keydown_listener(document: &web_sys::Document, site: &Rc<Site>) -> EventListener {
    let site = site.clone();
    EventListener::new(document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };

        if is_escape(&event.key()) && site.state.borrow().is_menu_open() {
            site.close_menu();
        }

        let next = site.state.borrow().modality.on_key_down();
        site.set_modality(next);
    })
}

fn error_listener(win: &web_sys::Window, site: &Rc<Site>) -> EventListener {
    let site = site.clone();
    EventListener::new(win, "error", move |event| {
        let Some(event) = event.dyn_ref::<ErrorEvent>() else {
            return;
        };

        let report = ScriptErrorReport {
            message: event.message(),
            source: event.filename(),
            line: event.lineno(),
            column: event.colno(),
        };
        report_script_error(&site.logger, &report);
    })
}

fn rejection_listener(win: &web_sys::Window, site: &Rc<Site>) -> EventListener {
    let site = site.clone();
    EventListener::new(win, "unhandledrejection", move |event| {
        let Some(event) = event.dyn_ref::<PromiseRejectionEvent>() else {
            return;
        };

        report_unhandled_rejection(&site.logger, &describe_js_value(&event.reason()));
    })
}

fn describe_js_value(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }

    value
        .as_string()
        .or_else(|| js_sys::JSON::stringify(value).ok().and_then(|s| s.as_string()))
        .unwrap_or_else(|| format!("{value:?}"))
}

fn apply_reduced_motion(site: &Site) {
    if !dom::prefers_reduced_motion() {
        return;
    }

    if let Some(root) = dom::root_element().and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
        set_styles(&root, &[(ANIMATION_DURATION_VARIABLE, REDUCED_ANIMATION_DURATION)]);
        site.logger
            .event(LogLevel::Debug, "reduced_motion_applied", json!({}));
    }
}

fn insert_preload_hints(site: &Site) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };

    for hint in preload_hints(&site.config.preload_resources) {
        let Some(link) = document
            .create_element("link")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlLinkElement>().ok())
        else {
            continue;
        };

        link.set_rel("preload");
        link.set_href(&hint.href);
        link.set_as(hint.as_type);
        let _ = head.append_child(&link);
    }
}

fn promote_image(image: &Element, source: &str) {
    let _ = image.set_attribute("src", source);
    let _ = image.remove_attribute(DEFERRED_SOURCE_ATTRIBUTE);
    let _ = image.class_list().remove_1(LAZY_CLASS);
}

fn observe_lazy_images(site: &Site, page: &Page) -> Option<LazyImages> {
    let images = dom::query_all::<Element>(LAZY_IMAGE_SELECTOR);
    if images.is_empty() {
        return None;
    }

    let supported = window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false);

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }

                let image = entry.target();
                let deferred = image.get_attribute(DEFERRED_SOURCE_ATTRIBUTE);
                if let Some(source) = promoted_source(true, deferred) {
                    promote_image(&image, &source);
                }
                observer.unobserve(&image);
            }
        },
    );

    let observer = if supported {
        IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()
    } else {
        None
    };

    let Some(observer) = observer else {
        site.logger.event(
            LogLevel::Debug,
            "lazy_images_fallback",
            json!({ "images": images.len() }),
        );
        page.unobserved_images.replace(images);
        return None;
    };

    for image in &images {
        observer.observe(image);
    }

    Some(LazyImages {
        observer,
        _callback: callback,
    })
}

fn promote_visible_fallback_images(page: &Page) {
    let mut pending = page.unobserved_images.borrow_mut();
    if pending.is_empty() {
        return;
    }

    let (width, height) = viewport_size();
    pending.retain(|image| {
        if !is_in_viewport(bounding_rect(image), width, height) {
            return true;
        }

        if let Some(source) = promoted_source(true, image.get_attribute(DEFERRED_SOURCE_ATTRIBUTE)) {
            promote_image(image, &source);
        }
        false
    });
}
