pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const DEFERRED_SOURCE_ATTRIBUTE: &str = "data-src";

/// Source to promote for an observed image, if any. Non-intersecting
/// entries and images without a deferred source are left alone.
pub fn promoted_source(is_intersecting: bool, deferred: Option<String>) -> Option<String> {
    if !is_intersecting {
        return None;
    }

    deferred
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreloadHint {
    pub href: String,
    pub as_type: &'static str,
}

impl PreloadHint {
    pub fn for_resource(href: &str) -> Option<Self> {
        let as_type = preload_kind(href)?;
        Some(Self {
            href: href.to_string(),
            as_type,
        })
    }
}

/// Value for the `as` attribute, inferred from the path's extension.
pub fn preload_kind(href: &str) -> Option<&'static str> {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    let extension = path.rsplit_once('.')?.1.to_ascii_lowercase();

    match extension.as_str() {
        "css" => Some("style"),
        "js" | "mjs" => Some("script"),
        "woff" | "woff2" | "ttf" | "otf" => Some("font"),
        "png" | "jpg" | "jpeg" | "gif" | "webp" | "avif" | "svg" => Some("image"),
        _ => None,
    }
}

pub fn preload_hints(resources: &[String]) -> Vec<PreloadHint> {
    resources
        .iter()
        .filter_map(|href| PreloadHint::for_resource(href))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersecting_image_promotes_its_deferred_source() {
        assert_eq!(
            promoted_source(true, Some("/img/a.webp".to_string())),
            Some("/img/a.webp".to_string())
        );
    }

    #[test]
    fn offscreen_or_sourceless_images_stay_deferred() {
        assert_eq!(promoted_source(false, Some("/img/a.webp".to_string())), None);
        assert_eq!(promoted_source(true, None), None);
        assert_eq!(promoted_source(true, Some("  ".to_string())), None);
    }

    #[test]
    fn preload_kind_follows_extension() {
        assert_eq!(preload_kind("/styles.css"), Some("style"));
        assert_eq!(preload_kind("/app.JS?v=3"), Some("script"));
        assert_eq!(preload_kind("/fonts/inter.woff2#x"), Some("font"));
        assert_eq!(preload_kind("/images/profile.jpg"), Some("image"));
        assert_eq!(preload_kind("/resume"), None);
    }

    #[test]
    fn unknown_resources_are_skipped() {
        let hints = preload_hints(&["/styles.css".to_string(), "/data.bin".to_string()]);

        assert_eq!(
            hints,
            vec![PreloadHint { href: "/styles.css".to_string(), as_type: "style" }]
        );
    }
}
