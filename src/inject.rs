use crate::error::Result;
use crate::pipeline::{BuildPlugin, RenderedPage};

/// Literal marker replaced with the live version in rendered output.
pub const VERSION_PLACEHOLDER: &str = "__VERSION__";

/// Replaces every occurrence of [`VERSION_PLACEHOLDER`] in `text` with
/// `version`.
///
/// Pure text substitution: no other characters are altered, and text
/// without the placeholder comes back unchanged. Returns the rewritten text
/// together with the number of occurrences replaced.
pub fn inject_version(text: &str, version: &str) -> (String, usize) {
    let count = text.matches(VERSION_PLACEHOLDER).count();
    if count == 0 {
        return (text.to_string(), 0);
    }
    (text.replace(VERSION_PLACEHOLDER, version), count)
}

/// Build plugin that stamps the resolved package version into pages.
///
/// Holds the version resolved once at construction; the plugin itself is
/// immutable for the whole build, so every page reports the same version
/// even under a parallel rendering host.
pub struct InjectVersion {
    version: String,
}

impl InjectVersion {
    pub fn new(version: impl Into<String>) -> Self {
        InjectVersion {
            version: version.into(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl BuildPlugin for InjectVersion {
    fn name(&self) -> &str {
        "inject-version"
    }

    fn apply(&self, page: &mut RenderedPage) -> Result<usize> {
        let (rewritten, count) = inject_version(&page.contents, &self.version);
        if count > 0 {
            page.contents = rewritten;
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inject_replaces_placeholder() {
        let (out, count) = inject_version("Current release: __VERSION__", "1.4.0");
        assert_eq!(out, "Current release: 1.4.0");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_inject_replaces_every_occurrence() {
        let (out, count) = inject_version("__VERSION__ and again __VERSION__", "2.0.0");
        assert_eq!(out, "2.0.0 and again 2.0.0");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_inject_without_placeholder_is_noop() {
        let (out, count) = inject_version("Hello world", "1.4.0");
        assert_eq!(out, "Hello world");
        assert_eq!(count, 0);
    }

    #[test]
    fn test_inject_leaves_surrounding_text_untouched() {
        let text = "<a href=\"/changelog\">v__VERSION__</a>\n\t<p>unrelated</p>";
        let (out, count) = inject_version(text, "1.4.0");
        assert_eq!(out, "<a href=\"/changelog\">v1.4.0</a>\n\t<p>unrelated</p>");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_inject_empty_text() {
        let (out, count) = inject_version("", "1.4.0");
        assert_eq!(out, "");
        assert_eq!(count, 0);
    }

    #[test]
    fn test_plugin_applies_to_page() {
        let plugin = InjectVersion::new("1.4.0");
        let mut page = RenderedPage::new("index.html", "Current release: __VERSION__");

        let count = plugin.apply(&mut page).unwrap();
        assert_eq!(count, 1);
        assert_eq!(page.contents, "Current release: 1.4.0");
    }

    #[test]
    fn test_plugin_noop_page_unchanged() {
        let plugin = InjectVersion::new("1.4.0");
        let mut page = RenderedPage::new("about.html", "Hello world");

        let count = plugin.apply(&mut page).unwrap();
        assert_eq!(count, 0);
        assert_eq!(page.contents, "Hello world");
    }

    #[test]
    fn test_plugin_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InjectVersion>();
    }
}
