// tests/inject_test.rs
use sley_docs::inject::{inject_version, InjectVersion, VERSION_PLACEHOLDER};
use sley_docs::pipeline::{BuildPlugin, RenderedPage};

#[test]
fn test_placeholder_token() {
    assert_eq!(VERSION_PLACEHOLDER, "__VERSION__");
}

#[test]
fn test_single_occurrence() {
    let (out, count) = inject_version("Current release: __VERSION__", "1.4.0");
    assert_eq!(out, "Current release: 1.4.0");
    assert_eq!(count, 1);
}

#[test]
fn test_no_placeholder_is_noop() {
    let (out, count) = inject_version("Hello world", "1.4.0");
    assert_eq!(out, "Hello world");
    assert_eq!(count, 0);
}

#[test]
fn test_every_occurrence_replaced() {
    let text = "<title>sley __VERSION__</title>\n<footer>__VERSION__</footer>";
    let (out, count) = inject_version(text, "0.9.2");
    assert_eq!(out, "<title>sley 0.9.2</title>\n<footer>0.9.2</footer>");
    assert_eq!(count, 2);
}

#[test]
fn test_adjacent_occurrences() {
    let (out, count) = inject_version("__VERSION____VERSION__", "1.0.0");
    assert_eq!(out, "1.0.01.0.0");
    assert_eq!(count, 2);
}

#[test]
fn test_partial_token_left_alone() {
    let text = "__VERSION and VERSION__ and __version__";
    let (out, count) = inject_version(text, "1.0.0");
    assert_eq!(out, text);
    assert_eq!(count, 0);
}

#[test]
fn test_plugin_over_typical_page() {
    let plugin = InjectVersion::new("1.4.0");
    let mut page = RenderedPage::new(
        "dist/index.html",
        "<html><body><span class=\"badge\">v__VERSION__</span></body></html>",
    );

    let count = plugin.apply(&mut page).unwrap();
    assert_eq!(count, 1);
    assert_eq!(
        page.contents,
        "<html><body><span class=\"badge\">v1.4.0</span></body></html>"
    );
}

#[test]
fn test_plugin_name_is_stable() {
    let plugin = InjectVersion::new("1.4.0");
    assert_eq!(plugin.name(), "inject-version");
    assert_eq!(plugin.version(), "1.4.0");
}
