use serde::{Deserialize, Serialize};

/// One entry in the top navigation bar.
///
/// Either a direct link or a labeled dropdown of child items.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NavItem {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavItem>,
}

impl NavItem {
    /// Link entry
    pub fn link(text: &str, link: &str) -> Self {
        NavItem {
            text: text.to_string(),
            link: Some(link.to_string()),
            items: Vec::new(),
        }
    }

    /// Dropdown entry
    pub fn group(text: &str, items: Vec<NavItem>) -> Self {
        NavItem {
            text: text.to_string(),
            link: None,
            items,
        }
    }
}

/// Top navigation for the sley docs.
///
/// The last entry is the version dropdown: its label is the version
/// resolved for this build (already normalized at resolution time).
pub fn default_nav(version: &str) -> Vec<NavItem> {
    vec![
        NavItem::link("Guide", "/guide/quick-start"),
        NavItem::link("Plugins", "/plugins/"),
        NavItem::link("Extensions", "/extensions/"),
        NavItem::link("Configuration", "/config/"),
        NavItem::link("Reference", "/reference/cli"),
        NavItem::group(
            version,
            vec![
                NavItem::link("Changelog", "/changelog"),
                NavItem::link("Contributing", "/contributing"),
            ],
        ),
    ]
}
