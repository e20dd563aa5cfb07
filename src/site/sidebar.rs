use serde::{Deserialize, Serialize};

/// A sidebar entry: a page link, optionally carrying a collapsed sub-group.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SidebarItem {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SidebarItem>,
}

impl SidebarItem {
    pub fn link(text: &str, link: &str) -> Self {
        SidebarItem {
            text: text.to_string(),
            link: Some(link.to_string()),
            collapsed: None,
            items: Vec::new(),
        }
    }

    /// A linked entry with a collapsed sub-group beneath it
    pub fn group(text: &str, link: &str, items: Vec<SidebarItem>) -> Self {
        SidebarItem {
            text: text.to_string(),
            link: Some(link.to_string()),
            collapsed: Some(true),
            items,
        }
    }
}

/// A top-level sidebar section with a heading and its entries.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SidebarSection {
    pub text: String,
    pub items: Vec<SidebarItem>,
}

impl SidebarSection {
    pub fn new(text: &str, items: Vec<SidebarItem>) -> Self {
        SidebarSection {
            text: text.to_string(),
            items,
        }
    }
}

/// Full sidebar tree for the sley docs.
pub fn default_sidebar() -> Vec<SidebarSection> {
    vec![
        SidebarSection::new(
            "Guide",
            vec![
                SidebarItem::link("What is sley?", "/guide/what-is-sley"),
                SidebarItem::link("Quick Start", "/guide/quick-start"),
                SidebarItem::link("Tutorial", "/guide/tutorial"),
                SidebarItem::link("Installation", "/guide/installation"),
                SidebarItem::link("Usage", "/guide/usage"),
                SidebarItem::link("Pre-release Versions", "/guide/pre-release"),
                SidebarItem::group(
                    "Monorepo Support",
                    "/guide/monorepo/",
                    vec![
                        SidebarItem::link(
                            "Versioning Models",
                            "/guide/monorepo/versioning-models",
                        ),
                        SidebarItem::link("Configuration", "/guide/monorepo/configuration"),
                        SidebarItem::link("Workflows", "/guide/monorepo/workflows"),
                    ],
                ),
                SidebarItem::link("CI/CD Integration", "/guide/ci-cd"),
                SidebarItem::group(
                    "Troubleshooting",
                    "/guide/troubleshooting/",
                    vec![
                        SidebarItem::link(
                            ".version File Issues",
                            "/guide/troubleshooting/version-file",
                        ),
                        SidebarItem::link(
                            "Configuration Issues",
                            "/guide/troubleshooting/configuration",
                        ),
                        SidebarItem::link(
                            "Git & Tag Issues",
                            "/guide/troubleshooting/git-and-tags",
                        ),
                        SidebarItem::link("Plugin Errors", "/guide/troubleshooting/plugins"),
                        SidebarItem::link("CI/CD Issues", "/guide/troubleshooting/ci-cd"),
                        SidebarItem::link("Monorepo Issues", "/guide/troubleshooting/monorepo"),
                        SidebarItem::link("Advanced Topics", "/guide/troubleshooting/advanced"),
                    ],
                ),
            ],
        ),
        SidebarSection::new(
            "Plugins",
            vec![
                SidebarItem::link("Overview", "/plugins/"),
                SidebarItem::link("Commit Parser", "/plugins/commit-parser"),
                SidebarItem::link("Tag Manager", "/plugins/tag-manager"),
                SidebarItem::link("Changelog Generator", "/plugins/changelog-generator"),
                SidebarItem::link("Changelog Parser", "/plugins/changelog-parser"),
                SidebarItem::link("Version Validator", "/plugins/version-validator"),
                SidebarItem::link("Dependency Check", "/plugins/dependency-check"),
                SidebarItem::link("Release Gate", "/plugins/release-gate"),
                SidebarItem::link("Audit Log", "/plugins/audit-log"),
            ],
        ),
        SidebarSection::new(
            "Extensions",
            vec![
                SidebarItem::link("Overview", "/extensions/"),
                SidebarItem::link("Commit Validator", "/extensions/commit-validator"),
                SidebarItem::link("Docker Tag Sync", "/extensions/docker-tag-sync"),
                SidebarItem::link("GitHub Version Sync", "/extensions/github-version-sync"),
            ],
        ),
        SidebarSection::new(
            "Configuration",
            vec![
                SidebarItem::link("Overview", "/config/"),
                SidebarItem::link("Environment Variables", "/config/env-vars"),
            ],
        ),
        SidebarSection::new(
            "Reference",
            vec![
                SidebarItem::link("CLI", "/reference/cli"),
                SidebarItem::link(".sley.yaml", "/reference/sley-yaml"),
            ],
        ),
        SidebarSection::new(
            "Resources",
            vec![
                SidebarItem::link("Changelog", "/changelog"),
                SidebarItem::link("Contributing", "/contributing"),
            ],
        ),
    ]
}
