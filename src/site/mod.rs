//! Declarative site structure
//!
//! Navigation and sidebar trees are plain data with no behavior: immutable
//! records assembled once per build and handed to the rendering host.

pub mod nav;
pub mod sidebar;

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use nav::NavItem;
use sidebar::SidebarSection;

/// Everything the rendering host needs for one build pass.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SiteData {
    pub version: String,
    pub config: SiteConfig,
    pub nav: Vec<NavItem>,
    pub sidebar: Vec<SidebarSection>,
}

impl SiteData {
    /// Assembles the site data from the loaded config and the version
    /// resolved once for this build.
    pub fn assemble(config: SiteConfig, version: &str) -> Self {
        SiteData {
            version: version.to_string(),
            nav: nav::default_nav(version),
            sidebar: sidebar::default_sidebar(),
            config,
        }
    }
}
