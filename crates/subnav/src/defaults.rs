//! Compiled-in navigation data for the site's main menu.

use crate::entry::{Link, NavigationEntry, SubmenuGroup};
use crate::navigation::NavigationConfig;

/// The site's main navigation menu.
///
/// Product links first, then the externally-hosted section after the
/// divider. Link types are inferred from the URLs: relative paths are
/// inbound routes, absolute URLs are outbound.
pub fn main_menu() -> NavigationConfig {
    NavigationConfig::from_valid(vec![
        NavigationEntry::Link(Link::new("Overview", "/")),
        NavigationEntry::Submenu(SubmenuGroup {
            text: "Use Cases".to_string(),
            submenu: vec![
                Link::new("Edge Compute", "/use-cases/edge-compute"),
                Link::new(
                    "Simple Container Orchestration",
                    "/use-cases/simple-container-orchestration",
                ),
                Link::new(
                    "Non-Containerized Application Orchestration",
                    "/use-cases/non-containerized-application-orchestration",
                ),
            ],
        }),
        NavigationEntry::Link(Link::new(
            "Enterprise",
            "https://www.hashicorp.com/products/nomad/",
        )),
        NavigationEntry::Divider,
        NavigationEntry::Link(Link::new("Tutorials", "https://learn.hashicorp.com/nomad")),
        NavigationEntry::Link(Link::new("Docs", "/docs")),
        NavigationEntry::Link(Link::new("API", "/api-docs")),
        NavigationEntry::Link(Link::new("Community", "/community")),
    ])
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn main_menu_passes_validation() {
        let entries = main_menu().entries().to_vec();
        assert!(NavigationConfig::new(entries).is_ok());
    }

    #[test]
    fn main_menu_has_one_divider() {
        assert_eq!(
            main_menu().iter().filter(|entry| entry.is_divider()).count(),
            1
        );
    }
}
