//! Navigation entry model.
//!
//! Represents the entries of a site navigation menu: plain links, one-level
//! submenu groups, and divider markers between sections. Entries are authored
//! as YAML or JSON where a divider is the bare string `"divider"` and links
//! carry `text`/`url`/`type` keys.

use serde::{Deserialize, Serialize};
use url::Url;

/// Wire marker for a divider entry.
pub const DIVIDER_MARKER: &str = "divider";

/// Navigation behavior hint for a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    /// Client-side route within the application.
    Inbound,
    /// Full page navigation to an external destination.
    Outbound,
}

impl LinkType {
    /// Infer the link type from a URL when the author omitted it.
    ///
    /// A URL with a scheme (`https://…`, `mailto:…`) is outbound; a relative
    /// path is inbound. An explicit `type` in the authored data always wins
    /// over inference.
    pub fn infer(url: &str) -> Self {
        if Url::parse(url).is_ok() {
            LinkType::Outbound
        } else {
            LinkType::Inbound
        }
    }
}

/// A single navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Display label.
    pub text: String,

    /// Target path or absolute URL.
    pub url: String,

    /// Navigation behavior hint.
    #[serde(rename = "type")]
    pub link_type: LinkType,
}

impl Link {
    /// Build a link, inferring the type from the URL.
    pub fn new(text: &str, url: &str) -> Self {
        Self {
            text: text.to_string(),
            url: url.to_string(),
            link_type: LinkType::infer(url),
        }
    }

    /// Build a link with an explicit type.
    pub fn with_type(text: &str, url: &str, link_type: LinkType) -> Self {
        Self {
            text: text.to_string(),
            url: url.to_string(),
            link_type,
        }
    }
}

/// A one-level-deep group of links under a parent label.
///
/// Children are plain links; groups never nest further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmenuGroup {
    /// Group label.
    pub text: String,

    /// Child links, in render order.
    pub submenu: Vec<Link>,
}

/// A single entry in the navigation sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEntry {
    /// A plain navigation link.
    Link(Link),
    /// A labeled group of child links.
    Submenu(SubmenuGroup),
    /// A visual separator between sections; carries no data.
    Divider,
}

impl NavigationEntry {
    /// Get the link if this entry is one.
    pub fn as_link(&self) -> Option<&Link> {
        match self {
            NavigationEntry::Link(link) => Some(link),
            _ => None,
        }
    }

    /// Get the submenu group if this entry is one.
    pub fn as_submenu(&self) -> Option<&SubmenuGroup> {
        match self {
            NavigationEntry::Submenu(group) => Some(group),
            _ => None,
        }
    }

    /// Whether this entry is a divider.
    pub fn is_divider(&self) -> bool {
        matches!(self, NavigationEntry::Divider)
    }

    /// The display label, if the entry has one.
    pub fn text(&self) -> Option<&str> {
        match self {
            NavigationEntry::Link(link) => Some(&link.text),
            NavigationEntry::Submenu(group) => Some(&group.text),
            NavigationEntry::Divider => None,
        }
    }
}

impl Serialize for NavigationEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            NavigationEntry::Link(link) => link.serialize(serializer),
            NavigationEntry::Submenu(group) => group.serialize(serializer),
            NavigationEntry::Divider => serializer.serialize_str(DIVIDER_MARKER),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    // ── Type inference ─────────────────────────────────────────────

    #[test]
    fn infer_relative_path_is_inbound() {
        assert_eq!(LinkType::infer("/docs"), LinkType::Inbound);
        assert_eq!(LinkType::infer("/"), LinkType::Inbound);
        assert_eq!(LinkType::infer("community"), LinkType::Inbound);
    }

    #[test]
    fn infer_absolute_url_is_outbound() {
        assert_eq!(
            LinkType::infer("https://www.hashicorp.com/products/nomad/"),
            LinkType::Outbound
        );
        assert_eq!(LinkType::infer("http://example.com"), LinkType::Outbound);
        assert_eq!(LinkType::infer("mailto:hello@example.com"), LinkType::Outbound);
    }

    #[test]
    fn link_new_infers_type() {
        assert_eq!(Link::new("Docs", "/docs").link_type, LinkType::Inbound);
        assert_eq!(
            Link::new("Tutorials", "https://learn.hashicorp.com/nomad").link_type,
            LinkType::Outbound
        );
    }

    #[test]
    fn with_type_overrides_inference() {
        let link = Link::with_type("Legacy", "/old-docs", LinkType::Outbound);
        assert_eq!(link.link_type, LinkType::Outbound);
    }

    // ── Wire serialization ─────────────────────────────────────────

    #[test]
    fn link_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(LinkType::Inbound).unwrap(),
            serde_json::json!("inbound")
        );
        assert_eq!(
            serde_json::to_value(LinkType::Outbound).unwrap(),
            serde_json::json!("outbound")
        );
    }

    #[test]
    fn divider_serializes_as_marker_string() {
        let value = serde_json::to_value(NavigationEntry::Divider).unwrap();
        assert_eq!(value, serde_json::json!("divider"));
    }

    #[test]
    fn link_serializes_with_type_key() {
        let value = serde_json::to_value(NavigationEntry::Link(Link::new("Docs", "/docs"))).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"text": "Docs", "url": "/docs", "type": "inbound"})
        );
    }

    #[test]
    fn submenu_serializes_children_in_order() {
        let group = SubmenuGroup {
            text: "Use Cases".to_string(),
            submenu: vec![Link::new("First", "/a"), Link::new("Second", "/b")],
        };
        let value = serde_json::to_value(NavigationEntry::Submenu(group)).unwrap();
        assert_eq!(value["text"], "Use Cases");
        assert_eq!(value["submenu"][0]["url"], "/a");
        assert_eq!(value["submenu"][1]["url"], "/b");
    }

    // ── Accessors ──────────────────────────────────────────────────

    #[test]
    fn entry_accessors() {
        let link = NavigationEntry::Link(Link::new("Docs", "/docs"));
        assert!(link.as_link().is_some());
        assert!(link.as_submenu().is_none());
        assert!(!link.is_divider());
        assert_eq!(link.text(), Some("Docs"));

        assert!(NavigationEntry::Divider.is_divider());
        assert_eq!(NavigationEntry::Divider.text(), None);
    }
}
