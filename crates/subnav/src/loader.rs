//! Two-phase navigation file loading.
//!
//! Phase one parses the authored YAML or JSON permissively: an entry is
//! either a bare marker string or a mapping with every field optional. Phase
//! two resolves each raw entry into a typed [`NavigationEntry`], rejecting
//! malformed entries with an error naming the offending index. Nothing is
//! skipped or repaired; a broken menu fails loudly at load time.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::entry::{DIVIDER_MARKER, Link, LinkType, NavigationEntry, SubmenuGroup};
use crate::error::{NavigationError, NavigationResult};
use crate::navigation::NavigationConfig;

/// Raw wire form of a top-level entry.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Marker(String),
    Item(RawItem),
}

/// Permissive mapping form; required fields are enforced during resolution.
#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default, rename = "type")]
    link_type: Option<LinkType>,
    #[serde(default)]
    submenu: Option<Vec<RawChild>>,
}

#[derive(Debug, Deserialize)]
struct RawChild {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default, rename = "type")]
    link_type: Option<LinkType>,
    // Captured only to reject illegal nesting with a precise error.
    #[serde(default)]
    submenu: Option<serde_json::Value>,
}

impl NavigationConfig {
    /// Parse navigation entries from YAML.
    pub fn from_yaml(yaml: &str) -> NavigationResult<Self> {
        let raw: Vec<RawEntry> = serde_yml::from_str(yaml)?;
        resolve_entries(raw)
    }

    /// Parse navigation entries from JSON.
    pub fn from_json(json: &str) -> NavigationResult<Self> {
        let raw: Vec<RawEntry> = serde_json::from_str(json)?;
        resolve_entries(raw)
    }

    /// Load navigation entries from a `.yml`, `.yaml`, or `.json` file.
    pub fn load(path: &Path) -> NavigationResult<Self> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        if !matches!(extension, "yml" | "yaml" | "json") {
            return Err(NavigationError::UnsupportedFormat(extension.to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = if extension == "json" {
            Self::from_json(&content)?
        } else {
            Self::from_yaml(&content)?
        };

        info!(path = %path.display(), entries = config.len(), "Loaded navigation config");

        Ok(config)
    }
}

/// Resolve a raw entry sequence into a validated configuration.
fn resolve_entries(raw: Vec<RawEntry>) -> NavigationResult<NavigationConfig> {
    let entries = raw
        .into_iter()
        .enumerate()
        .map(|(index, raw)| resolve_entry(index, raw))
        .collect::<NavigationResult<Vec<_>>>()?;

    debug!(entries = entries.len(), "resolved navigation entries");

    Ok(NavigationConfig::from_valid(entries))
}

fn resolve_entry(index: usize, raw: RawEntry) -> NavigationResult<NavigationEntry> {
    match raw {
        RawEntry::Marker(marker) if marker == DIVIDER_MARKER => Ok(NavigationEntry::Divider),
        RawEntry::Marker(marker) => Err(NavigationError::UnknownMarker { index, marker }),
        RawEntry::Item(item) => resolve_item(index, item),
    }
}

fn resolve_item(index: usize, item: RawItem) -> NavigationResult<NavigationEntry> {
    let text = match item.text {
        Some(text) if !text.is_empty() => text,
        _ => {
            return Err(NavigationError::MissingField {
                index,
                field: "text",
            });
        }
    };

    match (item.url, item.submenu) {
        (Some(_), Some(_)) => Err(NavigationError::AmbiguousEntry { index }),
        (Some(url), None) => {
            if url.is_empty() {
                return Err(NavigationError::MissingField { index, field: "url" });
            }
            let link_type = item.link_type.unwrap_or_else(|| LinkType::infer(&url));
            Ok(NavigationEntry::Link(Link {
                text,
                url,
                link_type,
            }))
        }
        (None, Some(children)) => {
            if children.is_empty() {
                return Err(NavigationError::EmptySubmenu { index });
            }
            let submenu = children
                .into_iter()
                .enumerate()
                .map(|(child, raw)| resolve_child(index, child, raw))
                .collect::<NavigationResult<Vec<_>>>()?;
            Ok(NavigationEntry::Submenu(SubmenuGroup { text, submenu }))
        }
        (None, None) => Err(NavigationError::MissingField { index, field: "url" }),
    }
}

fn resolve_child(index: usize, child: usize, raw: RawChild) -> NavigationResult<Link> {
    if raw.submenu.is_some() {
        return Err(NavigationError::NestedSubmenu { index, child });
    }

    let text = match raw.text {
        Some(text) if !text.is_empty() => text,
        _ => {
            return Err(NavigationError::MissingSubmenuField {
                index,
                child,
                field: "text",
            });
        }
    };

    let url = match raw.url {
        Some(url) if !url.is_empty() => url,
        _ => {
            return Err(NavigationError::MissingSubmenuField {
                index,
                child,
                field: "url",
            });
        }
    };

    let link_type = raw.link_type.unwrap_or_else(|| LinkType::infer(&url));

    Ok(Link {
        text,
        url,
        link_type,
    })
}
