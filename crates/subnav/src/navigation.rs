//! Ordered, immutable navigation configuration.

use serde::Serialize;

use crate::entry::{Link, NavigationEntry};
use crate::error::{NavigationError, NavigationResult};

/// The ordered sequence of navigation entries exposed to the renderer.
///
/// Constructed once at startup, either from the compiled-in defaults or an
/// authored file, and read-only thereafter. Entry order is meaningful and
/// preserved exactly; repeated reads of [`entries`](Self::entries) always
/// yield the same sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationConfig {
    entries: Vec<NavigationEntry>,
}

impl NavigationConfig {
    /// Validate an entry sequence and wrap it.
    ///
    /// Fails fast on the first malformed entry: empty `text` or `url`, an
    /// empty submenu, or a malformed submenu link.
    pub fn new(entries: Vec<NavigationEntry>) -> NavigationResult<Self> {
        validate(&entries)?;
        Ok(Self { entries })
    }

    /// Wrap entries already known to satisfy the invariants.
    ///
    /// Used for the compiled-in defaults and for loader output that has
    /// been validated during resolution.
    pub(crate) fn from_valid(entries: Vec<NavigationEntry>) -> Self {
        Self { entries }
    }

    /// The entries, in render order.
    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the menu has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the top-level entries.
    pub fn iter(&self) -> std::slice::Iter<'_, NavigationEntry> {
        self.entries.iter()
    }

    /// Iterate over every link in order, descending through submenu groups.
    ///
    /// Dividers are skipped; a submenu group contributes its children in
    /// place of itself.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.entries.iter().flat_map(|entry| {
            let links: &[Link] = match entry {
                NavigationEntry::Link(link) => std::slice::from_ref(link),
                NavigationEntry::Submenu(group) => &group.submenu,
                NavigationEntry::Divider => &[],
            };
            links.iter()
        })
    }

    /// Serialize the entries to the YAML wire form.
    pub fn to_yaml(&self) -> NavigationResult<String> {
        Ok(serde_yml::to_string(&self.entries)?)
    }

    /// Serialize the entries to the JSON wire form.
    pub fn to_json(&self) -> NavigationResult<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

impl<'a> IntoIterator for &'a NavigationConfig {
    type Item = &'a NavigationEntry;
    type IntoIter = std::slice::Iter<'a, NavigationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Check the structural invariants of an already-typed entry sequence.
fn validate(entries: &[NavigationEntry]) -> NavigationResult<()> {
    for (index, entry) in entries.iter().enumerate() {
        match entry {
            NavigationEntry::Link(link) => {
                if link.text.is_empty() {
                    return Err(NavigationError::MissingField {
                        index,
                        field: "text",
                    });
                }
                if link.url.is_empty() {
                    return Err(NavigationError::MissingField { index, field: "url" });
                }
            }
            NavigationEntry::Submenu(group) => {
                if group.text.is_empty() {
                    return Err(NavigationError::MissingField {
                        index,
                        field: "text",
                    });
                }
                if group.submenu.is_empty() {
                    return Err(NavigationError::EmptySubmenu { index });
                }
                for (child, link) in group.submenu.iter().enumerate() {
                    if link.text.is_empty() {
                        return Err(NavigationError::MissingSubmenuField {
                            index,
                            child,
                            field: "text",
                        });
                    }
                    if link.url.is_empty() {
                        return Err(NavigationError::MissingSubmenuField {
                            index,
                            child,
                            field: "url",
                        });
                    }
                }
            }
            NavigationEntry::Divider => {}
        }
    }
    Ok(())
}
