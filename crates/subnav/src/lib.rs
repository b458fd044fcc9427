//! Site navigation configuration.
//!
//! Models a website's navigation menu as an immutable, ordered sequence of
//! typed entries: plain links, one-level submenu groups, and dividers. The
//! data is authored as YAML or JSON (or compiled in via [`defaults`]),
//! validated fail-fast at load time, and exposed to an external rendering
//! layer through the read-only [`NavigationConfig`] accessor.

pub mod defaults;
pub mod entry;
pub mod error;
mod loader;
pub mod navigation;

pub use entry::{DIVIDER_MARKER, Link, LinkType, NavigationEntry, SubmenuGroup};
pub use error::{NavigationError, NavigationResult};
pub use navigation::NavigationConfig;
