//! Core types for the looping player

use serde::{Deserialize, Serialize};
use url::Url;

/// One playable unit in a playlist
///
/// An immutable value: a remote media locator plus the three display
/// strings rendered over the video. Items are created and owned by the
/// embedding application; the player only ever clones or borrows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// Remote media locator (stable identity key)
    pub resource_locator: Url,

    /// Title line
    pub title: String,

    /// Subtitle line (may be empty)
    pub subtitle: String,

    /// Credit line (may be empty)
    pub credit: String,
}

impl PlaylistItem {
    /// Create a new item
    pub fn new(
        resource_locator: Url,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        credit: impl Into<String>,
    ) -> Self {
        Self {
            resource_locator,
            title: title.into(),
            subtitle: subtitle.into(),
            credit: credit.into(),
        }
    }

    /// Whether two items name the same playlist entry
    ///
    /// Navigation identity is the resource locator alone; display strings
    /// do not participate.
    pub fn same_entry(&self, other: &PlaylistItem) -> bool {
        self.resource_locator == other.resource_locator
    }
}

/// Display projection consumed by the rendering layer
///
/// Derived from the currently loaded item; never constructed by the
/// embedder directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDisplay {
    /// Title text
    pub title: String,

    /// Subtitle text
    pub subtitle: String,

    /// Credit text, never empty (see [`ItemDisplay::for_item`])
    pub credit: String,
}

impl ItemDisplay {
    /// Project an item into its display strings
    ///
    /// An empty credit becomes a single blank space so the credit line
    /// keeps its height in the rendering layer. Title and subtitle pass
    /// through unmodified.
    pub(crate) fn for_item(item: &PlaylistItem) -> Self {
        Self {
            title: item.title.clone(),
            subtitle: item.subtitle.clone(),
            credit: if item.credit.is_empty() {
                " ".to_string()
            } else {
                item.credit.clone()
            },
        }
    }
}

/// Scope for app-lifecycle forwarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleScope {
    /// Forward became-active/resign-active regardless of whether the
    /// player is the visible screen
    Global,

    /// Forward only while the player is marked visible
    VisibleOnly,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Lifecycle forwarding scope (default: Global)
    pub lifecycle_scope: LifecycleScope,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            lifecycle_scope: LifecycleScope::Global,
        }
    }
}
