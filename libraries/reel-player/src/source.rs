//! Playlist data source capability
//!
//! The embedding application supplies the ordered item collection; the
//! player only queries count and indexed lookup and never owns the data.

use crate::types::PlaylistItem;

/// Pull-based supplier of playlist items
///
/// Implemented by the embedding application. The set of items may change
/// between calls; the player re-queries the count on every operation and
/// never caches it across a reload.
pub trait PlaylistDataSource {
    /// Number of items currently available
    fn len(&self) -> usize;

    /// Whether the source has no items
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Item at `index`, or `None` outside `0..len()`
    ///
    /// Must be stable for the duration of a single reload or navigation
    /// call (no reentrant mutation mid-call).
    fn item(&self, index: usize) -> Option<PlaylistItem>;
}

/// Ordered in-memory playlist
///
/// The push-based convenience source for embedders that hand over an
/// explicit item array instead of implementing [`PlaylistDataSource`]
/// themselves.
#[derive(Debug, Clone, Default)]
pub struct VecDataSource {
    items: Vec<PlaylistItem>,
}

impl VecDataSource {
    /// Create a source over an explicit item array
    pub fn new(items: Vec<PlaylistItem>) -> Self {
        Self { items }
    }

    /// Source holding exactly one item
    pub fn single(item: PlaylistItem) -> Self {
        Self { items: vec![item] }
    }

    /// Index of the entry naming the same playlist entry as `item`
    ///
    /// Identity is the resource locator (see [`PlaylistItem::same_entry`]).
    pub fn position_of(&self, item: &PlaylistItem) -> Option<usize> {
        self.items.iter().position(|candidate| candidate.same_entry(item))
    }
}

impl PlaylistDataSource for VecDataSource {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn item(&self, index: usize) -> Option<PlaylistItem> {
        self.items.get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn item(path: &str) -> PlaylistItem {
        PlaylistItem::new(
            Url::parse(&format!("https://media.example.com/{path}")).unwrap(),
            "Title",
            "Subtitle",
            "Credit",
        )
    }

    #[test]
    fn indexed_lookup() {
        let source = VecDataSource::new(vec![item("a.mp4"), item("b.mp4")]);

        assert_eq!(source.len(), 2);
        assert!(!source.is_empty());
        assert_eq!(source.item(1), Some(item("b.mp4")));
        assert_eq!(source.item(2), None);
    }

    #[test]
    fn empty_source() {
        let source = VecDataSource::default();

        assert_eq!(source.len(), 0);
        assert!(source.is_empty());
        assert_eq!(source.item(0), None);
    }

    #[test]
    fn position_by_locator_identity() {
        let source = VecDataSource::new(vec![item("a.mp4"), item("b.mp4")]);

        // Same locator, different display text: still the same entry.
        let mut renamed = item("b.mp4");
        renamed.title = "Renamed".to_string();
        assert_eq!(source.position_of(&renamed), Some(1));

        assert_eq!(source.position_of(&item("missing.mp4")), None);
    }
}
