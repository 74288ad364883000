//! Playback delegate capability

use crate::types::PlaylistItem;

/// Embedder callback for play transitions
///
/// `will_play` is a commitment signal, not a completion signal: it fires
/// exactly once immediately before the media session is told to start,
/// never on pause and never on a failed navigation attempt.
pub trait PlaybackDelegate {
    /// About to play `item`, currently at `index` in the playlist
    fn will_play(&mut self, item: &PlaylistItem, index: usize);
}
