//! Platform media session boundary

use url::Url;

use crate::error::Result;

/// Opaque platform facility that loads, loops, plays and pauses one
/// resource at a time
///
/// Loading a new resource supersedes the previous one; the swap must be
/// atomic from the caller's viewpoint. Buffering and decode latency are
/// internal to the implementation: `play` may be issued immediately after
/// `load_looping` and must queue correctly on the media layer.
pub trait MediaSession {
    /// Load `locator` muted, looping seamlessly
    ///
    /// Does not start playback. The player does not wait on buffering and
    /// is not notified of completion.
    fn load_looping(&mut self, locator: &Url) -> Result<()>;

    /// Start or resume playback of the loaded resource
    fn play(&mut self);

    /// Pause playback
    ///
    /// Safe to call when nothing is loaded.
    fn pause(&mut self);
}
