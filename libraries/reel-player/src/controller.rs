//! Playback controller - the navigation and playback state machine
//!
//! Sole owner of "which item is currently loaded and playing" and the sole
//! authority on whether previous/next navigation is legal. Drives the
//! platform media session and notifies the embedder's delegate on play
//! transitions.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::delegate::PlaybackDelegate;
use crate::navigation::NavigationVisibility;
use crate::session::MediaSession;
use crate::source::{PlaylistDataSource, VecDataSource};
use crate::types::{ItemDisplay, PlayerConfig, PlaylistItem};

/// Core playback state machine
///
/// All operations run on the embedder's single UI/event thread; nothing
/// here blocks, spawns, or locks. The media session handle is exclusively
/// owned: each successful load supersedes the previous looping session,
/// which is also the only cancellation mechanism.
pub struct PlaybackController {
    config: PlayerConfig,

    /// Platform media facility, exclusively owned
    session: Box<dyn MediaSession>,

    /// Item supplier, owned by the embedding application
    data_source: Option<Rc<dyn PlaylistDataSource>>,

    /// Embedder callback for play transitions
    delegate: Option<Rc<RefCell<dyn PlaybackDelegate>>>,

    /// Position within the attached source; meaningful only while a
    /// non-empty source is attached
    current_index: usize,

    /// Item currently handed to the media session
    current_item: Option<PlaylistItem>,

    /// Whether the player is the visible screen (set by the embedder)
    visible: bool,
}

impl PlaybackController {
    /// Create a controller driving `session`
    pub fn new(session: Box<dyn MediaSession>, config: PlayerConfig) -> Self {
        Self {
            config,
            session,
            data_source: None,
            delegate: None,
            current_index: 0,
            current_item: None,
            visible: false,
        }
    }

    /// Controller configuration
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Attach the item source
    ///
    /// Call [`PlaybackController::reload_data`] afterwards to load the
    /// first item.
    pub fn set_data_source(&mut self, source: Rc<dyn PlaylistDataSource>) {
        self.data_source = Some(source);
    }

    /// Detach the item source, leaving the controller inert
    ///
    /// Nothing remains loaded and both navigation controls read hidden.
    pub fn clear_data_source(&mut self) {
        self.data_source = None;
        self.current_index = 0;
        self.current_item = None;
    }

    /// Attach the embedder's delegate
    pub fn set_delegate(&mut self, delegate: Rc<RefCell<dyn PlaybackDelegate>>) {
        self.delegate = Some(delegate);
    }

    /// Reset to the start of the attached source and load its first item
    ///
    /// An absent or empty source is a valid quiescent state, not a
    /// failure: nothing loads and both navigation controls read hidden.
    /// Does not start playback.
    pub fn reload_data(&mut self) {
        self.current_index = 0;
        if !self.load_item_at(0) {
            self.current_item = None;
            debug!("reload found no items; player is quiescent");
        }
    }

    /// Jump directly to `index` without starting playback
    ///
    /// Returns false and leaves all state unchanged when no source is
    /// attached or `index` is out of range.
    pub fn set_current_index(&mut self, index: usize) -> bool {
        self.load_item_at(index)
    }

    /// Load the item at `index`, the primitive behind every navigation
    ///
    /// On success the index, current item, display projection, and
    /// navigation visibility all reflect the new position before this
    /// returns; a caller observing true never sees stale text paired with
    /// a new resource. Never starts playback and never fires the delegate.
    fn load_item_at(&mut self, index: usize) -> bool {
        let Some(source) = self.data_source.clone() else {
            return false;
        };
        if index >= source.len() {
            return false;
        }
        let Some(item) = source.item(index) else {
            return false;
        };

        if let Err(error) = self.session.load_looping(&item.resource_locator) {
            // Media-layer failures are opaque to the navigation core: the
            // session handles (or swallows) them and position advances.
            warn!(%error, locator = %item.resource_locator, "media session rejected resource");
        }

        self.current_index = index;
        self.current_item = Some(item);
        debug!(index, "loaded playlist item");
        true
    }

    /// Step to the previous item and resume playback
    ///
    /// At the start of the playlist, or with nothing attached, this is a
    /// silent no-op: no wraparound, no error, no delegate call.
    pub fn previous(&mut self) {
        let Some(target) = self.current_index.checked_sub(1) else {
            debug!("previous at start of playlist ignored");
            return;
        };
        if self.load_item_at(target) {
            self.play();
        }
    }

    /// Step to the next item and resume playback
    ///
    /// At the end of the playlist, or with nothing attached, this is a
    /// silent no-op: no wraparound, no error, no delegate call.
    pub fn next(&mut self) {
        if self.load_item_at(self.current_index + 1) {
            self.play();
        }
    }

    /// Start playback of the loaded item
    ///
    /// The delegate's `will_play` fires exactly once, strictly before the
    /// media session is told to start. With nothing loaded this is a
    /// no-op and the delegate stays silent.
    pub fn play(&mut self) {
        let Some(item) = self.current_item.clone() else {
            return;
        };
        if let Some(delegate) = &self.delegate {
            delegate.borrow_mut().will_play(&item, self.current_index);
        }
        self.session.play();
    }

    /// Pause playback
    ///
    /// Unconditional; safe to call when nothing is loaded.
    pub fn pause(&mut self) {
        self.session.pause();
    }

    /// Push-based entry point: load a single video
    ///
    /// Installs a singleton source and loads it without starting playback.
    /// Both navigation controls read hidden.
    pub fn prepare_single(&mut self, item: PlaylistItem) -> bool {
        self.data_source = Some(Rc::new(VecDataSource::single(item)));
        self.current_index = 0;
        self.load_item_at(0)
    }

    /// Push-based entry point: attach an explicit playlist and load `item`
    ///
    /// The playlist must be non-empty and contain an entry naming the same
    /// resource locator as `item`; otherwise nothing changes and false is
    /// returned. Loading does not start playback.
    pub fn prepare_with_playlist(&mut self, item: &PlaylistItem, playlist: VecDataSource) -> bool {
        let Some(index) = playlist.position_of(item) else {
            return false;
        };
        self.data_source = Some(Rc::new(playlist));
        self.load_item_at(index)
    }

    /// Position within the attached source
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Item currently handed to the media session, if any
    pub fn current_item(&self) -> Option<&PlaylistItem> {
        self.current_item.as_ref()
    }

    /// Display projection for the rendering layer
    ///
    /// `None` while nothing is loaded.
    pub fn display(&self) -> Option<ItemDisplay> {
        self.current_item.as_ref().map(ItemDisplay::for_item)
    }

    /// Previous/next control visibility, recomputed from current state
    pub fn navigation(&self) -> NavigationVisibility {
        NavigationVisibility::project(
            self.data_source.as_ref().map(|source| source.len()),
            self.current_index,
        )
    }

    /// Whether the embedder has marked the player visible
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Mark whether the player is the visible screen
    ///
    /// Feeds [`crate::types::LifecycleScope::VisibleOnly`] forwarding.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
