//! Reel Player - Looping Video Player Core
//!
//! Embeddable full-screen looping video player: single items and ordered
//! playlists, previous/next navigation, and suspend/resume on app
//! lifecycle signals.
//!
//! This crate provides:
//! - Playlist navigation state machine with boundary-safe previous/next
//! - Pull-based data source capability (count + indexed lookup)
//! - Push-based convenience playlists layered over the pull-based core
//! - Display projection (title/subtitle/credit) for the rendering layer
//! - Previous/next control visibility derived from position
//! - App-lifecycle forwarding with RAII subscriptions
//!
//! # Architecture
//!
//! `reel-player` is completely platform-agnostic:
//! - No GUI toolkit dependency
//! - No media decode, buffering, or looping pipeline
//!
//! The platform's looping video facility is provided via the
//! [`MediaSession`] trait; the item collection via [`PlaylistDataSource`].
//! Everything runs on the embedder's single UI/event thread - no locks,
//! no internal threads, nothing blocks.
//!
//! # Example: Navigating a playlist
//!
//! ```rust
//! use std::rc::Rc;
//! use reel_player::{
//!     MediaSession, PlaybackController, PlayerConfig, PlaylistItem, VecDataSource,
//! };
//! use url::Url;
//!
//! // Implement MediaSession for your platform's player facility
//! struct NoopSession;
//!
//! impl MediaSession for NoopSession {
//!     fn load_looping(&mut self, _locator: &Url) -> reel_player::Result<()> {
//!         Ok(())
//!     }
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//! }
//!
//! let mut player = PlaybackController::new(Box::new(NoopSession), PlayerConfig::default());
//!
//! let items = vec![
//!     PlaylistItem::new(
//!         Url::parse("https://media.example.com/one.mp4").unwrap(),
//!         "One", "First clip", "Studio A",
//!     ),
//!     PlaylistItem::new(
//!         Url::parse("https://media.example.com/two.mp4").unwrap(),
//!         "Two", "Second clip", "",
//!     ),
//! ];
//! player.set_data_source(Rc::new(VecDataSource::new(items)));
//! player.reload_data();
//!
//! assert_eq!(player.current_index(), 0);
//! assert!(player.navigation().previous_hidden);
//!
//! player.next();
//! assert_eq!(player.current_index(), 1);
//! assert!(player.navigation().next_hidden);
//!
//! // Past the end: silent no-op, no wraparound.
//! player.next();
//! assert_eq!(player.current_index(), 1);
//! ```
//!
//! # Example: Lifecycle forwarding
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use reel_player::{
//!     LifecycleBridge, LifecycleHub, LifecycleSignal, MediaSession, PlaybackController,
//!     PlayerConfig,
//! };
//! use url::Url;
//!
//! struct NoopSession;
//! impl MediaSession for NoopSession {
//!     fn load_looping(&mut self, _locator: &Url) -> reel_player::Result<()> { Ok(()) }
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//! }
//!
//! let hub = LifecycleHub::new();
//! let player = Rc::new(RefCell::new(PlaybackController::new(
//!     Box::new(NoopSession),
//!     PlayerConfig::default(),
//! )));
//!
//! // Subscribed until the bridge is dropped.
//! let bridge = LifecycleBridge::install(&hub, Rc::clone(&player));
//!
//! // The platform posts these on foreground/background transitions.
//! hub.post(LifecycleSignal::WillResignActive);
//! hub.post(LifecycleSignal::BecameActive);
//!
//! drop(bridge);
//! assert_eq!(hub.observer_count(), 0);
//! ```

mod controller;
mod delegate;
mod error;
mod lifecycle;
mod navigation;
mod session;
mod source;
pub mod types;

// Public exports
pub use controller::PlaybackController;
pub use delegate::PlaybackDelegate;
pub use error::{MediaError, Result};
pub use lifecycle::{LifecycleBridge, LifecycleHub, LifecycleSignal, LifecycleSubscription};
pub use navigation::NavigationVisibility;
pub use session::MediaSession;
pub use source::{PlaylistDataSource, VecDataSource};
pub use types::{ItemDisplay, LifecycleScope, PlayerConfig, PlaylistItem};
