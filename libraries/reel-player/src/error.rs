//! Error types for the media boundary

use thiserror::Error;

/// Errors surfaced by a platform media session
///
/// The navigation core treats these as opaque: a failed load is logged and
/// playback state advances regardless. Recovery is the media layer's
/// responsibility.
#[derive(Debug, Error)]
pub enum MediaError {
    /// The session could not accept the resource
    #[error("failed to load media resource: {0}")]
    Load(String),

    /// The backend rejected a transport command
    #[error("media backend error: {0}")]
    Backend(String),
}

/// Result type for media session operations
pub type Result<T> = std::result::Result<T, MediaError>;
