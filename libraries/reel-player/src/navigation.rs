//! Previous/next affordance projection

use serde::{Deserialize, Serialize};

/// Hidden/shown state for the previous and next controls
///
/// A stateless projection of controller state, recomputed on demand and
/// never cached independently of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationVisibility {
    /// Whether the previous control is hidden
    pub previous_hidden: bool,

    /// Whether the next control is hidden
    pub next_hidden: bool,
}

impl NavigationVisibility {
    /// Both controls hidden: no source attached, or nothing to navigate to
    pub(crate) const HIDDEN: Self = Self {
        previous_hidden: true,
        next_hidden: true,
    };

    /// Visibility for `current_index` within a source of `source_len` items
    ///
    /// `source_len` is `None` when no data source is attached. Previous is
    /// hidden at the start of the playlist, next at the end; an absent or
    /// empty source hides both.
    pub fn project(source_len: Option<usize>, current_index: usize) -> Self {
        match source_len {
            None | Some(0) => Self::HIDDEN,
            Some(len) => Self {
                previous_hidden: current_index == 0,
                next_hidden: current_index + 1 >= len,
            },
        }
    }
}
