//! Error types for animation construction and loading.
//!
//! Playback itself never fails: an unbound or stopped animator simply does
//! nothing. Only building an [`Animation`](crate::Animation) from
//! external input can go wrong.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FlipbookError {
    /// A fixed-interval animation was requested with no images.
    #[error("fixed animation requires at least one image")]
    NoImages,

    /// The stored animation document could not be parsed.
    #[error("parse error: {reason}")]
    Parse { reason: String },

    /// A frame or default image key has no matching host image.
    #[error("unknown image key '{key}'")]
    UnknownImage { key: String },

    /// The document has more frames than the configured limit.
    #[error("animation has {count} frames (limit: {limit})")]
    TooManyFrames { count: usize, limit: usize },
}

impl From<serde_json::Error> for FlipbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}
