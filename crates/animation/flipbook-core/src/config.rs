//! Core configuration for flipbook-core.

use serde::{Deserialize, Serialize};

/// Settings for loading stored animation documents. Missing JSON fields take
/// the defaults below.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interval (ms) for bare image-key frames when a document omits `interval`.
    pub default_interval_ms: u64,

    /// Documents with more frames than this are rejected.
    pub max_frames: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_interval_ms: 100,
            max_frames: 4096,
        }
    }
}
