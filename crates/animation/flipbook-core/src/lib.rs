//! Flipbook core (engine-agnostic)
//!
//! Frame-sequencing for sprite animation: an [`Animation`] is an ordered list
//! of timed frames, and an [`Animator`] walks it as wall-clock time passes,
//! wrapping at the end and firing per-frame hooks on arrival. Images are
//! opaque host handles; drawing goes through a [`DrawSink`].

pub mod animator;
pub mod config;
pub mod data;
pub mod error;
pub mod render;
pub mod stored_animation;
pub mod time;

// Re-exports for consumers (adapters)
pub use animator::{Animator, PlaybackState, PollOutcome};
pub use config::Config;
pub use data::{hook, Animation, Frame, Hook};
pub use error::FlipbookError;
pub use render::DrawSink;
pub use stored_animation::{
    load_animation_json, parse_stored_animation_json, ImageResolver, StoredAnimation, StoredFrame,
};
pub use time::{Clock, ManualClock, SystemClock};
