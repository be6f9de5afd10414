use std::sync::Arc;
use std::time::Duration;

use bevy::prelude::*;
use flipbook_core::{Animation, Animator, Clock};

/// Sprite animation track keyed by Bevy image handles.
pub type SpriteAnimation = Animation<Handle<Image>>;

/// Bevy's `Time::elapsed` as of the last poll. Stamped by the plugin before
/// each poll, so `poll()` from a gameplay system stays on the same timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameTime(pub(crate) Duration);

impl Clock for FrameTime {
    #[inline]
    fn now(&self) -> Duration {
        self.0
    }
}

/// Playback cursor for the sprite texture on the same entity.
#[derive(Component, Deref, DerefMut)]
pub struct SpriteAnimator(pub Animator<Handle<Image>, FrameTime>);

impl SpriteAnimator {
    /// Stopped; shows the animation's default image.
    pub fn new(animation: Arc<SpriteAnimation>) -> Self {
        Self(Animator::with_clock(Some(animation), FrameTime::default()))
    }

    /// Already restarted at frame 0.
    pub fn playing(animation: Arc<SpriteAnimation>) -> Self {
        let mut animator = Self::new(animation);
        animator.restart();
        animator
    }

    pub fn unbound() -> Self {
        Self(Animator::with_clock(None, FrameTime::default()))
    }
}

/// Present while the plugin is the one hiding the sprite. Holds the
/// visibility to put back once the animator has an image again.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenByFlipbook(pub Visibility);
