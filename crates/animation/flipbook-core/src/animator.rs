//! Animator: the playback cursor over a shared [`Animation`].
//!
//! The host polls once per tick and then reads [`Animator::image`] or calls
//! [`Animator::draw`]. Nothing here returns an error; unbound, stopped or
//! stale cursors degrade to no-ops so a render loop is never interrupted.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::data::Animation;
use crate::render::DrawSink;
use crate::time::{Clock, SystemClock};

/// Playback state of an animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Showing the animation's default image; polls do nothing.
    Stopped,
    /// Cursor points at a frame and advances with time.
    Playing,
}

impl PlaybackState {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Playing => "playing",
        }
    }
}

/// What a single poll did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PollOutcome {
    /// Unbound, stopped, or the cursor is outside the animation.
    Idle,
    /// Still inside the current frame's duration.
    Held { frame: usize },
    /// Moved to the next frame (wrapping) and ran its hooks.
    Advanced { from: usize, to: usize },
}

/// Playback cursor bound to at most one animation.
#[derive(Clone, Debug)]
pub struct Animator<I, C = SystemClock> {
    animation: Option<Arc<Animation<I>>>,
    /// `None` while stopped.
    cursor: Option<usize>,
    /// Clock time of the last advance; ZERO means never advanced.
    last_advance: Duration,
    last_image: Option<I>,
    clock: C,
}

impl<I> Animator<I, SystemClock> {
    /// Stopped animator bound to `animation`, timed by the wall clock.
    pub fn new(animation: Arc<Animation<I>>) -> Self {
        Self::with_clock(Some(animation), SystemClock::new())
    }

    /// Stopped animator with nothing bound.
    pub fn unbound() -> Self {
        Self::with_clock(None, SystemClock::new())
    }
}

impl<I, C: Clock> Animator<I, C> {
    pub fn with_clock(animation: Option<Arc<Animation<I>>>, clock: C) -> Self {
        Self {
            animation,
            cursor: None,
            last_advance: Duration::ZERO,
            last_image: None,
            clock,
        }
    }

    /// Jump to frame 0 from any state. The advance timestamp is kept, so the
    /// next poll measures elapsed time from the previous advance.
    pub fn restart(&mut self) {
        log::debug!("animator restart");
        self.cursor = Some(0);
    }

    pub fn stop(&mut self) {
        log::debug!("animator stop");
        self.cursor = None;
    }

    /// Rebind to `animation` (or unbind), stop, and forget the advance timestamp.
    pub fn reset(&mut self, animation: Option<Arc<Animation<I>>>) {
        log::debug!(
            "animator reset (frames: {})",
            animation.as_ref().map_or(0, |a| a.len())
        );
        self.last_advance = Duration::ZERO;
        self.animation = animation;
        self.cursor = None;
    }

    /// Image to show right now, without touching playback state.
    pub fn image(&self) -> Option<&I> {
        let animation = self.animation.as_deref()?;
        if animation.is_empty() {
            return None;
        }
        let Some(index) = self.cursor else {
            return animation.default_image();
        };
        let frame = animation.frame(index)?;
        frame.image.as_ref().or(self.last_image.as_ref())
    }

    /// Hand the current image to `sink`. Returns `false`, without calling the
    /// sink, when there is nothing to show.
    pub fn draw<S>(&self, sink: &mut S, options: &S::Options) -> bool
    where
        S: DrawSink<I>,
    {
        match self.image() {
            Some(image) => {
                sink.draw_image(image, options);
                true
            }
            None => false,
        }
    }

    /// Sum of the bound animation's frame durations; zero when unbound.
    pub fn duration(&self) -> Duration {
        self.animation
            .as_deref()
            .map(Animation::total_duration)
            .unwrap_or_default()
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        match self.cursor {
            Some(_) => PlaybackState::Playing,
            None => PlaybackState::Stopped,
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.cursor.is_some()
    }

    #[inline]
    pub fn frame_index(&self) -> Option<usize> {
        self.cursor
    }

    #[inline]
    pub fn animation(&self) -> Option<&Arc<Animation<I>>> {
        self.animation.as_ref()
    }

    #[inline]
    pub fn last_advance(&self) -> Duration {
        self.last_advance
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// For hosts that stamp their own frame time into the clock before polling.
    #[inline]
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

impl<I: Clone, C: Clock> Animator<I, C> {
    /// Per-tick update against the animator's own clock.
    pub fn poll(&mut self) -> PollOutcome {
        let now = self.clock.now();
        self.poll_at(now)
    }

    /// Per-tick update at an explicit time on the same timeline as previous
    /// polls. Hosts with their own frame clock call this directly.
    pub fn poll_at(&mut self, now: Duration) -> PollOutcome {
        let Some(animation) = self.animation.as_ref() else {
            return PollOutcome::Idle;
        };
        let Some(index) = self.cursor.filter(|&i| i < animation.len()) else {
            return PollOutcome::Idle;
        };

        let current = &animation.frames()[index];
        // Cached before the hold check, and even when empty: an image-less
        // frame clears the fallback on the tick after it is entered.
        self.last_image = current.image.clone();

        if now.saturating_sub(self.last_advance) < current.duration {
            return PollOutcome::Held { frame: index };
        }

        self.last_advance = now;
        let next = (index + 1) % animation.len();
        self.cursor = Some(next);
        log::trace!("animator advance {index} -> {next} at {now:?}");

        animation.frames()[next].run_hooks();
        PollOutcome::Advanced {
            from: index,
            to: next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;

    const MS: Duration = Duration::from_millis(1);

    fn three_frames() -> Arc<Animation<char>> {
        let mut anim = Animation::new();
        anim.set_default(Some('d'))
            .add(MS * 10, Some('a'), vec![])
            .add(MS * 10, Some('b'), vec![])
            .add(MS * 10, Some('c'), vec![]);
        Arc::new(anim)
    }

    #[test]
    fn state_follows_cursor() {
        let mut a = Animator::with_clock(Some(three_frames()), ManualClock::new());
        assert_eq!(a.state(), PlaybackState::Stopped);
        a.restart();
        assert_eq!(a.state(), PlaybackState::Playing);
        assert_eq!(a.frame_index(), Some(0));
        a.stop();
        assert_eq!(a.state().name(), "stopped");
    }

    #[test]
    fn poll_at_ignores_own_clock() {
        let mut a = Animator::with_clock(Some(three_frames()), ManualClock::new());
        a.restart();
        assert_eq!(a.poll_at(MS * 5), PollOutcome::Held { frame: 0 });
        assert_eq!(
            a.poll_at(MS * 10),
            PollOutcome::Advanced { from: 0, to: 1 }
        );
        assert_eq!(a.last_advance(), MS * 10);
        assert_eq!(a.clock().now(), Duration::ZERO);
    }

    #[test]
    fn poll_reads_a_clock_stamped_through_clock_mut() {
        #[derive(Default)]
        struct Stamped(Duration);
        impl Clock for Stamped {
            fn now(&self) -> Duration {
                self.0
            }
        }

        let mut a = Animator::with_clock(Some(three_frames()), Stamped::default());
        a.restart();
        a.clock_mut().0 = MS * 10;
        assert_eq!(a.poll(), PollOutcome::Advanced { from: 0, to: 1 });
        assert_eq!(a.last_advance(), MS * 10);
    }

    #[test]
    fn clock_behind_last_advance_holds() {
        let mut a = Animator::with_clock(Some(three_frames()), ManualClock::new());
        a.restart();
        a.poll_at(MS * 50);
        assert_eq!(a.poll_at(MS * 20), PollOutcome::Held { frame: 1 });
    }
}
