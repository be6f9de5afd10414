//! Track definition: frames, hooks and the animation that owns them.
//!
//! An [`Animation`] is built by one owner through the fluent `&mut Self`
//! methods and then shared read-only (usually as `Arc<Animation<I>>`) by any
//! number of [`Animator`](crate::Animator)s. `I` is the host's image handle.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::error::FlipbookError;

/// Zero-argument callback fired when playback arrives at a frame.
pub type Hook = Arc<dyn Fn() + Send + Sync>;

/// Wrap a closure as a [`Hook`].
pub fn hook<F>(f: F) -> Hook
where
    F: Fn() + Send + Sync + 'static,
{
    Arc::new(f)
}

/// One timed step of an animation.
#[derive(Clone)]
pub struct Frame<I> {
    /// How long this frame stays current before the next poll advances.
    pub duration: Duration,
    /// `None` reuses whichever image the animator resolved last.
    pub image: Option<I>,
    /// Run in order each time playback transitions into this frame.
    pub hooks: Vec<Hook>,
}

impl<I> Frame<I> {
    pub fn new(duration: Duration, image: Option<I>) -> Self {
        Self {
            duration,
            image,
            hooks: Vec::new(),
        }
    }

    pub fn with_hooks(mut self, hooks: Vec<Hook>) -> Self {
        self.hooks = hooks;
        self
    }

    pub(crate) fn run_hooks(&self) {
        for run_hook in &self.hooks {
            run_hook();
        }
    }
}

impl<I: fmt::Debug> fmt::Debug for Frame<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("duration", &self.duration)
            .field("image", &self.image)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

/// Ordered frames plus the image shown while an animator is stopped.
#[derive(Clone, Debug)]
pub struct Animation<I> {
    default_image: Option<I>,
    frames: Vec<Frame<I>>,
}

impl<I> Default for Animation<I> {
    fn default() -> Self {
        Self {
            default_image: None,
            frames: Vec::new(),
        }
    }
}

impl<I> Animation<I> {
    /// No frames, no default image. Valid, but never yields an image.
    pub fn new() -> Self {
        Self::default()
    }

    /// One frame per image, all lasting `interval`, no hooks. The first image
    /// also becomes the default. Returns `None` for an empty image list.
    pub fn fixed<It>(interval: Duration, images: It) -> Option<Self>
    where
        It: IntoIterator<Item = I>,
        I: Clone,
    {
        Self::try_fixed(interval, images).ok()
    }

    /// Like [`Animation::fixed`], reporting the empty case as an error.
    pub fn try_fixed<It>(interval: Duration, images: It) -> Result<Self, FlipbookError>
    where
        It: IntoIterator<Item = I>,
        I: Clone,
    {
        let frames: Vec<Frame<I>> = images
            .into_iter()
            .map(|img| Frame::new(interval, Some(img)))
            .collect();
        let default_image = frames
            .first()
            .and_then(|f| f.image.clone())
            .ok_or(FlipbookError::NoImages)?;

        Ok(Self {
            default_image: Some(default_image),
            frames,
        })
    }

    pub fn set_default(&mut self, image: Option<I>) -> &mut Self {
        self.default_image = image;
        self
    }

    /// Append a frame.
    pub fn add(&mut self, duration: Duration, image: Option<I>, hooks: Vec<Hook>) -> &mut Self {
        self.push_frame(Frame::new(duration, image).with_hooks(hooks))
    }

    pub fn push_frame(&mut self, frame: Frame<I>) -> &mut Self {
        self.frames.push(frame);
        self
    }

    #[inline]
    pub fn default_image(&self) -> Option<&I> {
        self.default_image.as_ref()
    }

    #[inline]
    pub fn frames(&self) -> &[Frame<I>] {
        &self.frames
    }

    #[inline]
    pub fn frame(&self, index: usize) -> Option<&Frame<I>> {
        self.frames.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Sum of all frame durations.
    pub fn total_duration(&self) -> Duration {
        self.frames.iter().map(|f| f.duration).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn fixed_builds_one_frame_per_image() {
        let anim = Animation::fixed(MS * 40, ["a", "b", "c"]).unwrap();
        assert_eq!(anim.len(), 3);
        assert_eq!(anim.default_image(), Some(&"a"));
        for (frame, img) in anim.frames().iter().zip(["a", "b", "c"]) {
            assert_eq!(frame.duration, MS * 40);
            assert_eq!(frame.image, Some(img));
            assert!(frame.hooks.is_empty());
        }
    }

    #[test]
    fn fixed_rejects_empty_input_but_new_allows_it() {
        assert!(Animation::<&str>::fixed(MS, []).is_none());
        assert_eq!(
            Animation::<&str>::try_fixed(MS, Vec::new()).unwrap_err(),
            FlipbookError::NoImages
        );

        let empty = Animation::<&str>::new();
        assert!(empty.is_empty());
        assert_eq!(empty.default_image(), None);
    }

    #[test]
    fn builder_chains() {
        let mut anim = Animation::new();
        anim.set_default(Some(7u32))
            .add(MS * 10, Some(1), vec![])
            .add(MS * 20, None, vec![hook(|| {})])
            .push_frame(Frame::new(MS * 5, Some(3)));

        assert_eq!(anim.default_image(), Some(&7));
        assert_eq!(anim.len(), 3);
        assert_eq!(anim.frame(1).map(|f| f.hooks.len()), Some(1));
        assert_eq!(anim.total_duration(), MS * 35);
    }

    #[test]
    fn hooks_run_in_declaration_order() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let count = Arc::new(AtomicUsize::new(0));
        let (a, b, c) = (seen.clone(), seen.clone(), count.clone());
        let frame = Frame::new(MS, Some(0u8)).with_hooks(vec![
            hook(move || a.lock().unwrap().push("first")),
            hook(move || b.lock().unwrap().push("second")),
            hook(move || {
                c.fetch_add(1, Ordering::SeqCst);
            }),
        ]);

        frame.run_hooks();
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
