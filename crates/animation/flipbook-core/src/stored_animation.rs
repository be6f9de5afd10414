use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::data::Animation;
use crate::error::FlipbookError;

/// Maps image keys used in stored documents to host image handles.
pub trait ImageResolver<I> {
    fn resolve(&mut self, key: &str) -> Option<I>;
}

impl<I: Clone> ImageResolver<I> for HashMap<String, I> {
    fn resolve(&mut self, key: &str) -> Option<I> {
        self.get(key).cloned()
    }
}

/// Sprite track document (see fixtures/animations/*.json).
///
/// Notes:
/// - Durations are signed milliseconds; negative values clamp to zero.
/// - Bare string frames use `interval`, or `Config::default_interval_ms` when absent.
/// - Without `default`, the first frame's image becomes the default image.
/// - Hooks cannot be stored; attach them in code after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAnimation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub interval: Option<i64>,
    pub frames: Vec<StoredFrame>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredFrame {
    /// Image key shown for the document interval.
    Key(String),
    /// Explicit duration; no image means "keep the last one".
    Timed {
        duration: i64,
        #[serde(default)]
        image: Option<String>,
    },
}

/// Public API: parse a stored sprite animation document.
pub fn parse_stored_animation_json(s: &str) -> Result<StoredAnimation, FlipbookError> {
    Ok(serde_json::from_str(s)?)
}

/// Parse and resolve in one go.
pub fn load_animation_json<I, R>(
    s: &str,
    resolver: &mut R,
    cfg: &Config,
) -> Result<Animation<I>, FlipbookError>
where
    I: Clone,
    R: ImageResolver<I> + ?Sized,
{
    parse_stored_animation_json(s)?.resolve(resolver, cfg)
}

impl StoredAnimation {
    /// Build an [`Animation`] by looking up every image key in `resolver`.
    pub fn resolve<I, R>(
        &self,
        resolver: &mut R,
        cfg: &Config,
    ) -> Result<Animation<I>, FlipbookError>
    where
        I: Clone,
        R: ImageResolver<I> + ?Sized,
    {
        if self.frames.len() > cfg.max_frames {
            return Err(FlipbookError::TooManyFrames {
                count: self.frames.len(),
                limit: cfg.max_frames,
            });
        }

        let interval = match self.interval {
            Some(ms) => clamp_millis(ms),
            None => Duration::from_millis(cfg.default_interval_ms),
        };

        let mut animation = Animation::new();
        for frame in &self.frames {
            let (duration, key) = match frame {
                StoredFrame::Key(key) => (interval, Some(key.as_str())),
                StoredFrame::Timed { duration, image } => {
                    (clamp_millis(*duration), image.as_deref())
                }
            };
            let image = key.map(|k| lookup(resolver, k)).transpose()?;
            animation.add(duration, image, Vec::new());
        }

        let default_image = match self.default.as_deref() {
            Some(key) => Some(lookup(resolver, key)?),
            None => animation.frame(0).and_then(|f| f.image.clone()),
        };
        animation.set_default(default_image);

        log::debug!(
            "loaded stored animation '{}' ({} frames, {:?})",
            self.name,
            animation.len(),
            animation.total_duration()
        );
        Ok(animation)
    }
}

fn lookup<I, R>(resolver: &mut R, key: &str) -> Result<I, FlipbookError>
where
    R: ImageResolver<I> + ?Sized,
{
    resolver
        .resolve(key)
        .ok_or_else(|| FlipbookError::UnknownImage {
            key: key.to_string(),
        })
}

fn clamp_millis(ms: i64) -> Duration {
    Duration::from_millis(ms.max(0).unsigned_abs())
}
