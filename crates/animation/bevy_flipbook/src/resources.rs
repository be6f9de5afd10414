use bevy::prelude::*;

/// Adapter settings.
#[derive(Resource, Debug, Clone)]
pub struct FlipbookConfig {
    /// Hide sprites whose animator has no image to draw, and show them again
    /// once it does. When false, `Visibility` is never touched.
    pub hide_without_image: bool,
}

impl Default for FlipbookConfig {
    fn default() -> Self {
        Self {
            hide_without_image: true,
        }
    }
}
