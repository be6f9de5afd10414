use bevy::prelude::*;

pub mod components;
pub mod resources;
pub mod systems;

pub use components::{FrameTime, HiddenByFlipbook, SpriteAnimation, SpriteAnimator};
pub use resources::FlipbookConfig;
pub use systems::{poll_sprite_animators_system, FrameChanged, TextureSink};

/// Set containing the animator poll; order gameplay systems against it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlipbookSystems;

pub struct FlipbookPlugin;

impl Plugin for FlipbookPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FlipbookConfig>()
            .add_event::<FrameChanged>()
            .add_systems(
                Update,
                poll_sprite_animators_system.in_set(FlipbookSystems),
            );
    }
}
