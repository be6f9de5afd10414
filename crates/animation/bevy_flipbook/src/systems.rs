use bevy::prelude::*;
use flipbook_core::{DrawSink, PollOutcome};

use crate::components::{HiddenByFlipbook, SpriteAnimator};
use crate::resources::FlipbookConfig;

/// Sent whenever an animator advances to another frame.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameChanged {
    pub entity: Entity,
    pub from: usize,
    pub to: usize,
}

/// Draw target that swaps a sprite's texture handle. Only writes (and so only
/// trips change detection) when the handle actually differs.
pub struct TextureSink<'w>(pub Mut<'w, Handle<Image>>);

impl DrawSink<Handle<Image>> for TextureSink<'_> {
    type Options = ();

    fn draw_image(&mut self, image: &Handle<Image>, _options: &()) {
        self.0.set_if_neq(image.clone());
    }
}

/// Poll every sprite animator against Bevy time, then draw its current image
/// into the entity's texture handle.
///
/// `SpriteAnimator` is only flagged as changed when it advances. Visibility is
/// only ever overridden to hide a sprite with nothing to show; a sprite the
/// game hid itself is left hidden.
pub fn poll_sprite_animators_system(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<FlipbookConfig>,
    mut frame_changed: EventWriter<FrameChanged>,
    mut animators: Query<(
        Entity,
        &mut SpriteAnimator,
        &mut Handle<Image>,
        Option<&mut Visibility>,
        Option<&HiddenByFlipbook>,
    )>,
) {
    let now = time.elapsed();
    for (entity, mut animator, texture, visibility, hidden_by_us) in &mut animators {
        let outcome = {
            let inner = animator.bypass_change_detection();
            inner.clock_mut().0 = now;
            inner.poll()
        };
        if let PollOutcome::Advanced { from, to } = outcome {
            animator.set_changed();
            trace!("{entity:?} frame {from} -> {to}");
            frame_changed.send(FrameChanged { entity, from, to });
        }

        let drawn = animator.draw(&mut TextureSink(texture), &());

        let Some(mut visibility) = visibility else {
            continue;
        };
        let want_hidden = config.hide_without_image && !drawn;
        match hidden_by_us {
            None if want_hidden && *visibility != Visibility::Hidden => {
                commands.entity(entity).insert(HiddenByFlipbook(*visibility));
                *visibility = Visibility::Hidden;
            }
            Some(&HiddenByFlipbook(previous)) if !want_hidden => {
                commands.entity(entity).remove::<HiddenByFlipbook>();
                visibility.set_if_neq(previous);
            }
            _ => {}
        }
    }
}
