//! Eight-frame strip at eight frames per second.
//!
//! Starts stopped, so nothing is shown until Space restarts it.
//! Space: restart, S: stop, Q: quit.

use std::sync::Arc;
use std::time::Duration;

use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy_flipbook::{FlipbookPlugin, SpriteAnimation, SpriteAnimator};

const FRAMES: u32 = 8;
const FRAME_SIZE: u32 = 32;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(ImagePlugin::default_nearest()))
        .add_plugins(FlipbookPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, controls)
        .run();
}

/// A lit column sweeping left to right, one band per frame.
fn frame_image(index: u32) -> Image {
    let band = FRAME_SIZE / FRAMES;
    let mut data = Vec::with_capacity((FRAME_SIZE * FRAME_SIZE * 4) as usize);
    for _y in 0..FRAME_SIZE {
        for x in 0..FRAME_SIZE {
            let texel: [u8; 4] = if x / band == index {
                [250, 210, 80, 255]
            } else {
                [40, 40, 60, 255]
            };
            data.extend_from_slice(&texel);
        }
    }
    Image::new(
        Extent3d {
            width: FRAME_SIZE,
            height: FRAME_SIZE,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

fn setup(mut commands: Commands, mut images: ResMut<Assets<Image>>) {
    let frames: Vec<Handle<Image>> = (0..FRAMES).map(|i| images.add(frame_image(i))).collect();
    let Some(animation) = SpriteAnimation::fixed(Duration::from_secs(1) / FRAMES, frames.clone())
    else {
        return;
    };

    commands.spawn(Camera2dBundle::default());
    commands.spawn((
        SpriteBundle {
            texture: frames[0].clone(),
            transform: Transform::from_scale(Vec3::splat(4.0)),
            ..default()
        },
        SpriteAnimator::new(Arc::new(animation)),
    ));
    info!("press Space to play, S to stop, Q to quit");
}

fn controls(
    keys: Res<ButtonInput<KeyCode>>,
    mut animators: Query<&mut SpriteAnimator>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::KeyQ) {
        exit.send(AppExit::Success);
        return;
    }
    for mut animator in &mut animators {
        if keys.just_pressed(KeyCode::Space) {
            info!("restarting animator");
            animator.restart();
        }
        if keys.just_pressed(KeyCode::KeyS) {
            info!("stopping animator");
            animator.stop();
        }
    }
}
