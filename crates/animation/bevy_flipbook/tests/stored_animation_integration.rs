use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_flipbook::{FlipbookPlugin, SpriteAnimator};
use flipbook_core::{load_animation_json, Config};

/// it should load a stored walk cycle against host handles and play it on a sprite
#[test]
fn stored_walk_cycle_plays_on_a_sprite() {
    let json = flipbook_test_fixtures::animations::json("walk-cycle").expect("load walk-cycle");
    let mut atlas: HashMap<String, Handle<Image>> = HashMap::new();
    for (i, key) in ["hero_idle", "hero_walk_0", "hero_walk_1", "hero_walk_2", "hero_walk_3"]
        .iter()
        .enumerate()
    {
        atlas.insert(key.to_string(), Handle::weak_from_u128(100 + i as u128));
    }
    let anim = load_animation_json(&json, &mut atlas, &Config::default()).expect("resolve");
    assert_eq!(anim.total_duration(), Duration::from_millis(320));

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(FlipbookPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(20)));

    let sprite = app
        .world_mut()
        .spawn((Handle::<Image>::default(), SpriteAnimator::new(Arc::new(anim))))
        .id();

    // stopped: idle pose
    app.update();
    assert_eq!(
        app.world().get::<Handle<Image>>(sprite),
        Some(&atlas["hero_idle"])
    );

    app.world_mut()
        .get_mut::<SpriteAnimator>(sprite)
        .unwrap()
        .restart();
    for _ in 0..12 {
        app.update();
    }

    let texture = app.world().get::<Handle<Image>>(sprite).unwrap();
    let walk_frames: Vec<&Handle<Image>> = (0..4)
        .map(|i| &atlas[&format!("hero_walk_{i}")])
        .collect();
    assert!(walk_frames.contains(&texture));
    assert!(app
        .world()
        .get::<SpriteAnimator>(sprite)
        .unwrap()
        .is_playing());
}
