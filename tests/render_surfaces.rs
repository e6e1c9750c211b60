mod common;

use std::f32::consts::PI;

use bevy::prelude::*;
use common::{click, headless_app};
use wheel_of_fortune::core::components::{
    PointerSurface, PointerVisual, SurfaceVisual, WheelFace, WheelSegment, WheelSurface,
};
use wheel_of_fortune::core::config::parse_color;
use wheel_of_fortune::rendering::wheel::{segment_arcs, sector_mesh_rotation, WheelRedraw};
use wheel_of_fortune::WheelConfig;

type SegmentSnapshot = Vec<(usize, Color, [f32; 4], Entity)>;

fn segments(app: &mut App) -> SegmentSnapshot {
    let mut q = app
        .world_mut()
        .query::<(&WheelSegment, &MeshMaterial2d<ColorMaterial>, &Transform, &ChildOf)>();
    let materials = app.world().resource::<Assets<ColorMaterial>>();
    let mut out: SegmentSnapshot = q
        .iter(app.world())
        .map(|(seg, mat, tf, parent)| {
            let color = materials.get(&mat.0).expect("segment material").color;
            (seg.index, color, tf.rotation.to_array(), parent.parent())
        })
        .collect();
    out.sort_by_key(|s| s.0);
    out
}

fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
    let mut q = app.world_mut().query_filtered::<Entity, F>();
    q.iter(app.world()).count()
}

fn single<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> Entity {
    let mut q = app.world_mut().query_filtered::<Entity, F>();
    q.single(app.world()).expect("exactly one entity")
}

#[test]
fn initial_render_draws_face_segments_and_pointer() {
    let mut app = headless_app(WheelConfig::default());
    assert_eq!(count::<With<WheelFace>>(&mut app), 1);
    assert_eq!(count::<With<WheelSegment>>(&mut app), 6);
    assert_eq!(count::<With<PointerVisual>>(&mut app), 1);
    assert_eq!(count::<With<SurfaceVisual>>(&mut app), 8);
}

#[test]
fn segment_colours_follow_config_order_in_60_degree_wedges() {
    let mut cfg = WheelConfig::default();
    cfg.wheel.sectors = ["#ff0000", "#00ff00", "#0000ff", "white", "black", "gold"]
        .into_iter()
        .map(String::from)
        .collect();
    let sectors = cfg.wheel.sectors.clone();
    let mut app = headless_app(cfg);

    let wheel = single::<With<WheelSurface>>(&mut app);
    let arcs = segment_arcs(6, PI / 3.0);
    let segs = segments(&mut app);
    assert_eq!(segs.len(), 6);
    for (i, (index, color, rotation, parent)) in segs.iter().enumerate() {
        assert_eq!(*index, i);
        assert_eq!(*color, parse_color(&sectors[i]).unwrap());
        let expected = sector_mesh_rotation(arcs[i]);
        assert!(Quat::from_array(*rotation).abs_diff_eq(expected, 1e-6));
        assert_eq!(*parent, wheel, "segments are drawn on the wheel surface");
    }
}

#[test]
fn render_is_idempotent() {
    let mut app = headless_app(WheelConfig::default());
    let strip = |s: SegmentSnapshot| -> Vec<(usize, Color, [f32; 4])> {
        s.into_iter().map(|(i, c, r, _)| (i, c, r)).collect()
    };
    let first = strip(segments(&mut app));

    app.world_mut().send_event(WheelRedraw);
    app.update();
    app.world_mut().send_event(WheelRedraw);
    app.update();

    let second = strip(segments(&mut app));
    assert_eq!(first, second);
    assert_eq!(count::<With<SurfaceVisual>>(&mut app), 8, "old visuals cleared");
}

#[test]
fn pointer_is_drawn_on_the_unrotated_overlay() {
    let mut app = headless_app(WheelConfig::default());
    click(&mut app);
    for _ in 0..5 {
        app.update();
    }
    let pointer_surface = single::<With<PointerSurface>>(&mut app);
    let pointer = single::<With<PointerVisual>>(&mut app);
    let parent = app
        .world()
        .get::<ChildOf>(pointer)
        .expect("pointer has a parent")
        .parent();
    assert_eq!(parent, pointer_surface);
    let tf = app.world().get::<Transform>(pointer_surface).unwrap();
    assert_eq!(tf.rotation, Quat::IDENTITY);

    let wheel = single::<With<WheelSurface>>(&mut app);
    let wheel_tf = app.world().get::<Transform>(wheel).unwrap();
    assert_ne!(wheel_tf.rotation, Quat::IDENTITY, "wheel turned");
}

#[test]
fn bad_colour_renders_black() {
    let mut cfg = WheelConfig::default();
    cfg.wheel.sectors[1] = "not-a-colour".into();
    let mut app = headless_app(cfg);
    let segs = segments(&mut app);
    assert_eq!(segs[1].1, Color::BLACK);
}

#[test]
fn even_segments_share_the_circle() {
    let mut cfg = WheelConfig::default();
    cfg.wheel.sectors = vec!["red".into(); 4];
    cfg.wheel.even_segments = true;
    let mut app = headless_app(cfg);
    let segs = segments(&mut app);
    let arcs = segment_arcs(4, PI / 2.0);
    assert_eq!(segs.len(), 4);
    for (i, seg) in segs.iter().enumerate() {
        let expected = sector_mesh_rotation(arcs[i]);
        assert!(Quat::from_array(seg.2).abs_diff_eq(expected, 1e-6));
    }
}
