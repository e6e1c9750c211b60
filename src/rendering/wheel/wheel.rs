use bevy::prelude::*;

use super::geometry::{sector_mesh_rotation, segment_arcs, SegmentArc};
use crate::core::components::{
    PointerSurface, PointerVisual, SurfaceVisual, WheelFace, WheelSegment, WheelSurface,
};
use crate::core::config::color::color_or_black;
use crate::core::config::WheelConfig;
use crate::core::system::system_order::WheelRenderSet;

// Pointer overlay sits above the whole wheel.
const POINTER_Z: f32 = 10.0;
// Later segments stack over earlier ones, like successive canvas fills.
const SEGMENT_Z_STEP: f32 = 0.001;

/// Request to clear and redraw both drawing surfaces.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct WheelRedraw;

/// Meshes and materials built once from the configuration; every redraw
/// reuses these handles.
#[derive(Resource, Debug, Clone)]
pub struct WheelAssets {
    pub face_mesh: Handle<Mesh>,
    pub face_material: Handle<ColorMaterial>,
    pub sector_mesh: Handle<Mesh>,
    pub sector_materials: Vec<Handle<ColorMaterial>>,
    pub pointer_mesh: Handle<Mesh>,
    pub pointer_material: Handle<ColorMaterial>,
    pub arcs: Vec<SegmentArc>,
}

pub struct WheelRenderPlugin;

impl Plugin for WheelRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<WheelRedraw>()
            .add_systems(
                Startup,
                (prepare_wheel_assets, spawn_surfaces, render_initial).chain(),
            )
            .add_systems(Update, render_on_request.in_set(WheelRenderSet));
    }
}

pub fn prepare_wheel_assets(
    mut commands: Commands,
    cfg: Res<WheelConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let layout = &cfg.layout;
    let wheel = &cfg.wheel;
    let span = wheel.span_angle();
    let [tip, left, right] = layout.pointer_points();
    let arcs = segment_arcs(wheel.sectors.len(), span);
    // Every arc has the same width, so one sector mesh serves them all.
    let half_angle = arcs.first().map_or(span * 0.5, SegmentArc::half_width);
    let assets = WheelAssets {
        face_mesh: meshes.add(Circle::new(layout.radius)),
        face_material: materials.add(color_or_black(&layout.face_color)),
        sector_mesh: meshes.add(CircularSector::new(layout.radius, half_angle)),
        sector_materials: wheel
            .sectors
            .iter()
            .map(|c| materials.add(color_or_black(c)))
            .collect(),
        pointer_mesh: meshes.add(Triangle2d::new(tip, left, right)),
        pointer_material: materials.add(color_or_black(&layout.pointer_color)),
        arcs,
    };
    info!(
        target: "wheel",
        sectors = wheel.sectors.len(),
        span_deg = span.to_degrees(),
        "wheel assets prepared"
    );
    commands.insert_resource(assets);
}

pub fn spawn_surfaces(mut commands: Commands, cfg: Res<WheelConfig>) {
    let center = cfg.layout.center();
    commands.spawn((
        WheelSurface,
        Transform::from_translation(center.extend(0.0)),
        Visibility::default(),
        Name::new("WheelSurface"),
    ));
    commands.spawn((
        PointerSurface,
        Transform::from_translation(center.extend(POINTER_Z)),
        Visibility::default(),
        Name::new("PointerSurface"),
    ));
}

fn render_initial(
    mut commands: Commands,
    assets: Res<WheelAssets>,
    q_wheel: Query<Entity, With<WheelSurface>>,
    q_pointer: Query<Entity, With<PointerSurface>>,
    q_visuals: Query<Entity, With<SurfaceVisual>>,
) {
    redraw(&mut commands, &assets, &q_wheel, &q_pointer, &q_visuals);
}

fn render_on_request(
    mut commands: Commands,
    mut requests: EventReader<WheelRedraw>,
    assets: Option<Res<WheelAssets>>,
    q_wheel: Query<Entity, With<WheelSurface>>,
    q_pointer: Query<Entity, With<PointerSurface>>,
    q_visuals: Query<Entity, With<SurfaceVisual>>,
) {
    // Several requests in one frame collapse into a single redraw.
    if requests.read().count() == 0 {
        return;
    }
    let Some(assets) = assets else {
        return;
    };
    redraw(&mut commands, &assets, &q_wheel, &q_pointer, &q_visuals);
}

/// Clears both surfaces and draws the face, every segment in configuration
/// order, and the pointer. Reads configuration-derived assets only.
fn redraw(
    commands: &mut Commands,
    assets: &WheelAssets,
    q_wheel: &Query<Entity, With<WheelSurface>>,
    q_pointer: &Query<Entity, With<PointerSurface>>,
    q_visuals: &Query<Entity, With<SurfaceVisual>>,
) {
    let (Ok(wheel), Ok(pointer)) = (q_wheel.single(), q_pointer.single()) else {
        warn!(target: "wheel", "render skipped: drawing surfaces missing");
        return;
    };
    for e in q_visuals {
        commands.entity(e).despawn();
    }
    commands.entity(wheel).with_children(|surface| {
        surface.spawn((
            SurfaceVisual,
            WheelFace,
            Mesh2d(assets.face_mesh.clone()),
            MeshMaterial2d(assets.face_material.clone()),
            Transform::default(),
            Name::new("WheelFace"),
        ));
        for (index, (arc, material)) in assets
            .arcs
            .iter()
            .zip(&assets.sector_materials)
            .enumerate()
        {
            surface.spawn((
                SurfaceVisual,
                WheelSegment { index },
                Mesh2d(assets.sector_mesh.clone()),
                MeshMaterial2d(material.clone()),
                Transform::from_xyz(0.0, 0.0, SEGMENT_Z_STEP * (index + 1) as f32)
                    .with_rotation(sector_mesh_rotation(*arc)),
                Name::new(format!("WheelSegment{index}")),
            ));
        }
    });
    commands.entity(pointer).with_children(|overlay| {
        overlay.spawn((
            SurfaceVisual,
            PointerVisual,
            Mesh2d(assets.pointer_mesh.clone()),
            MeshMaterial2d(assets.pointer_material.clone()),
            Transform::default(),
            Name::new("Pointer"),
        ));
    });
}
