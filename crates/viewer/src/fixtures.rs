//! Factory functions for test data.
//!
//! Pick events against the built-in body map, reference boxes for framing
//! checks and a few camera setups. Points are world space under the
//! reference layout, where world and catalog space coincide.

use glam::Vec3;

use crate::state::selection::PickEvent;
use crate::viewport::camera::CameraState;
use crate::viewport::picking::Aabb;

/// Side of the stand-in object box put around a pick point
pub const PICK_OBJECT_EXTENT: f32 = 0.5;

// ── Pick events ─────────────────────────────────────────────────

/// Pick on `mesh_name` at `point`, with a small object box around it
pub fn pick_at(mesh_name: &str, point: Vec3) -> PickEvent {
    PickEvent {
        mesh_name: mesh_name.to_string(),
        point,
        object_bounds: Aabb::from_center_size(point, Vec3::splat(PICK_OBJECT_EXTENT)),
    }
}

/// Click on the face, well inside the Head box
pub fn head_pick() -> PickEvent {
    pick_at("CC_Base_Body_6", Vec3::new(0.0, 1.8, 0.0))
}

/// Click on the belly of the torso mesh
pub fn abdomen_pick() -> PickEvent {
    pick_at("CC_Base_Body_2", Vec3::new(0.0, 0.7, 0.1))
}

/// Abdomen point reported on a mesh the head rule claims
pub fn abdomen_point_on_head_mesh() -> PickEvent {
    pick_at("CC_Base_Body_1", Vec3::new(0.0, 0.7, 0.1))
}

/// Click on the left thigh of an unrouted mesh
pub fn thigh_pick() -> PickEvent {
    pick_at("CC_Base_Body_4", Vec3::new(0.3, 0.0, 0.0))
}

/// Click on an unrouted mesh, away from every leg box
pub fn stray_pick() -> PickEvent {
    pick_at("Hair_Mesh", Vec3::new(0.0, 2.6, 0.0))
}

// ── Boxes ─────────────────────────────────────────────────────

/// Head-sized box: 0.4 wide, 0.66 tall, 0.6 deep
pub fn head_box() -> Aabb {
    Aabb::from_center_size(Vec3::new(0.0, 1.87, -0.05), Vec3::new(0.4, 0.66, 0.6))
}

/// Whole-body-sized box: 1.2 wide, 3 tall, 0.6 deep
pub fn body_box() -> Aabb {
    Aabb::from_center_size(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.2, 3.0, 0.6))
}

// ── Cameras ───────────────────────────────────────────────────

/// Camera looking down -Z from in front of the model
pub fn front_camera(aspect: f32) -> CameraState {
    CameraState {
        position: Vec3::new(0.0, 1.5, 5.0),
        forward: Vec3::NEG_Z,
        fov: 50.0,
        aspect,
        near: 0.1,
        far: 1000.0,
    }
}

/// Camera looking at the origin from an oblique angle
pub fn oblique_camera(aspect: f32) -> CameraState {
    let position = Vec3::new(3.0, 2.0, 4.0);
    CameraState {
        position,
        forward: (-position).normalize(),
        fov: 45.0,
        aspect,
        near: 0.1,
        far: 100.0,
    }
}

// ── Catalog JSON ──────────────────────────────────────────────

/// Minimal catalog: one head box and one overlapping torso pair
pub fn small_catalog_json() -> &'static str {
    r#"{"groups": [
        {"group": "HeadRegion", "regions": [
            {"id": "Head", "x": [-0.2, 0.2], "y": [1.5, 2.2], "z": [-0.3, 0.3]}
        ]},
        {"group": "TorsoAndBack", "regions": [
            {"id": "Chest", "x": [-0.3, 0.3], "y": [1.0, 1.5], "z": [0.0, 0.3]},
            {"id": "Abdomen", "x": [-0.3, 0.3], "y": [0.5, 1.1], "z": [0.0, 0.3]}
        ]},
        {"group": "Legs", "regions": []}
    ]}"#
}
