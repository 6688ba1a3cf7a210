//! Integration tests for TestHarness.
//!
//! Drives full pick / frame / close cycles and checks the camera writes and
//! UI notifications they produce.

use anatomy_viewer_lib::fixtures;
use anatomy_viewer_lib::harness::{RigCall, SimulatedRig, TestHarness};
use anatomy_viewer_lib::regions::RegionCatalog;
use anatomy_viewer_lib::state::{SelectionPhase, TiltAxis, TiltDirection, ViewerSettings};
use anatomy_viewer_lib::viewport::{frame, CameraRig, Classification, ModelLayout, OrbitRig};
use glam::Vec3;

fn region(id: &str) -> Option<Classification> {
    Some(Classification::Region(id.to_string()))
}

#[test]
fn test_harness_pick_frame_close_cycle() {
    let mut h = TestHarness::new();

    h.pick_event(&fixtures::abdomen_pick());
    assert!(matches!(h.phase(), SelectionPhase::Selecting { .. }));
    assert!(h.notifications().is_empty());
    assert!(!h.camera().unwrap().enabled);

    assert!(h.frame());
    assert_eq!(h.phase(), &SelectionPhase::Selected);
    assert_eq!(h.selected(), region("Abdomen").as_ref());
    assert!(h.camera().unwrap().enabled);

    h.close();
    assert_eq!(h.phase(), &SelectionPhase::Idle);
    assert!(h.selected().is_none());
    assert_eq!(h.notifications(), &[region("Abdomen"), None]);
}

#[test]
fn test_harness_frame_without_pick_is_noop() {
    let mut h = TestHarness::new();
    assert!(!h.frame());
    assert!(h.rig_calls().is_empty());
    assert!(h.notifications().is_empty());
}

#[test]
fn test_harness_repick_supersedes_pending() {
    let mut h = TestHarness::new();
    h.pick_event(&fixtures::abdomen_pick());
    h.pick_event(&fixtures::thigh_pick());
    h.frame();

    assert_eq!(h.selected(), region("Left Thigh").as_ref());
    assert_eq!(h.notifications(), &[region("Left Thigh")]);
}

#[test]
fn test_harness_repick_from_selected() {
    let mut h = TestHarness::new();
    h.pick_and_settle(&fixtures::abdomen_pick());
    h.pick_and_settle(&fixtures::head_pick());

    assert_eq!(h.notifications(), &[region("Abdomen"), region("Head")]);
    assert_eq!(h.selected(), region("Head").as_ref());
}

#[test]
fn test_harness_routing_precedes_geometry() {
    let mut h = TestHarness::new();
    let pick = fixtures::abdomen_point_on_head_mesh();
    let outcome = h.pick_and_settle(&pick);

    assert!(outcome.region.is_unknown());
    // Unknown picks frame the clicked object.
    assert_eq!(outcome.framed, pick.object_bounds);
    assert_eq!(h.notifications(), &[Some(Classification::Unknown)]);
}

#[test]
fn test_harness_unmatched_mesh_tests_legs() {
    let mut h = TestHarness::new();
    assert!(h.pick_and_settle(&fixtures::thigh_pick()).region.is_region("Left Thigh"));
    assert!(h.pick_and_settle(&fixtures::stray_pick()).region.is_unknown());
}

#[test]
fn test_harness_head_pulls_back_for_context() {
    let mut h = TestHarness::new();
    let before = h.rig().unwrap().state();
    let outcome = h.pick_event(&fixtures::head_pick());

    let settings = ViewerSettings::default();
    let head = RegionCatalog::builtin().region("Head").unwrap().bounds;
    assert_eq!(outcome.framed, head);

    let tight = frame(&before, &head, &settings.framing.generic());
    let pose = outcome.pose.unwrap();
    let d_head = (pose.position - head.center()).length();
    let d_tight = (tight.position - head.center()).length();
    assert!((d_head / d_tight - 2.0).abs() < 1e-3);
}

#[test]
fn test_harness_close_restores_home() {
    let mut h = TestHarness::new();
    let home = OrbitRig::new();

    h.pick_and_settle(&fixtures::head_pick());
    h.pick_and_settle(&fixtures::thigh_pick());
    h.clear_rig_calls();
    h.close();

    let camera = h.camera().unwrap();
    assert_eq!(camera.position, home.position);
    assert_eq!(camera.target, home.target);
    assert_eq!(camera.near, home.near);
    assert_eq!(camera.far, home.far);
    assert!(camera.enabled);
    assert!(camera.enable_pan);
    assert!(h.rig_calls().contains(&RigCall::SetFov(home.fov)));
}

#[test]
fn test_harness_home_skips_bare_camera() {
    let mut h = TestHarness::without_rig(ViewerSettings::default());
    let mut bare = OrbitRig::new();
    bare.position = Vec3::new(7.0, 7.0, 7.0);
    h.controller.attach_rig(SimulatedRig::bare(bare));
    h.controller.attach_rig(SimulatedRig::new(OrbitRig::new()));

    h.pick_and_settle(&fixtures::abdomen_pick());
    h.close();

    let home = OrbitRig::new();
    assert_eq!(h.camera().unwrap().position, home.position);
    assert_eq!(h.camera().unwrap().target, home.target);
}

#[test]
fn test_harness_close_leaves_bare_camera_alone() {
    let mut h = TestHarness::without_rig(ViewerSettings::default());
    h.controller.attach_rig(SimulatedRig::bare(OrbitRig::new()));
    assert!(h.controller.home().is_none());

    let framed = h.pick_and_settle(&fixtures::abdomen_pick()).pose.unwrap();
    h.clear_rig_calls();
    h.close();

    assert!(h.rig_calls().is_empty());
    assert_eq!(h.camera().unwrap().position, framed.position);
    assert_eq!(h.notifications().last(), Some(&None));
}

#[test]
fn test_harness_close_while_selecting() {
    let mut h = TestHarness::new();
    h.pick_event(&fixtures::abdomen_pick());
    h.close();

    // The pending pick is dropped; the next frame commits nothing.
    assert!(!h.frame());
    assert_eq!(h.notifications(), &[None::<Classification>]);
    assert!(h.camera().unwrap().enabled);
}

#[test]
fn test_harness_without_rig_reports_immediately() {
    let mut h = TestHarness::without_rig(ViewerSettings::default());
    let outcome = h.pick_event(&fixtures::head_pick());

    assert!(outcome.pose.is_none());
    assert_eq!(h.phase(), &SelectionPhase::Selected);
    assert_eq!(h.notifications(), &[region("Head")]);

    h.close();
    assert_eq!(h.notifications(), &[region("Head"), None]);
}

#[test]
fn test_harness_mobile_layout_maps_picks() {
    let mut h = TestHarness::new();
    assert_eq!(h.resize(500.0, 900.0), Some(ModelLayout::MOBILE));

    // The face point as it sits on screen once the model shrinks.
    let desktop = ModelLayout::DESKTOP;
    let mut pick = fixtures::head_pick();
    pick.point = ModelLayout::MOBILE.from_reference(&desktop, pick.point);

    let outcome = h.pick_event(&pick);
    assert!(outcome.region.is_region("Head"));
    assert!((outcome.catalog_point - fixtures::head_pick().point).length() < 1e-5);

    let head = RegionCatalog::builtin().region("Head").unwrap().bounds;
    assert_eq!(outcome.framed, ModelLayout::MOBILE.box_from_reference(&desktop, &head));
}

#[test]
fn test_harness_head_tilt_flow() {
    let mut h = TestHarness::new();
    h.pick_and_settle(&fixtures::head_pick());

    for _ in 0..3 {
        assert!(h.tilt_head(TiltDirection::Up));
    }
    assert!(h.tilt_head(TiltDirection::Right));
    assert_eq!(h.head_tilt.degrees_x(), -15);
    assert_eq!(h.head_tilt.degrees_z(), 5);

    h.reset_tilt(TiltAxis::X);
    assert_eq!(h.head_tilt.degrees_x(), 0);

    h.pick_and_settle(&fixtures::abdomen_pick());
    assert!(!h.tilt_head(TiltDirection::Up));
}
