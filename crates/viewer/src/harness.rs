//! Headless test harness for driving picks without a renderer.
//!
//! Wraps a [`SelectionController`] over a [`SimulatedRig`] that records every
//! camera write, so tests and the agent protocol can check what the camera
//! went through, not only where it ended up.

use glam::Vec3;
use serde::Serialize;

use crate::regions::{MeshRouter, RegionCatalog};
use crate::state::head_tilt::{HeadTilt, TiltAxis, TiltDirection};
use crate::state::selection::{
    PickEvent, PickOutcome, SelectionController, SelectionListener, SelectionPhase, HEAD_REGION,
};
use crate::state::settings::ViewerSettings;
use crate::viewport::camera::{CameraPose, CameraRig, CameraState, OrbitRig};
use crate::viewport::layout::ModelLayout;
use crate::viewport::picking::{Aabb, Classification};

/// A write made to the simulated camera
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "call", content = "value", rename_all = "snake_case")]
pub enum RigCall {
    SetPose(CameraPose),
    SetFov(f32),
    SetEnabled(bool),
    SetPanEnabled(bool),
}

/// Orbit camera that logs the calls made to it
#[derive(Clone, Debug)]
pub struct SimulatedRig {
    pub camera: OrbitRig,
    /// When false the rig behaves like a bare camera with no orbit controls
    pub orbit_controls: bool,
    calls: Vec<RigCall>,
}

impl SimulatedRig {
    pub fn new(camera: OrbitRig) -> Self {
        Self {
            camera,
            orbit_controls: true,
            calls: Vec::new(),
        }
    }

    /// Camera with no orbit controller attached
    pub fn bare(camera: OrbitRig) -> Self {
        Self {
            orbit_controls: false,
            ..Self::new(camera)
        }
    }

    pub fn calls(&self) -> &[RigCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Default for SimulatedRig {
    fn default() -> Self {
        Self::new(OrbitRig::new())
    }
}

impl CameraRig for SimulatedRig {
    fn state(&self) -> CameraState {
        self.camera.state()
    }

    fn target(&self) -> Vec3 {
        self.camera.target()
    }

    fn has_orbit_controls(&self) -> bool {
        self.orbit_controls
    }

    fn set_pose(&mut self, pose: &CameraPose) {
        self.calls.push(RigCall::SetPose(*pose));
        self.camera.set_pose(pose);
    }

    fn set_fov(&mut self, fov: f32) {
        self.calls.push(RigCall::SetFov(fov));
        self.camera.set_fov(fov);
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.calls.push(RigCall::SetEnabled(enabled));
        self.camera.set_enabled(enabled);
    }

    fn set_pan_enabled(&mut self, enabled: bool) {
        self.calls.push(RigCall::SetPanEnabled(enabled));
        self.camera.set_pan_enabled(enabled);
    }
}

/// Listener that keeps every notification
#[derive(Debug, Default)]
pub struct SelectionLog {
    pub events: Vec<Option<Classification>>,
}

impl SelectionListener for SelectionLog {
    fn region_selected(&mut self, region: Option<&Classification>) {
        self.events.push(region.cloned());
    }
}

/// Headless harness: controller, simulated camera, notification log and
/// head tilt state
pub struct TestHarness {
    pub controller: SelectionController<SimulatedRig, SelectionLog>,
    pub head_tilt: HeadTilt,
}

impl TestHarness {
    /// Built-in catalog and router, default settings, camera attached.
    pub fn new() -> Self {
        Self::with_settings(ViewerSettings::default())
    }

    pub fn with_settings(settings: ViewerSettings) -> Self {
        let mut harness = Self::without_rig(settings);
        harness.controller.attach_rig(SimulatedRig::default());
        harness
    }

    /// Harness whose host never provides a camera
    pub fn without_rig(settings: ViewerSettings) -> Self {
        Self::with_parts(RegionCatalog::builtin(), MeshRouter::builtin(), settings)
    }

    pub fn with_parts(catalog: RegionCatalog, router: MeshRouter, settings: ViewerSettings) -> Self {
        let head_tilt = HeadTilt::new(&settings.head_tilt);
        Self {
            controller: SelectionController::new(catalog, router, settings, SelectionLog::default()),
            head_tilt,
        }
    }

    // ── Host callbacks ────────────────────────────────────────

    /// Click on a mesh at a world point
    pub fn pick(&mut self, mesh_name: &str, point: Vec3, object_bounds: Aabb) -> PickOutcome {
        self.controller.on_pick(&PickEvent {
            mesh_name: mesh_name.to_string(),
            point,
            object_bounds,
        })
    }

    pub fn pick_event(&mut self, event: &PickEvent) -> PickOutcome {
        self.controller.on_pick(event)
    }

    /// Advance one rendered frame
    pub fn frame(&mut self) -> bool {
        self.controller.on_frame()
    }

    /// Pick and let the next frame land
    pub fn pick_and_settle(&mut self, event: &PickEvent) -> PickOutcome {
        let outcome = self.controller.on_pick(event);
        self.controller.on_frame();
        outcome
    }

    pub fn close(&mut self) {
        self.controller.close();
    }

    /// Resize the viewport: updates the camera aspect and the model layout
    pub fn resize(&mut self, width: f32, height: f32) -> Option<ModelLayout> {
        if let Some(rig) = self.controller.rig_mut() {
            rig.camera.set_aspect(width, height);
        }
        self.controller.resize(width, height)
    }

    // ── Head tilt ─────────────────────────────────────────────

    /// Whether the tilt controls are showing (head selected)
    pub fn head_controls_visible(&self) -> bool {
        self.selected().is_some_and(|r| r.is_region(HEAD_REGION))
    }

    /// Press a tilt button. Ignored unless the head is selected.
    pub fn tilt_head(&mut self, direction: TiltDirection) -> bool {
        if !self.head_controls_visible() {
            return false;
        }
        self.head_tilt.step(direction);
        true
    }

    pub fn reset_tilt(&mut self, axis: TiltAxis) {
        self.head_tilt.reset(axis);
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn selected(&self) -> Option<&Classification> {
        self.controller.selected()
    }

    pub fn phase(&self) -> &SelectionPhase {
        self.controller.phase()
    }

    /// Every region reported to the UI, in order
    pub fn notifications(&self) -> &[Option<Classification>] {
        &self.controller.listener().events
    }

    pub fn rig(&self) -> Option<&SimulatedRig> {
        self.controller.rig()
    }

    pub fn camera(&self) -> Option<&OrbitRig> {
        self.rig().map(|r| &r.camera)
    }

    pub fn rig_calls(&self) -> &[RigCall] {
        self.rig().map(|r| r.calls()).unwrap_or(&[])
    }

    pub fn clear_rig_calls(&mut self) {
        if let Some(rig) = self.controller.rig_mut() {
            rig.clear_calls();
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_new_harness_idle() {
        let h = TestHarness::new();
        assert_eq!(h.phase(), &SelectionPhase::Idle);
        assert!(h.rig().is_some());
        assert!(h.rig_calls().is_empty());
        assert!(h.notifications().is_empty());
    }

    #[test]
    fn test_pick_disables_then_poses() {
        let mut h = TestHarness::new();
        h.pick_event(&fixtures::abdomen_pick());
        let calls = h.rig_calls();
        assert_eq!(calls[0], RigCall::SetEnabled(false));
        assert_eq!(calls[1], RigCall::SetPanEnabled(false));
        assert!(matches!(calls[2], RigCall::SetPose(_)));
        assert_eq!(calls.len(), 3);
    }

    #[test]
    fn test_frame_reenables_after_pose() {
        let mut h = TestHarness::new();
        h.pick_and_settle(&fixtures::abdomen_pick());
        let calls = h.rig_calls();
        let pose_at = calls.iter().position(|c| matches!(c, RigCall::SetPose(_))).unwrap();
        let enable_at = calls.iter().position(|c| *c == RigCall::SetEnabled(true)).unwrap();
        assert!(pose_at < enable_at);
        // Panning stays off while a region is shown.
        assert!(!calls.contains(&RigCall::SetPanEnabled(true)));
    }

    #[test]
    fn test_bare_camera_is_never_toggled() {
        let mut h = TestHarness::without_rig(ViewerSettings::default());
        h.controller.attach_rig(SimulatedRig::bare(OrbitRig::new()));
        h.pick_and_settle(&fixtures::abdomen_pick());
        assert!(h
            .rig_calls()
            .iter()
            .all(|c| matches!(c, RigCall::SetPose(_))));
        assert!(h.selected().unwrap().is_region("Abdomen"));
    }

    #[test]
    fn test_tilt_requires_head() {
        let mut h = TestHarness::new();
        assert!(!h.tilt_head(TiltDirection::Down));

        h.pick_and_settle(&fixtures::head_pick());
        assert!(h.tilt_head(TiltDirection::Down));
        assert_eq!(h.head_tilt.degrees_x(), 5);
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut h = TestHarness::new();
        assert_eq!(h.resize(600.0, 800.0), Some(ModelLayout::MOBILE));
        assert_eq!(h.camera().unwrap().aspect, 0.75);
    }
}
