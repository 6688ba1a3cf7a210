use glam::{Mat4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use super::picking::Aabb;

/// Closest the near plane is ever pulled in
pub const MIN_NEAR: f32 = 0.01;

/// Snapshot of the host camera read before framing
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub position: Vec3,
    /// Viewing direction (normalized by the framing code)
    pub forward: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// Pose written back into the host camera
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    /// Orbit target, or the point to look at when there is no orbit controller
    pub target: Vec3,
    pub near: f32,
    pub far: f32,
}

/// Tuning for [`frame`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramingOptions {
    /// Fraction of the view the box should fill; below 1.0 pulls the camera back
    pub fill_scale: f32,
    /// Look target lift along world up
    pub offset_up: f32,
    /// Look target shift along the view direction
    pub offset_forward: f32,
}

impl Default for FramingOptions {
    fn default() -> Self {
        Self {
            fill_scale: 0.95,
            offset_up: 0.06,
            offset_forward: 0.0,
        }
    }
}

impl FramingOptions {
    pub fn with_fill_scale(self, fill_scale: f32) -> Self {
        Self { fill_scale, ..self }
    }
}

/// Compute a camera pose that fits `bounds` in the view.
///
/// The camera keeps its current viewing direction and backs off along it
/// until the box fits both vertically and horizontally. Near/far are
/// recomputed so the whole box stays inside the frustum whatever its size.
pub fn frame(camera: &CameraState, bounds: &Aabb, options: &FramingOptions) -> CameraPose {
    let center = bounds.center();
    let size = bounds.size();

    let v_fov = camera.fov.to_radians();
    let h_fov = 2.0 * ((v_fov / 2.0).tan() * camera.aspect).atan();

    let dist_v = (size.y * 0.5) / (v_fov / 2.0).tan();
    let dist_h = (size.x * 0.5) / (h_fov / 2.0).tan();
    let distance = dist_v.max(dist_h) * (1.0 / options.fill_scale.max(f32::EPSILON));

    let forward = camera.forward.try_normalize().unwrap_or(Vec3::NEG_Z);
    let position = center - forward * distance;

    let target = center + Vec3::Y * options.offset_up + forward * options.offset_forward;

    let extent = size.length();
    let near = (distance - extent * 2.0).max(MIN_NEAR);
    let far = camera.far.max((distance + extent) * 2.0);

    tracing::debug!(
        "Framed box center={center:?} size={size:?}: distance={distance:.3} near={near:.3} far={far:.3}"
    );

    CameraPose {
        position,
        target,
        near,
        far,
    }
}

/// Handle to the host-owned camera and its orbit controller.
///
/// All writes made by the selection logic go through this trait; the host
/// keeps ownership of the actual camera object.
pub trait CameraRig {
    /// Current camera intrinsics and placement
    fn state(&self) -> CameraState;

    /// Current orbit target (or look-at point)
    fn target(&self) -> Vec3;

    /// Whether user orbit controls are attached to this camera
    fn has_orbit_controls(&self) -> bool {
        true
    }

    /// Move the camera and commit the projection. Rigs with an orbit
    /// controller move the orbit target; rigs without one look at it.
    fn set_pose(&mut self, pose: &CameraPose);

    /// Vertical field of view in degrees
    fn set_fov(&mut self, fov: f32);

    /// Toggle user orbit interaction
    fn set_enabled(&mut self, enabled: bool);

    /// Toggle user panning
    fn set_pan_enabled(&mut self, enabled: bool);
}

/// In-memory orbit camera: the default rig for headless hosts
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitRig {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view (degrees)
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub enabled: bool,
    pub enable_pan: bool,
}

impl OrbitRig {
    /// The viewer's opening camera: a little above the hips, five units back
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 1.5, 5.0),
            target: Vec3::ZERO,
            fov: 50.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
            enabled: true,
            enable_pan: true,
        }
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Projection matrix (camera -> clip)
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov.to_radians(), self.aspect, self.near, self.far)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Normalized device coordinates of a world point, or `None` behind the camera
    pub fn project(&self, point: Vec3) -> Option<Vec3> {
        let p = self.view_projection() * Vec4::new(point.x, point.y, point.z, 1.0);
        if p.w <= 0.0 {
            return None;
        }
        Some(p.truncate() / p.w)
    }
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraRig for OrbitRig {
    fn state(&self) -> CameraState {
        CameraState {
            position: self.position,
            forward: (self.target - self.position).normalize_or_zero(),
            fov: self.fov,
            aspect: self.aspect,
            near: self.near,
            far: self.far,
        }
    }

    fn target(&self) -> Vec3 {
        self.target
    }

    fn set_pose(&mut self, pose: &CameraPose) {
        self.position = pose.position;
        self.target = pose.target;
        self.near = pose.near;
        self.far = pose.far;
    }

    fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn set_pan_enabled(&mut self, enabled: bool) {
        self.enable_pan = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looking_down_z(fov: f32, aspect: f32) -> CameraState {
        CameraState {
            position: Vec3::new(0.0, 1.0, 5.0),
            forward: Vec3::NEG_Z,
            fov,
            aspect,
            near: 0.1,
            far: 1000.0,
        }
    }

    #[test]
    fn test_half_fill_doubles_distance() {
        let cam = looking_down_z(50.0, 1.0);
        let bounds = Aabb::from_center_size(Vec3::new(0.0, 1.0, 0.0), Vec3::ONE);
        let opts = FramingOptions::default();

        let full = frame(&cam, &bounds, &opts.with_fill_scale(1.0));
        let half = frame(&cam, &bounds, &opts.with_fill_scale(0.5));

        // Camera sits at center + (0, 0, distance) when looking down -Z.
        assert_eq!(half.position.z, full.position.z * 2.0);
        assert_eq!(full.position.x, 0.0);
        assert_eq!(full.position.y, 1.0);
    }

    #[test]
    fn test_vertical_fit_distance() {
        let cam = looking_down_z(90.0, 1.0);
        let bounds = Aabb::from_center_size(Vec3::ZERO, Vec3::new(1.0, 2.0, 1.0));
        let pose = frame(&cam, &bounds, &FramingOptions::default().with_fill_scale(1.0));
        // tan(45°) = 1, so distance = half height
        assert!((pose.position.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_wide_box_uses_horizontal_fit() {
        let cam = looking_down_z(50.0, 0.5);
        let wide = Aabb::from_center_size(Vec3::ZERO, Vec3::new(4.0, 0.5, 0.5));
        let tall = Aabb::from_center_size(Vec3::ZERO, Vec3::new(0.5, 0.5, 0.5));
        let opts = FramingOptions::default();
        let wide_pose = frame(&cam, &wide, &opts);
        let tall_pose = frame(&cam, &tall, &opts);
        assert!(wide_pose.position.z > tall_pose.position.z * 4.0);
    }

    #[test]
    fn test_target_offsets() {
        let cam = looking_down_z(50.0, 1.0);
        let bounds = Aabb::from_center_size(Vec3::ZERO, Vec3::ONE);
        let opts = FramingOptions {
            fill_scale: 1.0,
            offset_up: 0.1,
            offset_forward: 0.2,
        };
        let pose = frame(&cam, &bounds, &opts);
        assert!((pose.target - Vec3::new(0.0, 0.1, -0.2)).length() < 1e-6);
    }

    #[test]
    fn test_degenerate_forward_looks_down_negative_z() {
        let mut cam = looking_down_z(50.0, 1.0);
        cam.forward = Vec3::ZERO;
        let bounds = Aabb::from_center_size(Vec3::ZERO, Vec3::ONE);
        let pose = frame(&cam, &bounds, &FramingOptions::default());
        assert!(pose.position.z > 0.0);
        assert_eq!(pose.position.x, 0.0);
    }

    #[test]
    fn test_far_never_shrinks() {
        let cam = looking_down_z(50.0, 1.0);
        let bounds = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(0.1));
        let pose = frame(&cam, &bounds, &FramingOptions::default());
        assert_eq!(pose.far, 1000.0);
        assert_eq!(pose.near, MIN_NEAR);
    }

    #[test]
    fn test_orbit_rig_applies_pose() {
        let mut rig = OrbitRig::new();
        let pose = CameraPose {
            position: Vec3::new(0.0, 2.0, 3.0),
            target: Vec3::new(0.0, 2.0, 0.0),
            near: 0.5,
            far: 50.0,
        };
        rig.set_pose(&pose);
        let state = rig.state();
        assert_eq!(state.position, pose.position);
        assert!((state.forward - Vec3::NEG_Z).length() < 1e-6);
        assert_eq!(state.near, 0.5);
        assert_eq!(rig.target(), pose.target);
    }

    #[test]
    fn test_framed_box_centered_and_unclipped() {
        use crate::fixtures::{front_camera, head_box, oblique_camera};

        for cam in [front_camera(16.0 / 9.0), front_camera(0.5), oblique_camera(1.0)] {
            let bounds = head_box();
            let opts = FramingOptions { fill_scale: 1.0, offset_up: 0.0, offset_forward: 0.0 };
            let pose = frame(&cam, &bounds, &opts);
            let mut rig = OrbitRig::new();
            rig.aspect = cam.aspect;
            rig.set_fov(cam.fov);
            rig.set_pose(&pose);

            let center = rig.project(bounds.center()).unwrap();
            assert!(center.x.abs() < 1e-4 && center.y.abs() < 1e-4);
            for corner in bounds.corners() {
                let ndc = rig.project(corner).unwrap();
                assert!(ndc.z.abs() <= 1.0, "{corner:?} clipped at depth {}", ndc.z);
            }
        }
    }

    #[test]
    fn test_project_center_is_screen_center() {
        let rig = OrbitRig::new();
        let ndc = rig.project(rig.target).unwrap();
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);

        let behind = rig.position + (rig.position - rig.target);
        assert!(rig.project(behind).is_none());
    }
}
