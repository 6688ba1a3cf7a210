//! Geometry side of picking: boxes, the point classifier, camera framing
//! and model layout.

pub mod camera;
pub mod layout;
pub mod picking;

pub use camera::{frame, CameraPose, CameraRig, CameraState, FramingOptions, OrbitRig};
pub use layout::{LayoutSettings, ModelLayout};
pub use picking::{classify, Aabb, Classification};
