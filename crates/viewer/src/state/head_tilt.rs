//! Head tilt controls shown while the head is selected.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::settings::HeadTiltSettings;

/// Node names the head bone goes by across the rigs we ship, in lookup order
pub const HEAD_NODE_CANDIDATES: &[&str] = &[
    "Head",
    "CC_Base_Head",
    "head",
    "mixamorigHead",
    "Armature_Head",
    "HeadMesh",
];

/// First head candidate present among the scene's node names
pub fn find_head_node<'a>(names: impl IntoIterator<Item = &'a str> + Clone) -> Option<&'static str> {
    HEAD_NODE_CANDIDATES
        .iter()
        .find(|candidate| names.clone().into_iter().any(|n| n == **candidate))
        .copied()
}

/// One press of a tilt button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiltDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Tilt axis: `X` nods, `Z` leans sideways
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiltAxis {
    X,
    Z,
}

/// Front (X) and side (Z) head tilt, in radians
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeadTilt {
    pub x: f32,
    pub z: f32,
    #[serde(skip)]
    step: f32,
    #[serde(skip)]
    max: f32,
}

impl HeadTilt {
    pub fn new(settings: &HeadTiltSettings) -> Self {
        Self {
            x: 0.0,
            z: 0.0,
            step: settings.step_degrees.to_radians(),
            max: settings.max_degrees.to_radians(),
        }
    }

    pub fn step(&mut self, direction: TiltDirection) {
        match direction {
            TiltDirection::Up => self.look_up(),
            TiltDirection::Down => self.look_down(),
            TiltDirection::Left => self.tilt_left(),
            TiltDirection::Right => self.tilt_right(),
        }
    }

    pub fn reset(&mut self, axis: TiltAxis) {
        match axis {
            TiltAxis::X => self.reset_x(),
            TiltAxis::Z => self.reset_z(),
        }
    }

    pub fn look_up(&mut self) {
        self.x = (self.x - self.step).max(-self.max);
    }

    pub fn look_down(&mut self) {
        self.x = (self.x + self.step).min(self.max);
    }

    pub fn tilt_left(&mut self) {
        self.z = (self.z - self.step).max(-self.max);
    }

    pub fn tilt_right(&mut self) {
        self.z = (self.z + self.step).min(self.max);
    }

    pub fn reset_x(&mut self) {
        self.x = 0.0;
    }

    pub fn reset_z(&mut self) {
        self.z = 0.0;
    }

    /// Front tilt readout, whole degrees
    pub fn degrees_x(&self) -> i32 {
        self.x.to_degrees().round() as i32
    }

    /// Side tilt readout, whole degrees
    pub fn degrees_z(&self) -> i32 {
        self.z.to_degrees().round() as i32
    }

    /// Euler rotation for the head node, given its rest rotation
    pub fn rotation_from(&self, rest: Vec3) -> Vec3 {
        Vec3::new(rest.x + self.x, rest.y, rest.z + self.z)
    }
}

impl Default for HeadTilt {
    fn default() -> Self {
        Self::new(&HeadTiltSettings::default())
    }
}
