//! Model placement in the host scene.
//!
//! Region bounds live in *catalog space*: world space as it is when the
//! model sits at the reference (desktop) layout. When the viewport shrinks
//! the host rescales and moves the model, so world points are mapped back
//! into catalog space before classification and catalog boxes are mapped
//! out to world space before framing.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::picking::Aabb;

/// Uniform scale plus translation applied to the model root
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelLayout {
    pub scale: f32,
    pub position: Vec3,
}

impl ModelLayout {
    pub const DESKTOP: ModelLayout = ModelLayout {
        scale: 2.4,
        position: Vec3::new(0.0, -2.30, 0.0),
    };

    pub const MOBILE: ModelLayout = ModelLayout {
        scale: 1.9,
        position: Vec3::new(0.0, -1.80, 0.0),
    };

    /// Model-local -> world
    pub fn apply(&self, local: Vec3) -> Vec3 {
        local * self.scale + self.position
    }

    /// World -> model-local
    pub fn invert(&self, world: Vec3) -> Vec3 {
        (world - self.position) / self.scale
    }

    /// World point under this layout -> the same model point under `reference`
    pub fn to_reference(&self, reference: &ModelLayout, world: Vec3) -> Vec3 {
        if self == reference {
            return world;
        }
        reference.apply(self.invert(world))
    }

    /// Point under `reference` -> the same model point under this layout
    pub fn from_reference(&self, reference: &ModelLayout, point: Vec3) -> Vec3 {
        if self == reference {
            return point;
        }
        self.apply(reference.invert(point))
    }

    /// Catalog-space box -> world box under this layout
    pub fn box_from_reference(&self, reference: &ModelLayout, bounds: &Aabb) -> Aabb {
        bounds.map(|p| self.from_reference(reference, p))
    }
}

impl Default for ModelLayout {
    fn default() -> Self {
        Self::DESKTOP
    }
}

/// Breakpoint and per-form-factor layouts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Viewports this wide or narrower use the mobile layout (pixels)
    pub mobile_breakpoint: f32,
    pub desktop: ModelLayout,
    pub mobile: ModelLayout,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            desktop: ModelLayout::DESKTOP,
            mobile: ModelLayout::MOBILE,
        }
    }
}

impl LayoutSettings {
    /// Layout the catalog bounds were authored against
    pub fn reference(&self) -> ModelLayout {
        self.desktop
    }

    pub fn is_mobile(&self, width: f32) -> bool {
        width <= self.mobile_breakpoint
    }

    /// Layout for a viewport size. Only the width matters.
    pub fn for_viewport(&self, width: f32, _height: f32) -> ModelLayout {
        if self.is_mobile(width) {
            self.mobile
        } else {
            self.desktop
        }
    }
}
