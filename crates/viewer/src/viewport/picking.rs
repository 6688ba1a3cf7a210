use glam::Vec3;
use serde::{Deserialize, Serialize};
use shared::{RegionBounds, RegionId, UNKNOWN_REGION};

use crate::regions::Region;

/// Numeric-noise tolerance applied to the pick point on every axis
pub const EPSILON: f32 = 0.001;

/// Slack added around every region box to absorb mesh/bounds misalignment
pub const MARGIN: f32 = 0.05;

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Build a box from per-axis `[min, max]` ranges
    pub fn from_ranges(bounds: &RegionBounds) -> Self {
        Self {
            min: Vec3::new(bounds.x[0], bounds.y[0], bounds.z[0]),
            max: Vec3::new(bounds.x[1], bounds.y[1], bounds.z[1]),
        }
    }

    /// Box with the given center and size
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extents along each axis
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// The eight corner points
    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }

    /// Map both corners through a per-point transform and re-sort them
    pub fn map(&self, f: impl Fn(Vec3) -> Vec3) -> Self {
        let a = f(self.min);
        let b = f(self.max);
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Tolerant containment: every axis is widened by [`MARGIN`] and the
    /// point is allowed [`EPSILON`] of noise. Boundaries are inclusive.
    pub fn contains_tolerant(&self, point: Vec3) -> bool {
        inside(point.x, self.min.x, self.max.x)
            && inside(point.y, self.min.y, self.max.y)
            && inside(point.z, self.min.z, self.max.z)
    }
}

fn inside(p: f32, min: f32, max: f32) -> bool {
    p + EPSILON >= min - MARGIN && p - EPSILON <= max + MARGIN
}

/// Outcome of classifying a pick point
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Classification {
    Region(RegionId),
    Unknown,
}

impl Classification {
    /// Region id, or the `"Unknown"` sentinel
    pub fn as_str(&self) -> &str {
        match self {
            Classification::Region(id) => id,
            Classification::Unknown => UNKNOWN_REGION,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Classification::Unknown)
    }

    pub fn is_region(&self, id: &str) -> bool {
        matches!(self, Classification::Region(r) if r == id)
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Classification> for String {
    fn from(c: Classification) -> Self {
        match c {
            Classification::Region(id) => id,
            Classification::Unknown => UNKNOWN_REGION.to_string(),
        }
    }
}

impl From<String> for Classification {
    fn from(s: String) -> Self {
        if s == UNKNOWN_REGION {
            Classification::Unknown
        } else {
            Classification::Region(s)
        }
    }
}

/// Return the first candidate whose tolerant box contains `point`.
///
/// Candidates are tested strictly in order and scanning stops at the first
/// hit, so a region listed earlier shadows any later region overlapping it.
pub fn classify(point: Vec3, candidates: &[&Region]) -> Classification {
    for region in candidates {
        let hit = region.bounds.contains_tolerant(point);
        tracing::trace!(
            "Checking {}: X={:.3}, Y={:.3}, Z={:.3} -> {}",
            region.id,
            point.x,
            point.y,
            point.z,
            hit
        );
        if hit {
            return Classification::Region(region.id.clone());
        }
    }
    Classification::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::GroupId;

    fn region(id: &str, bounds: RegionBounds) -> Region {
        Region {
            id: id.to_string(),
            bounds: Aabb::from_ranges(&bounds),
            group: GroupId::TorsoAndBack,
        }
    }

    fn head() -> Region {
        Region {
            id: "Head".to_string(),
            bounds: Aabb::from_ranges(&RegionBounds::new([-0.2, 0.2], [1.54, 2.2], [-0.35, 0.25])),
            group: GroupId::HeadRegion,
        }
    }

    #[test]
    fn test_origin_is_not_head() {
        let head = head();
        assert_eq!(classify(Vec3::ZERO, &[&head]), Classification::Unknown);
    }

    #[test]
    fn test_point_in_head() {
        let head = head();
        assert!(classify(Vec3::new(0.0, 1.8, 0.0), &[&head]).is_region("Head"));
    }

    #[test]
    fn test_margin_boundary_is_inclusive() {
        let head = head();
        let b = head.bounds;
        let low = Vec3::new(b.min.x - MARGIN, 1.8, 0.0);
        let high = Vec3::new(0.0, b.max.y + MARGIN, 0.0);
        assert!(b.contains_tolerant(low));
        assert!(b.contains_tolerant(high));
    }

    #[test]
    fn test_just_beyond_tolerance_is_outside() {
        let head = head();
        let b = head.bounds;
        let p = Vec3::new(0.0, b.max.y + MARGIN + EPSILON + 0.01, 0.0);
        assert!(!b.contains_tolerant(p));
    }

    #[test]
    fn test_first_match_wins() {
        let a = region("A", RegionBounds::new([0.0, 1.0], [0.0, 1.0], [0.0, 1.0]));
        let b = region("B", RegionBounds::new([0.5, 1.5], [0.5, 1.5], [0.5, 1.5]));
        let p = Vec3::splat(0.75);
        assert!(classify(p, &[&a, &b]).is_region("A"));
        assert!(classify(p, &[&b, &a]).is_region("B"));
    }

    #[test]
    fn test_empty_candidates() {
        assert!(classify(Vec3::ONE, &[]).is_unknown());
    }

    #[test]
    fn test_classification_string_form() {
        assert_eq!(Classification::Unknown.as_str(), "Unknown");
        let c: Classification = "Abdomen".to_string().into();
        assert!(c.is_region("Abdomen"));
        let u: Classification = "Unknown".to_string().into();
        assert!(u.is_unknown());
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"Abdomen\"");
    }

    #[test]
    fn test_center_size() {
        let b = Aabb::from_center_size(Vec3::new(0.0, 1.0, 0.0), Vec3::ONE);
        assert_eq!(b.min, Vec3::new(-0.5, 0.5, -0.5));
        assert_eq!(b.center(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(b.size(), Vec3::ONE);
    }

    #[test]
    fn test_map_keeps_min_below_max() {
        let b = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let flipped = b.map(|p| -p);
        assert_eq!(flipped.min, Vec3::splat(-1.0));
        assert_eq!(flipped.max, Vec3::ZERO);
    }
}
