use serde::{Deserialize, Serialize};

pub mod content;

/// Identifier of an anatomical region (matches the keys of the content tables)
pub type RegionId = String;

/// Sentinel returned when a pick cannot be attributed to any region
pub const UNKNOWN_REGION: &str = "Unknown";

/// Candidate group of regions tested together for a class of mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupId {
    HeadRegion,
    LeftArmAndHand,
    RightArmAndHand,
    TorsoAndBack,
    Legs,
}

impl GroupId {
    /// All groups, in catalog order
    pub fn all() -> &'static [GroupId] {
        &[
            GroupId::HeadRegion,
            GroupId::LeftArmAndHand,
            GroupId::RightArmAndHand,
            GroupId::TorsoAndBack,
            GroupId::Legs,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupId::HeadRegion => "HeadRegion",
            GroupId::LeftArmAndHand => "LeftArmAndHand",
            GroupId::RightArmAndHand => "RightArmAndHand",
            GroupId::TorsoAndBack => "TorsoAndBack",
            GroupId::Legs => "Legs",
        }
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed per-axis intervals `[min, max]` of a region, in catalog space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionBounds {
    pub x: [f32; 2],
    pub y: [f32; 2],
    pub z: [f32; 2],
}

impl RegionBounds {
    pub const fn new(x: [f32; 2], y: [f32; 2], z: [f32; 2]) -> Self {
        Self { x, y, z }
    }

    /// First axis whose interval is inverted (`min > max`) or not finite, if any
    pub fn invalid_axis(&self) -> Option<char> {
        [('x', self.x), ('y', self.y), ('z', self.z)]
            .into_iter()
            .find(|(_, [lo, hi])| !lo.is_finite() || !hi.is_finite() || lo > hi)
            .map(|(axis, _)| axis)
    }
}

/// One named region as it appears in a catalog definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionDef {
    pub id: RegionId,
    #[serde(flatten)]
    pub bounds: RegionBounds,
}

/// A group and the regions it owns, in evaluation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDef {
    pub group: GroupId,
    #[serde(default)]
    pub regions: Vec<RegionDef>,
}

/// Serialized form of a full region catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CatalogDef {
    pub groups: Vec<GroupDef>,
}

/// Human-readable info about a region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionInfo {
    pub name: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_id_serde() {
        let json = serde_json::to_string(&GroupId::TorsoAndBack).unwrap();
        assert_eq!(json, "\"TorsoAndBack\"");
        let back: GroupId = serde_json::from_str("\"Legs\"").unwrap();
        assert_eq!(back, GroupId::Legs);
    }

    #[test]
    fn test_group_display_matches_serde_name() {
        for group in GroupId::all() {
            let json = serde_json::to_string(group).unwrap();
            assert_eq!(json, format!("\"{}\"", group));
        }
    }

    #[test]
    fn test_region_def_flattened_bounds() {
        let json = r#"{"id": "Head", "x": [-0.2, 0.2], "y": [1.54, 2.2], "z": [-0.35, 0.25]}"#;
        let def: RegionDef = serde_json::from_str(json).unwrap();
        assert_eq!(def.id, "Head");
        assert_eq!(def.bounds.y, [1.54, 2.2]);
    }

    #[test]
    fn test_group_def_without_regions() {
        let def: GroupDef = serde_json::from_str(r#"{"group": "LeftArmAndHand"}"#).unwrap();
        assert!(def.regions.is_empty());
    }

    #[test]
    fn test_invalid_axis() {
        let ok = RegionBounds::new([0.0, 1.0], [0.0, 1.0], [0.0, 1.0]);
        assert_eq!(ok.invalid_axis(), None);

        let inverted = RegionBounds::new([0.0, 1.0], [2.0, 1.0], [0.0, 1.0]);
        assert_eq!(inverted.invalid_axis(), Some('y'));

        let nan = RegionBounds::new([0.0, 1.0], [0.0, 1.0], [f32::NAN, 1.0]);
        assert_eq!(nan.invalid_axis(), Some('z'));
    }

    #[test]
    fn test_degenerate_interval_is_valid() {
        let flat = RegionBounds::new([0.5, 0.5], [0.0, 1.0], [0.0, 1.0]);
        assert_eq!(flat.invalid_axis(), None);
    }
}
