//! Region catalog: named anatomical regions grouped into candidate sets.
//!
//! Bounds are expressed in catalog space (see [`crate::viewport::layout`]).
//! A catalog is built once and never mutated afterwards.

use shared::{CatalogDef, GroupDef, GroupId, RegionBounds, RegionDef};

use crate::error::CatalogError;
use crate::viewport::picking::Aabb;

/// A named anatomical selection target
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    pub id: String,
    pub bounds: Aabb,
    pub group: GroupId,
}

/// Immutable table of regions, organized by group in evaluation order
#[derive(Clone, Debug)]
pub struct RegionCatalog {
    regions: Vec<Region>,
    /// Group -> index range into `regions`
    groups: Vec<(GroupId, std::ops::Range<usize>)>,
}

impl RegionCatalog {
    /// Build a catalog from its serialized definition, validating bounds
    /// and uniqueness of group and region ids.
    pub fn from_def(def: &CatalogDef) -> Result<Self, CatalogError> {
        let mut regions: Vec<Region> = Vec::new();
        let mut groups = Vec::with_capacity(def.groups.len());

        for group_def in &def.groups {
            if groups.iter().any(|(g, _)| *g == group_def.group) {
                return Err(CatalogError::DuplicateGroup(group_def.group));
            }
            let start = regions.len();
            for region_def in &group_def.regions {
                if regions.iter().any(|r| r.id == region_def.id) {
                    return Err(CatalogError::DuplicateRegion(region_def.id.clone()));
                }
                if let Some(axis) = region_def.bounds.invalid_axis() {
                    return Err(CatalogError::InvalidBounds {
                        id: region_def.id.clone(),
                        axis,
                    });
                }
                regions.push(Region {
                    id: region_def.id.clone(),
                    bounds: Aabb::from_ranges(&region_def.bounds),
                    group: group_def.group,
                });
            }
            groups.push((group_def.group, start..regions.len()));
        }

        tracing::debug!(
            "Region catalog loaded: {} groups, {} regions",
            groups.len(),
            regions.len()
        );
        Ok(Self { regions, groups })
    }

    /// Parse and build a catalog from JSON
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let def: CatalogDef = serde_json::from_str(json)?;
        Self::from_def(&def)
    }

    /// The built-in body map
    pub fn builtin() -> Self {
        Self::from_def(&builtin_def()).unwrap_or_else(|e| {
            // The built-in table is static data; a failure here is a bug in it.
            tracing::error!("Built-in region catalog rejected: {e}");
            Self {
                regions: Vec::new(),
                groups: Vec::new(),
            }
        })
    }

    /// Look up a region by id
    pub fn region(&self, id: &str) -> Result<&Region, CatalogError> {
        self.regions
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| CatalogError::MissingRegion(id.to_string()))
    }

    /// Regions of a group, in evaluation order
    pub fn group(&self, group: GroupId) -> Result<&[Region], CatalogError> {
        self.groups
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, range)| &self.regions[range.clone()])
            .ok_or(CatalogError::MissingGroup(group))
    }

    /// Whether a region with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.regions.iter().any(|r| r.id == id)
    }

    /// All regions, group by group
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Groups present in this catalog, in definition order
    pub fn group_ids(&self) -> impl Iterator<Item = GroupId> + '_ {
        self.groups.iter().map(|(g, _)| *g)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Default for RegionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn def(id: &str, x: [f32; 2], y: [f32; 2], z: [f32; 2]) -> RegionDef {
    RegionDef {
        id: id.to_string(),
        bounds: RegionBounds::new(x, y, z),
    }
}

/// Definition of the built-in body map.
///
/// The Head box spans the neck up to the back of the skull; the arm/hand
/// groups are single coarse boxes used as binary containment tests.
pub fn builtin_def() -> CatalogDef {
    CatalogDef {
        groups: vec![
            GroupDef {
                group: GroupId::HeadRegion,
                regions: vec![def("Head", [-0.2, 0.2], [1.54, 2.2], [-0.35, 0.25])],
            },
            GroupDef {
                group: GroupId::LeftArmAndHand,
                regions: vec![def("Left Arm", [1.29, 1.6], [0.74, 0.96], [-0.2, 0.06])],
            },
            GroupDef {
                group: GroupId::RightArmAndHand,
                regions: vec![def("Right Arm", [-1.6, -1.25], [0.75, 1.0], [-0.2, 0.06])],
            },
            GroupDef {
                group: GroupId::TorsoAndBack,
                regions: vec![
                    def("Left Shoulder", [0.2, 0.5], [1.3, 1.6], [-0.03, 0.1]),
                    def("Right Shoulder", [-0.62, -0.28], [1.18, 1.62], [-0.27, 0.27]),
                    def("Left Rib", [0.07, 0.35], [1.0, 1.42], [0.06, 0.25]),
                    def("Right Rib", [-0.35, -0.01], [0.85, 1.5], [0.1, 0.22]),
                    def("Abdomen", [-0.3, 0.3], [0.5, 0.9], [0.05, 0.22]),
                    def("Back", [-0.3, 0.3], [0.6, 1.4], [-0.4, -0.05]),
                ],
            },
            GroupDef {
                group: GroupId::Legs,
                regions: vec![
                    def("Left Thigh", [0.01, 0.55], [-0.35, 0.2], [-0.15, 0.25]),
                    def("Right Thigh", [-0.55, -0.05], [-0.35, 0.2], [-0.2, 0.25]),
                    def("Left Leg", [0.1, 0.4], [-1.3, -0.4], [-0.2, 0.2]),
                    def("Right Leg", [-0.4, -0.1], [-1.3, -0.4], [-0.2, 0.2]),
                    def("Left Feet", [0.1, 0.4], [-2.6, -1.3], [-0.35, 0.2]),
                    def("Right Feet", [-0.4, -0.1], [-1.6, -1.3], [-0.35, 0.2]),
                ],
            },
        ],
    }
}
