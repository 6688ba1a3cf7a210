//! Mesh router: picks the ordered candidate regions for a mesh name.
//!
//! Mesh names come from the rendering host as free text, so routing is an
//! ordered list of substring rules. The first rule with any substring
//! contained in the mesh name decides; later rules are never consulted.
//! When nothing matches, the router's [`Fallback`] applies.

use serde::{Deserialize, Serialize};
use shared::{GroupId, RegionId};

use crate::error::CatalogError;
use crate::regions::{Region, RegionCatalog};

/// One routing rule
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshRoute {
    /// Rule name, for logs
    pub name: String,
    /// Matches when the mesh name contains any of these
    pub match_substrings: Vec<String>,
    /// Groups the candidate regions are drawn from
    pub groups_to_test: Vec<GroupId>,
    /// Candidate regions in evaluation order; empty means every region of
    /// `groups_to_test` in catalog order
    #[serde(default)]
    pub order: Vec<RegionId>,
}

impl MeshRoute {
    pub fn matches(&self, mesh_name: &str) -> bool {
        self.match_substrings
            .iter()
            .any(|s| mesh_name.contains(s.as_str()))
    }

    /// Resolve this rule's candidates against a catalog
    fn candidates<'c>(&self, catalog: &'c RegionCatalog) -> Result<Vec<&'c Region>, CatalogError> {
        if self.order.is_empty() {
            let mut out = Vec::new();
            for group in &self.groups_to_test {
                out.extend(catalog.group(*group)?);
            }
            return Ok(out);
        }

        self.order
            .iter()
            .map(|id| {
                let region = catalog.region(id)?;
                if self.groups_to_test.contains(&region.group) {
                    Ok(region)
                } else {
                    Err(CatalogError::MissingRegion(format!(
                        "{id} (not in groups {:?} of route '{}')",
                        self.groups_to_test, self.name
                    )))
                }
            })
            .collect()
    }
}

/// What to test when no rule matches a mesh name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fallback {
    /// Test every region of this group, in catalog order
    Group(GroupId),
    /// Test nothing; the pick resolves to `Unknown`
    Nothing,
}

/// Fallback of the built-in router.
///
/// Unmatched meshes are tested against the legs. This mirrors how the body
/// model has always behaved and is pending product review.
pub const DEFAULT_FALLBACK: Fallback = Fallback::Group(GroupId::Legs);

/// Which rule produced a set of candidates
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteMatch {
    Rule(usize),
    Fallback,
}

/// Candidates for one mesh, with provenance
#[derive(Clone, Debug)]
pub struct RouteOutcome<'c> {
    pub matched: RouteMatch,
    pub candidates: Vec<&'c Region>,
}

/// Ordered substring rules plus an explicit fallback
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshRouter {
    pub rules: Vec<MeshRoute>,
    pub fallback: Fallback,
}

impl MeshRouter {
    pub fn new(rules: Vec<MeshRoute>, fallback: Fallback) -> Self {
        Self { rules, fallback }
    }

    /// Head rule first, then torso, then the legs fallback.
    ///
    /// `CC_Base_Body_1` appears in both the head and the torso rule; the
    /// head rule always claims it.
    pub fn builtin() -> Self {
        Self::new(
            vec![
                MeshRoute {
                    name: "head".to_string(),
                    match_substrings: strings(&[
                        "CC_Base_Body_1",
                        "CC_Base_Body_6",
                        "Male_Brow_2_1",
                        "Male_Brow_2_2",
                    ]),
                    groups_to_test: vec![GroupId::HeadRegion],
                    order: strings(&["Head"]),
                },
                MeshRoute {
                    name: "torso".to_string(),
                    match_substrings: strings(&["CC_Base_Body_2", "CC_Base_Body_1"]),
                    groups_to_test: vec![GroupId::TorsoAndBack],
                    order: strings(&["Left Rib", "Right Rib", "Abdomen", "Back"]),
                },
            ],
            DEFAULT_FALLBACK,
        )
    }

    /// Index of the first rule matching the mesh name
    pub fn matching_rule(&self, mesh_name: &str) -> Option<usize> {
        self.rules.iter().position(|r| r.matches(mesh_name))
    }

    /// Ordered candidate regions for a mesh
    pub fn route<'c>(
        &self,
        mesh_name: &str,
        catalog: &'c RegionCatalog,
    ) -> Result<RouteOutcome<'c>, CatalogError> {
        match self.matching_rule(mesh_name) {
            Some(index) => {
                let rule = &self.rules[index];
                tracing::debug!("Mesh '{mesh_name}' routed by rule '{}'", rule.name);
                Ok(RouteOutcome {
                    matched: RouteMatch::Rule(index),
                    candidates: rule.candidates(catalog)?,
                })
            }
            None => {
                tracing::debug!("Mesh '{mesh_name}' matched no rule, using {:?}", self.fallback);
                let candidates = match self.fallback {
                    Fallback::Group(group) => catalog.group(group)?.iter().collect(),
                    Fallback::Nothing => Vec::new(),
                };
                Ok(RouteOutcome {
                    matched: RouteMatch::Fallback,
                    candidates,
                })
            }
        }
    }
}

impl Default for MeshRouter {
    fn default() -> Self {
        Self::builtin()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
