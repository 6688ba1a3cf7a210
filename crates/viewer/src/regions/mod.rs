pub mod catalog;
pub mod router;

pub use catalog::{Region, RegionCatalog};
pub use router::{Fallback, MeshRoute, MeshRouter, RouteMatch, RouteOutcome, DEFAULT_FALLBACK};
