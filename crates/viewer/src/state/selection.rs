//! Pick handling: route, classify, frame the camera, report the region.
//!
//! The controller is a small state machine driven by host callbacks:
//!
//! ```text
//! Idle ──on_pick──▶ Selecting ──on_frame──▶ Selected ──close──▶ Idle
//!                      ▲                        │
//!                      └─────────on_pick────────┘
//! ```
//!
//! While `Selecting`, orbit interaction on the rig is disabled so user input
//! cannot fight the programmatic camera move. It is re-enabled on the next
//! rendered frame, strictly after the pose has been applied.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::regions::{MeshRouter, RegionCatalog};
use crate::state::settings::ViewerSettings;
use crate::viewport::camera::{frame, CameraPose, CameraRig, FramingOptions};
use crate::viewport::layout::ModelLayout;
use crate::viewport::picking::{classify, Aabb, Classification};

/// Region framed with its catalog box instead of the clicked mesh bounds
pub const HEAD_REGION: &str = "Head";

/// One click on the model, as delivered by the host
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PickEvent {
    /// Name of the mesh under the pointer
    pub mesh_name: String,
    /// Intersection point, world space
    pub point: Vec3,
    /// World-space bounds of the clicked object
    pub object_bounds: Aabb,
}

/// Receives the selected region; `None` when the selection is cleared
pub trait SelectionListener {
    fn region_selected(&mut self, region: Option<&Classification>);
}

/// Controller state
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionPhase {
    Idle,
    /// Pose applied, waiting one frame before re-enabling interaction
    Selecting { pending: Classification },
    Selected,
}

impl SelectionPhase {
    pub fn name(&self) -> &'static str {
        match self {
            SelectionPhase::Idle => "idle",
            SelectionPhase::Selecting { .. } => "selecting",
            SelectionPhase::Selected => "selected",
        }
    }
}

/// Camera placement captured when the rig first became available
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HomePose {
    pub pose: CameraPose,
    pub fov: f32,
}

/// What a pick resolved to
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PickOutcome {
    pub region: Classification,
    /// Pick point in catalog space
    pub catalog_point: Vec3,
    /// Box the camera was framed on, world space
    pub framed: Aabb,
    /// Pose applied to the rig, if one is attached
    pub pose: Option<CameraPose>,
}

/// Orchestrates a pick from mesh name to camera move and UI notification
pub struct SelectionController<R: CameraRig, L: SelectionListener> {
    catalog: RegionCatalog,
    router: MeshRouter,
    settings: ViewerSettings,
    rig: Option<R>,
    listener: L,
    phase: SelectionPhase,
    selected: Option<Classification>,
    home: Option<HomePose>,
    layout: ModelLayout,
}

impl<R: CameraRig, L: SelectionListener> SelectionController<R, L> {
    pub fn new(
        catalog: RegionCatalog,
        router: MeshRouter,
        settings: ViewerSettings,
        listener: L,
    ) -> Self {
        let layout = settings.layout.reference();
        Self {
            catalog,
            router,
            settings,
            rig: None,
            listener,
            phase: SelectionPhase::Idle,
            selected: None,
            home: None,
            layout,
        }
    }

    /// Hand the controller the host camera. The home pose is captured the
    /// first time a rig with orbit controls is attached; later rigs keep it.
    pub fn attach_rig(&mut self, rig: R) {
        if self.home.is_none() && rig.has_orbit_controls() {
            let state = rig.state();
            let home = HomePose {
                pose: CameraPose {
                    position: state.position,
                    target: rig.target(),
                    near: state.near,
                    far: state.far,
                },
                fov: state.fov,
            };
            tracing::debug!("Captured home pose {:?}", home);
            self.home = Some(home);
        }
        self.rig = Some(rig);
    }

    pub fn rig(&self) -> Option<&R> {
        self.rig.as_ref()
    }

    pub fn rig_mut(&mut self) -> Option<&mut R> {
        self.rig.as_mut()
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn phase(&self) -> &SelectionPhase {
        &self.phase
    }

    /// Region of the completed selection
    pub fn selected(&self) -> Option<&Classification> {
        self.selected.as_ref()
    }

    pub fn home(&self) -> Option<&HomePose> {
        self.home.as_ref()
    }

    pub fn layout(&self) -> ModelLayout {
        self.layout
    }

    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    pub fn router(&self) -> &MeshRouter {
        &self.router
    }

    pub fn settings(&self) -> &ViewerSettings {
        &self.settings
    }

    /// Resolve a pick to a region without touching the camera.
    /// Catalog failures are logged and resolve to `Unknown`.
    pub fn guess_region(&self, mesh_name: &str, catalog_point: Vec3) -> Classification {
        match self.try_guess_region(mesh_name, catalog_point) {
            Ok(region) => region,
            Err(e) => {
                tracing::warn!("Error while guessing body part for '{mesh_name}': {e}");
                Classification::Unknown
            }
        }
    }

    fn try_guess_region(
        &self,
        mesh_name: &str,
        catalog_point: Vec3,
    ) -> Result<Classification, CatalogError> {
        let outcome = self.router.route(mesh_name, &self.catalog)?;
        Ok(classify(catalog_point, &outcome.candidates))
    }

    /// World point -> catalog space under the current layout
    pub fn to_catalog_space(&self, world: Vec3) -> Vec3 {
        self.layout
            .to_reference(&self.settings.layout.reference(), world)
    }

    /// Handle a click. Supersedes any selection in flight.
    pub fn on_pick(&mut self, event: &PickEvent) -> PickOutcome {
        let catalog_point = self.to_catalog_space(event.point);
        let region = self.guess_region(&event.mesh_name, catalog_point);
        let (framed, options) = self.focus_box(&region, &event.object_bounds);

        tracing::info!(
            "Picked '{}' at {:?} -> {}",
            event.mesh_name,
            event.point,
            region
        );

        let Some(rig) = self.rig.as_mut() else {
            tracing::debug!("No camera rig attached; skipping framing");
            self.commit(region.clone());
            return PickOutcome {
                region,
                catalog_point,
                framed,
                pose: None,
            };
        };

        if rig.has_orbit_controls() {
            rig.set_enabled(false);
            rig.set_pan_enabled(false);
        }
        let pose = frame(&rig.state(), &framed, &options);
        rig.set_pose(&pose);

        self.phase = SelectionPhase::Selecting {
            pending: region.clone(),
        };

        PickOutcome {
            region,
            catalog_point,
            framed,
            pose: Some(pose),
        }
    }

    /// Per-frame callback from the host. Completes a pending selection.
    /// Returns true when a selection was committed on this frame.
    pub fn on_frame(&mut self) -> bool {
        let SelectionPhase::Selecting { pending } = &self.phase else {
            return false;
        };
        let pending = pending.clone();
        if let Some(rig) = self.rig.as_mut().filter(|r| r.has_orbit_controls()) {
            rig.set_enabled(true);
        }
        self.commit(pending);
        true
    }

    /// Clear the selection and send the camera home
    pub fn close(&mut self) {
        self.selected = None;
        self.phase = SelectionPhase::Idle;

        // A camera without orbit controls is left where it is.
        let rig = self.rig.as_mut().filter(|r| r.has_orbit_controls());
        if let (Some(rig), Some(home)) = (rig, self.home) {
            rig.set_fov(home.fov);
            rig.set_pose(&home.pose);
            rig.set_enabled(true);
            rig.set_pan_enabled(true);
        }

        self.listener.region_selected(None);
    }

    /// Viewport resized: switch model layout. Returns the new layout when
    /// it changed.
    pub fn resize(&mut self, width: f32, height: f32) -> Option<ModelLayout> {
        let next = self.settings.layout.for_viewport(width, height);
        if next == self.layout {
            return None;
        }
        tracing::debug!("Viewport {width}x{height}: model layout {:?}", next);
        self.layout = next;
        Some(next)
    }

    /// Box to frame for a region, in world space, and the framing to use
    fn focus_box(&self, region: &Classification, object_bounds: &Aabb) -> (Aabb, FramingOptions) {
        if region.is_region(HEAD_REGION) {
            if let Ok(head) = self.catalog.region(HEAD_REGION) {
                let reference = self.settings.layout.reference();
                let world = self.layout.box_from_reference(&reference, &head.bounds);
                return (world, self.settings.framing.head());
            }
        }
        (*object_bounds, self.settings.framing.generic())
    }

    fn commit(&mut self, region: Classification) {
        self.selected = Some(region);
        self.phase = SelectionPhase::Selected;
        self.listener.region_selected(self.selected.as_ref());
    }
}
