//! JSON command protocol for the AI agent.
//!
//! Every command drives the [`TestHarness`] the way the rendering host
//! would: picks, frames, resizes and the close button.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use shared::content;

use crate::fixtures::PICK_OBJECT_EXTENT;
use crate::harness::TestHarness;
use crate::state::head_tilt::{TiltAxis, TiltDirection};
use crate::state::selection::PickEvent;
use crate::viewport::picking::Aabb;

/// A command the AI agent can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum AgentCommand {
    /// Click on a mesh at a world point
    Pick {
        mesh_name: String,
        point: Vec3,
        /// World bounds of the clicked object; a small box around the
        /// point when omitted
        #[serde(default)]
        object_bounds: Option<Aabb>,
    },
    /// Advance one rendered frame.
    Frame,
    /// Close the region dialog.
    Close,
    /// Resize the viewport (pixels).
    Resize { width: f32, height: f32 },
    /// Press a head tilt button.
    TiltHead { direction: TiltDirection },
    /// Reset one tilt axis.
    ResetTilt { axis: TiltAxis },
    /// Dialog content for a region; the current selection when omitted.
    Describe {
        #[serde(default)]
        region: Option<String>,
    },
    /// Inspect controller, camera and tilt state.
    Inspect,
    /// List the catalog, group by group.
    ListRegions,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: AgentCommand) -> CommandResponse {
    match cmd {
        AgentCommand::Pick {
            mesh_name,
            point,
            object_bounds,
        } => {
            let event = PickEvent {
                mesh_name,
                point,
                object_bounds: object_bounds.unwrap_or_else(|| {
                    Aabb::from_center_size(point, Vec3::splat(PICK_OBJECT_EXTENT))
                }),
            };
            let outcome = harness.pick_event(&event);
            CommandResponse::ok_with_data(serde_json::json!({
                "region": outcome.region,
                "catalog_point": outcome.catalog_point,
                "framed": outcome.framed,
                "pose": outcome.pose,
                "phase": harness.phase().name(),
            }))
        }

        AgentCommand::Frame => {
            let committed = harness.frame();
            CommandResponse::ok_with_data(serde_json::json!({
                "committed": committed,
                "selected": harness.selected(),
            }))
        }

        AgentCommand::Close => {
            harness.close();
            CommandResponse::ok()
        }

        AgentCommand::Resize { width, height } => {
            if !(width > 0.0 && height > 0.0) {
                return CommandResponse::err(format!("Invalid viewport size {width}x{height}"));
            }
            let changed = harness.resize(width, height);
            CommandResponse::ok_with_data(serde_json::json!({
                "layout_changed": changed.is_some(),
                "layout": harness.controller.layout(),
            }))
        }

        AgentCommand::TiltHead { direction } => {
            if !harness.tilt_head(direction) {
                return CommandResponse::err("Head tilt is only available while the head is selected");
            }
            CommandResponse::ok_with_data(tilt_json(harness))
        }

        AgentCommand::ResetTilt { axis } => {
            harness.reset_tilt(axis);
            CommandResponse::ok_with_data(tilt_json(harness))
        }

        AgentCommand::Describe { region } => {
            let region = region.or_else(|| harness.selected().map(|r| r.to_string()));
            let Some(region) = region else {
                return CommandResponse::err("No region selected");
            };
            if !content::has_region_info(&region) {
                return CommandResponse::err(format!("Unknown region '{region}'"));
            }
            let techniques: Vec<serde_json::Value> = content::techniques_for(&region)
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "name": t,
                        "lessons": content::lessons_for(t),
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "title": content::dialog_title(Some(&region)),
                "info": content::region_info(&region),
                "techniques": techniques,
            }))
        }

        AgentCommand::Inspect => {
            let camera = harness.camera().map(|c| {
                serde_json::json!({
                    "position": c.position,
                    "target": c.target,
                    "fov": c.fov,
                    "aspect": c.aspect,
                    "near": c.near,
                    "far": c.far,
                    "enabled": c.enabled,
                    "enable_pan": c.enable_pan,
                })
            });
            CommandResponse::ok_with_data(serde_json::json!({
                "phase": harness.phase().name(),
                "selected": harness.selected(),
                "notifications": harness.notifications(),
                "layout": harness.controller.layout(),
                "camera": camera,
                "head_tilt": tilt_json(harness),
            }))
        }

        AgentCommand::ListRegions => {
            let catalog = harness.controller.catalog();
            let groups: Vec<serde_json::Value> = catalog
                .group_ids()
                .map(|group| {
                    let regions: Vec<serde_json::Value> = catalog
                        .group(group)
                        .unwrap_or_default()
                        .iter()
                        .map(|r| serde_json::json!({ "id": r.id, "bounds": r.bounds }))
                        .collect();
                    serde_json::json!({ "group": group, "regions": regions })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "region_count": catalog.len(),
                "groups": groups,
            }))
        }
    }
}

fn tilt_json(harness: &TestHarness) -> serde_json::Value {
    serde_json::json!({
        "x_degrees": harness.head_tilt.degrees_x(),
        "z_degrees": harness.head_tilt.degrees_z(),
    })
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: AgentCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<AgentCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
