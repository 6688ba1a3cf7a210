// Library crate: region picking, camera framing and the headless agent interface.
// The binary only replays command scripts against the harness.

pub mod command;
pub mod error;
pub mod fixtures;
pub mod harness;
pub mod regions;
pub mod state;
pub mod viewport;
