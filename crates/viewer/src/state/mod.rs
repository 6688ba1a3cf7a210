pub mod head_tilt;
pub mod selection;
pub mod settings;

pub use head_tilt::{find_head_node, HeadTilt, TiltAxis, TiltDirection, HEAD_NODE_CANDIDATES};
pub use selection::{
    HomePose, PickEvent, PickOutcome, SelectionController, SelectionListener, SelectionPhase,
    HEAD_REGION,
};
pub use settings::{FramingSettings, HeadTiltSettings, ViewerSettings};
