mod layout;
mod types;

pub use layout::build_frames;
pub use types::{Frame, FrameSize, GridPoint, GridSpec};
