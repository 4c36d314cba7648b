use serde::{Deserialize, Serialize};

/// 2D pixel vector used for grid offsets and gaps
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
}

/// Size of one grid cell before scaling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: f64,
    pub height: f64,
}

/// Caller-constructed description of a uniform frame grid
///
/// Immutable for one layout invocation; rebuild the whole frame list
/// instead of mutating it.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    /// Total frame count
    pub amount: u32,
    /// Pixel offset of the grid's first cell from the image origin
    pub start_offset: GridPoint,
    /// Gap inserted between adjacent columns/rows
    pub space_between: GridPoint,
    /// Size of one cell before scaling
    pub frame_size: FrameSize,
    /// Base string for generated frame names
    pub frame_name: String,
}

/// One grid cell's rectangle plus its generated name
///
/// Coordinates live in the scaled editing space; the serializer divides
/// them back out before export.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// `"{frame_name}_{ordinal}"`, ordinal = row-major position
    pub name: String,
}
