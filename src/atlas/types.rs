use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

/// Largest f64 that still represents every whole value exactly (2^53)
const MAX_EXACT_WHOLE: f64 = 9_007_199_254_740_992.0;

/// Whole pixel values serialize as JSON integers so exported documents match
/// atlases produced by earlier revisions of the tool; fractional values
/// (from non-integral scales) fall back to plain floats.
fn pixel_value<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_WHOLE {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "whole value with magnitude below 2^53"
        )]
        let whole = *value as i64;
        serializer.serialize_i64(whole)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Named, ordered list of frame references by index
///
/// Indexes are not validated against the frame list: duplicates and repeats
/// are legitimate (an animation may hold a frame for timing), and an
/// out-of-range index serializes as `null` in the exported sequence rather
/// than failing. Names should be unique per export; a duplicate silently
/// overwrites the earlier entry in the output mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    pub name: String,
    pub frame_indexes: Vec<usize>,
}

/// Pixel rectangle in unscaled source coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    #[serde(serialize_with = "pixel_value")]
    pub x: f64,
    #[serde(serialize_with = "pixel_value")]
    pub y: f64,
    #[serde(serialize_with = "pixel_value")]
    pub w: f64,
    #[serde(serialize_with = "pixel_value")]
    pub h: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    #[serde(serialize_with = "pixel_value")]
    pub w: f64,
    #[serde(serialize_with = "pixel_value")]
    pub h: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    /// Every exported frame is center-anchored
    pub const CENTER: Anchor = Anchor { x: 0.5, y: 0.5 };
}

/// Geometry record for one named frame
///
/// `trimmed` and `rotated` are always false; they exist only for format
/// compatibility with downstream consumers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRecord {
    pub frame: Rect,
    pub source_size: Size,
    pub anchor: Anchor,
    pub trimmed: bool,
    pub rotated: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    /// Source image name without extension; stripped by the caller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Document-level renderer hint, always written as the literal 1
    pub scale: u32,
}

/// One export's worth of frames and animations, ready for JSON encoding
#[derive(Debug, Clone, Serialize)]
pub struct AtlasDocument {
    pub frames: BTreeMap<String, FrameRecord>,
    pub animations: BTreeMap<String, Vec<Option<String>>>,
    pub meta: Meta,
}
