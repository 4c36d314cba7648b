use std::collections::BTreeMap;

use super::{Anchor, Animation, AtlasDocument, FrameRecord, Meta, Rect, Size};
use crate::grid::Frame;

/// Combine frames and animations into one atlas document.
///
/// Frame geometry arrives in the scaled editing space and is divided back by
/// `scale` here, so the document always carries source-pixel coordinates
/// regardless of how the frames were laid out on screen. `scale` must be the
/// same positive factor the frames were built with.
///
/// Animation indexes resolve against the frame list by position; an index
/// with no frame produces `null` at that position in the exported sequence.
/// Never fails for well-formed inputs.
pub fn create_document(
    frames: &[Frame],
    animations: &[Animation],
    scale: f64,
    image: Option<String>,
) -> AtlasDocument {
    let mut doc_frames = BTreeMap::new();
    for frame in frames {
        doc_frames.insert(
            frame.name.clone(),
            FrameRecord {
                frame: Rect {
                    x: frame.x / scale,
                    y: frame.y / scale,
                    w: frame.width / scale,
                    h: frame.height / scale,
                },
                source_size: Size {
                    w: frame.width / scale,
                    h: frame.height / scale,
                },
                anchor: Anchor::CENTER,
                trimmed: false,
                rotated: false,
            },
        );
    }

    let mut doc_animations = BTreeMap::new();
    for animation in animations {
        let sequence = animation
            .frame_indexes
            .iter()
            .map(|&index| frames.get(index).map(|frame| frame.name.clone()))
            .collect();
        doc_animations.insert(animation.name.clone(), sequence);
    }

    AtlasDocument {
        frames: doc_frames,
        animations: doc_animations,
        // The renderer hint stays 1 even for scaled layouts; geometry is
        // already de-scaled above. See DESIGN.md before changing this.
        meta: Meta { image, scale: 1 },
    }
}
