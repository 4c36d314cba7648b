mod serializer;
mod types;

pub use serializer::create_document;
pub use types::{Anchor, Animation, AtlasDocument, FrameRecord, Meta, Rect, Size};
