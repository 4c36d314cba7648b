mod json;
mod sink;

pub use json::{ATLAS_CONTENT_TYPE, write_atlas};
pub use sink::{DirectorySink, ExportSink};
