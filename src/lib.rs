pub mod atlas;
pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod output;
pub mod sheet;

pub use atlas::{Animation, AtlasDocument, create_document};
pub use cli::{AnimationSpec, CliArgs};
pub use error::GridAtlasError;
pub use grid::{Frame, FrameSize, GridPoint, GridSpec, build_frames};
pub use output::{DirectorySink, ExportSink, write_atlas};
