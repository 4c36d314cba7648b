use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridAtlasError {
    #[error(
        "Frame cell ({cell_width}px wide including gap) does not fit within image width {image_width}px"
    )]
    InvalidLayout { cell_width: f64, image_width: f64 },

    #[error("Grid spec field '{field}' is out of range (got {value})")]
    InvalidSpec { field: &'static str, value: f64 },

    #[error("No image width available: pass a spritesheet image or --image-width")]
    MissingImageWidth,

    #[error("Failed to read dimensions of '{path}': {source}")]
    ImageProbe {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
