use std::path::Path;

use anyhow::Result;
use log::debug;

use crate::error::GridAtlasError;

/// Read spritesheet dimensions from the file header.
///
/// Only the header is parsed; pixel data is never decoded. The layout engine
/// needs the width to know how many columns fit per row.
pub fn probe_dimensions(path: &Path) -> Result<(u32, u32)> {
    let (width, height) =
        image::image_dimensions(path).map_err(|e| GridAtlasError::ImageProbe {
            path: path.to_path_buf(),
            source: e,
        })?;

    debug!("Probed {}: {}x{}", path.display(), width, height);

    Ok((width, height))
}
