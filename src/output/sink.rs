use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use log::debug;

use crate::error::GridAtlasError;

/// Capability interface for persisting an exported document.
///
/// The core hands over a base name and a ready-to-write payload and expects
/// the sink to deliver it as `{name}.json`; fire-and-forget, no retry, no
/// acknowledgment channel. Keeping this behind a trait means the layout and
/// serialization code has zero dependency on any host runtime.
pub trait ExportSink {
    fn persist(&self, name: &str, content: &str, content_type: &str) -> Result<()>;
}

/// Sink that writes `{name}.json` into a target directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ExportSink for DirectorySink {
    fn persist(&self, name: &str, content: &str, content_type: &str) -> Result<()> {
        let path = self.dir.join(format!("{}.json", name));
        debug!("Persisting {} ({})", path.display(), content_type);

        fs::write(&path, content).map_err(|e| GridAtlasError::OutputWrite {
            path,
            source: e,
        })?;

        Ok(())
    }
}
