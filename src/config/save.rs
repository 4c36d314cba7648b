use std::path::Path;

use anyhow::{Context, Result};

use super::types::GridAtlasConfig;

impl GridAtlasConfig {
    /// Write this config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).context("failed to serialize config to JSON")?;

        std::fs::write(path, content)
            .with_context(|| format!("failed to write config file: {}", path.display()))?;

        Ok(())
    }
}

/// Express `path` relative to `base` for storing inside a config file.
///
/// Falls back to the path as given when it does not live under `base`
/// (e.g. a different drive on Windows).
pub fn relative_to(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
