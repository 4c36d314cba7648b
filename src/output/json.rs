use anyhow::Result;

use super::sink::ExportSink;
use crate::atlas::AtlasDocument;

/// MIME type declared to the sink for atlas documents
pub const ATLAS_CONTENT_TYPE: &str = "application/json";

/// Encode the document and hand it to the sink as `{base_name}.json`.
///
/// The encoding is compact (no pretty whitespace), matching the documents
/// earlier revisions of the exporter produced.
pub fn write_atlas(document: &AtlasDocument, sink: &dyn ExportSink, base_name: &str) -> Result<()> {
    let content = serde_json::to_string(document)?;
    sink.persist(base_name, &content, ATLAS_CONTENT_TYPE)
}
