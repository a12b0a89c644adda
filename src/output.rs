//! Machine-readable version document for build tooling.

use crate::domain::VersionOutcome;
use crate::error::Result;
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing::debug;

/// JSON document describing the outcome.
///
/// A computed result serialises all of its fields; a fallback carries the
/// fixed code and name plus the reason counting was refused.
pub fn to_json(outcome: &VersionOutcome) -> Result<String> {
    let value = match outcome {
        VersionOutcome::Computed(result) => serde_json::to_value(result)?,
        VersionOutcome::Fallback(fallback) => json!({
            "versionCode": fallback.version_code,
            "versionName": fallback.version_name,
            "reason": fallback.reason.to_string(),
        }),
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Write the JSON document to `path`, creating parent directories as needed
pub fn write_output(path: &Path, outcome: &VersionOutcome) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut document = to_json(outcome)?;
    document.push('\n');
    fs::write(path, document)?;

    debug!(path = %path.display(), "wrote version file");
    Ok(())
}
