//! Field document encoding and file output

use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::FieldError;
use crate::field::AsteroidRecord;

const INDENT: &[u8] = b"    ";

/// Encode records as a JSON array indented with four spaces
///
/// serde_json only writes UTF-8, so the lossy conversion never replaces
/// anything.
pub fn to_pretty_json(records: &[AsteroidRecord]) -> Result<String, FieldError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write the field document to `path`, replacing any existing file
///
/// Returns the document text as written.
pub fn write_field(path: impl AsRef<Path>, records: &[AsteroidRecord]) -> Result<String, FieldError> {
    let path = path.as_ref();
    let document = to_pretty_json(records)?;

    std::fs::write(path, &document).map_err(|e| FieldError::io(path, e))?;
    log::info!(
        "Wrote {} asteroids ({} bytes) to {}",
        records.len(),
        document.len(),
        path.display()
    );

    Ok(document)
}

/// Read a field document back into records
pub fn load_field(path: impl AsRef<Path>) -> Result<Vec<AsteroidRecord>, FieldError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| FieldError::io(path, e))?;
    let records: Vec<AsteroidRecord> = serde_json::from_str(&contents)?;

    log::debug!("Loaded {} asteroids from {}", records.len(), path.display());
    Ok(records)
}
