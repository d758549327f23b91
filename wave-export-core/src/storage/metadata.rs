use std::fs;
use std::path::Path;

use crate::models::error::ExportError;
use crate::models::metadata::WaveMetadata;

/// Write export metadata as a JSON sidecar file.
///
/// Creates `{wave_path}.metadata.json` alongside the WAV file.
pub fn write_metadata(metadata: &WaveMetadata, wave_path: &Path) -> Result<(), ExportError> {
    let metadata_path = wave_path.with_extension("metadata.json");
    let json = serde_json::to_string_pretty(metadata)
        .map_err(|e| ExportError::Storage(format!("failed to serialize metadata: {}", e)))?;
    fs::write(&metadata_path, json)
        .map_err(|e| ExportError::Storage(format!("failed to write metadata: {}", e)))?;
    Ok(())
}

/// Read export metadata from a JSON sidecar file.
pub fn read_metadata(wave_path: &Path) -> Result<WaveMetadata, ExportError> {
    let metadata_path = wave_path.with_extension("metadata.json");
    let json = fs::read_to_string(&metadata_path)
        .map_err(|e| ExportError::Storage(format!("failed to read metadata: {}", e)))?;
    let metadata: WaveMetadata = serde_json::from_str(&json)
        .map_err(|e| ExportError::Storage(format!("failed to parse metadata: {}", e)))?;
    Ok(metadata)
}
