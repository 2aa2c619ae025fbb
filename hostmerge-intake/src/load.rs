use camino::Utf8Path;
use fs_err as fs;
use hostmerge_types::ScanResult;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanLoadError {
    #[error("io error: {message}")]
    Io { message: String },

    #[error("json parse error: {message}")]
    Json { message: String },
}

/// Read `path` and decode it as a scanner report.
pub fn load_scan_results(path: &Utf8Path) -> Result<Vec<ScanResult>, ScanLoadError> {
    debug!(path = %path, "reading scanner report");

    let contents = fs::read_to_string(path).map_err(|e| ScanLoadError::Io {
        message: e.to_string(),
    })?;

    let results = parse_scan_results(&contents)?;
    debug!(path = %path, results = results.len(), "decoded scanner report");
    Ok(results)
}

/// Decode a scanner report already held in memory.
pub fn parse_scan_results(contents: &str) -> Result<Vec<ScanResult>, ScanLoadError> {
    serde_json::from_str::<Vec<ScanResult>>(contents).map_err(|e| ScanLoadError::Json {
        message: e.to_string(),
    })
}
