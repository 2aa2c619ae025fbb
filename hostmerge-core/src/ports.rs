//! Port traits abstracting all I/O away from the pipeline.

use hostmerge_intake::ScanLoadError;
use hostmerge_types::{Project, ScanResult};

/// Source of scanner results.
pub trait ScanSource {
    fn load_results(&self) -> Result<Vec<ScanResult>, ScanLoadError>;
}

/// Options passed through to the import call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    pub force_ports: bool,
}

/// Raw import reply; interpretation is left to the publisher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReply {
    pub status: u16,
    pub body: String,
}

impl ImportReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Remote project store (the Lair API server).
pub trait ProjectApi {
    fn export_project(&self, project_id: &str) -> anyhow::Result<Project>;
    fn import_project(&self, project: &Project, opts: &ImportOptions)
    -> anyhow::Result<ImportReply>;
}
