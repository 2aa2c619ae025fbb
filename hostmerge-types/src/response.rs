use serde::{Deserialize, Serialize};

/// Status value the API server uses to signal a failed import.
pub const STATUS_ERROR: &str = "Error";

/// Body returned by the API server after an import.
///
/// The server is inconsistent about key casing, so both spellings are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResponse {
    #[serde(default, alias = "Status")]
    pub status: String,

    #[serde(default, alias = "Message")]
    pub message: String,
}

impl ImportResponse {
    pub fn is_error(&self) -> bool {
        self.status == STATUS_ERROR
    }
}
