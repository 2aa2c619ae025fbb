use serde::{Deserialize, Serialize};

/// One IP-to-hostname resolution emitted by the scanner.
///
/// The scanner report is a JSON array of these objects. Only `ip` and `hostname` are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub ip: String,

    pub hostname: String,

    /// Which resolution technique produced this entry (e.g. "reverse", "cert").
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub src: String,
}

impl ScanResult {
    pub fn new(ip: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            hostname: hostname.into(),
            src: String::new(),
        }
    }
}
