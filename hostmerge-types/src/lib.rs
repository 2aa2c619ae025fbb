//! Shared DTOs for the hostmerge workspace.
//!
//! # Design constraints
//! - Scanner output and Lair payloads are owned by other tools; decode tolerantly.
//! - Unknown fields are ignored, absent fields take their defaults.
//! - Field names on the wire follow the Lair API server, not Rust conventions.

pub mod project;
pub mod response;
pub mod scan;

mod serde_util;

pub use project::{Command, Host, Os, Project};
pub use response::ImportResponse;
pub use scan::ScanResult;

/// Identity this tool stamps onto projects and hosts it touches.
pub mod tool {
    /// Written to `Project.tool`, `Command.tool`, and `Host.last_modified_by`.
    pub const TOOL_NAME: &str = "drone-blacksheepwall";
}
