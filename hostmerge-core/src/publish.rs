//! Submit a built project and report unmatched scanner IPs.

use crate::error::DroneError;
use crate::ports::{ImportOptions, ProjectApi};
use hostmerge_domain::UnmatchedIndex;
use hostmerge_types::{ImportResponse, Project};
use std::io::{self, Write};
use tracing::{debug, info};

/// Submit `project` once and interpret the server's reply.
pub fn publish(
    api: &dyn ProjectApi,
    project: &Project,
    opts: &ImportOptions,
) -> Result<ImportResponse, DroneError> {
    let reply = api
        .import_project(project, opts)
        .map_err(|e| DroneError::Remote(format!("Unable to import project. Error {e:#}")))?;
    debug!(status = reply.status, bytes = reply.body.len(), "import reply received");

    let response = match serde_json::from_str::<ImportResponse>(&reply.body) {
        Ok(response) => response,
        Err(_) if !reply.is_success() => {
            return Err(DroneError::Remote(format!(
                "Unable to import project. Error server returned status {}",
                reply.status
            )));
        }
        Err(e) => {
            return Err(DroneError::Format(format!(
                "Could not unmarshal JSON. Error {e}"
            )));
        }
    };

    if response.is_error() {
        return Err(DroneError::Remote(format!(
            "Import failed. Error {}",
            response.message
        )));
    }

    info!(project = %project.id, hosts = project.hosts.len(), "project imported");
    Ok(response)
}

/// Heading printed above the unmatched IP list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmatchedNotice {
    Forced,
    Skipped,
}

impl UnmatchedNotice {
    pub fn for_policy(force_hosts: bool) -> Self {
        if force_hosts {
            UnmatchedNotice::Forced
        } else {
            UnmatchedNotice::Skipped
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            UnmatchedNotice::Forced => {
                "Info: The following hosts had hostnames and were forced to import into lair"
            }
            UnmatchedNotice::Skipped => {
                "Info: The following hosts had hostnames but could not be imported because they do not exist in lair"
            }
        }
    }
}

/// Write the notice and one unmatched IP per line. Writes nothing when `unmatched` is empty.
pub fn write_unmatched_report<W: Write>(
    out: &mut W,
    unmatched: &UnmatchedIndex,
    force_hosts: bool,
) -> io::Result<()> {
    if unmatched.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", UnmatchedNotice::for_policy(force_hosts).message())?;
    for ip in unmatched.ips() {
        writeln!(out, "{ip}")?;
    }
    Ok(())
}
