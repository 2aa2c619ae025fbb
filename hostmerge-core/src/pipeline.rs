//! The merge pipeline, extracted from the CLI.
//!
//! I/O happens only through the port traits. Stages run strictly in order: load the report,
//! export the project, reconcile, rebuild, publish. A malformed report fails before any
//! network call.

use crate::error::DroneError;
use crate::ports::{ImportOptions, ProjectApi, ScanSource};
use crate::publish::publish;
use crate::settings::MergeSettings;
use hostmerge_domain::{Reconciler, Reconciliation, build_project, forced_hosts, rebuild_hosts};
use hostmerge_types::{ImportResponse, Project};
use tracing::{debug, info};

/// Outcome of `run_merge`.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// The project as submitted.
    pub project: Project,
    pub reconciliation: Reconciliation,
    /// Hosts created for unmatched IPs (zero unless forced).
    pub forced_hosts: usize,
    pub response: ImportResponse,
}

/// Run the whole merge and submit the result once.
pub fn run_merge(
    settings: &MergeSettings,
    scans: &dyn ScanSource,
    api: &dyn ProjectApi,
) -> Result<MergeOutcome, DroneError> {
    let results = scans.load_results()?;
    debug!(results = results.len(), "scanner report loaded");

    let exported = api
        .export_project(&settings.project_id)
        .map_err(|e| DroneError::Remote(format!("Unable to export project. Error {e:#}")))?;
    debug!(
        project = %settings.project_id,
        hosts = exported.hosts.len(),
        "project exported"
    );

    let reconciler = Reconciler::new(settings.tags.clone());
    let reconciliation = reconciler.reconcile(&exported.hosts, &results);

    let mut hosts = rebuild_hosts(&exported.hosts, &reconciliation, reconciler.tags());
    let forced = if settings.force_hosts {
        let extra = forced_hosts(&reconciliation.unmatched);
        let n = extra.len();
        hosts.extend(extra);
        n
    } else {
        0
    };

    let project = build_project(&settings.project_id, hosts);
    let opts = ImportOptions {
        force_ports: settings.force_ports,
    };
    let response = publish(api, &project, &opts)?;

    info!(
        matched_hosts = reconciliation.matched_hosts(),
        unmatched_ips = reconciliation.unmatched.len(),
        forced_hosts = forced,
        "merge complete"
    );

    Ok(MergeOutcome {
        project,
        reconciliation,
        forced_hosts: forced,
        response,
    })
}
