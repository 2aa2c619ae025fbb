use hostmerge_types::{Host, ScanResult};
use std::collections::BTreeMap;
use tracing::debug;

/// Scanner results whose IP matched no host, grouped by IP.
///
/// Iteration is ordered by IP string so operator output is stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnmatchedIndex {
    by_ip: BTreeMap<String, Vec<ScanResult>>,
}

impl UnmatchedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: ScanResult) {
        self.by_ip.entry(result.ip.clone()).or_default().push(result);
    }

    pub fn get(&self, ip: &str) -> Option<&[ScanResult]> {
        self.by_ip.get(ip).map(Vec::as_slice)
    }

    /// Number of distinct unmatched IPs.
    pub fn len(&self) -> usize {
        self.by_ip.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_ip.is_empty()
    }

    pub fn ips(&self) -> impl Iterator<Item = &str> {
        self.by_ip.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ScanResult])> {
        self.by_ip.iter().map(|(ip, rs)| (ip.as_str(), rs.as_slice()))
    }
}

/// Accumulated changes for every host sharing one IPv4.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostUpdate {
    /// Hostnames to append, in scanner order. Not deduplicated.
    pub hostnames: Vec<String>,

    /// Set by the first matching result. `rebuild_hosts` writes the configured tag list from
    /// the reconciler, so tags are never accumulated here.
    pub tagged: bool,
}

/// Result of matching a scanner report against a host list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Keyed by host IPv4.
    pub updates: BTreeMap<String, HostUpdate>,
    pub unmatched: UnmatchedIndex,
}

impl Reconciliation {
    pub fn update_for(&self, ipv4: &str) -> Option<&HostUpdate> {
        self.updates.get(ipv4)
    }

    pub fn matched_hosts(&self) -> usize {
        self.updates.len()
    }
}

/// Matches scanner results to hosts by exact IP string equality.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    tags: Vec<String>,
}

impl Reconciler {
    pub fn new(tags: Vec<String>) -> Self {
        Self { tags }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Classify each result as matched or unmatched and accumulate per-host changes.
    ///
    /// `hosts` is only read. Classification is per result: a result with no matching host is
    /// recorded as unmatched even when another result for the same IP did match.
    pub fn reconcile(&self, hosts: &[Host], results: &[ScanResult]) -> Reconciliation {
        let mut out = Reconciliation::default();

        for result in results {
            let found = hosts.iter().any(|h| h.ipv4 == result.ip);
            if !found {
                out.unmatched.push(result.clone());
                continue;
            }

            let update = out.updates.entry(result.ip.clone()).or_default();
            update.hostnames.push(result.hostname.clone());
            update.tagged = true;
        }

        debug!(
            results = results.len(),
            matched_hosts = out.matched_hosts(),
            unmatched_ips = out.unmatched.len(),
            "reconciled scanner results"
        );
        out
    }
}
