use crate::reconcile::{Reconciliation, UnmatchedIndex};
use hostmerge_types::tool::TOOL_NAME;
use hostmerge_types::{Command, Host, Project};

/// Build the output host list from the fetched hosts and the accumulated changes.
///
/// Every fetched host appears exactly once, in its original position. Each output host's tags
/// are replaced by `tags`, whether or not the host matched anything.
// TODO: confirm with Lair project owners whether tags already on the server should be merged
// instead of replaced.
pub fn rebuild_hosts(hosts: &[Host], rec: &Reconciliation, tags: &[String]) -> Vec<Host> {
    hosts
        .iter()
        .map(|h| {
            let mut hostnames = h.hostnames.clone();
            let mut last_modified_by = h.last_modified_by.clone();
            if let Some(update) = rec.update_for(&h.ipv4) {
                hostnames.extend(update.hostnames.iter().cloned());
                last_modified_by = TOOL_NAME.to_string();
            }

            Host {
                ipv4: h.ipv4.clone(),
                long_ipv4_addr: h.long_ipv4_addr,
                is_flagged: h.is_flagged,
                last_modified_by,
                mac: h.mac.clone(),
                os: h.os.clone(),
                status: h.status.clone(),
                status_message: h.status_message.clone(),
                tags: tags.to_vec(),
                hostnames,
            }
        })
        .collect()
}

/// One new host per distinct unmatched IP, carrying only the address and its hostnames.
pub fn forced_hosts(unmatched: &UnmatchedIndex) -> Vec<Host> {
    unmatched
        .iter()
        .map(|(ip, results)| {
            let hostnames = results.iter().map(|r| r.hostname.clone()).collect();
            Host::with_hostnames(ip, hostnames)
        })
        .collect()
}

/// Wrap `hosts` in a project stamped with this tool's identity.
pub fn build_project(project_id: &str, hosts: Vec<Host>) -> Project {
    Project {
        id: project_id.to_string(),
        tool: TOOL_NAME.to_string(),
        commands: vec![Command {
            tool: TOOL_NAME.to_string(),
            command: String::new(),
        }],
        hosts,
    }
}
