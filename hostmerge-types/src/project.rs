use crate::serde_util::null_as_default;
use serde::{Deserialize, Serialize};

/// A Lair project as exported from, or imported into, the API server.
///
/// Only the fields this tool reads or writes are modelled; anything else in an export is
/// ignored on decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(default)]
    pub tool: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub commands: Vec<Command>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub hosts: Vec<Host>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    #[serde(default)]
    pub tool: String,

    #[serde(default)]
    pub command: String,
}

/// A tracked asset keyed by `ipv4`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    #[serde(default)]
    pub ipv4: String,

    #[serde(rename = "longIpv4Addr", default)]
    pub long_ipv4_addr: u64,

    #[serde(default)]
    pub is_flagged: bool,

    #[serde(default)]
    pub last_modified_by: String,

    #[serde(default)]
    pub mac: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub os: Os,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub status_message: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub hostnames: Vec<String>,
}

impl Host {
    /// A bare host record carrying only an address and hostnames.
    pub fn with_hostnames(ipv4: impl Into<String>, hostnames: Vec<String>) -> Self {
        Self {
            ipv4: ipv4.into(),
            hostnames,
            ..Self::default()
        }
    }
}

/// Operating system fingerprint attached to a host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Os {
    #[serde(default)]
    pub tool: String,

    #[serde(default)]
    pub weight: i64,

    #[serde(default)]
    pub fingerprint: String,
}
