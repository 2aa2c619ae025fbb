//! Domain logic: merge scanner results into a project's host list.
//!
//! This crate owns *what* the imported project looks like. Fetching and submitting projects is
//! the job of `hostmerge-core`.

mod rebuild;
mod reconcile;
mod tags;

pub use rebuild::{build_project, forced_hosts, rebuild_hosts};
pub use reconcile::{HostUpdate, Reconciliation, Reconciler, UnmatchedIndex};
pub use tags::parse_tags;
