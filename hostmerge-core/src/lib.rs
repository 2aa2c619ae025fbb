//! Embeddable core library for hostmerge.
//!
//! Provides a clap-free, I/O-abstracted entry point for merging a scanner report into a Lair
//! project.
//!
//! # Port traits
//!
//! All I/O is abstracted behind port traits in [`ports`]:
//! - [`ScanSource`](ports::ScanSource) — load scanner results
//! - [`ProjectApi`](ports::ProjectApi) — export and import Lair projects
//!
//! The [`adapters`] module provides filesystem, HTTP, and in-memory implementations.
//!
//! # Entry points
//!
//! - [`run_merge`](pipeline::run_merge) — load, reconcile, and publish in one pass
//! - [`publish`](publish::publish) — submit a built project and interpret the reply

pub mod adapters;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod publish;
pub mod settings;

pub use error::DroneError;
pub use pipeline::{MergeOutcome, run_merge};
pub use settings::{ApiConfig, MergeSettings};

// Re-export so embedders don't need the domain and types crates directly.
pub use hostmerge_domain::{Reconciliation, UnmatchedIndex, parse_tags};
pub use hostmerge_types::{Host, ImportResponse, Project, ScanResult};
