//! Scanner report ingestion.
//!
//! The report is produced by a separate hostname-resolution tool. Decoding is structural only:
//! every entry must carry `ip` and `hostname`, anything else is ignored. Either the whole report
//! decodes or loading fails.

mod load;

pub use load::{ScanLoadError, load_scan_results, parse_scan_results};
