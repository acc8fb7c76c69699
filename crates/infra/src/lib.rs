//! Infrastructure layer: snapshot persistence and the file-backed
//! diagnostic log.
//!
//! Domain crates do no IO; everything that touches the filesystem lives
//! here.

pub mod log_sink;
pub mod snapshot;

pub use log_sink::{DEFAULT_LOG_PATH, FileSink};
pub use snapshot::{DEFAULT_SNAPSHOT_PATH, SnapshotError, load, save};
