//! Sequential HLS segment download engine.
//!
//! Given a playlist URL, fetches its text, extracts segment references via
//! the `playlist` crate, resolves each against the playlist's base URL, and
//! downloads segments strictly one at a time with a fixed inter-download
//! delay. A failed playlist fetch aborts the run; a failed segment is
//! logged and skipped so the rest of the stream can still be recovered.

pub mod config;
pub mod error;
pub mod events;
pub mod fetch;
pub mod session;
pub mod sink;

pub use config::GrabConfig;
pub use error::GrabError;
pub use events::{GrabEvent, OnGrab};
pub use fetch::{HttpFetcher, ManifestSource, SegmentFetcher};
pub use session::{GrabSession, SessionTally};
pub use sink::{DirSink, SegmentSink};
