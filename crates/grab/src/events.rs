use std::sync::Arc;

use crate::session::SessionTally;

/// Progress events emitted while a session runs.
#[derive(Debug, Clone)]
pub enum GrabEvent {
    /// The playlist was fetched and parsed.
    ManifestFetched {
        url: String,
        /// Number of segment references found.
        segments: usize,
    },
    /// A segment download is starting.
    SegmentStarted {
        /// 1-based position in the playlist.
        index: usize,
        total: usize,
        filename: String,
        url: String,
    },
    /// A segment attempt finished, successfully or not.
    SegmentFinished {
        index: usize,
        total: usize,
        filename: String,
        ok: bool,
    },
    /// Every reference has been attempted.
    Completed { tally: SessionTally },
}

/// Callback invoked for every [`GrabEvent`].
pub type OnGrab = Arc<dyn Fn(GrabEvent) + Send + Sync>;
