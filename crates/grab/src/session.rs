//! One download run: fetch playlist, then walk its segments sequentially.
//!
//! Per run the session moves through
//! `Idle -> FetchingManifest -> {Failed | Parsed} -> Downloading(1..N) -> Completed`.
//! `Failed` is terminal only at the playlist stage; every per-segment
//! failure is non-terminal and `Completed` is reached once all N references
//! have been attempted. Nothing persists across runs.

use std::sync::Arc;

use playlist::{Manifest, base_url};
use tracing::{error, info};

use crate::config::{GrabConfig, LOCAL_PLAYLIST_NAME};
use crate::error::GrabError;
use crate::events::{GrabEvent, OnGrab};
use crate::fetch::{ManifestSource, SegmentFetcher};
use crate::sink::SegmentSink;

/// Monotonic per-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTally {
    /// Segments for which a download was attempted.
    pub attempted: usize,
    /// Segments fetched and saved successfully.
    pub succeeded: usize,
    /// Segment references in the playlist.
    pub total: usize,
}

impl SessionTally {
    /// Success percentage, rounded. Zero references reads as 0%.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            (self.succeeded as f64 / self.total as f64 * 100.0).round() as u32
        }
    }
}

/// Drives one sequential download run.
pub struct GrabSession {
    config: GrabConfig,
    manifests: Arc<dyn ManifestSource>,
    segments: Arc<dyn SegmentFetcher>,
    sink: Arc<dyn SegmentSink>,
    on_event: Option<OnGrab>,
}

impl GrabSession {
    pub fn new(
        config: GrabConfig,
        manifests: Arc<dyn ManifestSource>,
        segments: Arc<dyn SegmentFetcher>,
        sink: Arc<dyn SegmentSink>,
    ) -> Self {
        Self {
            config,
            manifests,
            segments,
            sink,
            on_event: None,
        }
    }

    /// Register a progress-event callback.
    pub fn with_events(mut self, on_event: OnGrab) -> Self {
        self.on_event = Some(on_event);
        self
    }

    fn emit(&self, event: GrabEvent) {
        if let Some(cb) = &self.on_event {
            cb(event);
        }
    }

    /// Run to completion. An `Err` here means the playlist itself could not
    /// be retrieved and no segment download was attempted; segment-level
    /// failures only show up in the returned tally.
    pub async fn run(&self, playlist_url: &str) -> Result<SessionTally, GrabError> {
        info!("Fetching playlist: {playlist_url}");
        let base = base_url(playlist_url).to_string();
        let text = self.manifests.fetch_manifest(playlist_url).await?;
        info!("Playlist fetched successfully");

        let manifest = Manifest::parse(&text);
        let refs = manifest.segment_refs();
        let total = refs.len();
        self.emit(GrabEvent::ManifestFetched {
            url: playlist_url.to_string(),
            segments: total,
        });

        let mut tally = SessionTally {
            total,
            ..Default::default()
        };
        if total == 0 {
            info!("No segment references found in the playlist");
            self.emit(GrabEvent::Completed { tally });
            return Ok(tally);
        }

        info!("Found {total} segment references in the playlist");
        info!("Starting download of {total} segments...");

        for (i, segment) in refs.iter().enumerate() {
            let index = i + 1;
            let url = segment.resolve(&base);
            let filename = segment.save_filename().to_string();

            info!("Downloading ({index}/{total}): {filename}");
            self.emit(GrabEvent::SegmentStarted {
                index,
                total,
                filename: filename.clone(),
                url: url.clone(),
            });

            tally.attempted += 1;
            let ok = match self.segments.fetch_segment(&url).await {
                Ok(data) => match self.sink.save(&filename, &data).await {
                    Ok(()) => true,
                    Err(e) => {
                        error!("Failed to save {filename}: {e}");
                        false
                    }
                },
                Err(e) => {
                    error!("Error downloading {url}: {e}");
                    false
                }
            };
            if ok {
                tally.succeeded += 1;
                info!(
                    "Progress: {}/{} ({}%)",
                    tally.succeeded,
                    total,
                    tally.percent()
                );
            }
            self.emit(GrabEvent::SegmentFinished {
                index,
                total,
                filename,
                ok,
            });

            // Fixed pacing after every attempt, success or not.
            tokio::time::sleep(self.config.download_delay).await;
        }

        if self.config.write_local_playlist {
            let local = manifest.to_local();
            match self.sink.save(LOCAL_PLAYLIST_NAME, local.as_bytes()).await {
                Ok(()) => info!("Wrote {LOCAL_PLAYLIST_NAME}"),
                Err(e) => error!("Failed to write {LOCAL_PLAYLIST_NAME}: {e}"),
            }
        }

        self.emit(GrabEvent::Completed { tally });
        Ok(tally)
    }
}
