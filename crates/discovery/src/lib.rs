//! HLS playlist discovery.
//!
//! Scans captured page state for evidence of HLS playlist URLs using four
//! independent strategies and reports the deduplicated union. The page is
//! presented through three capability traits so the scan itself stays pure:
//! a network resource log, the document's media elements, and an optional
//! registry of player-library instances. [`PageSnapshot`] implements all
//! three for state exported to JSON.

mod snapshot;

use std::collections::BTreeSet;

use tracing::{debug, info};

pub use snapshot::{PageSnapshot, PlayerInstance, VideoElement};

/// Substring that identifies a playlist URL.
pub const MANIFEST_MARKER: &str = ".m3u8";

/// Prefix of in-memory media object URLs.
const BLOB_PREFIX: &str = "blob:";

/// URLs recorded by the page's network/resource timing layer.
pub trait ResourceLog {
    fn resource_urls(&self) -> Vec<String>;
}

/// Video elements present in the document, with their source attributes.
pub trait MediaElements {
    fn video_elements(&self) -> Vec<VideoElement>;
}

/// Configured URLs of known player-library instances, when the page exposes
/// such a registry. Absence of the capability means zero matches, never an
/// error.
pub trait PlayerRegistry {
    fn player_urls(&self) -> Vec<String>;
}

/// Outcome of one discovery pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryReport {
    /// Candidate playlist URLs, deduplicated. The operator picks one and
    /// hands it to the downloader; nothing automatic follows.
    pub playlists: BTreeSet<String>,
    /// Video `src` values backed by in-memory blobs. Informational only:
    /// these indicate MediaSource buffering, which defeats static URL
    /// discovery, and are never added to `playlists`.
    pub blob_media: Vec<String>,
}

impl DiscoveryReport {
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty() && self.blob_media.is_empty()
    }
}

/// Run all four scan strategies and union their matches.
///
/// Side-effect free apart from logging. Scanning unchanged inputs twice
/// yields an identical report.
pub fn discover(
    resources: &dyn ResourceLog,
    media: &dyn MediaElements,
    players: Option<&dyn PlayerRegistry>,
) -> DiscoveryReport {
    let mut report = DiscoveryReport::default();
    scan_resource_log(resources, &mut report);
    scan_media_elements(media, &mut report);
    if let Some(registry) = players {
        scan_player_registry(registry, &mut report);
    }
    scan_blob_media(media, &mut report);
    info!(
        playlists = report.playlists.len(),
        blob_media = report.blob_media.len(),
        "discovery pass finished"
    );
    report
}

fn scan_resource_log(resources: &dyn ResourceLog, report: &mut DiscoveryReport) {
    debug!("checking network resource records for playlists");
    for url in resources.resource_urls() {
        if url.contains(MANIFEST_MARKER) {
            debug!(url = %url, "found playlist in resource log");
            report.playlists.insert(url);
        }
    }
}

fn scan_media_elements(media: &dyn MediaElements, report: &mut DiscoveryReport) {
    debug!("checking video elements for playlist sources");
    for video in media.video_elements() {
        for source in &video.sources {
            if source.contains(MANIFEST_MARKER) {
                debug!(url = %source, "found playlist in source element");
                report.playlists.insert(source.clone());
            }
        }
        if let Some(src) = &video.src {
            if src.contains(MANIFEST_MARKER) {
                debug!(url = %src, "found playlist in video src");
                report.playlists.insert(src.clone());
            }
        }
    }
}

fn scan_player_registry(registry: &dyn PlayerRegistry, report: &mut DiscoveryReport) {
    debug!("checking player-library instances");
    for url in registry.player_urls() {
        if url.contains(MANIFEST_MARKER) {
            debug!(url = %url, "found playlist in player instance");
            report.playlists.insert(url);
        }
    }
}

fn scan_blob_media(media: &dyn MediaElements, report: &mut DiscoveryReport) {
    debug!("checking for blob-backed video elements");
    for video in media.video_elements() {
        if let Some(src) = &video.src {
            if src.starts_with(BLOB_PREFIX) {
                debug!(url = %src, "video element is blob-backed");
                report.blob_media.push(src.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> PageSnapshot {
        PageSnapshot {
            resources: vec![
                "http://cdn/a.m3u8".into(),
                "http://cdn/app.js".into(),
                "http://cdn/a.m3u8".into(),
            ],
            videos: vec![
                VideoElement {
                    src: Some("http://cdn/b.m3u8".into()),
                    sources: vec!["http://cdn/c.m3u8".into(), "http://cdn/poster.jpg".into()],
                },
                VideoElement {
                    src: Some("blob:https://page/55aa".into()),
                    sources: vec![],
                },
            ],
            players: vec![
                PlayerInstance {
                    url: Some("http://cdn/d.m3u8?sig=1".into()),
                },
                PlayerInstance { url: None },
            ],
        }
    }

    #[test]
    fn union_of_all_strategies_deduplicated() {
        let snap = snapshot();
        let report = discover(&snap, &snap, Some(&snap));
        let urls: Vec<&str> = report.playlists.iter().map(String::as_str).collect();
        assert_eq!(
            urls,
            [
                "http://cdn/a.m3u8",
                "http://cdn/b.m3u8",
                "http://cdn/c.m3u8",
                "http://cdn/d.m3u8?sig=1",
            ]
        );
    }

    #[test]
    fn blob_sources_reported_but_not_candidates() {
        let snap = snapshot();
        let report = discover(&snap, &snap, Some(&snap));
        assert_eq!(report.blob_media, ["blob:https://page/55aa"]);
        assert!(!report.playlists.iter().any(|u| u.starts_with("blob:")));
    }

    #[test]
    fn missing_player_registry_is_zero_matches() {
        let snap = PageSnapshot {
            resources: vec!["http://cdn/a.m3u8".into()],
            ..Default::default()
        };
        let report = discover(&snap, &snap, None);
        assert_eq!(report.playlists.len(), 1);
    }

    #[test]
    fn empty_page_yields_empty_report() {
        let snap = PageSnapshot::default();
        assert!(discover(&snap, &snap, Some(&snap)).is_empty());
    }

    #[test]
    fn repeated_scans_are_idempotent() {
        let snap = snapshot();
        let first = discover(&snap, &snap, Some(&snap));
        let second = discover(&snap, &snap, Some(&snap));
        assert_eq!(first.playlists, second.playlists);
    }
}
