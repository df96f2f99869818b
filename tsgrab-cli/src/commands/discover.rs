use discovery::{PageSnapshot, PlayerRegistry, discover};
use tracing::{info, warn};

use crate::cli::DiscoverArgs;
use crate::error::AppError;

/// Scan an exported page snapshot for playlist URLs.
pub async fn run(args: DiscoverArgs) -> Result<(), AppError> {
    let raw = tokio::fs::read(&args.snapshot).await?;
    let snapshot: PageSnapshot = serde_json::from_slice(&raw)?;

    let report = discover(&snapshot, &snapshot, Some(&snapshot as &dyn PlayerRegistry));

    for url in &report.blob_media {
        warn!("Found blob URL in a video element: {url}");
        warn!(
            "The page buffers media programmatically (MediaSource Extensions); \
             static discovery cannot see its playlist. Capture network traffic \
             and filter by \"m3u8\" instead."
        );
    }

    if report.playlists.is_empty() {
        info!("No HLS playlists found in the snapshot");
        info!("Try the browser's network tab, filtered by \"m3u8\"");
    } else {
        info!("Found HLS playlists:");
        for url in &report.playlists {
            info!("  {url}");
        }
        info!("Copy a URL and run: tsgrab download <url>");
    }

    Ok(())
}
