use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use grab_engine::{
    DirSink, GrabConfig, GrabSession, HttpFetcher, ManifestSource, SegmentFetcher, SegmentSink,
};
use tracing::{error, info};

use crate::cli::DownloadArgs;
use crate::error::AppError;
use crate::utils::progress::ProgressManager;

/// Fetch a playlist and download its segments sequentially.
pub async fn run(args: DownloadArgs) -> Result<(), AppError> {
    let mut config = GrabConfig::default()
        .with_download_delay(Duration::from_millis(args.delay_ms))
        .with_local_playlist(!args.no_local_playlist);
    if args.timeout > 0 {
        config = config.with_request_timeout(Some(Duration::from_secs(args.timeout)));
    }
    if let Some(user_agent) = args.user_agent.clone() {
        config = config.with_user_agent(user_agent);
    }

    let output_dir = args
        .output_dir
        .unwrap_or_else(|| PathBuf::from("./segments"));
    let sink = DirSink::create(&output_dir).await?;
    info!("Saving segments to {}", output_dir.display());

    let fetcher = Arc::new(HttpFetcher::new(&config)?);

    let progress = if args.no_progress {
        ProgressManager::new_disabled()
    } else {
        ProgressManager::new()
    };
    let events = progress.clone();

    let session = GrabSession::new(
        config,
        Arc::clone(&fetcher) as Arc<dyn ManifestSource>,
        fetcher as Arc<dyn SegmentFetcher>,
        Arc::new(sink) as Arc<dyn SegmentSink>,
    )
    .with_events(Arc::new(move |event| events.handle_event(event)));

    match session.run(&args.url).await {
        Ok(tally) => {
            info!("Download completed!");
            info!(
                "Successfully downloaded {} out of {} files",
                tally.succeeded, tally.total
            );
            if tally.total > 0 {
                info!("Next steps:");
                info!(
                    "1. Check {} for the segments and playlist_local.m3u8",
                    output_dir.display()
                );
                info!("2. Run FFmpeg to combine the files:");
                info!(
                    "   ffmpeg -protocol_whitelist file,http,https,tcp,tls,crypto \
                     -i playlist_local.m3u8 -c copy output.mp4"
                );
            }
            Ok(())
        }
        Err(e) => {
            error!("Failed to fetch playlist: {e}");
            info!("Troubleshooting:");
            info!("- Make sure the playlist URL is correct");
            info!("- Check that the playlist is reachable from this machine");
            info!("- If the origin refuses requests, download the playlist and serve it locally");
            Err(e.into())
        }
    }
}
