use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Define CLI arguments
#[derive(Parser)]
#[command(
    version,
    about = "HLS playlist discovery and segment download tool",
    long_about = "Locates HLS playlists in captured page state and downloads the .ts segments\n\
                  a playlist references, one at a time with a fixed delay between requests.\n\
                  \n\
                  Segments are saved under their playlist filenames together with a rewritten\n\
                  local playlist, ready for stitching with an external tool such as ffmpeg."
)]
pub struct CliArgs {
    /// Enable verbose logging
    #[arg(short, long, help = "Enable detailed debug logging")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download every segment referenced by an HLS playlist
    Download(DownloadArgs),
    /// Scan an exported page snapshot for HLS playlist URLs
    Discover(DiscoverArgs),
}

#[derive(Args)]
pub struct DownloadArgs {
    /// Playlist URL, local or remote
    #[arg(help = "URL of the .m3u8 playlist to download segments from")]
    pub url: String,

    /// Output directory for downloaded segments
    #[arg(
        short,
        long,
        help = "Directory where segments will be saved (default: ./segments)"
    )]
    pub output_dir: Option<PathBuf>,

    /// Delay between segment downloads in milliseconds
    #[arg(
        long,
        default_value = "500",
        help = "Fixed delay in milliseconds between segment downloads"
    )]
    pub delay_ms: u64,

    /// Overall timeout for HTTP requests in seconds
    #[arg(
        long,
        default_value = "0",
        help = "Overall timeout in seconds for HTTP requests. Use 0 for no timeout."
    )]
    pub timeout: u64,

    /// User-Agent header for all requests
    #[arg(long, help = "User-Agent header sent with every request")]
    pub user_agent: Option<String>,

    /// Skip writing the rewritten local playlist
    #[arg(
        long,
        help = "Do not write playlist_local.m3u8 next to the downloaded segments"
    )]
    pub no_local_playlist: bool,

    /// Disable the progress bar
    #[arg(long, help = "Disable the interactive progress bar")]
    pub no_progress: bool,
}

#[derive(Args)]
pub struct DiscoverArgs {
    /// Page snapshot to scan
    #[arg(help = "Path to a page snapshot JSON file (resources, videos, players)")]
    pub snapshot: PathBuf,
}
