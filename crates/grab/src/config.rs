use std::time::Duration;

/// Name of the rewritten playlist saved next to the segments.
pub const LOCAL_PLAYLIST_NAME: &str = "playlist_local.m3u8";

/// Download engine configuration.
#[derive(Debug, Clone)]
pub struct GrabConfig {
    /// Fixed pause after every segment attempt, successful or not. Keeps
    /// the request rate below origin throttling thresholds; never adaptive.
    pub download_delay: Duration,
    /// Overall per-request timeout. `None` leaves the transport default.
    pub request_timeout: Option<Duration>,
    /// User-Agent sent with every request.
    pub user_agent: String,
    /// Whether to save a local playlist pointing at the segment filenames
    /// after the download loop finishes.
    pub write_local_playlist: bool,
}

impl Default for GrabConfig {
    fn default() -> Self {
        Self {
            download_delay: Duration::from_millis(500),
            request_timeout: None,
            user_agent: concat!("tsgrab/", env!("CARGO_PKG_VERSION")).to_string(),
            write_local_playlist: true,
        }
    }
}

impl GrabConfig {
    pub fn with_download_delay(mut self, delay: Duration) -> Self {
        self.download_delay = delay;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_local_playlist(mut self, write: bool) -> Self {
        self.write_local_playlist = write;
        self
    }
}
