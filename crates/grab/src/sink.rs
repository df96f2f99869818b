//! Artifact sink: where downloaded segment bytes end up.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

/// Writes one artifact under a given name. Real runs write to a directory;
/// tests substitute an in-memory sink.
#[async_trait]
pub trait SegmentSink: Send + Sync {
    async fn save(&self, filename: &str, data: &[u8]) -> io::Result<()>;
}

/// Sink that writes every artifact into one directory.
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    /// Create the directory (and parents) if needed.
    pub async fn create(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl SegmentSink for DirSink {
    async fn save(&self, filename: &str, data: &[u8]) -> io::Result<()> {
        let path = self.dir.join(filename);
        tokio::fs::write(&path, data).await?;
        debug!(path = %path.display(), bytes = data.len(), "saved artifact");
        Ok(())
    }
}
