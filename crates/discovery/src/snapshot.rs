//! Captured page state, exported from the browser as JSON.

use serde::{Deserialize, Serialize};

use crate::{MediaElements, PlayerRegistry, ResourceLog};

/// One video element with its address attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoElement {
    /// The element's own `src` attribute, if set.
    #[serde(default)]
    pub src: Option<String>,
    /// `src` attributes of nested `<source>` children, in document order.
    #[serde(default)]
    pub sources: Vec<String>,
}

/// One registered player-library instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInstance {
    /// The instance's configured playlist URL, if any.
    #[serde(default)]
    pub url: Option<String>,
}

/// Everything discovery needs from a page, frozen at export time.
///
/// All fields default to empty so partial exports (say, just the resource
/// log) deserialize cleanly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// URLs from the page's resource timing entries.
    #[serde(default)]
    pub resources: Vec<String>,
    /// Video elements present in the document.
    #[serde(default)]
    pub videos: Vec<VideoElement>,
    /// Player-library instances, when the page exposes a registry.
    #[serde(default)]
    pub players: Vec<PlayerInstance>,
}

impl ResourceLog for PageSnapshot {
    fn resource_urls(&self) -> Vec<String> {
        self.resources.clone()
    }
}

impl MediaElements for PageSnapshot {
    fn video_elements(&self) -> Vec<VideoElement> {
        self.videos.clone()
    }
}

impl PlayerRegistry for PageSnapshot {
    fn player_urls(&self) -> Vec<String> {
        self.players.iter().filter_map(|p| p.url.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_snapshot_deserializes_with_defaults() {
        let snap: PageSnapshot =
            serde_json::from_str(r#"{"resources": ["http://cdn/a.m3u8"]}"#).unwrap();
        assert_eq!(snap.resources.len(), 1);
        assert!(snap.videos.is_empty());
        assert!(snap.players.is_empty());
    }

    #[test]
    fn full_snapshot_round_trips_fields() {
        let json = r#"{
            "resources": ["http://cdn/a.m3u8"],
            "videos": [{"src": "blob:x", "sources": ["http://cdn/b.m3u8"]}],
            "players": [{"url": "http://cdn/c.m3u8"}, {}]
        }"#;
        let snap: PageSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.videos[0].sources, ["http://cdn/b.m3u8"]);
        assert_eq!(snap.player_urls(), ["http://cdn/c.m3u8"]);
    }
}
