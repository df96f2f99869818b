//! Parsed playlist document.

use tracing::debug;

use crate::line::{LineKind, classify};
use crate::reference::SegmentRef;

/// A playlist held as its original ordered lines.
///
/// Parsing never fails: unrecognized lines are carried through and simply
/// yield no segment references.
#[derive(Debug, Clone)]
pub struct Manifest {
    lines: Vec<String>,
}

impl Manifest {
    /// Split playlist text into lines, preserving order.
    pub fn parse(text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(str::to_owned).collect();
        let manifest = Self { lines };
        debug!(
            lines = manifest.lines.len(),
            segments = manifest.segment_refs().len(),
            "parsed playlist"
        );
        manifest
    }

    /// The raw lines in original order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Segment references in order of appearance. This order is
    /// authoritative for reassembling the stream downstream.
    pub fn segment_refs(&self) -> Vec<SegmentRef> {
        self.lines
            .iter()
            .filter(|l| classify(l) == LineKind::SegmentRef)
            .map(|l| SegmentRef::new(l.trim()))
            .collect()
    }

    /// Rewrite the playlist so each segment-reference line names the local
    /// save filename instead of its original URL or path. Directive and
    /// blank lines pass through unchanged, so the result can feed a media
    /// tool that concatenates the saved segments.
    pub fn to_local(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match classify(line) {
                LineKind::SegmentRef => {
                    out.push_str(SegmentRef::new(line.trim()).save_filename());
                }
                _ => out.push_str(line),
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "#EXTM3U\n\
                          #EXT-X-VERSION:3\n\
                          #EXTINF:9.0,\n\
                          seg1.ts\n\
                          #EXTINF:9.0,\n\
                          https://cdn.example/seg2.ts?token=abc\n\
                          \n\
                          #EXT-X-ENDLIST\n";

    #[test]
    fn extracts_references_in_manifest_order() {
        let refs = Manifest::parse(SAMPLE).segment_refs();
        let raw: Vec<&str> = refs.iter().map(|r| r.as_str()).collect();
        assert_eq!(raw, ["seg1.ts", "https://cdn.example/seg2.ts?token=abc"]);
    }

    #[test]
    fn directives_blanks_and_foreign_lines_yield_no_refs() {
        let m = Manifest::parse("#EXTM3U\n\nvariant.m3u8\n#EXT-X-ENDLIST\n");
        assert!(m.segment_refs().is_empty());
    }

    #[test]
    fn empty_manifest_has_no_refs() {
        assert!(Manifest::parse("").segment_refs().is_empty());
    }

    #[test]
    fn local_rewrite_replaces_refs_and_keeps_directives() {
        let local = Manifest::parse(SAMPLE).to_local();
        let lines: Vec<&str> = local.lines().collect();
        assert_eq!(lines[0], "#EXTM3U");
        assert_eq!(lines[3], "seg1.ts");
        assert_eq!(lines[5], "seg2.ts");
        assert_eq!(lines[7], "#EXT-X-ENDLIST");
    }
}
