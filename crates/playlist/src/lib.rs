//! HLS playlist text model.
//!
//! A playlist is treated as an ordered sequence of lines. This crate
//! classifies those lines, extracts segment references in manifest order,
//! resolves them against the playlist's base URL, and derives the local
//! filename each segment is saved under. It performs no I/O.

mod line;
mod manifest;
mod reference;

pub use line::{LineKind, classify};
pub use manifest::Manifest;
pub use reference::{SegmentRef, base_url};
