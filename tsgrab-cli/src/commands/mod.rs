pub mod discover;
pub mod download;
