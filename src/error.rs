//! Error types for start-up and content construction
//!
//! Everything that can fail does so before the first frame: loading the
//! config file, decoding illustrations, or creating the SDL window. Once the
//! frame loop is running there are no error paths left (dropped clicks are a
//! normal outcome, and traversal can't dangle).

use crate::story::StoryError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// An illustration couldn't be read or decoded
    #[error("failed to load image {}: {}", .path.display(), .reason)]
    Asset { path: PathBuf, reason: String },

    /// The config file exists but isn't valid JSON for `GameConfig`
    #[error("invalid config file {}: {}", .path.display(), .source)]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// SDL2 reports its failures as plain strings
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("story error: {0}")]
    Story(#[from] StoryError),
}

impl From<String> for GameError {
    fn from(error: String) -> Self {
        GameError::Sdl(error)
    }
}
