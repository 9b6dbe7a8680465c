use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a deck.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("deck contains no slides")]
    Empty,

    #[error("slide id {id} is used more than once")]
    DuplicateId { id: u32 },

    #[error("slide id must be positive")]
    ZeroId,

    #[error("slide {id} has unknown kind '{kind}'")]
    UnknownKind { id: u32, kind: String },

    #[error("slide {id} has unknown icon '{icon}'")]
    UnknownIcon { id: u32, icon: String },

    #[error("failed to read deck '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse deck: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors raised by the video recorder.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to start ffmpeg: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("ffmpeg stdin is not available")]
    NoStdin,

    #[error("failed to write frame to ffmpeg: {0}")]
    Write(#[source] std::io::Error),

    #[error("ffmpeg exited with {0}")]
    Exit(std::process::ExitStatus),

    #[error("failed to read back frame: {0}")]
    Readback(String),
}
