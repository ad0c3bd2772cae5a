use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("SVG file not found: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("no SVG converter found, install rsvg-convert, inkscape or imagemagick")]
    NoConverter,

    #[error("{tool} failed at size {size}: {detail}")]
    Conversion { size: u32, tool: String, detail: String },

    #[error("expected {size}x{size} output, got {width}x{height}")]
    WrongDimensions { size: u32, width: u32, height: u32 },

    #[error("icon size must be positive")]
    InvalidSize,

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize icon manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl IconError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        IconError::Io { context: context.into(), source }
    }

    /// Fatal errors abort the run; the rest only skip one size.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            IconError::Conversion { .. } | IconError::WrongDimensions { .. } | IconError::InvalidSize
        )
    }
}

pub type Result<T> = std::result::Result<T, IconError>;
