//! Error Types
//!
//! Library-level errors for the shell. The CLI wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Stable error codes, printed next to CLI error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ConfigRead,
    ConfigParse,
    ConfigInvalid,
    UnknownApp,
    ContentRead,
    Audio,
    Terminal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigRead => "E001",
            Self::ConfigParse => "E002",
            Self::ConfigInvalid => "E003",
            Self::UnknownApp => "E010",
            Self::ContentRead => "E011",
            Self::Audio => "E020",
            Self::Terminal => "E030",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("unknown app '{0}' (expected one of: espressioni, termometro, mcmmcd, sudoku)")]
    UnknownApp(String),

    #[error("failed to read content for '{key}' from {path:?}: {source}")]
    ContentRead {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("audio unavailable: {0}")]
    Audio(String),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl ShellError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ConfigRead { .. } => ErrorCode::ConfigRead,
            Self::ConfigParse { .. } => ErrorCode::ConfigParse,
            Self::ConfigInvalid(_) => ErrorCode::ConfigInvalid,
            Self::UnknownApp(_) => ErrorCode::UnknownApp,
            Self::ContentRead { .. } => ErrorCode::ContentRead,
            Self::Audio(_) => ErrorCode::Audio,
            Self::Terminal(_) => ErrorCode::Terminal,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShellError>;
