use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SegmentError>;

/// Call-level failures. Every one of these is folded into a result
/// structure by the public entry points; none escapes as a panic.
#[derive(Error, Debug)]
pub enum SegmentError {
    #[error("Source directory does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Source path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No city folders found")]
    NoCityFolders,

    #[error("No valid data found")]
    NoValidData,

    #[error("Invalid mobile number format. Must be 11 digits.")]
    InvalidMobileFormat,

    #[error("Mobile number information not found in the database.")]
    NotFound,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Why a single segment file was rejected. Only surfaces in logs; the
/// listing records every rejection the same way.
#[derive(Error, Debug)]
pub enum ReadFailure {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not valid {encoding}")]
    Decode { encoding: &'static str },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("no segment columns in header")]
    NoSegmentColumns,

    #[error("no valid 7-digit segments")]
    NoSegmentValues,
}

impl ReadFailure {
    /// Terminal failures stop the encoding fallback: the file decoded
    /// fine, it just has nothing usable in it.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::NoSegmentColumns | Self::NoSegmentValues)
    }
}
