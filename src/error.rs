//! Unified error type for pagemenu.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

use core::fmt;

/// Top-level error type used across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Menu construction
    /// A menu was built with zero pages.
    EmptyMenu,

    /// A page or item index was outside `[0, count)`.
    IndexOutOfRange { index: usize, len: usize },

    /// A fixed-capacity container (pages, items) is full.
    CapacityExceeded { capacity: usize },

    // UI / Display
    /// I²C transaction to the display failed.
    Display,

    // Loader
    /// Menu data was not valid JSON or did not have the expected shape.
    Parse { line: usize, column: usize },

    /// Menu data file could not be read.
    Io { kind: IoKind },
}

/// Why a read failed, reduced to what a user can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoKind {
    NotFound,
    PermissionDenied,
    /// The file was read but is not UTF-8 text.
    InvalidData,
    Other,
}

#[cfg(feature = "std")]
impl From<std::io::ErrorKind> for IoKind {
    fn from(kind: std::io::ErrorKind) -> Self {
        match kind {
            std::io::ErrorKind::NotFound => IoKind::NotFound,
            std::io::ErrorKind::PermissionDenied => IoKind::PermissionDenied,
            std::io::ErrorKind::InvalidData => IoKind::InvalidData,
            _ => IoKind::Other,
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io {
            kind: e.kind().into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyMenu => f.write_str("menu has no pages"),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range (len {})", index, len)
            }
            Error::CapacityExceeded { capacity } => {
                write!(f, "capacity of {} exceeded", capacity)
            }
            Error::Display => f.write_str("display communication failed"),
            Error::Parse { line, column } => {
                write!(f, "malformed menu data at {}:{}", line, column)
            }
            Error::Io { kind } => write!(f, "menu data could not be read ({})", kind),
        }
    }
}

impl fmt::Display for IoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IoKind::NotFound => "not found",
            IoKind::PermissionDenied => "permission denied",
            IoKind::InvalidData => "not valid UTF-8",
            IoKind::Other => "I/O error",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
