//! Error types for the calendar widgets.

use std::path::PathBuf;

use chrono::NaiveDate;

/// Result type alias for calendar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a calendar.
///
/// Runtime lookups (pages, views, selections) never fail; they degrade to
/// `None` or a no-op instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A color value could not be parsed.
    #[error("Invalid color '{value}': expected #RRGGBB or #RRGGBBAA")]
    InvalidColor { value: String },

    /// A dimension value could not be parsed.
    #[error("Invalid dimension '{value}': {message}")]
    InvalidDimension { value: String, message: String },

    /// A weekday name could not be parsed.
    #[error("Invalid weekday '{value}': expected a name such as 'Mon' or 'sunday'")]
    InvalidWeekday { value: String },

    /// A month range whose end lies before its start.
    #[error("Invalid month range: {to} is before {from}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    /// Malformed attribute file.
    #[error("Failed to parse calendar attributes: {0}")]
    Toml(#[from] toml::de::Error),

    /// File I/O error.
    #[error("Failed to read calendar attributes '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a color error.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    /// Create a dimension error.
    pub fn invalid_dimension(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDimension {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
