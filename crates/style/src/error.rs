//! Error types for style operations.
//!
//! Every failure is raised by the setter that caused it, before any state
//! is touched. Callers can report the error and carry on with the previous
//! style.

/// Errors that can occur while changing a menu style.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// An indexed colour outside the 0-255 palette.
    #[error("Invalid colour code: {code} (expected 0-255)")]
    InvalidColourCode {
        /// The rejected code.
        code: i64,
    },

    /// A colour name that is not part of the named palette.
    #[error("Invalid colour: {name:?} (expected one of {})", crate::available_colours().join(", "))]
    InvalidColour {
        /// The rejected name.
        name: String,
    },

    /// An indexed colour was requested on a basic terminal without a named
    /// fallback to use in its place.
    #[error("colour code {code} needs a named fallback on an 8 colour terminal")]
    MissingFallback {
        /// The code that could not be displayed.
        code: u8,
    },
}

/// A specialized Result type for style operations.
pub type Result<T> = std::result::Result<T, StyleError>;
