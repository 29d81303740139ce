//! Colour depth levels.
//!
//! Terminals report colour capability in wildly different ways. This
//! module folds them into three ordered levels. Only the distinction
//! between [`ColourSupport::Basic`] and everything above it matters to the
//! style engine: indexed colours are honoured from 256 colours upwards.

use std::fmt;

/// Number of colours in the basic ANSI palette.
pub const BASIC_DEPTH: u32 = 8;

/// Number of colours in the extended (xterm) palette.
pub const EXTENDED_DEPTH: u32 = 256;

/// Number of colours a 24-bit terminal can display.
pub const TRUE_COLOUR_DEPTH: u32 = 1 << 24;

/// The colour depth a terminal can render, ordered from least to most
/// capable.
///
/// # Examples
///
/// ```
/// use climenu_terminal::ColourSupport;
///
/// assert_eq!(ColourSupport::from_depth(8), ColourSupport::Basic);
/// assert_eq!(ColourSupport::from_depth(256), ColourSupport::Extended);
/// assert!(ColourSupport::TrueColour > ColourSupport::Extended);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ColourSupport {
    /// The eight ANSI colours plus the terminal default.
    #[default]
    Basic,
    /// The 256-colour indexed palette.
    Extended,
    /// 24-bit colour. Treated like [`ColourSupport::Extended`] by the engine.
    TrueColour,
}

impl ColourSupport {
    /// Maps a raw colour count onto a support level.
    ///
    /// Anything below 256 is basic; anything below 2^24 is extended.
    #[must_use]
    pub const fn from_depth(depth: u32) -> Self {
        if depth >= TRUE_COLOUR_DEPTH {
            Self::TrueColour
        } else if depth >= EXTENDED_DEPTH {
            Self::Extended
        } else {
            Self::Basic
        }
    }

    /// Returns the nominal colour count for this level.
    #[must_use]
    pub const fn depth(self) -> u32 {
        match self {
            Self::Basic => BASIC_DEPTH,
            Self::Extended => EXTENDED_DEPTH,
            Self::TrueColour => TRUE_COLOUR_DEPTH,
        }
    }

    /// Returns `true` if 0-255 indexed colours can be displayed.
    #[must_use]
    pub const fn supports_indexed(self) -> bool {
        !matches!(self, Self::Basic)
    }

    /// Derives the support level from the `COLORTERM` and `TERM` values.
    ///
    /// `COLORTERM=truecolor` (or `24bit`) wins over anything in `TERM`.
    /// A `TERM` mentioning `256color` or `direct` is extended. Everything
    /// else, including a missing `TERM`, is basic.
    ///
    /// # Examples
    ///
    /// ```
    /// use climenu_terminal::ColourSupport;
    ///
    /// assert_eq!(
    ///     ColourSupport::from_env_values(Some("xterm-256color"), None),
    ///     ColourSupport::Extended,
    /// );
    /// assert_eq!(
    ///     ColourSupport::from_env_values(Some("xterm"), Some("truecolor")),
    ///     ColourSupport::TrueColour,
    /// );
    /// assert_eq!(ColourSupport::from_env_values(None, None), ColourSupport::Basic);
    /// ```
    #[must_use]
    pub fn from_env_values(term: Option<&str>, colorterm: Option<&str>) -> Self {
        if let Some(colorterm) = colorterm {
            let colorterm = colorterm.to_lowercase();
            if colorterm == "truecolor" || colorterm == "24bit" {
                return Self::TrueColour;
            }
        }

        match term.map(str::to_lowercase) {
            Some(term) if term.contains("256color") || term.contains("direct") => Self::Extended,
            _ => Self::Basic,
        }
    }
}

impl fmt::Display for ColourSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} colours", self.depth())
    }
}
