//! A terminal with fixed capabilities.

use crate::{ColourSupport, Terminal};

/// A [`Terminal`] that always reports the same width and colour support.
///
/// Useful for headless rendering, for forcing a colour depth regardless
/// of what the host terminal claims, and in tests.
///
/// # Examples
///
/// ```
/// use climenu_terminal::{ColourSupport, StaticTerminal, Terminal};
///
/// let terminal = StaticTerminal::new(500, ColourSupport::Basic);
/// assert_eq!(terminal.width(), 500);
/// assert_eq!(terminal.colour_support(), ColourSupport::Basic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticTerminal {
    width: u16,
    colour_support: ColourSupport,
}

impl StaticTerminal {
    /// Creates a terminal reporting `width` columns at the given colour depth.
    #[must_use]
    pub const fn new(width: u16, colour_support: ColourSupport) -> Self {
        Self {
            width,
            colour_support,
        }
    }

    /// Creates a terminal from a raw colour count (8, 256, ...).
    #[must_use]
    pub const fn with_depth(width: u16, depth: u32) -> Self {
        Self::new(width, ColourSupport::from_depth(depth))
    }
}

impl Default for StaticTerminal {
    /// A classic 80 column, 8 colour terminal.
    fn default() -> Self {
        Self::new(80, ColourSupport::Basic)
    }
}

impl Terminal for StaticTerminal {
    fn width(&self) -> u16 {
        self.width
    }

    fn colour_support(&self) -> ColourSupport {
        self.colour_support
    }
}
