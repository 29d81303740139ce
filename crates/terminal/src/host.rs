//! The terminal the process is attached to.
//!
//! Width comes from crossterm, falling back to the `COLUMNS` environment
//! variable and finally to [`FALLBACK_WIDTH`] when stdout is not a tty.
//! Colour support is derived from `COLORTERM` and `TERM`.

use std::env;

use crate::{ColourSupport, Terminal};

/// Width assumed when neither crossterm nor `COLUMNS` can tell us.
pub const FALLBACK_WIDTH: u16 = 80;

/// The host terminal.
///
/// Width is queried live on every call so that a resized terminal is
/// picked up the next time the style engine recalculates its geometry.
/// Colour support is detected once, in [`HostTerminal::detect`].
///
/// # Examples
///
/// ```no_run
/// use climenu_terminal::{HostTerminal, Terminal};
///
/// let terminal = HostTerminal::detect();
/// println!("{} columns, {}", terminal.width(), terminal.colour_support());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HostTerminal {
    colour_support: ColourSupport,
}

impl HostTerminal {
    /// Detects the host terminal's colour support from the environment.
    #[must_use]
    pub fn detect() -> Self {
        let term = env::var("TERM").ok();
        let colorterm = env::var("COLORTERM").ok();
        let colour_support = ColourSupport::from_env_values(term.as_deref(), colorterm.as_deref());
        tracing::debug!(?term, ?colorterm, %colour_support, "detected terminal colour support");
        Self { colour_support }
    }

    /// Uses the host's width but forces the given colour support.
    #[must_use]
    pub const fn with_colour_support(colour_support: ColourSupport) -> Self {
        Self { colour_support }
    }
}

impl Default for HostTerminal {
    fn default() -> Self {
        Self::detect()
    }
}

impl Terminal for HostTerminal {
    fn width(&self) -> u16 {
        match crossterm::terminal::size() {
            Ok((columns, _)) if columns > 0 => columns,
            Ok(_) | Err(_) => columns_from_env().unwrap_or(FALLBACK_WIDTH),
        }
    }

    fn colour_support(&self) -> ColourSupport {
        self.colour_support
    }
}

fn columns_from_env() -> Option<u16> {
    parse_columns(env::var("COLUMNS").ok().as_deref())
}

fn parse_columns(value: Option<&str>) -> Option<u16> {
    value?.trim().parse::<u16>().ok().filter(|&columns| columns > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_colour_support_is_reported() {
        let terminal = HostTerminal::with_colour_support(ColourSupport::Extended);
        assert_eq!(terminal.colour_support(), ColourSupport::Extended);
    }

    #[test]
    fn columns_parsing() {
        assert_eq!(parse_columns(Some("132")), Some(132));
        assert_eq!(parse_columns(Some(" 90 ")), Some(90));
        assert_eq!(parse_columns(Some("0")), None);
        assert_eq!(parse_columns(Some("wide")), None);
        assert_eq!(parse_columns(None), None);
    }
}
