//! The colour model.
//!
//! A menu colour is either one of nine named ANSI colours or an index into
//! the 256 colour palette. Named colours map onto SGR parameters through
//! the fixed [`PALETTE`] table; indexed colours use the extended `38;5;N`
//! and `48;5;N` forms.

use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

/// One row of the named colour table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Lowercase name accepted by [`NamedColour::from_str`].
    pub name: &'static str,
    /// SGR parameter selecting this colour as the foreground.
    pub foreground: u8,
    /// SGR parameter selecting this colour as the background.
    pub background: u8,
}

/// SGR parameters for each named colour, in canonical order.
///
/// The order matches [`NamedColour`]'s discriminants.
pub static PALETTE: [PaletteEntry; 9] = [
    PaletteEntry { name: "black", foreground: 30, background: 40 },
    PaletteEntry { name: "red", foreground: 31, background: 41 },
    PaletteEntry { name: "green", foreground: 32, background: 42 },
    PaletteEntry { name: "yellow", foreground: 33, background: 43 },
    PaletteEntry { name: "blue", foreground: 34, background: 44 },
    PaletteEntry { name: "magenta", foreground: 35, background: 45 },
    PaletteEntry { name: "cyan", foreground: 36, background: 46 },
    PaletteEntry { name: "white", foreground: 37, background: 47 },
    PaletteEntry { name: "default", foreground: 39, background: 49 },
];

/// Returns the names of the available colours in canonical order.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     climenu_style::available_colours(),
///     ["black", "red", "green", "yellow", "blue", "magenta", "cyan", "white", "default"],
/// );
/// ```
#[must_use]
pub fn available_colours() -> [&'static str; 9] {
    PALETTE.map(|entry| entry.name)
}

/// One of the nine named terminal colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColour {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// The terminal's own default colour.
    Default,
}

impl NamedColour {
    /// All named colours in canonical order.
    pub const ALL: [Self; 9] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::Default,
    ];

    /// Returns this colour's row in the [`PALETTE`].
    #[must_use]
    pub fn entry(self) -> &'static PaletteEntry {
        &PALETTE[self as usize]
    }

    /// Returns the lowercase name of this colour.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.entry().name
    }
}

impl fmt::Display for NamedColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedColour {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|colour| colour.name() == s)
            .ok_or_else(|| StyleError::InvalidColour {
                name: s.to_string(),
            })
    }
}

/// A resolved colour as stored by a menu style.
///
/// # Examples
///
/// ```
/// use climenu_style::{Colour, NamedColour};
///
/// assert_eq!(Colour::Named(NamedColour::Red).foreground_sgr(), "31");
/// assert_eq!(Colour::Indexed(206).foreground_sgr(), "38;5;206");
/// assert_eq!(Colour::Indexed(16).background_sgr(), "48;5;16");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    /// A colour from the named palette.
    Named(NamedColour),
    /// An index into the 256 colour palette.
    Indexed(u8),
}

impl Colour {
    /// Returns the SGR parameters selecting this colour as the foreground.
    #[must_use]
    pub fn foreground_sgr(self) -> String {
        match self {
            Self::Named(named) => named.entry().foreground.to_string(),
            Self::Indexed(index) => format!("38;5;{index}"),
        }
    }

    /// Returns the SGR parameters selecting this colour as the background.
    #[must_use]
    pub fn background_sgr(self) -> String {
        match self {
            Self::Named(named) => named.entry().background.to_string(),
            Self::Indexed(index) => format!("48;5;{index}"),
        }
    }

    /// Returns `true` for colours from the 256 colour palette.
    #[must_use]
    pub const fn is_indexed(self) -> bool {
        matches!(self, Self::Indexed(_))
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(named) => fmt::Display::fmt(named, f),
            Self::Indexed(index) => fmt::Display::fmt(index, f),
        }
    }
}

impl From<NamedColour> for Colour {
    fn from(named: NamedColour) -> Self {
        Self::Named(named)
    }
}

impl PartialEq<NamedColour> for Colour {
    fn eq(&self, other: &NamedColour) -> bool {
        *self == Self::Named(*other)
    }
}

impl PartialEq<u8> for Colour {
    fn eq(&self, other: &u8) -> bool {
        *self == Self::Indexed(*other)
    }
}

/// A colour as requested by a caller, before validation.
///
/// Names are checked against the palette and codes against the 0-255
/// range when the request is applied to a style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourRequest {
    /// An already validated named colour.
    Named(NamedColour),
    /// A colour name still to be validated.
    Name(String),
    /// A palette index still to be range checked.
    Code(i64),
}

impl From<NamedColour> for ColourRequest {
    fn from(named: NamedColour) -> Self {
        Self::Named(named)
    }
}

impl From<&str> for ColourRequest {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ColourRequest {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<i64> for ColourRequest {
    fn from(code: i64) -> Self {
        Self::Code(code)
    }
}

impl From<Colour> for ColourRequest {
    fn from(colour: Colour) -> Self {
        match colour {
            Colour::Named(named) => Self::Named(named),
            Colour::Indexed(index) => Self::Code(i64::from(index)),
        }
    }
}
