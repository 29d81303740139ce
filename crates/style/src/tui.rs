//! Conversions for ratatui-based renderers.
//!
//! Named colours map onto ratatui's ANSI colours. Note that ANSI white
//! (SGR 37) is [`Color::Gray`] in ratatui, and the terminal default is
//! [`Color::Reset`].

use climenu_terminal::Terminal;
use ratatui::style::{Color, Style};

use crate::colour::{Colour, NamedColour};
use crate::style::MenuStyle;

impl From<NamedColour> for Color {
    fn from(colour: NamedColour) -> Self {
        match colour {
            NamedColour::Black => Color::Black,
            NamedColour::Red => Color::Red,
            NamedColour::Green => Color::Green,
            NamedColour::Yellow => Color::Yellow,
            NamedColour::Blue => Color::Blue,
            NamedColour::Magenta => Color::Magenta,
            NamedColour::Cyan => Color::Cyan,
            NamedColour::White => Color::Gray,
            NamedColour::Default => Color::Reset,
        }
    }
}

impl From<Colour> for Color {
    fn from(colour: Colour) -> Self {
        match colour {
            Colour::Named(named) => named.into(),
            Colour::Indexed(index) => Color::Indexed(index),
        }
    }
}

impl<T: Terminal> MenuStyle<T> {
    /// Returns the ratatui style for an item in the given selection state.
    ///
    /// Matches [`MenuStyle::selected_set_code`] and
    /// [`MenuStyle::unselected_set_code`]: the selected item swaps the
    /// foreground and background colours.
    #[must_use]
    pub fn item_style(&self, selected: bool) -> Style {
        let (fg, bg) = if selected {
            (self.bg(), self.fg())
        } else {
            (self.fg(), self.bg())
        };
        Style::default().fg(fg.into()).bg(bg.into())
    }
}
