//! Style engine for climenu.
//!
//! This crate resolves the colours, markers, and geometry of a terminal
//! menu against what the terminal can actually display, and produces the
//! ANSI escape sequences a renderer paints items with.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`colour`]: Named and indexed colours and the SGR palette table
//! - [`style`]: The [`MenuStyle`] engine
//! - [`error`]: Error types for style operations
//! - [`tui`]: Conversions to ratatui colours and styles
//!
//! # Example
//!
//! ```
//! use climenu_style::{MenuStyle, NamedColour};
//! use climenu_terminal::{ColourSupport, StaticTerminal};
//!
//! # fn main() -> climenu_style::Result<()> {
//! let terminal = StaticTerminal::new(120, ColourSupport::Extended);
//! let mut style = MenuStyle::new(terminal);
//!
//! style.set_bg(16, Some(NamedColour::White))?;
//! style.set_fg(206, Some(NamedColour::Red))?;
//! style.set_width(80).set_margin(4).set_padding(1);
//!
//! assert_eq!(style.colours_set_code(), "\x1b[38;5;206;48;5;16m");
//! assert_eq!(style.content_width(), 70);
//! assert_eq!(style.marker(true), "●");
//! # Ok(())
//! # }
//! ```

pub mod colour;
pub mod error;
pub mod style;
pub mod tui;

// Re-export primary types at crate root for convenience
pub use colour::{Colour, ColourRequest, NamedColour, available_colours};
pub use error::{Result, StyleError};
pub use style::MenuStyle;
