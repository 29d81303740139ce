//! Terminal capability facts for climenu.
//!
//! The style engine never talks to the OS itself. It asks a [`Terminal`]
//! for two facts: how many columns are available and how many colours the
//! terminal can paint. This crate defines that boundary and ships two
//! implementations.
//!
//! # Overview
//!
//! - [`capability`]: The [`ColourSupport`] level and its detection rules
//! - [`host`]: [`HostTerminal`], backed by crossterm and the environment
//! - [`fixed`]: [`StaticTerminal`], a terminal with fixed, caller-chosen facts
//!
//! # Example
//!
//! ```
//! use climenu_terminal::{ColourSupport, StaticTerminal, Terminal};
//!
//! let terminal = StaticTerminal::new(120, ColourSupport::Extended);
//! assert_eq!(terminal.width(), 120);
//! assert!(terminal.colour_support().supports_indexed());
//! ```

pub mod capability;
pub mod fixed;
pub mod host;

// Re-export primary types at crate root for convenience
pub use capability::ColourSupport;
pub use fixed::StaticTerminal;
pub use host::HostTerminal;

/// A source of terminal capability facts.
///
/// Implementations are expected to answer immediately; neither method may
/// block on I/O for any noticeable amount of time.
pub trait Terminal {
    /// Returns the current number of columns.
    fn width(&self) -> u16;

    /// Returns the colour depth the terminal can render.
    fn colour_support(&self) -> ColourSupport;
}

impl<T: Terminal + ?Sized> Terminal for &T {
    fn width(&self) -> u16 {
        (**self).width()
    }

    fn colour_support(&self) -> ColourSupport {
        (**self).colour_support()
    }
}

impl<T: Terminal + ?Sized> Terminal for Box<T> {
    fn width(&self) -> u16 {
        (**self).width()
    }

    fn colour_support(&self) -> ColourSupport {
        (**self).colour_support()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(terminal: &dyn Terminal) -> (u16, u32) {
        (terminal.width(), terminal.colour_support().depth())
    }

    #[test]
    fn references_forward_to_the_inner_terminal() {
        let terminal = StaticTerminal::new(42, ColourSupport::Basic);
        let by_ref = &terminal;
        assert_eq!(by_ref.width(), 42);
        assert_eq!(describe(&by_ref), (42, 8));
    }

    #[test]
    fn boxed_trait_objects_are_terminals() {
        let boxed: Box<dyn Terminal> =
            Box::new(StaticTerminal::new(200, ColourSupport::Extended));
        assert_eq!(boxed.width(), 200);
        assert_eq!(boxed.colour_support(), ColourSupport::Extended);
    }
}
