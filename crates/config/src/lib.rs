//! Configuration management for climenu.
//!
//! This crate loads menu style overrides from JSON5 or JSON files,
//! validates them, and applies them onto a [`climenu_style::MenuStyle`].
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: The [`StyleConfig`] struct, file loading and saving
//! - [`setting`]: Colour and margin settings with flexible formats
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./climenu.json5` or `./climenu.json`)
//! 2. User config (`~/.config/climenu/config.json5` or `~/.config/climenu/config.json`)
//! 3. Built-in style defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   fg: "white",
//!   // Pink background, red on 8 colour terminals
//!   bg: { code: 206, fallback: "red" },
//!   selected_marker: "→",
//!   unselected_marker: " ",
//!   margin: "auto",
//!   padding: 1,
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use climenu_config::StyleConfig;
//! use climenu_style::MenuStyle;
//! use climenu_terminal::HostTerminal;
//!
//! # fn example() -> climenu_config::Result<()> {
//! let config = StyleConfig::load()?;
//! let mut style = MenuStyle::new(HostTerminal::detect());
//! config.apply_to(&mut style)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
mod persistence;
pub mod setting;

// Re-export primary types at crate root for convenience
pub use config::StyleConfig;
pub use error::{ConfigError, Result};
pub use setting::{ColourSetting, MarginSetting};
