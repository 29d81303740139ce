//! Core configuration struct and loading logic.
//!
//! This module provides the [`StyleConfig`] struct, which describes the
//! overrides to apply on top of a default menu style.

use climenu_style::{Colour, MenuStyle, NamedColour, StyleError};
use climenu_terminal::Terminal;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::persistence::{find_style_file, read_style_file, write_style_file};
use crate::setting::{ColourSetting, MarginSetting};

/// Style overrides for a menu.
///
/// Every field is optional. Fields left unset keep the menu style's
/// defaults when the configuration is applied.
///
/// # Examples
///
/// ```
/// use climenu_config::{ColourSetting, MarginSetting, StyleConfig};
///
/// // An empty config changes nothing
/// let config = StyleConfig::default();
/// assert!(config.is_empty());
///
/// // A custom config
/// let config = StyleConfig {
///     fg: Some(ColourSetting::code_with_fallback(206, "red")),
///     margin: Some(MarginSetting::Auto),
///     selected_marker: Some(">".to_string()),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Foreground colour of menu items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<ColourSetting>,

    /// Background colour of menu items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<ColourSetting>,

    /// Marker drawn before the selected item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_marker: Option<String>,

    /// Marker drawn before unselected items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unselected_marker: Option<String>,

    /// Text shown after items that have an extra.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_extra: Option<String>,

    /// Whether item extras are displayed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displays_extra: Option<bool>,

    /// Glyph repeated under the menu title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_separator: Option<String>,

    /// Total menu width in columns. Defaults to the terminal width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,

    /// Margin on each side of the menu.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<MarginSetting>,

    /// Padding on each side of the menu content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<u16>,
}

impl StyleConfig {
    /// Creates a new empty configuration.
    ///
    /// This is equivalent to `StyleConfig::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures every attribute of an existing style.
    ///
    /// Applying the result to a default style on the same terminal
    /// reproduces `style`.
    ///
    /// # Examples
    ///
    /// ```
    /// use climenu_config::StyleConfig;
    /// use climenu_style::MenuStyle;
    /// use climenu_terminal::{ColourSupport, StaticTerminal};
    ///
    /// let style = MenuStyle::new(StaticTerminal::new(80, ColourSupport::Basic));
    /// let config = StyleConfig::from_style(&style);
    /// assert_eq!(config.width, Some(80));
    /// ```
    #[must_use]
    pub fn from_style<T: Terminal>(style: &MenuStyle<T>) -> Self {
        Self {
            fg: Some(colour_setting(style.fg(), style.fg_fallback())),
            bg: Some(colour_setting(style.bg(), style.bg_fallback())),
            selected_marker: Some(style.selected_marker().to_string()),
            unselected_marker: Some(style.unselected_marker().to_string()),
            item_extra: Some(style.item_extra().to_string()),
            displays_extra: Some(style.displays_extra()),
            title_separator: Some(style.title_separator().to_string()),
            width: Some(style.width()),
            margin: Some(if style.is_margin_auto() {
                MarginSetting::Auto
            } else {
                MarginSetting::Columns(style.margin())
            }),
            padding: Some(style.padding()),
        }
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./climenu.json5` or `./climenu.json`
    /// 2. User: `~/.config/climenu/config.json5` or `~/.config/climenu/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    pub fn load() -> Result<Self> {
        match find_style_file() {
            Some(path) => Self::load_from(path),
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use climenu_config::StyleConfig;
    ///
    /// # fn example() -> climenu_config::Result<()> {
    /// let config = StyleConfig::load_from("custom-style.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config = read_style_file(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_style_file(path.as_ref(), self)
    }

    /// Validates the configuration without a terminal.
    ///
    /// Checks colour names and codes, and, when a width is given, that
    /// fixed margins and padding leave room for content.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use climenu_config::{ColourSetting, StyleConfig};
    ///
    /// let mut config = StyleConfig::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.bg = Some(ColourSetting::code(512));
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        for colour in [&self.fg, &self.bg].into_iter().flatten() {
            colour.validate()?;
        }

        if let (Some(width), Some(MarginSetting::Columns(margin))) = (self.width, self.margin) {
            let padding = self.padding.unwrap_or(climenu_style::style::DEFAULT_PADDING);
            let used = 2 * u32::from(margin) + 2 * u32::from(padding);
            if used > u32::from(width) {
                return Err(ConfigError::InvalidGeometry {
                    reason: format!(
                        "margin {margin} and padding {padding} need {used} columns but width is {width}"
                    ),
                });
            }
        }

        Ok(())
    }

    /// Returns whether the configuration overrides nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies the configuration onto a style.
    ///
    /// Both colours are resolved against the style's terminal before
    /// anything is changed, so a rejected colour leaves the style
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or an indexed
    /// colour needs a fallback on an 8 colour terminal and has none.
    ///
    /// # Examples
    ///
    /// ```
    /// use climenu_config::{ColourSetting, StyleConfig};
    /// use climenu_style::{Colour, MenuStyle, NamedColour};
    /// use climenu_terminal::{ColourSupport, StaticTerminal};
    ///
    /// let mut style = MenuStyle::new(StaticTerminal::new(80, ColourSupport::Basic));
    /// let config = StyleConfig {
    ///     fg: Some(ColourSetting::code_with_fallback(206, "red")),
    ///     padding: Some(1),
    ///     ..Default::default()
    /// };
    ///
    /// config.apply_to(&mut style).unwrap();
    /// assert_eq!(style.fg(), NamedColour::Red);
    /// assert_eq!(style.padding(), 1);
    /// ```
    pub fn apply_to<T: Terminal>(&self, style: &mut MenuStyle<T>) -> Result<()> {
        self.validate()?;

        let fg = self.fg.as_ref().map(|colour| resolve(style, colour)).transpose()?;
        let bg = self.bg.as_ref().map(|colour| resolve(style, colour)).transpose()?;

        if let Some((fg, fallback)) = fg {
            style.set_fg(fg, fallback)?;
        }
        if let Some((bg, fallback)) = bg {
            style.set_bg(bg, fallback)?;
        }
        if let Some(marker) = &self.selected_marker {
            style.set_selected_marker(marker.as_str());
        }
        if let Some(marker) = &self.unselected_marker {
            style.set_unselected_marker(marker.as_str());
        }
        if let Some(extra) = &self.item_extra {
            style.set_item_extra(extra.as_str());
        }
        if let Some(displays_extra) = self.displays_extra {
            style.set_displays_extra(displays_extra);
        }
        if let Some(separator) = &self.title_separator {
            style.set_title_separator(separator.as_str());
        }
        if let Some(padding) = self.padding {
            style.set_padding(padding);
        }
        // Margin before width so an automatic margin centres the final width
        match self.margin {
            Some(MarginSetting::Columns(margin)) => {
                style.set_margin(margin);
            }
            Some(MarginSetting::Auto) => {
                style.set_margin_auto();
            }
            None => {}
        }
        if let Some(width) = self.width {
            style.set_width(width);
        }

        tracing::debug!(
            fg = %style.fg(),
            bg = %style.bg(),
            width = style.width(),
            content_width = style.content_width(),
            "applied style config"
        );
        Ok(())
    }
}

/// Resolves a configured colour, keeping the fallback that goes with it.
fn resolve<T: Terminal>(
    style: &MenuStyle<T>,
    colour: &ColourSetting,
) -> std::result::Result<(Colour, Option<NamedColour>), StyleError> {
    let fallback = colour.fallback()?;
    let resolved = style.resolve_colour(colour.request(), fallback)?;
    Ok((resolved, fallback))
}

fn colour_setting(colour: Colour, fallback: Option<NamedColour>) -> ColourSetting {
    match (colour, fallback) {
        (Colour::Named(named), _) => ColourSetting::name(named.name()),
        (Colour::Indexed(index), Some(fallback)) => {
            ColourSetting::code_with_fallback(i64::from(index), fallback.name())
        }
        (Colour::Indexed(index), None) => ColourSetting::code(i64::from(index)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use climenu_terminal::{ColourSupport, StaticTerminal};
    use tempfile::TempDir;

    fn style(colour_support: ColourSupport) -> MenuStyle<StaticTerminal> {
        MenuStyle::with_width(StaticTerminal::new(200, colour_support), 100)
    }

    #[test]
    fn default_config() {
        let config = StyleConfig::default();
        assert!(config.is_empty());
        assert!(config.validate().is_ok());
        assert_eq!(StyleConfig::new(), config);
    }

    #[test]
    fn empty_config_changes_nothing() {
        let mut styled = style(ColourSupport::Basic);
        StyleConfig::default().apply_to(&mut styled).unwrap();

        let untouched = style(ColourSupport::Basic);
        assert_eq!(StyleConfig::from_style(&styled), StyleConfig::from_style(&untouched));
    }

    #[test]
    fn apply_every_field() {
        let config = StyleConfig {
            fg: Some(ColourSetting::name("yellow")),
            bg: Some(ColourSetting::name("red")),
            selected_marker: Some(">".to_string()),
            unselected_marker: Some("-".to_string()),
            item_extra: Some("EXTRA!".to_string()),
            displays_extra: Some(true),
            title_separator: Some("+".to_string()),
            width: Some(120),
            margin: Some(MarginSetting::Columns(10)),
            padding: Some(10),
        };

        let mut style = style(ColourSupport::Basic);
        config.apply_to(&mut style).unwrap();

        assert_eq!(style.fg(), Colour::Named(NamedColour::Yellow));
        assert_eq!(style.bg(), Colour::Named(NamedColour::Red));
        assert_eq!(style.selected_marker(), ">");
        assert_eq!(style.unselected_marker(), "-");
        assert_eq!(style.item_extra(), "EXTRA!");
        assert!(style.displays_extra());
        assert_eq!(style.title_separator(), "+");
        assert_eq!(style.width(), 120);
        assert_eq!(style.margin(), 10);
        assert_eq!(style.padding(), 10);
        assert_eq!(style.content_width(), 80);
    }

    #[test]
    fn apply_indexed_colours_per_terminal() {
        let config = StyleConfig {
            fg: Some(ColourSetting::code_with_fallback(206, "red")),
            bg: Some(ColourSetting::code_with_fallback(16, "white")),
            ..Default::default()
        };

        let mut extended = style(ColourSupport::Extended);
        config.apply_to(&mut extended).unwrap();
        assert_eq!(extended.colours_set_code(), "\x1b[38;5;206;48;5;16m");

        let mut basic = style(ColourSupport::Basic);
        config.apply_to(&mut basic).unwrap();
        assert_eq!(basic.colours_set_code(), "\x1b[31;47m");
    }

    #[test]
    fn apply_is_all_or_nothing_for_colours() {
        let config = StyleConfig {
            fg: Some(ColourSetting::name("green")),
            bg: Some(ColourSetting::code(16)),
            ..Default::default()
        };

        let mut style = style(ColourSupport::Basic);
        let err = config.apply_to(&mut style).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Style(StyleError::MissingFallback { code: 16 })
        ));
        assert_eq!(style.fg(), Colour::Named(NamedColour::White));
        assert_eq!(style.bg(), Colour::Named(NamedColour::Blue));
    }

    #[test]
    fn apply_auto_margin_centres_width() {
        let config = StyleConfig {
            width: Some(60),
            margin: Some(MarginSetting::Auto),
            ..Default::default()
        };

        let mut style = style(ColourSupport::Basic);
        config.apply_to(&mut style).unwrap();
        assert!(style.is_margin_auto());
        assert_eq!(style.margin(), 70);
    }

    #[test]
    fn validate_rejects_bad_colours() {
        let config = StyleConfig {
            fg: Some(ColourSetting::name("purple")),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid colour"));

        let config = StyleConfig {
            bg: Some(ColourSetting::code(-5)),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid colour code"));
    }

    #[test]
    fn validate_rejects_overfull_geometry() {
        let config = StyleConfig {
            width: Some(20),
            margin: Some(MarginSetting::Columns(6)),
            padding: Some(5),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidGeometry { .. })
        ));

        // Exactly full is allowed
        let config = StyleConfig {
            width: Some(20),
            margin: Some(MarginSetting::Columns(5)),
            padding: Some(5),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_style_roundtrip() {
        let mut original = style(ColourSupport::Extended);
        original.set_fg(206, None).unwrap();
        original.set_selected_marker(">").set_margin_auto();

        let config = StyleConfig::from_style(&original);
        assert_eq!(config.fg, Some(ColourSetting::code(206)));
        assert_eq!(config.margin, Some(MarginSetting::Auto));

        let mut copy = style(ColourSupport::Extended);
        config.apply_to(&mut copy).unwrap();
        assert_eq!(StyleConfig::from_style(&copy), config);
    }

    #[test]
    fn saved_indexed_colour_keeps_its_fallback() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("saved.json");

        let mut original = style(ColourSupport::Extended);
        original.set_fg(206, Some(NamedColour::Red)).unwrap();
        original.set_bg(16, Some(NamedColour::White)).unwrap();
        StyleConfig::from_style(&original).save_to(&path).unwrap();

        let loaded = StyleConfig::load_from(&path).unwrap();
        assert_eq!(loaded.fg, Some(ColourSetting::code_with_fallback(206, "red")));

        let mut basic = style(ColourSupport::Basic);
        loaded.apply_to(&mut basic).unwrap();
        assert_eq!(basic.fg(), Colour::Named(NamedColour::Red));
        assert_eq!(basic.bg(), Colour::Named(NamedColour::White));

        let mut extended = style(ColourSupport::Extended);
        loaded.apply_to(&mut extended).unwrap();
        assert_eq!(extended.fg(), Colour::Indexed(206));
        assert_eq!(extended.fg_fallback(), Some(NamedColour::Red));
    }

    #[test]
    fn saved_indexed_colour_without_fallback_fails_on_basic_terminal() {
        let mut original = style(ColourSupport::Extended);
        original.set_fg(206, None).unwrap();
        let config = StyleConfig::from_style(&original);

        let mut basic = style(ColourSupport::Basic);
        let err = config.apply_to(&mut basic).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Style(StyleError::MissingFallback { code: 206 })
        ));
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: StyleConfig = serde_json::from_str("{}").unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn deserialize_partial() {
        let json = r#"{"fg": "cyan", "margin": "auto"}"#;
        let config: StyleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.fg, Some(ColourSetting::name("cyan")));
        assert_eq!(config.margin, Some(MarginSetting::Auto));
        assert!(config.bg.is_none());
    }

    #[test]
    fn unset_fields_not_serialized() {
        let config = StyleConfig {
            padding: Some(3),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"padding":3}"#);
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("climenu.json5");
        std::fs::write(
            &path,
            r#"
            {
                // Pink on black, white on red for 8 colour terminals
                fg: { code: 206, fallback: "white" },
                bg: { code: 16, fallback: "red" },
                selected_marker: "→",
                margin: "auto",
                padding: 1,
            }
            "#,
        )
        .unwrap();

        let config = StyleConfig::load_from(&path).unwrap();
        assert_eq!(config.fg, Some(ColourSetting::code_with_fallback(206, "white")));
        assert_eq!(config.bg, Some(ColourSetting::code_with_fallback(16, "red")));
        assert_eq!(config.selected_marker.as_deref(), Some("→"));
        assert_eq!(config.margin, Some(MarginSetting::Auto));
        assert_eq!(config.padding, Some(1));
    }

    #[test]
    fn load_from_rejects_invalid_colour() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("climenu.json");
        std::fs::write(&path, r#"{"fg": 512}"#).unwrap();

        let err = StyleConfig::load_from(&path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Style(StyleError::InvalidColourCode { code: 512 })
        ));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let original = StyleConfig {
            fg: Some(ColourSetting::code(99)),
            bg: Some(ColourSetting::name("black")),
            title_separator: Some("~".to_string()),
            width: Some(72),
            ..Default::default()
        };

        original.save_to(&path).unwrap();
        let loaded = StyleConfig::load_from(&path).unwrap();

        assert_eq!(original, loaded);
    }
}
