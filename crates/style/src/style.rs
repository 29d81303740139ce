//! The menu style engine.
//!
//! [`MenuStyle`] holds every visual attribute of a menu and derives the
//! values a renderer needs from them: escape sequences for selected and
//! unselected items, the marker to draw, and the width left for item text.
//!
//! # Colour resolution
//!
//! Colours are resolved once, when they are set. On a terminal limited to
//! eight colours an indexed request is replaced by the named fallback that
//! accompanies it, so everything downstream works from the stored
//! [`Colour`] alone.
//!
//! # Geometry
//!
//! ```text
//! |<------------------------- width ------------------------->|
//! | margin | padding |<---- content width ---->| padding | margin |
//! ```

use climenu_terminal::{ColourSupport, Terminal};

use crate::colour::{Colour, ColourRequest, NamedColour};
use crate::error::{Result, StyleError};

/// Escape sequence restoring the terminal's default foreground and background.
pub const DEFAULT_COLOURS_CODE: &str = "\x1b[49;39m";

/// Escape sequence resetting every graphic attribute.
pub const RESET_CODE: &str = "\x1b[0m";

/// Default background colour.
pub const DEFAULT_BG: NamedColour = NamedColour::Blue;

/// Default foreground colour.
pub const DEFAULT_FG: NamedColour = NamedColour::White;

/// Default marker for items that are not selected.
pub const DEFAULT_UNSELECTED_MARKER: &str = "○";

/// Default marker for the selected item.
pub const DEFAULT_SELECTED_MARKER: &str = "●";

/// Default text shown after items that have an extra.
pub const DEFAULT_ITEM_EXTRA: &str = "✔";

/// Default glyph repeated under the menu title.
pub const DEFAULT_TITLE_SEPARATOR: &str = "=";

/// Default margin on each side of the menu, in columns.
pub const DEFAULT_MARGIN: u16 = 2;

/// Default padding on each side of the menu content, in columns.
pub const DEFAULT_PADDING: u16 = 2;

/// Visual attributes of a menu, bound to the terminal it is drawn on.
///
/// # Examples
///
/// ```
/// use climenu_style::{MenuStyle, NamedColour};
/// use climenu_terminal::{ColourSupport, StaticTerminal};
///
/// let mut style = MenuStyle::new(StaticTerminal::new(500, ColourSupport::Basic));
/// style.set_width(100);
///
/// assert_eq!(style.unselected_set_code(), "\x1b[44;37m");
/// assert_eq!(style.selected_set_code(), "\x1b[47;34m");
/// assert_eq!(style.content_width(), 92);
///
/// // 206 cannot be shown on this terminal, so the fallback is stored
/// style.set_fg(206, Some(NamedColour::Red)).unwrap();
/// assert_eq!(style.fg(), NamedColour::Red);
/// ```
#[derive(Debug, Clone)]
pub struct MenuStyle<T> {
    terminal: T,
    colour_support: ColourSupport,
    fg: Colour,
    bg: Colour,
    fg_fallback: Option<NamedColour>,
    bg_fallback: Option<NamedColour>,
    width: u16,
    margin: u16,
    margin_auto: bool,
    padding: u16,
    content_width: i32,
    selected_marker: String,
    unselected_marker: String,
    item_extra: String,
    displays_extra: bool,
    title_separator: String,
}

impl<T: Terminal> MenuStyle<T> {
    /// Creates a style with default attributes spanning the full terminal
    /// width.
    #[must_use]
    pub fn new(terminal: T) -> Self {
        let width = terminal.width();
        Self::with_width(terminal, width)
    }

    /// Creates a style with default attributes and an explicit width.
    #[must_use]
    pub fn with_width(terminal: T, width: u16) -> Self {
        let colour_support = terminal.colour_support();
        let mut style = Self {
            terminal,
            colour_support,
            fg: Colour::Named(DEFAULT_FG),
            bg: Colour::Named(DEFAULT_BG),
            fg_fallback: None,
            bg_fallback: None,
            width,
            margin: DEFAULT_MARGIN,
            margin_auto: false,
            padding: DEFAULT_PADDING,
            content_width: 0,
            selected_marker: DEFAULT_SELECTED_MARKER.to_string(),
            unselected_marker: DEFAULT_UNSELECTED_MARKER.to_string(),
            item_extra: DEFAULT_ITEM_EXTRA.to_string(),
            displays_extra: false,
            title_separator: DEFAULT_TITLE_SEPARATOR.to_string(),
        };
        style.calculate_content_width();
        style
    }

    /// Binds the style to another terminal, returning the previous one.
    ///
    /// Colour support is read again from the new terminal. Colours that
    /// were already stored are kept as they are.
    pub fn bind_terminal(&mut self, terminal: T) -> T {
        let previous = std::mem::replace(&mut self.terminal, terminal);
        self.colour_support = self.terminal.colour_support();
        if self.margin_auto {
            self.apply_margin_auto();
        }
        self.calculate_content_width();
        previous
    }

    /// Returns the terminal this style is bound to.
    #[must_use]
    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Returns the colour support read from the terminal at bind time.
    #[must_use]
    pub fn colour_support(&self) -> ColourSupport {
        self.colour_support
    }

    // Colours

    /// Returns the stored foreground colour.
    #[must_use]
    pub fn fg(&self) -> Colour {
        self.fg
    }

    /// Sets the foreground colour.
    ///
    /// `fallback` is stored instead of an indexed colour when the terminal
    /// only supports eight colours. It is ignored for named colours and on
    /// terminals that can display the index.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the current colour untouched, if:
    /// - a code is outside 0-255 ([`StyleError::InvalidColourCode`])
    /// - a name is not in the palette ([`StyleError::InvalidColour`])
    /// - a code needs a fallback that was not given
    ///   ([`StyleError::MissingFallback`])
    ///
    /// # Examples
    ///
    /// ```
    /// use climenu_style::{MenuStyle, NamedColour};
    /// use climenu_terminal::{ColourSupport, StaticTerminal};
    ///
    /// let mut style = MenuStyle::new(StaticTerminal::new(80, ColourSupport::Extended));
    /// style.set_fg(206, Some(NamedColour::Red)).unwrap();
    /// assert_eq!(style.fg(), 206);
    ///
    /// style.set_fg("yellow", None).unwrap();
    /// assert_eq!(style.fg(), NamedColour::Yellow);
    ///
    /// assert!(style.set_fg(512, Some(NamedColour::White)).is_err());
    /// assert_eq!(style.fg(), NamedColour::Yellow);
    /// ```
    pub fn set_fg(
        &mut self,
        colour: impl Into<ColourRequest>,
        fallback: Option<NamedColour>,
    ) -> Result<&mut Self> {
        self.fg = self.resolve_colour(colour, fallback)?;
        self.fg_fallback = fallback.filter(|_| self.fg.is_indexed());
        Ok(self)
    }

    /// Returns the fallback paired with an indexed foreground colour.
    ///
    /// Always `None` when the stored foreground is a named colour.
    #[must_use]
    pub fn fg_fallback(&self) -> Option<NamedColour> {
        self.fg_fallback
    }

    /// Returns the stored background colour.
    #[must_use]
    pub fn bg(&self) -> Colour {
        self.bg
    }

    /// Sets the background colour.
    ///
    /// Follows the same rules as [`MenuStyle::set_fg`].
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the current colour untouched, if the code
    /// or name is invalid or a required fallback is missing.
    pub fn set_bg(
        &mut self,
        colour: impl Into<ColourRequest>,
        fallback: Option<NamedColour>,
    ) -> Result<&mut Self> {
        self.bg = self.resolve_colour(colour, fallback)?;
        self.bg_fallback = fallback.filter(|_| self.bg.is_indexed());
        Ok(self)
    }

    /// Returns the fallback paired with an indexed background colour.
    #[must_use]
    pub fn bg_fallback(&self) -> Option<NamedColour> {
        self.bg_fallback
    }

    /// Resolves a colour request against this style's terminal without
    /// storing it.
    ///
    /// This is what [`MenuStyle::set_fg`] and [`MenuStyle::set_bg`] store.
    /// Useful for validating several colours before changing any of them.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`MenuStyle::set_fg`].
    pub fn resolve_colour(
        &self,
        colour: impl Into<ColourRequest>,
        fallback: Option<NamedColour>,
    ) -> Result<Colour> {
        match colour.into() {
            ColourRequest::Named(named) => Ok(Colour::Named(named)),
            ColourRequest::Name(name) => name.parse().map(Colour::Named),
            ColourRequest::Code(code) => {
                let index =
                    u8::try_from(code).map_err(|_| StyleError::InvalidColourCode { code })?;
                if self.colour_support.supports_indexed() {
                    return Ok(Colour::Indexed(index));
                }

                let fallback = fallback.ok_or(StyleError::MissingFallback { code: index })?;
                tracing::debug!(
                    code = index,
                    %fallback,
                    colour_support = %self.colour_support,
                    "indexed colour unsupported, using fallback"
                );
                Ok(Colour::Named(fallback))
            }
        }
    }

    // Escape codes

    /// Returns the escape sequence painting the selected item.
    ///
    /// The selected item is drawn inverted: the foreground colour becomes
    /// the background and vice versa.
    #[must_use]
    pub fn selected_set_code(&self) -> String {
        sgr(&self.fg.background_sgr(), &self.bg.foreground_sgr())
    }

    /// Returns the escape sequence ending the selected item.
    #[must_use]
    pub fn selected_unset_code(&self) -> &'static str {
        DEFAULT_COLOURS_CODE
    }

    /// Returns the escape sequence painting an unselected item.
    #[must_use]
    pub fn unselected_set_code(&self) -> String {
        sgr(&self.bg.background_sgr(), &self.fg.foreground_sgr())
    }

    /// Returns the escape sequence ending an unselected item.
    #[must_use]
    pub fn unselected_unset_code(&self) -> &'static str {
        DEFAULT_COLOURS_CODE
    }

    /// Returns the escape sequence setting both colours, foreground first.
    ///
    /// Each colour is rendered in the form it is stored in, so two indexed
    /// colours produce the extended `38;5;N;48;5;M` form and two named
    /// colours the classic `3X;4Y` form.
    ///
    /// # Examples
    ///
    /// ```
    /// use climenu_style::{MenuStyle, NamedColour};
    /// use climenu_terminal::{ColourSupport, StaticTerminal};
    ///
    /// let mut style = MenuStyle::new(StaticTerminal::new(80, ColourSupport::Extended));
    /// style.set_bg(16, Some(NamedColour::White)).unwrap();
    /// style.set_fg(206, Some(NamedColour::Red)).unwrap();
    /// assert_eq!(style.colours_set_code(), "\x1b[38;5;206;48;5;16m");
    /// ```
    #[must_use]
    pub fn colours_set_code(&self) -> String {
        sgr(&self.fg.foreground_sgr(), &self.bg.background_sgr())
    }

    /// Returns the escape sequence setting both colours swapped.
    #[must_use]
    pub fn inverted_colours_set_code(&self) -> String {
        sgr(&self.bg.foreground_sgr(), &self.fg.background_sgr())
    }

    /// Returns the escape sequence resetting all graphic attributes.
    #[must_use]
    pub fn colours_reset_code(&self) -> &'static str {
        RESET_CODE
    }

    // Markers and decorations

    /// Returns the marker for an item in the given selection state.
    #[must_use]
    pub fn marker(&self, selected: bool) -> &str {
        if selected {
            &self.selected_marker
        } else {
            &self.unselected_marker
        }
    }

    /// Returns the marker drawn before the selected item.
    #[must_use]
    pub fn selected_marker(&self) -> &str {
        &self.selected_marker
    }

    /// Sets the marker drawn before the selected item.
    pub fn set_selected_marker(&mut self, marker: impl Into<String>) -> &mut Self {
        self.selected_marker = marker.into();
        self
    }

    /// Returns the marker drawn before unselected items.
    #[must_use]
    pub fn unselected_marker(&self) -> &str {
        &self.unselected_marker
    }

    /// Sets the marker drawn before unselected items.
    pub fn set_unselected_marker(&mut self, marker: impl Into<String>) -> &mut Self {
        self.unselected_marker = marker.into();
        self
    }

    /// Returns the text shown after items that have an extra.
    #[must_use]
    pub fn item_extra(&self) -> &str {
        &self.item_extra
    }

    /// Sets the text shown after items that have an extra.
    pub fn set_item_extra(&mut self, extra: impl Into<String>) -> &mut Self {
        self.item_extra = extra.into();
        self
    }

    /// Returns whether item extras are displayed.
    #[must_use]
    pub fn displays_extra(&self) -> bool {
        self.displays_extra
    }

    /// Sets whether item extras are displayed.
    pub fn set_displays_extra(&mut self, displays_extra: bool) -> &mut Self {
        self.displays_extra = displays_extra;
        self
    }

    /// Returns the glyph repeated under the title.
    #[must_use]
    pub fn title_separator(&self) -> &str {
        &self.title_separator
    }

    /// Sets the glyph repeated under the title.
    pub fn set_title_separator(&mut self, separator: impl Into<String>) -> &mut Self {
        self.title_separator = separator.into();
        self
    }

    /// Returns the title separator repeated to fill the content width.
    ///
    /// Multi-character separators are repeated whole, so the line may fall
    /// short of the content width by less than one separator.
    #[must_use]
    pub fn title_separator_line(&self) -> String {
        let glyphs = self.title_separator.chars().count();
        let columns = usize::try_from(self.content_width).unwrap_or(0);
        if glyphs == 0 {
            return String::new();
        }
        self.title_separator.repeat(columns / glyphs)
    }

    // Geometry

    /// Returns the total width of the menu.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Sets the total width of the menu and recalculates the geometry.
    ///
    /// If the margin is automatic it is re-centred against the terminal's
    /// current width.
    pub fn set_width(&mut self, width: u16) -> &mut Self {
        self.width = width;
        if self.margin_auto {
            self.apply_margin_auto();
        }
        self.calculate_content_width();
        self
    }

    /// Returns the margin on each side of the menu.
    #[must_use]
    pub fn margin(&self) -> u16 {
        self.margin
    }

    /// Sets the margin on each side of the menu.
    ///
    /// This turns off automatic margins.
    pub fn set_margin(&mut self, margin: u16) -> &mut Self {
        self.margin_auto = false;
        self.margin = margin;
        self.calculate_content_width();
        self
    }

    /// Centres the menu in the terminal.
    ///
    /// The margin is recalculated from the terminal width every time the
    /// menu width changes, until [`MenuStyle::set_margin`] is called.
    ///
    /// # Examples
    ///
    /// ```
    /// use climenu_style::MenuStyle;
    /// use climenu_terminal::{ColourSupport, StaticTerminal};
    ///
    /// let mut style = MenuStyle::with_width(StaticTerminal::new(100, ColourSupport::Basic), 60);
    /// style.set_margin_auto();
    /// assert_eq!(style.margin(), 20);
    ///
    /// style.set_width(50);
    /// assert_eq!(style.margin(), 25);
    /// ```
    pub fn set_margin_auto(&mut self) -> &mut Self {
        self.margin_auto = true;
        self.apply_margin_auto();
        self.calculate_content_width();
        self
    }

    /// Returns whether the margin is centred automatically.
    #[must_use]
    pub fn is_margin_auto(&self) -> bool {
        self.margin_auto
    }

    /// Returns the padding on each side of the menu content.
    #[must_use]
    pub fn padding(&self) -> u16 {
        self.padding
    }

    /// Sets the padding on each side of the menu content.
    pub fn set_padding(&mut self, padding: u16) -> &mut Self {
        self.padding = padding;
        self.calculate_content_width();
        self
    }

    /// Returns the width available for item text.
    ///
    /// This is `width - 2 * margin - 2 * padding`. It is negative when the
    /// margins and padding do not fit in the width.
    #[must_use]
    pub fn content_width(&self) -> i32 {
        self.content_width
    }

    /// Returns the padding needed after an item of `item_len` columns.
    ///
    /// Only one padding unit is subtracted: the left padding is written by
    /// the renderer separately.
    ///
    /// # Examples
    ///
    /// ```
    /// use climenu_style::MenuStyle;
    /// use climenu_terminal::{ColourSupport, StaticTerminal};
    ///
    /// let mut style = MenuStyle::new(StaticTerminal::new(500, ColourSupport::Basic));
    /// style.set_width(300).set_padding(5).set_margin(5);
    /// assert_eq!(style.right_hand_padding(50), 235);
    /// ```
    #[must_use]
    pub fn right_hand_padding(&self, item_len: i32) -> i32 {
        i32::from(self.width) - 2 * i32::from(self.margin) - i32::from(self.padding) - item_len
    }

    fn apply_margin_auto(&mut self) {
        self.margin = self.terminal.width().saturating_sub(self.width) / 2;
    }

    fn calculate_content_width(&mut self) {
        self.content_width = i32::from(self.width)
            - 2 * i32::from(self.margin)
            - 2 * i32::from(self.padding);
        tracing::trace!(
            width = self.width,
            margin = self.margin,
            padding = self.padding,
            content_width = self.content_width,
            "recalculated menu geometry"
        );
    }
}

fn sgr(first: &str, second: &str) -> String {
    format!("\x1b[{first};{second}m")
}
