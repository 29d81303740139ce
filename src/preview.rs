//! Static rendering of a sample menu.
//!
//! Each line spans the full menu width: left margin, colour code, left
//! padding, content, right-hand padding, reset code, right margin.

use climenu_style::MenuStyle;
use climenu_terminal::Terminal;

/// A sample menu item.
#[derive(Debug, Clone)]
pub struct PreviewItem {
    pub label: String,
    pub has_extra: bool,
}

impl PreviewItem {
    pub fn new(label: impl Into<String>, has_extra: bool) -> Self {
        Self {
            label: label.into(),
            has_extra,
        }
    }
}

/// The items shown by the preview.
pub fn sample_items() -> Vec<PreviewItem> {
    vec![
        PreviewItem::new("Start a new session", false),
        PreviewItem::new("Resume last session", true),
        PreviewItem::new("Settings", false),
    ]
}

/// Renders a full menu: title, separator, items, and blank framing rows.
pub fn render_menu<T: Terminal>(
    style: &MenuStyle<T>,
    title: &str,
    items: &[PreviewItem],
    selected: usize,
) -> Vec<String> {
    let mut lines = vec![
        render_row(style, "", false),
        render_row(style, title, false),
        render_row(style, &style.title_separator_line(), false),
    ];
    lines.extend(
        items
            .iter()
            .enumerate()
            .map(|(index, item)| render_item_line(style, item, index == selected)),
    );
    lines.push(render_row(style, "", false));
    lines
}

/// Renders one menu item with its marker and, if enabled, its extra.
pub fn render_item_line<T: Terminal>(
    style: &MenuStyle<T>,
    item: &PreviewItem,
    selected: bool,
) -> String {
    let text = format!("{} {}", style.marker(selected), item.label);
    if !(item.has_extra && style.displays_extra()) {
        return render_row(style, &text, selected);
    }

    let extra = style.item_extra();
    let gap = style.right_hand_padding(columns(&text) + columns(extra)) - i32::from(style.padding());
    let content = format!("{text}{}{extra}{}", spaces(gap), spaces(i32::from(style.padding())));
    paint(style, &content, selected)
}

fn render_row<T: Terminal>(style: &MenuStyle<T>, text: &str, selected: bool) -> String {
    let fill = spaces(style.right_hand_padding(columns(text)));
    paint(style, &format!("{text}{fill}"), selected)
}

fn paint<T: Terminal>(style: &MenuStyle<T>, content: &str, selected: bool) -> String {
    let (set, unset) = if selected {
        (style.selected_set_code(), style.selected_unset_code())
    } else {
        (style.unselected_set_code(), style.unselected_unset_code())
    };
    let margin = spaces(i32::from(style.margin()));
    let padding = spaces(i32::from(style.padding()));
    format!("{margin}{set}{padding}{content}{unset}{margin}")
}

fn columns(text: &str) -> i32 {
    i32::try_from(text.chars().count()).unwrap_or(i32::MAX)
}

fn spaces(count: i32) -> String {
    " ".repeat(usize::try_from(count).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use climenu_terminal::{ColourSupport, StaticTerminal};

    fn style() -> MenuStyle<StaticTerminal> {
        let mut style = MenuStyle::new(StaticTerminal::new(80, ColourSupport::Basic));
        style.set_width(30).set_margin(1).set_padding(2);
        style
    }

    fn strip_codes(line: &str) -> String {
        line.replace("\x1b[44;37m", "")
            .replace("\x1b[47;34m", "")
            .replace("\x1b[49;39m", "")
    }

    #[test]
    fn rows_span_the_menu_width() {
        let style = style();
        let lines = render_menu(&style, "Menu", &sample_items(), 1);
        assert_eq!(lines.len(), 7);
        for line in &lines {
            assert_eq!(strip_codes(line).chars().count(), 30, "{line:?}");
        }
    }

    #[test]
    fn selected_item_uses_selected_codes() {
        let style = style();
        let item = PreviewItem::new("Settings", false);

        let line = render_item_line(&style, &item, true);
        assert_eq!(
            line,
            format!(" \x1b[47;34m  ● Settings{}\x1b[49;39m ", " ".repeat(16))
        );

        let line = render_item_line(&style, &item, false);
        assert!(line.starts_with(" \x1b[44;37m  ○ Settings"));
    }

    #[test]
    fn extra_is_right_aligned_inside_padding() {
        let mut style = style();
        style.set_displays_extra(true);
        let item = PreviewItem::new("Resume", true);

        let line = strip_codes(&render_item_line(&style, &item, false));
        assert!(line.ends_with("✔   "), "{line:?}");
        assert_eq!(line.chars().count(), 30);
    }

    #[test]
    fn extra_hidden_unless_displayed() {
        let style = style();
        let item = PreviewItem::new("Resume", true);
        let line = render_item_line(&style, &item, false);
        assert!(!line.contains('✔'));
    }

    #[test]
    fn separator_row_fills_content_width() {
        let style = style();
        let lines = render_menu(&style, "Menu", &[], 0);
        let separator = strip_codes(&lines[2]);
        assert_eq!(separator.trim(), "=".repeat(24));
    }
}
