//! Bottom line listing the keys of the current view

use crate::ui::dashboard::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One `key:action` pair of the bottom line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    #[must_use]
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints for the dog list
    #[must_use]
    pub fn browse_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("↑/↓", "move"),
            KeyHint::new("←/→", "page"),
            KeyHint::new("space", "favorite"),
            KeyHint::new("b", "breed"),
            KeyHint::new("z", "page size"),
            KeyHint::new("m", "match"),
            KeyHint::new("o", "photo"),
            KeyHint::new("r", "refresh"),
            KeyHint::new("L", "logout"),
            KeyHint::new("q", "quit"),
        ]
    }

    /// Hints while the breed picker is open
    #[must_use]
    pub fn picker_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("↑/↓", "move"),
            KeyHint::new("Enter", "apply"),
            KeyHint::new("ESC", "cancel"),
        ]
    }

    /// Hints while the match modal is open
    #[must_use]
    pub fn match_hints() -> Vec<KeyHint> {
        vec![KeyHint::new("o", "photo"), KeyHint::new("any key", "close")]
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(self.hints.len() * 4);
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key, self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
