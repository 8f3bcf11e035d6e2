//! Dashboard palette

use crate::ui::output::Severity;
use ratatui::style::{Color, Modifier, Style};

/// Colors used by the dashboard widgets
#[derive(Debug, Clone)]
pub struct Theme {
    /// Highlighted dog or breed row
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub cursor: Color,
    /// Heart shown next to favorited dogs
    pub favorite: Color,
    pub breed: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
    /// Panel frames
    pub border: Color,
    /// Hints, separators and empty-state text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Palette for dark terminals
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            favorite: Color::Red,
            breed: Color::Magenta,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
        }
    }

    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Row marker and key names in the help bar
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default().fg(self.cursor).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn favorite_style(&self) -> Style {
        Style::default().fg(self.favorite).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn breed_style(&self) -> Style {
        Style::default().fg(self.breed)
    }

    /// Status bar line for a notification
    #[must_use]
    pub fn severity_style(&self, severity: Severity) -> Style {
        match severity {
            Severity::Success => Style::default().fg(self.success),
            Severity::Error => Style::default().fg(self.error),
            Severity::Warning => Style::default().fg(self.warning),
            Severity::Info => Style::default().fg(self.info),
            Severity::Normal => self.normal_style(),
        }
    }

    /// "Page x/y" line under the notifications
    #[must_use]
    pub fn summary_style(&self) -> Style {
        Style::default().fg(self.info).add_modifier(Modifier::DIM)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}
