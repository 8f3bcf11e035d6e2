//! Status bar widget: the live notification plus page and filter info

use crate::ui::dashboard::theme::Theme;
use crate::ui::output::Severity;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Summary of the search shown on the right of the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub page: usize,
    pub pages: usize,
    pub page_size: usize,
    pub total: usize,
    pub favorites: usize,
}

impl PageSummary {
    fn render_text(&self) -> String {
        format!(
            "Page {}/{} · {} per page · {} dogs · ♥ {}",
            self.page,
            self.pages.max(1),
            self.page_size,
            self.total,
            self.favorites
        )
    }
}

/// Status bar widget
pub struct StatusBar<'a> {
    message: Option<&'a (Severity, String)>,
    busy: Option<&'a str>,
    summary: &'a PageSummary,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(
        message: Option<&'a (Severity, String)>,
        summary: &'a PageSummary,
        theme: &'a Theme,
    ) -> Self {
        Self {
            message,
            busy: None,
            summary,
            theme,
        }
    }

    /// Show a loading label when no message is live
    #[must_use]
    pub const fn with_busy(mut self, label: Option<&'a str>) -> Self {
        self.busy = label;
        self
    }

    const fn prefix_for(severity: Severity) -> &'static str {
        match severity {
            Severity::Success => "✓ ",
            Severity::Error => "✗ ",
            Severity::Warning => "⚠ ",
            Severity::Info => "ℹ ",
            Severity::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(inner);

        if let Some((severity, text)) = self.message {
            let style = self.theme.severity_style(*severity);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for(*severity), style),
                Span::styled(text.as_str(), style),
            ]);
            Paragraph::new(line).render(chunks[0], buf);
        } else if let Some(label) = self.busy {
            let style = self.theme.dimmed_style().add_modifier(Modifier::ITALIC);
            Paragraph::new(Line::styled(label, style)).render(chunks[0], buf);
        }

        let summary = Line::styled(self.summary.render_text(), self.theme.summary_style());
        Paragraph::new(summary)
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> PageSummary {
        PageSummary {
            page: 2,
            pages: 5,
            page_size: 20,
            total: 93,
            favorites: 3,
        }
    }

    fn rendered(buf: &Buffer) -> String {
        buf.content().iter().map(ratatui::buffer::Cell::symbol).collect()
    }

    #[test]
    fn test_summary_text() {
        assert_eq!(
            summary().render_text(),
            "Page 2/5 · 20 per page · 93 dogs · ♥ 3"
        );
    }

    #[test]
    fn test_empty_summary_shows_one_page() {
        let empty = PageSummary {
            page: 1,
            pages: 0,
            page_size: 10,
            total: 0,
            favorites: 0,
        };
        assert!(empty.render_text().starts_with("Page 1/1"));
    }

    #[test]
    fn test_renders_message() {
        let theme = Theme::default();
        let summary = summary();
        let message = (Severity::Error, "API Error: 500".to_string());
        let area = Rect::new(0, 0, 100, 3);
        let mut buf = Buffer::empty(area);

        StatusBar::new(Some(&message), &summary, &theme).render(area, &mut buf);

        assert!(rendered(&buf).contains("API Error: 500"));
    }

    #[test]
    fn test_renders_busy_label_without_message() {
        let theme = Theme::default();
        let summary = summary();
        let area = Rect::new(0, 0, 100, 3);
        let mut buf = Buffer::empty(area);

        StatusBar::new(None, &summary, &theme)
            .with_busy(Some("Searching..."))
            .render(area, &mut buf);

        assert!(rendered(&buf).contains("Searching..."));
    }
}
