//! Modal revealing the matched dog

use crate::models::Dog;
use crate::ui::dashboard::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Details modal for the matched dog
pub struct MatchModal<'a> {
    dog: &'a Dog,
    theme: &'a Theme,
}

impl<'a> MatchModal<'a> {
    #[must_use]
    pub const fn new(dog: &'a Dog, theme: &'a Theme) -> Self {
        Self { dog, theme }
    }

    /// Centered rectangle taking the given percentages of `area`
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let [row] = Layout::vertical([Constraint::Percentage(height.min(90))])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Percentage(width.min(90))])
            .flex(Flex::Center)
            .areas(row);
        popup
    }

    fn field(label: &'static str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(label, Style::default().fg(Color::DarkGray)),
            Span::raw(value),
        ])
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let age = if self.dog.age == 1 {
            "1 year".to_string()
        } else {
            format!("{} years", self.dog.age)
        };

        vec![
            Line::from(Span::styled(
                "It's a match!",
                Style::default()
                    .fg(self.theme.success)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                self.dog.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from("─".repeat(40)),
            Self::field("Breed:    ", self.dog.breed.clone()),
            Self::field("Age:      ", age),
            Self::field("Zip code: ", self.dog.zip_code.clone()),
            Self::field("Photo:    ", self.dog.img.clone()),
            Line::default(),
            Line::from(Span::styled(
                "Press o to open the photo, any other key to close",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
        ]
    }
}

impl Widget for MatchModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 50, area);
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Your Match ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(popup_area, buf);
    }
}
