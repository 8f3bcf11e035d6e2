//! Breed picker overlay
//!
//! The first row is always "All breeds", which clears the filter.

use crate::ui::dashboard::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Widget},
};

const ALL_BREEDS: &str = "All breeds";

/// Cursor over the breed options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreedPickerState {
    cursor: usize,
}

impl BreedPickerState {
    /// Open the picker on `current`, or on "All breeds" when unset
    #[must_use]
    pub fn open(breeds: &[String], current: Option<&str>) -> Self {
        let cursor = current
            .and_then(|c| breeds.iter().position(|b| b == c))
            .map_or(0, |i| i + 1);
        Self { cursor }
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn down(&mut self, breeds: &[String]) {
        self.cursor = (self.cursor + 1).min(breeds.len());
    }

    /// The breed under the cursor; `None` means all breeds
    #[must_use]
    pub fn choice(&self, breeds: &[String]) -> Option<String> {
        self.cursor
            .checked_sub(1)
            .and_then(|i| breeds.get(i))
            .cloned()
    }
}

/// Centered list of breeds
pub struct BreedPicker<'a> {
    breeds: &'a [String],
    state: &'a BreedPickerState,
    loading: bool,
    theme: &'a Theme,
}

impl<'a> BreedPicker<'a> {
    #[must_use]
    pub const fn new(breeds: &'a [String], state: &'a BreedPickerState, theme: &'a Theme) -> Self {
        Self {
            breeds,
            state,
            loading: false,
            theme,
        }
    }

    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    fn centered_rect(area: Rect) -> Rect {
        let vertical = Layout::vertical([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(vertical[1])[1]
    }
}

impl Widget for BreedPicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = Self::centered_rect(area);
        Clear.render(popup, buf);

        let title = if self.loading {
            " Breed (loading...) "
        } else {
            " Breed "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(title)
            .title_alignment(Alignment::Center);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let visible_height = inner.height as usize;
        if visible_height == 0 {
            return;
        }

        let options: Vec<&str> = std::iter::once(ALL_BREEDS)
            .chain(self.breeds.iter().map(String::as_str))
            .collect();
        let cursor = self.state.cursor();
        let start = cursor.saturating_sub(visible_height.saturating_sub(1));

        let items: Vec<ListItem> = options
            .iter()
            .enumerate()
            .skip(start)
            .take(visible_height)
            .map(|(idx, name)| {
                let line = Line::from(vec![
                    Span::styled(if idx == cursor { "> " } else { "  " }, self.theme.cursor_style()),
                    Span::raw(*name),
                ]);
                if idx == cursor {
                    ListItem::new(line).style(self.theme.selected_style())
                } else {
                    ListItem::new(line)
                }
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
