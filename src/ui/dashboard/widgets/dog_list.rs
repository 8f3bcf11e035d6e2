//! Dog list widget for the current page of results

use crate::favorites::Favorites;
use crate::models::Dog;
use crate::ui::dashboard::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

/// List widget showing one page of dogs with favorite markers
pub struct DogList<'a> {
    dogs: &'a [Dog],
    favorites: &'a Favorites,
    cursor: usize,
    title: String,
    placeholder: &'a str,
    theme: &'a Theme,
}

impl<'a> DogList<'a> {
    #[must_use]
    pub fn new(dogs: &'a [Dog], favorites: &'a Favorites, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            dogs,
            favorites,
            cursor,
            title: " Dogs ".to_string(),
            placeholder: "No dogs found.",
            theme,
        }
    }

    /// Set custom title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Text shown when the page is empty
    #[must_use]
    pub const fn placeholder(mut self, text: &'a str) -> Self {
        self.placeholder = text;
        self
    }

    fn render_item(&self, dog: &Dog, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };
        let favorite_char = if self.favorites.contains(&dog.id) { "♥" } else { " " };
        let age = if dog.age == 1 {
            "1 yr".to_string()
        } else {
            format!("{} yrs", dog.age)
        };

        let line = Line::from(vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(favorite_char, self.theme.favorite_style()),
            Span::raw(" "),
            Span::styled(format!("{:<16}", dog.name), self.theme.normal_style()),
            Span::styled(format!("{:<28}", dog.breed), self.theme.breed_style()),
            Span::raw(format!("{age:<8}")),
            Span::styled(format!("zip {}", dog.zip_code), self.theme.dimmed_style()),
        ]);

        if is_cursor {
            ListItem::new(line).style(self.theme.selected_style())
        } else {
            ListItem::new(line)
        }
    }
}

impl Widget for DogList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.dogs.is_empty() {
            let style = self.theme.dimmed_style().add_modifier(Modifier::ITALIC);
            Paragraph::new(Line::styled(self.placeholder, style)).render(inner, buf);
            return;
        }

        // Keep the cursor row visible on short terminals
        let visible_height = inner.height as usize;
        let start = self.cursor.saturating_sub(visible_height.saturating_sub(1));
        let end = (start + visible_height).min(self.dogs.len());

        let items: Vec<ListItem> = (start..end)
            .map(|idx| self.render_item(&self.dogs[idx], idx == self.cursor))
            .collect();

        List::new(items).render(inner, buf);
    }
}
