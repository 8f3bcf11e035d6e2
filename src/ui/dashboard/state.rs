//! Dashboard state
//!
//! Everything the dashboard renders lives here: the search controller, the
//! favorites set, the match workflow and the cursor. Remote calls never
//! touch this struct directly; their results are applied by the event loop.

use super::widgets::{BreedPickerState, HelpBar, KeyHint, PageSummary};
use crate::favorites::{Favorites, MatchWorkflow};
use crate::models::Dog;
use crate::search::SearchController;

/// Current mode of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Browsing the dog list
    #[default]
    Normal,
    /// Breed picker overlay is visible
    BreedPicker,
}

/// Mutable state of the dashboard
#[derive(Debug)]
pub struct DashboardState {
    pub search: SearchController,
    pub favorites: Favorites,
    pub matching: MatchWorkflow,
    pub mode: Mode,
    pub picker: BreedPickerState,
    /// Row under the cursor, relative to the visible page
    pub cursor: usize,
    /// Display name shown in the title
    pub user: Option<String>,
}

impl DashboardState {
    #[must_use]
    pub fn new(search: SearchController, user: Option<String>) -> Self {
        Self {
            search,
            favorites: Favorites::new(),
            matching: MatchWorkflow::new(),
            mode: Mode::Normal,
            picker: BreedPickerState::default(),
            cursor: 0,
            user,
        }
    }

    /// The dog under the cursor
    #[must_use]
    pub fn current_dog(&self) -> Option<&Dog> {
        self.search.visible_page().get(self.cursor)
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let last = self.search.visible_page().len().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(last);
    }

    pub fn next_page(&mut self) {
        self.search.next_page();
        self.cursor = 0;
    }

    pub fn prev_page(&mut self) {
        self.search.prev_page();
        self.cursor = 0;
    }

    pub fn cycle_page_size(&mut self) {
        self.search.cycle_page_size(true);
        self.cursor = 0;
    }

    /// Toggle the dog under the cursor; returns its name and new membership
    pub fn toggle_favorite(&mut self) -> Option<(String, bool)> {
        let dog = self.current_dog()?;
        let (id, name) = (dog.id.clone(), dog.name.clone());
        let added = self.favorites.toggle(&id);
        Some((name, added))
    }

    pub fn open_breed_picker(&mut self) {
        self.picker = BreedPickerState::open(self.search.breeds(), self.search.selected_breed());
        self.mode = Mode::BreedPicker;
    }

    /// Apply the picker's choice as the breed filter
    pub fn apply_breed_choice(&mut self) {
        let choice = self.picker.choice(self.search.breeds());
        self.search.select_breed(choice);
        self.mode = Mode::Normal;
        self.cursor = 0;
    }

    pub fn close_breed_picker(&mut self) {
        self.mode = Mode::Normal;
    }

    /// Label for in-flight work, if any
    #[must_use]
    pub fn busy_label(&self) -> Option<&'static str> {
        if self.matching.is_matching() {
            Some("Finding your match...")
        } else if self.matching.is_loading_details() {
            Some("Fetching match details...")
        } else if self.search.is_searching() {
            Some("Searching...")
        } else if self.search.breeds_loading() {
            Some("Loading breeds...")
        } else {
            None
        }
    }

    #[must_use]
    pub fn page_summary(&self) -> PageSummary {
        PageSummary {
            page: self.search.current_page(),
            pages: self.search.total_pages(),
            page_size: self.search.page_size(),
            total: self.search.total_results(),
            favorites: self.favorites.len(),
        }
    }

    /// Title of the dog list block
    #[must_use]
    pub fn list_title(&self) -> String {
        let breed = self.search.selected_breed().unwrap_or("All breeds");
        match &self.user {
            Some(user) => format!(" {breed} · signed in as {user} "),
            None => format!(" {breed} "),
        }
    }

    /// Key hints for the current mode
    #[must_use]
    pub fn hints(&self) -> Vec<KeyHint> {
        if self.matching.is_modal_open() {
            HelpBar::match_hints()
        } else if self.mode == Mode::BreedPicker {
            HelpBar::picker_hints()
        } else {
            HelpBar::browse_hints()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeApi, dogs};

    async fn loaded(count: usize, page_size: usize) -> DashboardState {
        let api = FakeApi::new()
            .with_results(dogs(count))
            .with_breeds(&["Akita", "Beagle"]);
        let mut search = SearchController::new(page_size, None);
        search.load_breeds(&api).await;
        search.run_search(&api).await;
        DashboardState::new(search, Some("Ada".into()))
    }

    #[tokio::test]
    async fn test_cursor_stays_on_page() {
        let mut state = loaded(3, 10).await;

        state.cursor_up();
        assert_eq!(state.cursor, 0);
        for _ in 0..5 {
            state.cursor_down();
        }
        assert_eq!(state.cursor, 2);
        assert_eq!(state.current_dog().unwrap().id, "d2");
    }

    #[tokio::test]
    async fn test_paging_resets_cursor() {
        let mut state = loaded(25, 10).await;
        state.cursor_down();

        state.next_page();

        assert_eq!(state.cursor, 0);
        assert_eq!(state.current_dog().unwrap().id, "d10");

        state.cycle_page_size();
        assert_eq!(state.search.page_size(), 20);
        assert_eq!(state.search.current_page(), 1);
    }

    #[tokio::test]
    async fn test_toggle_favorite_under_cursor() {
        let mut state = loaded(3, 10).await;
        state.cursor_down();

        assert_eq!(state.toggle_favorite(), Some(("Dog d1".into(), true)));
        assert!(state.favorites.contains("d1"));
        assert_eq!(state.toggle_favorite(), Some(("Dog d1".into(), false)));
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn test_toggle_on_empty_page() {
        let mut state = DashboardState::new(SearchController::default(), None);
        assert!(state.toggle_favorite().is_none());
    }

    #[tokio::test]
    async fn test_breed_choice_applies_filter() {
        let mut state = loaded(25, 10).await;
        state.next_page();

        state.open_breed_picker();
        assert_eq!(state.mode, Mode::BreedPicker);
        state.picker.down(state.search.breeds());
        state.picker.down(state.search.breeds());
        state.apply_breed_choice();

        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.search.selected_breed(), Some("Beagle"));
        assert_eq!(state.search.current_page(), 1);
        assert!(state.list_title().contains("Beagle"));
    }

    #[tokio::test]
    async fn test_summary_and_hints() {
        let state = loaded(25, 10).await;

        let summary = state.page_summary();
        assert_eq!(summary.pages, 3);
        assert_eq!(summary.total, 25);
        assert!(state.busy_label().is_none());
        assert_eq!(state.hints(), HelpBar::browse_hints());
    }
}
