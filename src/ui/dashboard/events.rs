//! Event handling for the dashboard
//!
//! Keys that only change local state are applied here. Keys that need the
//! network or the terminal come back as an [`EventResult`] for the loop to
//! act on.

use super::state::{DashboardState, Mode};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Leave the dashboard
    Quit,
    /// Run the search with the current filter
    Search,
    /// Ask for a match among the favorites
    FindMatch,
    /// Open a photo URL in the browser
    OpenImage(String),
    /// A favorite was toggled: dog name and whether it was added
    Toggled(String, bool),
    /// End the session
    Logout,
    /// No action taken
    Ignored,
}

fn handle_normal_mode(state: &mut DashboardState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc | KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            EventResult::Quit
        }

        (KeyCode::Up | KeyCode::Char('k'), _) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down | KeyCode::Char('j'), _) => {
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::Right | KeyCode::PageDown | KeyCode::Char('n'), _) => {
            state.next_page();
            EventResult::Continue
        }
        (KeyCode::Left | KeyCode::PageUp | KeyCode::Char('p'), _) => {
            state.prev_page();
            EventResult::Continue
        }
        (KeyCode::Char('z'), _) => {
            state.cycle_page_size();
            EventResult::Continue
        }

        (KeyCode::Char(' ' | 'f'), _) => state
            .toggle_favorite()
            .map_or(EventResult::Ignored, |(name, added)| EventResult::Toggled(name, added)),
        (KeyCode::Char('b'), _) => {
            state.open_breed_picker();
            EventResult::Continue
        }
        (KeyCode::Char('r') | KeyCode::Enter, _) => EventResult::Search,
        (KeyCode::Char('m'), _) => EventResult::FindMatch,
        (KeyCode::Char('o'), _) => state
            .current_dog()
            .map_or(EventResult::Ignored, |dog| EventResult::OpenImage(dog.img.clone())),
        (KeyCode::Char('L'), _) => EventResult::Logout,

        _ => EventResult::Ignored,
    }
}

fn handle_picker_mode(state: &mut DashboardState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.picker.up();
            EventResult::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.picker.down(state.search.breeds());
            EventResult::Continue
        }
        KeyCode::Enter => {
            state.apply_breed_choice();
            EventResult::Search
        }
        KeyCode::Esc | KeyCode::Char('q') => {
            state.close_breed_picker();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

fn handle_match_modal(state: &mut DashboardState, key: KeyEvent) -> EventResult {
    if key.code == KeyCode::Char('o')
        && let Some(dog) = state.matching.matched()
    {
        return EventResult::OpenImage(dog.img.clone());
    }
    state.matching.close_modal();
    EventResult::Continue
}

/// Apply one key press to the dashboard state
pub fn handle_key(state: &mut DashboardState, key: KeyEvent) -> EventResult {
    if state.matching.is_modal_open() {
        return handle_match_modal(state, key);
    }
    match state.mode {
        Mode::Normal => handle_normal_mode(state, key),
        Mode::BreedPicker => handle_picker_mode(state, key),
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut DashboardState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
