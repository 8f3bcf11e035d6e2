//! Interactive dashboard built on ratatui
//!
//! The dashboard owns the terminal and runs a synchronous draw/poll loop.
//! Remote calls run on the tokio runtime as [`PendingTask`]s and report back
//! over a channel, so the loop never blocks on the network. Replacing a task
//! (a new search while one is running) or leaving the dashboard aborts
//! whatever is still in flight.

mod events;
mod state;
mod theme;
mod widgets;

pub use state::{DashboardState, Mode};
pub use theme::Theme;

use self::events::{EventResult, poll_and_handle};
use self::widgets::{BreedPicker, DogList, HelpBar, MatchModal, StatusBar};
use crate::api::{ApiError, DogApi};
use crate::auth::{self, RouteDecision};
use crate::favorites::{MatchOutcome, find_match_with};
use crate::models::Dog;
use crate::search::{SearchController, SearchPhase, fetch_filtered_dogs};
use crate::session::SessionStore;
use crate::task::PendingTask;
use crate::ui::error::Result;
use crate::ui::output::Notifier;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

/// Why the dashboard closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardExit {
    /// The user quit
    Quit,
    /// The user logged out
    LoggedOut,
    /// The session was lost (for example a 401); the caller should log in again
    SessionEnded,
}

/// Results sent back by background tasks
enum TaskResult {
    Breeds(std::result::Result<Vec<String>, ApiError>),
    Search(u64, std::result::Result<Vec<Dog>, ApiError>),
    MatchFound(String),
    Match(MatchOutcome),
    LoggedOut,
}

/// In-flight background work; dropping a slot aborts its task
#[derive(Default)]
struct Tasks {
    breeds: Option<PendingTask<()>>,
    search: Option<PendingTask<()>>,
    matching: Option<PendingTask<()>>,
    logout: Option<PendingTask<()>>,
    search_generation: u64,
}

impl Tasks {
    /// Tasks still running; they are aborted when `self` drops
    fn pending(&self) -> usize {
        [&self.breeds, &self.search, &self.matching, &self.logout]
            .into_iter()
            .flatten()
            .filter(|task| !task.is_finished())
            .count()
    }
}

/// Ratatui dashboard over a [`DogApi`]
pub struct Dashboard {
    api: Arc<dyn DogApi>,
    session: Arc<SessionStore>,
    runtime: Handle,
    theme: Theme,
}

impl Dashboard {
    #[must_use]
    pub fn new(api: Arc<dyn DogApi>, session: Arc<SessionStore>, runtime: Handle) -> Self {
        Self {
            api,
            session,
            runtime,
            theme: Theme::default(),
        }
    }

    /// Setup terminal for the dashboard
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after the dashboard
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run the dashboard until the user leaves or the session ends
    ///
    /// # Errors
    ///
    /// Returns [`crate::ui::UiError`] if the terminal cannot be driven.
    pub fn run(&self, search: SearchController) -> Result<DashboardExit> {
        let mut terminal = Self::setup_terminal()?;

        let mut state = DashboardState::new(search, self.session.user());
        let result = self.run_loop(&mut terminal, &mut state);

        if let Err(e) = Self::cleanup_terminal() {
            warn!(error = %e, "terminal cleanup failed");
        }

        result
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut DashboardState,
    ) -> Result<DashboardExit> {
        let (tx, rx) = mpsc::channel();
        let mut tasks = Tasks::default();

        self.start_breeds(state, &tx, &mut tasks);
        self.start_search(state, &tx, &mut tasks);

        let exit = loop {
            self.session.expire_notifications();

            if let Some(exit) = self.drain_results(state, &rx, &tasks) {
                break exit;
            }

            if tasks.logout.is_none()
                && auth::guard(&self.session, state.search.breeds_loaded())
                    == RouteDecision::RedirectToEntry
            {
                info!("session ended; leaving dashboard");
                break DashboardExit::SessionEnded;
            }

            terminal.draw(|frame| self.render(frame, state))?;

            match poll_and_handle(state, Duration::from_millis(50))? {
                EventResult::Quit => break DashboardExit::Quit,
                EventResult::Search => self.start_search(state, &tx, &mut tasks),
                EventResult::FindMatch => self.start_match(state, &tx, &mut tasks),
                EventResult::Logout => self.start_logout(&tx, &mut tasks),
                EventResult::OpenImage(url) => self.open_image(&url),
                EventResult::Toggled(name, added) => {
                    if added {
                        self.session.info(&format!("Added {name} to favorites"));
                    } else {
                        self.session.info(&format!("Removed {name} from favorites"));
                    }
                }
                EventResult::Continue | EventResult::Ignored => {}
            }
        };

        debug!(?exit, pending = tasks.pending(), "leaving dashboard");
        Ok(exit)
    }

    /// Apply finished task results; returns an exit when one is due
    fn drain_results(
        &self,
        state: &mut DashboardState,
        rx: &Receiver<TaskResult>,
        tasks: &Tasks,
    ) -> Option<DashboardExit> {
        while let Ok(result) = rx.try_recv() {
            match result {
                TaskResult::Breeds(outcome) => state.search.complete_breeds_load(outcome),
                TaskResult::Search(generation, outcome) => {
                    if generation == tasks.search_generation {
                        state.search.complete_search(outcome);
                        state.cursor = 0;
                    } else {
                        debug!(generation, "dropping stale search result");
                    }
                }
                TaskResult::MatchFound(id) => {
                    debug!(%id, "match picked");
                    state.matching.begin_details();
                }
                TaskResult::Match(outcome) => {
                    state.matching.complete(&outcome, self.session.as_ref());
                }
                TaskResult::LoggedOut => return Some(DashboardExit::LoggedOut),
            }
        }
        None
    }

    fn start_breeds(&self, state: &mut DashboardState, tx: &Sender<TaskResult>, tasks: &mut Tasks) {
        state.search.begin_breeds_load();
        let api = Arc::clone(&self.api);
        let tx = tx.clone();
        tasks.breeds = Some(PendingTask::spawn(&self.runtime, async move {
            let outcome = api.breeds().await;
            let _ = tx.send(TaskResult::Breeds(outcome));
        }));
    }

    fn start_search(&self, state: &mut DashboardState, tx: &Sender<TaskResult>, tasks: &mut Tasks) {
        let query = state.search.begin_search();
        state.cursor = 0;
        tasks.search_generation += 1;
        let generation = tasks.search_generation;

        let api = Arc::clone(&self.api);
        let tx = tx.clone();
        tasks.search = Some(PendingTask::spawn(&self.runtime, async move {
            let outcome = fetch_filtered_dogs(api.as_ref(), &query).await;
            let _ = tx.send(TaskResult::Search(generation, outcome));
        }));
    }

    fn start_match(&self, state: &mut DashboardState, tx: &Sender<TaskResult>, tasks: &mut Tasks) {
        if state.matching.is_busy() {
            return;
        }
        let Some(ids) = state.matching.begin(&state.favorites, self.session.as_ref()) else {
            return;
        };

        let api = Arc::clone(&self.api);
        let tx = tx.clone();
        tasks.matching = Some(PendingTask::spawn(&self.runtime, async move {
            let outcome = find_match_with(api.as_ref(), &ids, |id| {
                let _ = tx.send(TaskResult::MatchFound(id.to_string()));
            })
            .await;
            let _ = tx.send(TaskResult::Match(outcome));
        }));
    }

    fn start_logout(&self, tx: &Sender<TaskResult>, tasks: &mut Tasks) {
        if tasks.logout.is_some() {
            return;
        }
        self.session.info("Logging out...");

        let api = Arc::clone(&self.api);
        let session = Arc::clone(&self.session);
        let tx = tx.clone();
        tasks.logout = Some(PendingTask::spawn(&self.runtime, async move {
            auth::logout(api.as_ref(), &session).await;
            let _ = tx.send(TaskResult::LoggedOut);
        }));
    }

    fn open_image(&self, url: &str) {
        if let Err(e) = open::that_detached(url) {
            warn!(error = %e, url, "failed to open photo");
            self.session.error(&format!("Could not open photo: {e}"));
        }
    }

    fn render(&self, frame: &mut Frame, state: &DashboardState) {
        let area = frame.area();
        let layout = Layout::vertical([
            Constraint::Min(5),    // Dog list
            Constraint::Length(3), // Status bar
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let placeholder = match state.search.phase() {
            SearchPhase::Idle => "",
            SearchPhase::Searching => "Searching...",
            SearchPhase::Ready | SearchPhase::Empty => "No dogs found.",
        };
        let list = DogList::new(
            state.search.visible_page(),
            &state.favorites,
            state.cursor,
            &self.theme,
        )
        .title(state.list_title())
        .placeholder(placeholder);
        frame.render_widget(list, layout[0]);

        let message = self.session.notification();
        let summary = state.page_summary();
        let status = StatusBar::new(message.as_ref(), &summary, &self.theme)
            .with_busy(state.busy_label());
        frame.render_widget(status, layout[1]);

        let hints = state.hints();
        frame.render_widget(HelpBar::new(&hints, &self.theme), layout[2]);

        if state.mode == Mode::BreedPicker {
            let picker = BreedPicker::new(state.search.breeds(), &state.picker, &self.theme)
                .loading(state.search.breeds_loading());
            frame.render_widget(picker, area);
        }

        if state.matching.is_modal_open()
            && let Some(dog) = state.matching.matched()
        {
            frame.render_widget(MatchModal::new(dog, &self.theme), area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeApi, dog, dogs};

    fn dashboard() -> Dashboard {
        Dashboard::new(
            Arc::new(FakeApi::new()),
            Arc::new(SessionStore::default()),
            Handle::current(),
        )
    }

    fn state() -> DashboardState {
        DashboardState::new(SearchController::new(10, None), Some("Ada".into()))
    }

    #[tokio::test]
    async fn test_stale_search_result_is_dropped() {
        let dashboard = dashboard();
        let mut state = state();
        let (tx, rx) = mpsc::channel();
        let tasks = Tasks {
            search_generation: 2,
            ..Tasks::default()
        };
        state.search.begin_search();

        tx.send(TaskResult::Search(1, Ok(dogs(5)))).unwrap();
        assert_eq!(dashboard.drain_results(&mut state, &rx, &tasks), None);
        assert_eq!(state.search.phase(), SearchPhase::Searching);
        assert!(state.search.results().is_empty());

        tx.send(TaskResult::Search(2, Ok(dogs(3)))).unwrap();
        assert_eq!(dashboard.drain_results(&mut state, &rx, &tasks), None);
        assert_eq!(state.search.phase(), SearchPhase::Ready);
        assert_eq!(state.search.results().len(), 3);
    }

    #[tokio::test]
    async fn test_match_reports_details_phase() {
        let dashboard = dashboard();
        let mut state = state();
        let (tx, rx) = mpsc::channel();
        let tasks = Tasks::default();
        state.favorites.toggle("a");
        state.matching.begin(&state.favorites, dashboard.session.as_ref());

        tx.send(TaskResult::MatchFound("a".into())).unwrap();
        dashboard.drain_results(&mut state, &rx, &tasks);
        assert!(!state.matching.is_matching());
        assert!(state.matching.is_loading_details());

        tx.send(TaskResult::Match(MatchOutcome::Revealed(dog("a", "Pug")))).unwrap();
        dashboard.drain_results(&mut state, &rx, &tasks);
        assert!(!state.matching.is_busy());
        assert!(state.matching.is_modal_open());
    }

    #[tokio::test]
    async fn test_logout_result_closes_dashboard() {
        let dashboard = dashboard();
        let mut state = state();
        let (tx, rx) = mpsc::channel();
        let tasks = Tasks::default();

        tx.send(TaskResult::Breeds(Ok(vec!["Pug".into()]))).unwrap();
        tx.send(TaskResult::LoggedOut).unwrap();

        assert_eq!(
            dashboard.drain_results(&mut state, &rx, &tasks),
            Some(DashboardExit::LoggedOut)
        );
        assert_eq!(state.search.breeds(), ["Pug"]);
    }
}
