//! Browse command - interactive dashboard

use crate::{
    DogfinderError,
    api::DogApi,
    config::DogfinderConfig,
    search::SearchController,
    session::SessionStore,
    ui::{
        Notifier, UserInput,
        dashboard::{Dashboard, DashboardExit},
    },
};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::info;

type Result<T> = std::result::Result<T, DogfinderError>;

/// Execute the browse command
///
/// Runs the dashboard until the user quits or logs out. When the session is
/// lost while browsing, the user is asked to log in again and the dashboard
/// reopens with a fresh search.
///
/// # Errors
/// Returns an error if the terminal cannot be driven or a new login fails
pub fn execute(
    api: Arc<dyn DogApi>,
    session: Arc<SessionStore>,
    runtime: &Runtime,
    config: &DogfinderConfig,
    input: &dyn UserInput,
    out: &dyn Notifier,
) -> Result<()> {
    let dashboard = Dashboard::new(Arc::clone(&api), Arc::clone(&session), runtime.handle().clone());

    loop {
        let search = SearchController::new(config.page_size, config.sort_directive())
            .with_server_size(config.search_size);

        match dashboard.run(search)? {
            DashboardExit::Quit => return Ok(()),
            DashboardExit::LoggedOut => {
                out.success("Logged out");
                return Ok(());
            }
            DashboardExit::SessionEnded => {
                info!("session ended while browsing; logging in again");
                out.warning("Your session has ended. Please log in again.");
                let user = session.user().or_else(|| config.user_name.clone());
                runtime.block_on(super::login(
                    api.as_ref(),
                    &session,
                    user.as_deref(),
                    config.user_email.as_deref(),
                    input,
                    out,
                ))?;
            }
        }
    }
}
