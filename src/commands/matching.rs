//! Match command - let the service pick one dog out of a set of ids

use crate::{
    DogfinderError,
    api::DogApi,
    favorites::{Favorites, MatchOutcome, MatchWorkflow},
    format,
    ui::Notifier,
};

type Result<T> = std::result::Result<T, DogfinderError>;

/// Execute the match command
///
/// The ids are treated as a favorites set, so duplicates collapse. Outcomes
/// other than a reveal are reported through `out` by the workflow itself.
///
/// # Errors
/// Returns [`DogfinderError::InvalidInput`] when no dog could be matched
pub async fn execute(
    api: &dyn DogApi,
    ids: &[String],
    out: &dyn Notifier,
    quiet: bool,
) -> Result<()> {
    let favorites: Favorites = ids.iter().cloned().collect();
    let mut workflow = MatchWorkflow::new();

    match workflow.run(api, &favorites, out).await {
        MatchOutcome::Revealed(dog) => {
            out.success("It's a match!");
            if quiet {
                out.write(&format::dog_line(&dog, true));
            } else {
                out.write(&format::dog_card(&dog));
            }
            Ok(())
        }
        outcome => Err(DogfinderError::InvalidInput(
            outcome.message().unwrap_or("No match").to_string(),
        )),
    }
}
