//! Breeds command - list every breed the service knows

use crate::{DogfinderError, api::DogApi, ui::Notifier};

type Result<T> = std::result::Result<T, DogfinderError>;

/// Execute the breeds command
///
/// # Errors
/// Returns an error if the breed list cannot be fetched
pub async fn execute(api: &dyn DogApi, out: &dyn Notifier, quiet: bool) -> Result<()> {
    let breeds = api.breeds().await?;

    if breeds.is_empty() {
        out.info("No breeds found.");
        return Ok(());
    }

    out.info(&format!("{} breeds:", breeds.len()));
    for breed in &breeds {
        if quiet {
            out.write(breed);
        } else {
            out.write(&format!("  {breed}"));
        }
    }
    Ok(())
}
