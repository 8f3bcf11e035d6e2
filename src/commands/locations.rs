//! Locations command - look up postal codes or search by city and state

use crate::{
    DogfinderError,
    api::DogApi,
    cli::LocationsCommands,
    format,
    ui::Notifier,
};

type Result<T> = std::result::Result<T, DogfinderError>;

/// Execute the locations command
///
/// # Errors
/// Returns an error if the lookup fails, or if neither postal codes nor a
/// search were given
pub async fn execute(
    api: &dyn DogApi,
    command: Option<&LocationsCommands>,
    zip_codes: &[String],
    out: &dyn Notifier,
    quiet: bool,
) -> Result<()> {
    let (locations, total) = match command {
        Some(search) => {
            let response = api.search_locations(&search.to_request()).await?;
            (response.results, response.total)
        }
        None if zip_codes.is_empty() => {
            return Err(DogfinderError::InvalidInput(
                "Give at least one postal code, or use `locations search`".into(),
            ));
        }
        None => {
            let locations = api.locations_by_zip(zip_codes).await?;
            let total = locations.len() as u64;
            (locations, total)
        }
    };

    if locations.is_empty() {
        out.info("No locations found.");
        return Ok(());
    }

    out.info(&format!("Showing {} of {total} locations", locations.len()));
    for location in &locations {
        out.write(&format::location_line(location, quiet));
    }
    Ok(())
}
