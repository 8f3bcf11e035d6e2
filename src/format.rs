//! Output formatting for CLI display
//!
//! In quiet mode every formatter reduces a record to its identifier so the
//! output can be piped into another command.

use crate::models::{Dog, Location};
use colored::Colorize;

/// Format a dog as one line
#[must_use]
pub fn dog_line(dog: &Dog, quiet: bool) -> String {
    if quiet {
        dog.id.clone()
    } else {
        format!(
            "  {} {} ({}, {} {}, {}) [{}]",
            dog.name.bold(),
            "·".dimmed(),
            dog.breed.cyan(),
            dog.age,
            if dog.age == 1 { "year" } else { "years" },
            dog.zip_code,
            dog.id.dimmed()
        )
    }
}

/// Format a dog over several lines, photo URL included
#[must_use]
pub fn dog_card(dog: &Dog) -> String {
    format!(
        "{}\n  Breed: {}\n  Age:   {}\n  Zip:   {}\n  Photo: {}\n  Id:    {}",
        dog.name.bold().green(),
        dog.breed,
        dog.age,
        dog.zip_code,
        dog.img.underline(),
        dog.id
    )
}

/// Format a location as one line
#[must_use]
pub fn location_line(location: &Location, quiet: bool) -> String {
    if quiet {
        location.zip_code.clone()
    } else {
        format!(
            "  {} {}, {} ({} County) [{:.4}, {:.4}]",
            location.zip_code.bold(),
            location.city,
            location.state,
            location.county,
            location.latitude,
            location.longitude
        )
    }
}

/// Format a search page summary
#[must_use]
pub fn page_summary(page: usize, pages: usize, shown: usize, total: u64) -> String {
    format!("Page {page}/{} · showing {shown} of {total} dogs", pages.max(1))
}
