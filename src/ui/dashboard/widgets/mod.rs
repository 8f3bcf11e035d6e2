//! Ratatui widgets for the dashboard

mod breed_picker;
mod dog_list;
mod help_bar;
mod match_modal;
mod status_bar;

pub use breed_picker::{BreedPicker, BreedPickerState};
pub use dog_list::DogList;
pub use help_bar::{HelpBar, KeyHint};
pub use match_modal::MatchModal;
pub use status_bar::{PageSummary, StatusBar};
