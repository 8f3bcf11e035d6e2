//! Search and pagination over the dog catalogue
//!
//! A search fetches every matching identifier the service returns for the
//! filter, then the full records for them. Paging happens locally by slicing
//! that held result set, so moving between pages never touches the network.

mod controller;
pub mod pagination;

pub use controller::{
    DEFAULT_SORT, SearchController, SearchPage, SearchPhase, fetch_filtered_dogs, fetch_search_page,
};
pub use pagination::{PAGE_SIZES, Pager};
