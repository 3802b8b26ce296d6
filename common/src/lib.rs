//! Series Catalog Common Library
//!
//! CLIとWeb(WASM)で共有される型とビューロジック

pub mod types;
pub mod page;
pub mod sort;
pub mod query;
pub mod images;
pub mod filter;
pub mod tile;
pub mod state;
pub mod config;
pub mod error;

pub use types::{Show, FetchRequest};
pub use page::PageCursor;
pub use sort::{SortOption, default_sort_options, find_sort};
pub use query::{search_term, search_query, shows_url};
pub use images::{secure_image_url, rewrite_images};
pub use filter::{matches_search, filter_shows};
pub use tile::{ShowTile, count_label};
pub use state::{ViewState, ApplyOutcome};
pub use config::{CatalogConfig, DEFAULT_CATALOG_API, PER_PAGE};
pub use error::{Error, Result};
