//! Football match results scraper library
//!
//! Fetches the daily scores pages of a football results site, reconstructs
//! which competition each listed match belongs to, and exports the matches as
//! flat CSV records.
//!
//! # Examples
//!
//! ```rust,no_run
//! use footy_results::data_fetcher::{DateRange, ResultSet, ScoresClient};
//! use footy_results::export::export_csv;
//! use footy_results::{AppError, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let scores = ScoresClient::from_config(&config)?;
//!
//!     let range = DateRange::parse("2021-01-01", "2021-01-03")?;
//!     let mut results = ResultSet::new();
//!     scores.scrape_range(&range, &mut results).await?;
//!
//!     export_csv("matches.csv", &results).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod export;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::fetch_match_results;
pub use data_fetcher::models::{Match, ResultSet};
pub use data_fetcher::processors::extract_matches;
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
