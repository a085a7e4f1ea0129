pub mod api;
pub mod models;
pub mod processors;

pub use api::{DateRange, ScoresClient, fetch_match_results};
pub use models::{Match, ResultSet};
