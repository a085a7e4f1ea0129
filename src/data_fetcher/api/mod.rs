pub mod date_logic;
pub mod fetch_utils;
pub mod http_client;
pub mod orchestrator;
pub mod urls;

pub use date_logic::{DateRange, parse_date};
pub use fetch_utils::fetch_page;
pub use http_client::create_http_client_with_timeout;
pub use orchestrator::{ScoresClient, fetch_match_results};
pub use urls::build_scores_url;
