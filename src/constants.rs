//! Application-wide constants and configuration values
//!
//! This module centralizes the defaults and markup markers the scraper relies on.

/// Default address prefix of the daily scores pages
pub const DEFAULT_BASE_URL: &str = "https://footballdatabase.com/scores";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// User agent sent with every page request
pub const USER_AGENT: &str = concat!("footy_results/", env!("CARGO_PKG_VERSION"));

/// Date format used for page addresses and command line input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "footy_results.log";

/// Markup markers of the daily scores page
pub mod markup {
    /// Container whose immediate children hold competitions and match rows
    pub const CONTAINER_SELECTOR: &str = ".col-md-9";

    /// Tag of the competition anchor node
    pub const COMPETITION_ANCHOR_TAG: &str = "a";

    /// Attribute carrying the competition identifier on the anchor node
    pub const COMPETITION_ANCHOR_ATTR: &str = "name";

    /// Tag of the competition heading node
    pub const COMPETITION_HEADING_TAG: &str = "h4";

    /// Tag of generic blocks, some of which are match rows
    pub const BLOCK_TAG: &str = "div";

    /// Class token marking a block as a match row
    pub const MATCH_ROW_CLASS: &str = "club-gamelist-match";

    /// Score element inside a match row
    pub const SCORE_SELECTOR: &str = ".club-gamelist-match-score";

    /// Club elements inside a match row, home team first
    pub const CLUB_SELECTOR: &str = ".club-gamelist-match-clubs";

    /// Link inside a club element whose target encodes the team id
    pub const CLUB_LINK_SELECTOR: &str = "a[href]";

    /// Zero-based `/` segment of the club link holding the team id
    pub const TEAM_ID_SEGMENT: usize = 2;

    /// Separator between the two halves of the score text
    pub const SCORE_SEPARATOR: char = '-';
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for base URL override
    pub const BASE_URL: &str = "FOOTY_BASE_URL";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "FOOTY_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "FOOTY_HTTP_TIMEOUT";
}
