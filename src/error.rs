use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch scores page: {0}")]
    PageFetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("Scores page not found (404): {url}")]
    PageNotFound { url: String },

    #[error("Scores page client error ({status}): {message} (URL: {url})")]
    PageClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Scores page server error ({status}): {message} (URL: {url})")]
    PageServerError {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching page: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("Scores page returned an empty body: {url}")]
    PageNoData { url: String },

    // Input errors
    #[error("Date parsing error: {0}")]
    DateParse(String),

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: String, end: String },

    #[error("Match extraction error: {0}")]
    MatchExtraction(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date parsing error with context
    pub fn date_parse_error(msg: impl Into<String>) -> Self {
        Self::DateParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a match extraction error for a single match row
    pub fn match_extraction(msg: impl Into<String>) -> Self {
        Self::MatchExtraction(msg.into())
    }

    /// Create an invalid date range error
    pub fn invalid_date_range(start: impl ToString, end: impl ToString) -> Self {
        Self::InvalidDateRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Create a page not found error
    pub fn page_not_found(url: impl Into<String>) -> Self {
        Self::PageNotFound { url: url.into() }
    }

    /// Create a page client error (4xx status codes except 404)
    pub fn page_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::PageClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a page server error (5xx status codes)
    pub fn page_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::PageServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an empty page error
    pub fn page_no_data(url: impl Into<String>) -> Self {
        Self::PageNoData { url: url.into() }
    }

    /// Check if error came from retrieving a page. These abort a whole date range.
    pub fn is_retrieval_failure(&self) -> bool {
        matches!(
            self,
            AppError::PageFetch(_)
                | AppError::PageNotFound { .. }
                | AppError::PageClientError { .. }
                | AppError::PageServerError { .. }
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::PageNoData { .. }
        )
    }

    /// Check if error indicates the page does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::PageNotFound { .. } | AppError::PageNoData { .. }
        )
    }
}
