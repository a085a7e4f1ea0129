use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Base URL cannot be empty and must use http:// or https://
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty and its parent directory
///   must exist or be creatable
pub fn validate_config(
    base_url: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if base_url.is_empty() {
        return Err(AppError::config_error("Base URL cannot be empty"));
    }

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "Base URL must start with http:// or https://: '{base_url}'"
        )));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_config() {
        assert!(validate_config("https://footballdatabase.com/scores", 30, &None).is_ok());
        assert!(validate_config("http://localhost:8080", 1, &None).is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(validate_config("", 30, &None).is_err());
        assert!(validate_config("footballdatabase.com/scores", 30, &None).is_err());
        assert!(validate_config("ftp://example.com", 30, &None).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = validate_config("https://example.com", 0, &None);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_log_file_path_rules() {
        assert!(validate_config("https://example.com", 30, &Some(String::new())).is_err());

        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("scrape.log");
        let nested_str = nested.to_string_lossy().to_string();
        assert!(validate_config("https://example.com", 30, &Some(nested_str)).is_ok());
        assert!(temp_dir.path().join("a").join("b").exists());
    }
}
