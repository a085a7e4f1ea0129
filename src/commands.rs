use crate::cli::Args;
use chrono::Utc;
use footy_results::config::Config;
use footy_results::data_fetcher::{DateRange, ResultSet, ScoresClient};
use footy_results::error::AppError;
use footy_results::export::{export_csv, resolve_output_path};
use tracing::{error, info};

/// Validates command line argument combinations and returns the range to scrape.
///
/// Dates are parsed here so malformed input is rejected before any request.
pub fn validate_args(args: &Args) -> Result<DateRange, AppError> {
    let start = args.start.as_deref().ok_or_else(|| {
        AppError::config_error("--start is required unless a configuration option is given")
    })?;
    let end = args.end.as_deref().unwrap_or(start);
    DateRange::parse(start, end)
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-base-url, --set-log-file,
/// --clear-log-file, --set-output-dir) and saves the result.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(base_url) = &args.set_base_url {
        config.base_url = base_url.clone();
    }

    if let Some(new_log_path) = &args.set_log_file {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    if let Some(output_dir) = &args.set_output_dir {
        config.output_dir = Some(output_dir.clone());
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Scrapes the requested range and exports it as CSV.
///
/// A retrieval failure aborts the run before anything is written.
pub async fn handle_scrape_command(args: &Args, range: DateRange) -> Result<(), AppError> {
    let config = Config::load().await?;
    let scores = ScoresClient::from_config(&config)?;

    let mut results = ResultSet::new();
    if let Err(e) = scores.scrape_range(&range, &mut results).await {
        error!(
            "Scrape aborted: {e}. Discarding {} matches from earlier days",
            results.len()
        );
        return Err(e);
    }

    let path = resolve_output_path(
        args.output.as_deref(),
        config.output_dir.as_deref(),
        Utc::now(),
    );
    let written = export_csv(&path, &results).await?;
    info!(
        "Scraped {} to {}: {written} matches",
        range.start(),
        range.end()
    );
    println!("Exported {written} matches to {}", path.display());

    Ok(())
}
