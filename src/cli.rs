use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the arguments only ask for configuration work,
/// in which case no pages are scraped.
pub fn is_config_command(args: &Args) -> bool {
    args.list_config
        || args.set_base_url.is_some()
        || args.set_log_file.is_some()
        || args.clear_log_file
        || args.set_output_dir.is_some()
}

/// Football results scraper
///
/// Fetches the daily scores pages for every day from --start to --end
/// (inclusive) and exports one CSV line per finished match.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// First day to scrape, in YYYY-MM-DD format.
    #[arg(short = 's', long = "start", help_heading = "Scraping")]
    pub start: Option<String>,

    /// Last day to scrape, in YYYY-MM-DD format. Defaults to --start.
    #[arg(short = 'e', long = "end", help_heading = "Scraping")]
    pub end: Option<String>,

    /// CSV file to write. Defaults to matches-<unix seconds>.csv in the configured output directory.
    #[arg(short = 'o', long = "output", help_heading = "Scraping")]
    pub output: Option<String>,

    /// Log only to the log file, not to the terminal.
    #[arg(short = 'q', long = "quiet", help_heading = "Logging")]
    pub quiet: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Logging")]
    pub log_file: Option<String>,

    /// List current configuration settings
    #[arg(short = 'l', long = "list-config", help_heading = "Configuration")]
    pub list_config: bool,

    /// Update the scores page base URL in config.
    #[arg(long = "set-base-url", value_name = "URL", help_heading = "Configuration")]
    pub set_base_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub set_log_file: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file: bool,

    /// Update the default export directory in config.
    #[arg(long = "set-output-dir", value_name = "DIR", help_heading = "Configuration")]
    pub set_output_dir: Option<String>,
}
