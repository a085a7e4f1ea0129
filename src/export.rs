//! CSV export of scraped matches
//!
//! Each match becomes one line of eleven double-quoted fields:
//! date, competition id, competition name, team1 name, team2 name, team1 id,
//! team2 id, team1 score, team2 score, winner id, is_draw.
//!
//! Field values are written verbatim. A value containing `"` produces a
//! malformed line; existing consumers of this format expect no escaping.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{info, instrument};

use crate::data_fetcher::models::{Match, ResultSet};
use crate::error::AppError;

/// Full textual date form written in the first column, e.g. `2021-01-01 00:00:00 +0000 UTC`.
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d 00:00:00 +0000 UTC";

/// Formats one match as a newline-terminated CSV line.
pub fn format_match_line(m: &Match) -> String {
    format!(
        "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\"\n",
        m.date().format(EXPORT_DATE_FORMAT),
        m.competition_id(),
        m.competition_name(),
        m.team1_name(),
        m.team2_name(),
        m.team1_id(),
        m.team2_id(),
        m.team1_score(),
        m.team2_score(),
        m.winner_id().unwrap_or_default(),
        m.is_draw(),
    )
}

/// Writes every match to `writer` in result order and returns the line count.
pub fn write_matches<W: Write>(mut writer: W, results: &ResultSet) -> Result<usize, AppError> {
    for m in results {
        writer.write_all(format_match_line(m).as_bytes())?;
    }
    writer.flush()?;
    Ok(results.len())
}

/// Writes the result set to a new file at `path`, replacing any existing file.
///
/// Lines already flushed stay on disk if a later write fails.
#[instrument(skip(path, results), fields(path = %path.as_ref().display()))]
pub async fn export_csv(path: impl AsRef<Path>, results: &ResultSet) -> Result<usize, AppError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path).await?);
    for m in results {
        writer.write_all(format_match_line(m).as_bytes()).await?;
    }
    writer.flush().await?;

    info!("Exported {} matches to {}", results.len(), path.display());
    Ok(results.len())
}

/// Default export file name, derived from the current Unix time in seconds.
pub fn default_output_file_name(now: DateTime<Utc>) -> String {
    format!("matches-{}.csv", now.timestamp())
}

/// Picks the export destination: an explicit path wins, otherwise the default
/// file name inside `output_dir` (or the working directory).
pub fn resolve_output_path(
    explicit: Option<&str>,
    output_dir: Option<&str>,
    now: DateTime<Utc>,
) -> PathBuf {
    match explicit {
        Some(path) => PathBuf::from(path),
        None => Path::new(output_dir.unwrap_or(".")).join(default_output_file_name(now)),
    }
}
