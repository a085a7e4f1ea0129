//! URL building utilities for the scores pages

use chrono::NaiveDate;

use crate::constants::DATE_FORMAT;

/// Builds the address of the scores page for one calendar day.
///
/// # Arguments
/// * `base_url` - The scores page prefix, without trailing slash
/// * `date` - The day whose results are wanted
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use footy_results::data_fetcher::api::build_scores_url;
///
/// let date = NaiveDate::from_ymd_opt(2021, 1, 15).unwrap();
/// let url = build_scores_url("https://footballdatabase.com/scores", date);
/// assert_eq!(url, "https://footballdatabase.com/scores/2021-01-15");
/// ```
pub fn build_scores_url(base_url: &str, date: NaiveDate) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        date.format(DATE_FORMAT)
    )
}
