// src/data_fetcher/api/orchestrator.rs - Date range orchestration over the daily scores pages

use chrono::NaiveDate;
use reqwest::Client;
use tracing::{info, instrument};

use super::date_logic::DateRange;
use super::fetch_utils::fetch_page;
use super::http_client::create_http_client_with_timeout;
use super::urls::build_scores_url;
use crate::config::Config;
use crate::data_fetcher::models::{Match, ResultSet};
use crate::data_fetcher::processors::extract_matches;
use crate::error::AppError;

/// Fetches scores pages and extracts their matches, one day at a time.
#[derive(Debug, Clone)]
pub struct ScoresClient {
    client: Client,
    base_url: String,
}

impl ScoresClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Builds a client using the configured base URL and HTTP timeout.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::new(client, config.base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the page for `date` and returns its matches in document order.
    pub async fn fetch_matches_for_date(&self, date: NaiveDate) -> Result<Vec<Match>, AppError> {
        let url = build_scores_url(&self.base_url, date);
        info!("{url} : Parsing...");
        let html = fetch_page(&self.client, &url).await?;
        let matches = extract_matches(&html, date);
        info!("{url} : Parsing done, {} matches", matches.len());
        Ok(matches)
    }

    /// Scrapes every day of `range` in ascending order, appending to `results`.
    ///
    /// Days are fetched strictly one after another. The first retrieval failure
    /// aborts the remaining days and is returned; matches of the days completed
    /// before it stay in `results`.
    #[instrument(skip(self, results), fields(start = %range.start(), end = %range.end()))]
    pub async fn scrape_range(
        &self,
        range: &DateRange,
        results: &mut ResultSet,
    ) -> Result<(), AppError> {
        info!("Scraping {} days", range.num_days());
        for date in range.days() {
            let page = self.fetch_matches_for_date(date).await?;
            results.append_page(page);
        }
        info!("Scraped {} matches in total", results.len());
        Ok(())
    }

    /// Parses `YYYY-MM-DD` bounds and scrapes the range.
    ///
    /// Malformed dates and `start > end` are rejected before any request is made.
    pub async fn scrape_date_strings(
        &self,
        start: &str,
        end: &str,
        results: &mut ResultSet,
    ) -> Result<(), AppError> {
        let range = DateRange::parse(start, end)?;
        self.scrape_range(&range, results).await
    }
}

/// Loads the configuration and scrapes `start..=end` into a new result set.
///
/// # Example
/// ```rust,no_run
/// use footy_results::fetch_match_results;
///
/// #[tokio::main]
/// async fn main() -> Result<(), footy_results::AppError> {
///     let results = fetch_match_results("2021-01-01", "2021-01-03").await?;
///     println!("{} matches", results.len());
///     Ok(())
/// }
/// ```
pub async fn fetch_match_results(start: &str, end: &str) -> Result<ResultSet, AppError> {
    let range = DateRange::parse(start, end)?;
    let config = Config::load().await?;
    info!("Config loaded successfully");
    let scores = ScoresClient::from_config(&config)?;

    let mut results = ResultSet::new();
    scores.scrape_range(&range, &mut results).await?;
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    fn scores_page(home: &str, away: &str, score: &str) -> String {
        format!(
            r#"<html><body><div class="col-md-9">
                 <a name="league"></a><h4>League</h4>
                 <div class="club-gamelist-match">
                   <div class="club-gamelist-match-clubs"><a href="/clubs/{h}/x">{home}</a></div>
                   <div class="club-gamelist-match-score">{score}</div>
                   <div class="club-gamelist-match-clubs"><a href="/clubs/{a}/x">{away}</a></div>
                 </div>
               </div></body></html>"#,
            h = home.to_lowercase(),
            a = away.to_lowercase(),
        )
    }

    async fn mount_page(server: &MockServer, date: &str, body: String, calls: u64) {
        Mock::given(method("GET"))
            .and(path(format!("/scores/{date}")))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(calls)
            .mount(server)
            .await;
    }

    fn scores_client(server: &MockServer) -> ScoresClient {
        ScoresClient::new(
            create_test_http_client(),
            format!("{}/scores", server.uri()),
        )
    }

    #[tokio::test]
    async fn test_scrape_range_visits_each_day_in_order() {
        let server = MockServer::start().await;
        mount_page(&server, "2021-01-01", scores_page("One", "X", "1 - 0"), 1).await;
        mount_page(&server, "2021-01-02", scores_page("Two", "Y", "2 - 2"), 1).await;
        mount_page(&server, "2021-01-03", scores_page("Three", "Z", "0 - 3"), 1).await;

        let mut results = ResultSet::new();
        scores_client(&server)
            .scrape_date_strings("2021-01-01", "2021-01-03", &mut results)
            .await
            .unwrap();

        let order: Vec<(String, &str)> = results
            .iter()
            .map(|m| (m.date().to_string(), m.team1_name()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("2021-01-01".to_string(), "One"),
                ("2021-01-02".to_string(), "Two"),
                ("2021-01-03".to_string(), "Three"),
            ]
        );

        let requested: Vec<String> = server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|r| r.url.path().to_string())
            .collect();
        assert_eq!(
            requested,
            vec!["/scores/2021-01-01", "/scores/2021-01-02", "/scores/2021-01-03"]
        );
    }

    #[tokio::test]
    async fn test_start_after_end_makes_no_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .expect(0)
            .mount(&server)
            .await;

        let mut results = ResultSet::new();
        let result = scores_client(&server)
            .scrape_date_strings("2021-01-03", "2021-01-01", &mut results)
            .await;

        assert!(matches!(result, Err(AppError::InvalidDateRange { .. })));
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_date_makes_no_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .expect(0)
            .mount(&server)
            .await;

        let mut results = ResultSet::new();
        let result = scores_client(&server)
            .scrape_date_strings("2021-01-01", "Jan 3rd", &mut results)
            .await;

        assert!(matches!(result, Err(AppError::DateParse(_))));
    }

    #[tokio::test]
    async fn test_retrieval_failure_aborts_remaining_days_and_keeps_earlier_results() {
        let server = MockServer::start().await;
        mount_page(&server, "2021-01-01", scores_page("Kept", "X", "1 - 0"), 1).await;
        Mock::given(method("GET"))
            .and(path("/scores/2021-01-02"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;
        mount_page(&server, "2021-01-03", scores_page("Never", "Y", "1 - 0"), 0).await;

        let mut results = ResultSet::new();
        let result = scores_client(&server)
            .scrape_date_strings("2021-01-01", "2021-01-03", &mut results)
            .await;

        let error = result.unwrap_err();
        assert!(error.is_retrieval_failure());
        assert!(matches!(error, AppError::PageServerError { status: 500, .. }));
        assert_eq!(results.len(), 1);
        assert_eq!(results.matches()[0].team1_name(), "Kept");
    }

    #[tokio::test]
    async fn test_day_without_matches_contributes_nothing() {
        let server = MockServer::start().await;
        mount_page(
            &server,
            "2021-01-01",
            r#"<html><body><div class="col-md-9"><h4>Quiet day</h4></div></body></html>"#
                .to_string(),
            1,
        )
        .await;
        mount_page(&server, "2021-01-02", scores_page("Busy", "X", "1 - 0"), 1).await;

        let mut results = ResultSet::new();
        scores_client(&server)
            .scrape_date_strings("2021-01-01", "2021-01-02", &mut results)
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results.matches()[0].team1_name(), "Busy");
    }

    #[tokio::test]
    async fn test_fetch_matches_for_date_stamps_date() {
        let server = MockServer::start().await;
        mount_page(&server, "2020-02-29", scores_page("Leap", "Day", "0 - 0"), 1).await;

        let date = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        let matches = scores_client(&server)
            .fetch_matches_for_date(date)
            .await
            .unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].date(), date);
        assert_eq!(matches[0].competition_id(), "league");
        assert!(matches[0].is_draw());
    }
}
