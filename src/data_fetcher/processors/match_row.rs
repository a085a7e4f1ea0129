//! Decoding of a single match row block into a [`Match`].

use std::sync::LazyLock;

use chrono::NaiveDate;
use scraper::{ElementRef, Selector};

use crate::constants::markup::{
    CLUB_LINK_SELECTOR, CLUB_SELECTOR, SCORE_SELECTOR, SCORE_SEPARATOR, TEAM_ID_SEGMENT,
};
use crate::data_fetcher::models::{Competition, Match, Score, Team};
use crate::error::AppError;

pub(crate) fn parse_selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| unreachable!("invalid built-in selector {css}: {e}"))
}

static SCORE: LazyLock<Selector> = LazyLock::new(|| parse_selector(SCORE_SELECTOR));
static CLUBS: LazyLock<Selector> = LazyLock::new(|| parse_selector(CLUB_SELECTOR));
static CLUB_LINK: LazyLock<Selector> = LazyLock::new(|| parse_selector(CLUB_LINK_SELECTOR));

/// Builds a match from a row block.
///
/// `competition` is a snapshot of the running state at the row's position; the
/// returned match owns its own copy.
///
/// # Errors
/// `AppError::MatchExtraction` when the score is missing or malformed, or when
/// fewer than two clubs (or a club without a usable link) are present.
pub fn parse_match_row(
    row: ElementRef<'_>,
    date: NaiveDate,
    competition: &Competition,
) -> Result<Match, AppError> {
    let score_text = row
        .select(&SCORE)
        .next()
        .map(element_text)
        .ok_or_else(|| AppError::match_extraction("match row has no score element"))?;
    let score = parse_score(&score_text)?;

    let mut clubs = row.select(&CLUBS);
    let (Some(first), Some(second)) = (clubs.next(), clubs.next()) else {
        return Err(AppError::match_extraction(
            "match row has fewer than two clubs",
        ));
    };
    let team1 = parse_club(first)?;
    let team2 = parse_club(second)?;

    Ok(Match::new(date, competition.clone(), team1, team2, score))
}

/// Parses score text such as `" 2 - 1 "` into a [`Score`].
pub fn parse_score(text: &str) -> Result<Score, AppError> {
    let trimmed = text.trim();
    let mut parts = trimmed.split(SCORE_SEPARATOR);
    let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(AppError::match_extraction(format!(
            "score '{trimmed}' is not two values separated by '{SCORE_SEPARATOR}'"
        )));
    };

    let parse_half = |half: &str| {
        half.trim().parse::<u32>().map_err(|e| {
            AppError::match_extraction(format!("invalid score value '{}' in '{trimmed}': {e}", half.trim()))
        })
    };

    Ok(Score::new(parse_half(first)?, parse_half(second)?))
}

/// Reads the team id from the club's link and the team name from its text.
pub fn parse_club(club: ElementRef<'_>) -> Result<Team, AppError> {
    let href = club
        .select(&CLUB_LINK)
        .next()
        .and_then(|link| link.value().attr("href"))
        .ok_or_else(|| AppError::match_extraction("club has no link"))?;

    let id = team_id_from_href(href).ok_or_else(|| {
        AppError::match_extraction(format!("club link '{href}' has no team id segment"))
    })?;

    Ok(Team {
        id: id.to_string(),
        name: element_text(club),
    })
}

/// Returns the `/`-separated segment holding the team id, e.g. `"12"` for
/// `/clubs/12/arsenal`.
pub fn team_id_from_href(href: &str) -> Option<&str> {
    href.split('/')
        .nth(TEAM_ID_SEGMENT)
        .filter(|segment| !segment.is_empty())
}

/// Text content with surrounding whitespace trimmed and inner runs collapsed.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, 2).unwrap()
    }

    fn competition() -> Competition {
        Competition {
            id: "england-premier-league".to_string(),
            name: "Premier League".to_string(),
        }
    }

    fn with_row<T>(html: &str, f: impl FnOnce(ElementRef<'_>) -> T) -> T {
        let fragment = Html::parse_fragment(html);
        let selector = parse_selector("div.club-gamelist-match");
        let row = fragment.select(&selector).next().unwrap();
        f(row)
    }

    const ROW: &str = r#"
        <div class="club-gamelist-match">
          <div class="club-gamelist-match-clubs"><a href="/clubs/arsenal/arsenal-fc">Arsenal</a></div>
          <div class="club-gamelist-match-score"> 3 - 1 </div>
          <div class="club-gamelist-match-clubs"><a href="/clubs/chelsea/chelsea-fc">
            Chelsea
          </a></div>
        </div>"#;

    #[test]
    fn test_parse_match_row() {
        let m = with_row(ROW, |row| parse_match_row(row, date(), &competition())).unwrap();

        assert_eq!(m.date(), date());
        assert_eq!(m.competition_id(), "england-premier-league");
        assert_eq!(m.competition_name(), "Premier League");
        assert_eq!(m.team1_id(), "arsenal");
        assert_eq!(m.team1_name(), "Arsenal");
        assert_eq!(m.team2_id(), "chelsea");
        assert_eq!(m.team2_name(), "Chelsea");
        assert_eq!((m.team1_score(), m.team2_score()), (3, 1));
        assert!(!m.is_draw());
        assert_eq!(m.winner_id(), Some("arsenal"));
    }

    #[test]
    fn test_parse_match_row_draw() {
        let html = ROW.replace(" 3 - 1 ", "0-0");
        let m = with_row(&html, |row| parse_match_row(row, date(), &competition())).unwrap();
        assert!(m.is_draw());
        assert_eq!(m.winner_id(), None);
    }

    #[test]
    fn test_parse_match_row_missing_score() {
        let html = r#"<div class="club-gamelist-match">
            <div class="club-gamelist-match-clubs"><a href="/clubs/a/a">A</a></div>
            <div class="club-gamelist-match-clubs"><a href="/clubs/b/b">B</a></div>
        </div>"#;
        let result = with_row(html, |row| parse_match_row(row, date(), &competition()));
        assert!(matches!(result, Err(AppError::MatchExtraction(_))));
    }

    #[test]
    fn test_parse_match_row_single_club() {
        let html = r#"<div class="club-gamelist-match">
            <div class="club-gamelist-match-clubs"><a href="/clubs/a/a">A</a></div>
            <div class="club-gamelist-match-score">1 - 0</div>
        </div>"#;
        let result = with_row(html, |row| parse_match_row(row, date(), &competition()));
        assert!(matches!(result, Err(AppError::MatchExtraction(_))));
    }

    #[test]
    fn test_parse_match_row_club_without_link() {
        let html = r#"<div class="club-gamelist-match">
            <div class="club-gamelist-match-clubs">A</div>
            <div class="club-gamelist-match-score">1 - 0</div>
            <div class="club-gamelist-match-clubs"><a href="/clubs/b/b">B</a></div>
        </div>"#;
        let result = with_row(html, |row| parse_match_row(row, date(), &competition()));
        assert!(matches!(result, Err(AppError::MatchExtraction(_))));
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("2-1").unwrap(), Score::new(2, 1));
        assert_eq!(parse_score("  0 - 0\n").unwrap(), Score::new(0, 0));
        assert_eq!(parse_score("10 - 3").unwrap(), Score::new(10, 3));
    }

    #[test]
    fn test_parse_score_rejects_malformed_text() {
        for text in ["", "2", "2:1", "2-1-0", "a - 1", "1 - ", "-1 - 2", "1 - -2"] {
            assert!(
                matches!(parse_score(text), Err(AppError::MatchExtraction(_))),
                "score text {text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_team_id_from_href() {
        assert_eq!(team_id_from_href("/clubs/arsenal/arsenal-fc"), Some("arsenal"));
        assert_eq!(team_id_from_href("/clubs/1234"), Some("1234"));
        assert_eq!(team_id_from_href("/clubs"), None);
        assert_eq!(team_id_from_href("/clubs//x"), None);
        assert_eq!(team_id_from_href(""), None);
    }
}
