//! Left-to-right scan of a scores page.
//!
//! The page lists competitions and their matches as flat siblings: an anchor
//! carries the competition id, a heading carries its name, and every following
//! match row belongs to the nearest preceding competition. The scan is a fold
//! over the container's child elements carrying the running [`Competition`].

use std::sync::LazyLock;

use chrono::NaiveDate;
use scraper::{CaseSensitivity, ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::match_row::{element_text, parse_match_row, parse_selector};
use crate::constants::markup::{
    BLOCK_TAG, COMPETITION_ANCHOR_ATTR, COMPETITION_ANCHOR_TAG, COMPETITION_HEADING_TAG,
    CONTAINER_SELECTOR, MATCH_ROW_CLASS,
};
use crate::data_fetcher::models::{Competition, Match};

static CONTAINER: LazyLock<Selector> = LazyLock::new(|| parse_selector(CONTAINER_SELECTOR));

/// Kind of a container child, decided by its tag and attributes.
#[derive(Debug, Clone)]
pub enum PageNode<'a> {
    /// Competition anchor; `None` when the anchor has no `name` attribute.
    CompetitionAnchor(Option<&'a str>),
    /// Competition heading with its trimmed text.
    CompetitionHeading(String),
    /// Block carrying the match row class.
    MatchRow(ElementRef<'a>),
    /// Block without the match row class (spacers, ads).
    Block,
    Other,
}

pub fn classify_node(element: ElementRef<'_>) -> PageNode<'_> {
    let value = element.value();
    match value.name() {
        COMPETITION_ANCHOR_TAG => PageNode::CompetitionAnchor(value.attr(COMPETITION_ANCHOR_ATTR)),
        COMPETITION_HEADING_TAG => PageNode::CompetitionHeading(element_text(element)),
        BLOCK_TAG if value.has_class(MATCH_ROW_CLASS, CaseSensitivity::CaseSensitive) => {
            PageNode::MatchRow(element)
        }
        BLOCK_TAG => PageNode::Block,
        _ => PageNode::Other,
    }
}

/// Folds over sibling elements in document order and returns the matches found.
///
/// Anchors and headings update the running competition; every match row takes
/// a snapshot of it. A row that fails to decode is logged and skipped without
/// touching the running state.
pub fn scan_nodes<'a, I>(nodes: I, date: NaiveDate) -> Vec<Match>
where
    I: IntoIterator<Item = ElementRef<'a>>,
{
    let (_, matches) = nodes.into_iter().map(classify_node).fold(
        (Competition::default(), Vec::new()),
        |(mut competition, mut matches), node| {
            match node {
                PageNode::CompetitionAnchor(Some(id)) => {
                    debug!("Competition id: {id}");
                    competition.id = id.to_string();
                }
                PageNode::CompetitionHeading(name) => {
                    debug!("Competition name: {name}");
                    competition.name = name;
                }
                PageNode::MatchRow(row) => match parse_match_row(row, date, &competition) {
                    Ok(m) => matches.push(m),
                    Err(e) => warn!(
                        "Skipping match row in competition '{}' on {date}: {e}",
                        competition.name
                    ),
                },
                PageNode::CompetitionAnchor(None) | PageNode::Block | PageNode::Other => {}
            }
            (competition, matches)
        },
    );
    matches
}

/// Child elements of `parent`, text and comment nodes skipped.
fn child_elements<'a>(parent: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    parent.children().filter_map(ElementRef::wrap)
}

/// Extracts every match of a parsed scores page.
///
/// Children of all containers are scanned as one sequence; a page without a
/// container has no matches.
pub fn extract_matches_from_document(document: &Html, date: NaiveDate) -> Vec<Match> {
    let mut containers = document.select(&CONTAINER).peekable();
    if containers.peek().is_none() {
        debug!("No '{CONTAINER_SELECTOR}' container on page for {date}");
        return Vec::new();
    }
    scan_nodes(containers.flat_map(child_elements), date)
}

/// Parses page HTML and extracts its matches for `date`.
pub fn extract_matches(html: &str, date: NaiveDate) -> Vec<Match> {
    let document = Html::parse_document(html);
    extract_matches_from_document(&document, date)
}
