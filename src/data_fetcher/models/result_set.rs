use super::match_record::Match;

/// Ordered collection of matches across a scraped date range.
///
/// Grows one page at a time in date order and is never reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    matches: Vec<Match>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one page's matches, keeping their document order.
    pub fn append_page(&mut self, page: Vec<Match>) {
        self.matches.extend(page);
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }

    pub fn into_matches(self) -> Vec<Match> {
        self.matches
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}
