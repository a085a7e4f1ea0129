use chrono::NaiveDate;

/// Competition context carried across sibling nodes while a page is scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Competition {
    pub id: String,
    pub name: String,
}

/// One side of a match as listed in a match row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Team {
    pub id: String,
    pub name: String,
}

/// Final score of a match, first team first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub team1: u32,
    pub team2: u32,
}

impl Score {
    pub fn new(team1: u32, team2: u32) -> Self {
        Self { team1, team2 }
    }
}

/// Returns true when both teams scored the same number of goals.
pub fn compute_draw(score: Score) -> bool {
    score.team1 == score.team2
}

/// Returns the id of the higher-scoring team, or `None` for a draw.
///
/// `is_draw` must come from [`compute_draw`] on the same score.
pub fn compute_winner<'a>(
    score: Score,
    is_draw: bool,
    team1: &'a Team,
    team2: &'a Team,
) -> Option<&'a str> {
    if is_draw {
        return None;
    }
    if score.team1 > score.team2 {
        Some(team1.id.as_str())
    } else {
        Some(team2.id.as_str())
    }
}

/// A decided or drawn game result.
///
/// Fields are private so a match cannot be changed once built; the draw flag and
/// winner are always derived from the score inside [`Match::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    date: NaiveDate,
    competition: Competition,
    team1: Team,
    team2: Team,
    score: Score,
    is_draw: bool,
    winner_id: Option<String>,
}

impl Match {
    pub fn new(
        date: NaiveDate,
        competition: Competition,
        team1: Team,
        team2: Team,
        score: Score,
    ) -> Self {
        let is_draw = compute_draw(score);
        let winner_id = compute_winner(score, is_draw, &team1, &team2).map(str::to_string);
        Self {
            date,
            competition,
            team1,
            team2,
            score,
            is_draw,
            winner_id,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn competition_id(&self) -> &str {
        &self.competition.id
    }

    pub fn competition_name(&self) -> &str {
        &self.competition.name
    }

    pub fn team1_id(&self) -> &str {
        &self.team1.id
    }

    pub fn team1_name(&self) -> &str {
        &self.team1.name
    }

    pub fn team2_id(&self) -> &str {
        &self.team2.id
    }

    pub fn team2_name(&self) -> &str {
        &self.team2.name
    }

    pub fn team1_score(&self) -> u32 {
        self.score.team1
    }

    pub fn team2_score(&self) -> u32 {
        self.score.team2
    }

    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// Winner id, `None` when the match is a draw.
    pub fn winner_id(&self) -> Option<&str> {
        self.winner_id.as_deref()
    }
}
