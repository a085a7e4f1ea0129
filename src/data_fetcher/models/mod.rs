pub mod match_record;
pub mod result_set;

pub use match_record::{Competition, Match, Score, Team, compute_draw, compute_winner};
pub use result_set::ResultSet;
