pub mod match_row;
pub mod page_scan;

pub use match_row::{parse_club, parse_match_row, parse_score, team_id_from_href};
pub use page_scan::{
    PageNode, classify_node, extract_matches, extract_matches_from_document, scan_nodes,
};
