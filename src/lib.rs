//! Win/loss/draw and goal statistics for two teams of a season, plus a
//! sentence-by-sentence comparison between them.

mod common;
mod match_store;
mod season;
mod team_analysis;

pub use crate::common::Error;
pub use crate::common::Language;
pub use crate::common::MatchRecord;
pub use crate::common::Outcome;
pub use crate::common::Result;
pub use crate::common::Score;
pub use crate::common::TeamId;
pub use crate::match_store::MatchStore;
pub use crate::season::fetch_season;
pub use crate::season::load_season;
pub use crate::season::parse_season;
pub use crate::season::Season;
pub use crate::season::DEFAULT_SEASON_URL;
pub use crate::team_analysis::TeamAnalyzer;

/// Runs every module's checks. Reads fixtures from `data/`, so it must run
/// from the crate root.
pub fn test() {
  common::test();
  match_store::test();
  team_analysis::test();
  season::test();
}
