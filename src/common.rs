use std::cmp::Ordering;
use std::marker::PhantomData;
use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;

pub type TeamId = Arc<String>;

/// Full-time goals as `(home, away)`.
pub type Score = (usize, usize);

#[must_use]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
  Won,
  Drawn,
  Lost,
}

#[must_use]
#[derive(Clone, Debug)]
pub struct MatchRecord {
  pub team1: TeamId,
  pub team2: TeamId,
  pub full_time: Score,

  pub date: Option<NaiveDate>,
  pub round: Option<Arc<String>>,

  constructor_guard: PhantomData<()>,
}

impl MatchRecord {
  /// # Panics
  /// When either team name is empty. Loaders must reject such records first.
  pub fn new(team1: &TeamId, team2: &TeamId, full_time: Score) -> Self {
    assert!(
      !team1.is_empty() && !team2.is_empty(),
      "Invalid team names ({:?}, {:?}).",
      team1,
      team2,
    );

    Self {
      team1: Arc::clone(team1),
      team2: Arc::clone(team2),
      full_time,
      date: None,
      round: None,
      constructor_guard: PhantomData,
    }
  }

  pub fn on(self, date: NaiveDate) -> Self {
    Self {
      date: Some(date),
      ..self
    }
  }

  pub fn in_round(self, round: &Arc<String>) -> Self {
    Self {
      round: Some(Arc::clone(round)),
      ..self
    }
  }

  #[must_use]
  pub fn involves(&self, team_name: &str) -> bool {
    self.team1.as_str() == team_name || self.team2.as_str() == team_name
  }

  #[must_use]
  pub fn home_goals(&self) -> usize {
    self.full_time.0
  }

  #[must_use]
  pub fn away_goals(&self) -> usize {
    self.full_time.1
  }

  /// Outcome seen from the home side.
  pub fn home_outcome(&self) -> Outcome {
    match self.home_goals().cmp(&self.away_goals()) {
      Ordering::Greater => Outcome::Won,
      Ordering::Equal => Outcome::Drawn,
      Ordering::Less => Outcome::Lost,
    }
  }

  /// Outcome seen from the away side.
  pub fn away_outcome(&self) -> Outcome {
    match self.home_outcome() {
      Outcome::Won => Outcome::Lost,
      Outcome::Drawn => Outcome::Drawn,
      Outcome::Lost => Outcome::Won,
    }
  }
}

impl PartialEq for MatchRecord {
  #[must_use]
  // NOTE(MUST-CHANGE-WHENEVER-STRUCT-FIELDS-CHANGE)
  fn eq(&self, other: &Self) -> bool {
    self.team1 == other.team1
      && self.team2 == other.team2
      && self.full_time == other.full_time
      && self.date == other.date
      && self.round == other.round
  }
}
impl Eq for MatchRecord {}

#[must_use]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum Language {
  #[default]
  English,
  Italian,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("reading season data failed: {0}")]
  Io(#[from] std::io::Error),

  #[error("downloading season data failed: {0}")]
  Http(#[from] reqwest::Error),

  #[error("malformed season document: {0}")]
  Json(#[from] serde_json::Error),

  #[error("match #{index} has an invalid full-time score ({score:?})")]
  InvalidScore {
    index: usize,
    score: Vec<serde_json::Value>,
  },

  #[error("match #{index} has an empty team name")]
  EmptyTeamName { index: usize },

  #[error("match #{index} has an invalid date ({date:?})")]
  InvalidDate {
    index: usize,
    date: String,
    #[source]
    source: chrono::ParseError,
  },
}

pub type Result<T> = std::result::Result<T, Error>;

pub(super) fn test() {
  #[cfg(test)]
  use pretty_assertions::assert_eq;

  let lazio = Arc::new(String::from("SS Lazio"));
  let roma = Arc::new(String::from("AS Roma"));

  let derby = MatchRecord::new(&lazio, &roma, (1, 0));
  assert!(derby.involves("SS Lazio"));
  assert!(derby.involves("AS Roma"));
  assert!(!derby.involves("ss lazio"));
  assert!(!derby.involves(" AS Roma"));
  assert_eq!(derby.home_outcome(), Outcome::Won);
  assert_eq!(derby.away_outcome(), Outcome::Lost);

  let draw = MatchRecord::new(&roma, &lazio, (0, 0));
  assert_eq!(draw.home_outcome(), Outcome::Drawn);
  assert_eq!(draw.away_outcome(), Outcome::Drawn);

  let dated = MatchRecord::new(&roma, &lazio, (0, 0))
    .on(NaiveDate::from_ymd_opt(2024, 4, 6).unwrap())
    .in_round(&Arc::new(String::from("Matchday 31")));
  assert!(dated != draw);
  assert_eq!(dated.round.as_deref().map(String::as_str), Some("Matchday 31"));
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::test;
  use super::MatchRecord;

  #[test]
  fn test_common() {
    test()
  }

  #[test]
  #[should_panic(expected = "Invalid team names")]
  fn test_empty_team_name_rejected() {
    let _ = MatchRecord::new(
      &Arc::new(String::new()),
      &Arc::new(String::from("AS Roma")),
      (0, 0),
    );
  }
}
