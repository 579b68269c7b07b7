use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use itertools::Itertools;
use itertools::MinMaxResult;

use crate::common::MatchRecord;
use crate::common::TeamId;

/// Every match of one season, in the order the data source listed them.
#[must_use]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MatchStore {
  matches: Vec<Arc<MatchRecord>>,
}

impl MatchStore {
  pub fn new(matches: Vec<MatchRecord>) -> Self {
    Self {
      matches: matches.into_iter().map(Arc::new).collect(),
    }
  }

  /// Matches where `team_name` is either side, compared by exact string
  /// equality. An empty result can mean an unknown team as well as a team
  /// without matches.
  #[must_use]
  pub fn matches_involving(&self, team_name: &str) -> Vec<Arc<MatchRecord>> {
    self
      .matches
      .iter()
      .filter(|record| record.involves(team_name))
      .map(Arc::clone)
      .collect()
  }

  #[must_use]
  pub fn matches(&self) -> &[Arc<MatchRecord>] {
    &self.matches
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.matches.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.matches.is_empty()
  }

  #[must_use]
  pub fn teams(&self) -> BTreeSet<TeamId> {
    self
      .matches
      .iter()
      .flat_map(|record| {
        vec![Arc::clone(&record.team1), Arc::clone(&record.team2)]
      })
      .collect()
  }

  /// First and last match dates, ignoring undated records.
  #[must_use]
  pub fn season_span(&self) -> Option<(NaiveDate, NaiveDate)> {
    match self.matches.iter().filter_map(|record| record.date).minmax() {
      MinMaxResult::NoElements => None,
      MinMaxResult::OneElement(date) => Some((date, date)),
      MinMaxResult::MinMax(first, last) => Some((first, last)),
    }
  }
}

pub(super) fn test() {
  #[cfg(test)]
  use pretty_assertions::assert_eq;

  let empty = MatchStore::default();
  assert!(empty.is_empty());
  assert!(empty.matches_involving("SS Lazio").is_empty());
  assert_eq!(empty.season_span(), None);

  let store = MatchStore::new(vec![
    make_match("SS Lazio", "AS Roma", (1, 0), Some((2023, 11, 12))),
    make_match("Genoa CFC", "ACF Fiorentina", (1, 4), Some((2023, 8, 19))),
    make_match("AS Roma", "Empoli FC", (7, 0), None),
    make_match("Juventus FC", "SS Lazio", (3, 1), Some((2024, 4, 2))),
  ]);

  assert_eq!(store.len(), 4);
  assert_eq!(
    store
      .matches_involving("SS Lazio")
      .iter()
      .map(|record| (record.team1.as_str(), record.team2.as_str()))
      .collect::<Vec<_>>(),
    vec![("SS Lazio", "AS Roma"), ("Juventus FC", "SS Lazio")],
  );
  assert_eq!(store.matches_involving("AS Roma").len(), 2);
  assert!(store.matches_involving("Lazio").is_empty());
  assert!(store.matches_involving("as roma").is_empty());

  // NOTE: Views share the stored records instead of copying them.
  assert!(Arc::ptr_eq(
    &store.matches_involving("Empoli FC")[0],
    &store.matches()[2],
  ));

  assert_eq!(
    store
      .teams()
      .iter()
      .map(|team| team.as_str())
      .collect::<Vec<_>>(),
    vec![
      "ACF Fiorentina",
      "AS Roma",
      "Empoli FC",
      "Genoa CFC",
      "Juventus FC",
      "SS Lazio",
    ],
  );

  assert_eq!(
    store.season_span(),
    Some((
      NaiveDate::from_ymd_opt(2023, 8, 19).unwrap(),
      NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
    )),
  );
}

fn make_match(
  team1: &str,
  team2: &str,
  full_time: (usize, usize),
  date: Option<(i32, u32, u32)>,
) -> MatchRecord {
  let record = MatchRecord::new(
    &Arc::new(String::from(team1)),
    &Arc::new(String::from(team2)),
    full_time,
  );

  match date {
    Some((year, month, day)) => {
      record.on(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }
    None => record,
  }
}

#[cfg(test)]
mod tests {
  use super::test;

  #[test]
  fn test_match_store() {
    test()
  }
}
