mod comparison;

use std::marker::PhantomData;
use std::sync::Arc;

use itertools::Itertools;

use crate::common::Language;
use crate::common::MatchRecord;
use crate::common::Outcome;
use crate::common::TeamId;
use crate::match_store::MatchStore;

/// One team's matches of a season and the statistics derived from them.
///
/// Nothing is cached: every statistic is a fresh scan of `matches`.
#[must_use]
#[derive(Clone, Debug)]
pub struct TeamAnalyzer {
  pub team_name: TeamId,
  matches: Vec<Arc<MatchRecord>>,
  constructor_guard: PhantomData<()>,
}

impl TeamAnalyzer {
  pub fn new(store: &MatchStore, team_name: &TeamId) -> Self {
    let matches = store.matches_involving(team_name);
    if matches.is_empty() {
      log::warn!(
        "No matches involve {:?}, it's either unknown or hasn't played yet.",
        team_name,
      );
    } else {
      log::debug!("{:?} played {} matches.", team_name, matches.len());
    }

    Self::from_matches(team_name, matches)
  }

  /// # Panics
  /// When any of `matches` doesn't involve `team_name`.
  pub fn from_matches(
    team_name: &TeamId,
    matches: Vec<Arc<MatchRecord>>,
  ) -> Self {
    if let Some(foreign_match) =
      matches.iter().find(|record| !record.involves(team_name))
    {
      panic!(
        "Match doesn't involve the analyzed team ({:?}, {:?}).",
        team_name, foreign_match,
      );
    }

    Self {
      team_name: Arc::clone(team_name),
      matches,
      constructor_guard: PhantomData,
    }
  }

  #[must_use]
  pub fn matches(&self) -> &[Arc<MatchRecord>] {
    &self.matches
  }

  #[must_use]
  pub fn matches_played(&self) -> usize {
    self.matches.len()
  }

  #[must_use]
  pub fn wins(&self) -> usize {
    self.count_outcomes(Outcome::Won)
  }

  #[must_use]
  pub fn losses(&self) -> usize {
    self.count_outcomes(Outcome::Lost)
  }

  #[must_use]
  pub fn draws(&self) -> usize {
    self.count_outcomes(Outcome::Drawn)
  }

  #[must_use]
  pub fn goals_for(&self) -> usize {
    self.sum_goals(MatchRecord::home_goals, MatchRecord::away_goals)
  }

  #[must_use]
  pub fn goals_against(&self) -> usize {
    self.sum_goals(MatchRecord::away_goals, MatchRecord::home_goals)
  }

  /// One line with every statistic, e.g.
  /// `SS Lazio: Wins: 18, Losses: 13, Draws: 7, ...`.
  #[must_use]
  pub fn summary(&self, language: Language) -> String {
    format!(
      "{}: {}",
      self.team_name,
      Statistic::ALL
        .iter()
        .map(|statistic| format!(
          "{}: {}",
          statistic.heading(language),
          statistic.value(self),
        ))
        .join(", "),
    )
  }

  fn count_outcomes(&self, outcome: Outcome) -> usize {
    self
      .matches
      .iter()
      .filter(|record| {
        (self.is_home(record) && record.home_outcome() == outcome)
          || (self.is_away(record) && record.away_outcome() == outcome)
      })
      .count()
  }

  // NOTE: Both sums default to zero when the team never played on that side.
  fn sum_goals(
    &self,
    when_home: fn(&MatchRecord) -> usize,
    when_away: fn(&MatchRecord) -> usize,
  ) -> usize {
    let home_goals: usize = self
      .matches
      .iter()
      .filter(|record| self.is_home(record))
      .map(|record| when_home(record))
      .sum();
    let away_goals: usize = self
      .matches
      .iter()
      .filter(|record| self.is_away(record))
      .map(|record| when_away(record))
      .sum();

    home_goals + away_goals
  }

  fn is_home(&self, record: &MatchRecord) -> bool {
    record.team1 == self.team_name
  }

  fn is_away(&self, record: &MatchRecord) -> bool {
    record.team2 == self.team_name
  }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Statistic {
  Wins,
  Losses,
  Draws,
  GoalsScored,
  GoalsConceded,
}

impl Statistic {
  const ALL: [Self; 5] = [
    Self::Wins,
    Self::Losses,
    Self::Draws,
    Self::GoalsScored,
    Self::GoalsConceded,
  ];

  fn value(self, analyzer: &TeamAnalyzer) -> usize {
    match self {
      Self::Wins => analyzer.wins(),
      Self::Losses => analyzer.losses(),
      Self::Draws => analyzer.draws(),
      Self::GoalsScored => analyzer.goals_for(),
      Self::GoalsConceded => analyzer.goals_against(),
    }
  }

  fn heading(self, language: Language) -> &'static str {
    match (language, self) {
      (Language::English, Self::Wins) => "Wins",
      (Language::English, Self::Losses) => "Losses",
      (Language::English, Self::Draws) => "Draws",
      (Language::English, Self::GoalsScored) => "Goals scored",
      (Language::English, Self::GoalsConceded) => "Goals conceded",
      (Language::Italian, Self::Wins) => "Vittorie",
      (Language::Italian, Self::Losses) => "Sconfitte",
      (Language::Italian, Self::Draws) => "Pareggi",
      (Language::Italian, Self::GoalsScored) => "Gol segnati",
      (Language::Italian, Self::GoalsConceded) => "Gol subiti",
    }
  }

  /// The statistic as it reads inside a sentence.
  fn noun(self, language: Language) -> &'static str {
    match (language, self) {
      (Language::English, Self::Wins) => "wins",
      (Language::English, Self::Losses) => "losses",
      (Language::English, Self::Draws) => "draws",
      (Language::English, Self::GoalsScored) => "goals scored",
      (Language::English, Self::GoalsConceded) => "goals conceded",
      // NOTE: Italian keeps the capitalized headings mid-sentence.
      (Language::Italian, _) => self.heading(language),
    }
  }
}

#[allow(clippy::too_many_lines)]
pub(super) fn test() {
  #[cfg(test)]
  use pretty_assertions::assert_eq;

  let a = Arc::new(String::from("A"));
  let b = Arc::new(String::from("B"));

  let store = MatchStore::new(vec![
    MatchRecord::new(&a, &b, (2, 1)),
    MatchRecord::new(&b, &a, (0, 0)),
    MatchRecord::new(&a, &b, (1, 3)),
  ]);
  let analyzer_a = TeamAnalyzer::new(&store, &a);
  let analyzer_b = TeamAnalyzer::new(&store, &b);

  assert_eq!(
    (
      analyzer_a.wins(),
      analyzer_a.losses(),
      analyzer_a.draws(),
      analyzer_a.goals_for(),
      analyzer_a.goals_against(),
    ),
    (1, 1, 1, 3, 4),
  );
  assert_eq!(
    (
      analyzer_b.wins(),
      analyzer_b.losses(),
      analyzer_b.draws(),
      analyzer_b.goals_for(),
      analyzer_b.goals_against(),
    ),
    (1, 1, 1, 4, 3),
  );

  // NOTE: Metrics are re-derived on every call.
  assert_eq!(analyzer_a.wins(), analyzer_a.wins());
  assert_eq!(analyzer_a.goals_for(), 3);

  let nobody = TeamAnalyzer::new(&store, &Arc::new(String::from("C")));
  assert_eq!(nobody.matches_played(), 0);
  assert_eq!(
    (
      nobody.wins(),
      nobody.losses(),
      nobody.draws(),
      nobody.goals_for(),
      nobody.goals_against(),
    ),
    (0, 0, 0, 0, 0),
  );

  // NOTE: A team that only played at home still has an (empty) away sum.
  let home_only = TeamAnalyzer::from_matches(
    &a,
    vec![Arc::new(MatchRecord::new(&a, &b, (4, 2)))],
  );
  assert_eq!((home_only.goals_for(), home_only.goals_against()), (4, 2));

  let league = MatchStore::new(
    vec![
      ("SS Lazio", "AS Roma", (1, 0)),
      ("AS Roma", "SS Lazio", (0, 0)),
      ("SS Lazio", "Juventus FC", (1, 0)),
      ("Juventus FC", "AS Roma", (1, 0)),
      ("AS Roma", "Juventus FC", (1, 1)),
      ("Juventus FC", "SS Lazio", (3, 1)),
      ("SS Lazio", "Empoli FC", (2, 0)),
      ("Empoli FC", "AS Roma", (1, 2)),
    ]
    .into_iter()
    .map(|(team1, team2, full_time)| {
      MatchRecord::new(
        &Arc::new(String::from(team1)),
        &Arc::new(String::from(team2)),
        full_time,
      )
    })
    .collect(),
  );

  for team_name in league.teams() {
    let analyzer = TeamAnalyzer::new(&league, &team_name);
    assert_eq!(
      analyzer.wins() + analyzer.losses() + analyzer.draws(),
      league.matches_involving(&team_name).len(),
      "{:?}",
      team_name,
    );
  }

  let goals_for: usize = league
    .teams()
    .iter()
    .map(|team_name| TeamAnalyzer::new(&league, team_name).goals_for())
    .sum();
  let goals_against: usize = league
    .teams()
    .iter()
    .map(|team_name| TeamAnalyzer::new(&league, team_name).goals_against())
    .sum();
  assert_eq!(goals_for, goals_against);

  for record in league.matches() {
    let home = TeamAnalyzer::from_matches(
      &record.team1,
      vec![Arc::clone(record)],
    );
    let away = TeamAnalyzer::from_matches(
      &record.team2,
      vec![Arc::clone(record)],
    );

    assert_eq!(
      [
        home.wins() == 1 && away.losses() == 1,
        away.wins() == 1 && home.losses() == 1,
        home.draws() == 1 && away.draws() == 1,
      ]
      .iter()
      .filter(|&&holds| holds)
      .count(),
      1,
      "{:?}",
      record,
    );
  }

  let lazio = TeamAnalyzer::new(&league, &Arc::new(String::from("SS Lazio")));
  assert_eq!(
    lazio.summary(Language::English),
    "SS Lazio: Wins: 3, Losses: 1, Draws: 1, Goals scored: 5, Goals conceded: 3",
  );
  assert_eq!(
    lazio.summary(Language::Italian),
    "SS Lazio: Vittorie: 3, Sconfitte: 1, Pareggi: 1, Gol segnati: 5, Gol subiti: 3",
  );

  comparison::test();
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::test;
  use super::MatchRecord;
  use super::TeamAnalyzer;

  #[test]
  fn test_team_analysis() {
    test()
  }

  #[test]
  #[should_panic(expected = "Match doesn't involve the analyzed team")]
  fn test_foreign_match_rejected() {
    let _ = TeamAnalyzer::from_matches(
      &Arc::new(String::from("SS Lazio")),
      vec![Arc::new(MatchRecord::new(
        &Arc::new(String::from("Genoa CFC")),
        &Arc::new(String::from("AS Roma")),
        (0, 1),
      ))],
    );
  }
}
