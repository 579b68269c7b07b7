use std::sync::Arc;

use itertools::Itertools;

use crate::common::Language;
use crate::common::MatchRecord;
use crate::match_store::MatchStore;
use crate::team_analysis::Statistic;
use crate::team_analysis::TeamAnalyzer;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Direction {
  More,
  Fewer,
}

impl Direction {
  fn word(self, language: Language) -> &'static str {
    match (language, self) {
      (Language::English, Self::More) => "more",
      (Language::English, Self::Fewer) => "fewer",
      (Language::Italian, Self::More) => "più",
      (Language::Italian, Self::Fewer) => "meno",
    }
  }
}

/// Magnitude of `first - second` and whether `first` is strictly greater.
/// Equal values read as "0 fewer".
fn difference(first: usize, second: usize) -> (usize, Direction) {
  let direction = if first > second {
    Direction::More
  } else {
    Direction::Fewer
  };

  (first.abs_diff(second), direction)
}

impl TeamAnalyzer {
  /// Five sentences comparing this team with `other`: wins, losses and draws
  /// with this team as subject, then goals scored and conceded with `other`
  /// as subject.
  #[must_use]
  pub fn compare_to(&self, other: &Self) -> Vec<String> {
    self.compare_to_in(other, Language::default())
  }

  #[must_use]
  pub fn compare_to_in(&self, other: &Self, language: Language) -> Vec<String> {
    // NOTE: Only wins get an equality sentence. Losses, draws and goals say
    // "0 fewer" when equal, matching the reports this tool has always printed.
    let wins = if self.wins() == other.wins() {
      same_count_sentence(self, other, Statistic::Wins, language)
    } else {
      difference_sentence(self, other, Statistic::Wins, language)
    };

    vec![
      wins,
      difference_sentence(self, other, Statistic::Losses, language),
      difference_sentence(self, other, Statistic::Draws, language),
      difference_sentence(other, self, Statistic::GoalsScored, language),
      difference_sentence(other, self, Statistic::GoalsConceded, language),
    ]
  }

  /// `compare_to_in()` with one sentence per line.
  #[must_use]
  pub fn comparison_report(&self, other: &Self, language: Language) -> String {
    self.compare_to_in(other, language).iter().join("\n")
  }

  #[must_use]
  pub fn comparison_heading(&self, other: &Self, language: Language) -> String {
    match language {
      Language::English => format!(
        "Comparison between {} and {}:",
        self.team_name, other.team_name,
      ),
      Language::Italian => {
        format!("Confronto tra {} e {}:", self.team_name, other.team_name)
      }
    }
  }
}

fn same_count_sentence(
  subject: &TeamAnalyzer,
  object: &TeamAnalyzer,
  statistic: Statistic,
  language: Language,
) -> String {
  match language {
    Language::English => format!(
      "{} and {} have the same number of {}.",
      subject.team_name,
      object.team_name,
      statistic.noun(language),
    ),
    Language::Italian => format!(
      "{} e {} hanno lo stesso numero di {}.",
      subject.team_name,
      object.team_name,
      statistic.noun(language),
    ),
  }
}

fn difference_sentence(
  subject: &TeamAnalyzer,
  object: &TeamAnalyzer,
  statistic: Statistic,
  language: Language,
) -> String {
  let (magnitude, direction) =
    difference(statistic.value(subject), statistic.value(object));

  match language {
    Language::English => format!(
      "{} has {} {} {} than {}.",
      subject.team_name,
      magnitude,
      direction.word(language),
      statistic.noun(language),
      object.team_name,
    ),
    Language::Italian => format!(
      "{} ha {} {} in {} rispetto a {}.",
      subject.team_name,
      magnitude,
      statistic.noun(language),
      direction.word(language),
      object.team_name,
    ),
  }
}

#[allow(clippy::too_many_lines)]
pub(super) fn test() {
  #[cfg(test)]
  use pretty_assertions::assert_eq;

  assert_eq!(difference(5, 3), (2, Direction::More));
  assert_eq!(difference(3, 5), (2, Direction::Fewer));
  assert_eq!(difference(4, 4), (0, Direction::Fewer));

  let store = make_store(&[
    ("SS Lazio", "AS Roma", (1, 0)),
    ("AS Roma", "SS Lazio", (0, 0)),
    ("SS Lazio", "Juventus FC", (1, 0)),
    ("Juventus FC", "AS Roma", (1, 0)),
    ("AS Roma", "Juventus FC", (1, 1)),
    ("Juventus FC", "SS Lazio", (3, 1)),
    ("SS Lazio", "Empoli FC", (2, 0)),
    ("Empoli FC", "AS Roma", (1, 2)),
  ]);
  let lazio = make_analyzer(&store, "SS Lazio");
  let roma = make_analyzer(&store, "AS Roma");

  // NOTE: Lazio W3 L1 D1 GF5 GA3, Roma W1 L2 D2 GF3 GA4.
  assert_eq!(
    lazio.compare_to(&roma),
    vec![
      "SS Lazio has 2 more wins than AS Roma.",
      "SS Lazio has 1 fewer losses than AS Roma.",
      "SS Lazio has 1 fewer draws than AS Roma.",
      "AS Roma has 2 fewer goals scored than SS Lazio.",
      "AS Roma has 1 more goals conceded than SS Lazio.",
    ],
  );
  assert_eq!(
    roma.compare_to(&lazio),
    vec![
      "AS Roma has 2 fewer wins than SS Lazio.",
      "AS Roma has 1 more losses than SS Lazio.",
      "AS Roma has 1 more draws than SS Lazio.",
      "SS Lazio has 2 more goals scored than AS Roma.",
      "SS Lazio has 1 fewer goals conceded than AS Roma.",
    ],
  );

  assert_eq!(
    lazio.comparison_report(&roma, Language::Italian),
    [
      "SS Lazio ha 2 Vittorie in più rispetto a AS Roma.",
      "SS Lazio ha 1 Sconfitte in meno rispetto a AS Roma.",
      "SS Lazio ha 1 Pareggi in meno rispetto a AS Roma.",
      "AS Roma ha 2 Gol segnati in meno rispetto a SS Lazio.",
      "AS Roma ha 1 Gol subiti in più rispetto a SS Lazio.",
    ]
    .join("\n"),
  );
  assert_eq!(
    lazio.comparison_heading(&roma, Language::English),
    "Comparison between SS Lazio and AS Roma:",
  );
  assert_eq!(
    lazio.comparison_heading(&roma, Language::Italian),
    "Confronto tra SS Lazio e AS Roma:",
  );

  // NOTE: Same wins get the equality sentence while the other (equal)
  // statistics still read "0 fewer". The asymmetry is long-standing output and
  // kept on purpose.
  let mirrored = make_store(&[
    ("Genoa CFC", "Torino FC", (2, 1)),
    ("Torino FC", "Genoa CFC", (2, 1)),
  ]);
  let genoa = make_analyzer(&mirrored, "Genoa CFC");
  let torino = make_analyzer(&mirrored, "Torino FC");
  assert_eq!(
    genoa.compare_to(&torino),
    vec![
      "Genoa CFC and Torino FC have the same number of wins.",
      "Genoa CFC has 0 fewer losses than Torino FC.",
      "Genoa CFC has 0 fewer draws than Torino FC.",
      "Torino FC has 0 fewer goals scored than Genoa CFC.",
      "Torino FC has 0 fewer goals conceded than Genoa CFC.",
    ],
  );
  assert_eq!(
    genoa.compare_to_in(&torino, Language::Italian)[0],
    "Genoa CFC e Torino FC hanno lo stesso numero di Vittorie.",
  );

  // NOTE: Teams without matches compare as all zeros.
  let nobody = make_analyzer(&store, "US Sassuolo");
  let nobody_else = make_analyzer(&store, "US Lecce");
  assert_eq!(
    nobody.compare_to(&nobody_else),
    vec![
      "US Sassuolo and US Lecce have the same number of wins.",
      "US Sassuolo has 0 fewer losses than US Lecce.",
      "US Sassuolo has 0 fewer draws than US Lecce.",
      "US Lecce has 0 fewer goals scored than US Sassuolo.",
      "US Lecce has 0 fewer goals conceded than US Sassuolo.",
    ],
  );

  for (first, second) in [(&lazio, &roma), (&lazio, &nobody), (&genoa, &torino)]
  {
    let forward = difference(first.wins(), second.wins());
    let backward = difference(second.wins(), first.wins());
    assert_eq!(forward.0, backward.0);
    if forward.0 != 0 {
      assert!(forward.1 != backward.1);
    }
    assert_eq!(first.compare_to(second).len(), 5);
  }
}

fn make_store(matches: &[(&str, &str, (usize, usize))]) -> MatchStore {
  MatchStore::new(
    matches
      .iter()
      .map(|&(team1, team2, full_time)| {
        MatchRecord::new(
          &Arc::new(String::from(team1)),
          &Arc::new(String::from(team2)),
          full_time,
        )
      })
      .collect(),
  )
}

fn make_analyzer(store: &MatchStore, team_name: &str) -> TeamAnalyzer {
  TeamAnalyzer::new(store, &Arc::new(String::from(team_name)))
}
