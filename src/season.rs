mod fetching;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::common::Error;
use crate::common::MatchRecord;
use crate::common::Result;
use crate::common::Score;
use crate::match_store::MatchStore;

pub use crate::season::fetching::fetch_season;
pub use crate::season::fetching::DEFAULT_SEASON_URL;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[must_use]
#[derive(Debug, Eq, PartialEq)]
pub struct Season {
  pub name: Arc<String>,
  pub matches: MatchStore,
}

// NOTE: Mirrors the layout of https://github.com/openfootball/football.json.
// Unknown fields (e.g.: `time`, `score.ht`) are ignored.
#[derive(Deserialize)]
struct Document {
  #[serde(default)]
  name: String,
  matches: Vec<DocumentMatch>,
}

#[derive(Deserialize)]
struct DocumentMatch {
  round: Option<String>,
  date: Option<String>,
  team1: String,
  team2: String,
  score: Option<DocumentScore>,
}

#[derive(Deserialize)]
struct DocumentScore {
  ft: Option<Vec<serde_json::Value>>,
}

/// # Errors
/// When the document isn't valid JSON or a played match has an empty team
/// name, a bad date or a full-time score that isn't two non-negative integers.
pub fn parse_season(json: &str) -> Result<Season> {
  let document: Document = serde_json::from_str(json)?;

  let mut unplayed_matches = 0;
  let mut matches = Vec::with_capacity(document.matches.len());
  for (index, document_match) in document.matches.into_iter().enumerate() {
    let Some(full_time) =
      document_match.score.as_ref().and_then(|score| score.ft.as_ref())
    else {
      log::debug!(
        "Skipping unplayed match #{} ({} vs {}).",
        index,
        document_match.team1,
        document_match.team2,
      );
      unplayed_matches += 1;
      continue;
    };

    if document_match.team1.is_empty() || document_match.team2.is_empty() {
      return Err(Error::EmptyTeamName { index });
    }

    let full_time = parse_full_time(index, full_time)?;
    let mut record = MatchRecord::new(
      &Arc::new(document_match.team1),
      &Arc::new(document_match.team2),
      full_time,
    );
    if let Some(date) = document_match.date {
      let parsed_date = NaiveDate::parse_from_str(&date, DATE_FORMAT)
        .map_err(|source| Error::InvalidDate {
          index,
          date: date.clone(),
          source,
        })?;
      record = record.on(parsed_date);
    }
    if let Some(round) = document_match.round {
      record = record.in_round(&Arc::new(round));
    }

    matches.push(record);
  }

  log::info!(
    "Loaded {} matches of {:?} ({} not played yet).",
    matches.len(),
    document.name,
    unplayed_matches,
  );

  Ok(Season {
    name: Arc::new(document.name),
    matches: MatchStore::new(matches),
  })
}

/// # Errors
/// When the file can't be read or `parse_season()` fails.
pub fn load_season<P: AsRef<Path>>(path: P) -> Result<Season> {
  let path = path.as_ref();
  log::debug!("Reading season from {:?}.", path);

  parse_season(&fs::read_to_string(path)?)
}

fn parse_full_time(index: usize, score: &[serde_json::Value]) -> Result<Score> {
  let goals: Vec<usize> = score
    .iter()
    .filter_map(|goals| goals.as_u64())
    .filter_map(|goals| usize::try_from(goals).ok())
    .collect();

  match goals[..] {
    [home, away] if score.len() == 2 => Ok((home, away)),
    _ => Err(Error::InvalidScore {
      index,
      score: score.to_vec(),
    }),
  }
}

#[allow(clippy::too_many_lines)]
pub(super) fn test() {
  #[cfg(test)]
  use pretty_assertions::assert_eq;

  use crate::common::Language;
  use crate::team_analysis::TeamAnalyzer;

  const TEST_DATA_FILE: &str = "data/serie-a-sample.json";

  let season = load_season(TEST_DATA_FILE).expect("loading test data failed");
  assert_eq!(season.name.as_str(), "Italian Serie A 2023/24");
  // NOTE: The fixture's last match has no score yet and must be skipped.
  assert_eq!(season.matches.len(), 9);
  assert_eq!(season.matches.teams().len(), 8);
  assert_eq!(
    season.matches.season_span(),
    Some((
      NaiveDate::from_ymd_opt(2023, 8, 19).unwrap(),
      NaiveDate::from_ymd_opt(2024, 4, 6).unwrap(),
    )),
  );
  assert_eq!(
    season.matches.matches()[0].as_ref(),
    &MatchRecord::new(
      &Arc::new(String::from("Empoli FC")),
      &Arc::new(String::from("Hellas Verona FC")),
      (0, 1),
    )
    .on(NaiveDate::from_ymd_opt(2023, 8, 19).unwrap())
    .in_round(&Arc::new(String::from("Matchday 1"))),
  );

  let lazio =
    TeamAnalyzer::new(&season.matches, &Arc::new(String::from("SS Lazio")));
  let roma =
    TeamAnalyzer::new(&season.matches, &Arc::new(String::from("AS Roma")));

  assert_eq!(
    lazio.summary(Language::English),
    "SS Lazio: Wins: 1, Losses: 3, Draws: 1, Goals scored: 2, Goals conceded: 4",
  );
  assert_eq!(
    roma.summary(Language::Italian),
    "AS Roma: Vittorie: 2, Sconfitte: 1, Pareggi: 2, Gol segnati: 11, Gol subiti: 4",
  );
  assert_eq!(
    lazio.comparison_report(&roma, Language::English),
    [
      "SS Lazio has 1 fewer wins than AS Roma.",
      "SS Lazio has 2 more losses than AS Roma.",
      "SS Lazio has 1 fewer draws than AS Roma.",
      "AS Roma has 9 more goals scored than SS Lazio.",
      "AS Roma has 0 fewer goals conceded than SS Lazio.",
    ]
    .join("\n"),
  );

  let minimal = parse_season(
    r#"{"matches": [{"team1": "A", "team2": "B", "score": {"ft": [3, 2]}}]}"#,
  )
  .unwrap();
  assert_eq!(minimal.name.as_str(), "");
  assert_eq!(minimal.matches.len(), 1);
  assert_eq!(minimal.matches.matches()[0].date, None);
  assert_eq!(minimal.matches.matches()[0].round, None);
  assert_eq!(minimal.matches.season_span(), None);

  let unplayed = parse_season(
    r#"{"name": "N", "matches": [
      {"team1": "A", "team2": "B"},
      {"team1": "A", "team2": "B", "score": {}},
      {"team1": "A", "team2": "B", "score": {"ft": null}}
    ]}"#,
  )
  .unwrap();
  assert!(unplayed.matches.is_empty());

  for bad_score in ["[1]", "[1, 2, 3]", "[-1, 0]", "[1.5, 0]", "[\"1\", 0]"] {
    let json = format!(
      r#"{{"matches": [{{"team1": "A", "team2": "B", "score": {{"ft": {}}}}}]}}"#,
      bad_score,
    );
    assert!(
      matches!(
        parse_season(&json),
        Err(Error::InvalidScore { index: 0, .. })
      ),
      "{}",
      bad_score,
    );
  }

  assert!(matches!(
    parse_season(
      r#"{"matches": [
        {"team1": "A", "team2": "B", "score": {"ft": [0, 0]}},
        {"team1": "", "team2": "B", "score": {"ft": [0, 0]}}
      ]}"#,
    ),
    Err(Error::EmptyTeamName { index: 1 })
  ));

  assert!(matches!(
    parse_season(
      r#"{"matches": [
        {"date": "19/08/2023", "team1": "A", "team2": "B", "score": {"ft": [0, 0]}}
      ]}"#,
    ),
    Err(Error::InvalidDate { index: 0, .. })
  ));

  assert!(matches!(parse_season("{}"), Err(Error::Json(_))));
  assert!(matches!(parse_season("not json"), Err(Error::Json(_))));
  assert!(matches!(
    load_season("data/does-not-exist.json"),
    Err(Error::Io(_))
  ));

  fetching::test();
}

#[cfg(test)]
mod tests {
  use super::test;

  #[test]
  fn test_season() {
    test()
  }
}
