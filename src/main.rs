use std::path::PathBuf;
use std::sync::Arc;

use anyhow::ensure;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;

use derby::Language;
use derby::TeamAnalyzer;

#[derive(Parser)]
#[command(name = "derby")]
#[command(about = "Compare two teams' results over one season", long_about = None)]
struct Cli {
  /// Season JSON file (openfootball layout)
  #[arg(long, value_name = "PATH", conflicts_with = "url")]
  file: Option<PathBuf>,

  /// Season JSON URL, used when no file is given
  #[arg(long, default_value = derby::DEFAULT_SEASON_URL)]
  url: String,

  /// Team to compare, given exactly twice
  #[arg(
    long = "team",
    value_name = "NAME",
    default_values = ["SS Lazio", "AS Roma"],
  )]
  teams: Vec<String>,

  /// Language of the printed statistics
  #[arg(long, value_enum, default_value_t = Language::English)]
  language: Language,

  /// Enable debug logging
  #[arg(short, long)]
  verbose: bool,

  /// Run the built-in checks (from the crate root) and exit
  #[arg(long)]
  self_test: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let log_level = if cli.verbose { "debug" } else { "info" };
  env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or(log_level),
  )
  .format_timestamp(None)
  .init();

  if cli.self_test {
    derby::test();
    log::info!("All checks passed.");
    return Ok(());
  }

  ensure!(
    cli.teams.len() == 2,
    "--team must be given exactly twice (got {:?})",
    cli.teams,
  );

  let season = match &cli.file {
    Some(path) => derby::load_season(path)
      .with_context(|| format!("loading season from {:?}", path))?,
    None => derby::fetch_season(&cli.url)
      .with_context(|| format!("fetching season from {}", cli.url))?,
  };

  let first =
    TeamAnalyzer::new(&season.matches, &Arc::new(cli.teams[0].clone()));
  let second =
    TeamAnalyzer::new(&season.matches, &Arc::new(cli.teams[1].clone()));

  if let Some((first_date, last_date)) = season.matches.season_span() {
    println!("{} ({} to {})", season.name, first_date, last_date);
  }
  println!("{}", first.summary(cli.language));
  println!("{}", second.summary(cli.language));
  println!();
  println!("{}", first.comparison_heading(&second, cli.language));
  println!("{}", first.comparison_report(&second, cli.language));

  Ok(())
}
