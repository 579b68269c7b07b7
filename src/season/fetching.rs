use reqwest::blocking::Client;

use crate::common::Result;
use crate::season::parse_season;
use crate::season::Season;

pub const DEFAULT_SEASON_URL: &str =
  "https://raw.githubusercontent.com/openfootball/football.json/master/2023-24/it.1.json";

/// Downloads a season document and parses it with `parse_season()`.
///
/// # Errors
/// When the client can't be built, the request fails or returns a non-success
/// status, or the body isn't a valid season document.
pub fn fetch_season(url: &str) -> Result<Season> {
  log::info!("Downloading season from {}.", url);

  let client = get_client()?;
  // SEE: https://docs.rs/reqwest/0.11.13/reqwest/blocking/struct.RequestBuilder.html#method.send
  let body = client.get(url).send()?.error_for_status()?.text()?;
  log::debug!("Downloaded {} bytes.", body.len());

  parse_season(&body)
}

fn get_client() -> Result<Client> {
  use reqwest::header::HeaderMap;
  use reqwest::header::HeaderValue;

  // SEE: https://docs.rs/reqwest/0.11.13/reqwest/blocking/struct.ClientBuilder.html
  let client = Client::builder()
    .user_agent(concat!(
      env!("CARGO_PKG_NAME"),
      "/",
      env!("CARGO_PKG_VERSION"),
    ))
    .https_only(true)
    .gzip(true)
    .deflate(true)
    .brotli(true);

  // SEE: https://docs.rs/reqwest/0.11.13/reqwest/blocking/struct.ClientBuilder.html#method.default_headers
  let mut headers = HeaderMap::new();
  headers.insert("Accept", HeaderValue::from_static("application/json"));
  headers.insert(
    "Accept-Language",
    HeaderValue::from_static("en-US,en;q=0.5"),
  );

  Ok(client.default_headers(headers).build()?)
}

pub(super) fn test() {
  use crate::common::Error;

  assert!(get_client().is_ok());

  // NOTE: Rejected by the client before any connection is attempted, so this
  // runs offline.
  assert!(matches!(
    fetch_season("http://raw.githubusercontent.com/openfootball/football.json/master/2023-24/it.1.json"),
    Err(Error::Http(_))
  ));
  assert!(DEFAULT_SEASON_URL.starts_with("https://"));
}
