use crate::constants::SESSION_TOKEN_VAR;
use crate::error::{Error, Result};

/// Blocking client for one day's pages on the puzzle site.
///
/// All requests carry the session cookie; the site serves per-user input
/// data and reveals part 2 of the instructions only after part 1 is solved.
pub struct AocClient {
    day_url: String,
    session_token: String,
}

impl AocClient {
    pub fn new(day_url: String, session_token: String) -> Self {
        Self { day_url, session_token }
    }

    /// Builds a client with the session token from the environment.
    pub fn from_env(day_url: String) -> Result<Self> {
        let session_token = std::env::var(SESSION_TOKEN_VAR)
            .map_err(|_| Error::MissingEnvVar(SESSION_TOKEN_VAR.to_string()))?;
        Ok(Self::new(day_url, session_token))
    }

    /// The day's puzzle input.
    pub fn fetch_input(&self) -> Result<String> {
        self.get(Some("input"))
    }

    /// The day's instruction page (raw HTML).
    pub fn fetch_instructions(&self) -> Result<String> {
        self.get(None)
    }

    fn get(&self, path: Option<&str>) -> Result<String> {
        let url = self.url_for(path);
        log::debug!("Fetching {url}");

        let client = reqwest::blocking::Client::new();
        let req = client
            .get(url)
            .header("Cookie", format!("session={}", self.session_token))
            .build()?;

        Ok(client.execute(req)?.error_for_status()?.text()?)
    }

    fn url_for(&self, path: Option<&str>) -> String {
        match path {
            Some(url_path) => format!("{}/{}", self.day_url, url_path),
            None => self.day_url.clone(),
        }
    }
}
