// TheSportsDB HTTP client.
// Builds request URLs, sends GETs, and turns non-success statuses into errors.

use reqwest::{
    Client, Response,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{LeaguedexError, Result};

/// Client for the public TheSportsDB v1 JSON API.
#[derive(Debug, Clone)]
pub struct SportsDbClient {
    client: Client,
    base_url: String,
}

impl SportsDbClient {
    /// Create a client rooted at `base_url` (no trailing slash).
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|e| LeaguedexError::Config(format!("invalid user agent: {}", e)))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(LeaguedexError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_base, &config.user_agent)
    }

    /// Full URL for an endpoint path such as `/all_leagues.php`.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Make a GET request to an absolute URL.
    pub async fn get(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;
        check_response(response)
    }

    /// GET a URL and parse its body as JSON.
    ///
    /// The body is read as text first so malformed JSON surfaces as
    /// `LeaguedexError::Json` rather than a transport error.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.get(url).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Require a success status.
fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(LeaguedexError::Status {
            status,
            url: response.url().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_endpoint() {
        let client = SportsDbClient::new("https://example.com/api/", "test-agent").unwrap();
        assert_eq!(
            client.url("/all_leagues.php"),
            "https://example.com/api/all_leagues.php"
        );
    }

    #[test]
    fn test_rejects_invalid_user_agent() {
        let result = SportsDbClient::new("https://example.com", "bad\nagent");
        assert!(matches!(result, Err(LeaguedexError::Config(_))));
    }
}
