use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::error::{HealthError, Result};
use crate::types::repo::ApiRepo;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("repohealth/", env!("CARGO_PKG_VERSION"));
const EXPIRATION_HEADER: &str = "github-authentication-token-expiration";
const PER_PAGE: u32 = 100;

/// Sync client for the GitHub REST API. Listing failures are fatal, per-file
/// fetches degrade to `None` so one missing readme never sinks a run.
pub struct GitHubClient {
    agent: ureq::Agent,
    base_url: String,
    token: Option<String>,
}

fn make_agent() -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false)
        .timeout_global(Some(Duration::from_secs(30)))
        .build()
        .new_agent()
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_API_URL, token)
    }

    pub fn with_base_url(base_url: &str, token: Option<String>) -> Self {
        Self {
            agent: make_agent(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Drop the credential and continue unauthenticated.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    fn get(&self, url: &str) -> std::result::Result<ureq::http::Response<ureq::Body>, ureq::Error> {
        let mut request = self
            .agent
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT);
        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }
        request.call()
    }

    /// Every repository in the organization, walking pages until the API
    /// returns an empty one.
    pub fn list_org_repos(&self, org: &str) -> Result<Vec<ApiRepo>> {
        let mut repos = Vec::new();
        let mut page = 1u32;
        loop {
            let url = format!(
                "{}/orgs/{}/repos?page={}&per_page={}",
                self.base_url, org, page, PER_PAGE
            );
            let response = self.get(&url)?;
            let status = response.status().as_u16();
            if !(200..300).contains(&status) {
                return Err(HealthError::ApiStatus { status, url });
            }
            let batch: Vec<ApiRepo> = response.into_body().read_json()?;
            if batch.is_empty() {
                break;
            }
            debug!(page, count = batch.len(), "fetched repository listing page");
            repos.extend(batch);
            page += 1;
        }
        Ok(repos)
    }

    pub fn fetch_readme(&self, full_name: &str) -> Option<String> {
        self.fetch_contents(&format!("{}/repos/{}/readme", self.base_url, full_name))
    }

    pub fn fetch_file(&self, full_name: &str, path: &str) -> Option<String> {
        self.fetch_contents(&format!(
            "{}/repos/{}/contents/{}",
            self.base_url, full_name, path
        ))
    }

    fn fetch_contents(&self, url: &str) -> Option<String> {
        let response = match self.get(url) {
            Ok(response) => response,
            Err(err) => {
                debug!(url, error = %err, "contents request failed");
                return None;
            }
        };
        if !(200..300).contains(&response.status().as_u16()) {
            return None;
        }
        let body: ContentsResponse = response.into_body().read_json().ok()?;
        decode_content(&body.content?)
    }

    /// Time left on the personal access token, negative once it has lapsed.
    /// The API reports this in a response header on any authenticated call.
    pub fn token_expiration(&self) -> Result<chrono::Duration> {
        let url = format!("{}/", self.base_url);
        let response = self.get(&url)?;
        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(HealthError::ApiStatus { status, url });
        }
        let header = response.headers().get(EXPIRATION_HEADER).ok_or_else(|| {
            HealthError::TokenExpiry(format!(
                "response is missing the {EXPIRATION_HEADER} header"
            ))
        })?;
        let header = header.to_str().map_err(|_| {
            HealthError::TokenExpiry(format!("{EXPIRATION_HEADER} header is not valid text"))
        })?;
        let expiry = parse_expiration(header)?;
        Ok(expiry.signed_duration_since(Utc::now().with_timezone(expiry.offset())))
    }
}

#[derive(Debug, Deserialize)]
struct ContentsResponse {
    content: Option<String>,
}

/// Contents payloads arrive base64-encoded with embedded newlines.
fn decode_content(encoded: &str) -> Option<String> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(compact).ok()?;
    String::from_utf8(bytes).ok()
}

/// The expiration header is either RFC 3339 or the older
/// `2026-03-01 12:00:00 UTC` shape, depending on token type.
fn parse_expiration(raw: &str) -> Result<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed);
    }
    let stripped = raw.trim_end_matches(" UTC");
    NaiveDateTime::parse_from_str(stripped, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc().fixed_offset())
        .map_err(|_| HealthError::TokenExpiry(format!("unparseable expiration timestamp: {raw}")))
}

/// Credential health, surfaced as a warning banner on the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStatus {
    Missing,
    Expired,
    ExpiringSoon(i64),
    Healthy,
}

impl TokenStatus {
    pub fn from_remaining(remaining: chrono::Duration) -> Self {
        if remaining < chrono::Duration::zero() {
            TokenStatus::Expired
        } else if remaining.num_days() < 30 {
            TokenStatus::ExpiringSoon(remaining.num_days())
        } else {
            TokenStatus::Healthy
        }
    }

    /// Banner text, `None` when the credential needs no warning.
    pub fn message(&self) -> Option<String> {
        match self {
            TokenStatus::Missing => Some(
                "Not using a personal access token; create one and add it to the repository secrets."
                    .to_string(),
            ),
            TokenStatus::Expired => Some("Personal access token has expired.".to_string()),
            TokenStatus::ExpiringSoon(days) => {
                Some(format!("Personal access token expiring in {days} days."))
            }
            TokenStatus::Healthy => None,
        }
    }
}
