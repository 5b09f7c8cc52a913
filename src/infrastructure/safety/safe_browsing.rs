//! Google Safe Browsing v4 checker.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::{SafetyChecker, SafetyError};

const LOOKUP_ENDPOINT: &str = "https://safebrowsing.googleapis.com/v4/threatMatches:find";

const THREAT_TYPES: &[&str] = &[
    "MALWARE",
    "SOCIAL_ENGINEERING",
    "UNWANTED_SOFTWARE",
    "POTENTIALLY_HARMFUL_APPLICATION",
];

/// Checker backed by the Safe Browsing `threatMatches:find` endpoint.
///
/// One lookup per shorten request; a URL is unsafe when the response carries
/// any match. Built once at startup and shared through application state.
pub struct SafeBrowsingChecker {
    http: reqwest::Client,
    api_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    client: ClientInfo<'a>,
    threat_info: ThreatInfo<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientInfo<'a> {
    client_id: &'a str,
    client_version: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThreatInfo<'a> {
    threat_types: &'a [&'a str],
    platform_types: &'a [&'a str],
    threat_entry_types: &'a [&'a str],
    threat_entries: Vec<ThreatEntry<'a>>,
}

#[derive(Serialize)]
struct ThreatEntry<'a> {
    url: &'a str,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    matches: Vec<ThreatMatch>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreatMatch {
    threat_type: String,
}

impl SafeBrowsingChecker {
    /// Builds the checker with a 10 second request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SafetyError::Init`] if the HTTP client cannot be
    /// constructed. Callers degrade to [`super::NullChecker`] instead of
    /// failing startup.
    pub fn new(api_key: String) -> Result<Self, SafetyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| SafetyError::Init(e.to_string()))?;

        info!("Safe Browsing checker initialized");

        Ok(Self { http, api_key })
    }
}

#[async_trait]
impl SafetyChecker for SafeBrowsingChecker {
    async fn is_safe(&self, url: &str) -> Result<bool, SafetyError> {
        let request = LookupRequest {
            client: ClientInfo {
                client_id: "redir",
                client_version: env!("CARGO_PKG_VERSION"),
            },
            threat_info: ThreatInfo {
                threat_types: THREAT_TYPES,
                platform_types: &["ANY_PLATFORM"],
                threat_entry_types: &["URL"],
                threat_entries: vec![ThreatEntry { url }],
            },
        };

        let response = self
            .http
            .post(format!("{}?key={}", LOOKUP_ENDPOINT, self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| SafetyError::Lookup(e.to_string()))?
            .error_for_status()
            .map_err(|e| SafetyError::Lookup(e.to_string()))?;

        let body: LookupResponse = response
            .json()
            .await
            .map_err(|e| SafetyError::Lookup(e.to_string()))?;

        if let Some(m) = body.matches.first() {
            debug!("Safe Browsing flagged {} as {}", url, m.threat_type);
            return Ok(false);
        }

        Ok(true)
    }

    fn enabled(&self) -> bool {
        true
    }
}
