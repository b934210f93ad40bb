// 🌐 Monarch Source - Fetch + parse + validate
// One HTTP GET (or a local file read), then JSON → Vec<Monarch>

use crate::config::{Config, Source};
use crate::monarch::Monarch;
use anyhow::{bail, Context, Result};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

// ============================================================================
// LOAD OUTCOME
// ============================================================================

/// LoadOutcome - result of a successful read + parse
///
/// A `null` payload or an empty array is not an error, but there is
/// nothing to aggregate: the caller reports "Invalid Data" and stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Monarchs(Vec<Monarch>),
    Invalid,
}

impl LoadOutcome {
    /// The parsed list, or None when there is nothing to aggregate
    pub fn monarchs(&self) -> Option<&[Monarch]> {
        match self {
            LoadOutcome::Monarchs(monarchs) => Some(monarchs),
            LoadOutcome::Invalid => None,
        }
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// Parse the JSON payload into monarchs
///
/// # Returns
/// * `Ok(LoadOutcome::Monarchs(..))` - at least one record
/// * `Ok(LoadOutcome::Invalid)` - payload is `null` or `[]`
/// * `Err(anyhow::Error)` - payload is not a JSON array of monarch objects
pub fn parse_monarchs(json: &str) -> Result<LoadOutcome> {
    let parsed: Option<Vec<Monarch>> =
        serde_json::from_str(json).context("Failed to deserialize monarch list")?;

    match parsed {
        Some(monarchs) if !monarchs.is_empty() => {
            debug!(count = monarchs.len(), "parsed monarch list");
            Ok(LoadOutcome::Monarchs(monarchs))
        }
        _ => Ok(LoadOutcome::Invalid),
    }
}

// ============================================================================
// FETCHING
// ============================================================================

/// GET the payload body as text
///
/// No timeout unless one is given; the transport default applies.
pub async fn fetch_text(url: &str, timeout: Option<Duration>) -> Result<String> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build().context("Failed to build HTTP client")?;

    info!(%url, "fetching monarch list");

    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch {}", url))?;

    if !response.status().is_success() {
        bail!("{} returned status {}", url, response.status());
    }

    let body = response
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))?;

    debug!(bytes = body.len(), "received monarch payload");
    Ok(body)
}

/// Read the payload from disk
pub fn read_file(path: &Path) -> Result<String> {
    info!(path = %path.display(), "reading monarch list");
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Load monarchs from whichever source the config names
pub async fn load_monarchs(config: &Config) -> Result<LoadOutcome> {
    let body = match &config.source {
        Source::Url(url) => fetch_text(url, config.timeout).await?,
        Source::File(path) => read_file(path)?,
    };

    parse_monarchs(&body)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE: &str = include_str!("../tests/fixtures/monarchs.json");

    #[test]
    fn test_parse_fixture() {
        let outcome = parse_monarchs(FIXTURE).unwrap();
        let monarchs = match outcome {
            LoadOutcome::Monarchs(m) => m,
            LoadOutcome::Invalid => panic!("fixture should parse"),
        };

        let raw: Vec<serde_json::Value> = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(monarchs.len(), raw.len());
        assert_eq!(monarchs[0].name.as_deref(), Some("Edward the Elder"));
    }

    #[test]
    fn test_null_payload_is_invalid() {
        assert_eq!(parse_monarchs("null").unwrap(), LoadOutcome::Invalid);
    }

    #[test]
    fn test_empty_array_is_invalid() {
        assert_eq!(parse_monarchs("[]").unwrap(), LoadOutcome::Invalid);
        assert_eq!(parse_monarchs("  [ ]\n").unwrap(), LoadOutcome::Invalid);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(parse_monarchs("{not json").is_err());
        assert!(parse_monarchs(r#"{"id":1}"#).is_err());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let json = r#"[{"id":1,"nm":"Canute","extra":true}]"#;
        let outcome = parse_monarchs(json).unwrap();

        assert_eq!(
            outcome,
            LoadOutcome::Monarchs(vec![Monarch::new(1, "Canute")])
        );
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();

        let body = read_file(file.path()).unwrap();
        assert_eq!(body, FIXTURE);
    }

    #[test]
    fn test_read_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_file(&dir.path().join("missing.json")).is_err());
    }

    #[tokio::test]
    async fn test_load_from_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"id":1,"nm":"Anne","hse":"House of Stuart","yrs":"1702-1714"}]"#)
            .unwrap();

        let config = Config {
            source: Source::File(file.path().to_path_buf()),
            ..Config::default()
        };

        match load_monarchs(&config).await.unwrap() {
            LoadOutcome::Monarchs(m) => {
                assert_eq!(m.len(), 1);
                assert_eq!(m[0].reign_length(), 12);
            }
            LoadOutcome::Invalid => panic!("expected monarchs"),
        }
    }

    #[tokio::test]
    async fn test_load_empty_file_source_is_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();

        let config = Config {
            source: Source::File(file.path().to_path_buf()),
            ..Config::default()
        };

        assert_eq!(load_monarchs(&config).await.unwrap(), LoadOutcome::Invalid);
    }
}
