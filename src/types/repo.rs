use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::readability;
use crate::unmark;

/// One repository as the listing endpoint returns it. Only the fields the
/// criteria consume are deserialized; everything else in the payload is
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiRepo {
    pub name: String,
    pub full_name: String,
    pub owner: ApiOwner,
    pub html_url: String,
    pub description: Option<String>,
    pub topics: Option<Vec<String>>,
    pub license: Option<ApiLicense>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiOwner {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiLicense {
    pub name: String,
}

/// A repository with its per-file content fetched and derived values filled
/// in. This is the unit the criteria engine scores.
#[derive(Debug, Clone, Serialize)]
pub struct RepoRecord {
    pub name: String,
    pub full_name: String,
    pub owner: String,
    pub url: String,
    pub description: Option<String>,
    pub topics: Option<Vec<String>>,
    pub license: Option<String>,
    pub created: DateTime<FixedOffset>,
    pub updated: DateTime<FixedOffset>,
    #[serde(skip)]
    pub readme: Option<String>,
    #[serde(skip)]
    pub citation: Option<String>,
    /// Flesch reading ease of the readme with markup stripped. `Some` exactly
    /// when `readme` is `Some`.
    pub readability: Option<f64>,
}

impl RepoRecord {
    /// Combines a listing entry with its fetched file contents. Empty blobs
    /// count as missing, so a zero-byte readme or citation file scores the
    /// same as an absent one.
    pub fn assemble(raw: ApiRepo, readme: Option<String>, citation: Option<String>) -> Self {
        let readme = readme.filter(|text| !text.is_empty());
        let citation = citation.filter(|text| !text.is_empty());
        let readability = readme
            .as_deref()
            .map(|text| readability::flesch_reading_ease(&unmark::unmark(text)));
        RepoRecord {
            name: raw.name,
            full_name: raw.full_name,
            owner: raw.owner.login,
            url: raw.html_url,
            description: raw.description,
            topics: raw.topics,
            license: raw.license.map(|license| license.name),
            created: raw.created_at,
            updated: raw.updated_at,
            readme,
            citation,
            readability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_api_repo(json: &str) -> ApiRepo {
        serde_json::from_str(json).expect("repo payload should deserialize")
    }

    #[test]
    fn deserializes_listing_payload() {
        let repo = sample_api_repo(
            r#"{
                "name": "widget",
                "full_name": "acme/widget",
                "owner": {"login": "acme"},
                "html_url": "https://example.com/acme/widget",
                "description": "A widget",
                "topics": ["rust", "cli"],
                "license": {"key": "mit", "name": "MIT License"},
                "created_at": "2020-05-01T10:00:00Z",
                "updated_at": "2024-02-20T08:30:00Z",
                "stargazers_count": 12
            }"#,
        );
        assert_eq!(repo.name, "widget");
        assert_eq!(repo.owner.login, "acme");
        assert_eq!(repo.topics, Some(vec!["rust".to_string(), "cli".to_string()]));
        assert_eq!(
            repo.license.as_ref().map(|license| license.name.as_str()),
            Some("MIT License")
        );
    }

    #[test]
    fn missing_optional_fields_deserialize_as_none() {
        let repo = sample_api_repo(
            r#"{
                "name": "bare",
                "full_name": "acme/bare",
                "owner": {"login": "acme"},
                "html_url": "https://example.com/acme/bare",
                "description": null,
                "license": null,
                "created_at": "2020-05-01T10:00:00Z",
                "updated_at": "2024-02-20T08:30:00Z"
            }"#,
        );
        assert_eq!(repo.description, None);
        assert!(repo.topics.is_none());
        assert!(repo.license.is_none());
    }

    #[test]
    fn assemble_scores_readability_only_with_a_readme() {
        let raw = sample_api_repo(
            r#"{
                "name": "bare",
                "full_name": "acme/bare",
                "owner": {"login": "acme"},
                "html_url": "https://example.com/acme/bare",
                "created_at": "2020-05-01T10:00:00Z",
                "updated_at": "2024-02-20T08:30:00Z"
            }"#,
        );
        let without = RepoRecord::assemble(raw.clone(), None, None);
        assert!(without.readability.is_none());

        let with = RepoRecord::assemble(raw, Some("# Title\n\nShort words.".to_string()), None);
        assert!(with.readability.is_some());
    }

    #[test]
    fn assemble_treats_empty_blobs_as_missing() {
        let raw = sample_api_repo(
            r#"{
                "name": "hollow",
                "full_name": "acme/hollow",
                "owner": {"login": "acme"},
                "html_url": "https://example.com/acme/hollow",
                "created_at": "2020-05-01T10:00:00Z",
                "updated_at": "2024-02-20T08:30:00Z"
            }"#,
        );
        let record = RepoRecord::assemble(raw, Some(String::new()), Some(String::new()));
        assert!(record.readme.is_none());
        assert!(record.citation.is_none());
        assert!(record.readability.is_none());
    }
}
