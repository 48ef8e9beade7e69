pub mod checks;

use serde::Serialize;

use crate::types::config::Metric;
use crate::types::repo::RepoRecord;
use crate::types::verdict::{MetricVerdict, Verdict};

/// The criterion behind a metric. Parsed once from config so typos fail at
/// startup instead of mid-run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    Description,
    Topics,
    License,
    LastUpdate,
    Citation,
    Readme,
    Readability,
    ReadmeSection(String),
}

impl Check {
    pub fn parse(check: &str, section: Option<&str>) -> Result<Self, String> {
        let parsed = match check {
            "description" => Check::Description,
            "topics" => Check::Topics,
            "license" => Check::License,
            "last-update" => Check::LastUpdate,
            "citation" => Check::Citation,
            "readme" => Check::Readme,
            "readability" => Check::Readability,
            "readme-section" => {
                let section = section.ok_or_else(|| {
                    "check 'readme-section' requires a section name".to_string()
                })?;
                if section.trim().is_empty() {
                    return Err("check 'readme-section' requires a section name".to_string());
                }
                return Ok(Check::ReadmeSection(section.trim().to_string()));
            }
            other => return Err(format!("unknown check '{other}'")),
        };
        if section.is_some() {
            return Err(format!("check '{check}' does not take a section"));
        }
        Ok(parsed)
    }
}

/// Run one check against one repository. Pure: all inputs come from the
/// record, so verdicts are reproducible.
pub fn evaluate(repo: &RepoRecord, check: &Check) -> Verdict {
    match check {
        Check::Description => checks::description_check(repo),
        Check::Topics => checks::topics_check(repo),
        Check::License => checks::license_check(repo),
        Check::LastUpdate => checks::last_update_check(repo),
        Check::Citation => checks::citation_check(repo),
        Check::Readme => checks::readme_check(repo),
        Check::Readability => checks::readability_check(repo),
        Check::ReadmeSection(section) => checks::readme_section_check(repo, section),
    }
}

/// Run every configured metric against one repository, in metric order.
pub fn evaluate_all(repo: &RepoRecord, metrics: &[Metric]) -> Vec<MetricVerdict> {
    metrics
        .iter()
        .map(|metric| {
            let verdict = evaluate(repo, &metric.check);
            MetricVerdict {
                metric: metric.name.clone(),
                message: verdict.message,
                severity: verdict.severity,
            }
        })
        .collect()
}

/// One repository with its computed verdicts, in metric order.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRepo {
    #[serde(flatten)]
    pub repo: RepoRecord,
    pub verdicts: Vec<MetricVerdict>,
}

pub fn score_repos(repos: Vec<RepoRecord>, metrics: &[Metric]) -> Vec<ScoredRepo> {
    repos
        .into_iter()
        .map(|repo| {
            let verdicts = evaluate_all(&repo, metrics);
            ScoredRepo { repo, verdicts }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::SiteConfig;
    use crate::types::repo::{ApiOwner, ApiRepo, RepoRecord};
    use crate::types::verdict::Severity;
    use chrono::{DateTime, Duration, Utc};

    fn neglected_repo() -> RepoRecord {
        let updated = (Utc::now() - Duration::days(1000)).fixed_offset();
        RepoRecord::assemble(
            ApiRepo {
                name: "dusty".to_string(),
                full_name: "acme/dusty".to_string(),
                owner: ApiOwner {
                    login: "acme".to_string(),
                },
                html_url: "https://example.com/acme/dusty".to_string(),
                description: None,
                topics: Some(vec![]),
                license: None,
                created_at: DateTime::parse_from_rfc3339("2019-01-01T00:00:00+00:00")
                    .expect("timestamp should parse"),
                updated_at: updated,
            },
            None,
            None,
        )
    }

    #[test]
    fn parse_accepts_every_check_spelling() {
        for spelling in [
            "description",
            "topics",
            "license",
            "last-update",
            "citation",
            "readme",
            "readability",
        ] {
            Check::parse(spelling, None).expect("check spelling should parse");
        }
        assert_eq!(
            Check::parse("readme-section", Some("Usage")),
            Ok(Check::ReadmeSection("Usage".to_string()))
        );
    }

    #[test]
    fn parse_rejects_unknown_check() {
        let err = Check::parse("stargazers", None).expect_err("unknown check should fail");
        assert!(err.contains("stargazers"));
    }

    #[test]
    fn parse_rejects_section_on_plain_check() {
        let err =
            Check::parse("license", Some("Usage")).expect_err("stray section should fail");
        assert!(err.contains("does not take a section"));
    }

    #[test]
    fn parse_rejects_blank_section() {
        assert!(Check::parse("readme-section", Some("  ")).is_err());
        assert!(Check::parse("readme-section", None).is_err());
    }

    #[test]
    fn neglected_repo_fails_every_baseline_metric() {
        let toml_str = r#"
organization = "acme"
"#;
        let cfg: SiteConfig = toml::from_str(toml_str).expect("config should parse");
        let metrics = cfg.metrics().expect("baseline metrics should resolve");
        let verdicts = evaluate_all(&neglected_repo(), &metrics);
        assert_eq!(verdicts.len(), 6);
        for verdict in &verdicts {
            assert_eq!(
                verdict.severity,
                Severity::High,
                "metric {} should be high",
                verdict.metric
            );
        }
        let messages: Vec<_> = verdicts
            .iter()
            .map(|verdict| verdict.message.as_str())
            .collect();
        assert!(messages.contains(&"No description"));
        assert!(messages.contains(&"No topics"));
        assert!(messages.contains(&"No license"));
        assert!(messages.contains(&"No CFF file"));
        assert!(messages.contains(&"No readme"));
    }

    #[test]
    fn scored_repo_serializes_flat_record_with_verdicts() {
        let toml_str = r#"
organization = "acme"
"#;
        let cfg: SiteConfig = toml::from_str(toml_str).expect("config should parse");
        let metrics = cfg.metrics().expect("baseline metrics should resolve");
        let scored = score_repos(vec![neglected_repo()], &metrics);
        let json = serde_json::to_value(&scored).expect("scored repos should serialize");
        let first = &json[0];
        assert_eq!(first["name"], "dusty");
        assert_eq!(first["owner"], "acme");
        assert_eq!(first["verdicts"].as_array().map(Vec::len), Some(6));
        assert_eq!(first["verdicts"][0]["severity"], "high");
    }
}
