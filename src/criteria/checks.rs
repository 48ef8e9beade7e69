use chrono::{DateTime, FixedOffset, Utc};
use regex::Regex;

use crate::types::repo::RepoRecord;
use crate::types::verdict::{Severity, Verdict};

pub fn description_check(repo: &RepoRecord) -> Verdict {
    match repo.description.as_deref() {
        Some(description) if !description.is_empty() => {
            Verdict::new("Description Available", Severity::Ok)
        }
        _ => Verdict::new("No description", Severity::High),
    }
}

pub fn topics_check(repo: &RepoRecord) -> Verdict {
    match repo.topics.as_deref() {
        None | Some([]) => Verdict::new("No topics", Severity::High),
        Some(topics) if topics.len() < 3 => Verdict::new("Less than 3 topics", Severity::Low),
        Some(topics) => Verdict::new(topics.join(", "), Severity::Ok),
    }
}

pub fn license_check(repo: &RepoRecord) -> Verdict {
    match repo.license.as_deref() {
        None | Some("") => Verdict::new("No license", Severity::High),
        Some("Other") => Verdict::new("Other", Severity::Low),
        Some(license) => Verdict::new(license, Severity::Ok),
    }
}

pub fn last_update_check(repo: &RepoRecord) -> Verdict {
    let now = Utc::now().with_timezone(repo.updated.offset());
    last_update_verdict(repo.updated, now)
}

/// One year without a push is a warning, two is a failure. The message is
/// always the last-update date so the reader can judge for themselves.
pub(crate) fn last_update_verdict(
    updated: DateTime<FixedOffset>,
    now: DateTime<FixedOffset>,
) -> Verdict {
    let days = now.signed_duration_since(updated).num_days();
    let date = updated.date_naive().to_string();
    let severity = if days < 365 {
        Severity::Ok
    } else if days < 730 {
        Severity::Low
    } else {
        Severity::High
    };
    Verdict::new(date, severity)
}

pub fn citation_check(repo: &RepoRecord) -> Verdict {
    match &repo.citation {
        Some(_) => Verdict::new("CFF available", Severity::Ok),
        None => Verdict::new("No CFF file", Severity::High),
    }
}

pub fn readme_check(repo: &RepoRecord) -> Verdict {
    match &repo.readme {
        Some(_) => Verdict::new("Readme available", Severity::Ok),
        None => Verdict::new("No readme", Severity::High),
    }
}

pub fn readability_check(repo: &RepoRecord) -> Verdict {
    match (repo.readme.as_deref(), repo.readability) {
        (Some(_), Some(score)) => readability_verdict(score),
        _ => Verdict::new("No readme", Severity::High),
    }
}

/// Bands follow the usual Flesch reading ease interpretation: above 30 reads
/// fine, 20 to 30 is college-level, at or below 20 is dense.
pub(crate) fn readability_verdict(score: f64) -> Verdict {
    let severity = if score > 30.0 {
        Severity::Ok
    } else if score > 20.0 {
        Severity::Low
    } else {
        Severity::High
    };
    Verdict::new(format_score(score), severity)
}

/// Scores render as decimals, so a whole number keeps its `.0` tail.
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        score.to_string()
    }
}

/// Look for a markdown heading named `section` anywhere in the raw readme,
/// case-insensitively. The search is a plain substring match for `# section`,
/// so deeper headings like `## section` satisfy it too (their tail contains
/// the level-1 form).
pub fn readme_section_check(repo: &RepoRecord, section: &str) -> Verdict {
    let found = repo
        .readme
        .as_deref()
        .map(|readme| section_pattern(section).is_some_and(|pattern| pattern.is_match(readme)))
        .unwrap_or(false);
    if found {
        Verdict::new(format!("{section} available"), Severity::Ok)
    } else {
        Verdict::new(format!("{section} not available"), Severity::High)
    }
}

fn section_pattern(section: &str) -> Option<Regex> {
    Regex::new(&format!(r"(?i)\# {}", regex::escape(section))).ok()
}
