use serde::Deserialize;
use std::collections::HashSet;

use crate::criteria::Check;
use crate::error::HealthError;

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub organization: String,
    pub metrics: Option<Vec<MetricConfig>>,
    pub page: Option<toml::Table>,
}

/// One `[[metrics]]` entry as written in the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricConfig {
    pub name: String,
    pub check: String,
    pub section: Option<String>,
}

/// A validated metric: the column label plus the check to run.
#[derive(Debug, Clone)]
pub struct Metric {
    pub name: String,
    pub check: Check,
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), HealthError> {
        if self.organization.trim().is_empty() {
            return Err(HealthError::ConfigParse(
                "organization must be a non-empty string".to_string(),
            ));
        }
        self.metrics()?;
        Ok(())
    }

    /// The metric columns for this site, in config order. A missing
    /// `[[metrics]]` table falls back to the baseline set.
    pub fn metrics(&self) -> Result<Vec<Metric>, HealthError> {
        let entries = match &self.metrics {
            None => return Ok(baseline_metrics()),
            Some(entries) => entries,
        };
        if entries.is_empty() {
            return Err(HealthError::ConfigParse(
                "metrics must declare at least one entry when present".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        let mut metrics = Vec::with_capacity(entries.len());
        for entry in entries {
            let name = entry.name.trim();
            if name.is_empty() {
                return Err(HealthError::InvalidMetric(
                    "metric name must be non-empty".to_string(),
                ));
            }
            if !seen.insert(name.to_string()) {
                return Err(HealthError::InvalidMetric(format!(
                    "duplicate metric name: {name}"
                )));
            }
            let check = Check::parse(&entry.check, entry.section.as_deref())
                .map_err(|reason| HealthError::InvalidMetric(format!("{name}: {reason}")))?;
            metrics.push(Metric {
                name: name.to_string(),
                check,
            });
        }
        Ok(metrics)
    }

    /// Free-form page text, e.g. `page.title`. Non-string values are ignored.
    pub fn page_str(&self, key: &str) -> Option<&str> {
        self.page.as_ref()?.get(key)?.as_str()
    }
}

fn baseline_metrics() -> Vec<Metric> {
    [
        ("Description", Check::Description),
        ("Topics", Check::Topics),
        ("License", Check::License),
        ("Last update", Check::LastUpdate),
        ("Citation file", Check::Citation),
        ("Readme", Check::Readme),
    ]
    .into_iter()
    .map(|(name, check)| Metric {
        name: name.to_string(),
        check,
    })
    .collect()
}
