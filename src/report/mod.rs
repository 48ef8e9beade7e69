pub mod html;
pub mod json;

use crate::criteria::ScoredRepo;
use crate::error::HealthError;
use crate::types::config::Metric;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
}

/// Everything a renderer needs: the scored repositories, the metric columns,
/// and the page chrome.
pub struct ReportInput<'a> {
    pub title: &'a str,
    pub intro: Option<&'a str>,
    pub token_message: Option<&'a str>,
    pub metrics: &'a [Metric],
    pub repos: &'a [ScoredRepo],
}

pub fn render(input: &ReportInput, format: OutputFormat) -> Result<String, HealthError> {
    match format {
        OutputFormat::Html => Ok(html::render_page(input)),
        OutputFormat::Json => json::to_json(input.repos).map_err(HealthError::Json),
    }
}
