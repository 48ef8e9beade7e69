use serde::Serialize;

/// Outcome band for a single criterion. Ordering matters: `Ok < Low < High`,
/// so the worst verdict across a run is just `max()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Low,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "ok",
            Severity::Low => "low",
            Severity::High => "high",
        }
    }
}

/// A human-readable message paired with its severity band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub message: String,
    pub severity: Severity,
}

impl Verdict {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Verdict {
            message: message.into(),
            severity,
        }
    }
}

/// A verdict tagged with the metric that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct MetricVerdict {
    pub metric: String,
    pub message: String,
    pub severity: Severity,
}
