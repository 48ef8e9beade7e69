use thiserror::Error;

#[derive(Error, Debug)]
pub enum HealthError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid metric: {0}")]
    InvalidMetric(String),

    #[error("api request failed with status {status}: {url}")]
    ApiStatus { status: u16, url: String },

    #[error("token expiration check failed: {0}")]
    TokenExpiry(String),

    #[error("http error: {0}")]
    Http(#[from] Box<ureq::Error>),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ureq::Error> for HealthError {
    fn from(err: ureq::Error) -> Self {
        HealthError::Http(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, HealthError>;
