use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {body}")]
    Status {
        status: u16,
        body: serde_json::Value,
    },

    #[error("Invalid JSON in response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date: {value}")]
    InvalidDate { value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl SiteError {
    /// HTTP 狀態碼 (僅限伺服器回應的錯誤)
    pub fn status(&self) -> Option<u16> {
        match self {
            SiteError::Status { status, .. } => Some(*status),
            SiteError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// 伺服器回傳的錯誤內容
    pub fn body(&self) -> Option<&serde_json::Value> {
        match self {
            SiteError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
