use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Access denied invoking {model_id}: {message}")]
    AccessDenied { model_id: String, message: String },

    #[error("Model runtime error ({status}, {}): {message}", .error_type.as_deref().unwrap_or("unknown"))]
    Service {
        status: u16,
        error_type: Option<String>,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn access_denied(model_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AccessDenied {
            model_id: model_id.into(),
            message: message.into(),
        }
    }

    /// True when the runtime refused the call because the caller may not invoke the model.
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied { .. })
    }
}
