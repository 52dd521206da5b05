use serde::{Deserialize, Serialize};

pub const DEFAULT_REGION: &str = "us-west-2";
pub const DEFAULT_MODEL_ID: &str = "mistral.mixtral-8x7b-instruct-v0:1";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub invoker: InvokerConfig,
    #[serde(default)]
    pub logs: LogsConfig,
}

/// Target model and generation parameters for one invoker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokerConfig {
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_model_id")]
    pub model_id: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default)]
    pub top_p: Option<f32>,
    #[serde(default)]
    pub top_k: Option<u32>,
    #[serde(default)]
    pub stop: Vec<String>,
    /// Overrides `https://bedrock-runtime.{region}.amazonaws.com`.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Bedrock API key, sent as a bearer token.
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl InvokerConfig {
    pub fn endpoint_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) if !endpoint.is_empty() => endpoint.clone(),
            _ => format!("https://bedrock-runtime.{}.amazonaws.com", self.region),
        }
    }
}

impl Default for InvokerConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            model_id: default_model_id(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: None,
            top_k: None,
            stop: Vec::new(),
            endpoint: None,
            api_key: None,
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_model_id() -> String {
    DEFAULT_MODEL_ID.to_string()
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.5
}

fn default_log_level() -> String {
    "info".to_string()
}
