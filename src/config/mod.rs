mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(config_path).await
}

pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_invoker_config() {
        let config = InvokerConfig::default();
        assert_eq!(config.region, "us-west-2");
        assert_eq!(config.model_id, "mistral.mixtral-8x7b-instruct-v0:1");
        assert_eq!(config.max_tokens, 500);
        assert_eq!(config.temperature, 0.5);
        assert!(config.stop.is_empty());
        assert_eq!(
            config.endpoint_url(),
            "https://bedrock-runtime.us-west-2.amazonaws.com"
        );
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
invoker:
  region: eu-west-3
  temperature: 0.25
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.invoker.region, "eu-west-3");
        assert_eq!(config.invoker.temperature, 0.25);
        assert_eq!(config.invoker.max_tokens, 500);
        assert_eq!(
            config.invoker.model_id,
            "mistral.mixtral-8x7b-instruct-v0:1"
        );
        assert_eq!(config.logs.level, "info");
        assert_eq!(
            config.invoker.endpoint_url(),
            "https://bedrock-runtime.eu-west-3.amazonaws.com"
        );
    }

    #[test]
    fn test_endpoint_override() {
        let config = InvokerConfig {
            endpoint: Some("http://127.0.0.1:9000".to_string()),
            ..InvokerConfig::default()
        };
        assert_eq!(config.endpoint_url(), "http://127.0.0.1:9000");
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        tokio::fs::write(&path, "logs:\n  level: debug\n")
            .await
            .unwrap();

        let config = load_from(&path).await.unwrap();
        assert_eq!(config.logs.level, "debug");
        assert_eq!(config.invoker, InvokerConfig::default());
    }

    #[tokio::test]
    async fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from(dir.path().join("absent.yaml")).await;
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
