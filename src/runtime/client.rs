use super::{ModelRuntime, types::*};
use crate::{Error, Result, config::InvokerConfig};
use async_trait::async_trait;
use reqwest::{
    StatusCode, Url,
    header::{ACCEPT, CONTENT_TYPE},
};
use std::env;
use tracing::{debug, warn};

pub const BEARER_TOKEN_ENV: &str = "AWS_BEARER_TOKEN_BEDROCK";
pub const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

const ACCESS_DENIED: &str = "AccessDeniedException";

pub struct BedrockRuntimeClient {
    client: reqwest::Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl BedrockRuntimeClient {
    pub fn new(config: &InvokerConfig) -> Result<Self> {
        let endpoint_url = config.endpoint_url();
        let endpoint = Url::parse(&endpoint_url).map_err(|e| {
            Error::config(format!(
                "Invalid runtime endpoint '{}': {}",
                endpoint_url, e
            ))
        })?;

        if endpoint.cannot_be_a_base() {
            return Err(Error::config(format!(
                "Runtime endpoint '{}' cannot carry a path",
                endpoint_url
            )));
        }

        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(bearer_token_from_env);

        debug!(
            "Creating runtime client for {} (bearer auth: {})",
            endpoint,
            api_key.is_some()
        );

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
        })
    }

    fn invoke_url(&self, model_id: &str) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| Error::config("Runtime endpoint cannot carry a path"))?
            .pop_if_empty()
            .extend(["model", model_id, "invoke"]);
        Ok(url)
    }
}

#[async_trait]
impl ModelRuntime for BedrockRuntimeClient {
    async fn invoke_model(&self, request: InvokeModelRequest) -> Result<InvokeModelResponse> {
        let url = self.invoke_url(&request.model_id)?;

        debug!(
            "Invoking model {} with {} byte body",
            request.model_id,
            request.body.len()
        );

        let mut req_builder = self
            .client
            .post(url)
            .header(CONTENT_TYPE, &request.content_type)
            .header(ACCEPT, &request.accept)
            .body(request.body);

        if let Some(ref api_key) = self.api_key {
            req_builder = req_builder.bearer_auth(api_key);
        }

        let response = req_builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let header_type = response
                .headers()
                .get(ERROR_TYPE_HEADER)
                .and_then(|value| value.to_str().ok())
                .and_then(normalize_error_type);
            let text = response.text().await.unwrap_or_default();
            let error = service_error(&request.model_id, status, header_type, &text);
            warn!("Model {} invocation failed: {}", request.model_id, error);
            return Err(error);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        debug!(
            "Received {} byte {} response from {}",
            body.len(),
            content_type.as_deref().unwrap_or("untyped"),
            request.model_id
        );

        Ok(InvokeModelResponse { body, content_type })
    }
}

fn bearer_token_from_env() -> Option<String> {
    env::var(BEARER_TOKEN_ENV)
        .ok()
        .filter(|key| !key.is_empty())
}

/// `AccessDeniedException:http://internal...` and `com.amazon.coral#AccessDeniedException`
/// both reduce to `AccessDeniedException`. Blank values yield `None`.
fn normalize_error_type(raw: &str) -> Option<String> {
    let head = raw.split(':').next().unwrap_or(raw);
    let short = head.rsplit('#').next().unwrap_or(head).trim();
    (!short.is_empty()).then(|| short.to_string())
}

fn service_error(
    model_id: &str,
    status: StatusCode,
    header_type: Option<String>,
    text: &str,
) -> Error {
    let body: ServiceErrorBody = serde_json::from_str(text).unwrap_or_default();
    let error_type = header_type
        .or_else(|| body.error_type.as_deref().and_then(normalize_error_type));

    let message = match body.message {
        Some(message) => message,
        None if !text.trim().is_empty() => text.trim().to_string(),
        None => status
            .canonical_reason()
            .unwrap_or("no error message")
            .to_string(),
    };

    let denied = match error_type.as_deref() {
        Some(error_type) => error_type == ACCESS_DENIED,
        None => status == StatusCode::FORBIDDEN,
    };

    if denied {
        Error::access_denied(model_id, message)
    } else {
        Error::Service {
            status: status.as_u16(),
            error_type,
            message,
        }
    }
}
