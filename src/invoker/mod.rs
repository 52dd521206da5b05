//! Mixtral 8x7B instruct invocation.
//!
//! [`InferenceInvoker::invoke`] wraps a prompt in the Mistral instruct
//! template, sends a single `InvokeModel` request and maps the reply to the
//! list of completion texts. A permission failure is reported as
//! [`Invocation::PermissionDenied`]; every other failure is returned as-is.

mod types;

pub use types::*;

use crate::{
    Error, Result,
    config::InvokerConfig,
    runtime::{BedrockRuntimeClient, InvokeModelRequest, ModelRuntime},
};
use std::sync::Arc;
use tracing::{debug, error};

/// Mistral instruct models expect the prompt embedded in this frame.
pub fn instruction(prompt: &str) -> String {
    format!("<s>[INST] {prompt} [/INST]")
}

/// Decodes a raw response body and extracts `outputs[*].text` in order.
pub fn parse_completions(body: Vec<u8>) -> Result<Vec<String>> {
    let decoded = String::from_utf8(body)?;
    let response: ResponseBody = serde_json::from_str(&decoded)?;
    Ok(response.into_completions())
}

pub struct InferenceInvoker {
    config: InvokerConfig,
    runtime: Arc<dyn ModelRuntime>,
}

impl InferenceInvoker {
    pub fn new(config: InvokerConfig, runtime: Arc<dyn ModelRuntime>) -> Self {
        Self { config, runtime }
    }

    /// Invoker backed by the Bedrock runtime HTTP API for the configured region.
    pub fn bedrock(config: InvokerConfig) -> Result<Self> {
        let runtime = BedrockRuntimeClient::new(&config)?;
        Ok(Self::new(config, Arc::new(runtime)))
    }

    pub fn config(&self) -> &InvokerConfig {
        &self.config
    }

    pub fn model_id(&self) -> &str {
        &self.config.model_id
    }

    pub fn payload(&self, prompt: &str) -> RequestPayload {
        RequestPayload {
            prompt: instruction(prompt),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            top_k: self.config.top_k,
            stop: self.config.stop.clone(),
        }
    }

    pub async fn invoke(&self, prompt: &str) -> Result<Invocation> {
        let body = serde_json::to_vec(&self.payload(prompt))?;
        let request = InvokeModelRequest::json(&self.config.model_id, body);

        debug!(
            "Invoking {} in {} with {} byte payload",
            self.config.model_id,
            self.config.region,
            request.body.len()
        );

        let response = match self.runtime.invoke_model(request).await {
            Ok(response) => response,
            Err(Error::AccessDenied { model_id, message }) => {
                error!(
                    detail = %message,
                    "Access denied. Ensure you have the correct permissions to invoke {}.",
                    model_id
                );
                return Ok(Invocation::PermissionDenied { model_id });
            }
            Err(e) => return Err(e),
        };

        let completions = parse_completions(response.body)?;

        debug!(
            "Received {} completions from {}",
            completions.len(),
            self.config.model_id
        );

        Ok(Invocation::Completions(completions))
    }
}
