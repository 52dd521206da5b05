use async_trait::async_trait;
use mixtral_invoke::{
    Error, Result,
    runtime::{InvokeModelRequest, InvokeModelResponse, ModelRuntime},
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Scripted model runtime that records every request it receives
#[derive(Debug, Default)]
pub struct MockRuntime {
    pub outcomes: Arc<Mutex<Vec<Result<InvokeModelResponse>>>>,
    pub requests: Arc<Mutex<Vec<InvokeModelRequest>>>,
}

impl MockRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(self, outcome: Result<InvokeModelResponse>) -> Self {
        self.outcomes.lock().unwrap().push(outcome);
        self
    }

    pub fn with_body(self, body: Value) -> Self {
        self.with_outcome(Ok(InvokeModelResponse::json(body.to_string())))
    }

    pub fn with_error(self, error: Error) -> Self {
        self.with_outcome(Err(error))
    }

    pub fn get_requests(&self) -> Vec<InvokeModelRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelRuntime for MockRuntime {
    async fn invoke_model(&self, request: InvokeModelRequest) -> Result<InvokeModelResponse> {
        self.requests.lock().unwrap().push(request);

        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Err(Error::config("No more mock outcomes available"));
        }

        outcomes.remove(0)
    }
}

/// Builds a response body in the Mistral text-completion shape
pub fn outputs_body(texts: &[&str]) -> Value {
    let outputs: Vec<Value> = texts
        .iter()
        .map(|text| serde_json::json!({ "text": text, "stop_reason": "stop" }))
        .collect();
    serde_json::json!({ "outputs": outputs })
}
