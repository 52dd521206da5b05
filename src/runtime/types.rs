use serde::Deserialize;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// One `InvokeModel` call as the runtime sees it: an opaque body addressed to a model.
#[derive(Debug, Clone, PartialEq)]
pub struct InvokeModelRequest {
    pub model_id: String,
    pub body: Vec<u8>,
    pub content_type: String,
    pub accept: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvokeModelResponse {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

impl InvokeModelRequest {
    pub fn json(model_id: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            model_id: model_id.into(),
            body,
            content_type: JSON_CONTENT_TYPE.to_string(),
            accept: JSON_CONTENT_TYPE.to_string(),
        }
    }
}

impl InvokeModelResponse {
    pub fn json(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            content_type: Some(JSON_CONTENT_TYPE.to_string()),
        }
    }
}

/// Error document returned alongside a non-2xx status.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ServiceErrorBody {
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
    #[serde(default, rename = "__type")]
    pub error_type: Option<String>,
}
