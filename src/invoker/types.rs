use serde::{Deserialize, Serialize};

/// Body of a Mistral text-completion `InvokeModel` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestPayload {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stop: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub outputs: Vec<Output>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,
}

/// Outcome of a single invocation that did not hard-fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    /// Completion texts in the order the service returned them.
    Completions(Vec<String>),
    /// The caller may not invoke `model_id`. Distinct from an empty completion list.
    PermissionDenied { model_id: String },
}

impl ResponseBody {
    pub fn into_completions(self) -> Vec<String> {
        self.outputs.into_iter().map(|output| output.text).collect()
    }
}

impl Invocation {
    pub fn completions(&self) -> Option<&[String]> {
        match self {
            Self::Completions(completions) => Some(completions),
            Self::PermissionDenied { .. } => None,
        }
    }

    pub fn into_completions(self) -> Option<Vec<String>> {
        match self {
            Self::Completions(completions) => Some(completions),
            Self::PermissionDenied { .. } => None,
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
