//! Remote model runtime seam.
//!
//! [`ModelRuntime`] is the only thing the invoker talks to. The HTTP
//! implementation lives in [`client`]; tests substitute their own.

mod client;
mod types;

pub use client::*;
pub use types::*;

use crate::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelRuntime: Send + Sync {
    /// Sends one request and waits for the reply. Exactly one outbound call, no retries.
    async fn invoke_model(&self, request: InvokeModelRequest) -> Result<InvokeModelResponse>;
}
