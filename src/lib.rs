pub mod config;
pub mod error;
pub mod invoker;
pub mod runtime;

pub use error::{Error, Result};
pub use invoker::{InferenceInvoker, Invocation};
