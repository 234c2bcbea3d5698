#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod client;
mod config;
mod error;
mod request;
mod response;

pub use crate::client::FlowClient;
pub use crate::config::{DEFAULT_BASE_URL, FlowConfig};
pub use crate::error::{FlowError, FlowResult};
pub use crate::request::RunFlowRequest;
pub use crate::response::RunFlowResponse;

/// Tracing target for flow client operations.
pub const TRACING_TARGET: &str = "feedlens_flow";
