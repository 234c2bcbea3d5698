#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod client;
mod config;
mod error;
mod response;

pub use crate::client::AstraClient;
pub use crate::config::{AstraConfig, DEFAULT_KEYSPACE};
pub use crate::error::{AstraError, AstraResult};
pub use crate::response::InsertManyResult;

/// Tracing target for Data API operations.
pub const TRACING_TARGET: &str = "feedlens_astra";
