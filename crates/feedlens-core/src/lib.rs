#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;
mod relay;
mod sink;

pub mod types;

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::relay::{ChatRelay, RelayReply};
pub use crate::sink::DocumentSink;
