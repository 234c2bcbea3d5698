#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;
mod session;
mod state;

pub mod handler;

pub use crate::error::{Error, Result};
pub use crate::session::SessionStore;
pub use crate::state::AppState;
