#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod bucket;
mod normalize;
mod pipeline;
mod preview;
mod reader;
mod shape;

pub use crate::bucket::{AgeBucket, TimeBucket, bucket_age, bucket_time, parse_clock};
pub use crate::normalize::normalize;
pub use crate::pipeline::transform;
pub use crate::preview::TablePreview;
pub use crate::reader::read_csv;
pub use crate::shape::{DESCRIPTION_COLUMN, shape};

/// Tracing target for transform operations.
pub const TRACING_TARGET: &str = "feedlens_transform";
