// crates/csvflat-core/src/lib.rs

pub mod config;
pub mod encode;
pub mod error;
pub mod flatten;
pub mod record;
pub mod sanitize;
pub mod tokenizer;

pub use crate::config::ParserConfig;
pub use crate::error::{FlatError, Result};
pub use crate::flatten::{flatten_stream, FlattenStats};
pub use crate::record::RecordAssembler;
pub use crate::tokenizer::{RecordSink, Tokenizer};
