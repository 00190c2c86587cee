pub mod cli;
pub mod config;
pub mod error;
pub mod filter;

pub use error::{FilterError, FilterResult};
pub use filter::{filter_stream, ConditionalFilter, FilterStats};
