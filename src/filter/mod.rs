mod directive;
mod engine;
mod types;

pub use directive::{parse_directive, strip_line_ending};
pub use engine::{filter_stream, ConditionalFilter};
pub use types::{Directive, FilterStats};
