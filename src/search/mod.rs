pub mod filter;
pub mod highlight;
pub mod query;
pub mod render;

pub use filter::{filter, filter_indices};
pub use highlight::{Segment, highlight, match_ranges};
pub use query::{Query, fold};
pub use render::{DisplayModel, SuggestionLine, render};
