pub mod classifier;
pub mod display;
pub mod public_suffix;
pub mod resolver;
pub mod suffix_check;
pub mod web_url;

pub use crate::domain::model::{Classification, InputKind, Resolution, SearchEngine};
pub use crate::domain::ports::SuffixListSource;
pub use crate::utils::error::Result;
