// Adapters layer: concrete sources for data the core needs.

pub mod suffix_source;

pub use suffix_source::{EmbeddedSuffixList, FileSuffixList};
