pub mod runner;

pub use runner::{RunSummary, Settings, UrlBarApp};
