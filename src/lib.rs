pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::toml_config::TomlConfig;
pub use self::core::classifier::{is_search_term, is_url_like, to_normalized_url};
pub use self::core::display::{to_display_url, DisplayOptions, FirstStrongLtr, TextDirectionHeuristic};
pub use self::core::public_suffix::PublicSuffixList;
pub use self::core::resolver::Resolver;
pub use self::core::suffix_check::url_has_public_suffix;
pub use self::core::web_url::is_valid_web_url;
pub use domain::model::{Classification, InputKind, Resolution, SearchEngine};
pub use utils::error::{Result, UrlBarError};
