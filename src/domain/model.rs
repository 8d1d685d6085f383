use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Url,
    Search,
}

/// Everything the address bar heuristics say about one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub input: String,
    pub kind: InputKind,
    pub normalized: Option<String>,
    pub display: Option<String>,
    pub has_public_suffix: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEngine {
    pub name: String,
    /// Search URL with a `{searchTerms}` placeholder.
    pub template: String,
}

/// What the address bar does with the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Resolution {
    Navigate { url: String },
    Search { terms: String, engine: String, url: String },
}

impl Resolution {
    pub fn url(&self) -> &str {
        match self {
            Resolution::Navigate { url } | Resolution::Search { url, .. } => url,
        }
    }
}
