use crate::core::classifier::{is_url_like, scheme_of, to_normalized_url};
use crate::core::display::DisplayOptions;
use crate::core::public_suffix::PublicSuffixList;
use crate::core::suffix_check::{display_host, url_has_public_suffix};
use crate::core::web_url::is_ip_literal;
use crate::domain::model::{Classification, InputKind, Resolution, SearchEngine};
use crate::utils::error::{Result, UrlBarError};
use crate::utils::validation::{validate_contains, validate_non_empty_string, validate_url, Validate};
use url::form_urlencoded;

pub const SEARCH_TERMS_PLACEHOLDER: &str = "{searchTerms}";

impl SearchEngine {
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
        }
    }

    /// Fills the template with form-encoded search terms.
    pub fn build_search_url(&self, terms: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(terms.trim().as_bytes()).collect();
        self.template.replace(SEARCH_TERMS_PLACEHOLDER, &encoded)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new("DuckDuckGo", "https://duckduckgo.com/?q={searchTerms}")
    }
}

impl Validate for SearchEngine {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("search.name", &self.name)?;
        validate_contains("search.template", &self.template, SEARCH_TERMS_PLACEHOLDER)?;
        validate_url("search.template", &self.build_search_url("test"))
    }
}

/// Turns address bar input into a navigation or a search.
#[derive(Debug, Clone)]
pub struct Resolver {
    engine: SearchEngine,
    suffixes: PublicSuffixList,
    strict: bool,
    display: DisplayOptions,
}

impl Resolver {
    /// In `strict` mode, scheme-less input must end in a known public suffix
    /// (or be an IP literal) to be treated as a URL.
    pub fn new(engine: SearchEngine, suffixes: PublicSuffixList, strict: bool) -> Self {
        Self {
            engine,
            suffixes,
            strict,
            display: DisplayOptions::default(),
        }
    }

    pub fn with_display_options(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    pub fn suffixes(&self) -> &PublicSuffixList {
        &self.suffixes
    }

    pub fn resolve(&self, input: &str) -> Result<Resolution> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(UrlBarError::EmptyInput);
        }

        let resolution = if self.treat_as_url(trimmed) {
            Resolution::Navigate {
                url: to_normalized_url(trimmed),
            }
        } else {
            Resolution::Search {
                terms: trimmed.to_string(),
                engine: self.engine.name.clone(),
                url: self.engine.build_search_url(trimmed),
            }
        };

        tracing::debug!(input = trimmed, ?resolution, "resolved address bar input");
        Ok(resolution)
    }

    pub fn classify(&self, input: &str) -> Classification {
        let trimmed = input.trim();
        if !self.treat_as_url(trimmed) {
            return Classification {
                input: input.to_string(),
                kind: InputKind::Search,
                normalized: None,
                display: None,
                has_public_suffix: false,
            };
        }

        let normalized = to_normalized_url(trimmed);
        Classification {
            input: input.to_string(),
            kind: InputKind::Url,
            display: Some(self.display.apply(&normalized)),
            has_public_suffix: url_has_public_suffix(trimmed, &self.suffixes),
            normalized: Some(normalized),
        }
    }

    fn treat_as_url(&self, trimmed: &str) -> bool {
        if !is_url_like(trimmed) {
            return false;
        }
        if !self.strict || scheme_of(trimmed).is_some() {
            return true;
        }
        if url_has_public_suffix(trimmed, &self.suffixes) {
            return true;
        }
        is_ip_literal(&display_host(trimmed))
    }
}
