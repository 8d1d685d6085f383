//! Public Suffix List engine.
//!
//! Parses the `public_suffix_list.dat` format and answers suffix queries with
//! the standard algorithm: exception rules win, otherwise the matching rule
//! with the most labels wins. The implicit `*` rule is not reported, so a
//! domain under an unlisted TLD has no known suffix.

use crate::utils::error::{Result, UrlBarError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

const EMBEDDED_LIST: &str = include_str!("../../data/public_suffix_list.dat");

const BEGIN_ICANN: &str = "===BEGIN ICANN DOMAINS===";
const BEGIN_PRIVATE: &str = "===BEGIN PRIVATE DOMAINS===";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Icann,
    Private,
    /// Rules appearing outside any section marker.
    Unspecified,
}

#[derive(Debug, Clone, Default)]
pub struct PublicSuffixList {
    rules: HashMap<String, Section>,
    // keyed by the part after "*."
    wildcards: HashMap<String, Section>,
    // keyed by the part after "!"
    exceptions: HashMap<String, Section>,
}

impl PublicSuffixList {
    /// The full publicsuffix.org list bundled with the crate.
    pub fn embedded() -> Result<Self> {
        let list = Self::parse(EMBEDDED_LIST)?;
        tracing::debug!("📚 Using {} bundled public suffix rules", list.len());
        Ok(list)
    }

    /// 從檔案非同步載入清單
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(path.as_ref()).await?;
        let list = Self::parse(&content)?;
        tracing::info!(
            "📚 Loaded {} public suffix rules from {}",
            list.len(),
            path.as_ref().display()
        );
        Ok(list)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut list = Self::default();
        let mut section = Section::Unspecified;

        for (index, raw) in content.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();

            if let Some(comment) = line.strip_prefix("//") {
                let comment = comment.trim();
                if comment.starts_with(BEGIN_ICANN) {
                    section = Section::Icann;
                } else if comment.starts_with(BEGIN_PRIVATE) {
                    section = Section::Private;
                } else if comment.starts_with("===END") {
                    section = Section::Unspecified;
                }
                continue;
            }

            // 只取第一個欄位作為規則
            let Some(rule) = line.split_whitespace().next() else {
                continue;
            };
            let rule = rule.to_lowercase();

            if let Some(exception) = rule.strip_prefix('!') {
                check_labels(exception, line_no)?;
                list.exceptions.insert(exception.to_string(), section);
            } else if let Some(base) = rule.strip_prefix("*.") {
                check_labels(base, line_no)?;
                list.wildcards.insert(base.to_string(), section);
            } else {
                check_labels(&rule, line_no)?;
                list.rules.insert(rule, section);
            }
        }

        if list.is_empty() {
            return Err(UrlBarError::SuffixListError {
                line: 0,
                message: "list contains no rules".to_string(),
            });
        }

        tracing::debug!(
            rules = list.rules.len(),
            wildcards = list.wildcards.len(),
            exceptions = list.exceptions.len(),
            "parsed public suffix list"
        );
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.rules.len() + self.wildcards.len() + self.exceptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of rules of every kind declared in `section`.
    pub fn section_len(&self, section: Section) -> usize {
        [&self.rules, &self.wildcards, &self.exceptions]
            .iter()
            .map(|rules| rules.values().filter(|s| **s == section).count())
            .sum()
    }

    /// Returns the public suffix of `domain`, e.g. `co.uk` for `www.bbc.co.uk`.
    pub fn get_public_suffix(&self, domain: &str) -> Option<String> {
        let labels = normalize_domain(domain)?;
        let count = self.suffix_label_count(&labels)?;
        Some(labels[labels.len() - count..].join("."))
    }

    /// True when `domain` is exactly a public suffix.
    pub fn is_public_suffix(&self, domain: &str) -> bool {
        match normalize_domain(domain) {
            Some(labels) => self.suffix_label_count(&labels) == Some(labels.len()),
            None => false,
        }
    }

    /// Returns the registrable domain: the public suffix plus one label.
    pub fn get_public_suffix_plus_one(&self, domain: &str) -> Option<String> {
        let labels = normalize_domain(domain)?;
        let count = self.suffix_label_count(&labels)?;
        if count >= labels.len() {
            return None;
        }
        Some(labels[labels.len() - count - 1..].join("."))
    }

    /// Removes the public suffix and its dot. Returns `domain` unchanged when
    /// there is nothing to strip.
    pub fn strip_public_suffix(&self, domain: &str) -> String {
        let Some(labels) = normalize_domain(domain) else {
            return domain.to_string();
        };
        match self.suffix_label_count(&labels) {
            Some(count) if count < labels.len() => labels[..labels.len() - count].join("."),
            _ => domain.to_string(),
        }
    }

    fn suffix_label_count(&self, labels: &[String]) -> Option<usize> {
        let n = labels.len();

        for i in 0..n {
            if self.exceptions.contains_key(&labels[i..].join(".")) {
                let count = n - i - 1;
                return (count > 0).then_some(count);
            }
        }

        // 由長到短，第一個命中的就是最長規則
        for i in 0..n {
            let count = n - i;
            if self.rules.contains_key(&labels[i..].join(".")) {
                return Some(count);
            }
            if i + 1 < n && self.wildcards.contains_key(&labels[i + 1..].join(".")) {
                return Some(count);
            }
        }

        None
    }
}

fn check_labels(rule: &str, line: usize) -> Result<()> {
    if rule.is_empty() || rule.split('.').any(|label| label.is_empty()) {
        return Err(UrlBarError::SuffixListError {
            line,
            message: format!("empty label in rule '{}'", rule),
        });
    }
    if rule.contains(['*', '!']) {
        return Err(UrlBarError::SuffixListError {
            line,
            message: format!("misplaced wildcard or exception marker in rule '{}'", rule),
        });
    }
    Ok(())
}

fn normalize_domain(domain: &str) -> Option<Vec<String>> {
    let domain = domain.trim();
    let domain = domain.strip_suffix('.').unwrap_or(domain).to_lowercase();
    if domain.is_empty() {
        return None;
    }
    let labels: Vec<String> = domain.split('.').map(str::to_string).collect();
    if labels.iter().any(|label| label.is_empty()) {
        return None;
    }
    Some(labels)
}
