use crate::core::display::DisplayOptions;
use crate::domain::model::SearchEngine;
use crate::utils::error::{Result, UrlBarError};
use crate::utils::validation::{validate_path, validate_required_field, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub search: Option<SearchConfig>,
    pub public_suffix: Option<PublicSuffixConfig>,
    pub display: Option<DisplayConfig>,
    pub classification: Option<ClassificationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub name: Option<String>,
    pub template: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicSuffixConfig {
    /// Path to a `public_suffix_list.dat` file.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub strip_trailing_data: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationConfig {
    pub strict: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(UrlBarError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| UrlBarError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SEARCH_TEMPLATE})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// The configured search engine, falling back to the default one.
    pub fn search_engine(&self) -> Result<SearchEngine> {
        let Some(search) = &self.search else {
            return Ok(SearchEngine::default());
        };
        let template = validate_required_field("search.template", &search.template)?;
        let name = search.name.clone().unwrap_or_else(|| "Custom".to_string());
        Ok(SearchEngine::new(name, template.clone()))
    }

    pub fn suffix_list_path(&self) -> Option<&str> {
        self.public_suffix.as_ref().and_then(|p| p.path.as_deref())
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            strip_trailing_data: self
                .display
                .as_ref()
                .and_then(|d| d.strip_trailing_data)
                .unwrap_or(false),
        }
    }

    pub fn strict(&self) -> bool {
        self.classification
            .as_ref()
            .and_then(|c| c.strict)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.search_engine()?.validate()?;

        if let Some(public_suffix) = &self.public_suffix {
            let path = validate_required_field("public_suffix.path", &public_suffix.path)?;
            validate_path("public_suffix.path", path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[search]
name = "Example"
template = "https://search.example/?q={searchTerms}"

[public_suffix]
path = "/usr/share/publicsuffix/public_suffix_list.dat"

[display]
strip_trailing_data = true

[classification]
strict = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());

        let engine = config.search_engine().unwrap();
        assert_eq!(engine.name, "Example");
        assert_eq!(engine.template, "https://search.example/?q={searchTerms}");
        assert_eq!(
            config.suffix_list_path(),
            Some("/usr/share/publicsuffix/public_suffix_list.dat")
        );
        assert!(config.display_options().strip_trailing_data);
        assert!(config.strict());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.search_engine().unwrap(), SearchEngine::default());
        assert_eq!(config.suffix_list_path(), None);
        assert!(!config.display_options().strip_trailing_data);
        assert!(!config.strict());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("URLBAR_TEST_TEMPLATE", "https://env.example/?q={searchTerms}");

        let toml_content = r#"
[search]
template = "${URLBAR_TEST_TEMPLATE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let engine = config.search_engine().unwrap();
        assert_eq!(engine.template, "https://env.example/?q={searchTerms}");
        assert_eq!(engine.name, "Custom");

        std::env::remove_var("URLBAR_TEST_TEMPLATE");
    }

    #[test]
    fn test_unset_env_var_is_kept() {
        let config = TomlConfig::from_toml_str(
            "[public_suffix]\npath = \"${URLBAR_TEST_DEFINITELY_UNSET}\"\n",
        )
        .unwrap();
        assert_eq!(config.suffix_list_path(), Some("${URLBAR_TEST_DEFINITELY_UNSET}"));
    }

    #[test]
    fn test_config_validation() {
        let missing_template = TomlConfig::from_toml_str("[search]\nname = \"x\"\n").unwrap();
        assert!(matches!(
            missing_template.validate(),
            Err(UrlBarError::MissingConfigError { .. })
        ));

        let bad_template =
            TomlConfig::from_toml_str("[search]\ntemplate = \"https://s.example/\"\n").unwrap();
        assert!(bad_template.validate().is_err());

        let empty_path = TomlConfig::from_toml_str("[public_suffix]\npath = \"\"\n").unwrap();
        assert!(empty_path.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let result = TomlConfig::from_toml_str("[search\n");
        assert!(matches!(result, Err(UrlBarError::ConfigValidationError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[classification]\nstrict = true\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert!(config.strict());
    }
}
