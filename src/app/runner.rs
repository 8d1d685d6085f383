use crate::adapters::{EmbeddedSuffixList, FileSuffixList};
use crate::config::toml_config::TomlConfig;
use crate::config::{CliConfig, Command};
use crate::core::classifier::{is_url_like, to_normalized_url};
use crate::core::display::{to_display_url, DisplayOptions, FirstStrongLtr};
use crate::core::resolver::Resolver;
use crate::core::suffix_check::display_host;
use crate::core::web_url::is_valid_web_url;
use crate::domain::model::SearchEngine;
use crate::domain::ports::SuffixListSource;
use crate::utils::error::{Result, UrlBarError};
use crate::utils::validation::Validate;
use serde_json::json;
use std::io::Write;

/// Effective settings after layering CLI flags over the config file.
pub struct Settings {
    pub engine: SearchEngine,
    pub suffix_source: Box<dyn SuffixListSource>,
    pub strict: bool,
    pub display: DisplayOptions,
    pub json: bool,
}

impl Settings {
    pub fn from_sources(cli: &CliConfig, file: &TomlConfig) -> Result<Self> {
        file.validate()?;

        let suffix_source: Box<dyn SuffixListSource> =
            match cli.suffix_list.as_deref().or(file.suffix_list_path()) {
                Some(path) => Box::new(FileSuffixList::new(path)),
                None => Box::new(EmbeddedSuffixList),
            };

        let mut display = file.display_options();
        if let Command::Display {
            strip_trailing_data: true,
            ..
        } = cli.command
        {
            display.strip_trailing_data = true;
        }

        Ok(Self {
            engine: file.search_engine()?,
            suffix_source,
            strict: cli.strict || file.strict(),
            display,
            json: cli.json,
        })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub failed: usize,
}

pub struct UrlBarApp {
    resolver: Resolver,
    display: DisplayOptions,
    json: bool,
}

impl UrlBarApp {
    pub async fn from_settings(settings: Settings) -> Result<Self> {
        tracing::debug!("Loading public suffix list from {}", settings.suffix_source.describe());
        let suffixes = settings.suffix_source.load().await?;

        let resolver = Resolver::new(settings.engine, suffixes, settings.strict)
            .with_display_options(settings.display);

        Ok(Self {
            resolver,
            display: settings.display,
            json: settings.json,
        })
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// 逐筆處理輸入；單筆失敗只記錄，不中斷整批
    pub fn run<W: Write>(&self, command: &Command, inputs: &[String], out: &mut W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for input in inputs {
            match self.render(command, input) {
                Ok(line) => {
                    writeln!(out, "{}", line)?;
                    summary.processed += 1;
                }
                Err(e @ (UrlBarError::EmptyInput | UrlBarError::InvalidUrlError { .. })) => {
                    tracing::warn!("⚠️ Skipping '{}': {}", input, e);
                    summary.failed += 1;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            "✅ Processed {} inputs ({} skipped)",
            summary.processed,
            summary.failed
        );
        Ok(summary)
    }

    fn render(&self, command: &Command, input: &str) -> Result<String> {
        match command {
            Command::Classify { .. } => {
                non_empty(input)?;
                let classification = self.resolver.classify(input);
                if self.json {
                    return Ok(serde_json::to_string(&classification)?);
                }
                Ok(format!(
                    "{}\t{}\t{}\t{}\t{}",
                    input.trim(),
                    if classification.normalized.is_some() { "url" } else { "search" },
                    classification.normalized.as_deref().unwrap_or("-"),
                    classification.display.as_deref().unwrap_or("-"),
                    if classification.has_public_suffix { "suffix" } else { "-" },
                ))
            }
            Command::Normalize { .. } => {
                let trimmed = non_empty(input)?;
                if !is_url_like(trimmed) {
                    return Err(UrlBarError::InvalidUrlError {
                        input: trimmed.to_string(),
                        reason: "looks like a search term".to_string(),
                    });
                }
                let normalized = to_normalized_url(trimmed);
                if self.json {
                    return Ok(serde_json::to_string(
                        &json!({ "input": trimmed, "normalized": normalized }),
                    )?);
                }
                Ok(normalized)
            }
            Command::Display { .. } => {
                let display = to_display_url(input, &FirstStrongLtr, self.display.strip_trailing_data);
                if self.json {
                    return Ok(serde_json::to_string(&json!({ "input": input, "display": display }))?);
                }
                Ok(display)
            }
            Command::Suffix { .. } => {
                let trimmed = non_empty(input)?;
                let host = if is_valid_web_url(trimmed) {
                    display_host(trimmed)
                } else {
                    trimmed.to_string()
                };
                let suffixes = self.resolver.suffixes();
                let suffix = suffixes.get_public_suffix(&host);
                let plus_one = suffixes.get_public_suffix_plus_one(&host);
                if self.json {
                    return Ok(serde_json::to_string(&json!({
                        "input": trimmed,
                        "host": host,
                        "public_suffix": suffix,
                        "registrable_domain": plus_one,
                    }))?);
                }
                Ok(format!(
                    "{}\t{}\t{}",
                    host,
                    suffix.as_deref().unwrap_or("-"),
                    plus_one.as_deref().unwrap_or("-"),
                ))
            }
            Command::Resolve { .. } => {
                let resolution = self.resolver.resolve(input)?;
                if self.json {
                    return Ok(serde_json::to_string(&resolution)?);
                }
                Ok(resolution.url().to_string())
            }
        }
    }
}

fn non_empty(input: &str) -> Result<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlBarError::EmptyInput);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    async fn app(args: &[&str]) -> (UrlBarApp, Command) {
        let cli = CliConfig::parse_from(std::iter::once("urlbar").chain(args.iter().copied()));
        let settings = Settings::from_sources(&cli, &TomlConfig::default()).unwrap();
        (UrlBarApp::from_settings(settings).await.unwrap(), cli.command)
    }

    fn run(app: &UrlBarApp, command: &Command, inputs: &[&str]) -> (String, RunSummary) {
        let inputs: Vec<String> = inputs.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        let summary = app.run(command, &inputs, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[tokio::test]
    async fn test_classify_text_output() {
        let (app, command) = app(&["classify"]).await;
        let (out, summary) = run(&app, &command, &["HTTPS://www.mozilla.org/", "sf: help"]);
        assert_eq!(
            out,
            "HTTPS://www.mozilla.org/\turl\thttps://www.mozilla.org/\tmozilla.org\tsuffix\n\
             sf: help\tsearch\t-\t-\t-\n"
        );
        assert_eq!(summary, RunSummary { processed: 2, failed: 0 });
    }

    #[tokio::test]
    async fn test_resolve_json_output() {
        let (app, command) = app(&["--json", "resolve"]).await;
        let (out, _) = run(&app, &command, &["mozilla android"]);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["action"], "search");
        assert_eq!(value["url"], "https://duckduckgo.com/?q=mozilla+android");
    }

    #[tokio::test]
    async fn test_blank_inputs_are_skipped() {
        let (app, command) = app(&["resolve"]).await;
        let (out, summary) = run(&app, &command, &["  ", "mozilla.org"]);
        assert_eq!(out, "http://mozilla.org\n");
        assert_eq!(summary, RunSummary { processed: 1, failed: 1 });
    }

    #[tokio::test]
    async fn test_normalize_rejects_search_terms() {
        let (app, command) = app(&["normalize"]).await;
        let (out, summary) = run(&app, &command, &["HTTP://mozilla.org", "cnn.com politics"]);
        assert_eq!(out, "http://mozilla.org\n");
        assert_eq!(summary, RunSummary { processed: 1, failed: 1 });
    }

    #[tokio::test]
    async fn test_display_strip_flag() {
        let (app, command) = app(&["display", "--strip-trailing-data"]).await;
        let (out, _) = run(&app, &command, &["https://www.mozilla.org/en-GB/firefox/"]);
        assert_eq!(out, "mozilla.org\n");
    }

    #[tokio::test]
    async fn test_suffix_output() {
        let (app, command) = app(&["suffix"]).await;
        let (out, _) = run(&app, &command, &["https://www.bbc.co.uk/news", "link.unknown"]);
        assert_eq!(out, "bbc.co.uk\tco.uk\tbbc.co.uk\nlink.unknown\t-\t-\n");
    }

    #[tokio::test]
    async fn test_classify_skips_blank_inputs() {
        let (app, command) = app(&["classify"]).await;
        let (out, summary) = run(&app, &command, &["", "   ", "cnn.com"]);
        assert_eq!(out, "cnn.com\turl\thttp://cnn.com\tcnn.com\tsuffix\n");
        assert_eq!(summary, RunSummary { processed: 1, failed: 2 });
    }

    fn file_config() -> TomlConfig {
        TomlConfig::from_toml_str(
            r#"
[public_suffix]
path = "/srv/lists/from_file.dat"

[display]
strip_trailing_data = true

[classification]
strict = true
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_settings_default_sources() {
        let cli = CliConfig::parse_from(["urlbar", "resolve"]);
        let settings = Settings::from_sources(&cli, &TomlConfig::default()).unwrap();
        assert_eq!(settings.suffix_source.describe(), "embedded");
        assert!(!settings.strict);
        assert!(!settings.display.strip_trailing_data);
        assert!(!settings.json);
    }

    #[test]
    fn test_settings_take_file_values_without_flags() {
        let cli = CliConfig::parse_from(["urlbar", "display"]);
        let settings = Settings::from_sources(&cli, &file_config()).unwrap();
        assert_eq!(settings.suffix_source.describe(), "/srv/lists/from_file.dat");
        assert!(settings.strict);
        assert!(settings.display.strip_trailing_data);
    }

    #[test]
    fn test_cli_suffix_list_overrides_file_path() {
        let cli = CliConfig::parse_from(["urlbar", "--suffix-list", "/tmp/from_cli.dat", "resolve"]);
        let settings = Settings::from_sources(&cli, &file_config()).unwrap();
        assert_eq!(settings.suffix_source.describe(), "/tmp/from_cli.dat");
        // 其餘設定仍沿用配置檔
        assert!(settings.strict);
    }

    #[test]
    fn test_cli_flags_enable_settings() {
        let cli = CliConfig::parse_from(["urlbar", "--strict", "--json", "display", "--strip-trailing-data"]);
        let settings = Settings::from_sources(&cli, &TomlConfig::default()).unwrap();
        assert!(settings.strict);
        assert!(settings.json);
        assert!(settings.display.strip_trailing_data);
    }

    #[tokio::test]
    async fn test_strict_from_file_config() {
        let config = TomlConfig::from_toml_str("[classification]\nstrict = true\n").unwrap();
        let cli = CliConfig::parse_from(["urlbar", "resolve"]);
        let settings = Settings::from_sources(&cli, &config).unwrap();
        let app = UrlBarApp::from_settings(settings).await.unwrap();

        let (out, _) = run(&app, &cli.command, &["link.unknown", "bit.ly"]);
        assert_eq!(out, "https://duckduckgo.com/?q=link.unknown\nhttp://bit.ly\n");
    }

    #[tokio::test]
    async fn test_malformed_suffix_list_file() {
        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut temp_file, b"com\na..b\n").unwrap();

        let path = temp_file.path().to_string_lossy().to_string();
        let cli = CliConfig::parse_from(["urlbar", "--suffix-list", path.as_str(), "classify"]);
        let settings = Settings::from_sources(&cli, &TomlConfig::default()).unwrap();
        let result = UrlBarApp::from_settings(settings).await;
        assert!(matches!(result, Err(UrlBarError::SuffixListError { line: 2, .. })));
    }

    #[tokio::test]
    async fn test_missing_suffix_list_file() {
        let cli = CliConfig::parse_from(["urlbar", "--suffix-list", "/no/such/list.dat", "classify"]);
        let settings = Settings::from_sources(&cli, &TomlConfig::default()).unwrap();
        let result = UrlBarApp::from_settings(settings).await;
        assert!(matches!(result, Err(UrlBarError::IoError(_))));
    }
}
