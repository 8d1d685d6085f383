use thiserror::Error;

#[derive(Error, Debug)]
pub enum UrlBarError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Public suffix list error at line {line}: {message}")]
    SuffixListError { line: usize, message: String },

    #[error("Input is empty")]
    EmptyInput,

    #[error("Invalid URL '{input}': {reason}")]
    InvalidUrlError { input: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl UrlBarError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            UrlBarError::ConfigValidationError { .. }
            | UrlBarError::InvalidConfigValueError { .. }
            | UrlBarError::MissingConfigError { .. } => ErrorCategory::Configuration,
            UrlBarError::SuffixListError { .. } | UrlBarError::SerializationError(_) => {
                ErrorCategory::Data
            }
            UrlBarError::EmptyInput | UrlBarError::InvalidUrlError { .. } => ErrorCategory::Input,
            UrlBarError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            UrlBarError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
            UrlBarError::SerializationError(_) => {
                "Report this issue, the output could not be encoded".to_string()
            }
            UrlBarError::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' entry in the configuration file", field)
            }
            UrlBarError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            UrlBarError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration", field)
            }
            UrlBarError::SuffixListError { .. } => {
                "Use a list in the public_suffix_list.dat format, or drop --suffix-list to use the bundled list".to_string()
            }
            UrlBarError::EmptyInput => "Type a URL or some search terms".to_string(),
            UrlBarError::InvalidUrlError { .. } => {
                "Check the URL for typos".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Data => format!("Could not process data: {}", self),
            ErrorCategory::Input => format!("Could not handle input: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, UrlBarError>;
