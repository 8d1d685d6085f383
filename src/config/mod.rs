#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "urlbar")]
#[command(about = "Classify address bar input as URL or search, and normalize URLs")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Public suffix list file, overrides [public_suffix] path
    #[arg(long, global = true)]
    pub suffix_list: Option<String>,

    /// Only treat scheme-less input as a URL when it ends in a known public suffix
    #[arg(long, global = true)]
    pub strict: bool,

    /// Print one JSON object per input
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Report URL/search classification, normalized and display forms
    Classify {
        /// Inputs to process; read from stdin when omitted
        inputs: Vec<String>,
    },
    /// Print the navigable form of each input
    Normalize { inputs: Vec<String> },
    /// Print the shortened display form of each URL
    Display {
        /// Drop everything after the host
        #[arg(long)]
        strip_trailing_data: bool,
        inputs: Vec<String>,
    },
    /// Print the public suffix and registrable domain of each input
    Suffix { inputs: Vec<String> },
    /// Print the URL the address bar would load for each input
    Resolve { inputs: Vec<String> },
}

#[cfg(feature = "cli")]
impl Command {
    pub fn inputs(&self) -> &[String] {
        match self {
            Command::Classify { inputs }
            | Command::Normalize { inputs }
            | Command::Display { inputs, .. }
            | Command::Suffix { inputs }
            | Command::Resolve { inputs } => inputs,
        }
    }
}
