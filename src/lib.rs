//! logidice - dice notation roller
//!
//! Evaluates notation like "2x1d20+1d4", "4dF" or "5d10" under plain-sum,
//! Fate, White Wolf or Scion scoring and renders the result for chat hosts.

pub mod commands;
pub mod dice;
pub mod error;
pub mod eval;
pub mod parser;
pub mod render;

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

pub use commands::{Command, CommandRegistry, CommandTable, DicePlugin, RollCommand};
pub use dice::{roll, DieSource, RollOutcome, ScoringMode, ScriptedDice, ThreadRngSource};
pub use error::DiceError;
pub use eval::{Arithmetic, EvalError, Evaluator};
pub use parser::{ParseResult, Roller};
pub use render::{DisplayCapabilities, FormatterKind, Markdown, PlainText, Renderer, TextFormatter};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "logidice.toml";

/// Prefix for environment overrides, e.g. `LOGIDICE_SPOILERS=true`
pub const ENV_PREFIX: &str = "LOGIDICE_";

/// Host configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Opt in to collapsible output where the host supports it
    pub spoilers: bool,
    /// Host can display multi-line replies
    pub multiline: bool,
    /// Host can display collapsible blocks
    pub collapsible: bool,
    /// Markup used for emphasis and collapsible blocks
    pub formatter: FormatterKind,
    /// Log filter used when RUST_LOG is unset
    pub log_filter: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spoilers: false,
            multiline: false,
            collapsible: false,
            formatter: FormatterKind::Markdown,
            log_filter: "logidice=info".to_string(),
            log_json: false,
        }
    }
}

impl Config {
    /// Defaults, then the TOML file, then `LOGIDICE_*` environment variables
    pub fn figment(path: Option<&Path>) -> Figment {
        let file = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load configuration; a missing file just means defaults
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        Self::figment(path).extract()
    }

    /// Effective capabilities: collapsible output needs host support and opt-in
    pub fn capabilities(&self) -> DisplayCapabilities {
        DisplayCapabilities {
            multiline: self.multiline,
            collapsible: self.collapsible && self.spoilers,
        }
    }

    /// Build the dice plugin described by this configuration
    pub fn plugin(&self) -> DicePlugin {
        let formatter = self.formatter.build();
        let roller = Roller::new(formatter.clone());
        DicePlugin::new(roller, Renderer::new(formatter, self.capabilities()))
    }
}
