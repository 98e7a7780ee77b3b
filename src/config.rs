//! Configuration file model.
//!
//! ```toml
//! [main]
//! inputdir = "/data/in"
//! outputdir = "/data/out"
//!
//! [Splitters]
//! "^2024-" = '{"rowsToSplit":[1],"split":{"A":"0.30","B":"0.70"}}'
//! ".*" = '{"rowsToSplit":[],"split":{"other":"1"}}'
//! ```
//!
//! `[Splitters]` keys are row patterns and their order is match priority. Locating the file is
//! left to the caller; nothing here reads the environment.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{SplitterError, SplitterResult};
use crate::rules::{RuleEntry, RuleSet};

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    main: MainSection,
    #[serde(rename = "Splitters", default)]
    splitters: toml::Table,
}

#[derive(Debug, Default, Deserialize)]
struct MainSection {
    inputdir: Option<String>,
    outputdir: Option<String>,
}

/// Settings merged from the configuration file and command-line overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    /// Rule entries in declaration order.
    pub rules: Vec<RuleEntry>,
}

impl Config {
    /// Parse configuration text.
    pub fn from_toml_str(text: &str) -> SplitterResult<Self> {
        let raw: RawConfig = toml::from_str(text)?;

        let rules = raw
            .splitters
            .into_iter()
            .map(|(pattern, value)| match value {
                toml::Value::String(spec) => Ok(RuleEntry::new(pattern, spec)),
                other => Err(SplitterError::config(format!(
                    "splitter '{pattern}' must be a JSON string, found {}",
                    other.type_str()
                ))),
            })
            .collect::<SplitterResult<Vec<_>>>()?;

        Ok(Self {
            input_dir: non_empty_path(raw.main.inputdir),
            output_dir: non_empty_path(raw.main.outputdir),
            rules,
        })
    }

    /// Read and parse the configuration file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> SplitterResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading config");
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Replace directories with command-line values where given.
    pub fn with_overrides(
        mut self,
        input_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = input_dir {
            self.input_dir = Some(dir);
        }
        if let Some(dir) = output_dir {
            self.output_dir = Some(dir);
        }
        self
    }

    /// Input and output directories, if both are set.
    pub fn directories(&self) -> Option<(&Path, &Path)> {
        Some((self.input_dir.as_deref()?, self.output_dir.as_deref()?))
    }

    /// Compile the rule entries.
    pub fn rule_set(&self) -> SplitterResult<RuleSet> {
        RuleSet::from_entries(&self.rules)
    }
}

fn non_empty_path(value: Option<String>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}
