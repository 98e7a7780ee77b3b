//! Ordered, pre-compiled matching rules.
//!
//! A [`RuleSet`] is built once from `(pattern, split-spec JSON)` pairs and is read-only
//! afterwards. Declaration order is match priority: the first rule whose pattern matches a row
//! (and whose `file` filter, if any, accepts the input file) is the one applied.

pub mod spec;

use std::fmt;

use regex::Regex;

use crate::error::{SplitterError, SplitterResult};
use crate::types::SplitSpec;

pub use spec::parse_split_spec;

/// A raw configuration entry: pattern text and its split-spec JSON blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub pattern: String,
    pub split_spec: String,
}

impl RuleEntry {
    pub fn new(pattern: impl Into<String>, split_spec: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            split_spec: split_spec.into(),
        }
    }
}

/// A compiled row pattern.
///
/// Matches when the regex matches at the start of the comma-joined row text.
#[derive(Clone)]
pub struct RowPattern {
    source: String,
    regex: Regex,
}

impl RowPattern {
    /// Compile `pattern`, anchoring it at the start of the row text.
    pub fn new(pattern: &str) -> SplitterResult<Self> {
        let regex = Regex::new(&format!("^(?:{pattern})")).map_err(|e| {
            SplitterError::config(format!("invalid rule pattern '{pattern}': {e}"))
        })?;
        Ok(Self {
            source: pattern.to_owned(),
            regex,
        })
    }

    /// Pattern text as written in the configuration.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, row_text: &str) -> bool {
        self.regex.is_match(row_text)
    }
}

impl fmt::Debug for RowPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RowPattern").field(&self.source).finish()
    }
}

impl PartialEq for RowPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

/// A compiled pattern paired with its parsed split specification.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub pattern: RowPattern,
    pub spec: SplitSpec,
}

impl Rule {
    /// Compile one configuration entry.
    pub fn from_entry(entry: &RuleEntry) -> SplitterResult<Self> {
        let pattern = RowPattern::new(&entry.pattern)?;
        let spec = parse_split_spec(&entry.split_spec).map_err(|e| match e {
            SplitterError::Config { message } => SplitterError::config(format!(
                "rule '{}': {message}",
                entry.pattern
            )),
            other => other,
        })?;
        Ok(Self { pattern, spec })
    }
}

/// Rules in match-priority order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile and validate every entry, preserving order.
    ///
    /// Fails with [`SplitterError::Config`] on the first invalid pattern or split spec.
    pub fn from_entries<'a, I>(entries: I) -> SplitterResult<Self>
    where
        I: IntoIterator<Item = &'a RuleEntry>,
    {
        let rules = entries
            .into_iter()
            .map(Rule::from_entry)
            .collect::<SplitterResult<Vec<_>>>()?;
        tracing::debug!(rules = rules.len(), "loaded rule set");
        Ok(Self { rules })
    }

    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Iterate rules in match-priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
