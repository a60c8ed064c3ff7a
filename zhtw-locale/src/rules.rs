//! Substitution and override rule files.
//!
//! Both files use one `left,right` pair per line, split on the first comma.
//! Blank lines and lines starting with `#` are ignored. Sources are read in
//! priority order, lowest first: substitutions are appended in that order,
//! overrides from later sources replace earlier ones for the same key.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::{encoding::decode_utf8_lossy, error::Error};

const DELIMITER: char = ',';

/// A literal `old -> new` replacement applied to record values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub old: String,
    pub new: String,
}

impl Substitution {
    /// Replaces every non-overlapping occurrence of `old`. An empty `old`
    /// matches nothing.
    pub fn apply(&self, value: &str) -> String {
        if self.old.is_empty() {
            value.to_string()
        } else {
            value.replace(&self.old, &self.new)
        }
    }
}

/// All rules loaded for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleSet {
    /// Applied first to last, each on the previous result.
    pub substitutions: Vec<Substitution>,
    /// Key to replacement value; wins over every other step.
    pub overrides: IndexMap<String, String>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_substitution(&mut self, old: impl Into<String>, new: impl Into<String>) {
        self.substitutions.push(Substitution {
            old: old.into(),
            new: new.into(),
        });
    }

    /// Inserts an override, replacing any earlier value for the key.
    pub fn insert_override(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.overrides.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty() && self.overrides.is_empty()
    }

    /// Loads `substitution_file` and `override_file` from each directory in
    /// `dirs`, lowest priority first.
    pub fn load_from_dirs<P: AsRef<Path>>(
        dirs: &[P],
        substitution_file: &str,
        override_file: &str,
    ) -> (Self, RuleLoadReport) {
        let substitution_paths: Vec<PathBuf> = dirs
            .iter()
            .map(|d| d.as_ref().join(substitution_file))
            .collect();
        let override_paths: Vec<PathBuf> = dirs
            .iter()
            .map(|d| d.as_ref().join(override_file))
            .collect();
        Self::load(&substitution_paths, &override_paths)
    }

    /// Loads rules from explicit source lists. Missing sources contribute
    /// nothing; malformed lines and unreadable files are recorded in the
    /// report and skipped.
    pub fn load<P: AsRef<Path>>(substitution_paths: &[P], override_paths: &[P]) -> (Self, RuleLoadReport) {
        let mut rules = RuleSet::new();
        let mut report = RuleLoadReport::default();

        for path in substitution_paths {
            for (old, new) in load_source(path.as_ref(), &mut report) {
                rules.push_substitution(old, new);
            }
        }
        for path in override_paths {
            for (key, value) in load_source(path.as_ref(), &mut report) {
                rules.insert_override(key, value);
            }
        }

        tracing::info!(
            "Loaded {} substitution rule(s) and {} override(s)",
            rules.substitutions.len(),
            rules.overrides.len()
        );
        (rules, report)
    }
}

/// A rule line without a delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRule {
    pub path: PathBuf,
    /// 1-based.
    pub line_number: usize,
    pub content: String,
}

/// What happened while loading rule sources.
#[derive(Debug, Default)]
pub struct RuleLoadReport {
    pub loaded: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
    pub malformed: Vec<MalformedRule>,
    pub failed: Vec<(PathBuf, Error)>,
}

/// Result of parsing one rule file's text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedRules {
    pub entries: Vec<(String, String)>,
    /// `(line_number, content)` of lines without a delimiter.
    pub malformed: Vec<(usize, String)>,
}

/// Parses rule text. Fields are taken literally, without trimming.
pub fn parse_rules(text: &str) -> ParsedRules {
    let mut parsed = ParsedRules::default();
    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match line.split_once(DELIMITER) {
            Some((left, right)) => parsed.entries.push((left.to_string(), right.to_string())),
            None => parsed.malformed.push((index + 1, line.to_string())),
        }
    }
    parsed
}

fn load_source(path: &Path, report: &mut RuleLoadReport) -> Vec<(String, String)> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("Rule file not found, skipping: {}", path.display());
            report.missing.push(path.to_path_buf());
            return Vec::new();
        }
        Err(e) => {
            tracing::error!("Failed to read rule file {}: {}", path.display(), e);
            report.failed.push((path.to_path_buf(), Error::Io(e)));
            return Vec::new();
        }
    };

    let (text, had_errors) = decode_utf8_lossy(&bytes);
    if had_errors {
        tracing::warn!(
            "Rule file {} is not valid UTF-8; invalid bytes were replaced",
            path.display()
        );
    }

    let parsed = parse_rules(&text);
    for (line_number, content) in parsed.malformed {
        tracing::warn!(
            "Skipping malformed rule at {}:{}: {:?}",
            path.display(),
            line_number,
            content
        );
        report.malformed.push(MalformedRule {
            path: path.to_path_buf(),
            line_number,
            content,
        });
    }
    tracing::debug!("Read {} rule(s) from {}", parsed.entries.len(), path.display());
    report.loaded.push(path.to_path_buf());
    parsed.entries
}
