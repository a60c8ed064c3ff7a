//! Targeted rewrites of single keys in one table, used for the voice toggle.
//!
//! Only the value column of listed keys changes; script conversion and
//! substitution rules are never applied here.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use indexmap::IndexMap;
use unic_langid::LanguageIdentifier;

use crate::{
    config::Config,
    document::LocaleFile,
    error::Error,
    pipeline::Pipeline,
    record::Line,
    traits::Parser,
};

/// Which voice and logo assets the traditional-Chinese locale points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceLocale {
    English,
    Chinese,
}

impl FromStr for VoiceLocale {
    type Err = Error;

    /// Accepts any language tag whose primary language is `en` or `zh`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let langid: LanguageIdentifier = s
            .trim()
            .replace('_', "-")
            .parse()
            .map_err(|_| Error::InvalidLocale(s.to_string()))?;
        match langid.language.as_str() {
            "en" => Ok(VoiceLocale::English),
            "zh" => Ok(VoiceLocale::Chinese),
            _ => Err(Error::InvalidLocale(s.to_string())),
        }
    }
}

impl fmt::Display for VoiceLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoiceLocale::English => write!(f, "en"),
            VoiceLocale::Chinese => write!(f, "zh"),
        }
    }
}

/// Outcome of patching one file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatchReport {
    pub path: PathBuf,
    /// Keys whose value was actually rewritten, in file order.
    pub changed_keys: Vec<String>,
    /// Mapped keys that did not appear as records in the file.
    pub missing_keys: Vec<String>,
}

/// Rewrites the values of the keys in `values`, leaving every other byte of
/// the file as it was. The file is fully read and closed before it is
/// written back.
pub fn patch_file<P: AsRef<Path>>(
    path: P,
    values: &IndexMap<String, String>,
) -> Result<PatchReport, Error> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::missing_path("patch target", path));
    }

    let mut file = LocaleFile::read_from(path)?;
    let pipeline = Pipeline::overrides_only(values);

    let mut report = PatchReport {
        path: path.to_path_buf(),
        ..Default::default()
    };
    let mut seen = Vec::new();
    for line in &mut file.lines {
        let Line::Record(record) = line else {
            continue;
        };
        if !values.contains_key(&record.key) {
            continue;
        }
        seen.push(record.key.clone());
        if pipeline.transform(record) {
            report.changed_keys.push(record.key.clone());
        }
    }
    report.missing_keys = values
        .keys()
        .filter(|key| !seen.contains(key))
        .cloned()
        .collect();

    if !report.missing_keys.is_empty() {
        tracing::warn!(
            "Keys not found in {}: {}",
            path.display(),
            report.missing_keys.join(", ")
        );
    }

    file.write_to(path)?;
    tracing::info!(
        "Patched {} ({} value(s) changed)",
        path.display(),
        report.changed_keys.len()
    );
    Ok(report)
}

/// Points the configured patch file at the assets for `locale`.
pub fn switch_voice(config: &Config, locale: VoiceLocale) -> Result<PatchReport, Error> {
    tracing::info!("Switching voice assets to `{}`", locale);
    patch_file(&config.patch_file, config.voice.for_locale(locale))
}
