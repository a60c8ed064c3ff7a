//! Run configuration.
//!
//! Every path the tool touches lives here; nothing is looked up from globals.
//! The defaults match the game's layout when run from its install directory.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{error::Error, patch::VoiceLocale};

pub const DEFAULT_INPUT_DIR: &str = "Locale/2052";
pub const DEFAULT_OUTPUT_DIR: &str = "Locale/1029";
pub const DEFAULT_HEADER_PATH: &str = "Locale/Header.txt";
pub const DEFAULT_PATCH_FILE: &str = "Locale/1029/base.txt";
pub const DEFAULT_EXTENSION: &str = "txt";
pub const DEFAULT_SUBSTITUTION_FILE: &str = "substitutions.txt";
pub const DEFAULT_OVERRIDE_FILE: &str = "overrides.txt";

/// Paths, rule sources, and locale maps for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the simplified-Chinese tables.
    pub input_dir: PathBuf,
    /// Directory the traditional-Chinese tables are written to.
    pub output_dir: PathBuf,
    /// Where the locale manifest is written.
    pub header_path: PathBuf,
    /// Table rewritten by the voice toggle.
    pub patch_file: PathBuf,
    /// File-name suffix (without the dot) selecting input tables.
    pub extension: String,
    /// Directories searched for rule files, lowest priority first.
    pub rule_dirs: Vec<PathBuf>,
    pub substitution_file: String,
    pub override_file: String,
    pub voice: VoiceMaps,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            header_path: PathBuf::from(DEFAULT_HEADER_PATH),
            patch_file: PathBuf::from(DEFAULT_PATCH_FILE),
            extension: DEFAULT_EXTENSION.to_string(),
            rule_dirs: executable_dir().into_iter().collect(),
            substitution_file: DEFAULT_SUBSTITUTION_FILE.to_string(),
            override_file: DEFAULT_OVERRIDE_FILE.to_string(),
            voice: VoiceMaps::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML document. Missing fields keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a TOML config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::missing_path("config file", path));
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_header_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.header_path = path.into();
        self
    }

    pub fn with_patch_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.patch_file = path.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Replaces the rule search path.
    pub fn with_rule_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.rule_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }
}

/// Asset values written by the voice toggle, one map per locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceMaps {
    pub english: IndexMap<String, String>,
    pub chinese: IndexMap<String, String>,
}

impl VoiceMaps {
    pub fn for_locale(&self, locale: VoiceLocale) -> &IndexMap<String, String> {
        match locale {
            VoiceLocale::English => &self.english,
            VoiceLocale::Chinese => &self.chinese,
        }
    }
}

impl Default for VoiceMaps {
    fn default() -> Self {
        Self {
            english: string_map(&[
                ("ImageLogo0", "UI/Textures/dsp-logo-en"),
                ("ImageLogo1", "UI/Textures/dsp-logo-flat-en"),
                ("ImageLogo2", "UI/Textures/dsp-logo-flat-en"),
                ("AudioResPostfix", "-en"),
                ("CutsceneBGM0", "Musics/df-cutscene-en"),
            ]),
            chinese: string_map(&[
                ("ImageLogo0", "UI/Textures/dsp-logo-zh"),
                ("ImageLogo1", "UI/Textures/dsp-logo-flat-zh"),
                ("ImageLogo2", "UI/Textures/dsp-logo-flat-zh-c"),
                ("AudioResPostfix", "-zh"),
                ("CutsceneBGM0", "Musics/df-cutscene-zh"),
            ]),
        }
    }
}

fn string_map(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn executable_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}
