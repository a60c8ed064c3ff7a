#![forbid(unsafe_code)]
//! Adds a traditional-Chinese locale to a game's localization tables.
//!
//! The game stores its strings as UTF-16LE `.txt` tables whose rows look like
//! `key<TAB>id<TAB>value`. This crate converts the value column of every row
//! from simplified to traditional Chinese, applies user substitution and
//! override rules, and writes the result byte-for-byte identical to the input
//! everywhere outside that column.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use zhtw_locale::{Config, VoiceLocale, ZhTwConverter, convert_locale, switch_voice};
//!
//! let config = Config::default();
//!
//! // Locale/2052/*.txt -> Locale/1029/*.txt, plus Locale/Header.txt
//! let report = convert_locale(&config, &ZhTwConverter)?;
//! println!("{} file(s) converted", report.batch.converted.len());
//!
//! // Use the English voice assets for the new locale
//! switch_voice(&config, VoiceLocale::English)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Components
//!
//! - [`record`]: the row grammar and its exact inverse
//! - [`pipeline`]: script conversion, substitutions, key overrides
//! - [`rules`]: loading rule files from prioritized sources
//! - [`batch`]: directory conversion
//! - [`patch`]: targeted key rewrites for the voice toggle

pub mod batch;
pub mod config;
pub mod converter;
pub mod document;
pub mod encoding;
pub mod error;
pub mod header;
pub mod patch;
pub mod pipeline;
pub mod record;
pub mod rules;
pub mod traits;

// Re-export most used types for easy consumption
pub use crate::{
    batch::{BatchReport, ConversionReport, convert_locale, process_dir},
    config::{Config, VoiceMaps},
    converter::{Identity, ScriptConverter, ZhTwConverter},
    document::LocaleFile,
    error::Error,
    header::{HEADER, write_header},
    patch::{PatchReport, VoiceLocale, patch_file, switch_voice},
    pipeline::Pipeline,
    record::{Line, Record},
    rules::{RuleLoadReport, RuleSet, Substitution},
};
