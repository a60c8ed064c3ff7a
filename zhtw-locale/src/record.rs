//! The three-field row shape used by the game's locale tables.
//!
//! A record line looks like `key<sep>id<sep>value<eol>`, where both separators
//! are runs of tabs or spaces and `id` is decimal. Everything that does not fit
//! this shape is a pass-through line and is never touched.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // key, sep1, id, sep2, value, eol. The key is greedy but never ends in a
    // space, so `Level 2\t5` keeps `Level 2` whole while a space-separated
    // row leaves its separator run to sep1. The value is lazy so the line
    // ending lands in its own group.
    static ref ROW_REGEX: Regex =
        Regex::new(r"^([^\t\r\n]*[^\t\r\n ])([\t ]+)([0-9]+)([\t ]+)(.*?)(\r?\n)?$").unwrap();
}

/// A single parsed row.
///
/// Only `value` is meant to be rewritten; every other field is kept so the
/// line can be rebuilt exactly as it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The row key. May contain spaces, never tabs or line breaks.
    pub key: String,
    /// Separator run between key and id.
    pub sep1: String,
    /// The numeric id, kept as text so leading zeros survive.
    pub id: String,
    /// Separator run between id and value.
    pub sep2: String,
    /// The translatable column. May be empty.
    pub value: String,
    /// `"\n"`, `"\r\n"`, or `None` for a final line without a terminator.
    pub eol: Option<String>,
}

impl Record {
    /// Parses one line (including its terminator, if any).
    ///
    /// Returns `None` when the line does not have the record shape.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = ROW_REGEX.captures(line)?;
        let field = |i: usize| caps.get(i).map_or("", |m| m.as_str()).to_string();
        Some(Record {
            key: field(1),
            sep1: field(2),
            id: field(3),
            sep2: field(4),
            value: field(5),
            eol: caps.get(6).map(|m| m.as_str().to_string()),
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}{}",
            self.key,
            self.sep1,
            self.id,
            self.sep2,
            self.value,
            self.eol.as_deref().unwrap_or("")
        )
    }
}

/// One line of a locale file: either a record or an opaque line kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Record(Record),
    Passthrough(String),
}

impl Line {
    /// Classifies a raw line.
    pub fn parse(line: &str) -> Self {
        match Record::parse(line) {
            Some(record) => Line::Record(record),
            None => Line::Passthrough(line.to_string()),
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Line::Record(record) => Some(record),
            Line::Passthrough(_) => None,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Record(record) => record.fmt(f),
            Line::Passthrough(raw) => f.write_str(raw),
        }
    }
}
