//! Support for the game's UTF-16LE `.txt` locale tables.
//!
//! A [`LocaleFile`] keeps every line of the source file in order. Records can
//! be rewritten through a [`Pipeline`]; all other bytes are reproduced as read.

use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::{
    encoding::{decode_utf16le, encode_utf16le},
    error::Error,
    pipeline::Pipeline,
    record::Line,
    traits::Parser,
};

/// An in-memory locale table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocaleFile {
    pub lines: Vec<Line>,
}

impl LocaleFile {
    /// Splits decoded text into lines, each keeping its `\n` terminator.
    pub fn parse(text: &str) -> Self {
        LocaleFile {
            lines: text.split_inclusive('\n').map(Line::parse).collect(),
        }
    }

    /// Number of lines with the record shape.
    pub fn record_count(&self) -> usize {
        self.lines.iter().filter(|l| l.as_record().is_some()).count()
    }

    /// Runs every record through `pipeline` and returns how many values changed.
    pub fn apply(&mut self, pipeline: &Pipeline<'_>) -> usize {
        let mut changed = 0;
        for line in &mut self.lines {
            if let Line::Record(record) = line {
                if pipeline.transform(record) {
                    changed += 1;
                }
            }
        }
        changed
    }
}

impl fmt::Display for LocaleFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            line.fmt(f)?;
        }
        Ok(())
    }
}

impl Parser for LocaleFile {
    fn from_bytes(bytes: &[u8], origin: &Path) -> Result<Self, Error> {
        let text = decode_utf16le(bytes).map_err(|reason| Error::encoding_error(origin, reason))?;
        Ok(LocaleFile::parse(&text))
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer
            .write_all(&encode_utf16le(&self.to_string()))
            .map_err(Error::Io)
    }
}
