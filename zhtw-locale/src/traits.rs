//! Traits for reading and writing locale files.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::error::Error;

/// A trait for parsing and writing one locale file from/to raw bytes.
///
/// Implementors own the on-disk encoding; callers only see decoded lines.
///
/// # Example
///
/// ```rust,no_run
/// use zhtw_locale::{LocaleFile, traits::Parser};
/// let file = LocaleFile::read_from("Locale/2052/base.txt")?;
/// file.write_to("Locale/1029/base.txt")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser: Sized {
    /// Parse the full contents of a file. `origin` names the source in
    /// decoding errors.
    fn from_bytes(bytes: &[u8], origin: &Path) -> Result<Self, Error>;

    /// Parse from file path. The whole file is read and the handle closed
    /// before parsing starts, so the same path can be written back.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes, path)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Write to file path.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush().map_err(Error::Io)
    }
}
