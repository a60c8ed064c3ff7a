//! The locale manifest (`Header.txt`) the game reads to list its languages.
//!
//! The content is fixed; it registers 1029 as the traditional-Chinese slot.

use std::path::Path;

use indoc::indoc;

use crate::error::Error;

/// Manifest text. Keep the empty line before the weighting block.
pub const HEADER: &str = indoc! {"
    [Localization Project]
    Version=1.1
    2052,简体中文,zhCN,zh,1033,1
    1033,English,enUS,en,2052,0
    1036,français,frFR,fr,1033,0,0
    1031,Deutsch,deDE,de,1033,0,0
    1041,日本語,jaJA,ja,1033,1,0
    1042,한국어,koKO,ko,1033,1,0
    1029,繁體中文,zhTW,zh_TW,1033,1

    base=0
    combat=0
    creation=0
    prototype=-1
    dictionary=3
    parameters=0
    [outsource]=-6
    [user]=-9
"};

/// Returns `content` with exactly the newline it needs at the end.
pub fn with_trailing_newline(content: &str) -> String {
    if content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{}\n", content)
    }
}

/// Writes [`HEADER`] as UTF-8, creating parent directories.
pub fn write_header<P: AsRef<Path>>(path: P) -> Result<(), Error> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, with_trailing_newline(HEADER))?;
    tracing::info!("Header written to {}", path.display());
    Ok(())
}
