//! Script conversion seam.
//!
//! The transform pipeline only needs `convert(text) -> text`; which library
//! does the simplified-to-traditional work is decided by the caller.

use zhconv::{Variant, zhconv};

/// Converts the script of a single value.
pub trait ScriptConverter {
    fn convert(&self, text: &str) -> String;
}

/// Simplified to traditional Chinese with Taiwan-standard characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZhTwConverter;

impl ScriptConverter for ZhTwConverter {
    fn convert(&self, text: &str) -> String {
        zhconv(text, Variant::ZhTW)
    }
}

/// Leaves text as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl ScriptConverter for Identity {
    fn convert(&self, text: &str) -> String {
        text.to_string()
    }
}

impl<F> ScriptConverter for F
where
    F: Fn(&str) -> String,
{
    fn convert(&self, text: &str) -> String {
        self(text)
    }
}
