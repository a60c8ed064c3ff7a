//! Value-level transform chain for records.
//!
//! Order is fixed: script conversion, then substitutions in load order, then
//! the key override. An override discards whatever the first two steps
//! produced for that line.

use indexmap::IndexMap;

use crate::{
    converter::ScriptConverter,
    record::Record,
    rules::{RuleSet, Substitution},
};

/// Borrowed view over a converter and the rules of one run.
#[derive(Clone, Copy)]
pub struct Pipeline<'a> {
    converter: Option<&'a dyn ScriptConverter>,
    substitutions: &'a [Substitution],
    overrides: &'a IndexMap<String, String>,
}

impl<'a> Pipeline<'a> {
    /// Full chain used by the batch conversion.
    pub fn new(converter: &'a dyn ScriptConverter, rules: &'a RuleSet) -> Self {
        Pipeline {
            converter: Some(converter),
            substitutions: &rules.substitutions,
            overrides: &rules.overrides,
        }
    }

    /// Only the key override step. Used by the voice patcher.
    pub fn overrides_only(overrides: &'a IndexMap<String, String>) -> Self {
        Pipeline {
            converter: None,
            substitutions: &[],
            overrides,
        }
    }

    /// Computes the new value for `key` without touching any record.
    pub fn transform_value(&self, key: &str, value: &str) -> String {
        if let Some(replacement) = self.overrides.get(key) {
            return replacement.clone();
        }

        let mut value = match self.converter {
            Some(converter) => converter.convert(value),
            None => value.to_string(),
        };
        for rule in self.substitutions {
            value = rule.apply(&value);
        }
        value
    }

    /// Rewrites `record.value` in place. Returns whether it changed.
    pub fn transform(&self, record: &mut Record) -> bool {
        let value = self.transform_value(&record.key, &record.value);
        if value == record.value {
            false
        } else {
            record.value = value;
            true
        }
    }
}
