use std::collections::HashMap;

use compact_str::CompactString;
use serde::Deserialize;

use crate::error::{FormatError, Result};
use crate::token::Token;

/// Caller-supplied placeholder values: an ordered list for positional
/// placeholders or a name-to-value mapping for named ones.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FormatParams {
    Positional(Vec<String>),
    Named(HashMap<String, String>),
}

/// Per-call cursor over the configured parameters. Created fresh for every
/// format run so positional consumption never leaks across calls.
pub(crate) struct ParamCursor<'a> {
    params: Option<&'a FormatParams>,
    next_index: usize,
}

impl<'a> ParamCursor<'a> {
    pub fn new(params: Option<&'a FormatParams>) -> Self {
        Self {
            params,
            next_index: 0,
        }
    }

    /// Resolve a placeholder token. With no params configured the original
    /// placeholder text passes through unchanged.
    pub fn get(&mut self, token: &Token) -> Result<CompactString> {
        let Some(params) = self.params else {
            return Ok(token.value.clone());
        };

        match (&token.key, params) {
            (Some(key), FormatParams::Named(map)) => map
                .get(key.as_str())
                .map(CompactString::new)
                .ok_or_else(|| FormatError::MissingParameter(key.to_string())),
            (Some(key), FormatParams::Positional(list)) => {
                // Numbered placeholders ($1) index the list 1-based.
                key.parse::<usize>()
                    .ok()
                    .filter(|n| *n >= 1)
                    .and_then(|n| list.get(n - 1))
                    .map(|v| CompactString::new(v))
                    .ok_or_else(|| FormatError::MissingParameter(key.to_string()))
            }
            (None, FormatParams::Positional(list)) => {
                let index = self.next_index;
                self.next_index += 1;
                list.get(index)
                    .map(|v| CompactString::new(v))
                    .ok_or_else(|| FormatError::MissingParameter(index.to_string()))
            }
            (None, FormatParams::Named(_)) => {
                Err(FormatError::MissingParameter(self.next_index.to_string()))
            }
        }
    }
}
