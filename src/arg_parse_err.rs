use std::{fmt::Display, num::ParseIntError};

/// Error reporting for parsing option values such as `--bg` or `--size`.
/// When there is no specific message, the offending value is echoed back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgParseErr {
    pub message: Option<String>,
}

impl ArgParseErr {
    pub fn with_msg(str: impl ToString) -> Self {
        let string = str.to_string();
        Self {
            message: Some(string),
        }
    }
}

impl Display for ArgParseErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(msg) => f.write_str(msg),
            None => f.write_str("invalid value"),
        }
    }
}

impl std::error::Error for ArgParseErr {}

impl From<ParseIntError> for ArgParseErr {
    fn from(value: ParseIntError) -> Self {
        Self::with_msg(value)
    }
}
