use std::ffi::OsString;
use std::fmt;

use num_bigint::{BigInt, BigUint, Sign};

use crate::error::ConvertError;
use crate::method::Method;

/// A value handed to the converter.
///
/// The kind is decided once, when the raw argument is resolved, and never
/// re-inspected by the conversion functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Integer(BigInt),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Integer,
    Text,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Integer => write!(f, "integer"),
            InputKind::Text => write!(f, "text"),
        }
    }
}

impl Input {
    pub fn text(value: impl Into<String>) -> Self {
        Input::Text(value.into())
    }

    pub fn kind(&self) -> InputKind {
        match self {
            Input::Integer(_) => InputKind::Integer,
            Input::Text(_) => InputKind::Text,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Input::Text(text) => Some(text),
            Input::Integer(_) => None,
        }
    }

    /// Resolve a raw command line argument for `method`.
    ///
    /// Only `hex` accepts integers, so only `hex` tries the integer parse.
    /// Anything else is passed through as text.
    pub fn from_arg(raw: OsString, method: Method) -> Result<Self, ConvertError> {
        let text = raw.into_string().map_err(|raw| {
            tracing::error!(raw = ?raw, "argument is not valid utf-8");
            ConvertError::Encoding(raw.to_string_lossy().into_owned())
        })?;

        Ok(match method {
            Method::Hex => Self::parse_lenient(text),
            _ => Input::Text(text),
        })
    }

    /// Integer if `text` reads as one, text otherwise.
    ///
    /// Numeric-looking text always becomes an integer here, even when the
    /// caller meant it as text.
    pub fn parse_lenient(text: String) -> Self {
        match parse_integer(&text) {
            Some(value) => Input::Integer(value),
            None => Input::Text(text),
        }
    }
}

impl From<i128> for Input {
    fn from(value: i128) -> Self {
        Input::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for Input {
    fn from(value: BigInt) -> Self {
        Input::Integer(value)
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Text(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Text(value)
    }
}

// Accepts surrounding whitespace, one leading sign and single underscores
// between digits. Digits are ASCII only; other Unicode decimal digits are
// left as text.
fn parse_integer(text: &str) -> Option<BigInt> {
    let trimmed = text.trim();
    let (sign, digits) = match trimmed.as_bytes().first()? {
        b'-' => (Sign::Minus, &trimmed[1..]),
        b'+' => (Sign::Plus, &trimmed[1..]),
        _ => (Sign::Plus, trimmed),
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
        || !digits.chars().all(|c| c.is_ascii_digit() || c == '_')
    {
        return None;
    }

    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    let magnitude: BigUint = cleaned.parse().ok()?;
    Some(BigInt::from_biguint(sign, magnitude))
}
