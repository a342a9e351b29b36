use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use md5::{Digest, Md5};
use rand::Rng;

use crate::error::ConvertError;
use crate::input::Input;
use crate::method::Method;

/// Result of a conversion, tagged with the method that produced it.
///
/// `method` is never `Method::Random`: a random conversion records the
/// method it picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    method: Method,
    value: String,
}

impl Conversion {
    pub fn method(&self) -> Method {
        self.method
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Stateless converter for masking values as hex, base64 or MD5.
///
/// MD5 is broken as a cryptographic hash. It is used here to obscure
/// values, never to protect them.
#[derive(Debug, Default, Clone, Copy)]
pub struct Converter;

impl Converter {
    pub fn new() -> Self {
        Self
    }

    /// Integers become `0x`-prefixed lowercase hex, text becomes the hex
    /// digits of its utf-8 bytes with no prefix.
    pub fn hex(&self, input: &Input) -> Result<String, ConvertError> {
        Ok(match input {
            Input::Integer(value) => format!("{:#x}", value),
            Input::Text(text) => hex::encode(text.as_bytes()),
        })
    }

    /// Standard padded base64 of the utf-8 bytes.
    pub fn base64(&self, input: &Input) -> Result<String, ConvertError> {
        let text = require_text(Method::Base64, input)?;
        Ok(STANDARD.encode(text.as_bytes()))
    }

    /// Lowercase hex MD5 digest of the utf-8 bytes. Masking only.
    pub fn md5(&self, input: &Input) -> Result<String, ConvertError> {
        let text = require_text(Method::Md5, input)?;
        Ok(hex::encode(Md5::digest(text.as_bytes())))
    }

    /// Apply one of hex, base64 or md5, picked uniformly from `rng`.
    pub fn random_choice<R>(&self, input: &Input, rng: &mut R) -> Result<Conversion, ConvertError>
    where
        R: Rng + ?Sized,
    {
        require_text(Method::Random, input)?;

        let (method, encode) = RANDOM_CHOICES[rng.gen_range(0..RANDOM_CHOICES.len())];
        tracing::debug!(%method, "picked conversion method");

        let value = encode(self, input).map_err(|e| {
            tracing::error!(%method, "error during random conversion: {e}");
            e
        })?;
        Ok(Conversion { method, value })
    }

    /// Run `method` against `input`. `rng` is only drawn from for
    /// `Method::Random`.
    pub fn convert<R>(
        &self,
        method: Method,
        input: &Input,
        rng: &mut R,
    ) -> Result<Conversion, ConvertError>
    where
        R: Rng + ?Sized,
    {
        let value = match method {
            Method::Hex => self.hex(input)?,
            Method::Base64 => self.base64(input)?,
            Method::Md5 => self.md5(input)?,
            Method::Random => return self.random_choice(input, rng),
        };
        Ok(Conversion { method, value })
    }
}

type Encode = fn(&Converter, &Input) -> Result<String, ConvertError>;

// Equal weight each.
const RANDOM_CHOICES: [(Method, Encode); 3] = [
    (Method::Hex, Converter::hex),
    (Method::Base64, Converter::base64),
    (Method::Md5, Converter::md5),
];

fn require_text(method: Method, input: &Input) -> Result<&str, ConvertError> {
    input.as_text().ok_or_else(|| {
        let err = ConvertError::Type {
            method,
            found: input.kind(),
        };
        tracing::error!(%method, "error converting to {method}: {err}");
        err
    })
}
