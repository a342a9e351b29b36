use std::fmt;
use std::str::FromStr;

/// Conversion method selector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Hex,
    Base64,
    Md5,
    #[default]
    Random,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Hex => "hex",
            Method::Base64 => "base64",
            Method::Md5 => "md5",
            Method::Random => "random",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown conversion method: {0} (expected hex, base64, md5 or random)")]
pub struct ParseMethodError(String);

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(Method::Hex),
            "base64" => Ok(Method::Base64),
            "md5" => Ok(Method::Md5),
            "random" => Ok(Method::Random),
            other => Err(ParseMethodError(other.to_string())),
        }
    }
}
