mod converter;
mod error;
mod input;
mod method;

#[cfg(test)]
mod tests;

pub use converter::{Conversion, Converter};
pub use error::ConvertError;
pub use input::{Input, InputKind};
pub use method::{Method, ParseMethodError};
