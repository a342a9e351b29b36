use crate::input::InputKind;
use crate::method::Method;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("{method} conversion requires text input, got {found}")]
    Type { method: Method, found: InputKind },
    #[error("input is not valid utf-8 text: {0}")]
    Encoding(String),
}

impl ConvertError {
    pub fn is_type_error(&self) -> bool {
        matches!(self, ConvertError::Type { .. })
    }
}
