mod convert;

pub use convert::{Convert, ConvertOpError};
