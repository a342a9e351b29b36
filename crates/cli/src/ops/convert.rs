use std::ffi::OsString;
use std::fmt;

use datamask_convert::{Conversion, ConvertError, Input, Method};

use crate::args::{MethodArg, Op};
use crate::AppState;

#[derive(Debug, clap::Args, Clone)]
pub struct Convert {
    /// The data to convert.
    #[arg(allow_negative_numbers = true)]
    pub data: OsString,

    /// The conversion method to use.
    #[arg(short, long, value_enum, default_value_t = MethodArg::Random)]
    pub method: MethodArg,
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertOpError {
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

impl ConvertOpError {
    pub fn label(&self) -> &'static str {
        match self {
            ConvertOpError::Convert(e) if e.is_type_error() => "type error",
            ConvertOpError::Convert(_) => "value error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConvertOutput(Conversion);

impl ConvertOutput {
    pub fn conversion(&self) -> &Conversion {
        &self.0
    }
}

impl fmt::Display for ConvertOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Converted data: {}", self.0)
    }
}

impl Op for Convert {
    type Error = ConvertOpError;
    type Output = ConvertOutput;

    fn execute(&self, state: &mut AppState) -> Result<Self::Output, Self::Error> {
        let method = Method::from(self.method);
        let input = Input::from_arg(self.data.clone(), method)?;
        tracing::debug!(%method, kind = %input.kind(), "converting input");

        let (converter, rng) = state.parts();
        let conversion = converter.convert(method, &input, rng)?;
        Ok(ConvertOutput(conversion))
    }
}
