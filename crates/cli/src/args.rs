use std::error::Error;

use clap::ValueEnum;

use datamask_convert::Method;

use super::ops::Convert;
use super::AppState;

pub use clap::Parser;

pub trait Op {
    type Error: Error + Send + Sync + 'static;
    type Output;

    fn execute(&self, state: &mut AppState) -> Result<Self::Output, Self::Error>;
}

/// Converts data from one format to another for data masking.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    long_version = crate::version::LONG_VERSION,
    about,
    long_about = None
)]
pub struct Args {
    #[command(flatten)]
    pub convert: Convert,

    /// Seed for the random method picker, for reproducible output.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MethodArg {
    Hex,
    Base64,
    Md5,
    #[default]
    Random,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Hex => Method::Hex,
            MethodArg::Base64 => Method::Base64,
            MethodArg::Md5 => Method::Md5,
            MethodArg::Random => Method::Random,
        }
    }
}
