use rand::rngs::StdRng;
use rand::SeedableRng;

use datamask_convert::{Converter, Method};

use crate::config::{Config, ConfigError};

use super::Args;

pub struct AppState {
    converter: Converter,
    rng: StdRng,
}

impl AppState {
    /// `--seed` wins over `DATAMASK_SEED`; with neither, the random source is
    /// seeded from OS entropy. The seed is only resolved for `random`, so a
    /// bad `DATAMASK_SEED` does not affect the other methods.
    pub fn from_args(args: &Args, config: &Config) -> Result<Self, ConfigError> {
        let seed = match (Method::from(args.convert.method), args.seed) {
            (_, Some(seed)) => Some(seed),
            (Method::Random, None) => config.seed()?,
            _ => None,
        };

        let rng = match seed {
            Some(seed) => {
                tracing::debug!(seed, "using seeded random source");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            converter: Converter::new(),
            rng,
        })
    }

    /// Converter and random source together, for ops that need both.
    pub fn parts(&mut self) -> (&Converter, &mut StdRng) {
        (&self.converter, &mut self.rng)
    }
}
