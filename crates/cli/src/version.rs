use std::fmt;

/// `--version` text: package version plus the repository and profile the
/// binary was built from.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("REPO_VERSION"),
    ", ",
    env!("BUILD_PROFILE"),
    ")"
);

/// Build metadata exported by build.rs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub repo_version: &'static str,
    pub profile: &'static str,
    pub features: &'static str,
}

pub const BUILD: BuildInfo = BuildInfo {
    version: env!("CARGO_PKG_VERSION"),
    repo_version: env!("REPO_VERSION"),
    profile: env!("BUILD_PROFILE"),
    features: env!("BUILD_FEATURES"),
};

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "datamask {} ({}, {} build, features: {})",
            self.version, self.repo_version, self.profile, self.features
        )
    }
}
