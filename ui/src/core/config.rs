//! Where the statistics document comes from.
//!
//! Resolution order: explicit path, then `TOURSTATS_FILE`, then (native only)
//! `stats.json` in the platform data directory, then the bundled sample.

use std::fmt;
use std::path::PathBuf;

pub const ENV_STATS_FILE: &str = "TOURSTATS_FILE";

pub const STATS_FILE_NAME: &str = "stats.json";

pub(crate) const BUNDLED_SAMPLE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/data/sample-stats.json"
));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsSource {
    File(PathBuf),
    Bundled,
}

impl StatsSource {
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let env_path = std::env::var_os(ENV_STATS_FILE).map(PathBuf::from);
        Self::resolve_with(explicit, env_path, data_dir_file())
    }

    /// Pure resolution step; `data_file` is only used when it exists on disk.
    pub fn resolve_with(
        explicit: Option<PathBuf>,
        env_path: Option<PathBuf>,
        data_file: Option<PathBuf>,
    ) -> Self {
        explicit
            .or(env_path)
            .or_else(|| data_file.filter(|p| p.is_file()))
            .map(Self::File)
            .unwrap_or(Self::Bundled)
    }
}

impl fmt::Display for StatsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Bundled => f.write_str("<bundled sample>"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir_file() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "tourstats", "tourstats")
        .map(|dirs| dirs.data_dir().join(STATS_FILE_NAME))
}

#[cfg(target_arch = "wasm32")]
fn data_dir_file() -> Option<PathBuf> {
    None
}
