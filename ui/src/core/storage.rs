//! Loading the statistics document.

use std::path::PathBuf;

use thiserror::Error;

use super::config::StatsSource;
use crate::stats::StatsMap;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("couldn't read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed statistics document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid date key {0:?}")]
    InvalidDate(String),
}

pub fn parse_stats(raw: &str) -> Result<StatsMap, StatsError> {
    Ok(serde_json::from_str(raw)?)
}

/// Read and parse the document behind `source`.
pub fn load_stats(source: &StatsSource) -> Result<StatsMap, StatsError> {
    let stats = match source {
        StatsSource::File(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| StatsError::Io {
                path: path.clone(),
                source,
            })?;
            parse_stats(&raw)?
        }
        StatsSource::Bundled => parse_stats(super::config::BUNDLED_SAMPLE)?,
    };

    tracing::info!(
        source = %source,
        days = stats.days().len(),
        has_totals = stats.totals().is_some(),
        "loaded statistics"
    );
    Ok(stats)
}

/// Resolve and load, logging failures. `None` drives the "no data" screen.
pub fn load_or_log(source: &StatsSource) -> Option<StatsMap> {
    match load_stats(source) {
        Ok(stats) => Some(stats),
        Err(err) => {
            tracing::warn!(source = %source, "couldn't load statistics: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_sample_parses() {
        let stats = load_stats(&StatsSource::Bundled).unwrap();
        assert!(!stats.days().is_empty());
        assert!(stats.totals().is_some());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = StatsSource::File(PathBuf::from("/definitely/not/here/stats.json"));
        assert!(matches!(load_stats(&source), Err(StatsError::Io { .. })));
        assert!(load_or_log(&source).is_none());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        assert!(matches!(parse_stats("[1, 2, 3]"), Err(StatsError::Parse(_))));
        assert!(matches!(parse_stats("{ \"a_b\": [] }"), Err(StatsError::Parse(_))));
    }
}
