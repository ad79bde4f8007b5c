//! Platform-agnostic helpers: formatting, configuration, loading.

pub mod config;
pub mod format;
pub mod storage;
