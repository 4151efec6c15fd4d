// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! File-only tracing. The terminal belongs to the sheet, so nothing is
//! written to stdout or stderr once the UI is up.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE_PREFIX: &str = "sheetview.log";

/// Installs the global subscriber writing to a daily-rolled file in `dir`.
pub fn init(dir: &Path, filter: &str) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("create log directory {}", dir.display()))?;

    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("invalid log filter {filter:?}; check SHEETVIEW_LOG"))?;
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init()
        .context("install tracing subscriber")
}

#[cfg(test)]
mod tests {
    use super::init;
    use anyhow::Result;

    #[test]
    fn init_rejects_bad_filter_before_installing() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let dir = temp.path().join("logs");
        let error = init(&dir, "sheetview=loud").expect_err("bad filter should fail");
        assert!(error.to_string().contains("invalid log filter"));
        assert!(dir.is_dir(), "directory is created before the filter is parsed");
        Ok(())
    }
}
