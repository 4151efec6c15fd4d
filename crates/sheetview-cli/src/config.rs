// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use sheetview_app::{IconSet, ViewportMetrics};
use sheetview_tui::UiOptions;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

pub const APP_NAME: &str = "sheetview";
const CONFIG_VERSION: i64 = 1;
const DEFAULT_DOUBLE_CLICK_MS: u64 = 400;
const MAX_DOUBLE_CLICK_MS: u64 = 5_000;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
            layout: Layout::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub mouse: Option<bool>,
    pub ascii_icons: Option<bool>,
    pub double_click_ms: Option<u64>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            mouse: Some(true),
            ascii_icons: Some(false),
            double_click_ms: Some(DEFAULT_DOUBLE_CLICK_MS),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Layout {
    pub chrome_height: Option<i64>,
    pub row_height: Option<i64>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            chrome_height: Some(ViewportMetrics::TERMINAL.chrome_height),
            row_height: Some(ViewportMetrics::TERMINAL.row_height),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Log {
    pub filter: Option<String>,
    pub dir: Option<String>,
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("SHEETVIEW_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set SHEETVIEW_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} has no `version`. Add `version = 1` and keep values under [ui], [layout], and [log]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(row_height) = self.layout.row_height
            && row_height <= 0
        {
            bail!(
                "layout.row_height in {} must be positive, got {}",
                path.display(),
                row_height
            );
        }

        if let Some(chrome_height) = self.layout.chrome_height
            && chrome_height < 0
        {
            bail!(
                "layout.chrome_height in {} must be non-negative, got {}",
                path.display(),
                chrome_height
            );
        }

        if let Some(window) = self.ui.double_click_ms
            && !(1..=MAX_DOUBLE_CLICK_MS).contains(&window)
        {
            bail!(
                "ui.double_click_ms in {} must be between 1 and {}, got {}",
                path.display(),
                MAX_DOUBLE_CLICK_MS,
                window
            );
        }

        if let Some(filter) = &self.log.filter {
            EnvFilter::try_new(filter).with_context(|| {
                format!("log.filter in {} is not a valid filter: {filter:?}", path.display())
            })?;
        }

        Ok(())
    }

    pub fn mouse(&self) -> bool {
        self.ui.mouse.unwrap_or(true)
    }

    pub fn icons(&self) -> IconSet {
        if self.ui.ascii_icons.unwrap_or(false) {
            IconSet::ascii()
        } else {
            IconSet::unicode()
        }
    }

    pub fn double_click(&self) -> Duration {
        Duration::from_millis(self.ui.double_click_ms.unwrap_or(DEFAULT_DOUBLE_CLICK_MS))
    }

    pub fn metrics(&self) -> ViewportMetrics {
        ViewportMetrics {
            chrome_height: self
                .layout
                .chrome_height
                .unwrap_or(ViewportMetrics::TERMINAL.chrome_height),
            row_height: self
                .layout
                .row_height
                .unwrap_or(ViewportMetrics::TERMINAL.row_height),
        }
    }

    pub fn ui_options(&self) -> UiOptions {
        UiOptions {
            mouse: self.mouse(),
            icons: self.icons(),
            double_click: self.double_click(),
            metrics: self.metrics(),
        }
    }

    /// `SHEETVIEW_LOG` wins over `[log].filter`.
    pub fn log_filter(&self) -> String {
        env::var("SHEETVIEW_LOG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.log.filter.clone())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned())
    }

    pub fn log_dir(&self) -> Result<PathBuf> {
        match &self.log.dir {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => {
                let data_root = dirs::data_local_dir().ok_or_else(|| {
                    anyhow!("cannot resolve local data directory; set [log].dir in the config")
                })?;
                Ok(data_root.join(APP_NAME).join("logs"))
            }
        }
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# sheetview config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\nmouse = true\n# ASCII fallbacks for terminals without good Unicode fonts\nascii_icons = false\ndouble_click_ms = {}\n\n[layout]\n# Lines reserved for bars above and below the grid, and lines per row\nchrome_height = {}\nrow_height = {}\n\n[log]\n# tracing filter; SHEETVIEW_LOG overrides it\nfilter = \"{}\"\n# dir = \"/absolute/path/to/logs\"\n",
            path.display(),
            DEFAULT_DOUBLE_CLICK_MS,
            ViewportMetrics::TERMINAL.chrome_height,
            ViewportMetrics::TERMINAL.row_height,
            DEFAULT_LOG_FILTER,
        )
    }
}
