//! Platform data directory resolution.
//!
//! Everything timeclaim writes (configuration, the record database, local
//! sync mirrors) lives under one base directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\timeclaim\timeclaim`
//! - **macOS**: `~/Library/Application Support/timeclaim/timeclaim`
//! - **Linux**: `~/.local/share/timeclaim/timeclaim`
//!
//! `TIMECLAIM_DATA_DIR` replaces the base directory entirely.

use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "timeclaim";
pub const APP_NAME: &str = "timeclaim";
pub const DATA_DIR_ENV: &str = "TIMECLAIM_DATA_DIR";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        if let Ok(dir) = var(DATA_DIR_ENV) {
            return Self::with_base_path(dir);
        }
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        Self::with_base_path(Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME))
    }

    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` inside the base directory, creating the directory.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }

    /// Path of a sub-directory, creating it.
    pub fn get_dir(&self, dir_name: &str) -> Result<PathBuf> {
        let dir = self.base_path.join(dir_name);
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(dir)
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
