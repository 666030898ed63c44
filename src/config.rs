//! Persisted application configuration.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::errors::FinanceError;
use crate::money::Locale;
use crate::report::DEFAULT_CONTENT_HEIGHT;
use crate::utils::{app_data_dir, ensure_dir};

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default = "default_content_height")]
    pub report_content_height: f32,
}

fn default_content_height() -> f32 {
    DEFAULT_CONTENT_HEIGHT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            report_content_height: DEFAULT_CONTENT_HEIGHT,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, FinanceError> {
        Self::from_base(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, FinanceError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, FinanceError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Loads the stored configuration, falling back to defaults when no file
    /// exists yet.
    pub fn load(&self) -> Result<Config, FinanceError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Saves via a temp file and rename so a crash never leaves a torn file.
    pub fn save(&self, config: &Config) -> Result<(), FinanceError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), FinanceError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
