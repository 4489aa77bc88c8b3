use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_ASSETS_DIR: &str = match option_env!("POI_ASSETS_PATH") {
    Some(dir) => dir,
    None => "assets",
};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PoiConfig {
    pub app_name: String,
    pub assets_dir: PathBuf,
    pub sights_file: String,
    pub layer_id: String,
    pub camera_pitch: f64,
    pub camera_bearing: f64,
}

impl Default for PoiConfig {
    fn default() -> Self {
        Self {
            app_name: "Sights".to_string(),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            sights_file: "sights.json".to_string(),
            layer_id: "poiLayer".to_string(),
            camera_pitch: 0.0,
            camera_bearing: 0.0,
        }
    }
}

impl PoiConfig {
    /// Reads a RON config; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(target: "config", path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read config {}", path.display()));
            }
        };
        Self::from_ron(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_ron(text: &str) -> Result<Self> {
        ron::from_str(text).context("failed to parse RON")
    }

    pub fn sights_path(&self) -> PathBuf {
        self.assets_dir.join(&self.sights_file)
    }
}
