pub mod manager;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

pub use manager::SightsManager;

const POINTS_TAG: &str = "points";

/// One point of interest from the sights resource file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sight {
    #[serde(rename = "display_name")]
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub zoom: i32,
    #[serde(rename = "model_name")]
    pub model: String,
}

/// Loads sights from `path`. Any failure is logged and yields an empty list.
pub fn load_sights(path: impl AsRef<Path>) -> Vec<Sight> {
    let path = path.as_ref();
    tracing::info!(target: "sights", path = %path.display(), "loading sights");
    match read_sights(path) {
        Ok(sights) => sights,
        Err(err) => {
            tracing::warn!(target: "sights", path = %path.display(), "{err:#}");
            Vec::new()
        }
    }
}

fn read_sights(path: &Path) -> Result<Vec<Sight>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    parse_sights(&text)
}

/// Parses a `{"points": [...]}` document. Entries missing a field, or holding
/// a field of the wrong type, are skipped.
pub fn parse_sights(text: &str) -> Result<Vec<Sight>> {
    let doc: Value = serde_json::from_str(text).context("cannot parse file")?;
    let root = doc.as_object().context("cannot parse file: root is not an object")?;
    let points = root
        .get(POINTS_TAG)
        .and_then(Value::as_array)
        .context("bad format: no \"points\" array")?;

    let sights = points
        .iter()
        .enumerate()
        .filter_map(|(index, point)| match Sight::deserialize(point) {
            Ok(sight) => {
                tracing::info!(target: "sights", name = %sight.name, "loaded place");
                Some(sight)
            }
            Err(err) => {
                tracing::debug!(target: "sights", index, %err, "skipping malformed sight");
                None
            }
        })
        .collect();
    Ok(sights)
}
