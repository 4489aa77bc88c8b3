use std::rc::Rc;

use super::{load_sights, Sight};
use crate::engine::core::PoiConfig;
use crate::engine::resources::ResourceManager;
use crate::map::{CameraOptions, CustomLayer, LatLng, MapHost, PointOfInterestLayer, Visibility};

/// Cycles the camera through a fixed list of sights and shows or hides the
/// POI layer on request.
#[derive(Debug)]
pub struct SightsManager {
    sights: Vec<Sight>,
    current: usize,
    layer_id: String,
    pitch: f64,
    bearing: f64,
    resources: Rc<ResourceManager>,
}

impl SightsManager {
    /// Loads the sights file named by `config`.
    pub fn new(config: &PoiConfig) -> Self {
        Self::from_sights(load_sights(config.sights_path()), config)
    }

    /// Uses the built-in marker models.
    pub fn from_sights(sights: Vec<Sight>, config: &PoiConfig) -> Self {
        let resources = Rc::new(ResourceManager::with_builtin_markers());
        Self::with_resources(sights, config, resources)
    }

    pub fn with_resources(
        sights: Vec<Sight>,
        config: &PoiConfig,
        resources: Rc<ResourceManager>,
    ) -> Self {
        Self {
            sights,
            current: 0,
            layer_id: config.layer_id.clone(),
            pitch: config.camera_pitch,
            bearing: config.camera_bearing,
            resources,
        }
    }

    pub fn resources(&self) -> &ResourceManager {
        &self.resources
    }

    pub fn sights(&self) -> &[Sight] {
        &self.sights
    }

    pub fn len(&self) -> usize {
        self.sights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sights.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&Sight> {
        self.sights.get(self.current)
    }

    pub fn layer_id(&self) -> &str {
        &self.layer_id
    }

    /// Moves to the following sight, wrapping to the first after the last.
    pub fn next(&mut self, map: &mut dyn MapHost) -> bool {
        let mut next = self.current + 1;
        if next >= self.sights.len() {
            next = 0;
        }
        tracing::info!(target: "sights", next, size = self.sights.len(), "jumping to next sight");
        self.jump_to(next, map)
    }

    /// Adds the POI layer if missing, shows it if hidden, removes it if
    /// visible. The camera follows the current sight unless the layer was
    /// removed.
    pub fn toggle(&mut self, map: &mut dyn MapHost) {
        match map.layer_visibility(&self.layer_id) {
            None => {
                let layer = PointOfInterestLayer::new(self.sights.clone(), self.resources.clone());
                map.add_layer(CustomLayer::new(self.layer_id.clone(), layer));
            }
            Some(Visibility::None) => {
                tracing::info!(target: "sights", layer = %self.layer_id, "layer exists but hidden, showing it");
                map.set_layer_visibility(&self.layer_id, Visibility::Visible);
            }
            Some(Visibility::Visible) => {
                tracing::info!(target: "sights", layer = %self.layer_id, "removing layer");
                map.remove_layer(&self.layer_id);
                return;
            }
        }
        self.jump_to(self.current, map);
    }

    /// Points the camera at sight `index`. Returns `false`, leaving the cursor
    /// and camera untouched, if there is no such sight.
    pub fn jump_to(&mut self, index: usize, map: &mut dyn MapHost) -> bool {
        let Some(sight) = self.sights.get(index) else {
            tracing::info!(target: "sights", index, size = self.sights.len(), "no sight with this index");
            return false;
        };

        let camera = CameraOptions::default()
            .with_center(LatLng::new(sight.lat, sight.lon))
            .with_zoom(f64::from(sight.zoom))
            .with_pitch(self.pitch)
            .with_bearing(self.bearing);
        tracing::debug!(target: "sights", index, name = %sight.name, "camera jump");
        map.jump_to(camera);

        self.current = index;
        true
    }
}
