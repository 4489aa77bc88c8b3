use super::camera::{CameraOptions, LatLng};
use super::layer::{CustomLayer, Visibility};
use super::MapHost;
use crate::engine::renderer::DrawCall;

/// In-memory map host: keeps a layer stack and a camera, renders on demand.
#[derive(Debug)]
pub struct HeadlessMap {
    layers: Vec<CustomLayer>,
    camera: CameraOptions,
    jump_count: usize,
}

impl Default for HeadlessMap {
    fn default() -> Self {
        Self {
            layers: Vec::new(),
            camera: CameraOptions::default()
                .with_center(LatLng::new(0.0, 0.0))
                .with_zoom(0.0)
                .with_pitch(0.0)
                .with_bearing(0.0),
            jump_count: 0,
        }
    }
}

impl HeadlessMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer_ids(&self) -> Vec<&str> {
        self.layers.iter().map(CustomLayer::id).collect()
    }

    pub fn jump_count(&self) -> usize {
        self.jump_count
    }

    /// Renders every visible layer, bottom to top.
    pub fn render_frame(&mut self) -> Vec<DrawCall> {
        let camera = self.camera;
        let mut draw_calls = Vec::new();
        for layer in self
            .layers
            .iter_mut()
            .filter(|layer| layer.visibility() == Visibility::Visible)
        {
            draw_calls.extend(layer.host_mut().render(&camera));
        }
        draw_calls
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.layers.iter().position(|layer| layer.id() == id)
    }
}

impl MapHost for HeadlessMap {
    fn layer_visibility(&self, id: &str) -> Option<Visibility> {
        self.position(id).map(|index| self.layers[index].visibility())
    }

    fn set_layer_visibility(&mut self, id: &str, visibility: Visibility) -> bool {
        match self.position(id) {
            Some(index) => {
                self.layers[index].set_visibility(visibility);
                true
            }
            None => false,
        }
    }

    fn add_layer(&mut self, mut layer: CustomLayer) {
        if self.position(layer.id()).is_some() {
            tracing::warn!(target: "map", id = %layer.id(), "layer already exists, ignoring");
            return;
        }
        tracing::debug!(target: "map", id = %layer.id(), "adding layer");
        layer.host_mut().initialize();
        self.layers.push(layer);
    }

    fn remove_layer(&mut self, id: &str) -> Option<CustomLayer> {
        let index = self.position(id)?;
        let mut layer = self.layers.remove(index);
        tracing::debug!(target: "map", %id, "removing layer");
        layer.host_mut().deinitialize();
        Some(layer)
    }

    fn jump_to(&mut self, camera: CameraOptions) {
        self.camera = self.camera.merged(camera);
        self.jump_count += 1;
        tracing::debug!(target: "map", camera = ?self.camera, "camera jump");
    }

    fn camera(&self) -> CameraOptions {
        self.camera
    }
}
