use std::collections::HashMap;
use std::rc::Rc;

use super::geometry::GraphicGeometry;

/// Marker models keyed by the `model_name` sights refer to.
#[derive(Default, Debug)]
pub struct ResourceManager {
    models: HashMap<String, Rc<GraphicGeometry>>,
}

impl ResourceManager {
    /// Registry preloaded with the built-in `"pin"` marker.
    pub fn with_builtin_markers() -> Self {
        let mut resources = Self::default();
        resources.register_model("pin", GraphicGeometry::marker_quad("pin", 0.5));
        resources
    }

    pub fn register_model(&mut self, key: impl Into<String>, geometry: GraphicGeometry) {
        let key = key.into();
        tracing::debug!(%key, vertices = geometry.vertices.len(), "registering model");
        self.models.insert(key, Rc::new(geometry));
    }

    pub fn model(&self, key: &str) -> Option<Rc<GraphicGeometry>> {
        self.models.get(key).cloned()
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }
}
