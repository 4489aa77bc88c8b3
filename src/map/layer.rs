use std::fmt;
use std::rc::Rc;

use glam::{Mat4, Vec3};

use super::camera::CameraOptions;
use crate::engine::renderer::{DrawCall, Renderer};
use crate::engine::resources::ResourceManager;
use crate::engine::scene::GraphicNode;
use crate::sights::Sight;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    None,
}

/// Render callbacks a custom layer hands to the map host.
pub trait CustomLayerHost {
    fn initialize(&mut self) {}

    /// Returns the frame's draw calls in geographic space. `camera` is the
    /// host's current camera; projecting the calls onto the screen is left to
    /// the host.
    fn render(&mut self, camera: &CameraOptions) -> Vec<DrawCall>;

    fn deinitialize(&mut self) {}
}

pub struct CustomLayer {
    id: String,
    visibility: Visibility,
    host: Box<dyn CustomLayerHost>,
}

impl CustomLayer {
    pub fn new(id: impl Into<String>, host: impl CustomLayerHost + 'static) -> Self {
        Self {
            id: id.into(),
            visibility: Visibility::Visible,
            host: Box::new(host),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    pub fn host_mut(&mut self) -> &mut dyn CustomLayerHost {
        self.host.as_mut()
    }
}

impl fmt::Debug for CustomLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomLayer")
            .field("id", &self.id)
            .field("visibility", &self.visibility)
            .finish_non_exhaustive()
    }
}

/// Draws one marker per sight at its geographic position.
pub struct PointOfInterestLayer {
    sights: Vec<Sight>,
    resources: Rc<ResourceManager>,
    root: Option<Rc<GraphicNode>>,
    renderer: Renderer,
}

impl PointOfInterestLayer {
    pub fn new(sights: Vec<Sight>, resources: Rc<ResourceManager>) -> Self {
        Self {
            sights,
            resources,
            root: None,
            renderer: Renderer::new(),
        }
    }

    pub fn scene(&self) -> Option<&Rc<GraphicNode>> {
        self.root.as_ref()
    }

    fn build_scene(&self) -> Rc<GraphicNode> {
        let root = GraphicNode::new("poi");
        for sight in &self.sights {
            let placement = Mat4::from_translation(Vec3::new(
                sight.lon as f32,
                sight.lat as f32,
                0.0,
            ));
            let marker = GraphicNode::with_transform(sight.name.clone(), placement);
            match self.resources.model(&sight.model) {
                Some(geometry) => marker.set_model(Some(geometry)),
                None => tracing::warn!(
                    target: "poi_layer",
                    sight = %sight.name,
                    model = %sight.model,
                    "unknown marker model, drawing nothing"
                ),
            }
            root.add_child(marker);
        }
        root
    }
}

impl CustomLayerHost for PointOfInterestLayer {
    fn initialize(&mut self) {
        let root = self.build_scene();
        tracing::info!(target: "poi_layer", markers = root.child_count(), "layer initialized");
        self.root = Some(root);
    }

    fn render(&mut self, camera: &CameraOptions) -> Vec<DrawCall> {
        let Some(root) = self.root.as_ref() else {
            tracing::debug!(target: "poi_layer", "render before initialize");
            return Vec::new();
        };
        tracing::trace!(target: "poi_layer", ?camera, "rendering markers");
        self.renderer.begin_frame();
        self.renderer.draw(root);
        self.renderer.end_frame().to_vec()
    }

    fn deinitialize(&mut self) {
        if let Some(root) = self.root.take() {
            root.remove_children();
        }
        tracing::info!(target: "poi_layer", frames = self.renderer.frame_count(), "layer deinitialized");
    }
}
