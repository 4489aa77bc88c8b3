pub mod camera;
pub mod headless;
pub mod layer;

pub use camera::{CameraOptions, LatLng};
pub use headless::HeadlessMap;
pub use layer::{CustomLayer, CustomLayerHost, PointOfInterestLayer, Visibility};

/// The style, layer and camera operations the add-on needs from a map engine.
///
/// Implementations are driven from the engine's main thread only.
pub trait MapHost {
    /// `None` when no layer with `id` is in the style.
    fn layer_visibility(&self, id: &str) -> Option<Visibility>;

    /// Returns `false` if the layer does not exist.
    fn set_layer_visibility(&mut self, id: &str, visibility: Visibility) -> bool;

    fn add_layer(&mut self, layer: CustomLayer);

    fn remove_layer(&mut self, id: &str) -> Option<CustomLayer>;

    fn jump_to(&mut self, camera: CameraOptions);

    fn camera(&self) -> CameraOptions;

    fn has_layer(&self, id: &str) -> bool {
        self.layer_visibility(id).is_some()
    }
}
