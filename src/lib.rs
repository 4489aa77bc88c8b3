pub mod control;
pub mod engine;
pub mod map;
pub mod sights;

pub use control::{CommandQueue, CommandSender, PoiCommand};
pub use engine::core::PoiConfig;
pub use engine::scene::GraphicNode;
pub use engine::PoiApp;
pub use map::{CameraOptions, HeadlessMap, LatLng, MapHost, Visibility};
pub use sights::{load_sights, parse_sights, Sight, SightsManager};
