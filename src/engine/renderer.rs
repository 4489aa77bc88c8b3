use std::rc::Rc;

use glam::Mat4;

use super::geometry::GraphicGeometry;
use super::scene::GraphicNode;

#[derive(Debug, Clone)]
pub struct DrawCall {
    pub node: String,
    pub world: Mat4,
    pub geometry: Rc<GraphicGeometry>,
}

/// Collects one draw call per geometry-carrying node, frame by frame.
#[derive(Debug, Default)]
pub struct Renderer {
    frame_count: u64,
    draw_calls: Vec<DrawCall>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.draw_calls.clear();
        tracing::trace!(frame = self.frame_count, "begin frame");
    }

    pub fn draw(&mut self, scene: &GraphicNode) {
        let draw_calls = &mut self.draw_calls;
        scene.render(&mut |node, world| {
            if let Some(geometry) = node.model() {
                draw_calls.push(DrawCall {
                    node: node.name().to_string(),
                    world,
                    geometry,
                });
            }
        });
    }

    pub fn end_frame(&mut self) -> &[DrawCall] {
        self.frame_count += 1;
        tracing::trace!(
            frame = self.frame_count,
            draw_calls = self.draw_calls.len(),
            "end frame"
        );
        &self.draw_calls
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
