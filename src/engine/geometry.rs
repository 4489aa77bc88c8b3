use glam::Vec3;

/// Vertex/index buffer a scene node can render.
#[derive(Debug, Clone, Default)]
pub struct GraphicGeometry {
    pub name: String,
    pub vertices: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl GraphicGeometry {
    pub fn new(name: impl Into<String>, vertices: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            vertices,
            indices,
        }
    }

    /// Flat square marker centred on the origin, facing +Z.
    pub fn marker_quad(name: impl Into<String>, half_extent: f32) -> Self {
        let h = half_extent;
        Self::new(
            name,
            vec![
                Vec3::new(-h, -h, 0.0),
                Vec3::new(h, -h, 0.0),
                Vec3::new(h, h, 0.0),
                Vec3::new(-h, h, 0.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
        )
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
