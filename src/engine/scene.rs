use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use glam::Mat4;

use super::geometry::GraphicGeometry;

/// A renderable node in a scene tree.
///
/// Nodes are shared through `Rc`; a parent owns its children and each child
/// keeps a `Weak` back-reference. `add_child` and the removal methods keep both
/// sides in agreement, so `child.parent()` is always the node whose child list
/// contains it.
#[derive(Debug, Default)]
pub struct GraphicNode {
    name: String,
    transform: Cell<Mat4>,
    children: RefCell<Vec<Rc<GraphicNode>>>,
    parent: RefCell<Weak<GraphicNode>>,
    // empty when the node is a pure group
    geometry: RefCell<Option<Rc<GraphicGeometry>>>,
}

impl GraphicNode {
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Self::with_transform(name, Mat4::IDENTITY)
    }

    pub fn with_transform(name: impl Into<String>, transform: Mat4) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            transform: Cell::new(transform),
            ..Default::default()
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transform(&self) -> Mat4 {
        self.transform.get()
    }

    pub fn set_transform(&self, transform: Mat4) {
        self.transform.set(transform);
    }

    /// Local transform composed with every ancestor's, root first.
    pub fn world_transform(&self) -> Mat4 {
        let mut world = self.transform();
        let mut current = self.parent();
        while let Some(node) = current {
            world = node.transform() * world;
            current = node.parent();
        }
        world
    }

    /// Appends `child`, detaching it from its previous parent first.
    pub fn add_child(self: &Rc<Self>, child: Rc<GraphicNode>) {
        if let Some(previous) = child.parent() {
            previous
                .children
                .borrow_mut()
                .retain(|existing| !Rc::ptr_eq(existing, &child));
        }
        tracing::trace!(parent = %self.name, child = %child.name, "attaching scene node");
        *child.parent.borrow_mut() = Rc::downgrade(self);
        self.children.borrow_mut().push(child);
    }

    pub fn child(&self, index: usize) -> Option<Rc<GraphicNode>> {
        self.children.borrow().get(index).cloned()
    }

    pub fn child_count(&self) -> usize {
        self.children.borrow().len()
    }

    pub fn remove_child(&self, index: usize) -> Option<Rc<GraphicNode>> {
        let mut children = self.children.borrow_mut();
        if index >= children.len() {
            tracing::debug!(node = %self.name, index, count = children.len(), "no child at index");
            return None;
        }
        let child = children.remove(index);
        *child.parent.borrow_mut() = Weak::new();
        Some(child)
    }

    pub fn remove_children(&self) {
        for child in self.children.borrow_mut().drain(..) {
            *child.parent.borrow_mut() = Weak::new();
        }
    }

    /// Parent node, or `None` if detached or the parent has been dropped.
    pub fn parent(&self) -> Option<Rc<GraphicNode>> {
        self.parent.borrow().upgrade()
    }

    pub fn set_model(&self, model: Option<Rc<GraphicGeometry>>) {
        *self.geometry.borrow_mut() = model;
    }

    pub fn model(&self) -> Option<Rc<GraphicGeometry>> {
        self.geometry.borrow().clone()
    }

    /// Walks this node and its subtree depth-first, parents before children,
    /// handing each node and its world transform to `visit`.
    pub fn render(&self, visit: &mut dyn FnMut(&GraphicNode, Mat4)) {
        self.render_at(self.world_transform(), visit);
    }

    fn render_at(&self, world: Mat4, visit: &mut dyn FnMut(&GraphicNode, Mat4)) {
        visit(self, world);
        // snapshot so the visitor may edit the tree
        let children = self.children.borrow().clone();
        for child in children {
            child.render_at(world * child.transform(), visit);
        }
    }
}
