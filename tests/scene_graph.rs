use std::rc::Rc;

use glam::{Mat4, Vec3};
use sights::engine::geometry::GraphicGeometry;
use sights::engine::renderer::Renderer;
use sights::GraphicNode;

#[test]
fn add_child_links_parent_and_child() {
    let root = GraphicNode::new("root");
    let child = GraphicNode::new("child");
    root.add_child(child.clone());

    assert_eq!(root.child_count(), 1);
    let parent = child.parent().expect("child should have a parent");
    assert!(Rc::ptr_eq(&parent, &root));
    assert!(Rc::ptr_eq(&root.child(0).unwrap(), &child));
    assert!(root.parent().is_none());
}

#[test]
fn child_out_of_range_is_none() {
    let root = GraphicNode::new("root");
    assert!(root.child(0).is_none());
    root.add_child(GraphicNode::new("only"));
    assert!(root.child(0).is_some());
    assert!(root.child(1).is_none());
    assert!(root.remove_child(5).is_none());
    assert_eq!(root.child_count(), 1);
}

#[test]
fn adding_to_a_new_parent_detaches_from_the_old_one() {
    let first = GraphicNode::new("first");
    let second = GraphicNode::new("second");
    let child = GraphicNode::new("child");

    first.add_child(child.clone());
    second.add_child(child.clone());

    assert_eq!(first.child_count(), 0);
    assert_eq!(second.child_count(), 1);
    assert!(Rc::ptr_eq(&child.parent().unwrap(), &second));
}

#[test]
fn removal_clears_parent_links() {
    let root = GraphicNode::new("root");
    let a = GraphicNode::new("a");
    let b = GraphicNode::new("b");
    let c = GraphicNode::new("c");
    root.add_child(a.clone());
    root.add_child(b.clone());
    root.add_child(c.clone());

    let removed = root.remove_child(1).unwrap();
    assert!(Rc::ptr_eq(&removed, &b));
    assert!(b.parent().is_none());
    assert_eq!(root.child(1).unwrap().name(), "c");

    root.remove_children();
    assert_eq!(root.child_count(), 0);
    assert!(a.parent().is_none());
    assert!(c.parent().is_none());
}

#[test]
fn parent_is_none_once_dropped() {
    let child = GraphicNode::new("child");
    {
        let root = GraphicNode::new("root");
        root.add_child(child.clone());
        assert!(child.parent().is_some());
    }
    assert!(child.parent().is_none());
}

#[test]
fn render_visits_parents_before_children_in_order() {
    let root = GraphicNode::new("root");
    let a = GraphicNode::new("a");
    a.add_child(GraphicNode::new("a1"));
    a.add_child(GraphicNode::new("a2"));
    root.add_child(a);
    root.add_child(GraphicNode::new("b"));

    let mut visited = Vec::new();
    root.render(&mut |node, _| visited.push(node.name().to_string()));

    assert_eq!(visited, ["root", "a", "a1", "a2", "b"]);
}

#[test]
fn world_transform_accumulates_ancestors() {
    let root = GraphicNode::with_transform("root", Mat4::from_translation(Vec3::X));
    let group = GraphicNode::with_transform("group", Mat4::from_translation(Vec3::new(0.0, 2.0, 0.0)));
    let leaf = GraphicNode::with_transform("leaf", Mat4::from_translation(Vec3::new(0.0, 0.0, 3.0)));
    root.add_child(group.clone());
    group.add_child(leaf.clone());

    let world = leaf.world_transform();
    assert_eq!(world.transform_point3(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));

    let mut leaf_world = None;
    root.render(&mut |node, world| {
        if node.name() == "leaf" {
            leaf_world = Some(world);
        }
    });
    assert_eq!(leaf_world, Some(world));
}

#[test]
fn renderer_draws_only_nodes_with_geometry() {
    let root = GraphicNode::new("root");
    let marker = GraphicNode::new("marker");
    marker.set_model(Some(Rc::new(GraphicGeometry::marker_quad("pin", 1.0))));
    root.add_child(marker);
    root.add_child(GraphicNode::new("group"));

    let mut renderer = Renderer::new();
    renderer.begin_frame();
    renderer.draw(&root);
    let calls = renderer.end_frame();

    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].node, "marker");
    assert_eq!(calls[0].geometry.triangle_count(), 2);
    assert_eq!(renderer.frame_count(), 1);
}

#[test]
fn re_adding_a_child_moves_it_to_the_end() {
    let root = GraphicNode::new("root");
    let a = GraphicNode::new("a");
    root.add_child(a.clone());
    root.add_child(GraphicNode::new("b"));

    root.add_child(a.clone());

    assert_eq!(root.child_count(), 2);
    assert_eq!(root.child(0).unwrap().name(), "b");
    assert!(Rc::ptr_eq(&root.child(1).unwrap(), &a));
    assert!(Rc::ptr_eq(&a.parent().unwrap(), &root));
}
