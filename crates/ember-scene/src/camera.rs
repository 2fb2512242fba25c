//! Follow camera

use crate::node::{Behavior, Scene};
use ember_core::{NodeId, Vec2};
use ember_runtime::{EventKind, GameEvent};

/// Keeps the followed entity centered in the viewport.
///
/// The camera holds no reference to what it follows: on attach it subscribes
/// to `HeroPosition` and recomputes its own node position from each event,
/// so the followed entity can be replaced or destroyed without touching
/// camera code. The renderer applies the camera's position as the global
/// draw origin.
pub struct Camera {
    half_viewport: Vec2,
    half_followed: f64,
}

impl Camera {
    /// `viewport` is the full surface size in pixels; `followed_size` the
    /// followed entity's square sprite size (16 for a 16x16 hero).
    pub fn new(viewport: Vec2, followed_size: f64) -> Self {
        Self {
            half_viewport: viewport * 0.5,
            half_followed: followed_size / 2.0,
        }
    }
}

impl Behavior for Camera {
    fn attached(&mut self, id: NodeId, scene: &mut Scene) {
        let offset = Vec2::new(
            self.half_viewport.x - self.half_followed,
            self.half_viewport.y - self.half_followed,
        );
        scene.on(EventKind::HeroPosition, id, move |scene, event| {
            if let GameEvent::HeroPosition(position) = event {
                if let Some(node) = scene.node_mut(id) {
                    node.position = Vec2::new(-position.x + offset.x, -position.y + offset.y);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::SceneNode;

    #[test]
    fn centers_followed_entity() {
        let mut scene = Scene::new();
        let root = scene.root();
        let camera = scene
            .spawn_child(
                root,
                SceneNode::new().with_behavior(Camera::new(Vec2::new(320.0, 180.0), 16.0)),
            )
            .unwrap();

        scene.emit(&GameEvent::HeroPosition(Vec2::new(112.0, 80.0)));
        // half viewport (160, 90) minus half size 8 -> offsets (152, 82)
        assert_eq!(scene.node(camera).unwrap().position, Vec2::new(40.0, 2.0));
    }

    #[test]
    fn tracks_every_position_update() {
        let mut scene = Scene::new();
        let root = scene.root();
        let camera = scene
            .spawn_child(
                root,
                SceneNode::new().with_behavior(Camera::new(Vec2::new(320.0, 180.0), 16.0)),
            )
            .unwrap();

        scene.emit(&GameEvent::HeroPosition(Vec2::ZERO));
        assert_eq!(scene.node(camera).unwrap().position, Vec2::new(152.0, 82.0));

        scene.emit(&GameEvent::HeroPosition(Vec2::new(16.0, 0.0)));
        assert_eq!(scene.node(camera).unwrap().position, Vec2::new(136.0, 82.0));
    }

    #[test]
    fn destroying_the_camera_unsubscribes_it() {
        let mut scene = Scene::new();
        let root = scene.root();
        let camera = scene
            .spawn_child(
                root,
                SceneNode::new().with_behavior(Camera::new(Vec2::new(320.0, 180.0), 16.0)),
            )
            .unwrap();

        assert_eq!(scene.owner_subscription_count(camera), 1);
        scene.destroy(camera);
        assert_eq!(scene.subscription_count(), 0);
        scene.emit(&GameEvent::HeroPosition(Vec2::new(1.0, 1.0)));
    }
}
