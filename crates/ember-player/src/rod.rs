//! Collectible rod item

use ember_core::{EmberError, NodeId, Result, Vec2};
use ember_runtime::{EventKind, GameEvent};
use ember_scene::{Behavior, ResourceLibrary, Scene, SceneNode, Sprite};

/// A rod sitting on the ground. It watches hero positions and, when the hero
/// steps onto its cell, removes itself and announces the pickup.
pub struct Rod;

impl Behavior for Rod {
    fn attached(&mut self, id: NodeId, scene: &mut Scene) {
        let Some(position) = scene.node(id).map(|node| node.position) else {
            return;
        };
        scene.on(EventKind::HeroPosition, id, move |scene, event| {
            if let GameEvent::HeroPosition(hero) = event {
                let arrived = hero.x.round() == position.x && hero.y.round() == position.y;
                if arrived {
                    // Destroying first drops this subscription, so a second
                    // HeroPosition on the same cell cannot double-collect
                    scene.destroy(id);
                    scene.emit(&GameEvent::ItemPickedUp {
                        image: "rod".to_string(),
                        position,
                    });
                }
            }
        });
    }
}

/// Place a rod at `position` under `parent`
pub fn spawn(
    scene: &mut Scene,
    parent: NodeId,
    position: Vec2,
    resources: &ResourceLibrary,
) -> Result<NodeId> {
    let image = resources
        .get("rod")
        .ok_or_else(|| EmberError::ResourceError("rod image is not registered".into()))?;
    let rod = scene.spawn(SceneNode::new().with_position(position).with_behavior(Rod));
    scene.spawn_child(
        rod,
        SceneNode::new()
            .with_position(Vec2::new(0.0, -5.0))
            .with_behavior(Sprite::<()>::new(image)),
    )?;
    scene.add_child(parent, rod)?;
    Ok(rod)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_scene::ImageHandle;

    fn library() -> ResourceLibrary {
        let mut resources = ResourceLibrary::new();
        resources.insert("rod", ImageHandle(1)).mark_loaded();
        resources
    }

    #[test]
    fn hero_arrival_destroys_rod_and_announces_pickup() {
        let mut scene = Scene::new();
        let root = scene.root();
        let resources = library();
        let rod = spawn(&mut scene, root, Vec2::new(112.0, 80.0), &resources).unwrap();

        let listener = scene.spawn(SceneNode::new());
        let count = std::rc::Rc::new(std::cell::Cell::new(0_u32));
        let seen = std::rc::Rc::clone(&count);
        scene.on(EventKind::ItemPickedUp, listener, move |_, _| {
            seen.set(seen.get() + 1);
        });

        // Walking nearby is not a pickup
        scene.emit(&GameEvent::HeroPosition(Vec2::new(96.0, 80.0)));
        assert!(scene.contains(rod));

        scene.emit(&GameEvent::HeroPosition(Vec2::new(112.0, 80.0)));
        assert_eq!(count.get(), 1);
        assert!(!scene.contains(rod));
        assert_eq!(scene.owner_subscription_count(rod), 0);
    }

    #[test]
    fn fractional_hero_position_rounds_onto_cell() {
        let mut scene = Scene::new();
        let root = scene.root();
        let resources = library();
        let rod = spawn(&mut scene, root, Vec2::new(112.0, 80.0), &resources).unwrap();

        scene.emit(&GameEvent::HeroPosition(Vec2::new(111.6, 80.4)));
        assert!(!scene.contains(rod));
    }
}
