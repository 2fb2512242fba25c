//! Inventory HUD strip

use ember_core::{NodeId, Result, Vec2};
use ember_runtime::{EventKind, GameEvent};
use ember_scene::{Behavior, ResourceLibrary, Scene, SceneNode, Sprite};
use log::warn;
use std::rc::Rc;

/// Horizontal spacing between item icons in pixels
const SLOT_WIDTH: f64 = 12.0;

/// Collected item icons, laid out left to right in pickup order.
///
/// The strip listens for `ItemPickedUp` and rebuilds its child sprites from
/// scratch on every change, so the visual row can never drift from the item
/// list.
pub struct Inventory {
    items: Vec<String>,
    resources: Rc<ResourceLibrary>,
}

impl Inventory {
    pub fn new(resources: Rc<ResourceLibrary>) -> Self {
        Self {
            items: Vec::new(),
            resources,
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Throw away the current icon row and respawn one sprite per item
    fn rebuild(scene: &mut Scene, id: NodeId) {
        let Some(inventory) = scene.behavior_mut::<Inventory>(id) else {
            return;
        };
        let items = inventory.items.clone();
        let resources = Rc::clone(&inventory.resources);

        let children: Vec<NodeId> = scene
            .node(id)
            .map(|node| node.children().to_vec())
            .unwrap_or_default();
        for child in children {
            scene.destroy(child);
        }

        for (index, item) in items.iter().enumerate() {
            let Some(image) = resources.get(item) else {
                warn!("inventory item '{item}' has no registered image; skipping");
                continue;
            };
            let slot = SceneNode::new()
                .with_position(Vec2::new(index as f64 * SLOT_WIDTH, 0.0))
                .with_behavior(Sprite::<()>::new(image));
            if let Err(err) = scene.spawn_child(id, slot) {
                warn!("failed to place inventory icon for '{item}': {err}");
            }
        }
    }
}

impl Behavior for Inventory {
    fn attached(&mut self, id: NodeId, scene: &mut Scene) {
        scene.on(EventKind::ItemPickedUp, id, move |scene, event| {
            if let GameEvent::ItemPickedUp { image, .. } = event {
                if let Some(inventory) = scene.behavior_mut::<Inventory>(id) {
                    inventory.items.push(image.clone());
                }
                Inventory::rebuild(scene, id);
            }
        });
    }
}
