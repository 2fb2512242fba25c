//! Scene arena, node lifecycle, and traversal

use crate::surface::RenderSurface;
use ember_core::{EmberError, NodeId, Result, Vec2};
use ember_runtime::{Direction, EventBus, EventKind, GameEvent, SubscriptionId};
use log::warn;
use std::any::Any;
use std::collections::HashMap;

/// Shared state passed down the step traversal, polled from the host once
/// per fixed step
#[derive(Debug, Clone, Copy, Default)]
pub struct StepContext {
    /// Currently intended movement direction, if any
    pub direction: Option<Direction>,
}

/// Object-safe downcast support for behaviors
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Per-node logic hooks.
///
/// During `step` the behavior is temporarily checked out of its node, which
/// is why hooks receive `&mut Scene`: a behavior may move its own node, spawn
/// or destroy others, and publish events, all mid-traversal. A `step` or
/// `draw_image` error is logged and skips only the failing node; the rest of
/// the frame proceeds.
#[allow(unused_variables)]
pub trait Behavior: AsAny + 'static {
    /// Invoked when the node joins the tree; register event subscriptions
    /// here, owned by `id` so destroy cleans them up
    fn attached(&mut self, id: NodeId, scene: &mut Scene) {}

    /// Per-fixed-step update. Runs after all of the node's children have
    /// fully stepped.
    fn step(&mut self, id: NodeId, scene: &mut Scene, delta: f64, ctx: &StepContext) -> Result<()> {
        Ok(())
    }

    /// Paint at the absolute position `(x, y)`. Runs before the node's
    /// children, so children paint over their parent.
    fn draw_image(&self, surface: &mut dyn RenderSurface, x: f64, y: f64) -> Result<()> {
        Ok(())
    }
}

/// One element of the scene tree
pub struct SceneNode {
    /// Position relative to the parent
    pub position: Vec2,
    /// Render-only additive offset; does not affect logic positions
    pub draw_offset: Vec2,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    // Empty while the behavior is checked out for a step hook
    behavior: Option<Box<dyn Behavior>>,
}

impl Default for SceneNode {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneNode {
    /// A detached node with no behavior at the origin
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            draw_offset: Vec2::ZERO,
            children: Vec::new(),
            parent: None,
            behavior: None,
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_draw_offset(mut self, draw_offset: Vec2) -> Self {
        self.draw_offset = draw_offset;
        self
    }

    pub fn with_behavior(mut self, behavior: impl Behavior) -> Self {
        self.behavior = Some(Box::new(behavior));
        self
    }

    /// Install a behavior after construction. Used when the behavior needs
    /// ids of children created first (the hero holds its body sprite's id).
    pub fn set_behavior(&mut self, behavior: impl Behavior) {
        self.behavior = Some(Box::new(behavior));
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child ids in insertion order (back-to-front paint order)
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// The scene tree plus its event bus.
///
/// Nodes live in an id-addressed arena; the tree structure is the pair of a
/// parent back-reference and an ordered child list, kept consistent by the
/// attach/detach operations. Node ids are never reused, so a stale id held
/// by a handler resolves to nothing rather than to a different node.
pub struct Scene {
    nodes: HashMap<NodeId, SceneNode>,
    root: NodeId,
    bus: EventBus<Scene>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        let root = NodeId::new();
        let mut nodes = HashMap::new();
        nodes.insert(root, SceneNode::new());
        Self {
            nodes,
            root,
            bus: EventBus::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of live nodes, including the root
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(&id)
    }

    /// Mutable access to a node's behavior as its concrete type
    pub fn behavior_mut<T: Behavior>(&mut self, id: NodeId) -> Option<&mut T> {
        // Deref to the trait object before as_any_mut: the blanket AsAny
        // impl also covers Box<dyn Behavior>, and resolving on the Box
        // would downcast against the Box type instead of the behavior
        self.nodes
            .get_mut(&id)?
            .behavior
            .as_deref_mut()?
            .as_any_mut()
            .downcast_mut::<T>()
    }

    /// Add a detached node to the arena, returning its id
    pub fn spawn(&mut self, node: SceneNode) -> NodeId {
        let id = NodeId::new();
        self.nodes.insert(id, node);
        id
    }

    /// Spawn `node` and attach it under `parent` in one call
    pub fn spawn_child(&mut self, parent: NodeId, node: SceneNode) -> Result<NodeId> {
        let id = self.spawn(node);
        self.add_child(parent, id)?;
        Ok(id)
    }

    /// Attach `child` under `parent`, appending to the paint order.
    ///
    /// Fails if either node is missing, the child is already attached
    /// somewhere, or the attachment would create a cycle. On success the
    /// child behavior's `attached` hook runs.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if !self.nodes.contains_key(&parent) {
            return Err(EmberError::NodeNotFound(parent.to_string()));
        }
        let child_node = self
            .nodes
            .get(&child)
            .ok_or_else(|| EmberError::NodeNotFound(child.to_string()))?;
        if child_node.parent.is_some() {
            return Err(EmberError::AlreadyAttached(child.to_string()));
        }
        if child == parent || self.is_ancestor(child, parent) {
            return Err(EmberError::SceneCycle(format!(
                "node {child} cannot adopt its own ancestor chain via {parent}"
            )));
        }

        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.push(child);
        }
        if let Some(child_node) = self.nodes.get_mut(&child) {
            child_node.parent = Some(parent);
        }

        // Attachment hook, with the behavior checked out so it can use the scene
        if let Some(mut behavior) = self
            .nodes
            .get_mut(&child)
            .and_then(|node| node.behavior.take())
        {
            behavior.attached(child, self);
            if let Some(node) = self.nodes.get_mut(&child) {
                node.behavior = Some(behavior);
            }
        }
        Ok(())
    }

    /// Is `ancestor` on the parent chain of `id` (or equal to it)?
    fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if node_id == ancestor {
                return true;
            }
            current = self.nodes.get(&node_id).and_then(|node| node.parent);
        }
        false
    }

    /// Detach `child` from `parent`, purging every event subscription owned
    /// by the child. The child stays in the arena, detached.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let child_node = self
            .nodes
            .get(&child)
            .ok_or_else(|| EmberError::NodeNotFound(child.to_string()))?;
        if child_node.parent != Some(parent) {
            return Err(EmberError::SceneError(format!(
                "node {child} is not a child of {parent}"
            )));
        }

        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.retain(|&c| c != child);
        }
        if let Some(child_node) = self.nodes.get_mut(&child) {
            child_node.parent = None;
        }
        self.bus.unsubscribe(child);
        Ok(())
    }

    /// Destroy a subtree: children first (post-order), then the node itself
    /// is detached, its subscriptions purged, and its arena slot freed.
    ///
    /// Destroying an already-gone id is a no-op, so handlers may destroy
    /// defensively. Afterwards no node of the subtree is reachable from the
    /// root and none retains a live subscription.
    pub fn destroy(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        for child in node.children.clone() {
            self.destroy(child);
        }

        if let Some(parent) = self.nodes.get(&id).and_then(|node| node.parent) {
            if let Some(parent_node) = self.nodes.get_mut(&parent) {
                parent_node.children.retain(|&c| c != id);
            }
        }
        self.bus.unsubscribe(id);
        self.nodes.remove(&id);
    }

    // --- Event bus facade -------------------------------------------------

    /// Subscribe a handler for `kind`, owned by `owner` for bulk cleanup
    pub fn on<F>(&mut self, kind: EventKind, owner: NodeId, callback: F) -> SubscriptionId
    where
        F: FnMut(&mut Scene, &GameEvent) + 'static,
    {
        self.bus.on(kind, owner, callback)
    }

    /// Remove exactly one subscription
    pub fn off(&mut self, id: SubscriptionId) {
        self.bus.off(id);
    }

    /// Remove every subscription owned by `owner`
    pub fn unsubscribe(&mut self, owner: NodeId) {
        self.bus.unsubscribe(owner);
    }

    pub fn subscription_count(&self) -> usize {
        self.bus.len()
    }

    pub fn owner_subscription_count(&self, owner: NodeId) -> usize {
        self.bus.owner_count(owner)
    }

    /// Synchronously dispatch `event` to the subscribers present at entry,
    /// in registration order.
    ///
    /// Handlers receive `&mut Scene` and may freely mutate nodes, subscribe,
    /// unsubscribe, or destroy — including their own node. Each callback is
    /// checked out of the bus while it runs, so the dispatch survives such
    /// edits without skipping or double-firing.
    pub fn emit(&mut self, event: &GameEvent) {
        for id in self.bus.snapshot(event.kind()) {
            let Some(mut callback) = self.bus.begin_dispatch(id) else {
                continue;
            };
            callback(self, event);
            self.bus.finish_dispatch(id, callback);
        }
    }

    // --- Traversal --------------------------------------------------------

    /// Step the whole tree for one fixed delta
    pub fn step(&mut self, delta: f64, ctx: &StepContext) {
        self.step_entry(self.root, delta, ctx);
    }

    /// Step `id`'s subtree: every child fully steps before the node's own
    /// behavior runs. The child list is snapshotted at entry, so behaviors
    /// adding or removing siblings mid-traversal cannot skip or double-step
    /// anyone; a child destroyed mid-traversal is simply gone.
    pub fn step_entry(&mut self, id: NodeId, delta: f64, ctx: &StepContext) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        for child in node.children.clone() {
            self.step_entry(child, delta, ctx);
        }

        // The node itself may have been destroyed by a child's step
        let Some(node) = self.nodes.get_mut(&id) else {
            return;
        };
        if let Some(mut behavior) = node.behavior.take() {
            if let Err(err) = behavior.step(id, self, delta, ctx) {
                warn!("step failed for node {id}: {err}");
            }
            if let Some(node) = self.nodes.get_mut(&id) {
                node.behavior = Some(behavior);
            }
        }
    }

    /// Draw the whole tree, parent before children, starting from `origin`
    /// (the camera translation). With no surface this is a no-op.
    pub fn draw(&self, surface: Option<&mut dyn RenderSurface>, origin: Vec2) {
        self.draw_from(self.root, surface, origin);
    }

    /// Draw one subtree. Lets a renderer translate the world by the camera
    /// while painting HUD subtrees untranslated.
    pub fn draw_from(&self, id: NodeId, surface: Option<&mut dyn RenderSurface>, origin: Vec2) {
        if let Some(surface) = surface {
            self.draw_node(id, surface, origin.x, origin.y);
        }
    }

    fn draw_node(&self, id: NodeId, surface: &mut dyn RenderSurface, parent_x: f64, parent_y: f64) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        let x = parent_x + node.position.x + node.draw_offset.x;
        let y = parent_y + node.position.y + node.draw_offset.y;

        if let Some(behavior) = &node.behavior {
            if let Err(err) = behavior.draw_image(surface, x, y) {
                warn!("draw failed for node {id}: {err}");
            }
        }
        for &child in &node.children {
            self.draw_node(child, surface, x, y);
        }
    }
}
