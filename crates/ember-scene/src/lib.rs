//! Ember Scene - Hierarchical scene graph
//!
//! The scene is an id-addressed arena of nodes forming a tree: each node has
//! a local position, an ordered child list (insertion order is paint order),
//! and an optional [`Behavior`] providing its per-step and per-draw hooks.
//! The scene also owns the event bus, so behaviors and event handlers can
//! publish and subscribe through the `&mut Scene` they are handed.

mod camera;
mod node;
mod resources;
mod sprite;
mod surface;

pub use camera::Camera;
pub use node::{AsAny, Behavior, Scene, SceneNode, StepContext};
pub use resources::{ImageResource, ResourceLibrary};
pub use sprite::{Sprite, StaticSprite};
pub use surface::{ImageHandle, Rect, RenderSurface};
