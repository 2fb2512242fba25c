//! World assembly and the session facade

use crate::surface::RecordingSurface;
use crate::{hero, inventory::Inventory, level, rod};
use ember_core::{grid_cells, NodeId, Result, Vec2};
use ember_runtime::{FrameHooks, GameLoop, InputSource, InputState};
use ember_scene::{
    Camera, ImageHandle, ResourceLibrary, Scene, SceneNode, Sprite, StepContext,
};
use std::rc::Rc;

/// Logical render size in pixels
pub const VIEWPORT: Vec2 = Vec2::new(320.0, 180.0);

/// The hero's footprint, used to center the follow camera
pub const HERO_SIZE: f64 = 16.0;

/// Scene contents plus the per-frame services: input state and the render
/// surface. Split out from [`Game`] so the loop can drive it through
/// [`FrameHooks`] without borrowing the loop itself.
pub struct World {
    pub scene: Scene,
    pub input: InputState,
    pub surface: RecordingSurface,
    backdrop_root: NodeId,
    world_root: NodeId,
    hud_root: NodeId,
    camera: NodeId,
    hero: NodeId,
    inventory: NodeId,
    rods: Vec<NodeId>,
}

impl World {
    fn build() -> Result<Self> {
        let mut resources = ResourceLibrary::new();
        for (index, key) in ["sky", "ground", "hero", "shadow", "rod"].iter().enumerate() {
            resources.insert(*key, ImageHandle(index as u64 + 1)).mark_loaded();
        }
        let resources = Rc::new(resources);
        let walls = Rc::new(level::demo_walls());

        let mut scene = Scene::new();
        let root = scene.root();

        // Fixed backdrop, drawn before the scrolling world
        let backdrop_root = scene.spawn_child(root, SceneNode::new())?;
        if let Some(sky) = resources.get("sky") {
            scene.spawn_child(
                backdrop_root,
                SceneNode::new().with_behavior(Sprite::<()>::new(sky).with_frame_size(VIEWPORT)),
            )?;
        }

        let world_root = scene.spawn_child(root, SceneNode::new())?;
        if let Some(ground) = resources.get("ground") {
            scene.spawn_child(
                world_root,
                SceneNode::new().with_behavior(Sprite::<()>::new(ground).with_frame_size(VIEWPORT)),
            )?;
        }

        let rods = vec![
            rod::spawn(
                &mut scene,
                world_root,
                Vec2::new(grid_cells(7), grid_cells(5)),
                &resources,
            )?,
            rod::spawn(
                &mut scene,
                world_root,
                Vec2::new(grid_cells(11), grid_cells(7)),
                &resources,
            )?,
        ];

        let hero = hero::spawn(
            &mut scene,
            world_root,
            Vec2::new(grid_cells(5), grid_cells(5)),
            Rc::clone(&walls),
            &resources,
        )?;

        let camera = scene.spawn_child(
            root,
            SceneNode::new().with_behavior(Camera::new(VIEWPORT, HERO_SIZE)),
        )?;

        // HUD draws last, in screen space
        let hud_root = scene.spawn_child(root, SceneNode::new())?;
        let inventory = scene.spawn_child(
            hud_root,
            SceneNode::new()
                .with_position(Vec2::new(0.0, 1.0))
                .with_behavior(Inventory::new(Rc::clone(&resources))),
        )?;

        Ok(Self {
            scene,
            input: InputState::new(),
            surface: RecordingSurface::new(),
            backdrop_root,
            world_root,
            hud_root,
            camera,
            hero,
            inventory,
            rods,
        })
    }

    pub fn hero_position(&self) -> Vec2 {
        self.scene
            .node(self.hero)
            .map(|node| node.position)
            .unwrap_or(Vec2::ZERO)
    }

    pub fn camera_position(&self) -> Vec2 {
        self.scene
            .node(self.camera)
            .map(|node| node.position)
            .unwrap_or(Vec2::ZERO)
    }

    pub fn item_count(&mut self) -> usize {
        self.scene
            .behavior_mut::<Inventory>(self.inventory)
            .map(|inventory| inventory.item_count())
            .unwrap_or(0)
    }

    pub fn remaining_rods(&self) -> usize {
        self.rods
            .iter()
            .filter(|&&rod| self.scene.contains(rod))
            .count()
    }
}

impl FrameHooks for World {
    fn update(&mut self, delta: f64) {
        let ctx = StepContext {
            direction: self.input.direction(),
        };
        self.scene.step(delta, &ctx);
    }

    fn render(&mut self) {
        self.surface.begin_frame();
        let camera = self.camera_position();
        self.scene
            .draw_from(self.backdrop_root, Some(&mut self.surface), Vec2::ZERO);
        self.scene
            .draw_from(self.world_root, Some(&mut self.surface), camera);
        self.scene
            .draw_from(self.hud_root, Some(&mut self.surface), Vec2::ZERO);
    }
}

/// A running demo session: the fixed-step loop plus the world it drives
pub struct Game {
    game_loop: GameLoop,
    pub world: World,
}

impl Game {
    pub fn new() -> Result<Self> {
        let mut game_loop = GameLoop::new();
        game_loop.start(0.0);
        Ok(Self {
            game_loop,
            world: World::build()?,
        })
    }

    /// Advance the session to wall-clock time `now_ms`
    pub fn frame(&mut self, now_ms: f64) {
        self.game_loop.frame(now_ms, &mut self.world);
    }

    pub fn stop(&mut self) {
        self.game_loop.stop();
    }
}
