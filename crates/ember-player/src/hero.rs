//! The player-controlled hero

use ember_animation::{load_clip_library_str, AnimationClip, Animations};
use ember_core::{move_towards, EmberError, NodeId, Result, SpaceQuery, Vec2, WallSet, GRID_SIZE};
use ember_runtime::{Direction, GameEvent};
use ember_scene::{Behavior, ResourceLibrary, Scene, SceneNode, Sprite, StepContext};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Embedded clip library for the hero sheet
const HERO_CLIPS: &str = include_str!("../assets/hero.anim.toml");

/// Pixels moved per fixed step
const SPEED: f64 = 1.0;

/// Animation keys for the hero body sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroAnim {
    WalkUp,
    WalkDown,
    WalkLeft,
    WalkRight,
    StandUp,
    StandDown,
    StandLeft,
    StandRight,
}

impl HeroAnim {
    fn walk(direction: Direction) -> Self {
        match direction {
            Direction::Up => HeroAnim::WalkUp,
            Direction::Down => HeroAnim::WalkDown,
            Direction::Left => HeroAnim::WalkLeft,
            Direction::Right => HeroAnim::WalkRight,
        }
    }

    fn stand(direction: Direction) -> Self {
        match direction {
            Direction::Up => HeroAnim::StandUp,
            Direction::Down => HeroAnim::StandDown,
            Direction::Left => HeroAnim::StandLeft,
            Direction::Right => HeroAnim::StandRight,
        }
    }
}

/// Grid-locked movement: the hero walks one pixel per step towards a
/// destination cell; on arrival it polls input for the next cell, skipping
/// blocked cells, and drives its body sprite's walk/stand clips. Position
/// changes are published as `HeroPosition` events.
pub struct Hero {
    body: NodeId,
    facing: Direction,
    destination: Vec2,
    last_emitted: Option<Vec2>,
    walls: Rc<WallSet>,
}

impl Hero {
    fn play(&self, scene: &mut Scene, key: HeroAnim) {
        if let Some(sprite) = scene.behavior_mut::<Sprite<HeroAnim>>(self.body) {
            sprite.play(key);
        }
    }

    fn try_move(&mut self, scene: &mut Scene, direction: Option<Direction>) {
        let Some(direction) = direction else {
            self.play(scene, HeroAnim::stand(self.facing));
            return;
        };

        // Walk animation plays even against a wall, matching the
        // walking-in-place feel
        self.play(scene, HeroAnim::walk(direction));
        self.facing = direction;

        let next = self.destination + direction.offset() * GRID_SIZE;
        if self.walls.is_space_free(next.x, next.y) {
            self.destination = next;
        }
    }
}

impl Behavior for Hero {
    fn step(&mut self, id: NodeId, scene: &mut Scene, _delta: f64, ctx: &StepContext) -> Result<()> {
        let Some(node) = scene.node_mut(id) else {
            return Ok(());
        };
        let remaining = move_towards(&mut node.position, self.destination, SPEED);
        let position = node.position;

        if remaining <= SPEED {
            self.try_move(scene, ctx.direction);
        }

        if self.last_emitted != Some(position) {
            self.last_emitted = Some(position);
            scene.emit(&GameEvent::HeroPosition(position));
        }
        Ok(())
    }
}

/// Build the hero subtree under `parent`: shadow sprite, animated body
/// sprite, and the movement behavior.
pub fn spawn(
    scene: &mut Scene,
    parent: NodeId,
    start: Vec2,
    walls: Rc<WallSet>,
    resources: &ResourceLibrary,
) -> Result<NodeId> {
    let hero = scene.spawn(SceneNode::new().with_position(start));

    let shadow = resources
        .get("shadow")
        .ok_or_else(|| EmberError::ResourceError("shadow image is not registered".into()))?;
    scene.spawn_child(
        hero,
        SceneNode::new()
            .with_position(Vec2::new(-8.0, -19.0))
            .with_behavior(Sprite::<()>::new(shadow).with_frame_size(Vec2::new(32.0, 32.0))),
    )?;

    let body_image = resources
        .get("hero")
        .ok_or_else(|| EmberError::ResourceError("hero image is not registered".into()))?;
    let body = scene.spawn_child(
        hero,
        SceneNode::new()
            .with_position(Vec2::new(-8.0, -21.0))
            .with_behavior(
                Sprite::new(body_image)
                    .with_frame_size(Vec2::new(32.0, 32.0))
                    .with_sheet(3, 8)
                    .with_frame(1)
                    .with_animations(animations()?),
            ),
    )?;

    if let Some(node) = scene.node_mut(hero) {
        node.set_behavior(Hero {
            body,
            facing: Direction::Down,
            destination: start,
            last_emitted: None,
            walls,
        });
    }
    scene.add_child(parent, hero)?;
    Ok(hero)
}

/// Load the embedded clip library into a keyed controller, standing-down by
/// default
fn animations() -> Result<Animations<HeroAnim>> {
    let clips = load_clip_library_str(HERO_CLIPS)?;
    Ok(Animations::new()
        .with_clip(HeroAnim::StandDown, clip(&clips, "stand_down")?)
        .with_clip(HeroAnim::StandUp, clip(&clips, "stand_up")?)
        .with_clip(HeroAnim::StandLeft, clip(&clips, "stand_left")?)
        .with_clip(HeroAnim::StandRight, clip(&clips, "stand_right")?)
        .with_clip(HeroAnim::WalkDown, clip(&clips, "walk_down")?)
        .with_clip(HeroAnim::WalkUp, clip(&clips, "walk_up")?)
        .with_clip(HeroAnim::WalkLeft, clip(&clips, "walk_left")?)
        .with_clip(HeroAnim::WalkRight, clip(&clips, "walk_right")?))
}

fn clip(clips: &BTreeMap<String, AnimationClip>, name: &str) -> Result<AnimationClip> {
    clips.get(name).cloned().ok_or_else(|| {
        EmberError::AnimationError(format!("hero clip library is missing '{name}'"))
    })
}
