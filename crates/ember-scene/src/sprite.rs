//! Sprite-sheet node behavior

use crate::node::{Behavior, Scene, StepContext};
use crate::resources::ImageResource;
use crate::surface::{Rect, RenderSurface};
use ember_animation::Animations;
use ember_core::{NodeId, Result, Vec2};
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

/// A sprite with no animation controller
pub type StaticSprite = Sprite<()>;

/// Draws one cell of a sprite sheet, optionally driven by an animation
/// controller.
///
/// The sheet is `h_frames` columns by `v_frames` rows of `frame_size` cells,
/// indexed row-major by `frame`. While the underlying image resource has not
/// finished loading the sprite draws nothing and retries next frame.
pub struct Sprite<K = ()> {
    resource: Rc<ImageResource>,
    frame_size: Vec2,
    h_frames: usize,
    v_frames: usize,
    frame: usize,
    scale: Vec2,
    animations: Option<Animations<K>>,
}

impl<K> Sprite<K>
where
    K: Copy + Eq + Hash + fmt::Debug + 'static,
{
    /// A single-cell 16x16 sprite showing frame 0 at scale 1
    pub fn new(resource: Rc<ImageResource>) -> Self {
        Self {
            resource,
            frame_size: Vec2::new(16.0, 16.0),
            h_frames: 1,
            v_frames: 1,
            frame: 0,
            scale: Vec2::ONE,
            animations: None,
        }
    }

    pub fn with_frame_size(mut self, frame_size: Vec2) -> Self {
        self.frame_size = frame_size;
        self
    }

    /// Set the sheet grid: `h_frames` columns, `v_frames` rows
    pub fn with_sheet(mut self, h_frames: usize, v_frames: usize) -> Self {
        self.h_frames = h_frames.max(1);
        self.v_frames = v_frames.max(1);
        self
    }

    pub fn with_frame(mut self, frame: usize) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_animations(mut self, animations: Animations<K>) -> Self {
        self.animations = Some(animations);
        self
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Switch the animation controller to `key`. No controller, no effect.
    pub fn play(&mut self, key: K) {
        if let Some(animations) = &mut self.animations {
            animations.play(key);
        }
    }

    /// Top-left corner of the current frame within the sheet.
    /// An out-of-range frame falls back to the sheet origin.
    fn frame_origin(&self) -> Vec2 {
        if self.frame >= self.h_frames * self.v_frames {
            return Vec2::ZERO;
        }
        Vec2::new(
            (self.frame % self.h_frames) as f64 * self.frame_size.x,
            (self.frame / self.h_frames) as f64 * self.frame_size.y,
        )
    }
}

impl<K> Behavior for Sprite<K>
where
    K: Copy + Eq + Hash + fmt::Debug + 'static,
{
    fn step(&mut self, _id: NodeId, _scene: &mut Scene, delta: f64, _ctx: &StepContext) -> Result<()> {
        if let Some(animations) = &mut self.animations {
            animations.step(delta);
            self.frame = animations.frame();
        }
        Ok(())
    }

    fn draw_image(&self, surface: &mut dyn RenderSurface, x: f64, y: f64) -> Result<()> {
        if !self.resource.is_loaded() {
            // Not an error: the load completes out-of-band and draw runs
            // again next frame
            return Ok(());
        }

        let origin = self.frame_origin();
        let src = Rect::new(origin.x, origin.y, self.frame_size.x, self.frame_size.y);
        let dst = Rect::new(
            x,
            y,
            self.frame_size.x * self.scale.x,
            self.frame_size.y * self.scale.y,
        );
        surface.draw_image(self.resource.handle(), src, dst);
        Ok(())
    }
}
