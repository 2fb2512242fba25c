//! Ember Player - Headless demo session
//!
//! Wires the engine crates into a small playable world: a hero walking a
//! walled grid, collectible rods, an inventory HUD, and a camera following
//! the hero — all rendered into a recording surface so the session runs
//! without a window.

pub mod game;
pub mod hero;
pub mod inventory;
pub mod level;
pub mod rod;
pub mod surface;

pub use game::{Game, World, HERO_SIZE, VIEWPORT};
