//! Ember Core - Foundational types for the Ember engine
//!
//! This crate provides the core types that all other Ember crates depend on:
//! - `NodeId` - Stable scene-node identifiers
//! - `Vec2` - 2D vector math, including grid-locked movement helpers
//! - `SpaceQuery` / `WallSet` - Boolean occupancy queries over grid cells
//! - Error types and Result alias

mod error;
mod grid;
mod id;
mod types;

pub use error::{EmberError, Result};
pub use grid::{grid_cells, SpaceQuery, WallSet, GRID_SIZE};
pub use id::NodeId;
pub use types::{move_towards, Vec2};
