//! Ember Animation - Keyframe-driven sprite animation
//!
//! Provides the animation state machine:
//! - `AnimationClip` — a validated `(time, frame)` keyframe sequence with a
//!   looping playback clock
//! - `Animations` — a multi-clip controller keyed by a caller-defined enum
//! - TOML clip-library loading

mod animations;
mod clip;
mod loader;

pub use animations::Animations;
pub use clip::{AnimationClip, Keyframe};
pub use loader::{load_clip_library, load_clip_library_str, ClipConfig};
