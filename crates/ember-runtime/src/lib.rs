//! Ember Runtime - Game loop infrastructure
//!
//! Provides the core game loop building blocks:
//! - `GameLoop` — fixed-timestep accumulator driven by host frame callbacks
//! - `GameEvent` / `EventKind` — typed events for decoupled communication
//! - `EventBus` — owner-scoped publish/subscribe registry
//! - `InputState` / `InputSource` — held-direction tracking

mod clock;
mod event;
mod event_bus;
mod input;

pub use clock::{FrameHooks, GameLoop, DEFAULT_FIXED_STEP_MS, MAX_FRAME_MS};
pub use event::{EventKind, GameEvent};
pub use event_bus::{EventBus, SubscriptionId};
pub use input::{Direction, InputSource, InputState};
