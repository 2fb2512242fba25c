//! Typed game events

use ember_core::Vec2;
use serde::{Deserialize, Serialize};

/// An event broadcast over the [`EventBus`](crate::EventBus).
///
/// Events are a closed enum rather than string keys, so a typo in an event
/// name is a compile error instead of a silently dead subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The followed entity moved to a new absolute position
    HeroPosition(Vec2),
    /// The hero picked up a collectible
    ItemPickedUp {
        /// Resource key of the item's image
        image: String,
        /// Where the item was picked up
        position: Vec2,
    },
}

/// Discriminant of [`GameEvent`], used as the subscription key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    HeroPosition,
    ItemPickedUp,
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::HeroPosition(_) => EventKind::HeroPosition,
            GameEvent::ItemPickedUp { .. } => EventKind::ItemPickedUp,
        }
    }
}
