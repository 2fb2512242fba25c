//! Held-direction input tracking

use ember_core::Vec2;
use serde::{Deserialize, Serialize};

/// One of the four movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset in screen coordinates (y grows downwards)
    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Source of the currently intended movement direction, polled once per
/// fixed step. Keyboard/gamepad mapping lives behind this seam.
pub trait InputSource {
    fn direction(&self) -> Option<Direction>;
}

/// Tracks held directions as a most-recent-first stack.
///
/// Pressing a direction moves it to the front; releasing removes it; the
/// reported direction is whichever held key was pressed most recently, so
/// rolling from one arrow to another changes course without a release.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    held: Vec<Direction>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, direction: Direction) {
        if !self.held.contains(&direction) {
            self.held.insert(0, direction);
        }
    }

    pub fn release(&mut self, direction: Direction) {
        self.held.retain(|&held| held != direction);
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl InputSource for InputState {
    fn direction(&self) -> Option<Direction> {
        self.held.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_recent_press_wins() {
        let mut input = InputState::new();
        assert_eq!(input.direction(), None);

        input.press(Direction::Up);
        input.press(Direction::Left);
        assert_eq!(input.direction(), Some(Direction::Left));
    }

    #[test]
    fn release_falls_back_to_older_hold() {
        let mut input = InputState::new();
        input.press(Direction::Up);
        input.press(Direction::Left);
        input.release(Direction::Left);
        assert_eq!(input.direction(), Some(Direction::Up));

        input.release(Direction::Up);
        assert_eq!(input.direction(), None);
    }

    #[test]
    fn repeated_press_does_not_duplicate() {
        let mut input = InputState::new();
        input.press(Direction::Right);
        input.press(Direction::Right);
        input.release(Direction::Right);
        assert_eq!(input.direction(), None);
    }

    #[test]
    fn offsets_are_unit_steps() {
        assert_eq!(Direction::Up.offset(), Vec2::new(0.0, -1.0));
        assert_eq!(Direction::Down.offset(), Vec2::new(0.0, 1.0));
        assert_eq!(Direction::Left.offset(), Vec2::new(-1.0, 0.0));
        assert_eq!(Direction::Right.offset(), Vec2::new(1.0, 0.0));
    }
}
