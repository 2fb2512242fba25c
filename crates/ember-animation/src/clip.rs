//! Keyframe clips

use ember_core::{EmberError, Result};
use serde::{Deserialize, Serialize};

/// A `(time, frame)` sample point: from `time` onwards the clip shows
/// sprite-sheet frame `frame`. Times are in milliseconds from clip start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f64,
    pub frame: usize,
}

/// An ordered keyframe sequence with a looping playback clock.
///
/// Construction validates the keyframes, so the "clock before the first
/// keyframe" failure mode cannot occur at query time: the first keyframe is
/// required to sit at time 0 and the clock stays in `[0, duration)`.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    keyframes: Vec<Keyframe>,
    duration: f64,
    current_time: f64,
}

impl AnimationClip {
    /// Build a clip, validating that the duration is positive, the first
    /// keyframe is at time 0, times are strictly increasing, and every
    /// keyframe falls inside the duration.
    pub fn new(duration: f64, keyframes: Vec<Keyframe>) -> Result<Self> {
        if duration <= 0.0 {
            return Err(EmberError::AnimationError(format!(
                "clip has non-positive duration: {duration}"
            )));
        }
        let first = keyframes.first().ok_or_else(|| {
            EmberError::AnimationError("clip has no keyframes".to_string())
        })?;
        if first.time != 0.0 {
            return Err(EmberError::AnimationError(format!(
                "first keyframe must be at time 0, got {}",
                first.time
            )));
        }
        for pair in keyframes.windows(2) {
            if pair[1].time <= pair[0].time {
                return Err(EmberError::AnimationError(format!(
                    "keyframe times must be strictly increasing: {} then {}",
                    pair[0].time, pair[1].time
                )));
            }
        }
        if let Some(last) = keyframes.last() {
            if last.time >= duration {
                return Err(EmberError::AnimationError(format!(
                    "last keyframe at {} is outside duration {}",
                    last.time, duration
                )));
            }
        }

        Ok(Self {
            keyframes,
            duration,
            current_time: 0.0,
        })
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Set the playback clock, wrapping into `[0, duration)`
    pub fn set_time(&mut self, time: f64) {
        self.current_time = time.rem_euclid(self.duration);
    }

    /// Advance the playback clock.
    ///
    /// Reaching the duration hard-resets the clock to 0; a delta spanning
    /// multiple durations discards the excess rather than keeping it as
    /// phase.
    pub fn step(&mut self, delta: f64) {
        self.current_time += delta;
        if self.current_time >= self.duration {
            self.current_time = 0.0;
        }
    }

    /// The frame of the last keyframe whose time is at or before the clock
    pub fn frame(&self) -> usize {
        self.keyframes
            .iter()
            .rev()
            .find(|key| key.time <= self.current_time)
            .map(|key| key.frame)
            // The first keyframe sits at time 0, so the scan always hits
            .unwrap_or(self.keyframes[0].frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_clip() -> AnimationClip {
        AnimationClip::new(
            300.0,
            vec![
                Keyframe { time: 0.0, frame: 7 },
                Keyframe { time: 100.0, frame: 8 },
                Keyframe { time: 200.0, frame: 9 },
            ],
        )
        .unwrap()
    }

    #[test]
    fn frame_tracks_elapsed_time() {
        let mut clip = abc_clip();
        assert_eq!(clip.frame(), 7);

        clip.set_time(150.0);
        assert_eq!(clip.frame(), 8);

        clip.set_time(250.0);
        assert_eq!(clip.frame(), 9);
    }

    #[test]
    fn step_past_duration_hard_resets() {
        let mut clip = abc_clip();
        clip.step(350.0);
        // Excess time is discarded, not carried as phase
        assert_eq!(clip.current_time(), 0.0);
        assert_eq!(clip.frame(), 7);
    }

    #[test]
    fn step_accumulates_below_duration() {
        let mut clip = abc_clip();
        clip.step(120.0);
        clip.step(120.0);
        assert_eq!(clip.current_time(), 240.0);
        assert_eq!(clip.frame(), 9);
    }

    #[test]
    fn reject_missing_zero_keyframe() {
        let result = AnimationClip::new(100.0, vec![Keyframe { time: 10.0, frame: 0 }]);
        assert!(result.is_err());
    }

    #[test]
    fn reject_empty_keyframes() {
        assert!(AnimationClip::new(100.0, vec![]).is_err());
    }

    #[test]
    fn reject_non_increasing_times() {
        let result = AnimationClip::new(
            100.0,
            vec![
                Keyframe { time: 0.0, frame: 0 },
                Keyframe { time: 50.0, frame: 1 },
                Keyframe { time: 50.0, frame: 2 },
            ],
        );
        assert!(result.is_err());
    }

    #[test]
    fn reject_keyframe_outside_duration() {
        let result = AnimationClip::new(
            100.0,
            vec![
                Keyframe { time: 0.0, frame: 0 },
                Keyframe { time: 100.0, frame: 1 },
            ],
        );
        assert!(result.is_err());
    }

    #[test]
    fn reject_zero_duration() {
        assert!(AnimationClip::new(0.0, vec![Keyframe { time: 0.0, frame: 0 }]).is_err());
    }
}
