//! Multi-clip playback controller

use crate::clip::AnimationClip;
use log::warn;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Controls which of several named clips is playing.
///
/// `K` is a caller-defined key type, typically a small enum per entity
/// (walk/stand by facing for the hero), so a misspelled animation name is a
/// compile error rather than a runtime lookup miss.
///
/// Only the active clip advances; inactive clips keep their progress and
/// resume from it if reactivated via [`play_from`](Self::play_from) with
/// their previous time — [`play`](Self::play) restarts them at 0.
pub struct Animations<K> {
    clips: HashMap<K, AnimationClip>,
    active: Option<K>,
}

impl<K> Animations<K>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    pub fn new() -> Self {
        Self {
            clips: HashMap::new(),
            active: None,
        }
    }

    /// Builder-style clip registration. The first clip registered becomes
    /// the active one.
    pub fn with_clip(mut self, key: K, clip: AnimationClip) -> Self {
        self.insert(key, clip);
        self
    }

    /// Register a clip. The first clip registered becomes the active one.
    pub fn insert(&mut self, key: K, clip: AnimationClip) {
        self.clips.insert(key, clip);
        if self.active.is_none() {
            self.active = Some(key);
        }
    }

    pub fn active(&self) -> Option<K> {
        self.active
    }

    pub fn contains(&self, key: K) -> bool {
        self.clips.contains_key(&key)
    }

    /// The active clip's current frame, or 0 with no active clip
    pub fn frame(&self) -> usize {
        self.active
            .and_then(|key| self.clips.get(&key))
            .map(|clip| clip.frame())
            .unwrap_or(0)
    }

    /// Switch to `key`, restarting it from time 0.
    ///
    /// Repeating the already-active key is a no-op, so holding a movement
    /// key does not restart the walk cycle every step. An unknown key is
    /// logged and ignored; the current clip keeps running.
    pub fn play(&mut self, key: K) {
        self.play_from(key, 0.0);
    }

    /// Switch to `key`, starting its clock at `start_at` milliseconds.
    /// Only the newly active clip is reset; others keep their progress.
    pub fn play_from(&mut self, key: K, start_at: f64) {
        if self.active == Some(key) {
            return;
        }
        let Some(clip) = self.clips.get_mut(&key) else {
            warn!("animation {key:?} not found; keeping current clip");
            return;
        };
        clip.set_time(start_at);
        self.active = Some(key);
    }

    /// Advance the active clip only
    pub fn step(&mut self, delta: f64) {
        if let Some(clip) = self.active.and_then(|key| self.clips.get_mut(&key)) {
            clip.step(delta);
        }
    }
}

impl<K> Default for Animations<K>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
