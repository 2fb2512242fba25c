//! TOML-based clip-library loading

use crate::clip::{AnimationClip, Keyframe};
use ember_core::{EmberError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Serialized form of one clip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipConfig {
    /// Total duration in milliseconds
    pub duration: f64,
    /// Keyframes, first at time 0, strictly increasing
    pub frames: Vec<Keyframe>,
}

impl ClipConfig {
    /// Validate and build the runtime clip
    pub fn build(&self) -> Result<AnimationClip> {
        AnimationClip::new(self.duration, self.frames.clone())
    }
}

#[derive(Debug, Deserialize)]
struct ClipLibraryFile {
    clips: BTreeMap<String, ClipConfig>,
}

/// Load a clip library from a `.anim.toml` file.
///
/// The file format is a table of named clips:
/// ```toml
/// [clips.walk_down]
/// duration = 400.0
/// frames = [
///     { time = 0.0, frame = 1 },
///     { time = 100.0, frame = 0 },
///     { time = 200.0, frame = 1 },
///     { time = 300.0, frame = 2 },
/// ]
/// ```
pub fn load_clip_library(path: &Path) -> Result<BTreeMap<String, AnimationClip>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        EmberError::AnimationError(format!("Failed to read {}: {}", path.display(), e))
    })?;
    load_clip_library_str(&content)
}

/// Parse a clip library from a TOML string, validating every clip.
pub fn load_clip_library_str(content: &str) -> Result<BTreeMap<String, AnimationClip>> {
    let file: ClipLibraryFile = toml::from_str(content)?;

    let mut clips = BTreeMap::new();
    for (name, config) in file.clips {
        let clip = config.build().map_err(|e| {
            EmberError::AnimationError(format!("Clip '{name}' is invalid: {e}"))
        })?;
        clips.insert(name, clip);
    }
    Ok(clips)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_library() {
        let toml_str = r#"
[clips.walk_down]
duration = 400.0
frames = [
    { time = 0.0, frame = 1 },
    { time = 100.0, frame = 0 },
    { time = 200.0, frame = 1 },
    { time = 300.0, frame = 2 },
]

[clips.stand_down]
duration = 500.0
frames = [{ time = 0.0, frame = 1 }]
"#;
        let clips = load_clip_library_str(toml_str).unwrap();
        assert_eq!(clips.len(), 2);
        assert_eq!(clips["walk_down"].duration(), 400.0);
        assert_eq!(clips["stand_down"].frame(), 1);
    }

    #[test]
    fn reject_invalid_clip_with_name_in_error() {
        let toml_str = r#"
[clips.broken]
duration = 100.0
frames = [{ time = 50.0, frame = 0 }]
"#;
        let err = load_clip_library_str(toml_str).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn reject_malformed_toml() {
        assert!(load_clip_library_str("clips = 3").is_err());
    }
}
