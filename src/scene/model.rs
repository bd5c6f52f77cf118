//! Data models for the storyboard editor.
//!
//! A storyboard is an ordered `Vec<Scene>`; the order is playback/export
//! order. Mutation always produces a new owned vector so history snapshots
//! stay independent of the live sequence.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Default duration (seconds) for a freshly added scene.
pub const DEFAULT_SCENE_DURATION: u32 = 5;

/// Minimum scene duration in seconds. Patches and drag-resize clamp to this.
pub const MIN_SCENE_DURATION: u32 = 1;

// =============================================================================
// TRANSITION
// =============================================================================

/// Transition applied when entering a scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    #[default]
    Fade,
    Slide,
    Wipe,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Fade => write!(f, "Fade"),
            Transition::Slide => write!(f, "Slide"),
            Transition::Wipe => write!(f, "Wipe"),
        }
    }
}

// =============================================================================
// SCENE
// =============================================================================

/// A single storyboard unit.
///
/// `id` is unique within a sequence and never reused. `duration` is always
/// `>= 1` second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: String,
    pub title: String,
    pub prompt: String,
    pub duration: u32,
    pub transition: Transition,
}

impl Scene {
    /// Creates a scene with a fresh id, empty text fields and defaults.
    pub fn new() -> Self {
        Self {
            id: new_scene_id(),
            title: String::new(),
            prompt: String::new(),
            duration: DEFAULT_SCENE_DURATION,
            transition: Transition::Fade,
        }
    }

    /// Builder: Set title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder: Set prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder: Set duration (clamped to the 1-second floor).
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration.max(MIN_SCENE_DURATION);
        self
    }

    /// Builder: Set transition.
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Returns a copy with a fresh id, title suffixed with " (Copy)" when the
    /// original title is non-empty.
    pub fn duplicate(&self) -> Self {
        let title = if self.title.is_empty() {
            String::new()
        } else {
            format!("{} (Copy)", self.title)
        };
        Self {
            id: new_scene_id(),
            title,
            ..self.clone()
        }
    }

    /// Merges a partial update into this scene.
    pub fn apply(&mut self, patch: ScenePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(prompt) = patch.prompt {
            self.prompt = prompt;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration.max(MIN_SCENE_DURATION);
        }
        if let Some(transition) = patch.transition {
            self.transition = transition;
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates a fresh scene id. Ids are never reused within a session.
pub fn new_scene_id() -> String {
    format!("scene-{}", Uuid::new_v4())
}

// =============================================================================
// SCENE PATCH
// =============================================================================

/// Partial-field update for a scene; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
}

impl ScenePatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Set title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder: Set prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Builder: Set duration.
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Builder: Set transition.
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scene_defaults() {
        let scene = Scene::new();
        assert!(scene.id.starts_with("scene-"));
        assert!(scene.title.is_empty());
        assert!(scene.prompt.is_empty());
        assert_eq!(scene.duration, 5);
        assert_eq!(scene.transition, Transition::Fade);
    }

    #[test]
    fn test_scene_ids_unique() {
        let a = Scene::new();
        let b = Scene::new();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_duplicate_suffixes_nonempty_title() {
        let original = Scene::new().with_title("Opening").with_duration(8);
        let copy = original.duplicate();
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.title, "Opening (Copy)");
        assert_eq!(copy.duration, 8);
        assert_eq!(copy.prompt, original.prompt);
    }

    #[test]
    fn test_duplicate_keeps_empty_title_empty() {
        let original = Scene::new();
        let copy = original.duplicate();
        assert!(copy.title.is_empty());
    }

    #[test]
    fn test_apply_patch_merges_and_clamps() {
        let mut scene = Scene::new().with_title("A");
        scene.apply(
            ScenePatch::new()
                .with_prompt("city at night")
                .with_duration(0),
        );
        assert_eq!(scene.title, "A");
        assert_eq!(scene.prompt, "city at night");
        assert_eq!(scene.duration, MIN_SCENE_DURATION);
    }

    #[test]
    fn test_transition_display() {
        assert_eq!(Transition::Fade.to_string(), "Fade");
        assert_eq!(Transition::Slide.to_string(), "Slide");
        assert_eq!(Transition::Wipe.to_string(), "Wipe");
    }
}
