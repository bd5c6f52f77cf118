//! Storyboard editing module.
//!
//! This module provides:
//! - `model`: Scene, Transition and partial-update types
//! - `history`: snapshot-based undo/redo over the scene sequence
//! - `editor`: StoryboardEditor with CRUD, drag gestures and search
//! - `wasm`: WASM bindings for browser usage (JsStoryboardEditor)

pub mod editor;
pub mod history;
pub mod model;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use editor::{StoryboardEditor, PIXELS_PER_SECOND};
pub use history::{History, MAX_HISTORY_SIZE};
pub use model::{new_scene_id, Scene, ScenePatch, Transition, DEFAULT_SCENE_DURATION};

#[cfg(feature = "wasm")]
pub use wasm::JsStoryboardEditor;
