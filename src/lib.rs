//! Storyreel - storyboard timeline editing and export engine for AI video
//! generation dashboards.
//!
//! This crate provides the state-machine core behind a browser storyboard
//! editor:
//!
//! - **Snapshot undo/redo**: every committed mutation produces a new owned
//!   scene sequence and pushes it to a bounded linear history
//! - **Gesture protocols**: drag-to-reorder and drag-to-resize as explicit
//!   state machines with live, uncommitted previews
//! - **Export pipeline**: pure derivations to CSV, PDF and JSON artifacts
//! - **Command routing**: a closed identifier vocabulary dispatched over the
//!   editor, the catalog store and the exporters
//!
//! # Example
//!
//! ```rust
//! use storyreel::{ScenePatch, StoryboardEditor};
//!
//! let mut editor = StoryboardEditor::new();
//!
//! // Build a storyboard; each call commits one undo step.
//! let id = editor.add_scene();
//! editor.update_scene(&id, ScenePatch::new().with_title("Opening").with_duration(8));
//! editor.add_scene();
//! assert_eq!(editor.total_duration(), 13);
//!
//! // Step back before the second scene was added.
//! editor.undo();
//! assert_eq!(editor.scenes().len(), 1);
//! assert_eq!(editor.total_duration(), 8);
//!
//! // Export the current sequence.
//! let csv = storyreel::export::scenes_to_csv(editor.scenes()).unwrap();
//! assert!(csv.starts_with("id,title,prompt,duration,transition"));
//! ```

pub mod error;

// Storyboard editing
pub mod scene;

// Catalog backend (videos, templates, styles, progress)
pub mod catalog;

// Export pipeline (CSV, PDF, pack, bundle)
pub mod export;

// Command routing
pub mod commands;

// Re-exports for convenience
pub use catalog::{CatalogStore, JobStatusProvider, SimulatedJobs};
pub use commands::{dispatch, Command, CommandBus, Outcome, Page};
pub use error::{ReelError, ReelResult};
pub use export::Download;
pub use scene::{History, Scene, ScenePatch, StoryboardEditor, Transition};

#[cfg(feature = "wasm")]
pub use scene::JsStoryboardEditor;
