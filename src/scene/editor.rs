//! Core StoryboardEditor implementation.
//!
//! This module provides the main `StoryboardEditor` struct that owns the live
//! scene sequence for one editing session and provides:
//! - Scene CRUD committed through the snapshot history
//! - Drag-to-reorder and drag-to-resize gesture protocols
//! - Search filtering as a pure view projection
//!
//! Every committed mutation produces a new owned sequence and pushes it to
//! history; transient in-drag updates touch only the working sequence.

use super::history::History;
use super::model::{Scene, ScenePatch, MIN_SCENE_DURATION};

/// Horizontal scale of the timeline surface: pixels per second of duration.
pub const PIXELS_PER_SECOND: f32 = 14.0;

// =============================================================================
// DRAG STATE
// =============================================================================

/// In-flight drag-to-reorder gesture.
#[derive(Debug, Clone)]
struct ReorderDrag {
    /// Id of the scene being dragged.
    source_id: String,
    /// Index of the row most recently hovered, recomputed from the hovered
    /// scene's id on every drag-over so it never goes stale.
    drop_target: Option<usize>,
}

/// In-flight drag-to-resize gesture on a scene's duration handle.
#[derive(Debug, Clone)]
struct ResizeDrag {
    scene_id: String,
    /// Duration at pointer-down, the base for the delta computation.
    initial_duration: u32,
    /// Pointer x at pointer-down.
    origin_x: f32,
}

// =============================================================================
// STORYBOARD EDITOR
// =============================================================================

/// Single-owner editor for one storyboard session.
///
/// Owns the live sequence, the selection, the search query, the undo/redo
/// history and any in-flight drag state. A session has no persistence; a
/// reload discards scenes and history.
pub struct StoryboardEditor {
    scenes: Vec<Scene>,
    selected_id: Option<String>,
    search_query: String,
    history: History,
    reorder: Option<ReorderDrag>,
    resize: Option<ResizeDrag>,
}

impl StoryboardEditor {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Creates an editor with an empty storyboard.
    pub fn new() -> Self {
        Self {
            scenes: Vec::new(),
            selected_id: None,
            search_query: String::new(),
            history: History::new(Vec::new()),
            reorder: None,
            resize: None,
        }
    }

    /// The live sequence, unfiltered, in playback order.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Id of the currently selected scene, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Selects a scene by id, or clears the selection with `None`.
    pub fn select(&mut self, id: Option<&str>) {
        self.selected_id = id.map(str::to_owned);
    }

    /// Produces the next sequence via `f`, commits it to history and makes it
    /// live. Every discrete mutation funnels through here.
    fn commit<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Vec<Scene>),
    {
        let mut next = self.scenes.clone();
        f(&mut next);
        self.history.push(next.clone());
        self.scenes = next;
    }

    // =========================================================================
    // SCENE CRUD
    // =========================================================================

    /// Appends a new default scene, selects it, and returns its id.
    pub fn add_scene(&mut self) -> String {
        let scene = Scene::new();
        let id = scene.id.clone();
        self.commit(|scenes| scenes.push(scene));
        self.selected_id = Some(id.clone());
        id
    }

    /// Removes the scene with the given id. Commits even when the id was
    /// absent (a filter that removed zero items). Clears the selection if it
    /// pointed at the removed scene.
    pub fn delete_scene(&mut self, id: &str) {
        self.commit(|scenes| scenes.retain(|s| s.id != id));
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
    }

    /// Clones the scene with the given id and inserts the copy immediately
    /// after it. Returns the new id, or `None` (without committing) when the
    /// id is unknown.
    pub fn duplicate_scene(&mut self, id: &str) -> Option<String> {
        let index = self.scenes.iter().position(|s| s.id == id)?;
        let copy = self.scenes[index].duplicate();
        let copy_id = copy.id.clone();
        self.commit(|scenes| scenes.insert(index + 1, copy));
        Some(copy_id)
    }

    /// Merges partial fields into the scene with the given id and commits.
    /// Unknown ids commit an unchanged snapshot.
    pub fn update_scene(&mut self, id: &str, patch: ScenePatch) {
        self.commit(|scenes| {
            if let Some(scene) = scenes.iter_mut().find(|s| s.id == id) {
                scene.apply(patch);
            }
        });
    }

    /// Removes the element at `from` and reinserts it at `to` in the same
    /// pass. Out-of-range indices are clamped to the valid range.
    pub fn move_scene(&mut self, from: usize, to: usize) {
        if self.scenes.is_empty() {
            return;
        }
        let last = self.scenes.len() - 1;
        let from = from.min(last);
        let to = to.min(last);
        self.commit(|scenes| {
            let scene = scenes.remove(from);
            scenes.insert(to, scene);
        });
    }

    /// Replaces the whole storyboard (auto-generate path) and commits.
    pub fn load_scenes(&mut self, scenes: Vec<Scene>) {
        self.commit(|current| *current = scenes);
        self.selected_id = None;
    }

    // =========================================================================
    // UNDO / REDO
    // =========================================================================

    /// Restores the previous snapshot. No-op at the oldest entry.
    pub fn undo(&mut self) {
        if let Some(snapshot) = self.history.undo() {
            self.scenes = snapshot.to_vec();
        }
    }

    /// Restores the next snapshot. No-op at the newest entry.
    pub fn redo(&mut self) {
        if let Some(snapshot) = self.history.redo() {
            self.scenes = snapshot.to_vec();
        }
    }

    /// True when an undo step is available (UI affordance).
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// True when a redo step is available (UI affordance).
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of retained history snapshots.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // =========================================================================
    // DRAG-TO-REORDER PROTOCOL
    // =========================================================================

    /// Starts a reorder gesture from the scene with the given id.
    pub fn begin_reorder(&mut self, scene_id: &str) {
        self.reorder = Some(ReorderDrag {
            source_id: scene_id.to_owned(),
            drop_target: None,
        });
    }

    /// Records the row currently hovered. The target index is recomputed
    /// from the hovered scene's current position, never a remembered index.
    pub fn reorder_over(&mut self, hovered_id: &str) {
        let index = self.scenes.iter().position(|s| s.id == hovered_id);
        if let (Some(drag), Some(index)) = (self.reorder.as_mut(), index) {
            drag.drop_target = Some(index);
        }
    }

    /// Drops the dragged scene. Performs the move iff source and target
    /// positions differ; always clears the drag state.
    pub fn complete_reorder(&mut self) {
        if let Some(drag) = self.reorder.take() {
            if let (Some(from), Some(to)) = (
                self.scenes.iter().position(|s| s.id == drag.source_id),
                drag.drop_target,
            ) {
                if from != to {
                    self.move_scene(from, to);
                }
            }
        }
    }

    /// Aborts the gesture. A pointer event arriving afterwards finds no drag
    /// state and does nothing.
    pub fn cancel_reorder(&mut self) {
        self.reorder = None;
    }

    // =========================================================================
    // DRAG-TO-RESIZE PROTOCOL
    // =========================================================================

    /// Starts a resize gesture on the scene's duration handle, capturing the
    /// duration and pointer x at that instant. Unknown ids are ignored.
    pub fn begin_resize(&mut self, scene_id: &str, pointer_x: f32) {
        let Some(scene) = self.scenes.iter().find(|s| s.id == scene_id) else {
            return;
        };
        self.resize = Some(ResizeDrag {
            scene_id: scene_id.to_owned(),
            initial_duration: scene.duration,
            origin_x: pointer_x,
        });
    }

    /// Applies the duration implied by the pointer position as a live,
    /// uncommitted update to the dragged scene only. No-op when no resize
    /// gesture is active.
    pub fn resize_to(&mut self, pointer_x: f32) {
        let Some(drag) = self.resize.as_ref() else {
            return;
        };
        let delta_sec = (pointer_x - drag.origin_x) / PIXELS_PER_SECOND;
        let new_duration = ((drag.initial_duration as f32 + delta_sec).round() as i64)
            .max(MIN_SCENE_DURATION as i64) as u32;
        let id = drag.scene_id.clone();
        if let Some(scene) = self.scenes.iter_mut().find(|s| s.id == id) {
            scene.duration = new_duration;
        }
    }

    /// Ends the gesture, committing exactly one history entry with the
    /// duration reached at release time.
    pub fn finish_resize(&mut self) {
        if self.resize.take().is_some() {
            self.history.push(self.scenes.clone());
        }
    }

    /// True while a resize gesture is in flight.
    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    // =========================================================================
    // SEARCH FILTER
    // =========================================================================

    /// Sets the search query. Filtering is a view projection; the underlying
    /// sequence is never mutated.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Current search query.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Scenes visible under the current query: case-insensitive substring
    /// match against title OR prompt. An empty query shows everything.
    pub fn filtered_scenes(&self) -> Vec<&Scene> {
        if self.search_query.is_empty() {
            return self.scenes.iter().collect();
        }
        let query = self.search_query.to_lowercase();
        self.scenes
            .iter()
            .filter(|s| {
                s.title.to_lowercase().contains(&query)
                    || s.prompt.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Total duration in seconds over the filtered view, derived per call.
    pub fn total_duration(&self) -> u32 {
        self.filtered_scenes().iter().map(|s| s.duration).sum()
    }
}

impl Default for StoryboardEditor {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
