//! WASM bindings for the storyboard editor.
//!
//! This module provides a JavaScript-friendly wrapper around the core
//! StoryboardEditor for use in browser environments.

use js_sys::Array;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use super::editor::StoryboardEditor;
use super::model::{Scene, ScenePatch};

/// Serialize a value to JsValue with maps as plain JS objects (not Map).
fn to_js_value<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&Serializer::new().serialize_maps_as_objects(true))
}

// =============================================================================
// MAIN WRAPPER TYPE
// =============================================================================

/// JavaScript-friendly wrapper around StoryboardEditor.
///
/// Owns one editing session's scenes, selection, search state and undo/redo
/// history for use from the dashboard UI.
#[wasm_bindgen]
pub struct JsStoryboardEditor {
    inner: StoryboardEditor,
}

#[wasm_bindgen]
impl JsStoryboardEditor {
    /// Creates an editor with an empty storyboard.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const editor = new JsStoryboardEditor();
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsStoryboardEditor {
        JsStoryboardEditor {
            inner: StoryboardEditor::new(),
        }
    }

    /// The live sequence as an array of scene objects.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const scenes = editor.getScenes();
    /// console.log(scenes[0].title);
    /// ```
    #[wasm_bindgen(js_name = getScenes)]
    pub fn get_scenes(&self) -> Result<JsValue, JsValue> {
        Ok(to_js_value(self.inner.scenes())?)
    }

    /// Scenes visible under the current search query.
    #[wasm_bindgen(js_name = getFilteredScenes)]
    pub fn get_filtered_scenes(&self) -> Result<JsValue, JsValue> {
        let filtered: Vec<&Scene> = self.inner.filtered_scenes();
        Ok(to_js_value(&filtered)?)
    }

    /// Appends a new default scene, selects it, and returns its id.
    #[wasm_bindgen(js_name = addScene)]
    pub fn add_scene(&mut self) -> String {
        self.inner.add_scene()
    }

    /// Removes a scene by id.
    #[wasm_bindgen(js_name = deleteScene)]
    pub fn delete_scene(&mut self, id: &str) {
        self.inner.delete_scene(id);
    }

    /// Duplicates a scene; returns the new id or null for unknown ids.
    #[wasm_bindgen(js_name = duplicateScene)]
    pub fn duplicate_scene(&mut self, id: &str) -> Option<String> {
        self.inner.duplicate_scene(id)
    }

    /// Merges a partial update into a scene.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// editor.updateScene(id, { title: 'Opening', duration: 8 });
    /// ```
    #[wasm_bindgen(js_name = updateScene)]
    pub fn update_scene(&mut self, id: &str, patch: JsValue) -> Result<(), JsValue> {
        let patch: ScenePatch = from_value(patch)?;
        self.inner.update_scene(id, patch);
        Ok(())
    }

    /// Moves a scene from one index to another (indices clamped).
    #[wasm_bindgen(js_name = moveScene)]
    pub fn move_scene(&mut self, from: usize, to: usize) {
        self.inner.move_scene(from, to);
    }

    /// Replaces the whole storyboard (auto-generate path).
    #[wasm_bindgen(js_name = loadScenes)]
    pub fn load_scenes(&mut self, scenes: JsValue) -> Result<(), JsValue> {
        let scenes: Vec<Scene> = from_value(scenes)?;
        self.inner.load_scenes(scenes);
        Ok(())
    }
}

// =============================================================================
// SELECTION, HISTORY AND SEARCH
// =============================================================================

#[wasm_bindgen]
impl JsStoryboardEditor {
    /// Selects a scene by id; pass null to clear.
    pub fn select(&mut self, id: Option<String>) {
        self.inner.select(id.as_deref());
    }

    /// The selected scene id, or null.
    #[wasm_bindgen(js_name = selectedId)]
    pub fn selected_id(&self) -> Option<String> {
        self.inner.selected_id().map(str::to_owned)
    }

    /// Restores the previous snapshot.
    pub fn undo(&mut self) {
        self.inner.undo();
    }

    /// Restores the next snapshot.
    pub fn redo(&mut self) {
        self.inner.redo();
    }

    /// True when an undo step is available (disable the button otherwise).
    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }

    /// True when a redo step is available.
    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.inner.can_redo()
    }

    /// Sets the search query filtering the visible scenes.
    #[wasm_bindgen(js_name = setSearchQuery)]
    pub fn set_search_query(&mut self, query: &str) {
        self.inner.set_search_query(query);
    }

    /// Total duration in seconds over the filtered view.
    #[wasm_bindgen(js_name = totalDuration)]
    pub fn total_duration(&self) -> u32 {
        self.inner.total_duration()
    }
}

// =============================================================================
// DRAG GESTURES
// =============================================================================

#[wasm_bindgen]
impl JsStoryboardEditor {
    /// Starts a reorder gesture (dragstart).
    #[wasm_bindgen(js_name = beginReorder)]
    pub fn begin_reorder(&mut self, scene_id: &str) {
        self.inner.begin_reorder(scene_id);
    }

    /// Records the hovered row (dragover).
    #[wasm_bindgen(js_name = reorderOver)]
    pub fn reorder_over(&mut self, hovered_id: &str) {
        self.inner.reorder_over(hovered_id);
    }

    /// Drops the dragged scene (drop).
    #[wasm_bindgen(js_name = completeReorder)]
    pub fn complete_reorder(&mut self) {
        self.inner.complete_reorder();
    }

    /// Aborts the gesture (dragend).
    #[wasm_bindgen(js_name = cancelReorder)]
    pub fn cancel_reorder(&mut self) {
        self.inner.cancel_reorder();
    }

    /// Starts a resize gesture on a scene's duration handle (pointerdown).
    #[wasm_bindgen(js_name = beginResize)]
    pub fn begin_resize(&mut self, scene_id: &str, pointer_x: f32) {
        self.inner.begin_resize(scene_id, pointer_x);
    }

    /// Live-updates the dragged duration (pointermove).
    #[wasm_bindgen(js_name = resizeTo)]
    pub fn resize_to(&mut self, pointer_x: f32) {
        self.inner.resize_to(pointer_x);
    }

    /// Commits the resize as one history entry (pointerup).
    #[wasm_bindgen(js_name = finishResize)]
    pub fn finish_resize(&mut self) {
        self.inner.finish_resize();
    }

    /// Exposes the reorder ids as an array (debug aid for the host).
    #[wasm_bindgen(js_name = sceneIds)]
    pub fn scene_ids(&self) -> Array {
        let array = Array::new();
        for scene in self.inner.scenes() {
            array.push(&JsValue::from_str(&scene.id));
        }
        array
    }
}

impl Default for JsStoryboardEditor {
    fn default() -> Self {
        Self::new()
    }
}
