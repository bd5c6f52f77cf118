//! Command routing for trigger surfaces.
//!
//! Keyboard shortcuts and the command palette speak a fixed, closed
//! vocabulary of string identifiers. `Command::parse` maps identifiers to
//! commands, `dispatch` maps commands to editor/store/export calls, and
//! `CommandBus` queues commands so trigger surfaces stay decoupled from the
//! editor's mutation API. The router is a trigger layer, not a validator:
//! unknown identifiers are dropped, never errors.

use std::collections::VecDeque;

use crate::catalog::{CatalogStore, Video};
use crate::export::{self, Download};
use crate::scene::StoryboardEditor;

// =============================================================================
// COMMANDS
// =============================================================================

/// Navigation targets for `navigate-to-<page>` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    MyVideos,
    Templates,
    Usage,
    Account,
}

impl Page {
    /// The page's URL path.
    pub fn path(&self) -> &'static str {
        match self {
            Page::Dashboard => "/dashboard",
            Page::MyVideos => "/my-videos",
            Page::Templates => "/templates",
            Page::Usage => "/usage",
            Page::Account => "/account",
        }
    }
}

/// The closed command vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddScene,
    DeleteScene,
    DuplicateScene,
    AutoGenerate,
    PublishAll,
    ExportPack,
    ExportPromptBundle,
    Undo,
    Redo,
    NavigateTo(Page),
}

impl Command {
    /// Maps a command identifier to a command. Unknown identifiers yield
    /// `None`.
    pub fn parse(id: &str) -> Option<Command> {
        match id {
            "add-scene" => Some(Command::AddScene),
            "delete-scene" => Some(Command::DeleteScene),
            "duplicate-scene" => Some(Command::DuplicateScene),
            "auto-generate" => Some(Command::AutoGenerate),
            "publish-all" => Some(Command::PublishAll),
            "export-pack" => Some(Command::ExportPack),
            "export-prompt-bundle" => Some(Command::ExportPromptBundle),
            "undo" => Some(Command::Undo),
            "redo" => Some(Command::Redo),
            "navigate-to-dashboard" => Some(Command::NavigateTo(Page::Dashboard)),
            "navigate-to-my-videos" => Some(Command::NavigateTo(Page::MyVideos)),
            "navigate-to-templates" => Some(Command::NavigateTo(Page::Templates)),
            "navigate-to-usage" => Some(Command::NavigateTo(Page::Usage)),
            "navigate-to-account" => Some(Command::NavigateTo(Page::Account)),
            _ => None,
        }
    }
}

// =============================================================================
// OUTCOMES
// =============================================================================

/// Effect descriptor returned by dispatch; the host performs the side
/// effects (navigation, the actual file download, toasts).
#[derive(Debug)]
pub enum Outcome {
    /// The command ran and mutated editor state.
    Done,
    /// The identifier was not in the vocabulary; nothing happened.
    Ignored,
    /// Delete/duplicate had no selected scene to act on.
    NoSelection,
    /// The host should navigate to the page.
    Navigate(Page),
    /// The host should download the artifact.
    Download(Download),
    /// Publish created these videos.
    Published(Vec<Video>),
    /// The command failed; the message is user-facing.
    Failed(String),
}

/// Routes one command identifier to the editor, store and export pipeline.
pub fn dispatch(id: &str, editor: &mut StoryboardEditor, store: &mut CatalogStore) -> Outcome {
    let Some(command) = Command::parse(id) else {
        log::debug!("ignoring unknown command: {}", id);
        return Outcome::Ignored;
    };
    run(command, editor, store)
}

/// Routes an already-parsed command.
pub fn run(command: Command, editor: &mut StoryboardEditor, store: &mut CatalogStore) -> Outcome {
    match command {
        Command::AddScene => {
            editor.add_scene();
            Outcome::Done
        }
        Command::DeleteScene => match editor.selected_id().map(str::to_owned) {
            Some(id) => {
                editor.delete_scene(&id);
                Outcome::Done
            }
            None => Outcome::NoSelection,
        },
        Command::DuplicateScene => match editor.selected_id().map(str::to_owned) {
            Some(id) => {
                editor.duplicate_scene(&id);
                Outcome::Done
            }
            None => Outcome::NoSelection,
        },
        Command::AutoGenerate => {
            let scenes = store.generate_storyboard("");
            editor.load_scenes(scenes);
            Outcome::Done
        }
        Command::PublishAll => match store.publish_storyboard(editor.scenes()) {
            Ok(videos) => Outcome::Published(videos),
            Err(e) => {
                log::warn!("publish-all failed: {}", e);
                Outcome::Failed(e.to_string())
            }
        },
        Command::ExportPack => {
            match export::export_pack(store.all_videos(), store.all_templates()) {
                Ok(download) => Outcome::Download(download),
                Err(e) => {
                    log::error!("export-pack failed: {}", e);
                    Outcome::Failed(e.to_string())
                }
            }
        }
        Command::ExportPromptBundle => {
            let bundle = store.generate_prompt_bundle(editor.scenes());
            match export::bundle_download(&bundle) {
                Ok(download) => Outcome::Download(download),
                Err(e) => {
                    log::error!("export-prompt-bundle failed: {}", e);
                    Outcome::Failed(e.to_string())
                }
            }
        }
        Command::Undo => {
            editor.undo();
            Outcome::Done
        }
        Command::Redo => {
            editor.redo();
            Outcome::Done
        }
        Command::NavigateTo(page) => Outcome::Navigate(page),
    }
}

// =============================================================================
// COMMAND BUS
// =============================================================================

/// In-process command queue decoupling trigger surfaces from the editor.
///
/// Surfaces publish identifiers as events arrive; the host drains the queue
/// inside its update loop. FIFO order is preserved.
#[derive(Debug, Default)]
pub struct CommandBus {
    queue: VecDeque<Command>,
}

impl CommandBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and enqueues an identifier. Unknown identifiers are dropped.
    pub fn publish(&mut self, id: &str) {
        match Command::parse(id) {
            Some(command) => self.queue.push_back(command),
            None => log::debug!("dropping unknown command: {}", id),
        }
    }

    /// Enqueues an already-parsed command.
    pub fn publish_command(&mut self, command: Command) {
        self.queue.push_back(command);
    }

    /// Number of queued commands.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Dispatches every queued command in order and collects the outcomes.
    pub fn drain(
        &mut self,
        editor: &mut StoryboardEditor,
        store: &mut CatalogStore,
    ) -> Vec<Outcome> {
        self.queue
            .drain(..)
            .map(|command| run(command, editor, store))
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
