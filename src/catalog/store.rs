//! Core CatalogStore implementation.
//!
//! This module provides the in-memory backend behind the dashboard:
//! - Video/template CRUD with listing filters, macro-generated where the
//!   shape is uniform
//! - The demo account and its session handling
//! - Render-job progress driven by the simulated job machine
//! - Storyboard bridges: auto-generate, publish-all, prompt bundles
//!
//! All operations run synchronously: overlapping updates cannot interleave,
//! so same-entity writes resolve last-write-wins in call order.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use paste::paste;
use uuid::Uuid;

use crate::error::{ReelError, ReelResult};
use crate::scene::{Scene, Transition};

use super::model::{
    AuthTokens, BundleItem, CreateTemplateInput, CreateVideoInput, LoginCredentials,
    PaginatedResponse, PromptBundle, Session, SignUpCredentials, Style, Template, User,
    UsageStats, Video, VideoFilters, VideoMetadata, VideoProgressEvent, VideoStatus,
    TemplateFilters,
};
use super::progress::{progress_message, JobStatusProvider, SimulatedJobs};
use super::seed;

const DEMO_EMAIL: &str = "demo@example.com";
const DEMO_PASSWORD: &str = "demo";

/// Session token lifetime: 15 minutes, in milliseconds.
const TOKEN_TTL_MS: i64 = 15 * 60 * 1000;

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// =============================================================================
// ENTITY CRUD MACRO
// =============================================================================

/// Generates lookup/update/take methods for an id-keyed collection.
/// Updates stamp `updated_at`; missing ids surface as NotFound.
macro_rules! entity_crud {
    ($entity:ident, $collection:ident, $kind:literal) => {
        paste! {
            /// Gets a record by id.
            pub fn [<$entity:snake>](&self, id: &str) -> ReelResult<$entity> {
                self.$collection
                    .iter()
                    .find(|e| e.id == id)
                    .cloned()
                    .ok_or_else(|| ReelError::not_found($kind, id))
            }

            /// Applies a mutation to the record and stamps its update time.
            pub fn [<update_ $entity:snake>]<F>(&mut self, id: &str, f: F) -> ReelResult<$entity>
            where
                F: FnOnce(&mut $entity),
            {
                let record = self
                    .$collection
                    .iter_mut()
                    .find(|e| e.id == id)
                    .ok_or_else(|| ReelError::not_found($kind, id))?;
                f(record);
                record.updated_at = now_iso();
                Ok(record.clone())
            }

            /// Removes and returns the record.
            fn [<take_ $entity:snake>](&mut self, id: &str) -> ReelResult<$entity> {
                let index = self
                    .$collection
                    .iter()
                    .position(|e| e.id == id)
                    .ok_or_else(|| ReelError::not_found($kind, id))?;
                Ok(self.$collection.remove(index))
            }
        }
    };
}

// =============================================================================
// CATALOG STORE
// =============================================================================

/// Single-owner in-memory catalog for one dashboard session.
pub struct CatalogStore {
    videos: Vec<Video>,
    templates: Vec<Template>,
    styles: Vec<Style>,
    user: User,
    authenticated: bool,
    jobs: SimulatedJobs,
}

impl CatalogStore {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Creates a store seeded with the demo fixtures.
    pub fn new() -> Self {
        Self {
            videos: seed::videos(),
            templates: seed::templates(),
            styles: seed::styles(),
            user: seed::demo_user(),
            authenticated: false,
            jobs: SimulatedJobs::new(),
        }
    }

    /// Creates an empty store (no fixture data).
    pub fn empty() -> Self {
        Self {
            videos: Vec::new(),
            templates: Vec::new(),
            styles: seed::styles(),
            user: seed::demo_user(),
            authenticated: false,
            jobs: SimulatedJobs::new(),
        }
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// Logs in. Only the demo credentials succeed.
    pub fn login(&mut self, credentials: &LoginCredentials) -> ReelResult<Session> {
        if credentials.email == DEMO_EMAIL && credentials.password == DEMO_PASSWORD {
            self.authenticated = true;
            Ok(self.session())
        } else {
            Err(ReelError::InvalidCredentials)
        }
    }

    /// Registers a new account. The already-registered email is rejected.
    pub fn register(&mut self, credentials: &SignUpCredentials) -> ReelResult<Session> {
        if credentials.email == self.user.email {
            return Err(ReelError::EmailTaken(credentials.email.clone()));
        }
        self.user.email = credentials.email.clone();
        self.user.display_name = credentials.display_name.clone();
        self.authenticated = true;
        Ok(self.session())
    }

    /// Ends the session.
    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    /// The account record; requires an authenticated session.
    pub fn current_user(&self) -> ReelResult<&User> {
        if self.authenticated {
            Ok(&self.user)
        } else {
            Err(ReelError::NotAuthenticated)
        }
    }

    /// Applies a mutation to the account and stamps its update time.
    pub fn update_user<F>(&mut self, f: F) -> User
    where
        F: FnOnce(&mut User),
    {
        f(&mut self.user);
        self.user.updated_at = now_iso();
        self.user.clone()
    }

    fn session(&self) -> Session {
        let now_ms = Utc::now().timestamp_millis();
        Session {
            user: self.user.clone(),
            tokens: AuthTokens {
                access_token: format!("mock-access-token-{}", now_ms),
                refresh_token: format!("mock-refresh-token-{}", now_ms),
                expires_at: now_ms + TOKEN_TTL_MS,
            },
        }
    }

    // =========================================================================
    // VIDEOS
    // =========================================================================

    entity_crud!(Video, videos, "video");
    entity_crud!(Template, templates, "template");

    /// Lists videos matching the filters, newest first.
    pub fn videos(&self, filters: &VideoFilters) -> PaginatedResponse<Video> {
        let search = filters.search.as_ref().map(|s| s.to_lowercase());
        let mut filtered: Vec<Video> = self
            .videos
            .iter()
            .filter(|v| filters.status.map_or(true, |s| v.status == s))
            .filter(|v| {
                filters
                    .style_id
                    .as_ref()
                    .map_or(true, |s| &v.style_id == s)
            })
            .filter(|v| filters.aspect_ratio.map_or(true, |a| v.aspect_ratio == a))
            .filter(|v| {
                search.as_ref().map_or(true, |q| {
                    v.title.to_lowercase().contains(q) || v.prompt.to_lowercase().contains(q)
                })
            })
            .cloned()
            .collect();
        filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        PaginatedResponse::single_page(filtered)
    }

    /// The full video collection (export path), insertion order.
    pub fn all_videos(&self) -> &[Video] {
        &self.videos
    }

    /// Creates a queued video and registers its render job.
    pub fn create_video(&mut self, input: CreateVideoInput) -> Video {
        let now = now_iso();
        let video = Video {
            id: format!("vid-{}", Uuid::new_v4()),
            user_id: self.user.id.clone(),
            thumbnail_url: Some(thumbnail_data_url(&input.title)),
            title: input.title,
            prompt: input.prompt,
            style_id: input.style_id,
            aspect_ratio: input.aspect_ratio,
            duration: input.duration,
            status: VideoStatus::Queued,
            file_url: None,
            error_message: None,
            template_id: input.template_id,
            metadata: VideoMetadata::default(),
            created_at: now.clone(),
            updated_at: now,
        };
        self.videos.insert(0, video.clone());
        self.jobs.enqueue(&video.id);
        video
    }

    /// Removes a video and drops its render job.
    pub fn delete_video(&mut self, id: &str) -> ReelResult<()> {
        self.take_video(id)?;
        self.jobs.remove(id);
        Ok(())
    }

    /// Progress snapshot for a video's render job.
    pub fn video_progress(&self, id: &str) -> ReelResult<VideoProgressEvent> {
        let job = self
            .jobs
            .status(id)
            .ok_or_else(|| ReelError::not_found("video", id))?;
        Ok(VideoProgressEvent {
            video_id: id.to_owned(),
            status: job.status,
            progress: job.progress,
            message: Some(progress_message(job.status, job.progress).to_owned()),
        })
    }

    /// Advances every render job one step and mirrors the transitions onto
    /// the video records. The host's polling loop drives this at the cadence
    /// from [`super::progress::poll_interval`].
    pub fn tick(&mut self) {
        let completed = self.jobs.tick();
        for video in self.videos.iter_mut() {
            let Some(job) = self.jobs.status(&video.id) else {
                continue;
            };
            if job.status != video.status {
                video.status = job.status;
                video.updated_at = now_iso();
            }
        }
        for id in completed {
            if let Some(video) = self.videos.iter_mut().find(|v| v.id == id) {
                video.file_url = Some(format!("https://example.com/videos/{}.mp4", id));
                video.thumbnail_url = Some(format!("https://example.com/thumbnails/{}.jpg", id));
                video.metadata = VideoMetadata {
                    resolution: Some("1920x1080".into()),
                    file_size: Some(u64::from(video.duration) * 1_048_576),
                    format: Some("mp4".into()),
                    generation_time: Some(video.duration.max(30)),
                    ..Default::default()
                };
            }
        }
    }

    // =========================================================================
    // TEMPLATES
    // =========================================================================

    /// Lists templates matching the filters.
    pub fn templates(&self, filters: &TemplateFilters) -> PaginatedResponse<Template> {
        let search = filters.search.as_ref().map(|s| s.to_lowercase());
        let filtered: Vec<Template> = self
            .templates
            .iter()
            .filter(|t| {
                filters
                    .style
                    .as_ref()
                    .map_or(true, |s| &t.default_style == s)
            })
            .filter(|t| {
                search.as_ref().map_or(true, |q| {
                    t.title.to_lowercase().contains(q)
                        || t.base_prompt.to_lowercase().contains(q)
                })
            })
            .cloned()
            .collect();
        PaginatedResponse::single_page(filtered)
    }

    /// The full template collection (export path), insertion order.
    pub fn all_templates(&self) -> &[Template] {
        &self.templates
    }

    /// Creates a template.
    pub fn create_template(&mut self, input: CreateTemplateInput) -> Template {
        let now = now_iso();
        let template = Template {
            id: format!("tpl-{}", Uuid::new_v4()),
            user_id: self.user.id.clone(),
            title: input.title,
            base_prompt: input.base_prompt,
            default_style: input.default_style,
            default_aspect_ratio: input.default_aspect_ratio,
            default_duration: input.default_duration,
            variables: input.variables,
            is_public: input.is_public,
            usage_count: 0,
            created_at: now.clone(),
            updated_at: now,
        };
        self.templates.insert(0, template.clone());
        template
    }

    /// Removes a template.
    pub fn delete_template(&mut self, id: &str) -> ReelResult<()> {
        self.take_template(id)?;
        Ok(())
    }

    // =========================================================================
    // STYLES & USAGE
    // =========================================================================

    /// The style presets.
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Aggregate usage counters derived from the video collection.
    pub fn usage_stats(&self) -> UsageStats {
        let week_ago = Utc::now() - Duration::days(7);
        let month_ago = Utc::now() - Duration::days(30);
        let created_after = |video: &Video, cutoff: DateTime<Utc>| {
            DateTime::parse_from_rfc3339(&video.created_at)
                .map(|created| created.with_timezone(&Utc) > cutoff)
                .unwrap_or(false)
        };

        let mut stats = UsageStats {
            user_id: self.user.id.clone(),
            total_videos: self.videos.len(),
            ..Default::default()
        };
        for video in &self.videos {
            match video.status {
                VideoStatus::Queued => stats.queued_videos += 1,
                VideoStatus::Processing => stats.processing_videos += 1,
                VideoStatus::Completed => stats.completed_videos += 1,
                VideoStatus::Failed => stats.failed_videos += 1,
            }
            if created_after(video, week_ago) {
                stats.videos_this_week += 1;
            }
            if created_after(video, month_ago) {
                stats.videos_this_month += 1;
            }
            if video.file_url.is_some() {
                stats.videos_with_files += 1;
            }
            *stats
                .style_breakdown
                .entry(video.style_id.clone())
                .or_insert(0) += 1;
            *stats
                .aspect_breakdown
                .entry(video.aspect_ratio.to_string())
                .or_insert(0) += 1;
        }
        stats
    }

    // =========================================================================
    // STORYBOARD BRIDGE
    // =========================================================================

    /// Derives a three-scene storyboard (intro, main, call-to-action) from a
    /// high-level prompt.
    pub fn generate_storyboard(&self, prompt: &str) -> Vec<Scene> {
        let base = match prompt.trim() {
            "" => "Storyboard from prompt",
            trimmed => trimmed,
        };
        vec![
            Scene::new()
                .with_title("Intro")
                .with_prompt(format!("Intro: {}", base))
                .with_duration(5)
                .with_transition(Transition::Fade),
            Scene::new()
                .with_title("Main")
                .with_prompt(format!("Main: {}", base))
                .with_duration(12)
                .with_transition(Transition::Slide),
            Scene::new()
                .with_title("CTA")
                .with_prompt(format!("CTA: {}", base))
                .with_duration(5)
                .with_transition(Transition::Fade),
        ]
    }

    /// Publishes a storyboard: one queued video per scene, in order. An
    /// empty storyboard is an error surfaced to the caller.
    pub fn publish_storyboard(&mut self, scenes: &[Scene]) -> ReelResult<Vec<Video>> {
        if scenes.is_empty() {
            return Err(ReelError::EmptyStoryboard);
        }
        let videos = scenes
            .iter()
            .map(|scene| {
                let title = if scene.title.is_empty() {
                    format!("Storyboard Scene {}", scene.id)
                } else {
                    scene.title.clone()
                };
                self.create_video(
                    CreateVideoInput::new(title, scene.prompt.clone())
                        .with_duration(scene.duration),
                )
            })
            .collect();
        Ok(videos)
    }

    /// Flattens a storyboard into a named prompt bundle.
    pub fn generate_prompt_bundle(&self, scenes: &[Scene]) -> PromptBundle {
        PromptBundle {
            bundle_name: format!("StoryboardBundle_{}", Utc::now().timestamp_millis()),
            items: scenes
                .iter()
                .map(|scene| BundleItem {
                    scene_title: if scene.title.is_empty() {
                        scene.id.clone()
                    } else {
                        scene.title.clone()
                    },
                    prompt: scene.prompt.clone(),
                    duration: scene.duration,
                })
                .collect(),
        }
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Inline SVG placeholder thumbnail as a data URL.
fn thumbnail_data_url(title: &str) -> String {
    let safe: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();
    let label = if safe.is_empty() { "Video" } else { &safe };
    let svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"320\" height=\"180\">\
         <rect width=\"100%\" height=\"100%\" fill=\"#6366f1\"/>\
         <text x=\"50%\" y=\"50%\" dominant-baseline=\"middle\" text-anchor=\"middle\" \
         fill=\"#fff\" font-family=\"Arial\" font-size=\"20\">{}</text></svg>",
        label
    );
    format!("data:image/svg+xml;utf8,{}", svg)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::AspectRatio;

    #[test]
    fn test_seeded_store_counts() {
        let store = CatalogStore::new();
        assert_eq!(store.all_videos().len(), 6);
        assert_eq!(store.all_templates().len(), 3);
        assert_eq!(store.styles().len(), 7);
    }

    #[test]
    fn test_create_video_enqueues_job() {
        let mut store = CatalogStore::empty();
        let video = store.create_video(CreateVideoInput::new("Demo", "a demo clip"));
        assert_eq!(video.status, VideoStatus::Queued);
        assert!(video.thumbnail_url.is_some());

        let progress = store.video_progress(&video.id).unwrap();
        assert_eq!(progress.status, VideoStatus::Queued);
        assert_eq!(progress.progress, 0);
        assert_eq!(progress.message.as_deref(), Some("Waiting in queue..."));
    }

    #[test]
    fn test_tick_walks_video_to_completed() {
        let mut store = CatalogStore::empty();
        let video = store.create_video(CreateVideoInput::new("Demo", "p").with_duration(15));

        store.tick();
        assert_eq!(
            store.video(&video.id).unwrap().status,
            VideoStatus::Processing
        );

        // 5 steps to a full bar, one more to complete.
        for _ in 0..6 {
            store.tick();
        }
        let finished = store.video(&video.id).unwrap();
        assert_eq!(finished.status, VideoStatus::Completed);
        assert!(finished.file_url.is_some());
        assert_eq!(finished.metadata.resolution.as_deref(), Some("1920x1080"));
    }

    #[test]
    fn test_video_filters_and_sort() {
        let store = CatalogStore::new();

        let completed = store.videos(&VideoFilters {
            status: Some(VideoStatus::Completed),
            ..Default::default()
        });
        assert_eq!(completed.items.len(), 3);
        // Newest first.
        assert_eq!(completed.items[0].id, "vid-1");

        let vertical = store.videos(&VideoFilters {
            aspect_ratio: Some(AspectRatio::Vertical),
            ..Default::default()
        });
        assert_eq!(vertical.items.len(), 2);

        let search = store.videos(&VideoFilters {
            search: Some("TESTIMONIAL".into()),
            ..Default::default()
        });
        assert_eq!(search.items.len(), 1);
        assert_eq!(search.items[0].id, "vid-4");
    }

    #[test]
    fn test_update_and_delete_not_found() {
        let mut store = CatalogStore::empty();
        let err = store.update_video("vid-missing", |v| v.title.clear());
        assert!(matches!(err, Err(ReelError::NotFound { kind: "video", .. })));
        assert!(store.delete_video("vid-missing").is_err());
        assert!(store.delete_template("tpl-missing").is_err());
    }

    #[test]
    fn test_update_video_stamps_updated_at() {
        let mut store = CatalogStore::new();
        let before = store.video("vid-1").unwrap();
        let after = store
            .update_video("vid-1", |v| v.title = "Renamed".into())
            .unwrap();
        assert_eq!(after.title, "Renamed");
        assert_ne!(after.updated_at, before.updated_at);
    }

    #[test]
    fn test_delete_video_drops_job() {
        let mut store = CatalogStore::empty();
        let video = store.create_video(CreateVideoInput::new("Demo", "p"));
        store.delete_video(&video.id).unwrap();
        assert!(store.video_progress(&video.id).is_err());
        assert!(store.all_videos().is_empty());
    }

    #[test]
    fn test_login_rejects_wrong_credentials() {
        let mut store = CatalogStore::new();
        let err = store.login(&LoginCredentials {
            email: "demo@example.com".into(),
            password: "nope".into(),
        });
        assert!(matches!(err, Err(ReelError::InvalidCredentials)));
        assert!(store.current_user().is_err());

        let session = store
            .login(&LoginCredentials {
                email: "demo@example.com".into(),
                password: "demo".into(),
            })
            .unwrap();
        assert!(session.tokens.access_token.starts_with("mock-access-token-"));
        assert!(store.current_user().is_ok());

        store.logout();
        assert!(matches!(
            store.current_user(),
            Err(ReelError::NotAuthenticated)
        ));
    }

    #[test]
    fn test_register_rejects_taken_email() {
        let mut store = CatalogStore::new();
        let err = store.register(&SignUpCredentials {
            email: "demo@example.com".into(),
            password: "x".into(),
            display_name: "Dup".into(),
        });
        assert!(matches!(err, Err(ReelError::EmailTaken(_))));

        let session = store
            .register(&SignUpCredentials {
                email: "new@example.com".into(),
                password: "x".into(),
                display_name: "Newcomer".into(),
            })
            .unwrap();
        assert_eq!(session.user.email, "new@example.com");
        assert_eq!(store.current_user().unwrap().display_name, "Newcomer");
    }

    #[test]
    fn test_usage_stats_breakdowns() {
        let store = CatalogStore::new();
        let stats = store.usage_stats();
        assert_eq!(stats.total_videos, 6);
        assert_eq!(stats.completed_videos, 3);
        assert_eq!(stats.processing_videos, 1);
        assert_eq!(stats.queued_videos, 1);
        assert_eq!(stats.failed_videos, 1);
        assert_eq!(stats.videos_with_files, 3);
        assert_eq!(stats.style_breakdown.get("clean-motion"), Some(&1));
        assert_eq!(stats.aspect_breakdown.get("16:9"), Some(&4));
    }

    #[test]
    fn test_generate_storyboard_shape() {
        let store = CatalogStore::empty();
        let scenes = store.generate_storyboard("launch the rocket");
        assert_eq!(scenes.len(), 3);
        assert_eq!(scenes[0].title, "Intro");
        assert_eq!(scenes[0].prompt, "Intro: launch the rocket");
        assert_eq!(scenes[1].duration, 12);
        assert_eq!(scenes[1].transition, Transition::Slide);

        let fallback = store.generate_storyboard("   ");
        assert_eq!(fallback[2].prompt, "CTA: Storyboard from prompt");
    }

    #[test]
    fn test_publish_storyboard_creates_one_video_per_scene() {
        let mut store = CatalogStore::empty();
        assert!(matches!(
            store.publish_storyboard(&[]),
            Err(ReelError::EmptyStoryboard)
        ));

        let scenes = store.generate_storyboard("demo");
        let videos = store.publish_storyboard(&scenes).unwrap();
        assert_eq!(videos.len(), 3);
        assert!(videos.iter().all(|v| v.status == VideoStatus::Queued));
        assert_eq!(videos[0].title, "Intro");
        assert_eq!(videos[0].duration, 5);
        assert_eq!(store.all_videos().len(), 3);
    }

    #[test]
    fn test_prompt_bundle_falls_back_to_scene_id() {
        let store = CatalogStore::empty();
        let untitled = Scene::new().with_prompt("wide shot");
        let bundle = store.generate_prompt_bundle(&[untitled.clone()]);
        assert!(bundle.bundle_name.starts_with("StoryboardBundle_"));
        assert_eq!(bundle.items[0].scene_title, untitled.id);
        assert_eq!(bundle.items[0].duration, untitled.duration);
    }
}
