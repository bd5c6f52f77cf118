//! Data models for the catalog backend.
//!
//! These are the wire-facing records behind the dashboard: videos,
//! templates, styles, usage stats and the demo account. Field names
//! serialize in camelCase so pack and bundle exports match the dashboard's
//! JSON shape.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// VIDEO
// =============================================================================

/// Render lifecycle of a video: queued → processing → completed/failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    Queued,
    Processing,
    Completed,
    Failed,
}

impl fmt::Display for VideoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoStatus::Queued => write!(f, "queued"),
            VideoStatus::Processing => write!(f, "processing"),
            VideoStatus::Completed => write!(f, "completed"),
            VideoStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Output aspect ratio presets offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "9:16")]
    Vertical,
    #[serde(rename = "1:1")]
    Square,
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AspectRatio::Widescreen => write!(f, "16:9"),
            AspectRatio::Vertical => write!(f, "9:16"),
            AspectRatio::Square => write!(f, "1:1"),
        }
    }
}

/// Technical metadata filled in once a render completes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_count: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_time: Option<u32>,
}

/// A generated (or in-flight) video record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub prompt: String,
    pub style_id: String,
    pub aspect_ratio: AspectRatio,
    pub duration: u32,
    pub status: VideoStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    pub metadata: VideoMetadata,
    pub created_at: String,
    pub updated_at: String,
}

/// Form input for creating a video.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoInput {
    pub title: String,
    pub prompt: String,
    pub style_id: String,
    pub aspect_ratio: AspectRatio,
    pub duration: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

impl CreateVideoInput {
    /// Creates an input with the dashboard's defaults (clean-motion, 16:9,
    /// 30 seconds).
    pub fn new(title: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            prompt: prompt.into(),
            style_id: "clean-motion".to_string(),
            aspect_ratio: AspectRatio::Widescreen,
            duration: 30,
            template_id: None,
        }
    }

    /// Builder: Set style.
    pub fn with_style(mut self, style_id: impl Into<String>) -> Self {
        self.style_id = style_id.into();
        self
    }

    /// Builder: Set aspect ratio.
    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Builder: Set duration.
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Builder: Set source template.
    pub fn with_template(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }
}

/// Filters for video listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFilters {
    pub status: Option<VideoStatus>,
    pub style_id: Option<String>,
    pub aspect_ratio: Option<AspectRatio>,
    pub search: Option<String>,
}

// =============================================================================
// TEMPLATE
// =============================================================================

/// A placeholder slot inside a template's base prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVariable {
    pub name: String,
    pub placeholder: String,
    pub description: String,
    pub required: bool,
}

/// A reusable prompt template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub base_prompt: String,
    pub default_style: String,
    pub default_aspect_ratio: AspectRatio,
    pub default_duration: u32,
    pub variables: Vec<TemplateVariable>,
    pub is_public: bool,
    pub usage_count: u32,
    pub created_at: String,
    pub updated_at: String,
}

/// Form input for creating a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateInput {
    pub title: String,
    pub base_prompt: String,
    pub default_style: String,
    pub default_aspect_ratio: AspectRatio,
    pub default_duration: u32,

    #[serde(default)]
    pub variables: Vec<TemplateVariable>,

    #[serde(default)]
    pub is_public: bool,
}

/// Filters for template listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateFilters {
    pub style: Option<String>,
    pub search: Option<String>,
}

// =============================================================================
// STYLE
// =============================================================================

/// Visual style category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleCategory {
    Motion,
    Avatar,
    Slideshow,
    Social,
    Product,
}

/// A generation style preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub id: String,
    pub name: String,
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,

    pub color_token: String,
    pub category: StyleCategory,
    pub available_durations: Vec<u32>,
}

// =============================================================================
// USAGE STATS
// =============================================================================

/// Aggregate usage counters derived from the video collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStats {
    pub user_id: String,
    pub total_videos: usize,
    pub queued_videos: usize,
    pub processing_videos: usize,
    pub completed_videos: usize,
    pub failed_videos: usize,
    pub videos_this_week: usize,
    pub videos_this_month: usize,
    pub videos_with_files: usize,
    pub style_breakdown: HashMap<String, usize>,
    pub aspect_breakdown: HashMap<String, usize>,
}

// =============================================================================
// USER & AUTH
// =============================================================================

/// Notification preferences for the demo account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_on_complete: bool,
    pub email_on_fail: bool,
    pub marketing_emails: bool,
}

/// Per-user defaults applied to the create-video form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_style: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_aspect_ratio: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_duration: Option<String>,

    pub notifications: NotificationSettings,
}

/// The account record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub display_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    pub preferences: UserPreferences,
    pub created_at: String,
    pub updated_at: String,
}

/// Login form input.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Registration form input.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpCredentials {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

/// Mock bearer tokens handed out on login/registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Expiry as milliseconds since the epoch.
    pub expires_at: i64,
}

/// A successful login/registration: the account plus its tokens.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub user: User,
    pub tokens: AuthTokens,
}

// =============================================================================
// PAGINATION
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// A page of items plus its pagination envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    /// Wraps a full result set as a single page (the mock backend never
    /// splits pages).
    pub fn single_page(items: Vec<T>) -> Self {
        let total = items.len();
        Self {
            items,
            pagination: Pagination {
                page: 1,
                limit: total,
                total,
                total_pages: 1,
            },
        }
    }
}

// =============================================================================
// PROGRESS EVENTS
// =============================================================================

/// Progress snapshot for a render job, as polled by the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoProgressEvent {
    pub video_id: String,
    pub status: VideoStatus,
    pub progress: u8,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// =============================================================================
// PROMPT BUNDLE
// =============================================================================

/// One storyboard scene flattened for the prompt bundle export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleItem {
    pub scene_title: String,
    pub prompt: String,
    pub duration: u32,
}

/// A named collection of scene prompts, exported as `<bundleName>.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptBundle {
    pub bundle_name: String,
    pub items: Vec<BundleItem>,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_status_wire_format() {
        let json = serde_json::to_string(&VideoStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
    }

    #[test]
    fn test_aspect_ratio_wire_format() {
        let json = serde_json::to_string(&AspectRatio::Vertical).unwrap();
        assert_eq!(json, "\"9:16\"");
        let parsed: AspectRatio = serde_json::from_str("\"1:1\"").unwrap();
        assert_eq!(parsed, AspectRatio::Square);
    }

    #[test]
    fn test_video_serializes_camel_case() {
        let video = Video {
            id: "vid-1".into(),
            user_id: "user-1".into(),
            title: "T".into(),
            prompt: "P".into(),
            style_id: "clean-motion".into(),
            aspect_ratio: AspectRatio::Widescreen,
            duration: 30,
            status: VideoStatus::Queued,
            file_url: None,
            thumbnail_url: None,
            error_message: None,
            template_id: None,
            metadata: VideoMetadata::default(),
            created_at: "2026-02-02T10:00:00Z".into(),
            updated_at: "2026-02-02T10:00:00Z".into(),
        };
        let value = serde_json::to_value(&video).unwrap();
        assert_eq!(value["styleId"], "clean-motion");
        assert_eq!(value["createdAt"], "2026-02-02T10:00:00Z");
        assert!(value.get("fileUrl").is_none());
    }

    #[test]
    fn test_single_page_envelope() {
        let page = PaginatedResponse::single_page(vec![1, 2, 3]);
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.total_pages, 1);
        assert_eq!(page.pagination.limit, 3);
    }

    #[test]
    fn test_bundle_item_wire_format() {
        let item = BundleItem {
            scene_title: "Intro".into(),
            prompt: "p".into(),
            duration: 5,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["sceneTitle"], "Intro");
    }
}
