//! Seed fixtures for the in-memory catalog: the demo account, a spread of
//! videos across every render status, starter templates and the style
//! presets.

use super::model::{
    AspectRatio, NotificationSettings, Style, StyleCategory, Template, TemplateVariable, User,
    UserPreferences, Video, VideoMetadata, VideoStatus,
};

pub fn demo_user() -> User {
    User {
        id: "user-1".into(),
        email: "demo@example.com".into(),
        display_name: "Demo User".into(),
        avatar: None,
        preferences: UserPreferences {
            default_style: Some("clean-motion".into()),
            default_aspect_ratio: Some("16:9".into()),
            default_duration: Some("30s".into()),
            notifications: NotificationSettings {
                email_on_complete: true,
                email_on_fail: true,
                marketing_emails: false,
            },
        },
        created_at: "2026-01-01T00:00:00Z".into(),
        updated_at: "2026-02-02T00:00:00Z".into(),
    }
}

pub fn videos() -> Vec<Video> {
    fn video(
        id: &str,
        title: &str,
        prompt: &str,
        style_id: &str,
        aspect_ratio: AspectRatio,
        duration: u32,
        status: VideoStatus,
        created_at: &str,
        updated_at: &str,
    ) -> Video {
        Video {
            id: id.into(),
            user_id: "user-1".into(),
            title: title.into(),
            prompt: prompt.into(),
            style_id: style_id.into(),
            aspect_ratio,
            duration,
            status,
            file_url: None,
            thumbnail_url: None,
            error_message: None,
            template_id: None,
            metadata: VideoMetadata::default(),
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }

    let mut seeded = vec![
        video(
            "vid-1",
            "Product Launch Reel",
            "Create an engaging product launch video with dynamic transitions",
            "clean-motion",
            AspectRatio::Widescreen,
            30,
            VideoStatus::Completed,
            "2026-02-02T10:00:00Z",
            "2026-02-02T10:05:00Z",
        ),
        video(
            "vid-2",
            "Weekly Update Feb 2",
            "Weekly team update with highlights from the past week",
            "energetic-edit",
            AspectRatio::Vertical,
            60,
            VideoStatus::Processing,
            "2026-02-02T09:00:00Z",
            "2026-02-02T09:30:00Z",
        ),
        video(
            "vid-3",
            "Feature Highlight: AI",
            "Showcase the new AI features with professional explainer style",
            "ai-avatar",
            AspectRatio::Widescreen,
            45,
            VideoStatus::Completed,
            "2026-02-01T15:00:00Z",
            "2026-02-01T15:10:00Z",
        ),
        video(
            "vid-4",
            "Customer Testimonial",
            "Talking head style customer testimonial",
            "talking-head",
            AspectRatio::Widescreen,
            90,
            VideoStatus::Queued,
            "2026-02-01T12:00:00Z",
            "2026-02-01T12:00:00Z",
        ),
        video(
            "vid-5",
            "Social Promo - Spring",
            "Fast-paced social media promo for spring collection",
            "social-snippet",
            AspectRatio::Vertical,
            15,
            VideoStatus::Failed,
            "2026-01-31T10:00:00Z",
            "2026-01-31T10:15:00Z",
        ),
        video(
            "vid-6",
            "Year End Summary",
            "Animated slideshow of year-end highlights",
            "slideshow",
            AspectRatio::Widescreen,
            120,
            VideoStatus::Completed,
            "2026-01-30T09:00:00Z",
            "2026-01-30T09:20:00Z",
        ),
    ];

    seeded[0].file_url = Some("https://example.com/videos/vid-1.mp4".into());
    seeded[0].thumbnail_url = Some("https://example.com/thumbnails/vid-1.jpg".into());
    seeded[0].metadata = VideoMetadata {
        resolution: Some("1920x1080".into()),
        file_size: Some(5_242_880),
        format: Some("mp4".into()),
        generation_time: Some(45),
        ..Default::default()
    };
    seeded[2].file_url = Some("https://example.com/videos/vid-3.mp4".into());
    seeded[2].metadata = VideoMetadata {
        resolution: Some("1920x1080".into()),
        file_size: Some(3_145_728),
        format: Some("mp4".into()),
        ..Default::default()
    };
    seeded[4].error_message = Some("Generation timeout. Please try again.".into());
    seeded[5].file_url = Some("https://example.com/videos/vid-6.mp4".into());
    seeded[5].metadata = VideoMetadata {
        resolution: Some("1920x1080".into()),
        format: Some("mp4".into()),
        ..Default::default()
    };

    seeded
}

pub fn templates() -> Vec<Template> {
    fn variable(name: &str, description: &str, required: bool) -> TemplateVariable {
        TemplateVariable {
            name: name.into(),
            placeholder: format!("{{{}}}", name),
            description: description.into(),
            required,
        }
    }

    vec![
        Template {
            id: "tpl-1".into(),
            user_id: "user-1".into(),
            title: "Weekly Update Template".into(),
            base_prompt: "Create a weekly update video about {topic} with {highlight} highlights"
                .into(),
            default_style: "clean-motion".into(),
            default_aspect_ratio: AspectRatio::Widescreen,
            default_duration: 60,
            variables: vec![
                variable("topic", "Main topic for the week", true),
                variable("highlight", "Key highlight count", false),
            ],
            is_public: false,
            usage_count: 12,
            created_at: "2026-01-15T00:00:00Z".into(),
            updated_at: "2026-01-20T00:00:00Z".into(),
        },
        Template {
            id: "tpl-2".into(),
            user_id: "user-1".into(),
            title: "Product Feature Highlight".into(),
            base_prompt: "Showcase the benefits of {product} with {style} style".into(),
            default_style: "energetic-edit".into(),
            default_aspect_ratio: AspectRatio::Vertical,
            default_duration: 30,
            variables: vec![
                variable("product", "Product name", true),
                variable("style", "Visual style preference", false),
            ],
            is_public: false,
            usage_count: 8,
            created_at: "2026-01-10T00:00:00Z".into(),
            updated_at: "2026-01-10T00:00:00Z".into(),
        },
        Template {
            id: "tpl-3".into(),
            user_id: "user-1".into(),
            title: "Social Media Promo".into(),
            base_prompt: "Create an engaging {platform} promo for {campaign} with CTA".into(),
            default_style: "social-snippet".into(),
            default_aspect_ratio: AspectRatio::Square,
            default_duration: 15,
            variables: vec![
                variable("platform", "Social platform", true),
                variable("campaign", "Campaign name", true),
            ],
            is_public: true,
            usage_count: 25,
            created_at: "2026-01-05T00:00:00Z".into(),
            updated_at: "2026-01-18T00:00:00Z".into(),
        },
    ]
}

pub fn styles() -> Vec<Style> {
    fn style(
        id: &str,
        name: &str,
        description: &str,
        color_token: &str,
        category: StyleCategory,
        available_durations: &[u32],
    ) -> Style {
        Style {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            preview_url: None,
            color_token: color_token.into(),
            category,
            available_durations: available_durations.to_vec(),
        }
    }

    vec![
        style(
            "clean-motion",
            "Clean Motion",
            "Professional motion graphics with smooth transitions",
            "#6366f1",
            StyleCategory::Motion,
            &[15, 30, 60, 120],
        ),
        style(
            "energetic-edit",
            "Energetic Edit",
            "Fast-paced, dynamic editing style",
            "#f59e0b",
            StyleCategory::Motion,
            &[15, 30, 60],
        ),
        style(
            "ai-avatar",
            "AI Avatar",
            "AI-generated presenter for explainer videos",
            "#8b5cf6",
            StyleCategory::Avatar,
            &[30, 60, 120],
        ),
        style(
            "talking-head",
            "Talking Head",
            "Classic interview/talking head format",
            "#10b981",
            StyleCategory::Avatar,
            &[60, 120, 180],
        ),
        style(
            "slideshow",
            "Slideshow",
            "Animated photo and text slideshow",
            "#3b82f6",
            StyleCategory::Slideshow,
            &[30, 60, 120],
        ),
        style(
            "social-snippet",
            "Social Snippet",
            "Short, engaging format optimized for social media",
            "#ec4899",
            StyleCategory::Social,
            &[15, 30],
        ),
        style(
            "product-showcase",
            "Product Showcase",
            "Product-focused with smooth camera movements",
            "#14b8a6",
            StyleCategory::Product,
            &[15, 30, 60],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        assert_eq!(videos().len(), 6);
        assert_eq!(templates().len(), 3);
        assert_eq!(styles().len(), 7);
    }

    #[test]
    fn test_seed_statuses_cover_lifecycle() {
        let statuses: Vec<_> = videos().iter().map(|v| v.status).collect();
        assert!(statuses.contains(&VideoStatus::Queued));
        assert!(statuses.contains(&VideoStatus::Processing));
        assert!(statuses.contains(&VideoStatus::Completed));
        assert!(statuses.contains(&VideoStatus::Failed));
    }
}
