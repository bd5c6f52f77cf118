//! Pack and prompt-bundle exports.
//!
//! The pack is a pretty-printed JSON snapshot of the whole catalog plus an
//! export timestamp; the bundle flattens a storyboard's prompts under a
//! generated name.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::catalog::{PromptBundle, Template, Video};
use crate::error::ReelResult;

use super::{Download, MIME_JSON, PACK_FILENAME};

/// The pack wire shape: `{ videos, templates, exportedAt }`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pack<'a> {
    pub videos: &'a [Video],
    pub templates: &'a [Template],
    pub exported_at: String,
}

/// Serializes the catalog as `VideoGenerator_Pack.json`. Empty collections
/// produce a valid pack with empty arrays.
pub fn export_pack(videos: &[Video], templates: &[Template]) -> ReelResult<Download> {
    let pack = Pack {
        videos,
        templates,
        exported_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    let bytes = serde_json::to_vec_pretty(&pack)?;
    Ok(Download::new(PACK_FILENAME, MIME_JSON, bytes))
}

/// Serializes a prompt bundle as `<bundleName>.json`.
pub fn bundle_download(bundle: &PromptBundle) -> ReelResult<Download> {
    let bytes = serde_json::to_vec_pretty(bundle)?;
    Ok(Download::new(
        format!("{}.json", bundle.bundle_name),
        MIME_JSON,
        bytes,
    ))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BundleItem, CatalogStore};

    #[test]
    fn test_empty_pack_is_valid_json() {
        let download = export_pack(&[], &[]).unwrap();
        assert_eq!(download.filename, "VideoGenerator_Pack.json");

        let value: serde_json::Value = serde_json::from_slice(&download.bytes).unwrap();
        assert!(value["videos"].as_array().unwrap().is_empty());
        assert!(value["templates"].as_array().unwrap().is_empty());
        // exportedAt parses back as RFC 3339.
        let stamp = value["exportedAt"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[test]
    fn test_pack_carries_full_catalog() {
        let store = CatalogStore::new();
        let download = export_pack(store.all_videos(), store.all_templates()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&download.bytes).unwrap();
        assert_eq!(value["videos"].as_array().unwrap().len(), 6);
        assert_eq!(value["templates"].as_array().unwrap().len(), 3);
        assert_eq!(value["videos"][0]["styleId"], "clean-motion");
    }

    #[test]
    fn test_pack_is_pretty_printed() {
        let download = export_pack(&[], &[]).unwrap();
        let text = String::from_utf8(download.bytes).unwrap();
        assert!(text.contains('\n'));
    }

    #[test]
    fn test_bundle_download_filename() {
        let bundle = PromptBundle {
            bundle_name: "StoryboardBundle_1".into(),
            items: vec![BundleItem {
                scene_title: "Intro".into(),
                prompt: "p".into(),
                duration: 5,
            }],
        };
        let download = bundle_download(&bundle).unwrap();
        assert_eq!(download.filename, "StoryboardBundle_1.json");

        let value: serde_json::Value = serde_json::from_slice(&download.bytes).unwrap();
        assert_eq!(value["bundleName"], "StoryboardBundle_1");
        assert_eq!(value["items"][0]["sceneTitle"], "Intro");
    }
}
