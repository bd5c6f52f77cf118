//! CSV export for scene sequences.
//!
//! Column order is `id,title,prompt,duration,transition`. Quoting follows
//! RFC 4180: a field is quoted (internal quotes doubled) only when it
//! contains a comma, a double quote or a newline.

use csv::WriterBuilder;

use crate::error::ReelResult;
use crate::scene::Scene;

use super::{Download, CSV_FILENAME, MIME_CSV};

/// Renders the sequence as CSV text: a header row followed by one row per
/// scene in sequence order, rows joined with `\n` and no trailing newline.
/// An empty sequence yields exactly the header row.
pub fn scenes_to_csv(scenes: &[Scene]) -> ReelResult<String> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(["id", "title", "prompt", "duration", "transition"])?;
    for scene in scenes {
        let duration = scene.duration.to_string();
        let transition = scene.transition.to_string();
        writer.write_record([
            scene.id.as_str(),
            scene.title.as_str(),
            scene.prompt.as_str(),
            duration.as_str(),
            transition.as_str(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    let mut text = String::from_utf8_lossy(&bytes).into_owned();
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// CSV export as a download artifact.
pub fn csv_download(scenes: &[Scene]) -> ReelResult<Download> {
    let text = scenes_to_csv(scenes)?;
    Ok(Download::new(CSV_FILENAME, MIME_CSV, text.into_bytes()))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Transition;

    fn scene(id: &str, title: &str, prompt: &str, duration: u32) -> Scene {
        Scene {
            id: id.to_owned(),
            title: title.to_owned(),
            prompt: prompt.to_owned(),
            duration,
            transition: Transition::Fade,
        }
    }

    #[test]
    fn test_empty_sequence_yields_header_only() {
        let csv = scenes_to_csv(&[]).unwrap();
        assert_eq!(csv, "id,title,prompt,duration,transition");
    }

    #[test]
    fn test_rows_in_sequence_order() {
        let scenes = vec![
            scene("s-1", "Intro", "open on skyline", 5),
            scene("s-2", "Main", "product walkthrough", 12),
        ];
        let csv = scenes_to_csv(&scenes).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "s-1,Intro,open on skyline,5,Fade");
        assert_eq!(lines[2], "s-2,Main,product walkthrough,12,Fade");
    }

    #[test]
    fn test_comma_and_quote_fields_are_escaped() {
        let scenes = vec![scene("s-1", "Second, Scene", "Explain \"why\"", 5)];
        let csv = scenes_to_csv(&scenes).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "s-1,\"Second, Scene\",\"Explain \"\"why\"\"\",5,Fade");
    }

    #[test]
    fn test_newline_field_is_quoted() {
        let scenes = vec![scene("s-1", "Two\nlines", "p", 5)];
        let csv = scenes_to_csv(&scenes).unwrap();
        assert!(csv.contains("\"Two\nlines\""));
    }

    #[test]
    fn test_plain_fields_stay_bare() {
        let scenes = vec![scene("s-1", "Plain title", "plain prompt", 9)];
        let csv = scenes_to_csv(&scenes).unwrap();
        assert!(!csv.lines().nth(1).unwrap().contains('"'));
    }

    #[test]
    fn test_download_artifact_shape() {
        let download = csv_download(&[]).unwrap();
        assert_eq!(download.filename, CSV_FILENAME);
        assert_eq!(download.mime, "text/csv");
        assert!(!download.bytes.is_empty());
    }
}
