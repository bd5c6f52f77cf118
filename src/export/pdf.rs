//! PDF export for scene sequences.
//!
//! One title line, then one line per scene. Pagination is factored out of
//! the rendering so the page-break rule is testable without parsing PDF
//! bytes: when the vertical cursor would pass the bottom margin, a new page
//! starts and the cursor resets to the top margin.

use std::io::BufWriter;

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::{ReelError, ReelResult};
use crate::scene::Scene;

use super::{Download, MIME_PDF, PDF_FILENAME};

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 15.0;
const LINE_HEIGHT_MM: f64 = 7.0;
/// Vertical space consumed by the title block on the first page.
const TITLE_BLOCK_MM: f64 = 10.0;

const TITLE_SIZE_PT: f64 = 20.0;
const BODY_SIZE_PT: f64 = 12.0;

const DOCUMENT_TITLE: &str = "Storyboard Export";

fn scene_line(scene: &Scene) -> String {
    format!(
        "Scene {} - {} ({}s) - {}",
        scene.id, scene.title, scene.duration, scene.transition
    )
}

/// Splits the scene lines into pages. The first page's capacity is reduced
/// by the title block; every page holds as many lines as fit between the
/// margins.
pub fn paginate(scenes: &[Scene]) -> Vec<Vec<String>> {
    let mut pages: Vec<Vec<String>> = vec![Vec::new()];
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM - TITLE_BLOCK_MM;
    for scene in scenes {
        if y < MARGIN_MM {
            pages.push(Vec::new());
            y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        pages
            .last_mut()
            .expect("pages is never empty")
            .push(scene_line(scene));
        y -= LINE_HEIGHT_MM;
    }
    pages
}

/// Renders the sequence to PDF bytes. An empty sequence yields a valid
/// title-only document.
pub fn generate_pdf(scenes: &[Scene]) -> ReelResult<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(PAGE_WIDTH_MM as f32),
        Mm(PAGE_HEIGHT_MM as f32),
        "content",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReelError::pdf(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    layer.use_text(
        DOCUMENT_TITLE,
        TITLE_SIZE_PT as f32,
        Mm(MARGIN_MM as f32),
        Mm((PAGE_HEIGHT_MM - MARGIN_MM) as f32),
        &font,
    );

    for (index, lines) in paginate(scenes).iter().enumerate() {
        let mut y = if index == 0 {
            PAGE_HEIGHT_MM - MARGIN_MM - TITLE_BLOCK_MM
        } else {
            let (page, page_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "content");
            layer = doc.get_page(page).get_layer(page_layer);
            PAGE_HEIGHT_MM - MARGIN_MM
        };
        for line in lines {
            layer.use_text(line.as_str(), BODY_SIZE_PT as f32, Mm(MARGIN_MM as f32), Mm(y as f32), &font);
            y -= LINE_HEIGHT_MM;
        }
    }

    let mut bytes = Vec::new();
    doc.save(&mut BufWriter::new(&mut bytes))
        .map_err(|e| ReelError::pdf(e.to_string()))?;
    Ok(bytes)
}

/// PDF export as a download artifact.
pub fn pdf_download(scenes: &[Scene]) -> ReelResult<Download> {
    let bytes = generate_pdf(scenes)?;
    Ok(Download::new(PDF_FILENAME, MIME_PDF, bytes))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn scenes(n: usize) -> Vec<Scene> {
        (0..n)
            .map(|i| Scene::new().with_title(format!("Scene {}", i)))
            .collect()
    }

    #[test]
    fn test_paginate_empty_is_single_empty_page() {
        let pages = paginate(&[]);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
    }

    #[test]
    fn test_paginate_short_list_fits_one_page() {
        let pages = paginate(&scenes(10));
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].len(), 10);
    }

    #[test]
    fn test_paginate_breaks_when_page_is_full() {
        let input = scenes(60);
        let pages = paginate(&input);
        assert!(pages.len() > 1);

        let total: usize = pages.iter().map(Vec::len).sum();
        assert_eq!(total, 60);
        assert!(pages.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn test_scene_line_format() {
        let scene = Scene::new().with_title("Opening").with_duration(8);
        let line = scene_line(&scene);
        assert!(line.starts_with(&format!("Scene {} - Opening (8s) - Fade", scene.id)));
    }

    #[test]
    fn test_generate_pdf_nonempty_bytes() {
        let bytes = generate_pdf(&scenes(3)).unwrap();
        assert!(!bytes.is_empty());
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_generate_pdf_empty_sequence_is_valid() {
        let bytes = generate_pdf(&[]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_pdf_download_artifact() {
        let download = pdf_download(&scenes(1)).unwrap();
        assert_eq!(download.filename, PDF_FILENAME);
        assert_eq!(download.mime, "application/pdf");
    }
}
