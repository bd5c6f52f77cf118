//! Export pipeline: pure derivations over the current scene sequence.
//!
//! Each exporter returns a [`Download`] artifact; performing the actual
//! browser download (object URL, anchor click) is the host's job. Empty
//! inputs produce valid contentless artifacts, never errors.

pub mod csv;
pub mod pack;
pub mod pdf;

pub use self::csv::{csv_download, scenes_to_csv};
pub use self::pack::{bundle_download, export_pack, Pack};
pub use self::pdf::{generate_pdf, paginate, pdf_download};

/// Fixed filename for the catalog pack export.
pub const PACK_FILENAME: &str = "VideoGenerator_Pack.json";

/// Fixed filename for the scene CSV export.
pub const CSV_FILENAME: &str = "Storyboard_Scenes.csv";

/// Fixed filename for the scene PDF export.
pub const PDF_FILENAME: &str = "Storyboard_Export.pdf";

pub const MIME_CSV: &str = "text/csv";
pub const MIME_PDF: &str = "application/pdf";
pub const MIME_JSON: &str = "application/json";

/// A file artifact ready to hand to the host's download mechanism.
///
/// Filename collisions across repeated exports are the browser's problem,
/// not ours.
#[derive(Debug, Clone)]
pub struct Download {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl Download {
    pub fn new(filename: impl Into<String>, mime: &'static str, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            mime,
            bytes,
        }
    }
}
