//! CLI tool to export a storyboard JSON file as CSV, PDF or a prompt bundle.
//!
//! Usage:
//!   reel-export --input storyboard.json --format csv [--output scenes.csv]
//!   reel-export --input storyboard.json --format pdf
//!   reel-export --input storyboard.json --format bundle
//!   reel-export --format pack

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use storyreel::catalog::CatalogStore;
use storyreel::export::{self, Download};
use storyreel::scene::Scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Scene rows as CSV
    Csv,
    /// One-line-per-scene PDF
    Pdf,
    /// Prompt bundle JSON
    Bundle,
    /// Catalog pack JSON (videos + templates)
    Pack,
}

#[derive(Parser, Debug)]
#[command(
    name = "reel-export",
    about = "Export a storyboard JSON file as CSV, PDF or a prompt bundle",
    version
)]
struct Args {
    /// Input JSON file holding an array of scenes (not needed for pack)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output artifact format
    #[arg(short, long, value_enum)]
    format: Format,

    /// Output file path (defaults to the artifact's own filename)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // 1. Load the storyboard when the format needs one
    let scenes: Vec<Scene> = match (&args.input, args.format) {
        (_, Format::Pack) => Vec::new(),
        (Some(path), _) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&content).context("Failed to parse scenes JSON")?
        }
        (None, _) => anyhow::bail!("--input is required for this format"),
    };

    // 2. Produce the artifact
    let download: Download = match args.format {
        Format::Csv => export::csv_download(&scenes).context("CSV export failed")?,
        Format::Pdf => export::pdf_download(&scenes).context("PDF export failed")?,
        Format::Bundle => {
            let store = CatalogStore::empty();
            let bundle = store.generate_prompt_bundle(&scenes);
            export::bundle_download(&bundle).context("Bundle export failed")?
        }
        Format::Pack => {
            let store = CatalogStore::new();
            export::export_pack(store.all_videos(), store.all_templates())
                .context("Pack export failed")?
        }
    };

    // 3. Write it out
    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(&download.filename));
    std::fs::write(&output_path, &download.bytes)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!(
        "Wrote {} ({} bytes, {})",
        output_path.display(),
        download.bytes.len(),
        download.mime
    );
    Ok(())
}
