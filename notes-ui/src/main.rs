//! Notes - markdown notes with a typographic preview.
//!
//! Headless entry point: renders each note given on the command line once
//! and logs what the preview drew. Typography comes from `NOTES_CONFIG` when set,
//! else `notes.json` in the working directory, else built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notes_render::{FontMatrix, FontdueLoader, ImageRegistry, TypographyConfig};
use notes_ui::{DesktopCapabilities, HeadlessHost, Notebook, NotesApp};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "notes.json";

fn main() -> Result<()> {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting notes");

    let config = match std::env::var_os("NOTES_CONFIG") {
        Some(path) => {
            let path = PathBuf::from(path);
            TypographyConfig::load(&path)
                .with_context(|| format!("failed to load typography config {}", path.display()))?
        }
        None => TypographyConfig::load_or_default(Path::new(DEFAULT_CONFIG))
            .context("failed to load typography config")?,
    };

    let table = config.size_table();
    for (tier, size_px) in table.iter() {
        tracing::debug!(?tier, size_px, "size tier");
    }

    let matrix = FontMatrix::load(&table, &config.fonts, &mut FontdueLoader::new())
        .context("failed to build font matrix")?;

    let mut notebook = Notebook::new();
    for arg in std::env::args_os().skip(1) {
        let path = PathBuf::from(arg);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read note {}", path.display()))?;
        notebook.open_note(file_label(&path), content);
    }

    let count = notebook.len();
    let mut app = NotesApp::new(notebook, matrix, DesktopCapabilities::new(ImageRegistry::new()));
    let mut host = HeadlessHost::new();

    for index in 0..count {
        let Some(label) = app.notebook().notes().get(index).map(|note| note.filename.clone()) else {
            continue;
        };
        host.select_tab(label.clone());
        app.frame(&mut host);
        tracing::info!(
            note = %label,
            draw_calls = host.surface().calls().len(),
            "rendered note"
        );
    }

    Ok(())
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
