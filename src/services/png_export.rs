//! PNG export service — write the canvas to a scratch file and build a link.
//!
//! DESIGN
//! ======
//! Every export first sweeps the scratch directory, deleting `*.png` files
//! whose modification time is older than the retention window. The canvas
//! pixels are then encoded once as PNG, written to `{button_id}.png`, and
//! returned base64-encoded inside an inline `data:` download link. The button
//! id is generated once per process, so repeated exports overwrite one file.
//!
//! ERROR HANDLING
//! ==============
//! Sweep failures on individual files are logged and skipped. Encoding and
//! write failures propagate to the caller.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, RgbaImage};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::doc::{ImageData, ImageDataError};

#[derive(Debug, thiserror::Error)]
pub enum PngExportError {
    #[error("invalid pixel buffer: {0}")]
    InvalidImage(#[from] ImageDataError),
    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("scratch io failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of one export.
#[derive(Debug, Clone, Serialize)]
pub struct PngExport {
    /// Scratch file the PNG was written to.
    pub file_path: String,
    /// PNG bytes, base64-encoded.
    pub base64: String,
    /// Styled `<a download>` element embedding the PNG.
    pub download_link: String,
}

// =============================================================================
// BUTTON ID
// =============================================================================

/// Random element id made of letters only, so it is a valid CSS selector.
#[must_use]
pub fn generate_button_id() -> String {
    Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .collect()
}

// =============================================================================
// SWEEP
// =============================================================================

/// Delete `*.png` files in `dir` last modified before `now - retention`.
///
/// Returns the deleted paths. A missing directory is treated as empty.
///
/// # Errors
///
/// Returns `Io` only if the directory exists but cannot be listed.
pub fn sweep_scratch(dir: &Path, retention: Duration, now: SystemTime) -> Result<Vec<PathBuf>, PngExportError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    let cutoff = now.checked_sub(retention).unwrap_or(SystemTime::UNIX_EPOCH);

    let mut deleted = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("png") {
            continue;
        }
        let modified = match entry.metadata().and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "scratch file metadata unreadable");
                continue;
            }
        };
        if modified >= cutoff {
            continue;
        }
        match std::fs::remove_file(&path) {
            Ok(()) => {
                info!(path = %path.display(), "expired scratch file deleted");
                deleted.push(path);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "scratch file delete failed"),
        }
    }
    Ok(deleted)
}

// =============================================================================
// ENCODE + EXPORT
// =============================================================================

/// Encode an RGBA image as PNG bytes.
///
/// # Errors
///
/// Returns `Encode` if the PNG encoder fails.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, PngExportError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// PNG of a canvas pixel buffer as a `data:image/png;base64,` URL.
///
/// # Errors
///
/// Returns `InvalidImage` for a malformed buffer, `Encode` on encoder failure.
pub fn png_data_url(image: &ImageData) -> Result<String, PngExportError> {
    let png = encode_png(&image.to_rgba_image()?)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

/// Sweep `dir`, then write the canvas to `{dir}/{button_id}.png`.
///
/// # Errors
///
/// Returns `InvalidImage` for a malformed buffer, `Encode` on encoder failure,
/// and `Io` if the directory or file cannot be written.
pub fn export_png(
    dir: &Path,
    retention: Duration,
    button_id: &str,
    image: &ImageData,
) -> Result<PngExport, PngExportError> {
    std::fs::create_dir_all(dir)?;
    sweep_scratch(dir, retention, SystemTime::now())?;

    let png = encode_png(&image.to_rgba_image()?)?;
    let path = dir.join(format!("{button_id}.png"));
    std::fs::write(&path, &png)?;
    info!(path = %path.display(), bytes = png.len(), "canvas exported as png");

    let file_path = path.display().to_string();
    let base64 = STANDARD.encode(&png);
    let download_link = download_link(button_id, &file_path, &base64);
    Ok(PngExport { file_path, base64, download_link })
}

/// Styled anchor that downloads `b64` as `file_path`.
#[must_use]
pub fn download_link(button_id: &str, file_path: &str, b64: &str) -> String {
    format!(
        "{css}<a download=\"{file_path}\" id=\"{button_id}\" href=\"data:file/txt;base64,{b64}\">Export PNG</a><br></br>",
        css = button_css(button_id)
    )
}

fn button_css(id: &str) -> String {
    format!(
        r"
        <style>
            #{id} {{
                display: inline-flex;
                align-items: center;
                justify-content: center;
                background-color: rgb(255, 255, 255);
                color: rgb(38, 39, 48);
                padding: .25rem .75rem;
                position: relative;
                text-decoration: none;
                border-radius: 4px;
                border-width: 1px;
                border-style: solid;
                border-color: rgb(230, 234, 241);
                border-image: initial;
            }}
            #{id}:hover {{
                border-color: rgb(246, 51, 102);
                color: rgb(246, 51, 102);
            }}
            #{id}:active {{
                box-shadow: none;
                background-color: rgb(246, 51, 102);
                color: white;
            }}
        </style> "
    )
}

#[cfg(test)]
#[path = "png_export_test.rs"]
mod tests;
