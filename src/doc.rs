//! Canvas snapshot model: drawn objects, their JSON envelope, and pixel data.
//!
//! The external canvas component hands back two things per interaction: a
//! pixel buffer of the rendered canvas and a JSON description of every drawn
//! object. This module gives both a typed shape (`ImageData`, `CanvasJson`,
//! `DrawnObject`) without validating them beyond what decoding requires.
//! Attributes we don't model are kept verbatim in `extra`, so re-serializing
//! an object loses nothing the component sent.

#[cfg(test)]
#[path = "doc_test.rs"]
mod tests;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, RgbaImage};
use serde::{Deserialize, Serialize};

// =============================================================================
// DRAWN OBJECT
// =============================================================================

/// A shape or stroke record emitted by the canvas component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawnObject {
    /// Shape kind (`rect`, `circle`, `path`, `line`, `polygon`, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Left edge in canvas pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    /// Top edge in canvas pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Circle radius, present on circles only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Rotation in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f64>,
    /// Freehand stroke segments, e.g. `[["M", 1, 2], ["Q", 1, 2, 3, 4]]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Vec<serde_json::Value>>>,
    /// Every other attribute, kept as sent.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DrawnObject {
    /// Shape kind, or `""` when the component omitted it.
    #[must_use]
    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or("")
    }
}

// =============================================================================
// CANVAS JSON
// =============================================================================

/// The JSON half of a canvas snapshot.
///
/// Objects are typed by default. `CanvasJson<serde_json::Value>` keeps each
/// object exactly as sent, key order included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasJson<O = DrawnObject> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub objects: Vec<O>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// =============================================================================
// IMAGE DATA
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ImageDataError {
    #[error("image data is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("pixel buffer has {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    SizeMismatch { width: u32, height: u32, expected: usize, actual: usize },
    #[error("image could not be decoded: {0}")]
    Decode(#[from] image::ImageError),
    #[error("unsupported image format {0}, expected PNG or JPEG")]
    UnsupportedFormat(&'static str),
}

/// The pixel half of a canvas snapshot: base64 of packed RGBA8 rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub data: String,
}

impl ImageData {
    /// Wrap a raw RGBA buffer, base64-encoding it.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Self {
        Self { width, height, data: STANDARD.encode(rgba) }
    }

    /// Decode into an owned RGBA image.
    ///
    /// # Errors
    ///
    /// Returns `Base64` if `data` does not decode, `SizeMismatch` if the byte
    /// count disagrees with `width * height * 4` (or that product overflows).
    pub fn to_rgba_image(&self) -> Result<RgbaImage, ImageDataError> {
        let bytes = STANDARD.decode(self.data.as_bytes())?;
        let expected = (self.width as usize).checked_mul(self.height as usize).and_then(|n| n.checked_mul(4));
        let actual = bytes.len();
        let mismatch = ImageDataError::SizeMismatch {
            width: self.width,
            height: self.height,
            expected: expected.unwrap_or(usize::MAX),
            actual,
        };
        if expected != Some(actual) {
            return Err(mismatch);
        }
        RgbaImage::from_raw(self.width, self.height, bytes).ok_or(mismatch)
    }
}

// =============================================================================
// UPLOADED IMAGE
// =============================================================================

/// A picture file the user uploaded as canvas background: base64 of the raw
/// PNG or JPEG bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub data: String,
}

/// A decoded upload, ready to hand to the canvas component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedUpload {
    pub width: u32,
    pub height: u32,
    pub data_url: String,
}

impl UploadedImage {
    /// Sniff the format, decode the picture, and build a `data:` URL for it.
    ///
    /// # Errors
    ///
    /// Returns `Base64` if `data` does not decode, `UnsupportedFormat` for
    /// anything but PNG or JPEG, and `Decode` if the file is unreadable.
    pub fn decode(&self) -> Result<DecodedUpload, ImageDataError> {
        let bytes = STANDARD.decode(self.data.as_bytes())?;
        let format = image::guess_format(&bytes)?;
        if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
            return Err(ImageDataError::UnsupportedFormat(format.to_mime_type()));
        }
        let picture = image::load_from_memory_with_format(&bytes, format)?;
        Ok(DecodedUpload {
            width: picture.width(),
            height: picture.height(),
            data_url: format!("data:{};base64,{}", format.to_mime_type(), STANDARD.encode(&bytes)),
        })
    }
}

// =============================================================================
// CANVAS RESULT
// =============================================================================

/// What the canvas component returns: either half may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasResult<O = DrawnObject> {
    #[serde(default)]
    pub image_data: Option<ImageData>,
    #[serde(default)]
    pub json_data: Option<CanvasJson<O>>,
}

impl<O> CanvasResult<O> {
    /// Drawn objects, empty when no JSON came back.
    #[must_use]
    pub fn objects(&self) -> &[O] {
        self.json_data.as_ref().map_or(&[], |j| j.objects.as_slice())
    }
}
