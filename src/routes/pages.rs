//! Demo page routes: page menu, canvas setups, and snapshot processing.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::doc::{CanvasResult, DecodedUpload, ImageData, ImageDataError, UploadedImage};
use crate::pages::{CanvasSettings, CanvasSetup, Page, PageError, annotation_setup};
use crate::services::annotation::{AnnotationRow, DEFAULT_ANNOTATION_COLOR, DEFAULT_LABEL, annotation_color};
use crate::services::arc_length::{self, ArcLengthError};
use crate::services::geometry;
use crate::services::png_export::{self, PngExport, PngExportError};
use crate::services::snapshot::{self, SnapshotError};
use crate::services::table::{self, ObjectTable};
use crate::state::AppState;

// =============================================================================
// ERROR MAPPING
// =============================================================================

pub(crate) fn page_error_to_status(err: PageError) -> StatusCode {
    match err {
        PageError::UnknownPage(_) => StatusCode::NOT_FOUND,
        PageError::InvalidSetting { .. } => StatusCode::BAD_REQUEST,
    }
}

pub(crate) fn png_export_error_to_status(err: PngExportError) -> StatusCode {
    match err {
        PngExportError::InvalidImage(_) => StatusCode::BAD_REQUEST,
        PngExportError::Encode(e) => {
            error!(error = %e, "png encoding failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
        PngExportError::Io(e) => {
            error!(error = %e, "png scratch write failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub(crate) fn snapshot_error_to_status(err: SnapshotError) -> StatusCode {
    match err {
        SnapshotError::NotFound(_) => StatusCode::NOT_FOUND,
        SnapshotError::Io(e) => {
            error!(error = %e, "saved state read failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
        SnapshotError::Parse(e) => {
            error!(error = %e, "saved state is not valid json");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub(crate) fn arc_length_error_to_status(err: ArcLengthError) -> StatusCode {
    warn!(error = %err, "drawn path rejected");
    StatusCode::BAD_REQUEST
}

pub(crate) fn image_data_error_to_status(err: ImageDataError) -> StatusCode {
    warn!(error = %err, "uploaded image rejected");
    StatusCode::BAD_REQUEST
}

fn join_error_to_status(err: tokio::task::JoinError) -> StatusCode {
    error!(error = %err, "image task failed");
    StatusCode::INTERNAL_SERVER_ERROR
}

// =============================================================================
// PAGE MENU
// =============================================================================

#[derive(Debug, Serialize)]
pub struct PageSummary {
    pub name: &'static str,
    pub slug: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PageDetail {
    pub name: &'static str,
    pub slug: &'static str,
    pub intro: &'static str,
    pub canvas: CanvasSetup,
}

/// `GET /api/pages` — page menu in display order.
pub async fn list_pages() -> Json<Vec<PageSummary>> {
    Json(Page::ALL.iter().map(|p| PageSummary { name: p.name(), slug: p.slug() }).collect())
}

/// `GET /api/pages/:slug` — intro text and canvas setup for one page.
pub async fn get_page(Path(slug): Path<String>) -> Result<Json<PageDetail>, StatusCode> {
    let page = Page::from_slug(&slug).map_err(page_error_to_status)?;
    Ok(Json(PageDetail { name: page.name(), slug: page.slug(), intro: page.intro(), canvas: page.canvas_setup() }))
}

/// `GET /api/pages/:slug/background` — background image, 204 when there is none.
pub async fn page_background(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Response, StatusCode> {
    let page = Page::from_slug(&slug).map_err(page_error_to_status)?;
    let Some(file) = page.background_image() else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let path = state.config.assets_dir.join(file);
    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let content_type = if file.ends_with(".png") { "image/png" } else { "image/jpeg" };
            Ok(([(CONTENT_TYPE, content_type)], bytes).into_response())
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "background image unavailable");
            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}

// =============================================================================
// BASIC EXAMPLE
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct BasicRequest {
    #[serde(default)]
    pub settings: CanvasSettings,
    /// Optional PNG or JPEG picture to draw on.
    #[serde(default)]
    pub background: Option<UploadedImage>,
    /// Objects are kept raw so the table keeps the component's column order.
    #[serde(default)]
    pub canvas: CanvasResult<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub data_url: String,
}

#[derive(Debug, Serialize)]
pub struct BasicResponse {
    pub canvas: CanvasSetup,
    pub background: Option<DecodedUpload>,
    pub image: Option<ImageInfo>,
    pub objects: Option<ObjectTable>,
}

/// Decode the uploaded background and re-encode the canvas pixels.
fn render_basic_images(
    background: Option<UploadedImage>,
    image_data: Option<ImageData>,
) -> Result<(Option<DecodedUpload>, Option<ImageInfo>), StatusCode> {
    let background = background
        .as_ref()
        .map(UploadedImage::decode)
        .transpose()
        .map_err(image_data_error_to_status)?;
    let image = match image_data {
        Some(data) => Some(ImageInfo {
            width: data.width,
            height: data.height,
            data_url: png_export::png_data_url(&data).map_err(png_export_error_to_status)?,
        }),
        None => None,
    };
    Ok((background, image))
}

/// `POST /api/canvas/basic` — echo the image and tabulate drawn objects.
pub async fn submit_basic(Json(body): Json<BasicRequest>) -> Result<Json<BasicResponse>, StatusCode> {
    body.settings.validate().map_err(page_error_to_status)?;

    let BasicRequest { settings, background, canvas } = body;
    let objects = canvas.json_data.as_ref().map(|json| table::normalize(&json.objects));
    let image_data = canvas.image_data;
    let (background, image) = tokio::task::spawn_blocking(move || render_basic_images(background, image_data))
        .await
        .map_err(join_error_to_status)??;

    let canvas = CanvasSetup {
        background_image: background.as_ref().map(|b| b.data_url.clone()),
        ..settings.into_setup()
    };
    Ok(Json(BasicResponse { canvas, background, image, objects }))
}

// =============================================================================
// CIRCLE CENTERS
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CanvasRequest {
    #[serde(default)]
    pub canvas: CanvasResult,
}

#[derive(Debug, Serialize)]
pub struct CircleReport {
    pub index: usize,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct CirclesResponse {
    pub circles: Vec<CircleReport>,
}

/// `POST /api/canvas/circles` — center coordinates of drawn circles.
pub async fn submit_circles(Json(body): Json<CanvasRequest>) -> Json<CirclesResponse> {
    let circles = geometry::circle_centers(body.canvas.objects())
        .into_iter()
        .map(|c| CircleReport {
            index: c.index,
            center_x: c.center_x,
            center_y: c.center_y,
            radius: c.radius,
            summary: c.summary(),
        })
        .collect();
    Json(CirclesResponse { circles })
}

/// `GET /api/canvas/circles/initial-drawing` — saved snapshot, verbatim.
pub async fn circles_initial_drawing(State(state): State<AppState>) -> Result<Json<serde_json::Value>, StatusCode> {
    let value = snapshot::load_saved_state(&state.config.saved_state_path)
        .await
        .map_err(snapshot_error_to_status)?;
    Ok(Json(value))
}

// =============================================================================
// COLOR ANNOTATION
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct AnnotationRequest {
    /// Picker color without alpha, e.g. `#EA1010`.
    pub color: Option<String>,
    pub label: Option<String>,
    #[serde(default)]
    pub move_rois: bool,
    #[serde(default)]
    pub canvas: CanvasResult,
}

#[derive(Debug, Serialize)]
pub struct AnnotationResponse {
    pub canvas: CanvasSetup,
    pub rows: Vec<AnnotationRow>,
    pub labels: BTreeMap<String, String>,
}

/// `POST /api/canvas/annotation` — label the selected color and tag objects.
pub async fn submit_annotation(
    State(state): State<AppState>,
    Json(body): Json<AnnotationRequest>,
) -> Json<AnnotationResponse> {
    let fill = annotation_color(body.color.as_deref().unwrap_or(DEFAULT_ANNOTATION_COLOR));
    let label = body.label.as_deref().unwrap_or(DEFAULT_LABEL);

    let rows = state.labels.annotate(&fill, label, body.canvas.objects()).await;
    let labels = state.labels.snapshot().await;
    info!(fill = %fill, label, rows = rows.len(), "annotation applied");

    Json(AnnotationResponse { canvas: annotation_setup(&fill, body.move_rois), rows, labels })
}

/// `GET /api/canvas/annotation/labels` — current color to label mapping.
pub async fn annotation_labels(State(state): State<AppState>) -> Json<BTreeMap<String, String>> {
    Json(state.labels.snapshot().await)
}

// =============================================================================
// PNG EXPORT
// =============================================================================

#[derive(Debug, Serialize)]
pub struct PngExportResponse {
    pub export: Option<PngExport>,
}

/// `POST /api/canvas/png-export` — write the canvas to scratch and return a link.
pub async fn submit_png_export(
    State(state): State<AppState>,
    Json(body): Json<CanvasRequest>,
) -> Result<Json<PngExportResponse>, StatusCode> {
    let Some(image) = body.canvas.image_data else {
        return Ok(Json(PngExportResponse { export: None }));
    };

    let config = state.config.clone();
    let button_id = state.button_id.clone();
    let result = tokio::task::spawn_blocking(move || {
        png_export::export_png(&config.scratch_dir, config.scratch_retention, &button_id, &image)
    })
    .await
    .map_err(join_error_to_status)?;

    let export = result.map_err(png_export_error_to_status)?;
    Ok(Json(PngExportResponse { export: Some(export) }))
}

// =============================================================================
// ARC LENGTH
// =============================================================================

#[derive(Debug, Serialize)]
pub struct PathReport {
    pub index: usize,
    pub length: f64,
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct ArcLengthResponse {
    pub paths: Vec<PathReport>,
}

/// `POST /api/canvas/arc-length` — length of every freehand stroke.
pub async fn submit_arc_length(Json(body): Json<CanvasRequest>) -> Result<Json<ArcLengthResponse>, StatusCode> {
    let paths = arc_length::arc_lengths(body.canvas.objects())
        .map_err(arc_length_error_to_status)?
        .into_iter()
        .map(|p| PathReport { index: p.index, length: p.length, summary: p.summary() })
        .collect();
    Ok(Json(ArcLengthResponse { paths }))
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
