#![allow(clippy::float_cmp)]

use std::io::Cursor;

use base64::Engine as _;
use image::{DynamicImage, RgbImage};
use serde_json::json;

use super::*;

fn upload(bytes: &[u8]) -> UploadedImage {
    UploadedImage { data: STANDARD.encode(bytes) }
}

fn encoded(picture: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    picture.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
    bytes
}

#[test]
fn drawn_object_reads_fabric_circle() {
    let obj: DrawnObject = serde_json::from_value(json!({
        "type": "circle",
        "left": 40.5,
        "top": 12,
        "radius": 30,
        "angle": 90,
        "fill": "rgba(255, 165, 0, 0.2)",
        "strokeWidth": 5,
        "originX": "left",
    }))
    .unwrap();
    assert_eq!(obj.kind(), "circle");
    assert_eq!(obj.left, Some(40.5));
    assert_eq!(obj.top, Some(12.0));
    assert_eq!(obj.radius, Some(30.0));
    assert_eq!(obj.angle, Some(90.0));
    assert_eq!(obj.stroke_width, Some(5.0));
    assert_eq!(obj.extra.get("originX"), Some(&json!("left")));
}

#[test]
fn drawn_object_keeps_path_segments() {
    let obj: DrawnObject = serde_json::from_value(json!({
        "type": "path",
        "path": [["M", 0, 0], ["L", 3, 4]],
    }))
    .unwrap();
    let path = obj.path.unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(path[1], vec![json!("L"), json!(3), json!(4)]);
}

#[test]
fn drawn_object_missing_kind_is_empty() {
    let obj: DrawnObject = serde_json::from_value(json!({"left": 1})).unwrap();
    assert_eq!(obj.kind(), "");
}

#[test]
fn drawn_object_serializes_without_absent_fields() {
    let obj: DrawnObject = serde_json::from_value(json!({"type": "rect", "left": 1, "custom": true})).unwrap();
    let value = serde_json::to_value(&obj).unwrap();
    assert_eq!(value.get("type"), Some(&json!("rect")));
    assert_eq!(value.get("custom"), Some(&json!(true)));
    assert!(value.get("radius").is_none());
    assert!(value.get("path").is_none());
}

#[test]
fn canvas_json_defaults_objects() {
    let canvas: CanvasJson = serde_json::from_value(json!({"version": "4.4.0"})).unwrap();
    assert_eq!(canvas.version.as_deref(), Some("4.4.0"));
    assert!(canvas.objects.is_empty());
}

#[test]
fn canvas_result_objects_empty_without_json() {
    let result: CanvasResult = CanvasResult::default();
    assert!(result.objects().is_empty());
}

#[test]
fn canvas_result_objects_from_json() {
    let result: CanvasResult = serde_json::from_value(json!({
        "json_data": {"objects": [{"type": "rect"}, {"type": "circle"}]}
    }))
    .unwrap();
    assert_eq!(result.objects().len(), 2);
    assert!(result.image_data.is_none());
}

#[test]
fn image_data_decodes_rgba() {
    let rgba: Vec<u8> = (0..16).collect();
    let data = ImageData::from_rgba(2, 2, &rgba);
    let img = data.to_rgba_image().unwrap();
    assert_eq!(img.dimensions(), (2, 2));
    assert_eq!(img.get_pixel(1, 0).0, [4, 5, 6, 7]);
    assert_eq!(img.get_pixel(1, 1).0, [12, 13, 14, 15]);
}

#[test]
fn image_data_rejects_wrong_size() {
    let data = ImageData::from_rgba(2, 2, &[0; 12]);
    let err = data.to_rgba_image().unwrap_err();
    assert!(matches!(err, ImageDataError::SizeMismatch { expected: 16, actual: 12, .. }));
}

#[test]
fn image_data_rejects_bad_base64() {
    let data = ImageData { width: 1, height: 1, data: "not base64!".into() };
    assert!(matches!(data.to_rgba_image().unwrap_err(), ImageDataError::Base64(_)));
}

#[test]
fn image_data_huge_dimensions_is_mismatch() {
    let data = ImageData { width: u32::MAX, height: u32::MAX, data: String::new() };
    let err = data.to_rgba_image().unwrap_err();
    assert!(matches!(err, ImageDataError::SizeMismatch { actual: 0, .. }));
}

#[test]
fn raw_canvas_keeps_object_key_order() {
    let result: CanvasResult<serde_json::Value> = serde_json::from_str(
        r#"{"json_data": {"objects": [{"type": "rect", "zIndex": 2, "angle": 0, "fill": "red"}]}}"#,
    )
    .unwrap();
    let keys: Vec<&str> = result.objects()[0].as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["type", "zIndex", "angle", "fill"]);
}

#[test]
fn upload_decodes_png() {
    let png = encoded(DynamicImage::ImageRgba8(RgbaImage::new(3, 2)), ImageFormat::Png);
    let decoded = upload(&png).decode().unwrap();
    assert_eq!((decoded.width, decoded.height), (3, 2));
    assert_eq!(decoded.data_url, format!("data:image/png;base64,{}", STANDARD.encode(&png)));
}

#[test]
fn upload_decodes_jpeg() {
    let jpeg = encoded(DynamicImage::ImageRgb8(RgbImage::new(8, 4)), ImageFormat::Jpeg);
    let decoded = upload(&jpeg).decode().unwrap();
    assert_eq!((decoded.width, decoded.height), (8, 4));
    assert!(decoded.data_url.starts_with("data:image/jpeg;base64,"));
}

#[test]
fn upload_rejects_gif() {
    let err = upload(b"GIF89a\x01\x00\x01\x00\x00\x00\x00;").decode().unwrap_err();
    assert!(matches!(err, ImageDataError::UnsupportedFormat("image/gif")));
}

#[test]
fn upload_rejects_unknown_bytes() {
    let err = upload(b"plain text, not a picture").decode().unwrap_err();
    assert!(matches!(err, ImageDataError::Decode(_)));
}

#[test]
fn upload_rejects_truncated_png() {
    let png = encoded(DynamicImage::ImageRgba8(RgbaImage::new(3, 2)), ImageFormat::Png);
    let err = upload(&png[..16]).decode().unwrap_err();
    assert!(matches!(err, ImageDataError::Decode(_)));
}
