//! Annotation service — map rectangle fill colors to text labels.
//!
//! DESIGN
//! ======
//! The canvas has no notion of labels, so the fill color stands in for one.
//! Each submission sets (or overwrites) the label of the currently selected
//! color, then tags every drawn object whose fill matches a known color. The
//! map lives for the life of the process and is owned by `AppState`.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::doc::DrawnObject;

pub const DEFAULT_ANNOTATION_COLOR: &str = "#EA1010";
pub const DEFAULT_LABEL: &str = "Default";
/// Alpha suffix appended to the picker color so the background stays visible.
pub const ANNOTATION_ALPHA: &str = "77";

/// One row of the annotation table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotationRow {
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub fill: Option<String>,
    pub label: Option<String>,
}

/// Fill color for a picker color: the picker hex plus the alpha suffix.
#[must_use]
pub fn annotation_color(picker: &str) -> String {
    format!("{picker}{ANNOTATION_ALPHA}")
}

/// Shared fill-color -> label map.
#[derive(Clone, Default)]
pub struct ColorLabels {
    inner: Arc<RwLock<BTreeMap<String, String>>>,
}

impl ColorLabels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the label for `color`, replacing any previous one.
    pub async fn set(&self, color: &str, label: &str) {
        let mut map = self.inner.write().await;
        map.insert(color.to_owned(), label.to_owned());
    }

    pub async fn get(&self, color: &str) -> Option<String> {
        self.inner.read().await.get(color).cloned()
    }

    /// Copy of the whole mapping.
    pub async fn snapshot(&self) -> BTreeMap<String, String> {
        self.inner.read().await.clone()
    }

    /// Label the selected color and tag every object by its fill.
    ///
    /// An empty object list returns no rows and leaves the map untouched.
    pub async fn annotate(&self, color: &str, label: &str, objects: &[DrawnObject]) -> Vec<AnnotationRow> {
        if objects.is_empty() {
            return Vec::new();
        }

        let mut map = self.inner.write().await;
        map.insert(color.to_owned(), label.to_owned());

        objects
            .iter()
            .map(|obj| AnnotationRow {
                top: obj.top,
                left: obj.left,
                width: obj.width,
                height: obj.height,
                fill: obj.fill.clone(),
                label: obj.fill.as_ref().and_then(|fill| map.get(fill).cloned()),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "annotation_test.rs"]
mod tests;
