//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! carries the parsed configuration, the process-lifetime color -> label map
//! of the annotation page, and the export button id reused for every PNG
//! export.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::annotation::ColorLabels;
use crate::services::png_export::generate_button_id;

/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub labels: ColorLabels,
    pub button_id: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config: Arc::new(config), labels: ColorLabels::new(), button_id: generate_button_id().into() }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_letter_only_button_id() {
        let state = AppState::new(AppConfig::default());
        assert!(!state.button_id.is_empty());
        assert!(state.button_id.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[tokio::test]
    async fn clones_share_labels_and_button_id() {
        let state = AppState::new(AppConfig::default());
        let clone = state.clone();
        clone.labels.set("#EA101077", "car").await;
        assert_eq!(state.labels.get("#EA101077").await.as_deref(), Some("car"));
        assert_eq!(state.button_id, clone.button_id);
    }
}
