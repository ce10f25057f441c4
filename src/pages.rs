//! Page dispatch table and canvas setups.
//!
//! Each demo page is an independent routine selected by name. A page tells
//! the client how to mount the canvas component (`CanvasSetup`) and which
//! endpoint processes the snapshot it returns.

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::services::annotation::{DEFAULT_ANNOTATION_COLOR, annotation_color};

pub const STROKE_WIDTH_RANGE: std::ops::RangeInclusive<u32> = 1..=25;
pub const POINT_RADIUS_RANGE: std::ops::RangeInclusive<u32> = 1..=25;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PageError {
    #[error("unknown page: {0}")]
    UnknownPage(String),
    #[error("invalid setting {name}: {reason}")]
    InvalidSetting { name: &'static str, reason: String },
}

// =============================================================================
// PAGE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    About,
    Basic,
    Circles,
    Annotation,
    PngExport,
    ArcLength,
}

impl Page {
    /// Menu order.
    pub const ALL: [Page; 6] =
        [Page::About, Page::Basic, Page::Circles, Page::Annotation, Page::PngExport, Page::ArcLength];

    /// Menu label, also the dispatch key.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Basic => "Basic example",
            Self::Circles => "Get center coords of circles",
            Self::Annotation => "Color-based image annotation",
            Self::PngExport => "Download Base64 encoded PNG",
            Self::ArcLength => "Compute the length of drawn arcs",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Basic => "basic",
            Self::Circles => "circles",
            Self::Annotation => "annotation",
            Self::PngExport => "png-export",
            Self::ArcLength => "arc-length",
        }
    }

    /// # Errors
    ///
    /// Returns `UnknownPage` if no page has this menu label.
    pub fn from_name(name: &str) -> Result<Self, PageError> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| PageError::UnknownPage(name.to_owned()))
    }

    /// # Errors
    ///
    /// Returns `UnknownPage` if no page has this slug.
    pub fn from_slug(slug: &str) -> Result<Self, PageError> {
        Self::ALL
            .into_iter()
            .find(|p| p.slug() == slug)
            .ok_or_else(|| PageError::UnknownPage(slug.to_owned()))
    }

    /// Markdown shown above the canvas.
    #[must_use]
    pub fn intro(self) -> &'static str {
        match self {
            Self::About => ABOUT_MARKDOWN,
            Self::Basic => {
                "Draw on the canvas, get the drawings back!\n\
                 * Configure canvas in the sidebar\n\
                 * In transform mode, double-click an object to remove it\n\
                 * In polygon mode, left-click to add a point, right-click to close the polygon, \
                 double-click to remove the latest point\n"
            }
            Self::Circles => {
                "Computation of center coordinates for circle drawings.\n\n\
                 Coordinates are canvas-related to top-left of image, increasing x going down and y going right.\n\n\
                 ```\n\
                 center_x = left + radius * cos(angle * pi / 180)\n\
                 center_y = top + radius * sin(angle * pi / 180)\n\
                 ```\n"
            }
            Self::Annotation => {
                "The canvas has no image annotation built in, but a drawing fill color can be mapped to a label.\n\n\
                 Annotate pedestrians, cars and traffic lights with any color/label you want.\n"
            }
            Self::PngExport => {
                "Realtime update is disabled for this demo.\n\
                 Press the 'Download' button at the bottom of canvas to update exported image.\n"
            }
            Self::ArcLength => {
                "Drawn paths can be handed to a geometry library. \
                 In this example we compute the length of any drawn path.\n"
            }
        }
    }

    /// Background image file name under the assets directory.
    #[must_use]
    pub fn background_image(self) -> Option<&'static str> {
        match self {
            Self::Circles => Some("tennis-balls.jpg"),
            Self::Annotation | Self::ArcLength => Some("annotation.jpeg"),
            Self::About | Self::Basic | Self::PngExport => None,
        }
    }

    /// Canvas mounting parameters with the page's own defaults.
    #[must_use]
    pub fn canvas_setup(self) -> CanvasSetup {
        let base = CanvasSetup { key: self.slug().to_owned(), ..CanvasSetup::default() };
        match self {
            Self::About => base,
            Self::Basic => CanvasSettings::default().into_setup(),
            Self::Circles => CanvasSetup {
                fill_color: "rgba(255, 165, 0, 0.2)".into(),
                stroke_width: 5,
                stroke_color: "black".into(),
                height: 400,
                width: 600,
                drawing_mode: DrawingMode::Circle,
                background_image: self.background_image().map(str::to_owned),
                ..base
            },
            Self::Annotation => annotation_setup(&annotation_color(DEFAULT_ANNOTATION_COLOR), false),
            Self::PngExport => CanvasSetup { update_realtime: false, ..base },
            Self::ArcLength => CanvasSetup {
                stroke_color: "yellow".into(),
                stroke_width: 3,
                height: 320,
                width: 512,
                drawing_mode: DrawingMode::Freedraw,
                background_image: self.background_image().map(str::to_owned),
                ..base
            },
        }
    }
}

pub const ABOUT_MARKDOWN: &str = "\
Welcome to the demo of the Drawable Canvas component.

On this site, you will find a full use case for the component, and answers to some frequently asked questions.

What you can do with Drawable Canvas:

* Draw freely, lines, circles and boxes on the canvas, with options on stroke & fill
* Rotate, skew, scale, move any object of the canvas on demand
* Select a background color or image to draw on
* Get image data and every drawn object properties back to the server
* Choose to fetch back data in realtime or on demand with a button
* Undo, Redo or Drop canvas
* Save canvas data as JSON to reuse for another session
";

// =============================================================================
// DRAWING MODE
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingMode {
    #[default]
    Freedraw,
    Line,
    Rect,
    Circle,
    Transform,
    Polygon,
    Point,
}

// =============================================================================
// CANVAS SETUP
// =============================================================================

/// Parameters the canvas component is mounted with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSetup {
    pub fill_color: String,
    pub stroke_width: u32,
    pub stroke_color: String,
    pub background_color: String,
    /// Asset file name resolved via `/api/pages/{slug}/background`, or a
    /// `data:` URL for a picture the user uploaded.
    pub background_image: Option<String>,
    pub update_realtime: bool,
    pub height: u32,
    pub width: u32,
    pub drawing_mode: DrawingMode,
    pub point_display_radius: u32,
    pub display_toolbar: bool,
    pub key: String,
}

impl Default for CanvasSetup {
    fn default() -> Self {
        Self {
            fill_color: "#eee".into(),
            stroke_width: 20,
            stroke_color: "black".into(),
            background_color: String::new(),
            background_image: None,
            update_realtime: true,
            height: 400,
            width: 600,
            drawing_mode: DrawingMode::Freedraw,
            point_display_radius: 3,
            display_toolbar: true,
            key: String::new(),
        }
    }
}

/// Annotation canvas for a fill color; `move_rois` switches to transform mode.
#[must_use]
pub fn annotation_setup(fill_color: &str, move_rois: bool) -> CanvasSetup {
    CanvasSetup {
        fill_color: fill_color.to_owned(),
        stroke_width: 3,
        height: 320,
        width: 512,
        drawing_mode: if move_rois { DrawingMode::Transform } else { DrawingMode::Rect },
        background_image: Page::Annotation.background_image().map(str::to_owned),
        key: Page::Annotation.slug().to_owned(),
        ..CanvasSetup::default()
    }
}

// =============================================================================
// CANVAS SETTINGS
// =============================================================================

/// User-chosen settings of the basic example page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub drawing_mode: DrawingMode,
    pub stroke_width: u32,
    /// Only meaningful in `point` mode.
    pub point_display_radius: u32,
    pub stroke_color: String,
    pub background_color: String,
    pub realtime_update: bool,
    pub display_toolbar: bool,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            drawing_mode: DrawingMode::Freedraw,
            stroke_width: 3,
            point_display_radius: 3,
            stroke_color: "#000000".into(),
            background_color: "#eee".into(),
            realtime_update: true,
            display_toolbar: true,
        }
    }
}

impl CanvasSettings {
    /// Check slider bounds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSetting` for a stroke width outside 1..=25, or a point
    /// display radius outside 1..=25 in `point` mode.
    pub fn validate(&self) -> Result<(), PageError> {
        if !STROKE_WIDTH_RANGE.contains(&self.stroke_width) {
            return Err(PageError::InvalidSetting {
                name: "stroke_width",
                reason: format!("{} not in 1..=25", self.stroke_width),
            });
        }
        if self.drawing_mode == DrawingMode::Point && !POINT_RADIUS_RANGE.contains(&self.point_display_radius) {
            return Err(PageError::InvalidSetting {
                name: "point_display_radius",
                reason: format!("{} not in 1..=25", self.point_display_radius),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn into_setup(self) -> CanvasSetup {
        let point_display_radius =
            if self.drawing_mode == DrawingMode::Point { self.point_display_radius } else { 0 };
        CanvasSetup {
            fill_color: "rgba(255, 165, 0, 0.3)".into(),
            stroke_width: self.stroke_width,
            stroke_color: self.stroke_color,
            background_color: self.background_color,
            background_image: None,
            update_realtime: self.realtime_update,
            height: 150,
            drawing_mode: self.drawing_mode,
            point_display_radius,
            display_toolbar: self.display_toolbar,
            key: Page::Basic.slug().to_owned(),
            ..CanvasSetup::default()
        }
    }
}
