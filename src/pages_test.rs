use super::*;

#[test]
fn dispatch_by_name_round_trips() {
    for page in Page::ALL {
        assert_eq!(Page::from_name(page.name()).unwrap(), page);
        assert_eq!(Page::from_slug(page.slug()).unwrap(), page);
    }
}

#[test]
fn menu_order_starts_with_about() {
    let names: Vec<&str> = Page::ALL.iter().map(|p| p.name()).collect();
    assert_eq!(
        names,
        vec![
            "About",
            "Basic example",
            "Get center coords of circles",
            "Color-based image annotation",
            "Download Base64 encoded PNG",
            "Compute the length of drawn arcs",
        ]
    );
}

#[test]
fn unknown_page_errors() {
    assert_eq!(Page::from_name("Nope"), Err(PageError::UnknownPage("Nope".into())));
    assert!(Page::from_slug("nope").is_err());
}

#[test]
fn slug_matches_serde_name() {
    for page in Page::ALL {
        assert_eq!(serde_json::to_value(page).unwrap(), serde_json::json!(page.slug()));
    }
}

#[test]
fn default_setup_mirrors_component_defaults() {
    let setup = CanvasSetup::default();
    assert_eq!(setup.fill_color, "#eee");
    assert_eq!(setup.stroke_width, 20);
    assert_eq!(setup.stroke_color, "black");
    assert_eq!((setup.height, setup.width), (400, 600));
    assert_eq!(setup.drawing_mode, DrawingMode::Freedraw);
    assert_eq!(setup.point_display_radius, 3);
    assert!(setup.update_realtime);
    assert!(setup.display_toolbar);
}

#[test]
fn circles_setup() {
    let setup = Page::Circles.canvas_setup();
    assert_eq!(setup.drawing_mode, DrawingMode::Circle);
    assert_eq!(setup.stroke_width, 5);
    assert_eq!((setup.height, setup.width), (400, 600));
    assert_eq!(setup.background_image.as_deref(), Some("tennis-balls.jpg"));
    assert_eq!(setup.key, "circles");
}

#[test]
fn png_export_setup_disables_realtime() {
    let setup = Page::PngExport.canvas_setup();
    assert!(!setup.update_realtime);
    assert!(setup.background_image.is_none());
}

#[test]
fn arc_length_setup_is_yellow_freedraw() {
    let setup = Page::ArcLength.canvas_setup();
    assert_eq!(setup.stroke_color, "yellow");
    assert_eq!(setup.drawing_mode, DrawingMode::Freedraw);
    assert_eq!((setup.height, setup.width), (320, 512));
}

#[test]
fn annotation_setup_switches_mode() {
    assert_eq!(annotation_setup("#EA101077", false).drawing_mode, DrawingMode::Rect);
    assert_eq!(annotation_setup("#EA101077", true).drawing_mode, DrawingMode::Transform);
    assert_eq!(Page::Annotation.canvas_setup().fill_color, "#EA101077");
}

#[test]
fn settings_default_is_valid() {
    assert!(CanvasSettings::default().validate().is_ok());
}

#[test]
fn settings_reject_stroke_width_out_of_range() {
    for width in [0, 26] {
        let settings = CanvasSettings { stroke_width: width, ..CanvasSettings::default() };
        assert!(matches!(
            settings.validate(),
            Err(PageError::InvalidSetting { name: "stroke_width", .. })
        ));
    }
}

#[test]
fn point_radius_only_checked_in_point_mode() {
    let settings = CanvasSettings { point_display_radius: 0, ..CanvasSettings::default() };
    assert!(settings.validate().is_ok());

    let point = CanvasSettings { drawing_mode: DrawingMode::Point, ..settings };
    assert!(matches!(
        point.validate(),
        Err(PageError::InvalidSetting { name: "point_display_radius", .. })
    ));
}

#[test]
fn settings_into_setup_zeroes_radius_outside_point_mode() {
    let line = CanvasSettings { drawing_mode: DrawingMode::Line, point_display_radius: 9, ..CanvasSettings::default() };
    assert_eq!(line.into_setup().point_display_radius, 0);

    let point = CanvasSettings { drawing_mode: DrawingMode::Point, point_display_radius: 9, ..CanvasSettings::default() };
    let setup = point.into_setup();
    assert_eq!(setup.point_display_radius, 9);
    assert_eq!(setup.height, 150);
    assert_eq!(setup.fill_color, "rgba(255, 165, 0, 0.3)");
}

#[test]
fn settings_deserialize_with_defaults() {
    let settings: CanvasSettings = serde_json::from_str(r#"{"drawing_mode":"polygon"}"#).unwrap();
    assert_eq!(settings.drawing_mode, DrawingMode::Polygon);
    assert_eq!(settings.stroke_width, 3);
    assert_eq!(settings.background_color, "#eee");
}
