//! Circle geometry — center coordinates from the canvas bounding box.
//!
//! DESIGN
//! ======
//! The canvas reports a circle by its `left`/`top` origin, `radius` and
//! rotation `angle` in degrees. Coordinates are relative to the top-left of the
//! canvas. The center sits one radius away from the origin along the rotated
//! x axis:
//!
//! ```text
//! center_x = left + radius * cos(angle * pi / 180)
//! center_y = top + radius * sin(angle * pi / 180)
//! ```

use serde::Serialize;

use crate::doc::DrawnObject;

/// Center of one drawn circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircleCenter {
    /// Position of the object in the snapshot's object list.
    pub index: usize,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl CircleCenter {
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Center coords: ({:.2}, {:.2}). Radius: {:.2}",
            self.center_x, self.center_y, self.radius
        )
    }
}

/// Center of a circle given its origin, radius and rotation in degrees.
#[must_use]
pub fn circle_center(left: f64, top: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let theta = angle_deg * std::f64::consts::PI / 180.0;
    (left + radius * theta.cos(), top + radius * theta.sin())
}

/// Centers of every object that carries `left`, `top` and `radius`.
///
/// Objects missing any of those are skipped; a missing `angle` is 0.
#[must_use]
pub fn circle_centers(objects: &[DrawnObject]) -> Vec<CircleCenter> {
    objects
        .iter()
        .enumerate()
        .filter_map(|(index, obj)| {
            let (left, top, radius) = (obj.left?, obj.top?, obj.radius?);
            let (center_x, center_y) = circle_center(left, top, radius, obj.angle.unwrap_or(0.0));
            Some(CircleCenter { index, center_x, center_y, radius })
        })
        .collect()
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod tests;
