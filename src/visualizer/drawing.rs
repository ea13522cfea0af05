// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Low-level drawing primitives and the native landmark renderer.

use std::collections::BTreeMap;

use image::{Rgb, RgbImage};
use imageproc::drawing::{
    BresenhamLineIter, draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut,
};
use serde::{Deserialize, Serialize};

use crate::error::{PoseDrawError, Result};
use crate::landmarks::NormalizedLandmarkList;
use crate::visualizer::Color;

/// Landmarks with a visibility score below this value are not drawn.
pub const VISIBILITY_THRESHOLD: f32 = 0.5;

/// Landmarks with a presence score below this value are not drawn.
pub const PRESENCE_THRESHOLD: f32 = 0.5;

/// Slack allowed when deciding whether a normalized value lies in `[0, 1]`.
const NORMALIZED_TOLERANCE: f64 = 1e-9;

/// Style for one class of drawn element (landmark or connection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawingSpec {
    /// Stroke or fill color.
    pub color: Color,
    /// Stroke thickness in pixels. Negative fills circles.
    pub thickness: i32,
    /// Radius of landmark circles in pixels.
    pub circle_radius: i32,
}

impl Default for DrawingSpec {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            thickness: 2,
            circle_radius: 2,
        }
    }
}

impl DrawingSpec {
    /// Create a new drawing spec.
    #[must_use]
    pub const fn new(color: Color, thickness: i32, circle_radius: i32) -> Self {
        Self {
            color,
            thickness,
            circle_radius,
        }
    }
}

/// Map a normalized coordinate pair to pixel space.
///
/// Each axis is scaled, floored and capped at `dimension - 1`. There is no
/// lower bound, so negative input lands off-canvas.
///
/// Scaling happens in `f64` on the widened `f32` value, so `-0.1_f32` maps to
/// `-11` on a 100 pixel axis. A NaN coordinate maps to pixel 0 and values
/// beyond the `i32` range saturate.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn normalized_to_pixel(x: f32, y: f32, width: u32, height: u32) -> (i32, i32) {
    let x_px = ((f64::from(x) * f64::from(width)).floor() as i32).min(width as i32 - 1);
    let y_px = ((f64::from(y) * f64::from(height)).floor() as i32).min(height as i32 - 1);
    (x_px, y_px)
}

/// Like [`normalized_to_pixel`], but `None` when either value lies outside `[0, 1]`.
#[must_use]
pub fn normalized_to_pixel_checked(x: f32, y: f32, width: u32, height: u32) -> Option<(i32, i32)> {
    let in_range = |v: f32| {
        let v = f64::from(v);
        v >= 0.0 && v <= 1.0 + NORMALIZED_TOLERANCE
    };
    if !(in_range(x) && in_range(y)) {
        return None;
    }
    Some(normalized_to_pixel(x, y, width, height))
}

/// Clip a segment to an axis-aligned rectangle (Liang-Barsky).
///
/// Returns `None` when no part of the segment lies inside.
fn clip_segment(
    start: (f64, f64),
    end: (f64, f64),
    min: (f64, f64),
    max: (f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);

    for (p, q) in [
        (-dx, start.0 - min.0),
        (dx, max.0 - start.0),
        (-dy, start.1 - min.1),
        (dy, max.1 - start.1),
    ] {
        if p.abs() < f64::EPSILON {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        (start.0 + t0 * dx, start.1 + t0 * dy),
        (start.0 + t1 * dx, start.1 + t1 * dy),
    ))
}

/// Draw a straight line `width` pixels wide.
///
/// The segment is clipped to the image, widened by the stroke radius, before
/// rasterizing, so far off-canvas endpoints cost no more than visible ones.
/// Widths below 1 draw nothing.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn draw_thick_line_mut(
    image: &mut RgbImage,
    start: (i32, i32),
    end: (i32, i32),
    width: i32,
    color: Rgb<u8>,
) {
    if width < 1 {
        return;
    }
    let radius = width / 2;
    let (img_w, img_h) = image.dimensions();
    let margin = f64::from(radius) + 1.0;
    let Some((start, end)) = clip_segment(
        (f64::from(start.0), f64::from(start.1)),
        (f64::from(end.0), f64::from(end.1)),
        (-margin, -margin),
        (f64::from(img_w) - 1.0 + margin, f64::from(img_h) - 1.0 + margin),
    ) else {
        return;
    };
    let start = (start.0.round() as f32, start.1.round() as f32);
    let end = (end.0.round() as f32, end.1.round() as f32);

    if width == 1 {
        draw_line_segment_mut(image, start, end, color);
        return;
    }
    for point in BresenhamLineIter::new(start, end) {
        draw_filled_circle_mut(image, point, radius, color);
    }
}

/// Draw a circle outline of the given stroke thickness, or a filled disc
/// when `thickness` is negative.
pub fn draw_circle_mut(
    image: &mut RgbImage,
    center: (i32, i32),
    radius: i32,
    thickness: i32,
    color: Rgb<u8>,
) {
    if thickness < 0 {
        draw_filled_circle_mut(image, center, radius, color);
        return;
    }

    let inner = (radius - (thickness - 1) / 2).max(0);
    let outer = radius + thickness / 2;
    for r in inner..=outer {
        draw_hollow_circle_mut(image, center, r, color);
    }
}

/// Draw a landmark list and its connections.
///
/// Hidden landmarks (low visibility/presence, or outside the frame) are
/// skipped along with every connection touching them. Connections are drawn
/// first so the landmark markers sit on top. An absent or empty list is a
/// no-op.
///
/// # Errors
///
/// Returns [`PoseDrawError::ConnectionOutOfRange`] if a connection refers to a
/// landmark index past the end of the list. Lines for earlier connections
/// are already drawn at that point; landmark markers are not.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn draw_landmarks(
    image: &mut RgbImage,
    landmark_list: Option<&NormalizedLandmarkList>,
    connections: &[(usize, usize)],
    landmark_spec: Option<&DrawingSpec>,
    connection_spec: &DrawingSpec,
) -> Result<()> {
    let Some(list) = landmark_list.filter(|list| !list.is_empty()) else {
        return Ok(());
    };
    let (width, height) = image.dimensions();

    let mut visible = BTreeMap::new();
    for (idx, landmark) in list.landmark.iter().enumerate() {
        if landmark.visibility.is_some_and(|v| v < VISIBILITY_THRESHOLD)
            || landmark.presence.is_some_and(|p| p < PRESENCE_THRESHOLD)
        {
            continue;
        }
        if let Some(px) = normalized_to_pixel_checked(landmark.x, landmark.y, width, height) {
            visible.insert(idx, px);
        }
    }

    let num_landmarks = list.len();
    for &(from, to) in connections {
        if from >= num_landmarks || to >= num_landmarks {
            return Err(PoseDrawError::ConnectionOutOfRange {
                from,
                to,
                len: num_landmarks,
            });
        }
        if let (Some(&start), Some(&end)) = (visible.get(&from), visible.get(&to)) {
            draw_thick_line_mut(
                image,
                start,
                end,
                connection_spec.thickness,
                connection_spec.color.to_rgb(),
            );
        }
    }

    if let Some(spec) = landmark_spec {
        let border_radius = (spec.circle_radius + 1).max((spec.circle_radius as f32 * 1.2) as i32);
        for &center in visible.values() {
            draw_circle_mut(
                image,
                center,
                border_radius,
                spec.thickness,
                Color::WHITE.to_rgb(),
            );
            draw_circle_mut(
                image,
                center,
                spec.circle_radius,
                spec.thickness,
                spec.color.to_rgb(),
            );
        }
    }

    Ok(())
}
