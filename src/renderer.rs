// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Skeleton rendering.
//!
//! [`PoseRenderer`] draws a pose onto an [`RgbImage`] in one of two ways:
//!
//! * [`PoseRenderer::draw_pose`] hands a [`PoseResults`] to the native
//!   landmark renderer with fixed connection topology and two styles.
//! * [`PoseRenderer::draw_custom_landmarks`] takes plain `(x, y)` pairs and
//!   draws them with per-call filtering and styling from
//!   [`CustomDrawOptions`].
//!
//! [`PoseRenderer::landmark_list`] bridges the two by flattening a native
//! result into plain pairs.

use std::collections::HashSet;

use image::RgbImage;
use imageproc::drawing::draw_filled_circle_mut;

use crate::error::{PoseDrawError, Result};
use crate::landmarks::{PoseResults, to_xy_list};
use crate::verbose;
use crate::visualizer::drawing::{draw_landmarks, draw_thick_line_mut, normalized_to_pixel};
use crate::visualizer::{Color, DrawingSpec, POSE_CONNECTIONS};

/// Default style for landmarks drawn by [`PoseRenderer::draw_pose`].
pub const DEFAULT_LANDMARK_SPEC: DrawingSpec = DrawingSpec::new(Color(245, 117, 66), 2, 2);

/// Default style for connections drawn by [`PoseRenderer::draw_pose`].
pub const DEFAULT_CONNECTION_SPEC: DrawingSpec = DrawingSpec::new(Color(245, 66, 230), 2, 2);

/// Default node color for [`PoseRenderer::draw_custom_landmarks`].
pub const DEFAULT_DOT_COLOR: Color = Color::GREEN;

/// Default edge color for [`PoseRenderer::draw_custom_landmarks`].
pub const DEFAULT_LINE_COLOR: Color = Color::BLUE;

/// Default node diameter in pixels.
pub const DEFAULT_DIAMETER: i32 = 6;

/// Default edge width in pixels.
pub const DEFAULT_LINE_WIDTH: i32 = 3;

/// Options for [`PoseRenderer::draw_custom_landmarks`].
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use std::collections::HashSet;
/// use pose_draw::visualizer::skeleton::{POSE_LANDMARK_NAMES, landmark_index};
/// use pose_draw::{Color, CustomDrawOptions};
///
/// // Hide every face landmark, keep the body.
/// let face: HashSet<usize> = POSE_LANDMARK_NAMES
///     .iter()
///     .take_while(|name| **name != "left_shoulder")
///     .filter_map(|name| landmark_index(name))
///     .collect();
/// assert_eq!(face.len(), 11);
///
/// let options = CustomDrawOptions::new()
///     .with_nodes_to_skip(face.clone())
///     .with_edges_to_skip(face)
///     .with_dot_color(Color::RED)
///     .with_diameter(8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomDrawOptions {
    /// Edges to draw, as `(from, to)` landmark indices.
    pub connections: Vec<(usize, usize)>,
    /// Landmark indices whose circles are not drawn.
    pub nodes_to_skip: Option<HashSet<usize>>,
    /// Edges whose `from` index is in this set are not drawn.
    /// The `to` index is never consulted.
    pub edges_to_skip: Option<HashSet<usize>>,
    /// Circle color.
    pub dot_color: Color,
    /// Line color.
    pub line_color: Color,
    /// Circle diameter in pixels. The drawn radius is `diameter / 2`.
    pub diameter: i32,
    /// Line width in pixels.
    pub line_width: i32,
}

impl Default for CustomDrawOptions {
    fn default() -> Self {
        Self {
            connections: POSE_CONNECTIONS.to_vec(),
            nodes_to_skip: None,
            edges_to_skip: None,
            dot_color: DEFAULT_DOT_COLOR,
            line_color: DEFAULT_LINE_COLOR,
            diameter: DEFAULT_DIAMETER,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl CustomDrawOptions {
    /// Create options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the connection topology.
    #[must_use]
    pub fn with_connections(mut self, connections: Vec<(usize, usize)>) -> Self {
        self.connections = connections;
        self
    }

    /// Set the landmark indices whose circles are skipped.
    #[must_use]
    pub fn with_nodes_to_skip(mut self, nodes: HashSet<usize>) -> Self {
        self.nodes_to_skip = Some(nodes);
        self
    }

    /// Set the `from` indices whose outgoing edges are skipped.
    #[must_use]
    pub fn with_edges_to_skip(mut self, edges: HashSet<usize>) -> Self {
        self.edges_to_skip = Some(edges);
        self
    }

    /// Set the circle color.
    #[must_use]
    pub const fn with_dot_color(mut self, color: Color) -> Self {
        self.dot_color = color;
        self
    }

    /// Set the line color.
    #[must_use]
    pub const fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    /// Set the circle diameter.
    #[must_use]
    pub const fn with_diameter(mut self, diameter: i32) -> Self {
        self.diameter = diameter;
        self
    }

    /// Set the line width.
    #[must_use]
    pub const fn with_line_width(mut self, line_width: i32) -> Self {
        self.line_width = line_width;
        self
    }

    fn skips_node(&self, idx: usize) -> bool {
        self.nodes_to_skip
            .as_ref()
            .is_some_and(|skip| skip.contains(&idx))
    }

    fn skips_edge(&self, from: usize) -> bool {
        self.edges_to_skip
            .as_ref()
            .is_some_and(|skip| skip.contains(&from))
    }
}

/// Convert normalized landmarks to pixel keypoints for an image of the given size.
///
/// The output has the same length and order as `landmarks`.
#[must_use]
pub fn pixel_keypoints(landmarks: &[(f32, f32)], width: u32, height: u32) -> Vec<(i32, i32)> {
    landmarks
        .iter()
        .map(|&(x, y)| normalized_to_pixel(x, y, width, height))
        .collect()
}

/// Pose skeleton renderer.
///
/// Holds the styles used by [`PoseRenderer::draw_pose`]. Images are always
/// borrowed mutably and drawn in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoseRenderer {
    /// Style for landmark circles on the native path.
    pub landmark_spec: DrawingSpec,
    /// Style for connection lines on the native path.
    pub connection_spec: DrawingSpec,
}

impl Default for PoseRenderer {
    fn default() -> Self {
        Self {
            landmark_spec: DEFAULT_LANDMARK_SPEC,
            connection_spec: DEFAULT_CONNECTION_SPEC,
        }
    }
}

impl PoseRenderer {
    /// Create a renderer with the default native styles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the landmark style for the native path.
    #[must_use]
    pub const fn with_landmark_spec(mut self, spec: DrawingSpec) -> Self {
        self.landmark_spec = spec;
        self
    }

    /// Override the connection style for the native path.
    #[must_use]
    pub const fn with_connection_spec(mut self, spec: DrawingSpec) -> Self {
        self.connection_spec = spec;
        self
    }

    /// Draw a native pose result with [`POSE_CONNECTIONS`] and the renderer's styles.
    ///
    /// A result with no landmarks leaves the image untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PoseDrawError::ConnectionOutOfRange`] if the result has fewer
    /// landmarks than the topology references.
    pub fn draw_pose<'a>(
        &self,
        image: &'a mut RgbImage,
        results: &PoseResults,
    ) -> Result<&'a mut RgbImage> {
        draw_landmarks(
            image,
            results.pose_landmarks.as_ref(),
            &POSE_CONNECTIONS,
            Some(&self.landmark_spec),
            &self.connection_spec,
        )?;
        verbose!(
            "Drew native pose with {} landmarks",
            results.pose_landmarks.as_ref().map_or(0, |l| l.len())
        );
        Ok(image)
    }

    /// Flatten a native pose result into ordered `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`PoseDrawError::MissingLandmarks`] if the result carries no landmarks.
    pub fn landmark_list(&self, results: &PoseResults) -> Result<Vec<(f32, f32)>> {
        Ok(to_xy_list(results.landmarks()?))
    }

    /// Draw plain normalized landmarks with filtering and custom styling.
    ///
    /// Every landmark gets a pixel keypoint, including skipped ones, so edges
    /// can still reference them. Circles are drawn first, then lines. `None`
    /// for `landmarks` leaves the image untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PoseDrawError::ConnectionOutOfRange`] when an unskipped
    /// connection names an index past the end of `landmarks`. Circles and any
    /// earlier edges are already drawn when this happens.
    pub fn draw_custom_landmarks<'a>(
        &self,
        image: &'a mut RgbImage,
        landmarks: Option<&[(f32, f32)]>,
        options: &CustomDrawOptions,
    ) -> Result<&'a mut RgbImage> {
        let Some(landmarks) = landmarks else {
            return Ok(image);
        };

        let (width, height) = image.dimensions();
        let keypoints = pixel_keypoints(landmarks, width, height);

        let dot_color = options.dot_color.to_rgb();
        let mut nodes_drawn = 0;
        for (idx, &center) in keypoints.iter().enumerate() {
            if options.skips_node(idx) {
                continue;
            }
            draw_filled_circle_mut(image, center, options.diameter / 2, dot_color);
            nodes_drawn += 1;
        }

        let line_color = options.line_color.to_rgb();
        let mut edges_drawn = 0;
        for &(from, to) in &options.connections {
            if options.skips_edge(from) {
                continue;
            }
            let (Some(&start), Some(&end)) = (keypoints.get(from), keypoints.get(to)) else {
                return Err(PoseDrawError::ConnectionOutOfRange {
                    from,
                    to,
                    len: keypoints.len(),
                });
            };
            draw_thick_line_mut(image, start, end, options.line_width, line_color);
            edges_drawn += 1;
        }

        verbose!(
            "Drew {nodes_drawn}/{} nodes and {edges_drawn}/{} edges on {width}x{height} image",
            keypoints.len(),
            options.connections.len()
        );
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::{NormalizedLandmark, NormalizedLandmarkList};
    use image::Rgb;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn six_points() -> Vec<(f32, f32)> {
        vec![
            (0.1, 0.5),
            (0.2, 0.2),
            (0.3, 0.2),
            (0.4, 0.2),
            (0.5, 0.2),
            (0.9, 0.5),
        ]
    }

    fn all_nodes() -> HashSet<usize> {
        (0..6).collect()
    }

    #[test]
    fn test_pixel_keypoints_bounds() {
        let landmarks = [(0.0, 0.0), (1.0, 1.0), (0.999, 0.5), (0.25, 0.75)];
        let keypoints = pixel_keypoints(&landmarks, 100, 40);

        assert_eq!(keypoints, vec![(0, 0), (99, 39), (99, 20), (25, 30)]);
        for (x, y) in keypoints {
            assert!((0..100).contains(&x));
            assert!((0..40).contains(&y));
        }
    }

    #[test]
    fn test_pixel_keypoints_alignment() {
        let landmarks = [(0.5, 0.5), (0.1, 0.1)];
        assert_eq!(pixel_keypoints(&landmarks, 100, 100).len(), 2);
    }

    #[test]
    fn test_none_landmarks_is_noop() {
        let renderer = PoseRenderer::new();
        let mut img = RgbImage::from_pixel(32, 32, Rgb([7, 8, 9]));
        let before = img.clone();

        renderer
            .draw_custom_landmarks(&mut img, None, &CustomDrawOptions::new())
            .unwrap();

        assert_eq!(img, before);
    }

    #[test]
    fn test_node_skip() {
        let renderer = PoseRenderer::new();
        let mut img = RgbImage::new(100, 100);
        let landmarks = [(0.5, 0.5), (0.1, 0.1)];
        let options = CustomDrawOptions::new()
            .with_connections(Vec::new())
            .with_nodes_to_skip(HashSet::from([0]));

        renderer
            .draw_custom_landmarks(&mut img, Some(landmarks.as_slice()), &options)
            .unwrap();

        assert_eq!(*img.get_pixel(50, 50), BLACK);
        assert_eq!(*img.get_pixel(10, 10), DEFAULT_DOT_COLOR.to_rgb());
    }

    #[test]
    fn test_skipped_node_still_anchors_edges() {
        let renderer = PoseRenderer::new();
        let mut img = RgbImage::new(100, 100);
        let options = CustomDrawOptions::new()
            .with_connections(vec![(0, 5)])
            .with_nodes_to_skip(all_nodes());

        renderer
            .draw_custom_landmarks(&mut img, Some(six_points().as_slice()), &options)
            .unwrap();

        assert_eq!(*img.get_pixel(50, 50), DEFAULT_LINE_COLOR.to_rgb());
        assert_eq!(*img.get_pixel(10, 50), DEFAULT_LINE_COLOR.to_rgb());
    }

    #[test]
    fn test_edge_skip_uses_from_index_only() {
        let renderer = PoseRenderer::new();
        let skip_from_zero = HashSet::from([0]);

        let mut forward = RgbImage::new(100, 100);
        let options = CustomDrawOptions::new()
            .with_connections(vec![(0, 5)])
            .with_nodes_to_skip(all_nodes())
            .with_edges_to_skip(skip_from_zero.clone());
        renderer
            .draw_custom_landmarks(&mut forward, Some(six_points().as_slice()), &options)
            .unwrap();
        assert!(forward.pixels().all(|p| *p == BLACK));

        let mut backward = RgbImage::new(100, 100);
        let options = CustomDrawOptions::new()
            .with_connections(vec![(5, 0)])
            .with_nodes_to_skip(all_nodes())
            .with_edges_to_skip(skip_from_zero);
        renderer
            .draw_custom_landmarks(&mut backward, Some(six_points().as_slice()), &options)
            .unwrap();
        assert_eq!(*backward.get_pixel(50, 50), DEFAULT_LINE_COLOR.to_rgb());
    }

    #[test]
    fn test_out_of_range_connection() {
        let renderer = PoseRenderer::new();
        let mut img = RgbImage::new(100, 100);
        let landmarks = [(0.5, 0.5), (0.1, 0.1)];
        let options = CustomDrawOptions::new().with_connections(vec![(0, 1), (0, 99)]);

        let err = renderer
            .draw_custom_landmarks(&mut img, Some(landmarks.as_slice()), &options)
            .unwrap_err();

        assert_eq!(
            err,
            PoseDrawError::ConnectionOutOfRange {
                from: 0,
                to: 99,
                len: 2
            }
        );
        // Partial output stays on the image.
        assert_eq!(*img.get_pixel(10, 10), DEFAULT_LINE_COLOR.to_rgb());
        assert_eq!(*img.get_pixel(53, 50), DEFAULT_DOT_COLOR.to_rgb());
    }

    #[test]
    fn test_out_of_range_connection_skipped_by_from() {
        let renderer = PoseRenderer::new();
        let mut img = RgbImage::new(10, 10);
        let options = CustomDrawOptions::new()
            .with_connections(vec![(7, 99)])
            .with_edges_to_skip(HashSet::from([7]));

        assert!(
            renderer
                .draw_custom_landmarks(&mut img, Some([(0.5, 0.5)].as_slice()), &options)
                .is_ok()
        );
    }

    #[test]
    fn test_negative_coordinates_pass_through() {
        let renderer = PoseRenderer::new();
        let mut img = RgbImage::new(20, 20);
        let options = CustomDrawOptions::new().with_connections(Vec::new());

        renderer
            .draw_custom_landmarks(&mut img, Some([(-1.0, -1.0)].as_slice()), &options)
            .unwrap();

        assert!(img.pixels().all(|p| *p == BLACK));
    }

    #[test]
    fn test_landmark_list_requires_landmarks() {
        let renderer = PoseRenderer::new();
        assert_eq!(
            renderer.landmark_list(&PoseResults::empty()),
            Err(PoseDrawError::MissingLandmarks)
        );

        let results = PoseResults::new(NormalizedLandmarkList::new(vec![
            NormalizedLandmark::new(0.3, 0.4, 0.5).with_visibility(0.9),
        ]));
        assert_eq!(renderer.landmark_list(&results).unwrap(), vec![(0.3, 0.4)]);
    }

    #[test]
    fn test_draw_pose_empty_is_noop() {
        let renderer = PoseRenderer::new();
        let mut img = RgbImage::new(16, 16);
        renderer.draw_pose(&mut img, &PoseResults::empty()).unwrap();
        assert!(img.pixels().all(|p| *p == BLACK));
    }

    #[test]
    fn test_renderer_styles_override() {
        let spec = DrawingSpec::new(Color::RED, -1, 4);
        let renderer = PoseRenderer::new()
            .with_landmark_spec(spec)
            .with_connection_spec(spec);
        assert_eq!(renderer.landmark_spec, spec);
        assert_eq!(renderer.connection_spec, spec);

        let defaults = PoseRenderer::new();
        assert_eq!(defaults.landmark_spec.color, Color(245, 117, 66));
        assert_eq!(defaults.connection_spec.color, Color(245, 66, 230));
        assert_eq!(defaults.landmark_spec.thickness, 2);
        assert_eq!(defaults.landmark_spec.circle_radius, 2);
        assert_eq!(defaults.connection_spec.thickness, 2);
        assert_eq!(defaults.connection_spec.circle_radius, 2);
    }

    #[test]
    fn test_far_off_canvas_edge_is_clipped() {
        let renderer = PoseRenderer::new();
        let mut img = RgbImage::new(100, 100);
        let landmarks = [(-2e6, 0.5), (0.5, 0.5)];
        let options = CustomDrawOptions::new().with_connections(vec![(0, 1)]);

        renderer
            .draw_custom_landmarks(&mut img, Some(landmarks.as_slice()), &options)
            .unwrap();

        assert_eq!(*img.get_pixel(0, 50), DEFAULT_LINE_COLOR.to_rgb());
        assert_eq!(*img.get_pixel(25, 50), DEFAULT_LINE_COLOR.to_rgb());
        assert_eq!(*img.get_pixel(90, 50), BLACK);
    }
}
