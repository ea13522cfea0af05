// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Pose Drawing Library
//!
//! Render 2D human-pose skeletons onto RGB images from normalized landmark
//! coordinates.
//!
//! Landmarks are `(x, y)` pairs in `[0, 1]` relative to the image size. They
//! are mapped to pixel space, then drawn as circles at the joints and lines
//! along the bones named by a connection list.
//!
//! ## Features
//!
//! - **Two input shapes** - a native [`PoseResults`] structure (landmarks with
//!   `z`, visibility and presence), or a plain slice of `(x, y)` pairs
//! - **Filtered rendering** - skip individual joints, or edges by their start index
//! - **Configurable styling** - named defaults, overridable per renderer or per call
//! - **In-place drawing** - images are borrowed mutably and never copied
//!
//! ## Quick Start
//!
//! ```rust
//! use image::RgbImage;
//! use pose_draw::{CustomDrawOptions, PoseRenderer};
//!
//! # fn main() -> pose_draw::Result<()> {
//! let renderer = PoseRenderer::new();
//! let mut image = RgbImage::new(100, 100);
//!
//! let landmarks = [(0.0, 0.0), (0.99, 0.99)];
//! let options = CustomDrawOptions::new().with_connections(vec![(0, 1)]);
//! renderer.draw_custom_landmarks(&mut image, Some(&landmarks[..]), &options)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Native Results
//!
//! ```rust
//! use image::RgbImage;
//! use ndarray::Array2;
//! use pose_draw::{NormalizedLandmarkList, PoseRenderer, PoseResults};
//!
//! # fn main() -> pose_draw::Result<()> {
//! // 33 landmarks with x, y, z, visibility columns
//! let data = Array2::from_elem((33, 4), 0.5_f32);
//! let results = PoseResults::new(NormalizedLandmarkList::from_array(data.view())?);
//!
//! let renderer = PoseRenderer::new();
//! let mut image = RgbImage::new(64, 64);
//! renderer.draw_pose(&mut image, &results)?;
//!
//! // Or flatten to plain pairs for custom drawing
//! let points = renderer.landmark_list(&results)?;
//! assert_eq!(points.len(), 33);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`renderer`] | [`PoseRenderer`] and [`CustomDrawOptions`] |
//! | [`landmarks`] | Native result types ([`PoseResults`], [`NormalizedLandmarkList`]) |
//! | [`visualizer`] | Colors, topology and drawing primitives |
//! | [`error`] | Error types ([`PoseDrawError`], [`Result`]) |
//! | [`logging`] | Verbosity flag and console macros |

// Modules
pub mod error;
pub mod landmarks;
pub mod logging;
pub mod renderer;
pub mod visualizer;

// Re-export main types for convenience
pub use error::{PoseDrawError, Result};
pub use landmarks::{NormalizedLandmark, NormalizedLandmarkList, PoseResults, to_xy_list};
pub use renderer::{CustomDrawOptions, PoseRenderer, pixel_keypoints};
pub use visualizer::{Color, DrawingSpec, POSE_CONNECTIONS};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
