// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Visualization tools for pose landmarks.

/// Color definitions.
pub mod color;

/// Drawing primitives and the native landmark renderer.
pub mod drawing;

/// Pose topology and landmark names.
pub mod skeleton;

pub use color::Color;
pub use drawing::{DrawingSpec, draw_landmarks};
pub use skeleton::{NUM_POSE_LANDMARKS, POSE_CONNECTIONS};
