// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pose landmark containers.
//!
//! These types mirror the structure a pose-estimation model hands back: a
//! result holding an optional list of normalized landmarks, each with `x`,
//! `y`, `z` and optional visibility/presence scores. They can be built
//! directly, from an `ndarray` view, or deserialized with serde.

use ndarray::{ArrayView2, s};
use serde::{Deserialize, Serialize};

use crate::error::{PoseDrawError, Result};
use crate::warn;

/// A single landmark in normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedLandmark {
    /// Horizontal position, 0.0 at the left edge and 1.0 at the right edge.
    pub x: f32,
    /// Vertical position, 0.0 at the top edge and 1.0 at the bottom edge.
    pub y: f32,
    /// Depth relative to the hips. Not used for drawing.
    #[serde(default)]
    pub z: f32,
    /// Likelihood that the landmark is visible (not occluded).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
    /// Likelihood that the landmark is inside the frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence: Option<f32>,
}

impl NormalizedLandmark {
    /// Create a landmark without visibility or presence scores.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            visibility: None,
            presence: None,
        }
    }

    /// Set the visibility score.
    #[must_use]
    pub const fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Set the presence score.
    #[must_use]
    pub const fn with_presence(mut self, presence: f32) -> Self {
        self.presence = Some(presence);
        self
    }

    /// The `(x, y)` pair of this landmark.
    #[must_use]
    pub const fn xy(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// Ordered landmark list. Position in the list is the joint identity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedLandmarkList {
    /// Landmarks in topology order.
    pub landmark: Vec<NormalizedLandmark>,
}

impl NormalizedLandmarkList {
    /// Create a new landmark list.
    ///
    /// # Arguments
    ///
    /// * `landmark` - Landmarks in topology order.
    ///
    /// # Returns
    ///
    /// * A new `NormalizedLandmarkList` instance.
    #[must_use]
    pub const fn new(landmark: Vec<NormalizedLandmark>) -> Self {
        Self { landmark }
    }

    /// Build a landmark list from a `(N, C)` array.
    ///
    /// Columns are read as `x, y, z, visibility, presence`; `C` may be
    /// anywhere from 2 to 5 and missing columns are left unset.
    ///
    /// # Errors
    ///
    /// Returns [`PoseDrawError::InvalidShape`] if `C` is outside `2..=5`.
    pub fn from_array(data: ArrayView2<'_, f32>) -> Result<Self> {
        let cols = data.ncols();
        if !(2..=5).contains(&cols) {
            return Err(PoseDrawError::InvalidShape(format!(
                "expected 2 to 5 landmark columns (x, y, z, visibility, presence), got {cols}"
            )));
        }
        if data.nrows() == 0 {
            warn!("Landmark array has no rows, the resulting list is empty");
        }

        let landmark = data
            .rows()
            .into_iter()
            .map(|row| NormalizedLandmark {
                x: row[0],
                y: row[1],
                z: row.get(2).copied().unwrap_or(0.0),
                visibility: row.get(3).copied(),
                presence: row.get(4).copied(),
            })
            .collect();

        Ok(Self { landmark })
    }

    /// Get the number of landmarks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmark.len()
    }

    /// Check if there are no landmarks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmark.is_empty()
    }
}

/// Output of a single-person pose estimator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PoseResults {
    /// Detected landmarks, or `None` when no person was found.
    #[serde(default)]
    pub pose_landmarks: Option<NormalizedLandmarkList>,
}

impl PoseResults {
    /// Create a result holding the given landmarks.
    #[must_use]
    pub const fn new(pose_landmarks: NormalizedLandmarkList) -> Self {
        Self {
            pose_landmarks: Some(pose_landmarks),
        }
    }

    /// Create a result with no detected pose.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            pose_landmarks: None,
        }
    }

    /// Borrow the landmark list.
    ///
    /// # Errors
    ///
    /// Returns [`PoseDrawError::MissingLandmarks`] if no pose was detected.
    pub fn landmarks(&self) -> Result<&NormalizedLandmarkList> {
        self.pose_landmarks
            .as_ref()
            .ok_or(PoseDrawError::MissingLandmarks)
    }
}

/// Flatten a landmark list into ordered `(x, y)` pairs.
///
/// `z`, visibility and presence are dropped.
#[must_use]
pub fn to_xy_list(list: &NormalizedLandmarkList) -> Vec<(f32, f32)> {
    list.landmark.iter().map(NormalizedLandmark::xy).collect()
}

/// Read `(x, y)` pairs from the first two columns of a `(N, C)` array.
///
/// # Errors
///
/// Returns [`PoseDrawError::InvalidShape`] if the array has fewer than two columns.
pub fn points_from_array(data: ArrayView2<'_, f32>) -> Result<Vec<(f32, f32)>> {
    if data.ncols() < 2 {
        return Err(PoseDrawError::InvalidShape(format!(
            "expected at least 2 columns (x, y), got {}",
            data.ncols()
        )));
    }
    Ok(data
        .slice(s![.., 0..2])
        .rows()
        .into_iter()
        .map(|row| (row[0], row[1]))
        .collect())
}
