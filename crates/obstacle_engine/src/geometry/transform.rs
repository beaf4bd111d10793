//! Rigid placement transform
//!
//! A [`Transform`] is a 4x4 homogeneous matrix whose bottom row is exactly
//! `[0, 0, 0, 1]` and whose entries are all finite. It is immutable; a
//! body's placement is replaced wholesale.

use crate::foundation::math::{Mat3, Mat4, Point3, Vec3};
use thiserror::Error;

/// Tolerance used by [`Transform::is_rigid`]
pub const RIGIDITY_EPSILON: f64 = 1e-9;

/// Reasons a matrix cannot be used as a placement
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// An entry is NaN or infinite (row-major index into the 4x4 matrix)
    #[error("matrix entry {index} is not finite")]
    NonFinite {
        /// Row-major index of the offending entry
        index: usize,
    },

    /// The bottom row is not `[0, 0, 0, 1]`
    #[error("bottom row must be [0, 0, 0, 1], got [{}, {}, {}, {}]", row[0], row[1], row[2], row[3])]
    NotAffine {
        /// The bottom row that was supplied
        row: [f64; 4],
    },
}

/// Rigid placement in the world frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Identity placement
    pub fn identity() -> Self {
        Self { matrix: Mat4::identity() }
    }

    /// Build from a row-major 3x3 rotation block and a translation vector
    pub fn from_rotation_translation(
        rotation: &[f64; 9],
        translation: &[f64; 3],
    ) -> Result<Self, TransformError> {
        let mut matrix = Mat4::identity();
        for row in 0..3 {
            for col in 0..3 {
                matrix[(row, col)] = rotation[row * 3 + col];
            }
            matrix[(row, 3)] = translation[row];
        }
        Self::from_matrix(matrix)
    }

    /// Build from a translation only
    pub fn from_translation(translation: Vec3) -> Result<Self, TransformError> {
        Self::from_matrix(Mat4::new_translation(&translation))
    }

    /// Build from a full matrix, checking finiteness and the bottom row
    pub fn from_matrix(matrix: Mat4) -> Result<Self, TransformError> {
        for row in 0..4 {
            for col in 0..4 {
                if !matrix[(row, col)].is_finite() {
                    return Err(TransformError::NonFinite { index: row * 4 + col });
                }
            }
        }

        let bottom = [matrix[(3, 0)], matrix[(3, 1)], matrix[(3, 2)], matrix[(3, 3)]];
        if bottom != [0.0, 0.0, 0.0, 1.0] {
            return Err(TransformError::NotAffine { row: bottom });
        }

        Ok(Self { matrix })
    }

    /// The homogeneous matrix
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// Upper-left 3x3 rotation block
    pub fn rotation(&self) -> Mat3 {
        self.matrix.fixed_view::<3, 3>(0, 0).into_owned()
    }

    /// Translation column
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.matrix[(0, 3)], self.matrix[(1, 3)], self.matrix[(2, 3)])
    }

    /// Matrix entries in row-major order
    pub fn to_row_major(&self) -> [f64; 16] {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = self.matrix[(row, col)];
            }
        }
        out
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        self.matrix.transform_point(point)
    }

    /// Whether the rotation block is orthonormal with determinant +1
    ///
    /// Placements are accepted without this check; callers that need a
    /// strict rigid motion can test for it.
    pub fn is_rigid(&self) -> bool {
        let rotation = self.rotation();
        let gram = rotation.transpose() * rotation;
        approx::relative_eq!(gram, Mat3::identity(), epsilon = RIGIDITY_EPSILON)
            && approx::relative_eq!(rotation.determinant(), 1.0, epsilon = RIGIDITY_EPSILON)
    }
}
