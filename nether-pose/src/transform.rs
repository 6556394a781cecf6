//! Rigid transform value type

use glam::{Affine3A, EulerRot, Mat3, Mat4, Vec3};

/// Position plus orientation, no scale or shear.
///
/// The orientation is an orthonormal 3x3 matrix whose columns are the
/// right, up and back axes of the transformed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidTransform {
    /// Translation
    pub position: Vec3,
    /// Orthonormal rotation (columns: right, up, back)
    pub rotation: Mat3,
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl RigidTransform {
    /// No translation, no rotation
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Mat3::IDENTITY,
    };

    pub const fn new(position: Vec3, rotation: Mat3) -> Self {
        Self { position, rotation }
    }

    /// Pure translation
    pub const fn from_translation(position: Vec3) -> Self {
        Self {
            position,
            rotation: Mat3::IDENTITY,
        }
    }

    /// Build from a position and XYZ Euler angles in radians
    pub fn from_euler_xyz(position: Vec3, x: f32, y: f32, z: f32) -> Self {
        Self {
            position,
            rotation: Mat3::from_euler(EulerRot::XYZ, x, y, z),
        }
    }

    /// Build from right, up and back axis vectors
    pub fn from_axes(position: Vec3, right: Vec3, up: Vec3, back: Vec3) -> Self {
        Self {
            position,
            rotation: Mat3::from_cols(right, up, back),
        }
    }

    /// Same position with `rotation` in place of the current orientation
    pub fn with_rotation(self, rotation: Mat3) -> Self {
        Self { rotation, ..self }
    }

    #[inline]
    pub fn right(&self) -> Vec3 {
        self.rotation.x_axis
    }

    #[inline]
    pub fn up(&self) -> Vec3 {
        self.rotation.y_axis
    }

    #[inline]
    pub fn back(&self) -> Vec3 {
        self.rotation.z_axis
    }

    /// XYZ Euler decomposition of the orientation (radians)
    pub fn euler_xyz(&self) -> (f32, f32, f32) {
        self.rotation.to_euler(EulerRot::XYZ)
    }

    /// Convert to a glam affine transform
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_mat3_translation(self.rotation, self.position)
    }

    /// Convert to a 4x4 column-major matrix
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_cols(
            self.rotation.x_axis.extend(0.0),
            self.rotation.y_axis.extend(0.0),
            self.rotation.z_axis.extend(0.0),
            self.position.extend(1.0),
        )
    }

    /// Apply to a point
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.position
    }

    /// Largest absolute per-component difference across position and axes
    pub fn max_abs_diff(&self, other: &Self) -> f32 {
        let a = self.rotation.to_cols_array();
        let b = other.rotation.to_cols_array();
        let rotation = a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0f32, f32::max);
        let position = (self.position - other.position).abs().max_element();
        rotation.max(position)
    }
}

impl From<RigidTransform> for Affine3A {
    fn from(t: RigidTransform) -> Self {
        t.to_affine()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_identity() {
        let t = RigidTransform::IDENTITY;
        assert_eq!(t.right(), Vec3::X);
        assert_eq!(t.up(), Vec3::Y);
        assert_eq!(t.back(), Vec3::Z);
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(RigidTransform::default(), t);
    }

    #[test]
    fn test_with_rotation_replaces_orientation() {
        let t = RigidTransform::new(Vec3::new(1.0, 2.0, 3.0), Mat3::from_rotation_x(0.5));
        let r = t.with_rotation(Mat3::from_rotation_z(0.25));
        assert_eq!(r.position, t.position);
        assert_eq!(r.rotation, Mat3::from_rotation_z(0.25));
    }

    #[test]
    fn test_from_axes_matches_columns() {
        let t = RigidTransform::from_axes(Vec3::ONE, Vec3::Y, Vec3::NEG_X, Vec3::Z);
        assert!(t.rotation.abs_diff_eq(Mat3::from_rotation_z(FRAC_PI_2), 1e-6));
        assert_eq!(t.right(), Vec3::Y);
    }

    #[test]
    fn test_transform_point() {
        let t = RigidTransform::new(Vec3::new(1.0, 2.0, 3.0), Mat3::IDENTITY);
        assert_eq!(t.transform_point(Vec3::ONE), Vec3::new(2.0, 3.0, 4.0));

        let affine = t.to_affine();
        assert_eq!(affine.transform_point3(Vec3::ONE), Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(t.to_mat4().transform_point3(Vec3::ONE), Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_euler_roundtrip() {
        let t = RigidTransform::from_euler_xyz(Vec3::ZERO, 0.1, 0.2, 0.3);
        let (x, y, z) = t.euler_xyz();
        assert!((x - 0.1).abs() < 1e-5);
        assert!((y - 0.2).abs() < 1e-5);
        assert!((z - 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_max_abs_diff() {
        let a = RigidTransform::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let b = RigidTransform::from_translation(Vec3::new(1.5, 0.0, 0.0));
        assert_eq!(a.max_abs_diff(&b), 0.5);
        assert_eq!(a.max_abs_diff(&a), 0.0);
    }
}
