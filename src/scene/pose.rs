use cgmath::{Matrix, Matrix3, SquareMatrix, Vector3, Zero};

/// Position and orientation of a rigid body in world space.
///
/// The orientation must be a proper rotation matrix (orthonormal with
/// determinant +1). This is a caller precondition: it is checked in debug
/// builds only, and release builds apply whatever matrix is supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vector3<f32>,
    pub orientation: Matrix3<f32>,
}

impl Pose {
    /// Create a pose from a position and a rotation matrix
    pub fn new(position: Vector3<f32>, orientation: Matrix3<f32>) -> Self {
        debug_assert!(
            is_rotation(&orientation),
            "orientation is not a proper rotation matrix"
        );
        Self {
            position,
            orientation,
        }
    }

    /// Create a pose at `position` with identity orientation
    pub fn from_position(position: Vector3<f32>) -> Self {
        Self {
            position,
            orientation: Matrix3::identity(),
        }
    }

    /// World-space image of a local-frame point.
    ///
    /// The rotation is applied first, about the body origin, then the
    /// translation. The order must not be reversed.
    pub fn transform_point(&self, point: Vector3<f32>) -> Vector3<f32> {
        self.orientation * point + self.position
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vector3::zero(),
            orientation: Matrix3::identity(),
        }
    }
}

fn is_rotation(m: &Matrix3<f32>) -> bool {
    let gram = m.transpose() * m;
    let identity = Matrix3::<f32>::identity();
    let mut err: f32 = 0.0;
    for col in 0..3 {
        for row in 0..3 {
            err = err.max((gram[col][row] - identity[col][row]).abs());
        }
    }
    err < 1e-4 && (m.determinant() - 1.0).abs() < 1e-4
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cgmath::Deg;

    #[test]
    fn default_pose_is_identity() {
        let pose = Pose::default();
        let p = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(pose.transform_point(p), p);
    }

    #[test]
    fn rotation_applies_before_translation() {
        let pose = Pose::new(
            Vector3::new(0.0, 0.0, 5.0),
            Matrix3::from_angle_z(Deg(90.0)),
        );
        let world = pose.transform_point(Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(world, Vector3::new(0.0, 1.0, 5.0), epsilon = 1e-6);
    }

    #[test]
    fn from_position_keeps_identity_orientation() {
        let pose = Pose::from_position(Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(
            pose.transform_point(Vector3::new(0.0, 1.0, 0.0)),
            Vector3::new(2.0, 1.0, 0.0)
        );
    }
}
