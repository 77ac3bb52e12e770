//! Conversions to and from `glam` for single-precision values.
//!
//! The row-major buffer of a [`Matrix4D`] read as a column-major `glam::Mat4`
//! yields its transpose, which is the column-vector form of the same
//! transform. That is exactly how an OpenGL-style renderer reads the uniform.

use super::matrix::Matrix4D;
use super::vector::Vector3D;
use glam::{Mat4, Vec3};

impl From<Vector3D<f32>> for Vec3 {
    fn from(v: Vector3D<f32>) -> Self {
        Vec3::new(v.dx, v.dy, v.dz)
    }
}

impl From<Vec3> for Vector3D<f32> {
    fn from(v: Vec3) -> Self {
        Vector3D::new(v.x, v.y, v.z)
    }
}

impl From<&Matrix4D<f32>> for Mat4 {
    fn from(m: &Matrix4D<f32>) -> Self {
        Mat4::from_cols_slice(m.as_slice())
    }
}

impl From<Matrix4D<f32>> for Mat4 {
    fn from(m: Matrix4D<f32>) -> Self {
        Mat4::from(&m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_6;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn vector_round_trips_through_glam() {
        let v = Vector3D::new(1.0, -2.0, 3.5);
        let g: Vec3 = v.into();
        assert_eq!(g, Vec3::new(1.0, -2.0, 3.5));
        assert_eq!(Vector3D::from(g), v);
    }

    #[test]
    fn cross_and_dot_agree_with_glam() {
        let a = Vector3D::new(0.3_f32, -1.2, 4.0);
        let b = Vector3D::new(2.5_f32, 0.7, -0.9);
        let expected = Vec3::from(a).cross(Vec3::from(b));
        assert!(Vec3::from(a.cross(&b)).abs_diff_eq(expected, EPSILON));
        assert!((a.dot(&b) - Vec3::from(a).dot(Vec3::from(b))).abs() < EPSILON);
    }

    #[test]
    fn translation_lands_in_glam_w_axis() {
        let mut m = Matrix4D::<f32>::new();
        m.translate_x_by(5.0);
        m.translate_y_by(3.0);
        m.translate_z_by(-1.0);
        let g = Mat4::from(&m);
        assert!(g.abs_diff_eq(Mat4::from_translation(Vec3::new(5.0, 3.0, -1.0)), EPSILON));
    }

    #[test]
    fn rotation_handedness_against_glam() {
        let mut x = Matrix4D::<f32>::new();
        x.rotate_around_x_by(FRAC_PI_6);
        assert!(Mat4::from(x).abs_diff_eq(Mat4::from_rotation_x(FRAC_PI_6), EPSILON));

        let mut y = Matrix4D::<f32>::new();
        y.rotate_around_y_by(FRAC_PI_6);
        assert!(Mat4::from(y).abs_diff_eq(Mat4::from_rotation_y(FRAC_PI_6), EPSILON));

        // The Z elementary matrix turns the other way.
        let mut z = Matrix4D::<f32>::new();
        z.rotate_around_z_by(FRAC_PI_6);
        assert!(Mat4::from(z).abs_diff_eq(Mat4::from_rotation_z(-FRAC_PI_6), EPSILON));
    }

    #[test]
    fn scale_then_translate_matches_glam_composition() {
        let mut m = Matrix4D::<f32>::new();
        m.scale_uniform_by(1.0);
        m.translate_x_by(4.0);
        let expected = Mat4::from_translation(Vec3::new(4.0, 0.0, 0.0))
            * Mat4::from_scale(Vec3::splat(2.0));
        assert!(Mat4::from(m).abs_diff_eq(expected, EPSILON));
    }
}
