//! Compile-time capabilities of square matrix sizes.
//!
//! Axis-specific matrix operations are only defined for sizes large enough to
//! hold that axis. They are gated by bounds such as `Dim<N>: MinDim3`, so
//! calling `translate_z_by` on a [`Matrix3D`](super::Matrix3D) fails to
//! compile rather than misbehaving at runtime.

/// Type-level carrier for a matrix dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dim<const N: usize>;

/// Sizes with a second axis: Y scaling and rotation in the XY plane.
pub trait MinDim2 {}

/// Sizes with a third axis: Z scaling, rotation about X and Y, translation
/// along X and Y through the last row, and the 3x3 vector operations.
///
/// A 2x2 matrix has no X rotation:
///
/// ```compile_fail
/// use walkthrough::math::Matrix2D;
///
/// let mut m = Matrix2D::<f32>::new();
/// m.rotate_around_x_by(1.0);
/// ```
pub trait MinDim3: MinDim2 {}

/// Sizes with a homogeneous row below the three spatial axes: translation
/// along Z.
///
/// ```
/// use walkthrough::math::Matrix4D;
///
/// let mut m = Matrix4D::<f32>::new();
/// m.rotate_around_x_by(1.0);
/// m.translate_z_by(1.0);
/// assert_eq!(m[(3, 2)], 1.0);
/// ```
///
/// In a 3x3 matrix the last row already belongs to Z:
///
/// ```compile_fail
/// use walkthrough::math::Matrix3D;
///
/// let mut m = Matrix3D::<f32>::new();
/// m.translate_z_by(1.0);
/// ```
pub trait MinDim4: MinDim3 {}

macro_rules! impl_min_dim {
    ($trait:ident => $($n:literal),+) => {
        $(impl $trait for Dim<$n> {})+
    };
}

impl_min_dim!(MinDim2 => 2, 3, 4, 5, 6, 7, 8);
impl_min_dim!(MinDim3 => 3, 4, 5, 6, 7, 8);
impl_min_dim!(MinDim4 => 4, 5, 6, 7, 8);
