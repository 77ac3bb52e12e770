//! Square matrices with accumulated affine transform parameters.
//!
//! Storage is row-major: element `(row, column)` lives at flat index
//! `row * N + column`. For a 4x4 matrix the translation sits in the last row,
//!
//! ```text
//!  0  1  2  3    X
//!  4  5  6  7    Y
//!  8  9 10 11    Z
//! 12 13 14 15    translation
//! ```
//!
//! which matches the `v' = v * M` convention of a renderer that uploads the
//! buffer unchanged.

#![allow(clippy::needless_range_loop)]

use super::dimension::{Dim, MinDim2, MinDim3, MinDim4};
use super::error::DimensionError;
use super::transform::TransformParams;
use super::vector::Vector3D;
use approx::{AbsDiffEq, RelativeEq};
use num_traits::{Float, Num};
use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign};

/// How [`Matrix::at_with`] validates a `(row, column)` pair.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BoundsCheck {
    /// Both coordinates must be below the dimension.
    #[default]
    Strict,
    /// Coordinates equal to the dimension are also admitted. The resulting
    /// flat index is still checked against the buffer, so `(0, N)` aliases
    /// `(1, 0)` while `(N, 0)` is rejected.
    Inclusive,
}

impl BoundsCheck {
    fn admits(self, row: usize, column: usize, dimension: usize) -> bool {
        match self {
            Self::Strict => row < dimension && column < dimension,
            Self::Inclusive => row <= dimension && column <= dimension,
        }
    }
}

/// An `N`x`N` matrix together with the scale, rotation and translation it
/// was built from.
///
/// Every `*_by` mutator adds its delta to the cached parameters and rebuilds
/// the whole buffer, so the result only depends on the accumulated values and
/// never on the order of the calls.
///
/// Equality compares the elements only.
#[derive(Debug, Clone, Copy)]
pub struct Matrix<T, const N: usize> {
    elements: [[T; N]; N],
    params: TransformParams<T>,
}

pub type Matrix2D<T> = Matrix<T, 2>;
pub type Matrix3D<T> = Matrix<T, 3>;
pub type Matrix4D<T> = Matrix<T, 4>;

/// The single-precision 4x4 matrix uploaded as a shader uniform.
pub type GlMatrix = Matrix4D<f32>;

fn identity_rows<T: Num + Copy, const N: usize>() -> [[T; N]; N] {
    let mut rows = [[T::zero(); N]; N];
    for i in 0..N {
        rows[i][i] = T::one();
    }
    rows
}

fn multiply_rows<T: Num + Copy, const N: usize>(
    lhs: &[[T; N]; N],
    rhs: &[[T; N]; N],
) -> [[T; N]; N] {
    let mut product = [[T::zero(); N]; N];
    for row in 0..N {
        for column in 0..N {
            let mut sum = T::zero();
            for k in 0..N {
                sum = sum + lhs[row][k] * rhs[k][column];
            }
            product[row][column] = sum;
        }
    }
    product
}

impl<T, const N: usize> Matrix<T, N> {
    pub const ROWS: usize = N;
    pub const COLUMNS: usize = N;
    pub const SIZE: usize = N * N;

    pub fn params(&self) -> &TransformParams<T> {
        &self.params
    }

    pub fn rows(&self) -> &[[T; N]; N] {
        &self.elements
    }

    /// The row-major buffer, ready to hand to a uniform upload.
    pub fn as_slice(&self) -> &[T] {
        self.elements.as_flattened()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.elements.as_flattened_mut()
    }

    pub fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }

    pub fn at(&self, row: usize, column: usize) -> Option<&T> {
        self.at_with(row, column, BoundsCheck::Strict)
    }

    pub fn at_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        self.at_mut_with(row, column, BoundsCheck::Strict)
    }

    pub fn at_with(&self, row: usize, column: usize, bounds: BoundsCheck) -> Option<&T> {
        if !bounds.admits(row, column, N) {
            return None;
        }
        self.as_slice().get(row * N + column)
    }

    pub fn at_mut_with(
        &mut self,
        row: usize,
        column: usize,
        bounds: BoundsCheck,
    ) -> Option<&mut T> {
        if !bounds.admits(row, column, N) {
            return None;
        }
        self.as_mut_slice().get_mut(row * N + column)
    }

    pub fn at_index(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn at_index_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    fn scales_axis(axis: usize) -> bool {
        axis < N
    }

    /// Rotation about Z only needs the XY plane; X and Y need a third axis.
    fn rotates_about(axis: usize) -> bool {
        if axis == 2 {
            N >= 2
        } else {
            N >= 3
        }
    }

    /// Translation lives in the last row, which must not be a spatial axis.
    fn translates_axis(axis: usize) -> bool {
        N >= 3 && axis + 1 < N
    }
}

impl<T: Num + Copy, const N: usize> Matrix<T, N> {
    /// An identity matrix with default transform parameters.
    pub fn new() -> Self {
        Self {
            elements: identity_rows(),
            params: TransformParams::identity(),
        }
    }

    /// Wraps raw rows. The cached parameters start at their defaults, so the
    /// next transform mutation replaces these elements.
    pub fn from_rows(rows: [[T; N]; N]) -> Self {
        Self {
            elements: rows,
            params: TransformParams::identity(),
        }
    }

    pub fn from_row_major_slice(values: &[T]) -> Result<Self, DimensionError> {
        if values.len() != Self::SIZE {
            return Err(DimensionError::LengthMismatch {
                dimension: N,
                expected: Self::SIZE,
                actual: values.len(),
            });
        }
        let mut matrix = Self::new();
        matrix.as_mut_slice().copy_from_slice(values);
        Ok(matrix)
    }

    /// Overwrites the elements with the identity. The cached parameters are
    /// left alone.
    pub fn identity(&mut self) {
        self.elements = [[T::zero(); N]; N];
        for i in 0..N {
            self.elements[i][i] = T::one();
        }
    }

    pub fn reset(&mut self) {
        self.params = TransformParams::identity();
        self.identity();
    }

    /// Replaces the elements with `self * other`.
    pub fn multiply_by(&mut self, other: &Self) {
        self.multiply_by_rows(&other.elements);
    }

    pub fn multiply_by_rows(&mut self, other: &[[T; N]; N]) {
        self.elements = multiply_rows(&self.elements, other);
    }

    /// Replaces the elements with `self * other`, reading `other` from a
    /// row-major slice of exactly `N * N` values. On a length mismatch the
    /// matrix is left untouched.
    pub fn multiply_by_slice(&mut self, values: &[T]) -> Result<(), DimensionError> {
        let other = Self::from_row_major_slice(values)?;
        self.multiply_by(&other);
        Ok(())
    }
}

impl<T: Float, const N: usize> Matrix<T, N> {
    /// Builds the matrix for `params`. Components with no axis in this
    /// dimension are reset to their identity value before caching, exactly
    /// as if only the mutators available for `N` had been called.
    pub fn with_params(params: TransformParams<T>) -> Self {
        let mut matrix = Self {
            elements: identity_rows(),
            params: Self::restrict_to_axes(params),
        };
        matrix.apply_transforms();
        matrix
    }

    /// Replaces the cached parameters and rebuilds, dropping components
    /// this dimension has no axis for. See [`Matrix::with_params`].
    pub fn set_params(&mut self, params: TransformParams<T>) {
        self.params = Self::restrict_to_axes(params);
        self.apply_transforms();
    }

    fn restrict_to_axes(params: TransformParams<T>) -> TransformParams<T> {
        let keep = |values: Vector3D<T>, applies: fn(usize) -> bool, neutral: T| {
            let mut values = values.to_array();
            for (axis, value) in values.iter_mut().enumerate() {
                if !applies(axis) {
                    *value = neutral;
                }
            }
            Vector3D::from(values)
        };
        TransformParams {
            scale: keep(params.scale, Self::scales_axis, T::one()),
            rotation: keep(params.rotation, Self::rotates_about, T::zero()),
            translation: keep(params.translation, Self::translates_axis, T::zero()),
        }
    }

    /// Rebuilds the elements from the cached parameters as
    /// `Sx * Sy * Sz * Rx * Ry * Rz * Tx * Ty * Tz`.
    ///
    /// Steps whose parameter is the identity value are skipped, as are
    /// components with no matching axis in this dimension.
    pub fn apply_transforms(&mut self) {
        self.identity();
        let TransformParams {
            scale,
            rotation,
            translation,
        } = self.params;

        for (axis, factor) in scale.to_array().into_iter().enumerate() {
            if Self::scales_axis(axis) && factor != T::one() {
                let mut scaling: [[T; N]; N] = identity_rows();
                scaling[axis][axis] = factor;
                self.multiply_by_rows(&scaling);
            }
        }

        if Self::rotates_about(0) && !rotation.dx.is_zero() {
            self.multiply_by_rows(&Self::rotation_x(rotation.dx));
        }
        if Self::rotates_about(1) && !rotation.dy.is_zero() {
            self.multiply_by_rows(&Self::rotation_y(rotation.dy));
        }
        if Self::rotates_about(2) && !rotation.dz.is_zero() {
            self.multiply_by_rows(&Self::rotation_z(rotation.dz));
        }

        for (axis, offset) in translation.to_array().into_iter().enumerate() {
            if Self::translates_axis(axis) && !offset.is_zero() {
                let mut translating: [[T; N]; N] = identity_rows();
                translating[N - 1][axis] = offset;
                self.multiply_by_rows(&translating);
            }
        }
    }

    pub fn scale_x_by(&mut self, factor: T) {
        self.params.scale.dx = self.params.scale.dx + factor;
        self.apply_transforms();
    }

    fn rotation_x(radians: T) -> [[T; N]; N] {
        let (sin, cos) = radians.sin_cos();
        let mut rows: [[T; N]; N] = identity_rows();
        rows[1][1] = cos;
        rows[1][2] = sin;
        rows[2][1] = -sin;
        rows[2][2] = cos;
        rows
    }

    fn rotation_y(radians: T) -> [[T; N]; N] {
        let (sin, cos) = radians.sin_cos();
        let mut rows: [[T; N]; N] = identity_rows();
        rows[0][0] = cos;
        rows[0][2] = -sin;
        rows[2][0] = sin;
        rows[2][2] = cos;
        rows
    }

    fn rotation_z(radians: T) -> [[T; N]; N] {
        let (sin, cos) = radians.sin_cos();
        let mut rows: [[T; N]; N] = identity_rows();
        rows[0][0] = cos;
        rows[0][1] = -sin;
        rows[1][0] = sin;
        rows[1][1] = cos;
        rows
    }
}

impl<T: Float, const N: usize> Matrix<T, N>
where
    Dim<N>: MinDim2,
{
    pub fn scale_y_by(&mut self, factor: T) {
        self.params.scale.dy = self.params.scale.dy + factor;
        self.apply_transforms();
    }

    pub fn rotate_around_z_by(&mut self, radians: T) {
        self.params.rotation.dz = self.params.rotation.dz + radians;
        self.apply_transforms();
    }
}

impl<T: Float, const N: usize> Matrix<T, N>
where
    Dim<N>: MinDim3,
{
    pub fn scale_z_by(&mut self, factor: T) {
        self.params.scale.dz = self.params.scale.dz + factor;
        self.apply_transforms();
    }

    pub fn scale_uniform_by(&mut self, factor: T) {
        self.params.scale += Vector3D::splat(factor);
        self.apply_transforms();
    }

    pub fn rotate_around_x_by(&mut self, radians: T) {
        self.params.rotation.dx = self.params.rotation.dx + radians;
        self.apply_transforms();
    }

    pub fn rotate_around_y_by(&mut self, radians: T) {
        self.params.rotation.dy = self.params.rotation.dy + radians;
        self.apply_transforms();
    }

    pub fn translate_x_by(&mut self, offset: T) {
        self.params.translation.dx = self.params.translation.dx + offset;
        self.apply_transforms();
    }

    pub fn translate_y_by(&mut self, offset: T) {
        self.params.translation.dy = self.params.translation.dy + offset;
        self.apply_transforms();
    }
}

impl<T: Float, const N: usize> Matrix<T, N>
where
    Dim<N>: MinDim4,
{
    pub fn translate_z_by(&mut self, offset: T) {
        self.params.translation.dz = self.params.translation.dz + offset;
        self.apply_transforms();
    }

    pub fn translate_uniform_by(&mut self, offset: T) {
        self.params.translation += Vector3D::splat(offset);
        self.apply_transforms();
    }
}

impl<T: Num + Copy, const N: usize> Matrix<T, N>
where
    Dim<N>: MinDim3,
{
    /// Multiplies the first three columns of the first three rows in place by
    /// `dx`, `dy` and `dz` respectively. The matrix changes; no vector is
    /// produced.
    pub fn scale_columns_by(&mut self, factors: &Vector3D<T>) {
        let factors = factors.to_array();
        for row in self.elements.iter_mut().take(3) {
            for (element, factor) in row.iter_mut().zip(factors) {
                *element = *element * factor;
            }
        }
    }

    /// Applies the upper-left 3x3 block to `vector`, treating it as a column.
    pub fn transform_vector(&self, vector: &Vector3D<T>) -> Vector3D<T> {
        let apply = |row: &[T; N]| row[0] * vector.dx + row[1] * vector.dy + row[2] * vector.dz;
        Vector3D::new(
            apply(&self.elements[0]),
            apply(&self.elements[1]),
            apply(&self.elements[2]),
        )
    }
}

impl<T: bytemuck::Pod, const N: usize> Matrix<T, N> {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }
}

impl<T: Num + Copy, const N: usize> Default for Matrix<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for Matrix<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Num + Copy, const N: usize> TryFrom<&[T]> for Matrix<T, N> {
    type Error = DimensionError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        Self::from_row_major_slice(values)
    }
}

impl<T, const N: usize> Index<usize> for Matrix<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Matrix<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        &self.elements[row][column]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        &mut self.elements[row][column]
    }
}

impl<T: Num + Copy, const N: usize> Mul for Matrix<T, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_rows(multiply_rows(&self.elements, &rhs.elements))
    }
}

impl<T: Num + Copy, const N: usize> MulAssign for Matrix<T, N> {
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply_by(&rhs);
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.elements {
            write!(f, "| ")?;
            for element in row {
                write!(f, "{element} ")?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

impl<T: AbsDiffEq, const N: usize> AbsDiffEq for Matrix<T, N>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: RelativeEq, const N: usize> RelativeEq for Matrix<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
