use approx::{AbsDiffEq, RelativeEq};
use num_traits::{Float, Num};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A three-component vector over any numeric scalar.
///
/// Comparison is lexicographic over `(dx, dy, dz)`. That ordering has no
/// geometric meaning and only exists so vectors can be compared and sorted
/// in tests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3D<T> {
    pub dx: T,
    pub dy: T,
    pub dz: T,
}

pub type Vector3Di = Vector3D<i32>;
pub type Vector3Df = Vector3D<f32>;

impl<T> Vector3D<T> {
    pub const fn new(dx: T, dy: T, dz: T) -> Self {
        Self { dx, dy, dz }
    }
}

impl<T: Copy> Vector3D<T> {
    pub fn splat(value: T) -> Self {
        Self::new(value, value, value)
    }

    pub fn to_array(self) -> [T; 3] {
        [self.dx, self.dy, self.dz]
    }
}

impl<T: Num + Copy> Vector3D<T> {
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Zero iff the vectors are orthogonal or either one is zero.
    pub fn dot(&self, other: &Self) -> T {
        self.dx * other.dx + self.dy * other.dy + self.dz * other.dz
    }

    /// Right-handed cross product, expanded from the 3x3 determinant.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.dy * other.dz - self.dz * other.dy,
            self.dz * other.dx - self.dx * other.dz,
            self.dx * other.dy - self.dy * other.dx,
        )
    }
}

impl<T: Float> Vector3D<T> {
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Scales this vector to unit length in place.
    ///
    /// A vector of exactly zero length is left untouched instead of being
    /// filled with NaN.
    pub fn normalize_self(&mut self) {
        let length = self.length();
        if length.is_zero() {
            return;
        }
        *self /= length;
    }

    /// Returns the unit vector pointing the same way, or the vector itself
    /// when its length is zero.
    pub fn normalize(&self) -> Self {
        let mut normalized = *self;
        normalized.normalize_self();
        normalized
    }
}

impl<T: Num + Copy> AddAssign for Vector3D<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.dx = self.dx + rhs.dx;
        self.dy = self.dy + rhs.dy;
        self.dz = self.dz + rhs.dz;
    }
}

impl<T: Num + Copy> SubAssign for Vector3D<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.dx = self.dx - rhs.dx;
        self.dy = self.dy - rhs.dy;
        self.dz = self.dz - rhs.dz;
    }
}

impl<T: Num + Copy> MulAssign<T> for Vector3D<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.dx = self.dx * scalar;
        self.dy = self.dy * scalar;
        self.dz = self.dz * scalar;
    }
}

impl<T: Num + Copy> DivAssign<T> for Vector3D<T> {
    fn div_assign(&mut self, scalar: T) {
        self.dx = self.dx / scalar;
        self.dy = self.dy / scalar;
        self.dz = self.dz / scalar;
    }
}

impl<T: Num + Copy> Add for Vector3D<T> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Num + Copy> Sub for Vector3D<T> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Num + Copy> Mul<T> for Vector3D<T> {
    type Output = Self;

    fn mul(mut self, scalar: T) -> Self {
        self *= scalar;
        self
    }
}

impl<T: Num + Copy> Div<T> for Vector3D<T> {
    type Output = Self;

    fn div(mut self, scalar: T) -> Self {
        self /= scalar;
        self
    }
}

impl<T: Neg<Output = T>> Neg for Vector3D<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.dx, -self.dy, -self.dz)
    }
}

impl<T: fmt::Display> fmt::Display for Vector3D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(dx: {}, dy: {}, dz: {})", self.dx, self.dy, self.dz)
    }
}

impl<T> From<[T; 3]> for Vector3D<T> {
    fn from([dx, dy, dz]: [T; 3]) -> Self {
        Self::new(dx, dy, dz)
    }
}

impl<T> From<Vector3D<T>> for [T; 3] {
    fn from(v: Vector3D<T>) -> Self {
        [v.dx, v.dy, v.dz]
    }
}

impl<T> From<(T, T, T)> for Vector3D<T> {
    fn from((dx, dy, dz): (T, T, T)) -> Self {
        Self::new(dx, dy, dz)
    }
}

impl<T> From<Vector3D<T>> for (T, T, T) {
    fn from(v: Vector3D<T>) -> Self {
        (v.dx, v.dy, v.dz)
    }
}

impl<T: AbsDiffEq> AbsDiffEq for Vector3D<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.dx.abs_diff_eq(&other.dx, epsilon)
            && self.dy.abs_diff_eq(&other.dy, epsilon)
            && self.dz.abs_diff_eq(&other.dz, epsilon)
    }
}

impl<T: RelativeEq> RelativeEq for Vector3D<T>
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
        self.dx.relative_eq(&other.dx, epsilon, max_relative)
            && self.dy.relative_eq(&other.dy, epsilon, max_relative)
            && self.dz.relative_eq(&other.dz, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn length_of_three_four_five_triangle() {
        assert_eq!(Vector3D::new(3.0_f32, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vector3D::new(3, 4, 0).length_squared(), 25);
    }

    #[test]
    fn normalized_vectors_have_unit_length() {
        let samples = [
            Vector3D::new(3.0_f64, 4.0, 0.0),
            Vector3D::new(-1.0, 2.0, -7.5),
            Vector3D::new(1e-3, 0.0, 0.0),
            Vector3D::new(250.0, -90.0, 12.0),
        ];
        for v in samples {
            let unit = v.normalize();
            assert_abs_diff_eq!(unit.length(), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(unit * v.length(), v, epsilon = 1e-9);
        }
    }

    #[test]
    fn zero_vector_normalizes_to_itself() {
        let mut zero = Vector3Df::zero();
        zero.normalize_self();
        assert_eq!(zero, Vector3D::new(0.0, 0.0, 0.0));
        assert_eq!(Vector3Df::zero().normalize(), Vector3Df::zero());
        assert!(!zero.dx.is_nan());
    }

    #[test]
    fn cross_of_x_and_y_is_z() {
        let x = Vector3D::new(1.0_f32, 0.0, 0.0);
        let y = Vector3D::new(0.0_f32, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector3D::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(&x), Vector3D::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn cross_is_anticommutative_and_perpendicular() {
        let pairs = [
            (Vector3D::new(1.0_f64, 2.0, 3.0), Vector3D::new(-4.0, 0.5, 2.0)),
            (Vector3D::new(0.0, -3.0, 9.0), Vector3D::new(7.0, 1.0, -1.0)),
            (Vector3D::new(2.0, 2.0, 2.0), Vector3D::new(2.0, 2.0, 2.0)),
        ];
        for (a, b) in pairs {
            let ab = a.cross(&b);
            assert_eq!(ab, -b.cross(&a));
            assert_abs_diff_eq!(a.dot(&ab), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(b.dot(&ab), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn integer_vectors_support_non_float_operations() {
        let a = Vector3Di::new(1, 2, 3);
        let b = Vector3Di::new(4, 5, 6);
        assert_eq!(a.dot(&b), 32);
        assert_eq!(a.cross(&b), Vector3Di::new(-3, 6, -3));
        assert_eq!(a + b, Vector3Di::new(5, 7, 9));
        assert_eq!(b - a, Vector3Di::new(3, 3, 3));
        assert_eq!(a * 2, Vector3Di::new(2, 4, 6));
    }

    #[test]
    fn compound_assignment_operators() {
        let mut v = Vector3D::new(1.0_f32, 2.0, 3.0);
        v += Vector3D::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vector3D::new(2.0, 3.0, 4.0));
        v -= Vector3D::new(2.0, 0.0, 1.0);
        assert_eq!(v, Vector3D::new(0.0, 3.0, 3.0));
        v *= 2.0;
        assert_eq!(v, Vector3D::new(0.0, 6.0, 6.0));
        v /= 3.0;
        assert_eq!(v, Vector3D::new(0.0, 2.0, 2.0));
        assert_eq!(v / 2.0, Vector3D::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut vectors = vec![
            Vector3Di::new(1, 0, 0),
            Vector3Di::new(0, 5, 5),
            Vector3Di::new(0, 5, 1),
        ];
        vectors.sort();
        assert_eq!(
            vectors,
            [
                Vector3Di::new(0, 5, 1),
                Vector3Di::new(0, 5, 5),
                Vector3Di::new(1, 0, 0),
            ]
        );
    }

    #[test]
    fn display_names_each_component() {
        let v = Vector3D::new(1.5_f32, -2.0, 0.25);
        assert_eq!(v.to_string(), "(dx: 1.5, dy: -2, dz: 0.25)");
    }

    #[test]
    fn array_and_tuple_conversions() {
        let v: Vector3Df = [1.0, 2.0, 3.0].into();
        assert_eq!(v, Vector3D::new(1.0, 2.0, 3.0));
        let arr: [f32; 3] = v.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);

        let v = Vector3Di::from((7, 8, 9));
        let tup: (i32, i32, i32) = v.into();
        assert_eq!(tup, (7, 8, 9));
    }
}
