use super::vector::Vector3D;
use num_traits::{Num, One, Zero};

/// The accumulated scale, rotation and translation a matrix is rebuilt from.
///
/// Rotation components are angles in radians about the X, Y and Z axes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformParams<T> {
    pub scale: Vector3D<T>,
    pub rotation: Vector3D<T>,
    pub translation: Vector3D<T>,
}

impl<T: Zero + One + Copy> Default for TransformParams<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Zero + One + Copy> TransformParams<T> {
    pub fn identity() -> Self {
        Self {
            scale: Vector3D::new(T::one(), T::one(), T::one()),
            rotation: Vector3D::new(T::zero(), T::zero(), T::zero()),
            translation: Vector3D::new(T::zero(), T::zero(), T::zero()),
        }
    }

    pub fn from_translation(translation: Vector3D<T>) -> Self {
        Self {
            translation,
            ..Self::identity()
        }
    }

    pub fn from_rotation(rotation: Vector3D<T>) -> Self {
        Self {
            rotation,
            ..Self::identity()
        }
    }

    pub fn from_scale(scale: Vector3D<T>) -> Self {
        Self {
            scale,
            ..Self::identity()
        }
    }

    pub fn new(scale: Vector3D<T>, rotation: Vector3D<T>, translation: Vector3D<T>) -> Self {
        Self {
            scale,
            rotation,
            translation,
        }
    }
}

impl<T: Num + Copy> TransformParams<T> {
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        let params = TransformParams::<f32>::default();
        assert!(params.is_identity());
        assert_eq!(params.scale, Vector3D::new(1.0, 1.0, 1.0));
        assert_eq!(params.rotation, Vector3D::zero());
        assert_eq!(params.translation, Vector3D::zero());
    }

    #[test]
    fn single_component_constructors_keep_other_defaults() {
        let params = TransformParams::from_translation(Vector3D::new(1.0_f64, 2.0, 3.0));
        assert_eq!(params.scale, Vector3D::new(1.0, 1.0, 1.0));
        assert_eq!(params.rotation, Vector3D::zero());
        assert!(!params.is_identity());

        let params = TransformParams::from_scale(Vector3D::new(2, 2, 2));
        assert_eq!(params.translation, Vector3D::zero());
    }
}
