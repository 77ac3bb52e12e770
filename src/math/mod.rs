//! Math module
//!
//! Generic vectors and square matrices with accumulated affine transforms,
//! plus `glam` conversions for the single-precision types.

mod dimension;
mod error;
mod glam_interop;
mod matrix;
mod transform;
mod vector;

pub use dimension::{Dim, MinDim2, MinDim3, MinDim4};
pub use error::DimensionError;
pub use matrix::{BoundsCheck, GlMatrix, Matrix, Matrix2D, Matrix3D, Matrix4D};
pub use transform::TransformParams;
pub use vector::{Vector3D, Vector3Df, Vector3Di};
