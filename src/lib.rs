//! # walkthrough
//!
//! Affine transform math and camera matrices for a first-person 3D walkthrough.
//!
//! ## Features
//! - `Vector3D<T>` with length, normalization, dot and cross products
//! - `Matrix<T, N>` with scale/rotate/translate composition in a fixed order
//! - Axis-specific operations checked against the matrix size at compile time
//! - Walkthrough camera producing view and projection matrices and a uniform block
//!
//! ## Example
//! ```rust
//! use walkthrough::math::{GlMatrix, Vector3D};
//! use walkthrough::render::{Key, WalkthroughController};
//!
//! let mut model = GlMatrix::new();
//! model.scale_uniform_by(1.0);
//! model.translate_x_by(5.0);
//! assert_eq!(model[12], 5.0);
//!
//! let mut controller = WalkthroughController::default();
//! controller.resize(1280, 720);
//! controller.on_key(Key::Forward);
//! controller.on_key(Key::TurnLeft);
//!
//! let uniforms = controller.uniforms(&model);
//! assert_eq!(uniforms.as_bytes().len(), 192);
//! assert_eq!(Vector3D::new(3.0_f32, 4.0, 0.0).length(), 5.0);
//! ```

pub mod math;
pub mod render;

pub use math::{
    BoundsCheck, DimensionError, GlMatrix, Matrix, Matrix2D, Matrix3D, Matrix4D, TransformParams,
    Vector3D, Vector3Df, Vector3Di,
};
pub use render::{Camera, CameraConfig, CameraUniforms, Frustum, Key, WalkthroughController};
