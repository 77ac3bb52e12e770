//! Camera module
//!
//! Walkthrough camera state, view and projection matrix construction, and the
//! uniform block handed to the renderer. Window, shader and mesh handling stay
//! with the embedding application.

pub mod camera;
pub mod uniform;

pub use camera::{Camera, CameraConfig, Frustum, Key, ViewBasis, WalkthroughController};
pub use uniform::CameraUniforms;
