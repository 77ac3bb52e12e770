use crate::math::Matrix4D;
use bytemuck::{Pod, Zeroable};

/// Model, view and projection matrices laid out for a single uniform upload.
///
/// Each matrix keeps the row-major order of [`Matrix4D`], so a shader that
/// reads the block column-major sees the column-vector form of each transform.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniforms {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl CameraUniforms {
    pub fn new(model: &Matrix4D<f32>, view: &Matrix4D<f32>, projection: &Matrix4D<f32>) -> Self {
        Self {
            model: *model.rows(),
            view: *view.rows(),
            projection: *projection.rows(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
