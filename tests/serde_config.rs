#![cfg(feature = "serde")]

use walkthrough::math::{TransformParams, Vector3D};
use walkthrough::render::{CameraConfig, Frustum};

#[test]
fn vector_serializes_by_component_name() {
    let v = Vector3D::new(1.0_f32, -2.5, 0.0);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"{"dx":1.0,"dy":-2.5,"dz":0.0}"#);
    assert_eq!(serde_json::from_str::<Vector3D<f32>>(&json).unwrap(), v);
}

#[test]
fn transform_params_survive_a_json_round_trip() {
    let params = TransformParams::new(
        Vector3D::new(2.0_f64, 1.0, 0.5),
        Vector3D::new(0.25, -0.75, 1.5),
        Vector3D::new(-10.0, 3.0, 8.0),
    );
    let json = serde_json::to_string(&params).unwrap();
    let restored: TransformParams<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, params);
}

#[test]
fn camera_config_loads_from_json() {
    let config = CameraConfig {
        eye: Vector3D::new(-10.0, -13.0, 0.0),
        view_dir: Vector3D::new(0.0, 0.0, -1.0),
        up: Vector3D::new(0.0, 1.0, 0.0),
        frustum: Frustum {
            left: -2.0,
            right: 2.0,
            top: 1.5,
            bottom: -1.5,
            near: 0.5,
            far: 100.0,
        },
        move_step: 0.25,
        turn_step: 0.125,
    };
    let json = serde_json::to_string_pretty(&config).unwrap();
    let restored: CameraConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, config);
}

#[test]
fn missing_fields_are_rejected() {
    let err = serde_json::from_str::<Vector3D<f32>>(r#"{"dx":1.0,"dy":2.0}"#).unwrap_err();
    assert!(err.to_string().contains("dz"));
}
