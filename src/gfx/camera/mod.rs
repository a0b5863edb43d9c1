pub mod camera_utils;
pub mod rig;

// Re-export main types
pub use camera_utils::{Camera, CameraUniform};
pub use rig::CameraRig;
