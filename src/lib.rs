// src/lib.rs
//! Fluid Tank Viewer
//!
//! A static 3D scene viewer built on wgpu and winit: a ball and a block of
//! particles inside a line-outlined tank, drawn from a fixed camera.

pub mod app;
pub mod gfx;
pub mod prelude;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::ViewerApp;

/// Creates a default viewer application instance
pub fn default() -> anyhow::Result<ViewerApp> {
    ViewerApp::new()
}
