//! # Graphics Module
//!
//! This module contains all graphics-related functionality for the fluid tank
//! viewer, including the fixed camera, rendering pipelines, scene data, and
//! GPU resource handling.
//!
//! The graphics system is organized into several key components:
//!
//! - **Camera** ([`camera`]) - Fixed-pose camera rig with aspect tracking
//! - **Geometry** ([`geometry`]) - Procedural sphere mesh generation
//! - **Rendering** ([`rendering`]) - Instanced sphere pass and line outline pass
//! - **Scene** ([`scene`]) - Particles, line segments, lights, and the tank layout
//! - **Resources** ([`resources`]) - Global uniforms and the depth buffer

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use rendering::render_engine::RenderEngine;
pub use scene::Scene;
