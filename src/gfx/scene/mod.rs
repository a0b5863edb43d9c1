//! # Scene Management Module
//!
//! The scene is the per-process collection of lights, camera, and drawable
//! primitives handed to the render engine each frame. Everything in it is
//! computed once at startup and never mutated afterwards; the render loop
//! only reads it.
//!
//! ## Key Components
//!
//! - [`Scene`] - container for the camera rig, lights, particles, and lines
//! - [`Particle`] - a drawn sphere with fixed position, radius, and color
//! - [`LineSegment`] - a colored segment; eight of them form the tank outline
//! - [`tank`] - the constants and constructors for the fluid tank scene

pub mod scene;
pub mod tank;

// Re-export main types
pub use scene::{LineSegment, Particle, PointLight, Scene, SceneStatistics};
