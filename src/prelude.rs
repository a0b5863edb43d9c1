//! # Viewer Prelude
//!
//! Convenient imports for typical viewer setups:
//!
//! ```no_run
//! use fluid_tank::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut app = fluid_tank::default()?;
//!     let scene = app.scene_mut();
//!     scene.add_particle(tank::ball());
//!     scene.add_lines(tank::outline());
//!     app.run()
//! }
//! ```

// Re-export core application types
pub use crate::app::ViewerApp;
pub use crate::default;

// Re-export graphics and scene types
pub use crate::gfx::camera::rig::CameraRig;
pub use crate::gfx::geometry::{generate_sphere, GeometryData};
pub use crate::gfx::scene::{tank, LineSegment, Particle, PointLight, Scene};

pub use cgmath::Vector3;
