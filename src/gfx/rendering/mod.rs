//! Rendering pipeline and GPU draw submission

pub mod line_pass;
pub mod pipeline_manager;
pub mod render_engine;
pub mod sphere_pass;
pub mod vertex;

pub use pipeline_manager::{PipelineConfig, PipelineError, PipelineManager};
pub use render_engine::{RenderEngine, RenderError};
