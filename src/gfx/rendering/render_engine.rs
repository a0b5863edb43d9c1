//! WGPU-based rendering engine for the fluid tank viewer
//!
//! Provides high-level rendering functionality built on top of wgpu,
//! including pipeline management, depth testing, and the two static draw
//! passes (instanced spheres and the line outline).

use std::sync::Arc;
use thiserror::Error;
use wgpu::Device;

use crate::gfx::{
    resources::{
        global_bindings::{update_global_ubo, GlobalBindings, GlobalUBO},
        texture_resource::TextureResource,
    },
    scene::scene::Scene,
};

use super::line_pass::{LinePass, LINE_SHADER};
use super::pipeline_manager::{PipelineConfig, PipelineError, PipelineManager};
use super::sphere_pass::{SphereInstance, SpherePass, SPHERE_SHADER};
use super::vertex::{LineVertex, Vertex3D};

/// Error raised while initializing the render engine
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create rendering surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter found: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to request a device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// Core rendering engine managing GPU resources and draw calls
///
/// The RenderEngine handles all low-level graphics operations including:
/// - Surface and device management
/// - Pipeline creation and management
/// - Depth buffer handling
/// - Camera and light uniform updates
/// - The sphere and line draw passes
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    pub pipeline_manager: PipelineManager,
    global_ubo: GlobalUBO,
    global_bindings: GlobalBindings,

    sphere_pass: SpherePass,
    line_pass: LinePass,
}

impl RenderEngine {
    /// Creates a new render engine for the given window
    ///
    /// Initializes wgpu with default settings, creates the depth buffer,
    /// and sets up the sphere and line render pipelines.
    ///
    /// # Arguments
    /// * `window` - Window surface target for rendering
    /// * `width` - Initial surface width in pixels
    /// * `height` - Initial surface height in pixels
    /// * `vsync` - Whether presentation waits for the display refresh
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<RenderEngine, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let adapter_info = adapter.get_info();
        log::info!(
            "using adapter '{}' ({:?})",
            adapter_info.name,
            adapter_info.backend
        );

        let (device, queue) = {
            adapter
                .request_device(&wgpu::DeviceDescriptor {
                    label: Some("WGPU Device"),
                    required_features: wgpu::Features::default(),
                    required_limits: wgpu::Limits {
                        max_texture_dimension_2d: 4096,
                        ..wgpu::Limits::downlevel_defaults()
                    },
                    memory_hints: wgpu::MemoryHints::default(),
                    trace: wgpu::Trace::Off,
                })
                .await?
        };

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .unwrap_or(surface_capabilities.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: present_mode_for(vsync),
            alpha_mode: surface_capabilities.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // Create depth texture for main rendering
        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        // Initialize global uniform bindings for camera and lighting
        let global_ubo = GlobalUBO::new(&device);
        let mut global_bindings = GlobalBindings::new(&device);
        global_bindings.create_bind_group(&device, &global_ubo);

        let sphere_pass = SpherePass::new(&device);
        let line_pass = LinePass::new();

        // Wrap device and queue in Arc for pipeline manager
        let device_handle: Arc<Device> = device.into();
        let queue_handle: Arc<wgpu::Queue> = queue.into();
        let mut pipeline_manager = PipelineManager::new(device_handle.clone());

        // Load shaders
        pipeline_manager.load_shader("sphere", SPHERE_SHADER);
        pipeline_manager.load_shader("line", LINE_SHADER);

        // Register the instanced sphere pipeline
        pipeline_manager.register_pipeline(
            "Spheres",
            PipelineConfig::default()
                .with_label("SPHERES")
                .with_shader("sphere")
                .with_depth_stencil(depth_texture.texture.clone())
                .with_bind_group_layouts(vec![global_bindings.bind_group_layouts().clone()])
                .with_vertex_layouts(vec![Vertex3D::desc(), SphereInstance::desc()])
                .with_color_targets(vec![Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })]),
        );

        // Register the line outline pipeline - no culling for line primitives
        pipeline_manager.register_pipeline(
            "TankLines",
            PipelineConfig::default()
                .with_label("TANK_LINES")
                .with_shader("line")
                .with_depth_stencil(depth_texture.texture.clone())
                .with_bind_group_layouts(vec![global_bindings.bind_group_layouts().clone()])
                .with_vertex_layouts(vec![LineVertex::desc()])
                .with_primitive_topology(wgpu::PrimitiveTopology::LineList)
                .with_cull_mode(None)
                .with_color_targets(vec![Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })]),
        );

        pipeline_manager.create_all_pipelines()?;

        Ok(RenderEngine {
            device: device_handle,
            config,
            surface,
            queue: queue_handle,
            depth_texture,
            pipeline_manager,
            global_bindings,
            global_ubo,
            sphere_pass,
            line_pass,
        })
    }

    /// Uploads the static scene geometry to the GPU
    ///
    /// Called once after scene setup. The sphere instance buffer and the
    /// line vertex buffer never change afterwards; each frame only redraws
    /// them.
    pub fn prepare_scene(&mut self, scene: &Scene) {
        self.sphere_pass.upload(&self.device, &scene.particles);
        self.line_pass.upload(&self.device, &scene.lines);

        let stats = scene.statistics();
        log::info!(
            "scene prepared: {} spheres, {} line segments",
            stats.particle_count,
            stats.segment_count
        );
    }

    /// Updates camera and light uniform buffers
    ///
    /// Called each frame before `render_frame()`. With a fixed camera the
    /// underlying buffer write is skipped after the first call.
    pub fn update(&mut self, scene: &Scene) {
        update_global_ubo(
            &mut self.global_ubo,
            &self.queue,
            scene.camera.uniform,
            scene.point_light,
            scene.ambient,
        );
    }

    /// Renders one frame
    ///
    /// Clears the surface to black and the depth buffer to 1.0, then draws
    /// all spheres in one instanced call followed by the line outline.
    ///
    /// # Errors
    /// Propagates `wgpu::SurfaceError` from surface acquisition; the caller
    /// decides whether to reconfigure, skip the frame, or abort.
    pub fn render_frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_bind_group(0, self.global_bindings.bind_groups(), &[]);

            if let Some(pipeline) = self.pipeline_manager.get_pipeline("Spheres") {
                render_pass.set_pipeline(pipeline);
                self.sphere_pass.draw(&mut render_pass);
            }

            if let Some(pipeline) = self.pipeline_manager.get_pipeline("TankLines") {
                render_pass.set_pipeline(pipeline);
                self.line_pass.draw(&mut render_pass);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();

        Ok(())
    }

    /// Resizes the render engine surface and recreates the depth buffer
    ///
    /// Zero dimensions are ignored; the window sends those while minimized.
    ///
    /// # Arguments
    /// * `width` - New surface width in pixels
    /// * `height` - New surface height in pixels
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;

        // Reconfigure surface with new dimensions
        self.surface.configure(&self.device, &self.config);

        // Recreate depth texture to match new surface size
        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
    }

}

/// Maps the vsync flag to a present mode
///
/// Fifo is guaranteed to be supported on every surface, so vsync never
/// depends on the reported capabilities.
fn present_mode_for(vsync: bool) -> wgpu::PresentMode {
    if vsync {
        wgpu::PresentMode::Fifo
    } else {
        wgpu::PresentMode::AutoNoVsync
    }
}
