use super::init::*;
use super::render::render_quad_pass;
use super::uniforms::Uniforms;
use crate::engine::{FrameInputs, FrameRenderer};
use crate::error::BackdropError;
use crate::math::SurfaceSize;

/// GPU resources, dropped as a unit on release
struct GpuState {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    quad_buffer: wgpu::Buffer,
    pipeline: wgpu::RenderPipeline,
}

/// Background renderer drawing the neuro shape field into a canvas
pub struct NeuroRenderer {
    canvas: web_sys::HtmlCanvasElement,
    gpu: Option<GpuState>,
    iterations: u32,
}

impl NeuroRenderer {
    /// Create the renderer for `canvas`, sized to `size`.
    ///
    /// Fails with [`BackdropError::ContextUnavailable`] when no adapter or
    /// device can be obtained, and with a shader error when the program
    /// does not compile or link.
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        size: SurfaceSize,
        iterations: u32,
    ) -> Result<Self, BackdropError> {
        apply_canvas_size(&canvas, size);

        let (instance, surface) = Self::create_surface(canvas.clone())?;
        let (device, queue, adapter) = create_device(&instance, &surface).await?;
        let (surface_config, surface_format) = configure_surface(&surface, &adapter, &device, size)?;
        let (uniform_buffer, bind_group_layout, bind_group) = create_uniform_resources(&device, size);
        let quad_buffer = create_quad_buffer(&device);
        let pipeline = create_pipeline(&device, &bind_group_layout, surface_format, iterations).await?;

        Ok(Self {
            canvas,
            gpu: Some(GpuState {
                device,
                queue,
                surface,
                surface_config,
                bind_group,
                uniform_buffer,
                quad_buffer,
                pipeline,
            }),
            iterations,
        })
    }

    /// Create the wgpu instance and surface from canvas
    #[cfg(target_arch = "wasm32")]
    fn create_surface(
        canvas: web_sys::HtmlCanvasElement,
    ) -> Result<(wgpu::Instance, wgpu::Surface<'static>), BackdropError> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| BackdropError::ContextUnavailable(format!("failed to create surface: {}", e)))?;

        Ok((instance, surface))
    }

    /// Create the wgpu instance and surface from canvas (non-WASM stub)
    #[cfg(not(target_arch = "wasm32"))]
    fn create_surface(
        _canvas: web_sys::HtmlCanvasElement,
    ) -> Result<(wgpu::Instance, wgpu::Surface<'static>), BackdropError> {
        Err(BackdropError::ContextUnavailable(
            "NeuroRenderer only supports WASM targets".to_string(),
        ))
    }

    /// Shader loop count baked into the pipeline
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Get surface texture, reconfiguring when the surface went stale
    fn acquire_frame(gpu: &GpuState) -> Result<wgpu::SurfaceTexture, BackdropError> {
        match gpu.surface.get_current_texture() {
            Ok(texture) => Ok(texture),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.surface.configure(&gpu.device, &gpu.surface_config);
                Err(BackdropError::FrameSkipped("surface reconfigured".to_string()))
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                Err(BackdropError::FrameSkipped("out of GPU memory".to_string()))
            }
            Err(wgpu::SurfaceError::Timeout) => {
                Err(BackdropError::FrameSkipped("GPU timeout".to_string()))
            }
        }
    }
}

impl FrameRenderer for NeuroRenderer {
    fn resize(&mut self, size: SurfaceSize) {
        apply_canvas_size(&self.canvas, size);

        if size.is_empty() {
            return;
        }
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.surface_config.width = size.width;
            gpu.surface_config.height = size.height;
            gpu.surface.configure(&gpu.device, &gpu.surface_config);
        }
    }

    fn draw(&mut self, inputs: &FrameInputs) -> Result<(), BackdropError> {
        let Some(gpu) = self.gpu.as_ref() else {
            return Ok(());
        };

        let uniforms = Uniforms::from(inputs);
        gpu.queue
            .write_buffer(&gpu.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        let output = Self::acquire_frame(gpu)?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Vortex Encoder"),
            });

        render_quad_pass(
            &mut encoder,
            &gpu.pipeline,
            &gpu.bind_group,
            &gpu.quad_buffer,
            &view,
        );

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn release(&mut self) {
        if let Some(gpu) = self.gpu.take() {
            gpu.uniform_buffer.destroy();
            gpu.quad_buffer.destroy();
        }
    }
}

/// Set the canvas backing store to the surface size
fn apply_canvas_size(canvas: &web_sys::HtmlCanvasElement, size: SurfaceSize) {
    canvas.set_width(size.width);
    canvas.set_height(size.height);
}
