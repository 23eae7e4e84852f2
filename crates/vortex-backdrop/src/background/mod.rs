//! Neural Vortex Renderer
//!
//! wgpu-based fullscreen background drawn behind the page content.
//!
//! ## Pipeline
//!
//! - Static four-vertex triangle strip covering the viewport
//! - One WGSL program: an iterated, rotating trigonometric field
//!   ("neuro shape") shaped by pointer distance and frame center
//! - Colour mixed between a tactical blue/cyan and a light indigo palette,
//!   drifting slowly with scroll progress
//! - Source-alpha blended (colour and alpha) over a transparent clear,
//!   so the page shows through
//!
//! The loop count of the field is baked into the shader source when the
//! renderer is created (fewer iterations on narrow viewports).

mod init;
mod render;
mod renderer;
mod shaders;
mod uniforms;

pub use renderer::NeuroRenderer;
pub use shaders::neuro_shader_source;
pub use uniforms::Uniforms;
