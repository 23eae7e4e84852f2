use crate::engine::FrameInputs;

/// Uniform data sent to the shader
/// NOTE: This struct must match WGSL alignment requirements!
/// Total struct size must be 32 bytes (padded to 16-byte boundary).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub time: f32,            // offset 0
    pub ratio: f32,           // offset 4
    pub pointer: [f32; 2],    // offset 8
    pub scroll_progress: f32, // offset 16
    pub theme_blend: f32,     // offset 20
    pub _pad: [f32; 2],       // offset 24 - padding to 32 bytes
}

impl Uniforms {
    /// Uniforms for a surface that has not drawn yet
    pub fn with_ratio(ratio: f32) -> Self {
        Self { ratio, ..Default::default() }
    }
}

impl From<&FrameInputs> for Uniforms {
    fn from(inputs: &FrameInputs) -> Self {
        Self {
            time: inputs.time_ms,
            ratio: inputs.ratio,
            pointer: inputs.pointer,
            scroll_progress: inputs.scroll_progress,
            theme_blend: inputs.theme_blend,
            _pad: [0.0, 0.0],
        }
    }
}
