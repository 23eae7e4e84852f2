//! Per-frame inputs

use super::{Backdrop, FrameRenderer, FrameRequest, LoopState, PageState};
use crate::error::BackdropError;
use crate::theme::Theme;

/// Values uploaded to the shader for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInputs {
    /// Milliseconds since the first drawn frame
    pub time_ms: f32,
    /// Surface width over height
    pub ratio: f32,
    /// Smoothed pointer in surface coordinates (y up)
    pub pointer: [f32; 2],
    /// Scroll progress in [0, 1]
    pub scroll_progress: f32,
    /// 0.0 tactical, 1.0 light
    pub theme_blend: f32,
}

impl<R: FrameRenderer> Backdrop<R> {
    /// Advance and draw one frame.
    ///
    /// Does nothing unless the loop is running. Under reduced motion the
    /// loop pauses once a frame has actually been drawn. A transient draw
    /// error is returned without stopping the loop; check
    /// [`Backdrop::is_running`] to decide whether to keep scheduling.
    pub fn tick(&mut self, now_ms: f64, page: &impl PageState) -> Result<FrameRequest, BackdropError> {
        if self.state != LoopState::Running {
            return Ok(FrameRequest::Idle);
        }

        let start = *self.start_ms.get_or_insert(now_ms);

        self.pointer.step(self.config.pointer_smoothing);
        self.theme = Theme::from_attribute(page.theme_attribute().as_deref());

        self.inputs.time_ms = (now_ms - start).max(0.0) as f32;
        self.inputs.pointer = self.pointer.normalized(&page.viewport());
        self.inputs.scroll_progress = page.scroll().progress();
        self.inputs.theme_blend = self.theme.blend();

        if let Some(renderer) = self.renderer.as_mut() {
            renderer.draw(&self.inputs)?;
        }
        self.frames_drawn += 1;

        if self.reduced_motion {
            self.state = LoopState::Paused;
            return Ok(FrameRequest::Idle);
        }
        Ok(FrameRequest::Next)
    }
}
