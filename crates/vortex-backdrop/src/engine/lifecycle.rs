//! Suspension and teardown

use super::{Backdrop, FrameRenderer, FrameRequest, LoopState};

impl<R: FrameRenderer> Backdrop<R> {
    /// Stop requesting frames, keeping GPU resources.
    ///
    /// Returns whether the loop was running.
    pub fn pause(&mut self) -> bool {
        if self.state == LoopState::Running {
            self.state = LoopState::Paused;
            true
        } else {
            false
        }
    }

    /// Restart the loop after a pause.
    ///
    /// No-op while already running, while reduced motion is requested, or
    /// once inert or destroyed.
    pub fn resume(&mut self) -> FrameRequest {
        if self.state != LoopState::Paused || self.reduced_motion {
            return FrameRequest::Idle;
        }
        self.state = LoopState::Running;
        FrameRequest::Next
    }

    /// React to the tab becoming hidden or visible
    pub fn set_hidden(&mut self, hidden: bool) -> FrameRequest {
        self.hidden = hidden;
        if hidden {
            self.pause();
            FrameRequest::Idle
        } else {
            self.resume()
        }
    }

    /// React to a change of the reduced-motion preference
    pub fn set_reduced_motion(&mut self, reduced: bool) -> FrameRequest {
        self.reduced_motion = reduced;
        if reduced {
            self.pause();
            FrameRequest::Idle
        } else {
            self.resume()
        }
    }

    /// Release the renderer. Safe to call repeatedly; returns whether
    /// anything was released.
    pub fn destroy(&mut self) -> bool {
        if self.state == LoopState::Destroyed {
            return false;
        }
        self.state = LoopState::Destroyed;
        if let Some(mut renderer) = self.renderer.take() {
            renderer.release();
        }
        true
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}
