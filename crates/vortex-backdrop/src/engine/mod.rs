//! Background engine driving the render loop
//!
//! This module is split into focused submodules:
//! - `frame`: Per-frame input computation and drawing
//! - `lifecycle`: Pause, resume, visibility, reduced motion and teardown

mod frame;
mod lifecycle;

pub use frame::FrameInputs;

use crate::config::VortexConfig;
use crate::error::BackdropError;
use crate::math::{ScrollMetrics, SmoothedPointer, SurfaceSize, Viewport};
use crate::theme::Theme;

/// GPU side of the background
pub trait FrameRenderer {
    /// Resize the drawing surface and viewport transform
    fn resize(&mut self, size: SurfaceSize);

    /// Clear and draw one frame with the given inputs
    fn draw(&mut self, inputs: &FrameInputs) -> Result<(), BackdropError>;

    /// Release GPU resources; further draws must be no-ops
    fn release(&mut self);
}

/// Page state read at the start of every frame
pub trait PageState {
    /// Current viewport
    fn viewport(&self) -> Viewport;

    /// Current scroll position and extents
    fn scroll(&self) -> ScrollMetrics;

    /// Raw value of the theme attribute, if set
    fn theme_attribute(&self) -> Option<String>;
}

/// Render loop state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Frames are being requested
    Running,
    /// Resources kept, no frames requested
    Paused,
    /// Initialization failed; never draws
    Inert,
    /// Resources released; never draws again
    Destroyed,
}

/// What the host should do after a call into the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRequest {
    /// Request the next display refresh and call `tick` from it
    Next,
    /// Do not schedule anything
    Idle,
}

/// Ambient background lifecycle
///
/// Owns the renderer exclusively. The host calls [`Backdrop::tick`] from
/// each display refresh while it answers [`FrameRequest::Next`], and feeds
/// pointer, resize, visibility and reduced-motion events in between.
pub struct Backdrop<R: FrameRenderer> {
    pub(crate) config: VortexConfig,
    pub(crate) renderer: Option<R>,
    pub(crate) state: LoopState,
    pub(crate) pointer: SmoothedPointer,
    pub(crate) viewport: Viewport,
    pub(crate) surface: SurfaceSize,
    pub(crate) theme: Theme,
    pub(crate) inputs: FrameInputs,
    /// Timestamp of the first drawn frame
    pub(crate) start_ms: Option<f64>,
    pub(crate) reduced_motion: bool,
    pub(crate) hidden: bool,
    pub(crate) frames_drawn: u64,
    /// Shader loop count chosen at initialization
    pub(crate) iterations: u32,
}

impl<R: FrameRenderer> Backdrop<R> {
    /// Build the background from the outcome of renderer creation.
    ///
    /// A failed renderer yields an inert background; the caller is expected
    /// to have reported the error. On success the surface is sized from
    /// `page` and the loop starts in [`LoopState::Running`].
    pub fn initialize(
        config: VortexConfig,
        renderer: Result<R, BackdropError>,
        page: &impl PageState,
        reduced_motion: bool,
    ) -> Self {
        let config = config.validated();
        let viewport = page.viewport();
        let iterations = config.iterations_for_width(viewport.width);

        let renderer = match renderer {
            Ok(renderer) => renderer,
            Err(_) => {
                let mut inert = Self::inert(config);
                inert.iterations = iterations;
                return inert;
            }
        };

        let mut backdrop = Self::with_state(config, Some(renderer), LoopState::Running);
        backdrop.iterations = iterations;
        backdrop.reduced_motion = reduced_motion;
        backdrop.theme = Theme::from_attribute(page.theme_attribute().as_deref());
        backdrop.inputs.theme_blend = backdrop.theme.blend();
        backdrop.resize(viewport);
        backdrop
    }

    /// A background that never draws
    pub fn inert(config: VortexConfig) -> Self {
        Self::with_state(config, None, LoopState::Inert)
    }

    fn with_state(config: VortexConfig, renderer: Option<R>, state: LoopState) -> Self {
        let config = config.validated();
        let iterations = config.desktop_iterations;
        Self {
            config,
            renderer,
            state,
            pointer: SmoothedPointer::new(),
            viewport: Viewport::default(),
            surface: SurfaceSize::default(),
            theme: Theme::default(),
            inputs: FrameInputs::default(),
            start_ms: None,
            reduced_motion: false,
            hidden: false,
            frames_drawn: 0,
            iterations,
        }
    }

    /// Recompute the surface size from the viewport and push it to the renderer
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.surface = viewport.surface_size(self.config.max_pixel_ratio);
        self.inputs.ratio = self.surface.aspect_ratio();
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.resize(self.surface);
        }
    }

    /// Record the latest pointer or touch position (CSS px)
    pub fn set_pointer_target(&mut self, x: f64, y: f64) {
        self.pointer.set_target(x, y);
    }

    pub fn config(&self) -> &VortexConfig {
        &self.config
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Inputs uploaded with the most recent frame
    pub fn frame_inputs(&self) -> &FrameInputs {
        &self.inputs
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn pointer(&self) -> &SmoothedPointer {
        &self.pointer
    }

    pub fn surface_size(&self) -> SurfaceSize {
        self.surface
    }

    /// Theme observed by the most recent frame
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Shader loop count for this session
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }
}
