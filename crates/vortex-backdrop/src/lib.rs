//! Neural Vortex ambient background
//!
//! This crate provides the core of the page's animated background:
//! - Frame input math (viewport sizing, pointer smoothing, scroll progress)
//! - Render loop lifecycle (running, paused, inert, destroyed)
//! - Light/tactical theme model and its persisted preference
//! - Typewriter reveal state machine for the dossier panel
//!
//! ## Architecture
//!
//! - [`math`]: Viewport, pointer and scroll primitives
//! - [`theme`]: Theme values and the preference store seam
//! - [`typewriter`]: Line-by-line text reveal
//! - `engine`: [`Backdrop`], the lifecycle driven once per display refresh
//! - `background`: wgpu renderer (only with the `wasm` feature)
//!
//! ## Example
//!
//! ```rust
//! use vortex_backdrop::{Backdrop, FrameRenderer, FrameInputs, PageState, ScrollMetrics,
//!     SurfaceSize, Viewport, VortexConfig, BackdropError, FrameRequest};
//!
//! struct Headless;
//!
//! impl FrameRenderer for Headless {
//!     fn resize(&mut self, _size: SurfaceSize) {}
//!     fn draw(&mut self, _inputs: &FrameInputs) -> Result<(), BackdropError> { Ok(()) }
//!     fn release(&mut self) {}
//! }
//!
//! struct Page;
//!
//! impl PageState for Page {
//!     fn viewport(&self) -> Viewport { Viewport::new(1024.0, 768.0, 1.0) }
//!     fn scroll(&self) -> ScrollMetrics { ScrollMetrics::new(0.0, 768.0, 768.0) }
//!     fn theme_attribute(&self) -> Option<String> { None }
//! }
//!
//! let mut backdrop = Backdrop::initialize(VortexConfig::default(), Ok(Headless), &Page, false);
//! assert_eq!(backdrop.tick(16.0, &Page).unwrap(), FrameRequest::Next);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: Lifecycle and frame math are testable without a browser
//! 2. **Injected Time**: Every tick receives its timestamp from the host
//! 3. **Host-Driven Loop**: The engine never schedules; each tick answers whether to go on

pub mod math;
pub mod theme;
pub mod typewriter;

mod config;
mod engine;
mod error;

// Background renderer (only available with "wasm" feature)
#[cfg(feature = "wasm")]
pub mod background;

pub use config::VortexConfig;
pub use engine::{Backdrop, FrameInputs, FrameRenderer, FrameRequest, LoopState, PageState};
pub use error::BackdropError;
pub use math::{ScrollMetrics, SmoothedPointer, SurfaceSize, Viewport};
pub use theme::{MemoryStore, PreferenceStore, Theme, ThemePreference};
pub use typewriter::{TypeStep, TypedLine, Typewriter, TypewriterState};
