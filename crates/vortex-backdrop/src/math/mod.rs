//! Frame input primitives
//!
//! - [`Viewport`]: CSS viewport and device pixel ratio
//! - [`SurfaceSize`]: Drawing surface size in physical pixels
//! - [`SmoothedPointer`]: Exponentially smoothed pointer position
//! - [`ScrollMetrics`]: Page scroll position and its normalized progress

mod pointer;
mod scroll;
mod viewport;

pub use pointer::SmoothedPointer;
pub use scroll::ScrollMetrics;
pub use viewport::{SurfaceSize, Viewport};
