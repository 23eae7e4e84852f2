//! Browser bindings for the Neural Vortex page
//!
//! This crate runs on the page's main thread and wires the pure core in
//! `vortex-backdrop` to the DOM.
//!
//! ## Module Structure
//!
//! - `background` - wgpu background renderer wrapper and frame loop
//! - `theme` - Light / tactical toggle persisted in `localStorage`
//! - `typewriter` - Dossier line-by-line reveal
//! - `dom` - Page state reads and canvas lookup
//! - `listeners` - Self-removing event listeners and attribute observers
//! - `timer` - Re-armable `setTimeout` tick
//!
//! ## Usage
//!
//! ```js
//! import init, { NeuralVortex, ThemeToggle } from "./vortex_web.js";
//!
//! await init();
//! new ThemeToggle().init();
//! const vortex = await NeuralVortex.create();
//! ```

mod background;
mod dom;
mod listeners;
mod theme;
mod timer;
mod typewriter;
pub(crate) mod util;

use wasm_bindgen::prelude::*;

pub use background::NeuralVortex;
pub use theme::ThemeToggle;
pub use typewriter::DossierTypewriter;

/// Module start hook
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
