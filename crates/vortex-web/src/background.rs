//! Neural vortex background wrapper
//!
//! WASM-bindgen wrapper that owns the wgpu renderer, the page listeners
//! and the `requestAnimationFrame` loop driving [`Backdrop`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, MediaQueryListEvent, MouseEvent, TouchEvent};

use vortex_backdrop::background::NeuroRenderer;
use vortex_backdrop::{Backdrop, FrameRequest, LoopState, PageState, Theme, VortexConfig};

use crate::dom::DomPage;
use crate::listeners::{AttributeObserver, EventListener};
use crate::util::{log, warn};

type FrameCallback = Closure<dyn FnMut(f64)>;

/// State shared between the wrapper, the frame callback and listeners
struct Shared {
    backdrop: Backdrop<NeuroRenderer>,
    page: DomPage,
    canvas: Option<HtmlCanvasElement>,
    /// Pending `requestAnimationFrame` id
    frame_id: Option<i32>,
}

impl Shared {
    fn tick(&mut self, now_ms: f64) -> FrameRequest {
        match self.backdrop.tick(now_ms, &self.page) {
            Ok(request) => request,
            Err(e) => {
                warn(&format!("[vortex] {}", e));
                if self.backdrop.is_running() {
                    FrameRequest::Next
                } else {
                    FrameRequest::Idle
                }
            }
        }
    }

    fn cancel_frame(&mut self) {
        if let Some(id) = self.frame_id.take() {
            let _ = self.page.window().cancel_animation_frame(id);
        }
    }

    /// Mirror the theme attribute onto the canvas opacity
    fn apply_theme_opacity(&self) {
        let Some(canvas) = self.canvas.as_ref() else {
            return;
        };
        let theme = Theme::from_attribute(self.page.theme_attribute().as_deref());
        let opacity = theme.canvas_opacity(self.backdrop.config());
        let _ = canvas.style().set_property("opacity", &opacity.to_string());
    }
}

/// Frame loop plumbing: the one callback handed to every refresh request
#[derive(Clone)]
struct FrameLoop {
    shared: Rc<RefCell<Shared>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    fn new(shared: Rc<RefCell<Shared>>) -> Self {
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let weak_shared: Weak<RefCell<Shared>> = Rc::downgrade(&shared);
        let weak_callback = Rc::downgrade(&callback);
        let on_frame = Closure::<dyn FnMut(f64)>::new(move |now: f64| {
            let (Some(shared), Some(callback)) = (weak_shared.upgrade(), weak_callback.upgrade()) else {
                return;
            };
            let request = {
                let mut state = shared.borrow_mut();
                state.frame_id = None;
                state.tick(now)
            };
            if request == FrameRequest::Next {
                FrameLoop { shared, callback }.request();
            }
        });
        *callback.borrow_mut() = Some(on_frame);

        Self { shared, callback }
    }

    /// Ask for the next display refresh unless one is already pending
    fn request(&self) {
        let mut state = self.shared.borrow_mut();
        if state.frame_id.is_some() {
            return;
        }
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match state
            .page
            .window()
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => state.frame_id = Some(id),
            Err(e) => warn(&format!("[vortex] requestAnimationFrame failed: {:?}", e)),
        }
    }

    /// Act on the engine's answer to a state change
    fn follow(&self, request: FrameRequest) {
        match request {
            FrameRequest::Next => self.request(),
            FrameRequest::Idle => {
                let mut state = self.shared.borrow_mut();
                if !state.backdrop.is_running() {
                    state.cancel_frame();
                }
            }
        }
    }

    fn release(&self) {
        self.shared.borrow_mut().cancel_frame();
        self.callback.borrow_mut().take();
    }
}

/// WASM-bindgen wrapper for the ambient background
#[wasm_bindgen]
pub struct NeuralVortex {
    frame_loop: FrameLoop,
    listeners: Vec<EventListener>,
    theme_observer: Option<AttributeObserver>,
}

#[wasm_bindgen]
impl NeuralVortex {
    /// Create the background on the current page.
    ///
    /// `config_json` may be omitted or hold any subset of the config
    /// fields. Resolves with an inert instance (and a console warning)
    /// when WebGPU/WebGL or the shader is unavailable; rejects only for
    /// malformed config or a page without a body.
    #[wasm_bindgen]
    pub async fn create(config_json: Option<String>) -> Result<NeuralVortex, JsValue> {
        let config = VortexConfig::from_json(config_json.as_deref().unwrap_or(""))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let page = DomPage::current(&config.theme_attribute)?;

        log("[vortex] Initializing background renderer...");

        let viewport = page.viewport();
        let size = viewport.surface_size(config.max_pixel_ratio);
        let iterations = config.iterations_for_width(viewport.width);
        let reduced_motion = page
            .reduced_motion_query()
            .map(|query| query.matches())
            .unwrap_or(false);

        let (canvas, renderer) = match page.acquire_canvas(&config.canvas_id) {
            Ok(canvas) => {
                let renderer = NeuroRenderer::new(canvas.clone(), size, iterations).await;
                (Some(canvas), renderer)
            }
            Err(e) => (
                None,
                Err(vortex_backdrop::BackdropError::ContextUnavailable(format!("{:?}", e))),
            ),
        };

        let built_iterations = match &renderer {
            Ok(renderer) => renderer.iterations(),
            Err(e) => {
                warn(&format!("[vortex] Background disabled: {}", e));
                0
            }
        };

        let backdrop = Backdrop::initialize(config, renderer, &page, reduced_motion);
        let inert = backdrop.state() == LoopState::Inert;

        let shared = Rc::new(RefCell::new(Shared {
            backdrop,
            page,
            canvas,
            frame_id: None,
        }));
        let mut vortex = NeuralVortex {
            frame_loop: FrameLoop::new(shared),
            listeners: Vec::new(),
            theme_observer: None,
        };

        if inert {
            return Ok(vortex);
        }

        vortex.bind_events()?;
        vortex.frame_loop.shared.borrow().apply_theme_opacity();
        if vortex.frame_loop.shared.borrow().page.is_hidden() {
            vortex.frame_loop.shared.borrow_mut().backdrop.set_hidden(true);
        }
        if vortex.frame_loop.shared.borrow().backdrop.is_running() {
            vortex.frame_loop.request();
        }

        log(&format!(
            "[vortex] Background renderer initialized ({} iterations)",
            built_iterations
        ));
        Ok(vortex)
    }

    /// Recompute the surface size from the current viewport
    #[wasm_bindgen]
    pub fn resize(&mut self) {
        let mut state = self.frame_loop.shared.borrow_mut();
        let viewport = state.page.viewport();
        state.backdrop.resize(viewport);
    }

    /// Draw one frame at `now_ms` outside the refresh loop
    #[wasm_bindgen]
    pub fn tick(&mut self, now_ms: f64) {
        self.frame_loop.shared.borrow_mut().tick(now_ms);
    }

    /// Stop the frame loop, keeping GPU resources
    #[wasm_bindgen]
    pub fn pause(&mut self) {
        let mut state = self.frame_loop.shared.borrow_mut();
        state.backdrop.pause();
        state.cancel_frame();
    }

    /// Restart the frame loop (no-op while running or under reduced motion)
    #[wasm_bindgen]
    pub fn resume(&mut self) {
        let request = self.frame_loop.shared.borrow_mut().backdrop.resume();
        self.frame_loop.follow(request);
    }

    /// Release the GPU program and every listener. Safe to call repeatedly.
    #[wasm_bindgen]
    pub fn destroy(&mut self) {
        let released = self.frame_loop.shared.borrow_mut().backdrop.destroy();
        self.frame_loop.release();
        self.listeners.clear();
        self.theme_observer.take();
        if released {
            log("[vortex] Background renderer destroyed");
        }
    }

    /// Whether frames are currently being requested
    #[wasm_bindgen]
    pub fn is_running(&self) -> bool {
        self.frame_loop.shared.borrow().backdrop.is_running()
    }

    /// Whether initialization failed and the background never draws
    #[wasm_bindgen]
    pub fn is_inert(&self) -> bool {
        self.frame_loop.shared.borrow().backdrop.state() == LoopState::Inert
    }

    /// Loop state: "running", "paused", "inert" or "destroyed"
    #[wasm_bindgen]
    pub fn state(&self) -> String {
        match self.frame_loop.shared.borrow().backdrop.state() {
            LoopState::Running => "running",
            LoopState::Paused => "paused",
            LoopState::Inert => "inert",
            LoopState::Destroyed => "destroyed",
        }
        .to_string()
    }

    /// Number of frames drawn so far
    #[wasm_bindgen]
    pub fn frames_drawn(&self) -> f64 {
        self.frame_loop.shared.borrow().backdrop.frames_drawn() as f64
    }

    /// Inputs of the most recent frame as JSON
    #[wasm_bindgen]
    pub fn get_frame_json(&self) -> String {
        let state = self.frame_loop.shared.borrow();
        let inputs = state.backdrop.frame_inputs();
        serde_json::to_string(&serde_json::json!({
            "time": inputs.time_ms,
            "ratio": inputs.ratio,
            "pointer": { "x": inputs.pointer[0], "y": inputs.pointer[1] },
            "scrollProgress": inputs.scroll_progress,
            "themeBlend": inputs.theme_blend,
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }
}

impl NeuralVortex {
    /// Register resize, pointer, touch, visibility, reduced-motion and
    /// theme observers
    fn bind_events(&mut self) -> Result<(), JsValue> {
        let (window, document, body, attribute, motion_query) = {
            let state = self.frame_loop.shared.borrow();
            (
                state.page.window().clone(),
                state.page.document().clone(),
                state.page.body().clone(),
                state.page.theme_attribute_name().to_string(),
                state.page.reduced_motion_query(),
            )
        };

        let shared = Rc::clone(&self.frame_loop.shared);
        self.listeners.push(EventListener::new(&window, "resize", move |_: Event| {
            let mut state = shared.borrow_mut();
            let viewport = state.page.viewport();
            state.backdrop.resize(viewport);
        })?);

        let shared = Rc::clone(&self.frame_loop.shared);
        self.listeners.push(EventListener::new(&window, "pointermove", move |event: Event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                shared
                    .borrow_mut()
                    .backdrop
                    .set_pointer_target(f64::from(event.client_x()), f64::from(event.client_y()));
            }
        })?);

        let shared = Rc::clone(&self.frame_loop.shared);
        self.listeners.push(EventListener::passive(&window, "touchmove", move |event: Event| {
            let touch = event
                .dyn_ref::<TouchEvent>()
                .and_then(|event| event.touches().get(0));
            if let Some(touch) = touch {
                shared
                    .borrow_mut()
                    .backdrop
                    .set_pointer_target(f64::from(touch.client_x()), f64::from(touch.client_y()));
            }
        })?);

        let frame_loop = self.frame_loop.clone();
        self.listeners.push(EventListener::new(&document, "visibilitychange", move |_: Event| {
            let request = {
                let mut state = frame_loop.shared.borrow_mut();
                let hidden = state.page.is_hidden();
                state.backdrop.set_hidden(hidden)
            };
            frame_loop.follow(request);
        })?);

        if let Some(query) = motion_query {
            let frame_loop = self.frame_loop.clone();
            self.listeners.push(EventListener::new(&query, "change", move |event: Event| {
                let Some(event) = event.dyn_ref::<MediaQueryListEvent>() else {
                    return;
                };
                let request = frame_loop
                    .shared
                    .borrow_mut()
                    .backdrop
                    .set_reduced_motion(event.matches());
                frame_loop.follow(request);
            })?);
        }

        let shared = Rc::clone(&self.frame_loop.shared);
        self.theme_observer = Some(AttributeObserver::new(&body, &attribute, move || {
            shared.borrow().apply_theme_opacity();
        })?);

        Ok(())
    }
}

impl Drop for NeuralVortex {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;
    use web_sys::MouseEventInit;

    use super::*;

    fn pending_frame(vortex: &NeuralVortex) -> bool {
        vortex.frame_loop.shared.borrow().frame_id.is_some()
    }

    fn pointer_target_x(vortex: &NeuralVortex) -> f64 {
        vortex.frame_loop.shared.borrow().backdrop.pointer().target_x
    }

    fn move_pointer(x: i32, y: i32) {
        let init = MouseEventInit::new();
        init.set_client_x(x);
        init.set_client_y(y);
        let event = MouseEvent::new_with_mouse_event_init_dict("pointermove", &init).unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();
    }

    async fn create(canvas_id: &str) -> NeuralVortex {
        NeuralVortex::create(Some(format!(r#"{{"canvasId":"{}"}}"#, canvas_id)))
            .await
            .unwrap()
    }

    #[wasm_bindgen_test]
    async fn test_pause_and_hidden_cancel_pending_frame() {
        let mut vortex = create("vortex-unit-frames").await;
        if !vortex.is_running() {
            // No graphics adapter in this browser, or the tab started hidden
            return;
        }
        assert!(pending_frame(&vortex));

        vortex.pause();
        assert!(!pending_frame(&vortex));

        vortex.resume();
        assert!(pending_frame(&vortex));

        let request = vortex.frame_loop.shared.borrow_mut().backdrop.set_hidden(true);
        vortex.frame_loop.follow(request);
        assert!(!pending_frame(&vortex));

        let request = vortex.frame_loop.shared.borrow_mut().backdrop.set_hidden(false);
        vortex.frame_loop.follow(request);
        assert!(pending_frame(&vortex));

        vortex.destroy();
        assert!(!pending_frame(&vortex));
    }

    #[wasm_bindgen_test]
    async fn test_destroy_unbinds_page_listeners() {
        let mut vortex = create("vortex-unit-listeners").await;
        if vortex.is_inert() {
            assert!(vortex.listeners.is_empty());
            return;
        }

        move_pointer(300, 120);
        assert_eq!(pointer_target_x(&vortex), 300.0);

        vortex.destroy();
        assert!(vortex.listeners.is_empty());
        assert!(vortex.theme_observer.is_none());
        assert!(vortex.frame_loop.callback.borrow().is_none());

        move_pointer(50, 40);
        assert_eq!(pointer_target_x(&vortex), 300.0);
    }
}
