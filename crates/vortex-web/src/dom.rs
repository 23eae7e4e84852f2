//! Page state and drawing surface lookup

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

use vortex_backdrop::{PageState, ScrollMetrics, Viewport};

use crate::util;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Live view of the page the background reads every frame
pub struct DomPage {
    window: Window,
    document: Document,
    body: HtmlElement,
    theme_attribute: String,
}

impl DomPage {
    /// Bind to the current page. Needs a parsed `<body>`.
    pub fn current(theme_attribute: &str) -> Result<Self, JsValue> {
        let window = util::window()?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let body = util::body(&document)?;
        Ok(Self {
            window,
            document,
            body,
            theme_attribute: theme_attribute.to_string(),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn body(&self) -> &HtmlElement {
        &self.body
    }

    pub fn theme_attribute_name(&self) -> &str {
        &self.theme_attribute
    }

    /// Whether the tab is currently hidden
    pub fn is_hidden(&self) -> bool {
        self.document.hidden()
    }

    /// Existing canvas with `id`, or a new one inserted as the body's first child
    pub fn acquire_canvas(&self, id: &str) -> Result<HtmlCanvasElement, JsValue> {
        if let Some(element) = self.document.get_element_by_id(id) {
            return element
                .dyn_into::<HtmlCanvasElement>()
                .map_err(|_| JsValue::from_str(&format!("#{} is not a canvas", id)));
        }

        let canvas: HtmlCanvasElement = self.document.create_element("canvas")?.dyn_into()?;
        canvas.set_id(id);
        self.body.prepend_with_node_1(&canvas)?;
        Ok(canvas)
    }

    /// The reduced-motion media query, when the host supports `matchMedia`
    pub fn reduced_motion_query(&self) -> Option<web_sys::MediaQueryList> {
        self.window.match_media(REDUCED_MOTION_QUERY).ok().flatten()
    }

    fn inner_size(&self) -> (f64, f64) {
        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        (width, height)
    }
}

impl PageState for DomPage {
    fn viewport(&self) -> Viewport {
        let (width, height) = self.inner_size();
        Viewport::new(width, height, self.window.device_pixel_ratio())
    }

    fn scroll(&self) -> ScrollMetrics {
        let (_, height) = self.inner_size();
        let scroll_height = self
            .document
            .document_element()
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or(height);
        ScrollMetrics::new(self.window.scroll_y().unwrap_or(0.0), scroll_height, height)
    }

    fn theme_attribute(&self) -> Option<String> {
        self.body.get_attribute(&self.theme_attribute)
    }
}
