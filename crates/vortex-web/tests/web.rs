//! Browser tests for the web bindings
//!
//! Run with `wasm-pack test --headless --chrome crates/vortex-web`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlCanvasElement};

use vortex_web::{DossierTypewriter, NeuralVortex, ThemeToggle};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Resolve once pending microtasks (mutation observers included) have run
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

fn fresh_container() -> Element {
    let container = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&container).unwrap();
    container
}

// =============================================================================
// Theme toggle
// =============================================================================

#[wasm_bindgen_test]
fn test_theme_toggle_persists_and_flips_attribute() {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item("vortex-test-theme").unwrap();

    let mut toggle = ThemeToggle::new(Some(r#"{"themeStorageKey":"vortex-test-theme"}"#.into())).unwrap();
    assert_eq!(toggle.init().unwrap(), "tactical");

    let body = document().body().unwrap();
    assert_eq!(body.get_attribute("data-theme").as_deref(), Some("tactical"));

    assert_eq!(toggle.toggle().unwrap(), "light");
    assert_eq!(body.get_attribute("data-theme").as_deref(), Some("light"));
    assert_eq!(storage.get_item("vortex-test-theme").unwrap().as_deref(), Some("light"));
    assert!(body.class_list().contains("theme-transitioning"));
    assert!(body.class_list().contains("system-pulse-active"));

    assert_eq!(toggle.toggle().unwrap(), "tactical");
    assert_eq!(toggle.current(), "tactical");
}

#[wasm_bindgen_test]
fn test_theme_toggle_rejects_bad_config() {
    assert!(ThemeToggle::new(Some("{broken".into())).is_err());
}

// =============================================================================
// Typewriter
// =============================================================================

#[wasm_bindgen_test]
fn test_typewriter_reveals_first_line_immediately() {
    let container = fresh_container();
    container.set_inner_html("<p>stale</p>");

    let mut typewriter = DossierTypewriter::new(container.clone()).unwrap();
    assert!(typewriter.start(vec!["AGENT PROFILE".into(), "".into(), "Status: active".into()]));

    assert_eq!(typewriter.state(), "running");
    assert_eq!(container.child_element_count(), 1);
    assert_eq!(container.text_content().as_deref(), Some("AGENT PROFILE"));

    assert!(!typewriter.start(vec!["ignored".into()]));

    typewriter.cancel();
    assert_eq!(typewriter.state(), "cancelled");
    assert_eq!(container.child_element_count(), 1);
}

// =============================================================================
// Background
// =============================================================================

#[wasm_bindgen_test]
async fn test_background_creates_canvas_and_tears_down_twice() {
    let mut vortex = NeuralVortex::create(Some(r#"{"canvasId":"vortex-test-canvas"}"#.into()))
        .await
        .unwrap();

    let canvas = document()
        .get_element_by_id("vortex-test-canvas")
        .expect("canvas inserted")
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    let first = document().body().unwrap().first_element_child().unwrap();
    assert_eq!(first.id(), canvas.id());

    if vortex.is_inert() {
        assert_eq!(vortex.state(), "inert");
        assert_eq!(vortex.frames_drawn(), 0.0);
    } else {
        vortex.pause();
        vortex.pause();
        assert!(!vortex.is_running());
    }

    vortex.destroy();
    vortex.destroy();
    assert_eq!(vortex.state(), "destroyed");
    assert!(!vortex.is_running());
}

#[wasm_bindgen_test]
async fn test_background_opacity_follows_theme_attribute() {
    let body = document().body().unwrap();
    body.set_attribute("data-theme", "tactical").unwrap();

    let mut vortex = NeuralVortex::create(Some(r#"{"canvasId":"vortex-test-opacity"}"#.into()))
        .await
        .unwrap();
    if vortex.is_inert() {
        return;
    }
    let canvas = document()
        .get_element_by_id("vortex-test-opacity")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    let opacity = || canvas.style().get_property_value("opacity").unwrap();
    assert_eq!(opacity(), "0.55");

    body.set_attribute("data-theme", "light").unwrap();
    settle().await;
    assert_eq!(opacity(), "0.45");

    body.set_attribute("data-theme", "tactical").unwrap();
    settle().await;
    assert_eq!(opacity(), "0.55");

    // The observer is gone once destroyed
    vortex.destroy();
    body.set_attribute("data-theme", "light").unwrap();
    settle().await;
    assert_eq!(opacity(), "0.55");
    body.set_attribute("data-theme", "tactical").unwrap();
}

#[wasm_bindgen_test]
async fn test_background_rejects_bad_config() {
    assert!(NeuralVortex::create(Some("[1, 2".into())).await.is_err());
}
