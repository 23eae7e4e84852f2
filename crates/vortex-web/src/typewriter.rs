//! Dossier typewriter reveal

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use vortex_backdrop::{TypedLine, Typewriter, TypewriterState};

use crate::timer::ScheduledTick;
use crate::util::{self, warn};

/// Reveals lines one by one into a container element
#[wasm_bindgen]
pub struct DossierTypewriter {
    typewriter: Rc<RefCell<Typewriter>>,
    container: Element,
    tick: ScheduledTick,
}

#[wasm_bindgen]
impl DossierTypewriter {
    #[wasm_bindgen(constructor)]
    pub fn new(container: Element) -> Result<DossierTypewriter, JsValue> {
        let window = util::window()?;
        let typewriter = Rc::new(RefCell::new(Typewriter::new()));

        let step_typewriter = Rc::clone(&typewriter);
        let step_container = container.clone();
        let tick = ScheduledTick::new(window, move |tick| {
            advance(&step_typewriter, &step_container, tick);
        });

        Ok(Self {
            typewriter,
            container,
            tick,
        })
    }

    /// Clear the container and start revealing `lines`.
    ///
    /// Returns false (and changes nothing) while a reveal is running.
    #[wasm_bindgen]
    pub fn start(&mut self, lines: Vec<String>) -> bool {
        if !self.typewriter.borrow_mut().start(lines) {
            return false;
        }
        self.tick.cancel();
        self.container.set_inner_html("");
        advance(&self.typewriter, &self.container, &self.tick);
        true
    }

    /// Stop revealing; lines already shown stay
    #[wasm_bindgen]
    pub fn cancel(&mut self) {
        self.typewriter.borrow_mut().cancel();
        self.tick.cancel();
    }

    /// "idle", "running", "done" or "cancelled"
    #[wasm_bindgen]
    pub fn state(&self) -> String {
        match self.typewriter.borrow().state() {
            TypewriterState::Idle => "idle",
            TypewriterState::Running => "running",
            TypewriterState::Done => "done",
            TypewriterState::Cancelled => "cancelled",
        }
        .to_string()
    }
}

/// Render the next line and arm the tick for the one after
fn advance(typewriter: &RefCell<Typewriter>, container: &Element, tick: &ScheduledTick) {
    let Some(step) = typewriter.borrow_mut().step() else {
        return;
    };

    if let Err(e) = append_line(container, &step.line) {
        warn(&format!("[vortex] Dossier line not rendered: {:?}", e));
    }
    if let Err(e) = tick.schedule(step.delay_ms) {
        warn(&format!("[vortex] Dossier reveal stalled: {:?}", e));
    }
}

fn append_line(container: &Element, line: &TypedLine) -> Result<(), JsValue> {
    let document = container
        .owner_document()
        .ok_or_else(|| JsValue::from_str("container is detached"))?;
    let div = document.create_element("div")?;

    match line {
        TypedLine::ParagraphBreak => {
            div.set_class_name("dossier-line paragraph-break");
            div.set_inner_html("&nbsp;");
        }
        TypedLine::Text(text) => {
            div.set_class_name("dossier-line");
            div.set_text_content(Some(text.as_str()));
        }
    }

    container.append_child(&div)?;
    Ok(())
}
