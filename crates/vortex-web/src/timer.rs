//! Single re-armable `setTimeout` tick

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

struct TickInner {
    window: Window,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
    pending: Cell<Option<i32>>,
}

impl Drop for TickInner {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            self.window.clear_timeout_with_handle(id);
        }
    }
}

/// A timeout that reuses one callback for every scheduling.
///
/// At most one firing is pending at a time; scheduling again replaces it.
#[derive(Clone)]
pub struct ScheduledTick {
    inner: Rc<TickInner>,
}

impl ScheduledTick {
    /// Create a tick that runs `on_fire` each time it elapses
    pub fn new(window: Window, mut on_fire: impl FnMut(&ScheduledTick) + 'static) -> Self {
        let inner = Rc::new(TickInner {
            window,
            callback: RefCell::new(None),
            pending: Cell::new(None),
        });

        let weak: Weak<TickInner> = Rc::downgrade(&inner);
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.pending.set(None);
                on_fire(&ScheduledTick { inner });
            }
        });
        *inner.callback.borrow_mut() = Some(callback);

        Self { inner }
    }

    /// Fire after `delay_ms`, replacing any pending firing
    pub fn schedule(&self, delay_ms: u32) -> Result<(), JsValue> {
        self.cancel();
        let callback = self.inner.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Ok(());
        };
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let id = self
            .inner
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay,
            )?;
        self.inner.pending.set(Some(id));
        Ok(())
    }

    /// Drop the pending firing, if any
    pub fn cancel(&self) {
        if let Some(id) = self.inner.pending.take() {
            self.inner.window.clear_timeout_with_handle(id);
        }
    }
}
