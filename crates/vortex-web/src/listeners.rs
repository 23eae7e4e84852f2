//! DOM listener registrations that undo themselves on drop

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget, MutationObserver, MutationObserverInit};

/// An event listener attached for as long as this value lives
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Attach `callback` to `event` on `target`
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Attach a passive listener (touch events)
    pub fn passive(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Mutation observer watching one attribute; disconnects on drop
pub struct AttributeObserver {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
}

impl AttributeObserver {
    /// Call `on_change` whenever `attribute` changes on `target`
    pub fn new(
        target: &web_sys::Node,
        attribute: &str,
        mut on_change: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let watched = attribute.to_string();
        let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
            move |records: js_sys::Array, _observer: MutationObserver| {
                let touched = records.iter().any(|record| {
                    record
                        .dyn_into::<web_sys::MutationRecord>()
                        .ok()
                        .and_then(|record| record.attribute_name())
                        .is_some_and(|name| name == watched)
                });
                if touched {
                    on_change();
                }
            },
        );

        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
        let options = MutationObserverInit::new();
        options.set_attributes(true);
        let filter = js_sys::Array::of1(&JsValue::from_str(attribute));
        options.set_attribute_filter(&filter);
        observer.observe_with_options(target, &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for AttributeObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
