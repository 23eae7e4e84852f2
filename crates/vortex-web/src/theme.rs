//! Theme toggle backed by `localStorage`

use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, Storage};

use vortex_backdrop::{BackdropError, PreferenceStore, Theme, ThemePreference, VortexConfig};

use crate::timer::ScheduledTick;
use crate::util::{self, log, warn};

const TRANSITION_CLASS: &str = "theme-transitioning";
const TRANSITION_MS: u32 = 300;
const PULSE_CLASS: &str = "system-pulse-active";
const PULSE_MS: u32 = 600;

/// `localStorage`, tolerating hosts where it is disabled
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open(window: &web_sys::Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BackdropError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| BackdropError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| BackdropError::Storage(format!("{:?}", e)))
    }
}

/// Light / tactical switch for the page
#[wasm_bindgen]
pub struct ThemeToggle {
    preference: ThemePreference<LocalStore>,
    body: HtmlElement,
    attribute: String,
    transition: ScheduledTick,
    pulse: ScheduledTick,
}

#[wasm_bindgen]
impl ThemeToggle {
    /// Create a toggle using the attribute and storage key from `config_json`
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<ThemeToggle, JsValue> {
        let config = VortexConfig::from_json(config_json.as_deref().unwrap_or(""))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let window = util::window()?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let body = util::body(&document)?;

        let transition_body = body.clone();
        let transition = ScheduledTick::new(window.clone(), move |_| {
            let _ = transition_body.class_list().remove_1(TRANSITION_CLASS);
        });
        let pulse_body = body.clone();
        let pulse = ScheduledTick::new(window.clone(), move |_| {
            let _ = pulse_body.class_list().remove_1(PULSE_CLASS);
        });

        Ok(Self {
            preference: ThemePreference::new(LocalStore::open(&window), config.theme_storage_key),
            body,
            attribute: config.theme_attribute,
            transition,
            pulse,
        })
    }

    /// Apply the saved theme to the body. Returns its id.
    #[wasm_bindgen]
    pub fn init(&self) -> Result<String, JsValue> {
        let theme = self.preference.load();
        self.body.set_attribute(&self.attribute, theme.id())?;
        Ok(theme.id().to_string())
    }

    /// Current theme id as read from the body
    #[wasm_bindgen]
    pub fn current(&self) -> String {
        self.current_theme().id().to_string()
    }

    /// Flip the theme, persist it, and return the new id
    #[wasm_bindgen]
    pub fn toggle(&mut self) -> Result<String, JsValue> {
        let current = self.current_theme();
        let next = match self.preference.toggle(current) {
            Ok(next) => next,
            Err(e) => {
                warn(&format!("[vortex] Theme not persisted: {}", e));
                current.toggled()
            }
        };

        self.body.set_attribute(&self.attribute, next.id())?;
        self.restart_pulse()?;
        self.body.class_list().add_1(TRANSITION_CLASS)?;
        self.transition.schedule(TRANSITION_MS)?;

        log(&format!("[vortex] COUPLING: {}", next.coupling_label()));
        Ok(next.id().to_string())
    }
}

impl ThemeToggle {
    /// Re-run the body scanline pulse from the start
    fn restart_pulse(&self) -> Result<(), JsValue> {
        let classes = self.body.class_list();
        classes.remove_1(PULSE_CLASS)?;
        // Reading layout flushes styles so the animation restarts
        let _ = self.body.offset_width();
        classes.add_1(PULSE_CLASS)?;
        self.pulse.schedule(PULSE_MS)
    }

    fn current_theme(&self) -> Theme {
        Theme::from_attribute(self.body.get_attribute(&self.attribute).as_deref())
    }
}
