//! Keyboard shortcuts hook for the wheel page.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// Configuration for keyboard shortcuts.
#[derive(Clone, PartialEq)]
pub struct KeyboardShortcutsConfig {
    /// Callback when Space is pressed outside a text field.
    pub on_spin: Option<Callback<()>>,
    /// Callback when Escape is pressed, including inside text fields.
    pub on_escape: Option<Callback<()>>,
    /// Whether shortcuts are enabled.
    pub enabled: bool,
}

impl Default for KeyboardShortcutsConfig {
    fn default() -> Self {
        Self {
            on_spin: None,
            on_escape: None,
            enabled: true,
        }
    }
}

/// Check if the event target is an input element (input, textarea, etc.)
fn is_input_element(event: &KeyboardEvent) -> bool {
    if let Some(target) = event.target() {
        if let Some(element) = target.dyn_ref::<web_sys::HtmlElement>() {
            let tag_name = element.tag_name().to_lowercase();
            return matches!(tag_name.as_str(), "input" | "textarea" | "select" | "button");
        }
    }
    false
}

/// Hook for handling keyboard shortcuts.
///
/// Attaches a global keydown listener to the document. Space is ignored while
/// a form control has focus so typing and button activation keep working.
///
/// # Example
///
/// ```ignore
/// use_keyboard_shortcuts(KeyboardShortcutsConfig {
///     on_spin: Some(on_spin_callback),
///     ..Default::default()
/// });
/// ```
#[hook]
pub fn use_keyboard_shortcuts(config: KeyboardShortcutsConfig) {
    let listener_ref = use_mut_ref(|| None::<EventListener>);

    use_effect_with(config, move |config| {
        // Clean up previous listener
        *listener_ref.borrow_mut() = None;

        if !config.enabled {
            return;
        }

        let config = config.clone();
        let document = gloo::utils::document();

        let listener = EventListener::new(&document, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };

            match event.key().as_str() {
                "Escape" => {
                    if let Some(ref cb) = config.on_escape {
                        cb.emit(());
                    }
                }
                " " if !is_input_element(event) && !event.repeat() => {
                    if let Some(ref cb) = config.on_spin {
                        event.prevent_default();
                        cb.emit(());
                    }
                }
                _ => {}
            }
        });

        *listener_ref.borrow_mut() = Some(listener);
    });
}
