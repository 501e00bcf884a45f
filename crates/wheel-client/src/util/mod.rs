//! Small DOM helpers shared by components.

use web_sys::HtmlInputElement;
use yew::NodeRef;

/// Shows a blocking `window.alert` with `message`.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        tracing::warn!(?err, "alert failed");
    }
}

/// Moves keyboard focus to the input behind `node`, if it is mounted.
pub fn focus_input(node: &NodeRef) {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        let _ = input.focus();
    }
}
