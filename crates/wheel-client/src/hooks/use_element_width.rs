//! Tracks the rendered width of an element across window resizes.

use gloo::events::EventListener;
use yew::prelude::*;

/// Returns the client width of `node` in pixels, or `0.0` before it mounts.
///
/// The width is re-measured on every window `resize` event.
#[hook]
pub fn use_element_width(node: NodeRef) -> f64 {
    let width = use_state_eq(|| 0.0_f64);

    {
        let width = width.clone();
        use_effect_with(node, move |node| {
            let measure = {
                let node = node.clone();
                move || {
                    if let Some(element) = node.cast::<web_sys::Element>() {
                        width.set(f64::from(element.client_width()));
                    }
                }
            };
            measure();

            let listener = EventListener::new(&gloo::utils::window(), "resize", move |_| {
                measure();
            });
            move || drop(listener)
        });
    }

    *width
}
