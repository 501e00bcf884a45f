//! Panic page displayed when a WASM panic occurs.

use crate::routes::Route;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

/// localStorage key for the last panic report. Only diagnostics live here.
const PANIC_INFO_KEY: &str = "wheel_picker_panic_info";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn get_panic_info() -> Option<String> {
    local_storage()?.get_item(PANIC_INFO_KEY).ok()?
}

fn clear_panic_info() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(PANIC_INFO_KEY);
    }
}

/// Installs a panic hook that records the panic and redirects to `/panic`.
pub fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let panic_info = format!("{info}\n\nLocation: {location}");

        web_sys::console::error_1(&JsValue::from_str(&panic_info));

        if let Some(storage) = local_storage() {
            let _ = storage.set_item(PANIC_INFO_KEY, &panic_info);
        }
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_pathname("/panic");
        }
    }));
}

/// Panic page component.
#[function_component(PanicPage)]
pub fn panic_page() -> Html {
    let panic_info = use_state(get_panic_info);

    let on_clear = {
        let panic_info = panic_info.clone();
        Callback::from(move |_: MouseEvent| {
            clear_panic_info();
            panic_info.set(None);
        })
    };

    let on_copy = {
        let info = (*panic_info).clone();
        Callback::from(move |_: MouseEvent| {
            if let (Some(text), Some(window)) = (info.as_ref(), web_sys::window()) {
                let _ = window.navigator().clipboard().write_text(text);
            }
        })
    };

    html! {
        <main class="page panic-page">
            <h1>{ "The wheel fell off" }</h1>
            <p>{ "An unexpected error stopped the widget." }</p>

            if let Some(info) = &*panic_info {
                <pre class="panic-details">{ info }</pre>
                <div class="panic-actions">
                    <button onclick={on_copy} class="btn">{ "Copy" }</button>
                    <button onclick={on_clear} class="btn btn-reset">{ "Clear" }</button>
                </div>
            } else {
                <p>{ "No error details were recorded." }</p>
            }

            <Link<Route> to={Route::Classic}>{ "Back to the wheel" }</Link<Route>>
        </main>
    }
}
