//! Hook for loading the wheel configuration of a variant.

use std::rc::Rc;

use wheel_core::{Variant, WheelConfig};
use yew::prelude::*;

/// Query parameter holding JSON overrides, e.g. `?config={"spin_duration_ms":2000}`.
const CONFIG_QUERY_KEY: &str = "config";

fn read_query_param(key: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(key)
}

/// Resolves the config for `variant`, applying query-string overrides.
///
/// Invalid overrides are logged and ignored.
pub fn load_wheel_config(variant: Variant) -> WheelConfig {
    let Some(json) = read_query_param(CONFIG_QUERY_KEY) else {
        return WheelConfig::for_variant(variant);
    };
    match WheelConfig::from_json(variant, &json) {
        Ok(config) => {
            tracing::info!(?variant, "loaded config overrides from query string");
            config
        }
        Err(err) => {
            tracing::warn!(%err, "ignoring invalid config query parameter");
            WheelConfig::for_variant(variant)
        }
    }
}

/// Config for `variant`, computed once per mount.
#[hook]
pub fn use_wheel_config(variant: Variant) -> Rc<WheelConfig> {
    let config = use_memo(variant, |variant| load_wheel_config(*variant));
    Rc::clone(&config)
}
