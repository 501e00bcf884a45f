//! The wheel picker page for one variant.

use wheel_core::{SpinPhase, Variant};
use yew::prelude::*;

use crate::components::{ItemList, SpinControl, Wheel};
use crate::hooks::{KeyboardShortcutsConfig, use_keyboard_shortcuts, use_wheel_config};
use crate::state::{AppAction, AppState};

/// Props for the WheelPage component.
#[derive(Properties, PartialEq)]
pub struct WheelPageProps {
    pub variant: Variant,
}

/// Wheel, spin control and item editor sharing one reducer.
#[function_component(WheelPage)]
pub fn wheel_page(props: &WheelPageProps) -> Html {
    let config = use_wheel_config(props.variant);
    let app_state = {
        let config = config.clone();
        use_reducer(move || AppState::new(config))
    };
    let cancel_edit = use_state(|| 0_u32);

    {
        let variant = props.variant;
        let items = app_state.wheel.items().len();
        use_effect_with(variant, move |variant| {
            tracing::info!(?variant, items, "wheel page mounted");
        });
    }

    let on_spin = {
        let app_state = app_state.clone();
        Callback::from(move |()| match app_state.wheel.phase() {
            SpinPhase::Idle => app_state.dispatch(AppAction::Spin),
            SpinPhase::Finished { .. } => app_state.dispatch(AppAction::Reset),
            SpinPhase::Spinning { .. } => {}
        })
    };

    let on_escape = {
        let cancel_edit = cancel_edit.clone();
        Callback::from(move |()| cancel_edit.set(cancel_edit.wrapping_add(1)))
    };

    use_keyboard_shortcuts(KeyboardShortcutsConfig {
        on_spin: Some(on_spin),
        on_escape: Some(on_escape),
        enabled: true,
    });

    let wheel = &app_state.wheel;

    html! {
        <ContextProvider<UseReducerHandle<AppState>> context={app_state.clone()}>
            <main class="page wheel-page">
                <h1>{ config.messages.title.clone() }</h1>
                <Wheel
                    items={wheel.items().clone()}
                    palette={config.palette.clone()}
                    layout={config.variant.label_layout()}
                    label_radius={config.label_radius}
                    rotation={wheel.rotation()}
                    transition_ms={wheel.transition_ms()}
                    highlighted={wheel.highlighted()}
                />
                <SpinControl />
                <ItemList cancel_edit={*cancel_edit} />
            </main>
        </ContextProvider<UseReducerHandle<AppState>>>
    }
}
