//! Spin/reset button and result display.

use gloo::timers::callback::Timeout;
use wheel_core::{SpinPhase, SpinToken};
use yew::prelude::*;

use crate::state::{AppAction, AppStateContext};

/// Spin button that flips into a reset button once a result is shown.
///
/// While a spin is running this component owns the finish timer. The timer is
/// dropped (and so cancelled) if the spin is abandoned before it fires.
#[function_component(SpinControl)]
pub fn spin_control() -> Html {
    let app_state = use_context::<AppStateContext>().expect("AppStateContext not found");
    let messages = &app_state.config.messages;

    let in_flight: Option<(SpinToken, u32)> = match app_state.wheel.phase() {
        SpinPhase::Spinning { plan, token } => Some((*token, plan.duration_ms)),
        _ => None,
    };

    {
        let app_state = app_state.clone();
        use_effect_with(in_flight, move |in_flight| {
            let timeout = in_flight.map(|(token, duration_ms)| {
                Timeout::new(duration_ms, move || {
                    app_state.dispatch(AppAction::FinishSpin(token));
                })
            });
            move || drop(timeout)
        });
    }

    let on_click = {
        let app_state = app_state.clone();
        Callback::from(move |_: MouseEvent| match app_state.wheel.phase() {
            SpinPhase::Idle => app_state.dispatch(AppAction::Spin),
            SpinPhase::Finished { .. } => app_state.dispatch(AppAction::Reset),
            SpinPhase::Spinning { .. } => {}
        })
    };

    let (label, class) = match app_state.wheel.phase() {
        SpinPhase::Idle => (messages.spin.clone(), "btn-spin"),
        SpinPhase::Spinning { .. } => (messages.spinning.clone(), "btn-spin"),
        SpinPhase::Finished { .. } => (messages.reset.clone(), "btn-reset"),
    };
    let disabled = app_state.wheel.is_spinning() || app_state.wheel.items().is_empty();

    let result = app_state
        .wheel
        .result()
        .map(|label| format!("{}{}", messages.result_prefix, label))
        .unwrap_or_default();

    html! {
        <div class="spin-control">
            <button
                id="spin-button"
                class={classes!("btn", class)}
                onclick={on_click}
                {disabled}
            >
                { label }
            </button>
            <div id="result" aria-live="polite">{ result }</div>
        </div>
    }
}
