//! Application state management.

use std::rc::Rc;

use wheel_core::{SpinToken, WheelCommand, WheelConfig, WheelError, WheelEvent, WheelState};
use yew::prelude::*;

/// Result of the most recently dispatched action.
///
/// `seq` increases with every action so effects keyed on the outcome fire
/// even when two consecutive results are identical.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub seq: u64,
    pub command: WheelCommand,
    pub result: Result<WheelEvent, WheelError>,
}

/// Application state: the wheel plus the configuration it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub wheel: WheelState,
    pub config: Rc<WheelConfig>,
    pub outcome: Option<Outcome>,
}

impl AppState {
    pub fn new(config: Rc<WheelConfig>) -> Self {
        Self {
            wheel: WheelState::from_config(&config),
            config,
            outcome: None,
        }
    }

    fn next_seq(&self) -> u64 {
        self.outcome.as_ref().map_or(0, |o| o.seq + 1)
    }
}

/// Actions that can be dispatched to update the application state.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    AddItem(String),
    EditItem { index: usize, text: String },
    RemoveItem(usize),
    /// Start a spin
    Spin,
    /// Fired by the spin timer once the animation has elapsed
    FinishSpin(SpinToken),
    Reset,
}

impl From<AppAction> for WheelCommand {
    fn from(action: AppAction) -> Self {
        match action {
            AppAction::AddItem(text) => WheelCommand::AddItem(text),
            AppAction::EditItem { index, text } => WheelCommand::EditItem { index, text },
            AppAction::RemoveItem(index) => WheelCommand::RemoveItem(index),
            AppAction::Spin => WheelCommand::StartSpin,
            AppAction::FinishSpin(token) => WheelCommand::FinishSpin(token),
            AppAction::Reset => WheelCommand::Reset,
        }
    }
}

/// Reducer for application state.
impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let command = WheelCommand::from(action);
        let mut new_state = (*self).clone();
        let result = new_state
            .wheel
            .apply(command.clone(), &mut rand::rng(), &new_state.config);

        match &result {
            Ok(WheelEvent::StaleTimer(_)) => return self,
            Ok(event) => tracing::debug!(?event, "wheel updated"),
            Err(err) => tracing::warn!(?command, %err, "wheel command rejected"),
        }

        new_state.outcome = Some(Outcome {
            seq: self.next_seq(),
            command,
            result,
        });
        Rc::new(new_state)
    }
}

/// Context type for the application state.
pub type AppStateContext = UseReducerHandle<AppState>;
