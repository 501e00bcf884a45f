//! Wheel state machine.
//!
//! `WheelState` owns the items and the spin phase. The UI dispatches
//! [`WheelCommand`]s and renders from the resulting state; the timer that ends
//! a spin carries a [`SpinToken`] so a callback from an abandoned spin cannot
//! finalize a newer one.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::WheelConfig;
use crate::error::WheelError;
use crate::items::ItemList;
use crate::spin::{SpinPlan, plan_spin};

/// Identifies one spin. Issued by `StartSpin`, redeemed by `FinishSpin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpinToken(pub u64);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum SpinPhase {
    #[default]
    Idle,
    Spinning { plan: SpinPlan, token: SpinToken },
    /// `winner` is cleared once the items change after the spin.
    Finished { winner: Option<usize>, label: String },
}

/// Commands the UI dispatches against the wheel.
#[derive(Debug, Clone, PartialEq)]
pub enum WheelCommand {
    AddItem(String),
    EditItem { index: usize, text: String },
    RemoveItem(usize),
    StartSpin,
    FinishSpin(SpinToken),
    Reset,
}

/// What a successfully applied command did.
#[derive(Debug, Clone, PartialEq)]
pub enum WheelEvent {
    ItemAdded(usize),
    ItemEdited(usize),
    ItemRemoved { index: usize, label: String },
    SpinStarted { plan: SpinPlan, token: SpinToken },
    SpinFinished { winner: usize, label: String },
    /// A finish callback arrived for a spin that is no longer running.
    StaleTimer(SpinToken),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WheelState {
    items: ItemList,
    phase: SpinPhase,
    rotation: f64,
    next_token: u64,
}

impl WheelState {
    pub fn new(items: ItemList) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn from_config(config: &WheelConfig) -> Self {
        Self::new(ItemList::new(config.initial_items.iter().cloned()))
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn phase(&self) -> &SpinPhase {
        &self.phase
    }

    /// Current absolute rotation of the wheel in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning { .. })
    }

    /// Transition length to animate with, only while a spin is running.
    pub fn transition_ms(&self) -> Option<u32> {
        match &self.phase {
            SpinPhase::Spinning { plan, .. } => Some(plan.duration_ms),
            _ => None,
        }
    }

    /// The winning label, available only once the spin has finished.
    pub fn result(&self) -> Option<&str> {
        match &self.phase {
            SpinPhase::Finished { label, .. } => Some(label),
            _ => None,
        }
    }

    /// Slice to highlight as the winner.
    pub fn highlighted(&self) -> Option<usize> {
        match &self.phase {
            SpinPhase::Finished { winner, .. } => *winner,
            _ => None,
        }
    }

    pub fn apply<R: Rng>(
        &mut self,
        command: WheelCommand,
        rng: &mut R,
        config: &WheelConfig,
    ) -> Result<WheelEvent, WheelError> {
        match command {
            WheelCommand::AddItem(text) => self.add_item(&text),
            WheelCommand::EditItem { index, text } => self.edit_item(index, &text),
            WheelCommand::RemoveItem(index) => self.remove_item(index),
            WheelCommand::StartSpin => self.start_spin(rng, config),
            WheelCommand::FinishSpin(token) => Ok(self.finish_spin(token)),
            WheelCommand::Reset => Ok(self.reset()),
        }
    }

    pub fn add_item(&mut self, text: &str) -> Result<WheelEvent, WheelError> {
        self.ensure_editable()?;
        let index = self.items.add(text)?;
        self.clear_highlight();
        Ok(WheelEvent::ItemAdded(index))
    }

    pub fn edit_item(&mut self, index: usize, text: &str) -> Result<WheelEvent, WheelError> {
        self.ensure_editable()?;
        self.items.edit(index, text)?;
        self.clear_highlight();
        Ok(WheelEvent::ItemEdited(index))
    }

    pub fn remove_item(&mut self, index: usize) -> Result<WheelEvent, WheelError> {
        self.ensure_editable()?;
        let label = self.items.remove(index)?;
        self.clear_highlight();
        Ok(WheelEvent::ItemRemoved { index, label })
    }

    pub fn start_spin<R: Rng>(
        &mut self,
        rng: &mut R,
        config: &WheelConfig,
    ) -> Result<WheelEvent, WheelError> {
        match self.phase {
            SpinPhase::Spinning { .. } => return Err(WheelError::SpinInProgress),
            SpinPhase::Finished { .. } => return Err(WheelError::ResetRequired),
            SpinPhase::Idle => {}
        }

        let plan = plan_spin(rng, self.items.len(), self.rotation, config)?;
        let token = SpinToken(self.next_token);
        self.next_token += 1;
        self.rotation = plan.rotation;
        self.phase = SpinPhase::Spinning { plan, token };

        tracing::info!(token = token.0, items = self.items.len(), "spin started");
        Ok(WheelEvent::SpinStarted { plan, token })
    }

    pub fn finish_spin(&mut self, token: SpinToken) -> WheelEvent {
        let winner = match &self.phase {
            SpinPhase::Spinning { plan, token: current } if *current == token => plan.winner,
            _ => {
                tracing::debug!(token = token.0, "ignoring stale spin timer");
                return WheelEvent::StaleTimer(token);
            }
        };
        // Items are frozen while spinning, so the planned index is still valid.
        let label = self.items.get(winner).unwrap_or_default().to_string();
        self.phase = SpinPhase::Finished {
            winner: Some(winner),
            label: label.clone(),
        };

        tracing::info!(token = token.0, winner, label = %label, "spin finished");
        WheelEvent::SpinFinished { winner, label }
    }

    /// Back to idle with the wheel snapped to its starting angle.
    pub fn reset(&mut self) -> WheelEvent {
        if self.is_spinning() {
            tracing::debug!("spin abandoned by reset");
        }
        self.phase = SpinPhase::Idle;
        self.rotation = 0.0;
        WheelEvent::Reset
    }

    fn ensure_editable(&self) -> Result<(), WheelError> {
        if self.is_spinning() {
            Err(WheelError::SpinInProgress)
        } else {
            Ok(())
        }
    }

    fn clear_highlight(&mut self) {
        if let SpinPhase::Finished { winner, .. } = &mut self.phase {
            *winner = None;
        }
    }
}
