//! Wheel Picker Core Library
//!
//! Pure logic behind the spinning wheel picker: the editable item list,
//! slice geometry, spin planning and the spin state machine.
//!
//! Nothing in this crate touches the DOM, so it builds and tests on native.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod items;
pub mod spin;
pub mod wheel;

pub use color::{Color, Palette};
pub use config::{Messages, Variant, WheelConfig};
pub use error::{ConfigError, WheelError};
pub use geometry::{
    LabelLayout, LabelPlacement, Slice, index_at_pointer, normalize_angle, slice_angle, slices,
    wheel_background,
};
pub use items::{ItemList, MIN_ITEMS};
pub use spin::{SpinPlan, plan_spin};
pub use wheel::{SpinPhase, SpinToken, WheelCommand, WheelEvent, WheelState};
