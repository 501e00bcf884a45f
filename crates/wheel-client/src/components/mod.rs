//! UI Components for the wheel client.

mod item_list;
mod spin_control;
mod wheel;

pub use item_list::ItemList;
pub use spin_control::SpinControl;
pub use wheel::Wheel;
