//! Page components.

mod not_found;
mod panic;
mod wheel_page;

pub use not_found::NotFoundPage;
pub use panic::{PanicPage, set_panic_hook};
pub use wheel_page::WheelPage;
