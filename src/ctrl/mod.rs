pub mod calctrl;
pub mod control;
pub mod select;

pub use calctrl::CalendarController;
pub use control::{Control, Controller};
pub use select::Selection;
