pub mod calview;
pub mod modal;
pub mod util;

pub use calview::{CalendarView, DayCell, MonthView};
pub use modal::ModalView;
