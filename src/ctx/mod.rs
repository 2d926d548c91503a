pub mod calcontext;
pub mod context;

pub use calcontext::CalendarContext;
pub use context::{Context, DayInfo};
