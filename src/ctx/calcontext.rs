use chrono::Month;

/// The selected cell of the year view: day and month mark the highlighted
/// cell, year is the selected year all twelve rendered months belong to.
#[derive(Debug, Clone)]
pub struct CalendarContext {
    pub day: u32,
    pub month: Month,
    pub year: i32,
}

impl Default for CalendarContext {
    fn default() -> Self {
        CalendarContext {
            day: 1,
            month: Month::January,
            year: 0,
        }
    }
}
