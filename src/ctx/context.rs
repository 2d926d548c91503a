use crate::api;
use crate::calendar;
use crate::ctx::CalendarContext;
use crate::holiday::{self, Holiday};

use chrono::naive::NaiveDate;
use chrono::{Datelike, Month};
use num_traits::FromPrimitive;
use std::collections::VecDeque;

/// The cell the modal is showing. A present `DayInfo` always carries the
/// values of the cell that was activated; `holiday` is the lookup result
/// for that cell and may be absent.
#[derive(Debug, Clone)]
pub struct DayInfo {
    pub day: u32,
    pub month0: u32,
    pub year: i32,
    pub holiday: Option<Holiday>,
}

/// All presentation state: the selected cell, the current year's holiday
/// dataset, the modal, and the bookkeeping for in-flight fetches.
///
/// Holiday data is replaced wholesale whenever a fetch for the selected
/// year resolves; there is no caching across years, every year change
/// requests fresh data.
pub struct Context {
    pub cursor: CalendarContext,
    pub now: NaiveDate,
    holidays: Vec<Holiday>,
    pub loading: bool,
    modal: Option<DayInfo>,
    fetch_queue: VecDeque<i32>,
    pub last_error: Option<String>,
}

/// chrono cannot represent dates past roughly year ±262143, and computing
/// December's length needs the first day of the following January. Selected
/// years stay inside that window; navigation saturates at the edges.
fn clamp_year(year: i32) -> i32 {
    year.clamp(NaiveDate::MIN.year(), NaiveDate::MAX.year() - 1)
}

impl Context {
    /// State at startup: cursor on `today`, one fetch queued for the
    /// starting year (`year` overrides today's year when given).
    pub fn new(today: NaiveDate, year: Option<i32>) -> Context {
        let year = clamp_year(year.unwrap_or_else(|| today.year()));
        let mut context = Context {
            cursor: CalendarContext {
                day: today.day(),
                month: Month::from_u32(today.month()).unwrap(),
                year,
            },
            now: today,
            holidays: Vec::new(),
            loading: false,
            modal: None,
            fetch_queue: VecDeque::new(),
            last_error: None,
        };
        context.request_fetch(year);
        context
    }

    pub fn selected_year(&self) -> i32 {
        self.cursor.year
    }

    pub fn selected_month(&self) -> Month {
        self.cursor.month
    }

    /// Called on every tick.
    pub fn update(&mut self) {
        self.now = chrono::Local::now().date_naive();
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Whether (`day`, `month0`) of the *selected* year is a holiday. All
    /// rendered months belong to the selected year, so no cross-year
    /// lookup is offered.
    pub fn is_holiday(&self, day: u32, month0: u32) -> bool {
        holiday::is_holiday(day, month0, self.cursor.year, &self.holidays)
    }

    pub fn modal(&self) -> Option<&DayInfo> {
        self.modal.as_ref()
    }

    /// The selected cell as a date. The day is clamped in case a year
    /// change left it past the end of its month (Feb 29 after leaving a
    /// leap year).
    pub fn cursor_date(&self) -> NaiveDate {
        let days = calendar::days_of_month(&self.cursor.month, self.cursor.year);
        NaiveDate::from_ymd_opt(
            self.cursor.year,
            self.cursor.month.number_from_month(),
            self.cursor.day.min(days),
        )
        .unwrap()
    }

    /// Move the selected cell by `days`, clamped to the selected year.
    /// Only the year-navigation commands change the selected year.
    pub fn move_cursor(&mut self, days: i64) {
        let year = self.cursor.year;
        let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();

        let date = (self.cursor_date() + chrono::Duration::days(days)).clamp(start, end);
        self.cursor.day = date.day();
        self.cursor.month = Month::from_u32(date.month()).unwrap();
    }

    /// Activate a grid cell. Padding cells (`None`) are a no-op. A concrete
    /// day always becomes the selected cell and opens the modal, populated
    /// with the holiday found for it (if any). Activating while the modal
    /// is already open simply replaces its content.
    pub fn activate_cell(&mut self, day: Option<u32>, month0: u32) {
        let day = match day {
            Some(day) => day,
            None => return,
        };

        self.cursor.day = day;
        self.cursor.month = Month::from_u32(month0 + 1).unwrap();

        let holiday =
            holiday::find_holiday(day, month0, self.cursor.year, &self.holidays).cloned();
        self.modal = Some(DayInfo {
            day,
            month0,
            year: self.cursor.year,
            holiday,
        });
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Jump the selected cell to today, fetching if that changes the year.
    pub fn select_today(&mut self) {
        let today = self.now;
        self.cursor.day = today.day();
        self.cursor.month = Month::from_u32(today.month()).unwrap();
        if self.cursor.year != today.year() {
            self.cursor.year = today.year();
            self.request_fetch(today.year());
        }
    }

    pub fn next_year(&mut self) {
        let year = clamp_year(self.cursor.year + 1);
        if year != self.cursor.year {
            self.cursor.year = year;
            self.request_fetch(year);
        }
    }

    pub fn prev_year(&mut self) {
        let year = clamp_year(self.cursor.year - 1);
        if year != self.cursor.year {
            self.cursor.year = year;
            self.request_fetch(year);
        }
    }

    fn request_fetch(&mut self, year: i32) {
        self.fetch_queue.push_back(year);
        self.loading = true;
    }

    /// Next year a fetch should be started for, one entry per year change.
    pub fn take_fetch_request(&mut self) -> Option<i32> {
        self.fetch_queue.pop_front()
    }

    /// Apply a resolved fetch. Results tagged with a year that is no
    /// longer selected are discarded outright; the fetch for the current
    /// selection is still in flight and will follow. Failures keep the
    /// previous dataset (lenient degradation) but are remembered for the
    /// status line.
    pub fn apply_holidays(&mut self, year: i32, result: Result<Vec<Holiday>, api::Error>) {
        if year != self.cursor.year {
            log::debug!(
                "discarding stale holiday response for {} (selected year is {})",
                year,
                self.cursor.year
            );
            return;
        }

        self.loading = false;
        match result {
            Ok(holidays) => {
                self.holidays = holidays;
                self.last_error = None;
            }
            Err(err) => {
                log::warn!("holiday fetch for {} failed: {}", year, err);
                self.last_error = Some(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::HolidayDate;

    fn holiday(name: &str, iso: &str) -> Holiday {
        Holiday {
            name: name.to_owned(),
            description: String::new(),
            date: HolidayDate {
                iso: iso.to_owned(),
            },
            types: Vec::new(),
        }
    }

    fn context_at(year: i32) -> Context {
        let mut ctx = Context::new(
            NaiveDate::from_ymd_opt(year, 5, 10).unwrap(),
            None,
        );
        // Drain the startup fetch and settle loading for state tests.
        let requested = ctx.take_fetch_request().unwrap();
        ctx.apply_holidays(requested, Ok(Vec::new()));
        ctx
    }

    #[test]
    fn startup_queues_fetch_for_current_year() {
        let mut ctx = Context::new(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(), None);
        assert!(ctx.loading);
        assert_eq!(ctx.take_fetch_request(), Some(2024));
        assert_eq!(ctx.take_fetch_request(), None);
    }

    #[test]
    fn starting_year_override() {
        let mut ctx = Context::new(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(), Some(1999));
        assert_eq!(ctx.selected_year(), 1999);
        assert_eq!(ctx.take_fetch_request(), Some(1999));
    }

    #[test]
    fn activating_padding_cell_is_a_noop() {
        let mut ctx = context_at(2024);
        let day_before = ctx.cursor.day;
        let month_before = ctx.cursor.month;

        ctx.activate_cell(None, 3);

        assert!(ctx.modal().is_none());
        assert_eq!(ctx.cursor.day, day_before);
        assert_eq!(ctx.cursor.month, month_before);
    }

    #[test]
    fn activating_plain_day_opens_empty_modal_and_moves_selection() {
        let mut ctx = context_at(2024);
        ctx.activate_cell(Some(14), 2);

        let info = ctx.modal().expect("modal should be open");
        assert_eq!((info.day, info.month0, info.year), (14, 2, 2024));
        assert!(info.holiday.is_none());

        assert_eq!(ctx.cursor.day, 14);
        assert_eq!(ctx.cursor.month, Month::March);
    }

    #[test]
    fn independence_day_scenario() {
        let mut ctx = context_at(2024);
        ctx.apply_holidays(2024, Ok(vec![holiday("Independence Day", "2024-09-07")]));

        // Day 7 of September (month0 = 8) carries the holiday.
        ctx.activate_cell(Some(7), 8);
        let info = ctx.modal().unwrap();
        assert_eq!(
            info.holiday.as_ref().map(|h| h.name.as_str()),
            Some("Independence Day")
        );

        // Day 7 of August (month0 = 7) does not; the modal is replaced
        // directly without an intermediate close.
        ctx.activate_cell(Some(7), 7);
        let info = ctx.modal().unwrap();
        assert_eq!((info.day, info.month0), (7, 7));
        assert!(info.holiday.is_none());

        ctx.close_modal();
        assert!(ctx.modal().is_none());
    }

    #[test]
    fn year_roundtrip_requests_one_fetch_per_change() {
        let mut ctx = context_at(2024);

        ctx.next_year();
        assert!(ctx.loading);
        ctx.prev_year();

        assert_eq!(ctx.selected_year(), 2024);
        assert_eq!(ctx.take_fetch_request(), Some(2025));
        assert_eq!(ctx.take_fetch_request(), Some(2024));
        assert_eq!(ctx.take_fetch_request(), None);
    }

    #[test]
    fn year_navigation_crosses_year_zero() {
        let mut ctx = context_at(1);
        ctx.prev_year();
        ctx.prev_year();
        assert_eq!(ctx.selected_year(), -1);
    }

    #[test]
    fn selected_year_stays_within_representable_dates() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let mut ctx = Context::new(today, Some(300_000));

        let max_year = NaiveDate::MAX.year() - 1;
        assert_eq!(ctx.selected_year(), max_year);
        assert_eq!(ctx.take_fetch_request(), Some(max_year));

        // Every month of the clamped year still has a computable grid.
        for m in 1..=12u32 {
            let month = Month::from_u32(m).unwrap();
            assert!(!calendar::month_grid(&month, ctx.selected_year()).is_empty());
        }

        // Navigating past the ceiling neither moves the year nor queues
        // another fetch.
        ctx.next_year();
        assert_eq!(ctx.selected_year(), max_year);
        assert_eq!(ctx.take_fetch_request(), None);

        let mut ctx = Context::new(today, Some(i32::MIN));
        let min_year = NaiveDate::MIN.year();
        assert_eq!(ctx.selected_year(), min_year);
        ctx.prev_year();
        assert_eq!(ctx.selected_year(), min_year);
        assert!(!calendar::month_grid(&Month::January, min_year).is_empty());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut ctx = context_at(2024);

        ctx.next_year();
        ctx.prev_year();

        // The response for 2025 arrives after the user navigated back.
        ctx.apply_holidays(2025, Ok(vec![holiday("Wrong Year", "2025-01-01")]));
        assert!(ctx.holidays().is_empty());
        assert!(ctx.loading, "the fetch for 2024 is still outstanding");

        ctx.apply_holidays(2024, Ok(vec![holiday("New Year", "2024-01-01")]));
        assert!(!ctx.loading);
        assert_eq!(ctx.holidays().len(), 1);
        assert!(ctx.is_holiday(1, 0));
    }

    #[test]
    fn failed_fetch_keeps_previous_dataset() {
        let mut ctx = context_at(2024);
        ctx.apply_holidays(2024, Ok(vec![holiday("New Year", "2024-01-01")]));

        ctx.next_year();
        ctx.prev_year();
        ctx.take_fetch_request();
        ctx.take_fetch_request();
        ctx.apply_holidays(
            2024,
            Err(api::Error::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE)),
        );

        assert!(!ctx.loading);
        assert_eq!(ctx.holidays().len(), 1);
        assert!(ctx.last_error.is_some());
    }

    #[test]
    fn year_change_replaces_dataset_wholesale() {
        let mut ctx = context_at(2024);
        ctx.apply_holidays(2024, Ok(vec![holiday("New Year", "2024-01-01")]));

        ctx.next_year();
        ctx.apply_holidays(2025, Ok(vec![holiday("New Year", "2025-01-01")]));

        assert_eq!(ctx.holidays().len(), 1);
        assert_eq!(ctx.holidays()[0].date.iso, "2025-01-01");
    }

    #[test]
    fn cursor_movement_stays_within_selected_year() {
        let mut ctx = context_at(2024);
        ctx.activate_cell(Some(30), 11);
        ctx.close_modal();

        ctx.move_cursor(7);
        assert_eq!(ctx.cursor.day, 31);
        assert_eq!(ctx.cursor.month, Month::December);
        assert_eq!(ctx.selected_year(), 2024);

        ctx.move_cursor(-366);
        assert_eq!(ctx.cursor.day, 1);
        assert_eq!(ctx.cursor.month, Month::January);
    }

    #[test]
    fn cursor_date_clamps_after_leaving_leap_year() {
        let mut ctx = context_at(2024);
        ctx.activate_cell(Some(29), 1);
        ctx.close_modal();

        ctx.prev_year();
        assert_eq!(
            ctx.cursor_date(),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
    }
}
