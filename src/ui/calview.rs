use chrono::{Datelike, Month};
use num_traits::FromPrimitive;
use tui::buffer::Buffer;
use tui::layout::{Constraint, Direction, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::Span;
use tui::widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, Widget};

use crate::calendar;
use crate::ctx::Context;

pub struct DayCell {
    day_num: u32,
    selected: bool,
    is_today: bool,
    is_holiday: bool,
    style: Style,
    focus_style: Style,
    today_style: Style,
    holiday_style: Style,
}

pub struct MonthView {
    month: Month,
    year: i32,
    label_style: Style,
    header_style: Style,
    cell_style: Style,
    cell_focus_style: Style,
    cell_today_style: Style,
    cell_holiday_style: Style,
}

/// All twelve months of the selected year in a 4x3 layout.
pub struct CalendarView {
    label_style: Style,
    header_style: Style,
}

impl DayCell {
    pub fn new(day_num: u32) -> Self {
        DayCell {
            day_num,
            selected: false,
            is_today: false,
            is_holiday: false,
            style: Style::default(),
            focus_style: Style::default().bg(Color::Red).fg(Color::White),
            today_style: Style::default().add_modifier(Modifier::UNDERLINED),
            holiday_style: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn focus_style(mut self, style: Style) -> Self {
        self.focus_style = style;
        self
    }

    pub fn today_style(mut self, style: Style) -> Self {
        self.today_style = style;
        self
    }

    pub fn holiday_style(mut self, style: Style) -> Self {
        self.holiday_style = style;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn today(mut self, is_today: bool) -> Self {
        self.is_today = is_today;
        self
    }

    pub fn holiday(mut self, is_holiday: bool) -> Self {
        self.is_holiday = is_holiday;
        self
    }

    pub fn day_num(&self) -> u32 {
        self.day_num
    }
}

impl<'a> Into<Cell<'a>> for DayCell {
    fn into(self) -> Cell<'a> {
        // Selection wins over the holiday marking, which wins over the
        // today marking.
        let mut style = if self.is_holiday {
            self.holiday_style
        } else {
            self.style
        };
        if self.is_today {
            style = style.patch(self.today_style);
        }
        if self.selected {
            style = self.focus_style;
        }

        Cell::from(Span::styled(format!("{:>2}", self.day_num), style))
    }
}

impl MonthView {
    const COLUMNS: u16 = 7;
    const ROWS: u16 = 6;
    const LABEL_ROWS: u16 = 1;
    const HEADER_ROWS: u16 = 1;
    const COLUMN_WIDTH: u16 = 2;

    pub fn new(month: Month, year: i32) -> Self {
        MonthView {
            month,
            year,
            label_style: Style::default().fg(Color::Yellow),
            header_style: Style::default().add_modifier(Modifier::DIM),
            cell_style: Style::default(),
            cell_focus_style: Style::default().bg(Color::Red).fg(Color::White),
            cell_today_style: Style::default().add_modifier(Modifier::UNDERLINED),
            cell_holiday_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = style;
        self
    }

    pub fn cell_style(mut self, style: Style) -> Self {
        self.cell_style = style;
        self
    }

    pub fn cell_focus_style(mut self, style: Style) -> Self {
        self.cell_focus_style = style;
        self
    }

    pub fn cell_today_style(mut self, style: Style) -> Self {
        self.cell_today_style = style;
        self
    }

    pub fn cell_holiday_style(mut self, style: Style) -> Self {
        self.cell_holiday_style = style;
        self
    }

    pub fn width() -> u16 {
        // 7 columns plus the spacing between them
        Self::COLUMNS * (Self::COLUMN_WIDTH + 1) - 1
    }

    pub fn height() -> u16 {
        Self::LABEL_ROWS + Self::HEADER_ROWS + Self::ROWS
    }
}

impl StatefulWidget for MonthView {
    type State = Context;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let header = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
        let month0 = self.month.number_from_month() - 1;

        let sel_day = state.cursor.day;
        let sel_month = state.cursor.month;
        let today = state.now;

        let cells: Vec<Cell> = calendar::month_grid(&self.month, self.year)
            .into_iter()
            .map(|slot| match slot {
                None => Cell::from(""),
                Some(day_num) => DayCell::new(day_num)
                    .style(self.cell_style)
                    .focus_style(self.cell_focus_style)
                    .today_style(self.cell_today_style)
                    .holiday_style(self.cell_holiday_style)
                    .selected(self.month == sel_month && day_num == sel_day)
                    .today(
                        today.year() == self.year
                            && today.month0() == month0
                            && today.day() == day_num,
                    )
                    .holiday(state.is_holiday(day_num, month0))
                    .into(),
            })
            .collect();

        let rows: Vec<Row> = cells
            .chunks(Self::COLUMNS as usize)
            .map(|row| Row::new(row.to_vec()))
            .collect();

        Block::default()
            .borders(Borders::NONE)
            .title(Span::styled(self.month.name(), self.label_style))
            .render(area, buf);

        let table_area = Rect::new(
            area.x,
            area.y + Self::LABEL_ROWS,
            area.width,
            area.height.saturating_sub(Self::LABEL_ROWS),
        );

        Widget::render(
            Table::new(rows)
                .header(Row::new(header.to_vec()).style(self.header_style))
                .widths(&[
                    Constraint::Length(Self::COLUMN_WIDTH),
                    Constraint::Length(Self::COLUMN_WIDTH),
                    Constraint::Length(Self::COLUMN_WIDTH),
                    Constraint::Length(Self::COLUMN_WIDTH),
                    Constraint::Length(Self::COLUMN_WIDTH),
                    Constraint::Length(Self::COLUMN_WIDTH),
                    Constraint::Length(Self::COLUMN_WIDTH),
                ]),
            table_area,
            buf,
        );
    }
}

impl Default for CalendarView {
    fn default() -> Self {
        CalendarView {
            label_style: Style::default().fg(Color::Yellow),
            header_style: Style::default().add_modifier(Modifier::DIM),
        }
    }
}

impl CalendarView {
    const MONTH_COLUMNS: u32 = 4;
    const MONTH_ROWS: u32 = 3;
    const MONTH_SPACING: u16 = 2;

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = style;
        self
    }
}

impl StatefulWidget for CalendarView {
    type State = Context;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let year = state.selected_year();

        let row_height = Constraint::Length(MonthView::height() + 1);
        let column_width = Constraint::Length(MonthView::width() + Self::MONTH_SPACING);

        let month_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([row_height; Self::MONTH_ROWS as usize].as_ref())
            .split(area);

        for (row, row_area) in month_rows.into_iter().enumerate() {
            let month_cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([column_width; Self::MONTH_COLUMNS as usize].as_ref())
                .split(row_area);

            for (col, cell_area) in month_cells.into_iter().enumerate() {
                let num = row as u32 * Self::MONTH_COLUMNS + col as u32 + 1;
                MonthView::new(Month::from_u32(num).unwrap(), year)
                    .label_style(self.label_style)
                    .header_style(self.header_style)
                    .render(cell_area, buf, state);
            }
        }
    }
}
