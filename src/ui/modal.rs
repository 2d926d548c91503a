use chrono::Month;
use num_traits::FromPrimitive;
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Modifier, Style};
use tui::text::{Span, Spans, Text};
use tui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};

use crate::ctx::DayInfo;
use crate::ui::util;

const MODAL_WIDTH: u16 = 46;
const MODAL_HEIGHT: u16 = 12;

/// Centered overlay with the details of the activated day.
pub struct ModalView<'a> {
    info: &'a DayInfo,
}

impl<'a> ModalView<'a> {
    pub fn new(info: &'a DayInfo) -> Self {
        ModalView { info }
    }
}

impl Widget for ModalView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = util::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);

        let month = Month::from_u32(self.info.month0 + 1).unwrap();
        let title = format!(" {} {} {} ", self.info.day, month.name(), self.info.year);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                title,
                Style::default().add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(rect);

        Clear.render(rect, buf);
        block.render(rect, buf);

        let hint = Spans::from(Span::styled(
            "[esc] close",
            Style::default().add_modifier(Modifier::DIM),
        ));

        let text = match &self.info.holiday {
            Some(holiday) => {
                let mut lines = vec![Spans::from(Span::styled(
                    holiday.name.as_str(),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                ))];
                if !holiday.description.is_empty() {
                    lines.push(Spans::from(holiday.description.as_str()));
                }
                if !holiday.types.is_empty() {
                    lines.push(Spans::from(Span::styled(
                        holiday.types.join(", "),
                        Style::default().add_modifier(Modifier::ITALIC),
                    )));
                }
                lines.push(Spans::from(""));
                lines.push(hint);
                Text::from(lines)
            }
            None => Text::from(vec![
                Spans::from("No public holiday."),
                Spans::from(""),
                hint,
            ]),
        };

        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
