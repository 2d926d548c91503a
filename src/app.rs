use crate::cmds::{Cmd, CmdResult};
use crate::config::Config;
use crate::ctrl::{CalendarController, Controller};
use crate::ctx::Context;
use crate::events::Event;
use crate::ui::{CalendarView, ModalView};
use crate::ui::util;

use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Direction, Layout};
use tui::style::{Color, Modifier, Style};
use tui::text::{Span, Spans};
use tui::widgets::Paragraph;
use tui::Frame;

pub struct App<'a> {
    pub quit: bool,
    pub global_ctx: Context,
    view: Controller<'a, CalendarController>,
    country: String,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config, context: Context, country: String) -> App<'a> {
        App {
            quit: false,
            global_ctx: context,
            view: Controller::new(&config.key_map, CalendarController::default()),
            country,
        }
    }

    pub fn handle(&mut self, event: Event) -> CmdResult {
        match event {
            Event::Tick => {
                self.global_ctx.update();
                Ok(Cmd::Noop)
            }
            Event::HolidaysFetched { year, result } => {
                self.global_ctx.apply_holidays(year, result);
                Ok(Cmd::Noop)
            }
            input @ Event::Input(_) => {
                let cmd = self.view.handle(input, &mut self.global_ctx)?;
                if let Cmd::Exit = cmd {
                    self.quit = true;
                }
                Ok(Cmd::Noop)
            }
        }
    }
}

pub fn draw<B: Backend>(f: &mut Frame<B>, app: &mut App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.size());

    let year = app.global_ctx.selected_year();

    let title = Spans::from(vec![
        Span::styled(
            format!("Feriado {}", year),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  [{}]", app.country)),
    ]);
    f.render_widget(Paragraph::new(title), layout[0]);

    // The grid is suppressed entirely while a fetch is outstanding.
    if app.global_ctx.loading {
        let notice = Paragraph::new(format!("Fetching holidays for {}...", year))
            .alignment(Alignment::Center);
        f.render_widget(notice, util::centered_rect(40, 1, layout[1]));
    } else {
        f.render_stateful_widget(CalendarView::default(), layout[1], &mut app.global_ctx);
    }

    let status = match &app.global_ctx.last_error {
        Some(err) => Spans::from(Span::styled(
            format!("holiday data unavailable: {}", err),
            Style::default().fg(Color::Red),
        )),
        None => Spans::from(vec![
            Span::styled(
                app.global_ctx.cursor_date().format("%A, %-d %B %Y").to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "   h/j/k/l move  [ ] year  enter details  t today  q quit",
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]),
    };
    f.render_widget(Paragraph::new(status), layout[2]);

    if let Some(info) = app.global_ctx.modal() {
        f.render_widget(ModalView::new(info), f.size());
    }
}
