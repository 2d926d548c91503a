use crate::cmds::{Cmd, CmdResult};
use crate::ctrl::{Control, Selection};
use crate::ctx::Context;

#[derive(Default)]
pub struct CalendarController {}

impl Control for CalendarController {
    fn send_cmd(&mut self, cmd: &Cmd, context: &mut Context) -> CmdResult {
        match cmd {
            Cmd::NextDay => {
                self.move_right(context);
                Ok(Cmd::Noop)
            }
            Cmd::PrevDay => {
                self.move_left(context);
                Ok(Cmd::Noop)
            }
            Cmd::NextWeek => {
                self.move_down(context);
                Ok(Cmd::Noop)
            }
            Cmd::PrevWeek => {
                self.move_up(context);
                Ok(Cmd::Noop)
            }
            Cmd::NextYear => {
                context.next_year();
                Ok(Cmd::Noop)
            }
            Cmd::PrevYear => {
                context.prev_year();
                Ok(Cmd::Noop)
            }
            Cmd::Activate => {
                let day = context.cursor.day;
                let month0 = context.cursor.month.number_from_month() - 1;
                context.activate_cell(Some(day), month0);
                Ok(Cmd::Noop)
            }
            Cmd::Close => {
                context.close_modal();
                Ok(Cmd::Noop)
            }
            Cmd::Today => {
                context.select_today();
                Ok(Cmd::Noop)
            }
            _ => Ok(*cmd),
        }
    }
}

impl Selection for CalendarController {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ctrl::Controller;
    use crate::events::Event;
    use chrono::naive::NaiveDate;
    use termion::event::Key;

    fn context() -> Context {
        let mut ctx = Context::new(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(), None);
        let year = ctx.take_fetch_request().unwrap();
        ctx.apply_holidays(year, Ok(Vec::new()));
        ctx
    }

    #[test]
    fn key_map_drives_year_navigation() {
        let config = Config::default();
        let mut controller = Controller::new(&config.key_map, CalendarController::default());
        let mut ctx = context();

        controller
            .handle(Event::Input(Key::Char(']')), &mut ctx)
            .unwrap();
        assert_eq!(ctx.selected_year(), 2025);

        controller
            .handle(Event::Input(Key::Char('[')), &mut ctx)
            .unwrap();
        assert_eq!(ctx.selected_year(), 2024);
    }

    #[test]
    fn activate_and_close_drive_the_modal() {
        let config = Config::default();
        let mut controller = Controller::new(&config.key_map, CalendarController::default());
        let mut ctx = context();

        controller
            .handle(Event::Input(Key::Char('\n')), &mut ctx)
            .unwrap();
        let info = ctx.modal().expect("enter should open the modal");
        assert_eq!((info.day, info.month0, info.year), (10, 4, 2024));

        controller.handle(Event::Input(Key::Esc), &mut ctx).unwrap();
        assert!(ctx.modal().is_none());
    }

    #[test]
    fn exit_bubbles_up() {
        let mut controller = CalendarController::default();
        let mut ctx = context();
        assert_eq!(controller.send_cmd(&Cmd::Exit, &mut ctx).unwrap(), Cmd::Exit);
    }

    #[test]
    fn unmapped_key_is_an_error() {
        let config = Config::default();
        let mut controller = Controller::new(&config.key_map, CalendarController::default());
        let mut ctx = context();
        assert!(controller
            .handle(Event::Input(Key::Char('z')), &mut ctx)
            .is_err());
    }
}
