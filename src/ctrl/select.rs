use crate::ctx::Context;

/// Cursor movement over the day grid. Steps keep the cursor within the
/// selected year; only year navigation changes it.
pub trait Selection {
    fn move_left(&mut self, context: &mut Context) {
        self.move_n_left(1, context);
    }

    fn move_right(&mut self, context: &mut Context) {
        self.move_n_right(1, context);
    }

    fn move_up(&mut self, context: &mut Context) {
        self.move_n_up(1, context);
    }

    fn move_down(&mut self, context: &mut Context) {
        self.move_n_down(1, context);
    }

    fn move_n_left(&mut self, n: u32, context: &mut Context) {
        context.move_cursor(-(n as i64));
    }

    fn move_n_right(&mut self, n: u32, context: &mut Context) {
        context.move_cursor(n as i64);
    }

    fn move_n_up(&mut self, n: u32, context: &mut Context) {
        context.move_cursor(-7 * n as i64);
    }

    fn move_n_down(&mut self, n: u32, context: &mut Context) {
        context.move_cursor(7 * n as i64);
    }
}
