use crate::api;
use crate::config::Config;
use crate::holiday::Holiday;
use std::io;
use std::sync::mpsc;
use std::thread;

use termion::event::Key;
use termion::input::TermRead;

pub enum Event {
    Input(Key),
    Tick,
    /// Result of a holiday fetch, tagged with the year it was requested
    /// for so stale responses can be told apart from current ones.
    HolidaysFetched {
        year: i32,
        result: Result<Vec<Holiday>, api::Error>,
    },
}

pub struct Dispatcher {
    rx: mpsc::Receiver<Event>,
    tx: mpsc::Sender<Event>,
    _input_handle: thread::JoinHandle<()>,
    _tick_handle: thread::JoinHandle<()>,
}

impl Default for Dispatcher {
    fn default() -> Dispatcher {
        Dispatcher::from_config(&Config::default())
    }
}

impl Dispatcher {
    pub fn from_config(config: &Config) -> Dispatcher {
        let tick_rate = config.tick_rate;
        let (tx, rx) = mpsc::channel();

        let input_handle = {
            let tx = tx.clone();
            thread::spawn(move || {
                let stdin = io::stdin();
                for key in stdin.keys().flatten() {
                    if tx.send(Event::Input(key)).is_err() {
                        return;
                    }
                }
            })
        };

        let tick_handle = {
            let tx = tx.clone();
            thread::spawn(move || loop {
                if tx.send(Event::Tick).is_err() {
                    return;
                }
                thread::sleep(tick_rate);
            })
        };

        Dispatcher {
            rx,
            tx,
            _input_handle: input_handle,
            _tick_handle: tick_handle,
        }
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }

    /// Sender handed to fetch worker threads.
    pub fn event_sink(&self) -> mpsc::Sender<Event> {
        self.tx.clone()
    }
}
