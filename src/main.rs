mod args;

use feriado::api::{ApiConfig, HolidayClient};
use feriado::app::{self, App};
use feriado::config;
use feriado::ctx::Context;
use feriado::events::{Dispatcher, Event};

use args::Args;
use flexi_logger::{FileSpec, Logger};
use nix::sys::termios;
use std::io;
use std::thread;
use structopt::StructOpt;
use termion::raw::IntoRawMode;
use termion::screen::AlternateScreen;
use tui::backend::TermionBackend;
use tui::Terminal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    const STDIN: std::os::unix::io::RawFd = 0;
    let orig_attr = std::sync::Mutex::new(
        termios::tcgetattr(STDIN).expect("Failed to get terminal attributes"),
    );

    std::panic::set_hook(Box::new(move |info| {
        // Switch to main terminal screen
        println!("{}{}", termion::screen::ToMainScreen, termion::cursor::Show);

        let _ = termios::tcsetattr(STDIN, termios::SetArg::TCSANOW, &orig_attr.lock().unwrap());

        println!("Feriado ran into a fatal error!");
        println!(
            "Consider filing an issue with a log file and the backtrace below at {}",
            env!("CARGO_PKG_REPOSITORY")
        );

        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let config = config::load_suitable_config(args.configfile.as_deref())?;
    let api_key = config::api_key_from_env()?;

    let client = HolidayClient::new(ApiConfig {
        base_url: config.base_url.clone(),
        api_key,
        country: args.country.unwrap_or_else(|| config.country.clone()),
    });

    let mut context = Context::new(chrono::Local::now().date_naive(), args.year);

    if args.show {
        // Non-interactive mode fetches synchronously and draws exactly once.
        if let Some(year) = context.take_fetch_request() {
            context.apply_holidays(year, client.fetch_holidays(year));
        }

        let mut app = App::new(&config, context, client.country().to_owned());

        let stdout = io::stdout().into_raw_mode()?;
        let backend = TermionBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.draw(|f| app::draw(f, &mut app))?;

        return Ok(());
    }

    let dispatcher = Dispatcher::from_config(&config);
    let mut app = App::new(&config, context, client.country().to_owned());

    let stdout = io::stdout().into_raw_mode()?;
    let stdout = AlternateScreen::from(stdout);
    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    loop {
        // Start a worker for every pending year change. Results come back
        // through the dispatcher tagged with the requested year.
        while let Some(year) = app.global_ctx.take_fetch_request() {
            let client = client.clone();
            let sink = dispatcher.event_sink();
            thread::spawn(move || {
                let result = client.fetch_holidays(year);
                let _ = sink.send(Event::HolidaysFetched { year, result });
            });
        }

        terminal.draw(|f| app::draw(f, &mut app))?;

        let event = dispatcher.next()?;
        if let Err(err) = app.handle(event) {
            log::debug!("{}", err);
        }

        if app.quit {
            break;
        }
    }

    terminal.show_cursor()?;

    Ok(())
}
