use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "feriado",
    about = "Feriado - a TUI year calendar with public holidays."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,

    #[structopt(
        short = "C",
        long = "country",
        help = "ISO country code to fetch holidays for"
    )]
    pub country: Option<String>,

    #[structopt(short = "y", long = "year", help = "year to show at startup")]
    pub year: Option<i32>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only show calendar non-interactively"
    )]
    pub show: bool,
}
