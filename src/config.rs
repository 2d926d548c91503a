use crate::cmds::Cmd;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::iter::FromIterator;
use std::path::{Path, PathBuf};
use std::time::Duration;

use termion::event::Key;

pub type KeyMap = HashMap<Key, Cmd>;

const CONFIG_PATH_ENV_VAR: &str = "FERIADO_CONFIG_FILE";
const API_KEY_ENV_VAR: &str = "FERIADO_API_KEY";

const DEFAULT_BASE_URL: &str = "https://calendarific.com/api/v2";
const DEFAULT_COUNTRY: &str = "BR";

pub(crate) fn find_configfile_locations() -> io::Result<Vec<PathBuf>> {
    let config_env: Option<PathBuf> = if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        Some(PathBuf::from(path))
    } else {
        None
    };

    let home = if let Ok(dir) = env::var("HOME") {
        PathBuf::from(dir)
    } else {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            "Unable to find home directory",
        ));
    };

    let home_config = PathBuf::from_iter([&home, &PathBuf::from(".feriado.toml")].iter());

    let config_xdg = if let Ok(dir) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from_iter([dir, "feriado".to_string(), "config.toml".to_string()].iter())
    } else {
        PathBuf::from_iter(
            [
                home.as_path(),
                Path::new(".config"),
                Path::new("feriado"),
                Path::new("config.toml"),
            ]
            .iter(),
        )
    };

    let mut locations = vec![config_xdg, home_config];

    if let Some(path) = config_env {
        locations.insert(0, path);
    }

    Ok(locations)
}

/// API key for the holiday service, sourced from the environment only.
pub fn api_key_from_env() -> io::Result<String> {
    env::var(API_KEY_ENV_VAR).map_err(|_| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not set", API_KEY_ENV_VAR),
        )
    })
}

#[derive(Debug, Clone)]
pub struct Config {
    pub key_map: KeyMap,
    pub tick_rate: Duration,
    pub country: String,
    pub base_url: String,
}

/// On-disk representation. Everything is optional; missing fields keep
/// their defaults.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    country: Option<String>,
    base_url: Option<String>,
    tick_rate_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Config {
        let mut config = Config {
            key_map: HashMap::new(),
            tick_rate: Duration::from_millis(500),
            country: DEFAULT_COUNTRY.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        };

        config.key_map.insert(Key::Char('l'), Cmd::NextDay);
        config.key_map.insert(Key::Char('h'), Cmd::PrevDay);
        config.key_map.insert(Key::Char('j'), Cmd::NextWeek);
        config.key_map.insert(Key::Char('k'), Cmd::PrevWeek);
        config.key_map.insert(Key::Char(']'), Cmd::NextYear);
        config.key_map.insert(Key::Char('['), Cmd::PrevYear);
        config.key_map.insert(Key::Char('\n'), Cmd::Activate);
        config.key_map.insert(Key::Esc, Cmd::Close);
        config.key_map.insert(Key::Char('t'), Cmd::Today);
        config.key_map.insert(Key::Char('q'), Cmd::Exit);

        config
    }
}

impl Config {
    fn merge_file(mut self, file: ConfigFile) -> Config {
        if let Some(country) = file.country {
            self.country = country;
        }
        if let Some(base_url) = file.base_url {
            self.base_url = base_url;
        }
        if let Some(ms) = file.tick_rate_ms {
            self.tick_rate = Duration::from_millis(ms);
        }
        self
    }
}

/// Load the config from `path` if given, otherwise from the first existing
/// location in the search list. No config file at all yields the defaults.
pub fn load_suitable_config(path: Option<&Path>) -> io::Result<Config> {
    let location = match path {
        Some(path) => Some(path.to_path_buf()),
        None => find_configfile_locations()?
            .into_iter()
            .find(|location| location.exists()),
    };

    let config = match location {
        Some(path) => {
            log::info!("loading config from {}", path.display());
            let contents = fs::read_to_string(&path)?;
            let file: ConfigFile = toml::from_str(&contents)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
            Config::default().merge_file(file)
        }
        None => Config::default(),
    };

    Ok(config)
}
