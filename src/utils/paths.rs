use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".nextstep";
const CONFIG_FILE: &str = "config.json";
const DATA_DIR: &str = "data";
const SALARIES_FILE: &str = "salaries.csv";

/// Returns the application data directory, defaulting to `~/.nextstep`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("NEXTSTEP_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path of the engine configuration file.
pub fn config_file() -> PathBuf {
    app_data_dir().join(CONFIG_FILE)
}

/// Conventional location of a user-supplied salary table.
pub fn default_salaries_csv() -> PathBuf {
    app_data_dir().join(DATA_DIR).join(SALARIES_FILE)
}
