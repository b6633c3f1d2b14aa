use crate::error::{ConfigError, Error};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "student-records.toml";
pub const DEFAULT_INPUT_FILE: &str = "niagara.json";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    input: InputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct InputConfig {
    path: Option<PathBuf>,
}

impl Config {
    /// Load the configuration from `file_name`. When no file is given, the
    /// default configuration file is used if it exists.
    pub fn load(file_name: Option<&Path>) -> Result<Config, Error> {
        match file_name {
            Some(path) => Self::load_from_file(path),
            None => match Self::load_from_file(Path::new(DEFAULT_CONFIG_FILE)) {
                Err(Error::Config {
                    source: ConfigError::Io(ref e),
                    ..
                }) if e.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
                other => other,
            },
        }
    }

    fn load_from_file(path: &Path) -> Result<Config, Error> {
        let wrap = |source: ConfigError| Error::Config {
            path: path.to_owned(),
            source,
        };
        let content = fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
        toml::from_str(&content).map_err(|e| wrap(e.into()))
    }

    /// Input file to use when none is given on the command line.
    pub fn input_path(&self) -> &Path {
        self.input
            .path
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_INPUT_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn default_input() {
        assert_eq!(Config::default().input_path(), Path::new("niagara.json"));
    }

    #[test]
    fn configured_input() {
        let (_dir, path) = write_config("[input]\npath = \"data/students.json\"\n");
        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.input_path(), Path::new("data/students.json"));
    }

    #[test]
    fn empty_file_keeps_defaults() {
        let (_dir, path) = write_config("");
        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.input_path(), Path::new(DEFAULT_INPUT_FILE));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let (_dir, path) = write_config("[input]\nfile = \"x.json\"\n");
        assert!(matches!(
            Config::load(Some(path.as_path())),
            Err(Error::Config {
                source: ConfigError::Toml(_),
                ..
            })
        ));
    }

    #[test]
    fn explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load(Some(dir.path().join("missing.toml").as_path())),
            Err(Error::Config {
                source: ConfigError::Io(_),
                ..
            })
        ));
    }
}
