//! Runtime settings
//!
//! Settings are layered with the `config` crate: built-in defaults, then an
//! optional TOML file, then `CINEMA_TICKET_*` environment variables. Command
//! line flags are applied on top by the caller through [`Settings::apply_flags`].

use crate::error::Result;
use config::{Config, Environment, File, Map};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Prefix of environment variables read into [`Settings`]
pub const ENV_PREFIX: &str = "CINEMA_TICKET";

/// File name looked up in the platform config directory
pub const CONFIG_FILE_NAME: &str = "cinema-ticket.toml";

/// Settings for a cinema-ticket session
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Tracing filter used when `RUST_LOG` is unset and `--verbose` is off
    pub log_level: String,
    pub color: bool,
    pub json: bool,
    /// Force line-based prompts even when stdin is a terminal
    pub plain: bool,
    /// Print the welcome banner before every menu
    pub show_banner: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            color: true,
            json: false,
            plain: false,
            show_banner: true,
        }
    }
}

/// Where settings come from
#[derive(Debug, Default)]
pub struct SettingsLoader {
    file: Option<PathBuf>,
    env: Option<Map<String, String>>,
}

impl SettingsLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from an explicit file, which must exist
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Use the given map instead of the process environment
    #[must_use]
    pub fn with_env(mut self, env: Map<String, String>) -> Self {
        self.env = Some(env);
        self
    }

    /// Build the layered settings
    pub fn load(self) -> Result<Settings> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("color", defaults.color)?
            .set_default("json", defaults.json)?
            .set_default("plain", defaults.plain)?
            .set_default("show_banner", defaults.show_banner)?;

        builder = match self.file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => match default_config_path() {
                Some(path) => builder.add_source(File::from(path).required(false)),
                None => builder,
            },
        };

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(self.env),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        tracing::debug!(?settings, "Settings loaded");
        Ok(settings)
    }
}

impl Settings {
    /// Load settings, reading `path` instead of the default file when given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let loader = SettingsLoader::new();
        match path {
            Some(path) => loader.with_file(path).load(),
            None => loader.load(),
        }
    }

    /// Apply command line overrides. Flags can only switch features on
    /// (or colour off), never undo what the file asked for.
    pub fn apply_flags(&mut self, no_color: bool, json: bool, plain: bool) {
        if no_color {
            self.color = false;
        }
        if json {
            self.json = true;
        }
        if plain {
            self.plain = true;
        }
    }
}

/// `cinema-ticket.toml` inside the platform config directory
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cinema-ticket").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
