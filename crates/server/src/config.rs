use std::{fs, path::Path};

use serde::Deserialize;
use server_api::DEFAULT_MAX_COMMANDS;
pub const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub max_body_bytes: usize,
    pub max_commands: usize,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8000".into(),
            max_body_bytes: 64 * 1024,
            max_commands: DEFAULT_MAX_COMMANDS,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    bind_addr: Option<String>,
    max_body_bytes: Option<usize>,
    max_commands: Option<usize>,
    log_filter: Option<String>,
}

/// Settings plus any problems met while reading them.
///
/// Settings are read before the tracing subscriber exists, so problems are
/// carried out here and logged by the caller once logging is up.
#[derive(Debug)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub warnings: Vec<String>,
}

/// Defaults, then `server.toml` from the working directory, then the
/// environment.
pub fn load_settings() -> LoadedSettings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub(crate) fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> LoadedSettings {
    let mut settings = Settings::default();
    let mut warnings = Vec::new();

    if let Ok(raw) = fs::read_to_string(path) {
        if let Err(error) = apply_file(&mut settings, &raw) {
            warnings.push(format!(
                "ignoring settings file '{}': {error}",
                path.display()
            ));
        }
    }
    apply_env(&mut settings, env);

    LoadedSettings { settings, warnings }
}

fn apply_file(settings: &mut Settings, raw: &str) -> Result<(), toml::de::Error> {
    let file_cfg = toml::from_str::<FileSettings>(raw)?;

    if let Some(v) = file_cfg.bind_addr {
        settings.server_bind = v;
    }
    if let Some(v) = file_cfg.max_body_bytes {
        settings.max_body_bytes = v;
    }
    if let Some(v) = file_cfg.max_commands {
        settings.max_commands = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, env: impl Fn(&str) -> Option<String>) {
    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("APP__MAX_BODY_BYTES") {
        if let Ok(parsed) = v.parse::<usize>() {
            settings.max_body_bytes = parsed;
        }
    }

    if let Some(v) = env("APP__MAX_COMMANDS") {
        if let Ok(parsed) = v.parse::<usize>() {
            settings.max_commands = parsed;
        }
    }

    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
