use super::*;

use std::{
    collections::HashMap,
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

fn temp_settings_file(label: &str, contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("rover_server_settings_{label}_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join("server.toml");
    fs::write(&path, contents).expect("write settings");
    path
}

#[test]
fn missing_file_and_env_yield_defaults() {
    let loaded = load_settings_from(Path::new("does/not/exist.toml"), no_env);
    assert_eq!(loaded.settings, Settings::default());
    assert!(loaded.warnings.is_empty());
}

#[test]
fn file_values_override_defaults() {
    let path = temp_settings_file(
        "file",
        "bind_addr = \"0.0.0.0:9000\"\nmax_commands = 50\nlog_filter = \"debug\"\n",
    );

    let settings = load_settings_from(&path, no_env).settings;

    assert_eq!(settings.server_bind, "0.0.0.0:9000");
    assert_eq!(settings.max_commands, 50);
    assert_eq!(settings.log_filter, "debug");
    assert_eq!(settings.max_body_bytes, Settings::default().max_body_bytes);

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn env_overrides_file() {
    let path = temp_settings_file("env", "bind_addr = \"0.0.0.0:9000\"\nmax_body_bytes = 1024\n");

    let settings = load_settings_from(
        &path,
        env_from(&[
            ("APP__BIND_ADDR", "127.0.0.1:7000"),
            ("APP__MAX_BODY_BYTES", "2048"),
        ]),
    )
    .settings;

    assert_eq!(settings.server_bind, "127.0.0.1:7000");
    assert_eq!(settings.max_body_bytes, 2048);

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn app_prefixed_bind_wins_over_plain_variable() {
    let settings = load_settings_from(
        Path::new("does/not/exist.toml"),
        env_from(&[
            ("SERVER_BIND", "127.0.0.1:1111"),
            ("APP__BIND_ADDR", "127.0.0.1:2222"),
        ]),
    )
    .settings;
    assert_eq!(settings.server_bind, "127.0.0.1:2222");
}

#[test]
fn unparsable_numbers_are_ignored() {
    let settings = load_settings_from(
        Path::new("does/not/exist.toml"),
        env_from(&[("APP__MAX_COMMANDS", "lots")]),
    )
    .settings;
    assert_eq!(settings.max_commands, DEFAULT_MAX_COMMANDS);
}

#[test]
fn malformed_file_is_reported_and_falls_back_to_defaults() {
    let path = temp_settings_file("malformed", "max_commands = \"not a number\"\n");

    let loaded = load_settings_from(&path, no_env);

    assert_eq!(loaded.settings, Settings::default());
    assert_eq!(loaded.warnings.len(), 1);
    assert!(loaded.warnings[0].contains("server.toml"), "{}", loaded.warnings[0]);
    assert!(loaded.warnings[0].contains("not a number"), "{}", loaded.warnings[0]);

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}
