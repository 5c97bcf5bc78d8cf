use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_WATCH_DIR: &str = "/tmp";
pub const DEFAULT_READING_VIEW: &str = "ReadingView";

/// Root configuration structure. Deserialized from /etc/pageturner/config.toml.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub watch: WatchConfig,
    #[serde(default)]
    pub helpers: HelperConfig,
}

/// Where and what to watch.
#[derive(Debug, Deserialize)]
pub struct WatchConfig {
    /// Directory scanned for trigger files.
    #[serde(default = "default_watch_dir")]
    pub dir: String,
    /// Object name of the host view in which page turns are meaningful.
    #[serde(default = "default_reading_view")]
    pub reading_view: String,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            dir: DEFAULT_WATCH_DIR.to_string(),
            reading_view: DEFAULT_READING_VIEW.to_string(),
        }
    }
}

/// Names of the helper executables the host collaborators shell out to.
/// Looked up on PATH unless given as absolute paths.
#[derive(Debug, Deserialize, Clone)]
pub struct HelperConfig {
    /// Prints the active view's object name; nonzero exit = no controller.
    #[serde(default = "default_current_view")]
    pub current_view: String,
    /// Invoked with the view name and a method name (`nextPage`/`prevPage`).
    #[serde(default = "default_invoke_view")]
    pub invoke_view: String,
    /// Prints the primary screen's identifier; nonzero exit = no screen.
    #[serde(default = "default_primary_screen")]
    pub primary_screen: String,
    /// Invoked with the screen identifier and an orientation name.
    #[serde(default = "default_set_orientation")]
    pub set_orientation: String,
    /// Resets the host's idle/sleep countdown.
    #[serde(default = "default_reset_idle")]
    pub reset_idle: String,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            current_view: default_current_view(),
            invoke_view: default_invoke_view(),
            primary_screen: default_primary_screen(),
            set_orientation: default_set_orientation(),
            reset_idle: default_reset_idle(),
        }
    }
}

/// Loads the config file at `path`, returning `Config::default()` if the file
/// does not exist. Returns an error if the file exists but cannot be read or
/// parsed.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

fn default_watch_dir() -> String {
    DEFAULT_WATCH_DIR.to_string()
}

fn default_reading_view() -> String {
    DEFAULT_READING_VIEW.to_string()
}

fn default_current_view() -> String {
    "reader_current_view".to_string()
}

fn default_invoke_view() -> String {
    "reader_invoke".to_string()
}

fn default_primary_screen() -> String {
    "reader_primary_screen".to_string()
}

fn default_set_orientation() -> String {
    "reader_set_orientation".to_string()
}

fn default_reset_idle() -> String {
    "reader_reset_idle".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn watch_config_default_values() {
        let w = WatchConfig::default();
        assert_eq!(w.dir, DEFAULT_WATCH_DIR);
        assert_eq!(w.reading_view, DEFAULT_READING_VIEW);
    }

    #[test]
    fn helper_config_defaults_are_reader_commands() {
        let h = HelperConfig::default();
        assert_eq!(h.current_view, "reader_current_view");
        assert_eq!(h.invoke_view, "reader_invoke");
        assert_eq!(h.primary_screen, "reader_primary_screen");
        assert_eq!(h.set_orientation, "reader_set_orientation");
        assert_eq!(h.reset_idle, "reader_reset_idle");
    }

    // ── load_or_default ───────────────────────────────────────────────────────

    #[test]
    fn load_or_default_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nonexistent.toml");
        let config = load_or_default(&path).unwrap();
        assert_eq!(config.watch.dir, DEFAULT_WATCH_DIR);
        assert_eq!(config.helpers.reset_idle, "reader_reset_idle");
    }

    #[test]
    fn load_or_default_parses_valid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[watch]
dir = "/mnt/onboard/.triggers"
reading_view = "ReadingView"

[helpers]
set_orientation = "/usr/local/bin/rotate_screen"
"#,
        )
        .unwrap();

        let config = load_or_default(&path).unwrap();
        assert_eq!(config.watch.dir, "/mnt/onboard/.triggers");
        assert_eq!(config.helpers.set_orientation, "/usr/local/bin/rotate_screen");
    }

    #[test]
    fn load_or_default_partial_toml_uses_field_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        // Only override one field; the rest should get their defaults.
        std::fs::write(&path, "[watch]\ndir = \"/var/run/triggers\"\n").unwrap();

        let config = load_or_default(&path).unwrap();
        assert_eq!(config.watch.dir, "/var/run/triggers");
        assert_eq!(config.watch.reading_view, DEFAULT_READING_VIEW);
        assert_eq!(config.helpers.current_view, "reader_current_view");
    }

    #[test]
    fn load_or_default_invalid_toml_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not valid toml ][[[").unwrap();
        assert!(load_or_default(&path).is_err());
    }
}
