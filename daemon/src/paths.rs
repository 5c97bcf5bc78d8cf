/// Canonical location of the daemon's config file.
///
/// The daemon is configured from a single TOML file at a fixed, well-known
/// path; there is no CLI and no environment lookup.
use std::path::PathBuf;

const CONFIG_DIR: &str = "/etc/pageturner";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Returns the full path to the config file: /etc/pageturner/config.toml
pub fn config_file_path() -> PathBuf {
    PathBuf::from(CONFIG_DIR).join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_path_has_correct_name() {
        let path = config_file_path();
        assert_eq!(path.file_name().unwrap(), CONFIG_FILE_NAME);
    }

    #[test]
    fn config_file_path_is_absolute() {
        assert!(config_file_path().is_absolute());
    }
}
