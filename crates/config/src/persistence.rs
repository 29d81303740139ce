//! Locating, reading, and writing style files.
//!
//! Files are parsed as JSON5, which also accepts plain JSON. They are
//! written back as pretty JSON since serde_json5 cannot serialize.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::StyleConfig;
use crate::error::{ConfigError, Result};

/// Style files looked up in the working directory, best first.
const LOCAL_FILE_NAMES: [&str; 2] = ["climenu.json5", "climenu.json"];

/// Style files looked up in the user's `climenu` config directory, best first.
const USER_FILE_NAMES: [&str; 2] = ["config.json5", "config.json"];

/// Returns every location a style file may live in, in search order.
fn candidates(cwd: &Path, user_config: Option<&Path>) -> Vec<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| cwd.join(name));
    let user = user_config
        .map(|dir| dir.join("climenu"))
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.map(|name| dir.join(name)));
    local.chain(user).collect()
}

/// Returns the first style file that exists, if any.
pub(crate) fn find_style_file() -> Option<PathBuf> {
    let user_config = dirs::config_dir();
    candidates(Path::new("."), user_config.as_deref())
        .into_iter()
        .find(|path| path.is_file())
}

pub(crate) fn read_style_file(path: &Path) -> Result<StyleConfig> {
    let source = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "read style file");
    Ok(serde_json5::from_str(&source)?)
}

pub(crate) fn write_style_file(path: &Path, config: &StyleConfig) -> Result<()> {
    let write_error = |source: std::io::Error| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };
    let content = serde_json::to_string_pretty(config)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, content).map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn local_files_are_searched_before_user_files() {
        let paths = candidates(Path::new("work"), Some(Path::new("home/.config")));
        assert_eq!(
            paths,
            [
                PathBuf::from("work/climenu.json5"),
                PathBuf::from("work/climenu.json"),
                PathBuf::from("home/.config/climenu/config.json5"),
                PathBuf::from("home/.config/climenu/config.json"),
            ]
        );
    }

    #[test]
    fn no_user_directory_leaves_local_files() {
        let paths = candidates(Path::new("."), None);
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn read_accepts_json5_syntax() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("climenu.json5");
        fs::write(&path, "{ padding: 3, /* trailing */ }").unwrap();

        let config = read_style_file(&path).unwrap();
        assert_eq!(config.padding, Some(3));
    }

    #[test]
    fn read_missing_file_names_the_path() {
        let err = read_style_file(Path::new("/nonexistent/climenu.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/climenu.json"));
    }

    #[test]
    fn write_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("style.json");
        let config = StyleConfig {
            width: Some(64),
            ..Default::default()
        };

        write_style_file(&path, &config).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\n  \"width\": 64\n}");
    }
}
