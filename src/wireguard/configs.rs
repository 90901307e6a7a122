//! Tunnel discovery from the WireGuard configuration directory.

use std::path::Path;

use globset::{Glob, GlobMatcher};

/// Pattern a file name must match to count as a tunnel configuration.
pub const CONFIG_PATTERN: &str = "*.conf";

const CONFIG_EXTENSION: &str = ".conf";

fn config_matcher() -> Option<GlobMatcher> {
    match Glob::new(CONFIG_PATTERN) {
        Ok(glob) => Some(glob.compile_matcher()),
        Err(e) => {
            tracing::warn!(pattern = CONFIG_PATTERN, error = %e, "Invalid config pattern");
            None
        }
    }
}

/// List tunnel names in `dir`, sorted.
///
/// Each entry matching `*.conf` yields its file name with the extension
/// stripped. An unreadable directory yields an empty list; callers that
/// need at least one tunnel decide whether that is fatal.
pub fn list_configs(dir: &Path) -> Vec<String> {
    let Some(matcher) = config_matcher() else {
        return Vec::new();
    };

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(
                dir = %dir.display(),
                error = %e,
                "Error reading WireGuard configuration directory"
            );
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| !t.is_dir()).unwrap_or(false))
        .filter_map(|entry| {
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if !matcher.is_match(&file_name) {
                return None;
            }
            file_name
                .strip_suffix(CONFIG_EXTENSION)
                .filter(|stem| !stem.is_empty())
                .map(str::to_owned)
        })
        .collect();

    names.sort();
    tracing::debug!(dir = %dir.display(), count = names.len(), "Listed configurations");
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        fs::write(dir.path().join(name), "[Interface]\n").unwrap();
    }

    #[test]
    fn lists_conf_files_sorted_without_extension() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "office.conf");
        touch(&dir, "home.conf");
        touch(&dir, "notes.txt");
        touch(&dir, "home.conf.bak");

        assert_eq!(list_configs(dir.path()), vec!["home", "office"]);
    }

    #[test]
    fn empty_directory_gives_empty_list() {
        let dir = TempDir::new().unwrap();
        assert!(list_configs(dir.path()).is_empty());
    }

    #[test]
    fn missing_directory_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(list_configs(&missing).is_empty());
    }

    #[test]
    fn directories_named_like_configs_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("old.conf")).unwrap();
        touch(&dir, "wg0.conf");

        assert_eq!(list_configs(dir.path()), vec!["wg0"]);
    }
}
