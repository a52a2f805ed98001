//! Common-password blacklist
//!
//! A process-wide set loaded once from a newline-separated file and consulted
//! by the strength meter. Until it is loaded nothing is considered common.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

/// Environment variable naming the blacklist file.
pub const BLACKLIST_PATH_ENV: &str = "PWD_POLICY_BLACKLIST_PATH";

const DEFAULT_BLACKLIST_PATH: &str = "./assets/blacklist.txt";

static COMMON_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Resolves the blacklist file path from `PWD_POLICY_BLACKLIST_PATH`,
/// falling back to `./assets/blacklist.txt`.
pub fn blacklist_path() -> PathBuf {
    std::env::var(BLACKLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLACKLIST_PATH))
}

/// Loads the blacklist from the path given by [`blacklist_path`].
///
/// # Errors
///
/// See [`init_blacklist_from_path`].
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    init_blacklist_from_path(blacklist_path())
}

/// Loads the blacklist from `path` and returns the number of entries.
///
/// Idempotent: once a blacklist is loaded further calls return its size
/// without touching the filesystem.
///
/// # Errors
///
/// Returns error if the file does not exist, cannot be read, or holds no
/// entries.
pub fn init_blacklist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, BlacklistError> {
    {
        let guard = COMMON_PASSWORDS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist load failed, file not found: {}", path.display());
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    if set.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist load failed, empty file: {}", path.display());
        return Err(BlacklistError::EmptyFile);
    }

    let count = set.len();
    *COMMON_PASSWORDS.write().unwrap_or_else(PoisonError::into_inner) = Some(set);

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist loaded: {} passwords from {}", count, path.display());

    Ok(count)
}

/// Case-insensitive membership test; `false` when no blacklist is loaded.
pub fn is_blacklisted(password: &str) -> bool {
    COMMON_PASSWORDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&password.to_lowercase()))
}

#[cfg(test)]
pub(crate) fn reset_blacklist_for_testing() {
    *COMMON_PASSWORDS.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// Loads `entries` into a fresh blacklist backed by a temporary file.
#[cfg(test)]
pub(crate) fn load_blacklist_for_testing(entries: &[&str]) {
    use std::io::Write;

    reset_blacklist_for_testing();
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    for entry in entries {
        writeln!(file, "{}", entry).expect("Failed to write");
    }
    init_blacklist_from_path(file.path()).expect("Failed to load test blacklist");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn set_env(key: &str, value: &str) {
        // SAFETY: serial tests, no other thread reads the environment
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        // SAFETY: serial tests, no other thread reads the environment
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_blacklist_path_default() {
        remove_env(BLACKLIST_PATH_ENV);
        assert_eq!(blacklist_path(), PathBuf::from("./assets/blacklist.txt"));
    }

    #[test]
    #[serial]
    fn test_blacklist_path_from_env() {
        set_env(BLACKLIST_PATH_ENV, "/etc/signup/common.txt");
        assert_eq!(blacklist_path(), PathBuf::from("/etc/signup/common.txt"));
        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_init_blacklist_file_not_found() {
        reset_blacklist_for_testing();
        set_env(BLACKLIST_PATH_ENV, "/nonexistent/path/blacklist.txt");

        let result = init_blacklist();
        assert!(matches!(result, Err(BlacklistError::FileNotFound(_))));
        assert!(!is_blacklisted("password"));

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_init_blacklist_blank_lines_only() {
        reset_blacklist_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "\n   \n").expect("Failed to write");

        let result = init_blacklist_from_path(temp_file.path());
        assert!(matches!(result, Err(BlacklistError::EmptyFile)));
    }

    #[test]
    #[serial]
    fn test_init_blacklist_from_env() {
        reset_blacklist_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "password123").expect("Failed to write");
        writeln!(temp_file, "qwerty").expect("Failed to write");
        writeln!(temp_file, "QWERTY").expect("Failed to write");

        set_env(BLACKLIST_PATH_ENV, temp_file.path().to_str().unwrap());
        assert_eq!(init_blacklist().unwrap(), 2);
        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_init_blacklist_is_idempotent() {
        load_blacklist_for_testing(&["letmein"]);
        assert_eq!(
            init_blacklist_from_path("/nonexistent/path/blacklist.txt").unwrap(),
            1
        );
    }

    #[test]
    #[serial]
    fn test_is_blacklisted_case_insensitive() {
        load_blacklist_for_testing(&["testpassword"]);
        assert!(is_blacklisted("testpassword"));
        assert!(is_blacklisted("TestPassword"));
        assert!(!is_blacklisted("veryuncommonpassword987"));
    }

    #[test]
    #[serial]
    fn test_not_blacklisted_before_init() {
        reset_blacklist_for_testing();
        assert!(!is_blacklisted("password"));
    }
}
