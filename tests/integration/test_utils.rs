//! Shared test utilities for integration tests
//!
//! Provides XDG isolation for config tests and a small directory fixture
//! builder for manifest tests.

use hcompare::config::HcompareConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Environment variable state to restore after test
struct EnvState {
    home: Option<String>,
    xdg_config_home: Option<String>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            xdg_config_home: std::env::var("XDG_CONFIG_HOME").ok(),
        }
    }

    fn restore(self) {
        match self.home {
            Some(orig) => std::env::set_var("HOME", orig),
            None => std::env::remove_var("HOME"),
        }
        match self.xdg_config_home {
            Some(orig) => std::env::set_var("XDG_CONFIG_HOME", orig),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME pointed inside `test_dir`.
///
/// The global config file then lives at `<test_dir>/hcompare/config.toml`.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_home = test_dir.path().join("home");
    fs::create_dir_all(&test_home).unwrap();

    std::env::set_var("HOME", &test_home);
    std::env::set_var("XDG_CONFIG_HOME", test_dir.path());

    let result = f();

    env_state.restore();

    result
}

/// Run `f` while holding the environment lock, with extra variables set.
pub fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    for (key, value) in vars {
        std::env::set_var(key, value);
    }
    let result = f();
    for (key, _) in vars {
        std::env::remove_var(key);
    }
    result
}

/// Config with a tiny read buffer so multi-chunk paths get exercised.
pub fn small_chunk_config(chunk_size: usize) -> HcompareConfig {
    let mut config = HcompareConfig::default();
    config.digest.chunk_size = chunk_size;
    config.logging.color = false;
    config
}

/// Create `root` with the given files (relative path, contents).
pub fn populate(root: &Path, files: &[(&str, &[u8])]) -> Vec<PathBuf> {
    let mut created = Vec::new();
    for (rel, contents) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        created.push(path);
    }
    created
}

/// Manifest lines, without terminators.
pub fn manifest_lines(manifest: &Path) -> Vec<String> {
    fs::read_to_string(manifest)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
