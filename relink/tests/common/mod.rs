//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the relink library against real directory trees.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for scratch directory trees.
///
/// # Examples
///
/// ```no_run
/// # use common::TreeFixture;
/// let tree = TreeFixture::new()
///     .with_file("data/file.txt", "payload")
///     .with_dir("links/sub");
/// ```
#[allow(dead_code)]
pub struct TreeFixture {
    temp: TempDir,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Creates an empty tree in a fresh temporary directory.
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("failed to create temporary directory"),
        }
    }

    /// Adds a file, creating parent directories.
    pub fn with_file(self, relative: &str, contents: &str) -> Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directory");
        }
        fs::write(&path, contents).expect("failed to write fixture file");
        self
    }

    /// Adds a directory and its parents.
    pub fn with_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.path(relative)).expect("failed to create fixture directory");
        self
    }

    /// The tree's root, with symlinks in the temporary path resolved.
    pub fn root(&self) -> PathBuf {
        self.temp
            .path()
            .canonicalize()
            .expect("failed to canonicalize temporary directory")
    }

    /// Absolute path of an entry in the tree.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }
}

/// Names of every entry directly inside `dir`, sorted.
#[allow(dead_code)]
pub fn entry_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("failed to read directory")
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using this must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Sets `key` to `value` until dropped.
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Removes `key` until dropped.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clears every RELINK_* variable the library reads.
#[allow(dead_code)]
pub fn clear_relink_env_vars() -> Vec<EnvGuard> {
    ["RELINK_SEPARATOR", "RELINK_ENSURE_EXISTS", "RELINK_LOG_MODE"]
        .iter()
        .map(|k| EnvGuard::remove(k))
        .collect()
}
