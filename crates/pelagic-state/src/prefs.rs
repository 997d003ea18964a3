//! Preference store.
//!
//! The site keeps exactly one kind of durable state: boolean-ish markers in
//! browser local storage ("has the visitor seen the CTA"). Here that is an
//! explicit injected service with a get/set contract so callers can be
//! tested against [`MemoryPrefs`] and production can use [`FilePrefs`].
//!
//! # Failure contract
//!
//! Store unavailability is equivalent to "flag absent": reads of a broken
//! backend return `false`, writes are logged and swallowed. Nothing in this
//! module panics or returns an error to the caller.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Injected preference service: set-only boolean flags keyed by string.
pub trait PrefStore {
    /// Whether the flag is set; absence (or backend failure) reads as `false`.
    fn get(&self, key: &str) -> bool;

    /// Set the flag. Backend failures are swallowed.
    fn set(&mut self, key: &str);
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    flags: BTreeSet<String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefs {
    fn get(&self, key: &str) -> bool {
        self.flags.contains(key)
    }

    fn set(&mut self, key: &str) {
        self.flags.insert(key.to_owned());
    }
}

/// File-backed store: a JSON array of set flags.
///
/// Writes go through a temp-file-then-rename so a crash mid-write leaves the
/// previous file intact. A missing or corrupt file loads as empty.
#[derive(Debug, Clone)]
pub struct FilePrefs {
    path: PathBuf,
    flags: BTreeSet<String>,
}

impl FilePrefs {
    /// Open (or create on first write) the store at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let flags = Self::load(&path);
        Self { path, flags }
    }

    fn load(path: &Path) -> BTreeSet<String> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return BTreeSet::new(),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "pref store unreadable, treating as empty");
                return BTreeSet::new();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(flags) => flags,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "pref store corrupt, treating as empty");
                BTreeSet::new()
            }
        }
    }

    fn persist(&self) {
        let bytes = match serde_json::to_vec_pretty(&self.flags) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(%err, "pref store serialization failed");
                return;
            }
        };
        let tmp = self.path.with_extension("tmp");
        let result = fs::write(&tmp, &bytes).and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(err) = result {
            tracing::warn!(path = %self.path.display(), %err, "pref store write failed");
            let _ = fs::remove_file(&tmp);
        }
    }
}

impl PrefStore for FilePrefs {
    fn get(&self, key: &str) -> bool {
        self.flags.contains(key)
    }

    fn set(&mut self, key: &str) {
        if self.flags.insert(key.to_owned()) {
            self.persist();
        }
    }
}
