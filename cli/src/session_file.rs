//! Session persisted as one JSON file between CLI invocations.

#[cfg(test)]
#[path = "session_file_test.rs"]
mod session_file_test;

use std::path::{Path, PathBuf};

use wire::{Session, SessionStore};

/// `$HOME/.keylo/session.json`, or `./.keylo/session.json` without a home.
pub fn default_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".keylo")
        .join("session.json")
}

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Session> {
        let raw = std::fs::read(&self.path).ok()?;
        match serde_json::from_slice::<Session>(&raw) {
            Ok(session) if !session.token.is_empty() => Some(session),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable session file");
                None
            }
        }
    }

    fn save(&self, session: &Session) {
        let result = self
            .path
            .parent()
            .map_or(Ok(()), std::fs::create_dir_all)
            .and_then(|()| serde_json::to_vec_pretty(session).map_err(std::io::Error::other))
            .and_then(|bytes| std::fs::write(&self.path, bytes));
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to save session");
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %self.path.display(), error = %e, "failed to remove session"),
        }
    }
}
