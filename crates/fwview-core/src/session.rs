//! Open-file session: which files are open as views, and which one is active.
//!
//! Every transition takes `&self` and returns the next state, so the hosting
//! layer decides when to commit it. The invariant kept by all transitions:
//! the active key is `None` exactly when nothing is open, and otherwise is one
//! of the open keys.

use crate::error::SessionError;
use crate::models::KeyCatalog;

/// Direction for [`Session::cycle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cycle {
    Next,
    Previous,
}

/// Ordered open keys plus the active one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    open: Vec<String>,
    active: Option<String>,
}

impl Session {
    /// The empty session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_keys(&self) -> &[String] {
        &self.open
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.as_deref() == Some(key)
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.open.iter().position(|k| k == key)
    }

    /// Open `key` and make it active.
    ///
    /// An already open key is only focused; it keeps its position.
    pub fn open(&self, key: &str, catalog: &impl KeyCatalog) -> Result<Self, SessionError> {
        if !catalog.contains_key(key) {
            return Err(SessionError::UnknownKey(key.to_string()));
        }

        let mut next = self.clone();
        if !next.is_open(key) {
            next.open.push(key.to_string());
        }
        next.active = Some(key.to_string());
        Ok(next)
    }

    /// Close `key`. Closing a key that is not open leaves the state as is.
    ///
    /// When the active key is closed, focus moves to the key on its left, or
    /// to the new first key when the closed one was first.
    pub fn close(&self, key: &str) -> Self {
        let Some(index) = self.position(key) else {
            return self.clone();
        };

        let mut next = self.clone();
        next.open.remove(index);

        if self.is_active(key) {
            next.active = next.open.get(index.saturating_sub(1)).cloned();
        }
        next
    }

    /// Make an open key active.
    pub fn select(&self, key: &str) -> Result<Self, SessionError> {
        if !self.is_open(key) {
            return Err(SessionError::NotOpen(key.to_string()));
        }

        let mut next = self.clone();
        next.active = Some(key.to_string());
        Ok(next)
    }

    /// Move focus to the neighbouring open key, wrapping at either end.
    pub fn cycle(&self, direction: Cycle) -> Self {
        let len = self.open.len();
        let Some(current) = self.active.as_deref().and_then(|k| self.position(k)) else {
            return self.clone();
        };

        let target = match direction {
            Cycle::Next => (current + 1) % len,
            Cycle::Previous => (current + len - 1) % len,
        };

        let mut next = self.clone();
        next.active = Some(self.open[target].clone());
        next
    }

    /// Close every open key the catalog no longer knows, one by one and in
    /// order, with the same re-selection rule as [`Session::close`].
    pub fn retain_known(&self, catalog: &impl KeyCatalog) -> Self {
        self.open
            .iter()
            .filter(|key| !catalog.contains_key(key))
            .fold(self.clone(), |session, key| session.close(key))
    }

    /// Back to the empty session.
    pub fn reset(&self) -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn catalog(keys: &[&str]) -> HashSet<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    fn opened(keys: &[&str]) -> Session {
        let known = catalog(keys);
        keys.iter().fold(Session::new(), |s, k| s.open(k, &known).unwrap())
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.is_empty());
        assert_eq!(session.active_key(), None);
    }

    #[test]
    fn test_open_appends_and_activates() {
        let session = opened(&["a", "b"]);
        assert_eq!(session.open_keys(), ["a", "b"]);
        assert_eq!(session.active_key(), Some("b"));
    }

    #[test]
    fn test_reopen_only_focuses() {
        let known = catalog(&["a", "b", "c"]);
        let session = opened(&["a", "b", "c"]).open("a", &known).unwrap();
        assert_eq!(session.open_keys(), ["a", "b", "c"]);
        assert_eq!(session.active_key(), Some("a"));
    }

    #[test]
    fn test_open_unknown_key() {
        let err = Session::new().open("ghost", &catalog(&["a"])).unwrap_err();
        assert_eq!(err, SessionError::UnknownKey("ghost".to_string()));
    }

    #[test]
    fn test_close_not_open_is_noop() {
        let session = opened(&["a"]);
        assert_eq!(session.close("zzz"), session);
    }

    #[test]
    fn test_close_active_middle_prefers_left() {
        let session = opened(&["a", "b", "c"]).select("b").unwrap().close("b");
        assert_eq!(session.open_keys(), ["a", "c"]);
        assert_eq!(session.active_key(), Some("a"));
    }

    #[test]
    fn test_close_active_last() {
        let session = opened(&["a", "b", "c"]).close("c");
        assert_eq!(session.open_keys(), ["a", "b"]);
        assert_eq!(session.active_key(), Some("b"));
    }

    #[test]
    fn test_close_active_first_takes_new_first() {
        let session = opened(&["a", "b"]).select("a").unwrap().close("a");
        assert_eq!(session.open_keys(), ["b"]);
        assert_eq!(session.active_key(), Some("b"));
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let session = opened(&["a", "b", "c"]).close("a");
        assert_eq!(session.active_key(), Some("c"));
    }

    #[test]
    fn test_close_last_open_clears_active() {
        let session = opened(&["x"]).close("x");
        assert!(session.is_empty());
        assert_eq!(session.active_key(), None);
    }

    #[test]
    fn test_select_not_open() {
        let err = opened(&["a"]).select("b").unwrap_err();
        assert_eq!(err, SessionError::NotOpen("b".to_string()));
    }

    #[test]
    fn test_transitions_do_not_mutate_source() {
        let before = opened(&["a", "b"]);
        let _ = before.close("b");
        let _ = before.select("a");
        assert_eq!(before.open_keys(), ["a", "b"]);
        assert_eq!(before.active_key(), Some("b"));
    }

    #[test]
    fn test_cycle_wraps() {
        let session = opened(&["a", "b", "c"]);
        assert_eq!(session.cycle(Cycle::Next).active_key(), Some("a"));
        assert_eq!(session.cycle(Cycle::Previous).active_key(), Some("b"));
        assert_eq!(Session::new().cycle(Cycle::Next), Session::new());
    }

    #[test]
    fn test_retain_known_closes_vanished_files() {
        let session = opened(&["a", "b", "c"]).select("b").unwrap();
        let pruned = session.retain_known(&catalog(&["a", "c"]));
        assert_eq!(pruned.open_keys(), ["a", "c"]);
        assert_eq!(pruned.active_key(), Some("a"));

        let gone = session.retain_known(&catalog(&[]));
        assert!(gone.is_empty());
        assert_eq!(gone.active_key(), None);
    }

    #[test]
    fn test_reset() {
        assert_eq!(opened(&["a"]).reset(), Session::new());
    }
}
