//! Persisted key/value stores for visitor preferences.
//!
//! Two keys live here: the chosen language and the cookie consent decision.
//! Callers in `i18n` and `consent` treat every `StoreError` as "value not
//! set" (reads) or a no-op (writes); nothing in this module is fatal.

use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

/// Key under which the visitor's language choice is persisted.
pub const LANGUAGE_KEY: &str = "language";

/// Key under which the cookie consent decision is persisted.
pub const CONSENT_KEY: &str = "site_cookies_accepted";

/// One year, in seconds. Lifetime of persisted preference cookies.
const COOKIE_MAX_AGE: u64 = 60 * 60 * 24 * 365;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("write rejected for key '{key}': {reason}")]
    WriteRejected { key: String, reason: String },
}

/// A single-cell-per-key persisted store (browser local storage, cookies, ...).
pub trait PreferenceStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Process-local store. Used for sessions that do not outlive the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: Mutex::new(values),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self
            .values
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by the cookies of a single HTTP request.
///
/// Reads come from the request's `Cookie` header; writes are buffered and
/// turned into `Set-Cookie` header values with [`CookieStore::set_cookie_headers`].
/// A later write to the same key wins.
#[derive(Debug, Default)]
pub struct CookieStore {
    incoming: HashMap<String, String>,
    pending: Mutex<Vec<(String, String)>>,
}

impl CookieStore {
    /// Parse a raw `Cookie` header (`a=1; b=2`). Malformed pairs are skipped.
    pub fn from_header(header: Option<&str>) -> Self {
        let incoming = header
            .unwrap_or_default()
            .split(';')
            .filter_map(|pair| {
                let (name, value) = pair.trim().split_once('=')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some((name.to_string(), value.trim().trim_matches('"').to_string()))
            })
            .collect();

        Self {
            incoming,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// `Set-Cookie` values for every key written during this request.
    pub fn set_cookie_headers(&self) -> Vec<String> {
        let pending = match self.pending.lock() {
            Ok(pending) => pending,
            Err(poisoned) => poisoned.into_inner(),
        };

        let mut latest: Vec<(&str, &str)> = Vec::new();
        for (key, value) in pending.iter() {
            match latest.iter_mut().find(|(k, _)| *k == key.as_str()) {
                Some(entry) => entry.1 = value.as_str(),
                None => latest.push((key.as_str(), value.as_str())),
            }
        }

        latest
            .into_iter()
            .map(|(key, value)| {
                format!(
                    "{}={}; Path=/; Max-Age={}; SameSite=Lax",
                    key, value, COOKIE_MAX_AGE
                )
            })
            .collect()
    }
}

/// Cookie values are restricted to RFC 6265 `cookie-octet`s.
fn is_cookie_safe(value: &str) -> bool {
    value
        .bytes()
        .all(|b| b.is_ascii_graphic() && !matches!(b, b'"' | b',' | b';' | b'\\'))
}

impl PreferenceStore for CookieStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let pending = self
            .pending
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        if let Some((_, value)) = pending.iter().rev().find(|(k, _)| k == key) {
            return Ok(Some(value.clone()));
        }
        Ok(self.incoming.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if !is_cookie_safe(key) || !is_cookie_safe(value) {
            return Err(StoreError::WriteRejected {
                key: key.to_string(),
                reason: "not a valid cookie token".to_string(),
            });
        }
        self.pending
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// A store whose every operation fails, like local storage in a
    /// locked-down browser.
    pub struct UnavailableStore;

    impl PreferenceStore for UnavailableStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("disabled".to_string()))
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disabled".to_string()))
        }
    }
}
