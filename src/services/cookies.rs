use std::collections::HashMap;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;
use tracing::warn;

/// `max-age` used for every cookie the app writes.
pub const ONE_YEAR: Duration = Duration::from_secs(31_536_000);

#[derive(Debug, Error)]
pub enum CookieError {
    #[error("failed to write cookie jar {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode cookie jar: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("cookie value is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("cookie value is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A cookie as it would be handed to `document.cookie`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub max_age: Duration,
    pub path: String,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            max_age: ONE_YEAR,
            path: String::from("/"),
        }
    }

    pub fn header(&self) -> String {
        format!(
            "{}={};max-age={};path={}",
            self.name,
            self.value,
            self.max_age.as_secs(),
            self.path
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct StoredCookie {
    value: String,
    path: String,
    expires_at: OffsetDateTime,
}

impl StoredCookie {
    fn from_cookie(cookie: Cookie, now: OffsetDateTime) -> Self {
        Self {
            value: cookie.value,
            path: cookie.path,
            expires_at: now + cookie.max_age,
        }
    }

    fn is_live(&self, now: OffsetDateTime) -> bool {
        self.expires_at > now
    }
}

/// Minimal cookie storage: named string values with an expiry.
pub trait CookieJar {
    /// Raw (still encoded) value of a live cookie.
    fn get(&self, name: &str) -> Option<String>;

    fn set(&mut self, cookie: Cookie) -> Result<(), CookieError>;
}

#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    cookies: HashMap<String, StoredCookie>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CookieJar for MemoryCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        let now = OffsetDateTime::now_utc();
        self.cookies
            .get(name)
            .filter(|cookie| cookie.is_live(now))
            .map(|cookie| cookie.value.clone())
    }

    fn set(&mut self, cookie: Cookie) -> Result<(), CookieError> {
        let name = cookie.name.clone();
        let stored = StoredCookie::from_cookie(cookie, OffsetDateTime::now_utc());
        self.cookies.insert(name, stored);
        Ok(())
    }
}

/// Cookie jar persisted as a JSON file, shared by every window of the app.
/// The file is re-read on each access so a second window sees fresh values.
#[derive(Clone, Debug)]
pub struct FileCookieJar {
    path: PathBuf,
}

impl FileCookieJar {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> IndexMap<String, StoredCookie> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return IndexMap::new(),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to read cookie jar");
                return IndexMap::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(path = %self.path.display(), %err, "cookie jar is corrupted, ignoring it");
            IndexMap::new()
        })
    }

    fn get_at(&self, name: &str, now: OffsetDateTime) -> Option<String> {
        self.read_all()
            .get(name)
            .filter(|cookie| cookie.is_live(now))
            .map(|cookie| cookie.value.clone())
    }
}

impl CookieJar for FileCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        self.get_at(name, OffsetDateTime::now_utc())
    }

    fn set(&mut self, cookie: Cookie) -> Result<(), CookieError> {
        let now = OffsetDateTime::now_utc();
        let mut cookies = self.read_all();
        cookies.retain(|_, stored| stored.is_live(now));
        cookies.insert(cookie.name.clone(), StoredCookie::from_cookie(cookie, now));

        let payload = serde_json::to_string_pretty(&cookies)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| CookieError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, payload).map_err(|source| CookieError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
