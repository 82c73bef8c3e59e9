use tracing::{debug, warn};

use crate::models::Selections;
use crate::services::cookies::{Cookie, CookieError, CookieJar};

pub const COOKIE_NAME: &str = "rouletteOptions";

/// Reads and writes the landed selections through a single cookie holding
/// URL-encoded JSON.
pub struct SelectionStore {
    jar: Box<dyn CookieJar>,
}

impl SelectionStore {
    pub fn new(jar: impl CookieJar + 'static) -> Self {
        Self { jar: Box::new(jar) }
    }

    /// Current mapping. A missing or unreadable cookie is an empty mapping.
    pub fn load(&self) -> Selections {
        let Some(raw) = self.jar.get(COOKIE_NAME) else {
            return Selections::new();
        };
        decode_selections(&raw).unwrap_or_else(|err| {
            warn!(%err, "error parsing cookie, starting without saved selections");
            Selections::new()
        })
    }

    /// Read-merge-write of one option's landed value.
    pub fn save(&mut self, category: &str, option: &str, value: &str) -> Result<(), CookieError> {
        let mut selections = self.load();
        selections.set(category, option, value);
        self.write(&selections)
    }

    /// Replaces the stored mapping with a whole-board snapshot.
    pub fn snapshot_all(&mut self, snapshot: &Selections) -> Result<Selections, CookieError> {
        self.write(snapshot)?;
        Ok(snapshot.clone())
    }

    fn write(&mut self, selections: &Selections) -> Result<(), CookieError> {
        let json = serde_json::to_string(selections)?;
        let cookie = Cookie::new(COOKIE_NAME, urlencoding::encode(&json).into_owned());
        debug!(cookie = %cookie.header(), "writing selections");
        self.jar.set(cookie)
    }
}

fn decode_selections(raw: &str) -> Result<Selections, CookieError> {
    let decoded = urlencoding::decode(raw)?;
    serde_json::from_str(&decoded).map_err(CookieError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::cookies::MemoryCookieJar;
    use pretty_assertions::assert_eq;

    fn store_with_raw_cookie(raw: &str) -> SelectionStore {
        let mut jar = MemoryCookieJar::new();
        jar.set(Cookie::new(COOKIE_NAME, raw)).unwrap();
        SelectionStore::new(jar)
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = SelectionStore::new(MemoryCookieJar::new());
        store.save("Food", "Dish", "Sushi").unwrap();
        store.save("Food", "Drink", "Tea & Milk").unwrap();

        let loaded = store.load();
        assert_eq!(loaded.values("Food", "Dish"), Some(&["Sushi".to_string()][..]));
        assert_eq!(loaded.value("Food", "Drink"), Some("Tea & Milk"));
    }

    #[test]
    fn empty_or_corrupted_cookie_loads_empty() {
        assert!(SelectionStore::new(MemoryCookieJar::new()).load().is_empty());
        assert!(store_with_raw_cookie("").load().is_empty());
        assert!(store_with_raw_cookie("%7Bnot-json").load().is_empty());
        assert!(store_with_raw_cookie("%FF%FE").load().is_empty());
    }

    #[test]
    fn reads_plain_json_written_without_encoding() {
        let store = store_with_raw_cookie(r#"{"Food":{"Dish":["Tacos"]}}"#);
        assert_eq!(store.load().value("Food", "Dish"), Some("Tacos"));
    }

    #[test]
    fn save_overwrites_corrupted_cookie() {
        let mut store = store_with_raw_cookie("garbage%");
        store.save("Food", "Dish", "Pizza").unwrap();
        assert_eq!(store.load().value("Food", "Dish"), Some("Pizza"));
    }

    #[test]
    fn snapshot_replaces_stored_mapping() {
        let mut store = SelectionStore::new(MemoryCookieJar::new());
        store.save("Food", "Dish", "Pizza").unwrap();
        store.save("Food", "Drink", "Tea").unwrap();

        let mut snapshot = Selections::new();
        snapshot.set("Food", "Dish", "Sushi");
        snapshot.touch_category("Travel");
        let written = store.snapshot_all(&snapshot).unwrap();

        assert_eq!(written, snapshot);
        assert_eq!(store.load(), snapshot);
        assert_eq!(store.load().value("Food", "Dish"), Some("Sushi"));
        assert_eq!(store.load().value("Food", "Drink"), None);
        assert!(store.load().categories().any(|name| name == "Travel"));
    }

    #[test]
    fn decode_reports_typed_errors() {
        assert!(matches!(
            decode_selections("%7Bnot-json"),
            Err(CookieError::Decode(_))
        ));
        assert!(matches!(
            decode_selections("%FF%FE"),
            Err(CookieError::Utf8(_))
        ));
    }
}
