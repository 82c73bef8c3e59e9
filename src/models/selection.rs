use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Last landed value per category and option, in the shape persisted to the
/// `rouletteOptions` cookie: `{ "Food": { "Dish": ["Sushi"] } }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selections(IndexMap<String, IndexMap<String, Vec<String>>>);

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw stored sequence for an option.
    pub fn values(&self, category: &str, option: &str) -> Option<&[String]> {
        self.0
            .get(category)
            .and_then(|options| options.get(option))
            .map(Vec::as_slice)
    }

    /// First stored value for an option, if any.
    pub fn value(&self, category: &str, option: &str) -> Option<&str> {
        self.values(category, option)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn contains(&self, category: &str, option: &str, value: &str) -> bool {
        self.values(category, option)
            .is_some_and(|values| values.iter().any(|v| v == value))
    }

    /// Overwrites the option with a single-element sequence.
    pub fn set(&mut self, category: &str, option: &str, value: impl Into<String>) {
        self.0
            .entry(category.to_string())
            .or_default()
            .insert(option.to_string(), vec![value.into()]);
    }

    /// Makes sure a category entry exists, even with no options in it.
    pub fn touch_category(&mut self, category: &str) {
        self.0.entry(category.to_string()).or_default();
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
