use std::collections::HashMap;
use crate::error::UniquenessViolation;

/// Unique-keyed string to string map with prefix lookups.
///
/// Iteration order is unspecified, which also applies to [`Dataset::first`]
/// when several keys share the requested prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    data: HashMap<String, String>,
}

impl Dataset {
    pub fn new() -> Self {
        Self { data: HashMap::new() }
    }

    /// Builds a dataset through [`Dataset::add`], stopping at the first duplicate key.
    pub fn try_from_entries<I, K, V>(entries: I) -> Result<Self, UniquenessViolation>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut dataset = Self::new();
        for (key, value) in entries {
            dataset.add(key.as_ref(), value.as_ref())?;
        }
        Ok(dataset)
    }

    /// Inserts the pair only if `key` is absent. An existing key is rejected
    /// even when the stored value is equal to `value`.
    pub fn add(&mut self, key: &str, value: &str) -> Result<(), UniquenessViolation> {
        if self.exists(key) {
            return Err(UniquenessViolation::new(key));
        }

        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Inserts or overwrites.
    pub fn set(&mut self, key: &str, value: &str) {
        self.data.insert(key.to_string(), value.to_string());
    }

    pub fn exists(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    /// Every entry whose key starts with `prefix`, the exact key included.
    /// Empty when nothing matches.
    pub fn get_started_with(&self, prefix: &str) -> HashMap<String, String> {
        self.data
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Value of some entry whose key starts with `prefix`. Which one wins
    /// among several matches is not defined.
    pub fn first(&self, prefix: &str) -> Option<String> {
        self.data
            .iter()
            .find(|(key, _)| key.starts_with(prefix))
            .map(|(_, value)| value.clone())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> Extend<(K, V)> for Dataset {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key.as_ref(), value.as_ref());
        }
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dataset = Self::new();
        dataset.extend(iter);
        dataset
    }
}
