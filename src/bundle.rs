use crate::error::CalculatorResult;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

/// Flat key/value configuration bundle.
///
/// A bundle is a JSON object of string entries. Which rule each entry feeds
/// is decided by its key name (see `CalculatorConfig::from_bundle`); the
/// bundle itself stores everything verbatim.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    entries: BTreeMap<String, String>,
}

impl Bundle {
    /// Read a bundle from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> CalculatorResult<Self> {
        log::info!("loading configuration bundle {}", path.as_ref().display());
        let file = File::open(path)?;
        let entries: BTreeMap<String, String> = serde_json::from_reader(file)?;
        Ok(Self { entries })
    }

    /// Build a bundle from in-memory key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
