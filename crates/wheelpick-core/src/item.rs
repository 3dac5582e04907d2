use std::fmt;
use std::str::FromStr;

use crate::Error;

/// One selectable entry: what is shown and what is handed back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<T> {
    pub label: String,
    pub value: T,
}

impl<T> Item<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl<T> fmt::Display for Item<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Parse `label` or `label=value`; a bare label is its own value
impl FromStr for Item<String> {
    type Err = Error;

    fn from_str(entry: &str) -> Result<Self, Self::Err> {
        let (label, value) = match entry.split_once('=') {
            Some((label, value)) => (label.trim(), value.trim()),
            None => (entry.trim(), entry.trim()),
        };

        if label.is_empty() {
            return Err(Error::InvalidItem(format!("empty label in {:?}", entry)));
        }

        Ok(Item::new(label, value.to_string()))
    }
}

/// Build string items from raw entries, skipping blank lines
pub fn parse_items<I, S>(entries: I) -> crate::Result<Vec<Item<String>>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter(|entry| !entry.as_ref().trim().is_empty())
        .map(|entry| entry.as_ref().parse())
        .collect()
}
