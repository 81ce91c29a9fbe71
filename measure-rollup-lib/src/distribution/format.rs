use crate::Result;
use core::fmt;
use core::str::FromStr;
use ohno::{IntoAppError, app_err, bail};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

const PAIR_SEPARATOR: char = ';';
const KEY_SEPARATOR: char = '=';

/// An ordered mapping from bucket key to count.
///
/// Displays in the canonical `key1=count1;key2=count2` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution<K: Ord> {
    counts: BTreeMap<K, u64>,
}

impl<K: Ord> Distribution<K> {
    #[must_use]
    pub const fn new() -> Self {
        Self { counts: BTreeMap::new() }
    }

    /// The count recorded for a key.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<u64> {
        self.counts.get(key).copied()
    }

    /// Add `count` to a key, creating it if needed.
    pub fn add(&mut self, key: K, count: u64) {
        *self.counts.entry(key).or_insert(0) += count;
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.counts.iter().map(|(key, &count)| (key, count))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.counts.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

/// Check that a key survives the canonical text form unchanged.
///
/// # Errors
///
/// Returns an error if the key's text is empty, contains a separator, or has surrounding whitespace.
pub(super) fn ensure_encodable_key(key: &impl fmt::Display) -> Result<()> {
    let text = key.to_string();
    if text.is_empty() {
        bail!("distribution keys cannot be empty");
    }

    if text.contains([PAIR_SEPARATOR, KEY_SEPARATOR]) {
        bail!("distribution key '{text}' cannot contain '{PAIR_SEPARATOR}' or '{KEY_SEPARATOR}'");
    }

    if text.trim() != text {
        bail!("distribution key '{text}' cannot start or end with whitespace");
    }

    Ok(())
}

impl<K> Distribution<K>
where
    K: Ord + FromStr,
    K::Err: fmt::Display,
{
    /// Parse the canonical text form.
    ///
    /// An empty string yields an empty distribution. Empty segments between separators are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a segment is not a `key=count` pair, if a key or count cannot be
    /// parsed, or if a key appears twice.
    pub fn parse(text: &str) -> Result<Self> {
        let mut counts = BTreeMap::new();

        for segment in text.split(PAIR_SEPARATOR).map(str::trim).filter(|s| !s.is_empty()) {
            let Some((key_text, count_text)) = segment.split_once(KEY_SEPARATOR) else {
                bail!("distribution entry '{segment}' is not of the form key=count");
            };

            let key = K::from_str(key_text.trim()).map_err(|e| app_err!("invalid distribution key '{key_text}': {e}"))?;
            let count = count_text
                .trim()
                .parse::<u64>()
                .into_app_err_with(|| format!("invalid count '{count_text}' in distribution entry '{segment}'"))?;

            match counts.entry(key) {
                Entry::Vacant(entry) => {
                    let _ = entry.insert(count);
                }
                Entry::Occupied(_) => bail!("distribution key '{}' appears more than once", key_text.trim()),
            }
        }

        Ok(Self { counts })
    }
}

impl<K: Ord> Default for Distribution<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<(K, u64)> for Distribution<K> {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut distribution = Self::new();
        for (key, count) in iter {
            distribution.add(key, count);
        }
        distribution
    }
}

impl<K: Ord + fmt::Display> fmt::Display for Distribution<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, (key, count)) in self.counts.iter().enumerate() {
            if position > 0 {
                write!(f, "{PAIR_SEPARATOR}")?;
            }
            write!(f, "{key}{KEY_SEPARATOR}{count}")?;
        }

        Ok(())
    }
}
