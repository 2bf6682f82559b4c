//! Query parameter model.
//!
//! Every service method accepts a slice of [`QueryParam`] values which the
//! pipeline applies, in order, to a fresh [`QueryValues`] accumulator.

use std::collections::BTreeMap;
use std::fmt;

/// One contribution to a request's query string.
///
/// Values are stringified with `Display` at construction time; escaping is
/// left to [`QueryValues::encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParam {
    /// Sets `key` to exactly one value, replacing anything set before it.
    Single {
        /// Parameter name.
        key: String,
        /// Stringified value.
        value: String,
    },
    /// Appends every value under `key` (`?k=a&k=b`).
    Multi {
        /// Parameter name.
        key: String,
        /// Stringified values, in caller order.
        values: Vec<String>,
    },
}

impl QueryParam {
    /// Creates a single-valued parameter.
    pub fn single(key: impl Into<String>, value: impl fmt::Display) -> Self {
        Self::Single {
            key: key.into(),
            value: value.to_string(),
        }
    }

    /// Creates a repeated parameter from any iterator of displayable values.
    ///
    /// Pipe-separated OR filters (`"2|3"`) are plain values; pass them
    /// through [`QueryParam::single`].
    pub fn multi<I>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        Self::Multi {
            key: key.into(),
            values: values.into_iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Parameter name.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Single { key, .. } | Self::Multi { key, .. } => key,
        }
    }

    /// Applies this parameter to the accumulator.
    pub fn apply(&self, query: &mut QueryValues) {
        match self {
            Self::Single { key, value } => query.set(key, value.clone()),
            Self::Multi { key, values } => {
                for value in values {
                    query.add(key, value.clone());
                }
            }
        }
    }
}

/// Per-request query accumulator.
///
/// Keys are kept sorted so the encoded query string is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues {
    entries: BTreeMap<String, Vec<String>>,
}

impl QueryValues {
    /// Creates an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Replaces all values for `key` with `value`.
    pub fn set(&mut self, key: &str, value: String) {
        self.entries.insert(String::from(key), vec![value]);
    }

    /// Appends `value` to the values for `key`.
    pub fn add(&mut self, key: &str, value: String) {
        self.entries
            .entry(String::from(key))
            .or_default()
            .push(value);
    }

    /// First value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values for `key`, empty when absent.
    #[must_use]
    pub fn get_all(&self, key: &str) -> &[String] {
        self.entries
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `key` has at least one value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Whether nothing has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encodes as `application/x-www-form-urlencoded`, keys in sorted order.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.entries {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

impl<'a> FromIterator<&'a QueryParam> for QueryValues {
    fn from_iter<T: IntoIterator<Item = &'a QueryParam>>(iter: T) -> Self {
        let mut query = Self::new();
        for param in iter {
            param.apply(&mut query);
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_last_write_wins() {
        // Arrange
        let params = [QueryParam::single("page", 3), QueryParam::single("page", 5)];

        // Act
        let query: QueryValues = params.iter().collect();

        // Assert
        assert_eq!(query.get_all("page"), ["5"]);
        assert_eq!(query.encode(), "page=5");
    }

    #[test]
    fn test_multi_appends_in_order_without_dedup() {
        // Arrange
        let params = [QueryParam::multi("with_genres", ["18", "35", "18"])];

        // Act
        let query: QueryValues = params.iter().collect();

        // Assert
        assert_eq!(
            query.encode(),
            "with_genres=18&with_genres=35&with_genres=18"
        );
    }

    #[test]
    fn test_single_after_multi_replaces_all_values() {
        // Arrange
        let params = [
            QueryParam::multi("with_status", [2, 3]),
            QueryParam::single("with_status", 0),
        ];

        // Act
        let query: QueryValues = params.iter().collect();

        // Assert
        assert_eq!(query.get_all("with_status"), ["0"]);
    }

    #[test]
    fn test_multi_after_single_keeps_existing_value() {
        // Arrange
        let params = [
            QueryParam::single("with_status", 1),
            QueryParam::multi("with_status", [2]),
        ];

        // Act
        let query: QueryValues = params.iter().collect();

        // Assert
        assert_eq!(query.get_all("with_status"), ["1", "2"]);
    }

    #[test]
    fn test_empty_multi_contributes_nothing() {
        // Arrange
        let params = [QueryParam::multi("with_genres", Vec::<u32>::new())];

        // Act
        let query: QueryValues = params.iter().collect();

        // Assert
        assert!(query.is_empty());
        assert!(!query.contains_key("with_genres"));
        assert_eq!(query.encode(), "");
    }

    #[test]
    fn test_empty_key_is_kept() {
        // Arrange
        let params = [QueryParam::single("", "x")];

        // Act
        let query: QueryValues = params.iter().collect();

        // Assert
        assert_eq!(query.encode(), "=x");
    }

    #[test]
    fn test_values_use_display() {
        // Arrange & Act
        let flag = QueryParam::single("include_adult", false);
        let score = QueryParam::single("vote_average.gte", 7.5);
        let ids = QueryParam::multi("ids", [1_u64, 2]);

        // Assert
        assert_eq!(
            flag,
            QueryParam::Single {
                key: String::from("include_adult"),
                value: String::from("false"),
            }
        );
        assert_eq!(score.key(), "vote_average.gte");
        assert_eq!(
            ids,
            QueryParam::Multi {
                key: String::from("ids"),
                values: vec![String::from("1"), String::from("2")],
            }
        );
    }

    #[test]
    fn test_encode_escapes_and_sorts_keys() {
        // Arrange
        let params = [
            QueryParam::single("with_status", "2|3"),
            QueryParam::single("query", "spy family"),
            QueryParam::single("language", "ja-JP"),
        ];

        // Act
        let query: QueryValues = params.iter().collect();

        // Assert
        assert_eq!(
            query.encode(),
            "language=ja-JP&query=spy+family&with_status=2%7C3"
        );
    }

    #[test]
    fn test_get_missing_key() {
        // Arrange
        let query = QueryValues::new();

        // Act & Assert
        assert_eq!(query.get("page"), None);
        assert!(query.get_all("page").is_empty());
    }
}
