//! Ordered collections of selectable choices.

use super::codec::{self, MAX_CODES};
use crate::error::{AppError, Result};
use std::collections::HashSet;

/// The choices shown by one menu, in display order.
///
/// Display order is also letter assignment order: the first option is `a`, the
/// second `b`, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionSet {
    /// Semantic keys with separate descriptions. Selecting yields the key.
    FromMap(Vec<(String, String)>),
    /// Plain values used as both key and description. Selecting yields the value.
    FromList(Vec<String>),
}

impl OptionSet {
    /// Builds an option set from `(key, description)` pairs.
    ///
    /// # Errors
    ///
    /// `AppError::DuplicateOption` if a key repeats, `AppError::TooManyOptions` if
    /// there are more options than letter codes.
    pub fn from_map<I, K, D>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, D)>,
        K: Into<String>,
        D: Into<String>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(k, d)| (k.into(), d.into()))
            .collect();
        validate(pairs.iter().map(|(k, _)| k.as_str()))?;
        Ok(OptionSet::FromMap(pairs))
    }

    /// Builds an option set from plain values.
    ///
    /// # Errors
    ///
    /// Same as [`OptionSet::from_map`].
    pub fn from_list<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        validate(values.iter().map(String::as_str))?;
        Ok(OptionSet::FromList(values))
    }

    pub fn len(&self) -> usize {
        match self {
            OptionSet::FromMap(pairs) => pairs.len(),
            OptionSet::FromList(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The key returned when the option at `index` is selected.
    pub fn key(&self, index: usize) -> Option<&str> {
        match self {
            OptionSet::FromMap(pairs) => pairs.get(index).map(|(k, _)| k.as_str()),
            OptionSet::FromList(values) => values.get(index).map(String::as_str),
        }
    }

    /// The text shown for the option at `index`.
    pub fn description(&self, index: usize) -> Option<&str> {
        match self {
            OptionSet::FromMap(pairs) => pairs.get(index).map(|(_, d)| d.as_str()),
            OptionSet::FromList(values) => values.get(index).map(String::as_str),
        }
    }

    /// Menu lines, `<code>) <description>`, in display order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.len()).filter_map(move |i| {
            let code = codec::encode(i)?;
            let description = self.description(i)?;
            Some(format!("{code}) {description}"))
        })
    }

    /// Resolves a letter code to the key of the option it labels.
    pub fn resolve(&self, code: &str) -> Option<&str> {
        codec::decode(code).and_then(|i| self.key(i))
    }
}

fn validate<'a>(keys: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(AppError::DuplicateOption(key.to_string()));
        }
    }
    if seen.len() > MAX_CODES {
        return Err(AppError::TooManyOptions(seen.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_resolves_to_key() {
        let set = OptionSet::from_map([
            ("createUser", "Create a new user"),
            ("deleteUser", "Delete a user"),
        ])
        .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.resolve("a"), Some("createUser"));
        assert_eq!(set.resolve("b"), Some("deleteUser"));
        assert_eq!(set.resolve("c"), None);
        assert_eq!(set.description(1), Some("Delete a user"));
    }

    #[test]
    fn test_list_resolves_to_value() {
        let set = OptionSet::from_list(["red", "green"]).unwrap();
        assert_eq!(set.resolve("b"), Some("green"));
        assert_eq!(set.description(0), Some("red"));
    }

    #[test]
    fn test_lines_follow_insertion_order() {
        let set = OptionSet::from_map([("z", "last letter"), ("a", "first letter")]).unwrap();
        let lines: Vec<String> = set.lines().collect();
        assert_eq!(lines, vec!["a) last letter", "b) first letter"]);
    }

    #[test]
    fn test_two_letter_lines() {
        let set = OptionSet::from_list((0..28).map(|i| format!("opt{i}"))).unwrap();
        let lines: Vec<String> = set.lines().collect();
        assert_eq!(lines[25], "z) opt25");
        assert_eq!(lines[26], "ba) opt26");
        assert_eq!(set.resolve("bb"), Some("opt27"));
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let err = OptionSet::from_list(["x", "y", "x"]).unwrap_err();
        assert!(matches!(err, AppError::DuplicateOption(k) if k == "x"));

        let err = OptionSet::from_map([("k", "one"), ("k", "two")]).unwrap_err();
        assert!(matches!(err, AppError::DuplicateOption(_)));
    }

    #[test]
    fn test_too_many_options_rejected() {
        let err = OptionSet::from_list((0..=MAX_CODES).map(|i| i.to_string())).unwrap_err();
        assert!(matches!(err, AppError::TooManyOptions(n) if n == MAX_CODES + 1));
        assert!(OptionSet::from_list((0..MAX_CODES).map(|i| i.to_string())).is_ok());
    }

    #[test]
    fn test_empty_set() {
        let set = OptionSet::from_list(Vec::<String>::new()).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.resolve("a"), None);
    }
}
