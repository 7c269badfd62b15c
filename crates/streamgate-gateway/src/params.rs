use std::collections::BTreeMap;

/// Raw request parameters: an ordered multimap over parameter names.
///
/// Distinguishes a name that never appeared (`contains` is `false`) from one
/// that appeared with an empty value list, which matters for the optional
/// filter lists of `get_stream_publishers` / `get_stream_keys`. Built from
/// decoded query pairs by the HTTP layer, or assembled directly by embedders
/// and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawParams {
    entries: BTreeMap<String, Vec<String>>,
}

impl RawParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect decoded `name=value` pairs, preserving duplicates as list
    /// entries.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = Self::new();
        for (name, value) in pairs {
            params.push(name, value);
        }
        params
    }

    /// Append one value under `name`.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(name.into()).or_default().push(value.into());
    }

    /// Replace the value list under `name`. An empty `values` records the
    /// name as present with no values.
    pub fn set_list(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.entries.insert(name.into(), values);
    }

    /// `true` when no parameter was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Explicit existence check, independent of value truthiness.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// First value recorded under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values recorded under `name`; empty when absent.
    pub fn values(&self, name: &str) -> &[String] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_vs_present_but_empty() {
        let mut params = RawParams::new();
        assert!(!params.contains("keys[]"));

        params.set_list("keys[]", vec![]);
        assert!(params.contains("keys[]"));
        assert!(params.values("keys[]").is_empty());
        assert_eq!(params.get("keys[]"), None);
    }

    #[test]
    fn duplicate_names_accumulate() {
        let params = RawParams::from_pairs([("keys[]", "a"), ("keys[]", "b"), ("verbose", "true")]);
        assert_eq!(params.values("keys[]"), ["a", "b"]);
        assert_eq!(params.get("keys[]"), Some("a"));
        assert_eq!(params.get("verbose"), Some("true"));
    }

    #[test]
    fn empty_request_detection() {
        assert!(RawParams::new().is_empty());
        assert!(!RawParams::from_pairs([("a", "1")]).is_empty());
    }
}
