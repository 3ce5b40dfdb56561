use std::fmt;

/// Parsed page query string, kept in the order the parameters appeared.
///
/// This is the persisted view state: every filter and the active sort live
/// here and nowhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `a=1&b=two%20words`, with or without a leading `?`.
    ///
    /// `+` decodes to a space. Pairs that fail to percent-decode are kept
    /// verbatim rather than dropped.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let (key, value) = part.split_once('=').unwrap_or((part, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();
        Self { pairs }
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            pairs: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// First value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces the first occurrence of `key` in place and drops any duplicates,
    /// or appends when the key is new.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.pairs[index].1 = value;
                let mut seen = false;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Encoded form without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_and_decodes() {
        let q = QueryParams::parse("?position=RB&opponent=KC&name=Patrick+Mahomes&x=a%26b");
        assert_eq!(q.get("position"), Some("RB"));
        assert_eq!(q.get("opponent"), Some("KC"));
        assert_eq!(q.get("name"), Some("Patrick Mahomes"));
        assert_eq!(q.get("x"), Some("a&b"));
        assert_eq!(q.get("missing"), None);
    }

    #[test]
    fn bare_keys_have_empty_values() {
        let q = QueryParams::parse("flag&a=1&&");
        assert_eq!(q.get("flag"), Some(""));
        assert_eq!(q.pairs().len(), 2);
    }

    #[test]
    fn set_replaces_in_place_and_drops_duplicates() {
        let mut q = QueryParams::parse("a=1&b=2&a=3");
        q.set("a", "9");
        assert_eq!(q.to_query_string(), "a=9&b=2");
        q.set("c", "x y");
        assert_eq!(q.to_query_string(), "a=9&b=2&c=x%20y");
    }

    #[test]
    fn remove_drops_every_occurrence() {
        let mut q = QueryParams::parse("a=1&b=2&a=3");
        q.remove("a");
        assert_eq!(q.to_query_string(), "b=2");
        assert_eq!(q.get("a"), None);
    }

    #[test]
    fn empty_query() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
        assert_eq!(QueryParams::new().to_string(), "");
    }
}
