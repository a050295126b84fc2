//! Anchor attribute map
//!
//! Holds the attributes of one `<a>` element in document order. Names are
//! stored lowercased so lookups are case-insensitive; values are kept as the
//! HTML tokenizer reported them.

/// Attributes of one HTML anchor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorAttributes {
    attrs: Vec<(String, String)>,
}

impl AnchorAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut anchor = Self::new();
        for (name, value) in pairs {
            anchor.push(name.as_ref(), value.into());
        }
        anchor
    }

    /// Append an attribute. A repeated name keeps the first value for lookup.
    fn push(&mut self, name: &str, value: String) {
        self.attrs.push((name.to_ascii_lowercase(), value));
    }

    /// Get an attribute value by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing the first occurrence in place or appending.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
            Some((_, v)) => *v = value,
            None => self.push(name, value),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn href(&self) -> Option<&str> {
        self.get("href")
    }

    pub fn target(&self) -> Option<&str> {
        self.get("target")
    }

    pub fn rel(&self) -> Option<&str> {
        self.get("rel")
    }

    pub fn class(&self) -> Option<&str> {
        self.get("class")
    }

    /// Class names on the anchor.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class().unwrap_or("").split_ascii_whitespace()
    }

    /// Tokens of the `rel` attribute.
    pub fn rel_tokens(&self) -> impl Iterator<Item = &str> {
        self.rel().unwrap_or("").split_ascii_whitespace()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}
