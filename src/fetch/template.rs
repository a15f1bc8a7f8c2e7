//! Request blueprint: a URL plus ordered `(key, value)` parameters.

/// A request blueprint. Holds the target URL and the parameters to send,
/// in insertion order.
///
/// Parameter order is preserved on the wire: GET sends them as query
/// parameters, POST as a url-encoded form body, both in the order they
/// were pushed.
///
/// Every value is owned, so `clone()` yields a structurally independent
/// copy: mutating the clone's parameters never touches the original. The
/// fetch layer relies on this and clones the template before every send,
/// which is the only defense against shared-mutable-state bugs should two
/// requests ever be built from the same base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTemplate {
    url: String,
    params: Vec<(String, String)>,
}

impl RequestTemplate {
    /// A template for `url` with no parameters.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: Vec::new(),
        }
    }

    /// Builder-style parameter append.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_param(key, value);
        self
    }

    /// Append a parameter, keeping insertion order.
    pub fn push_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.push((key.into(), value.into()));
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_is_structurally_independent() {
        let base = RequestTemplate::new("https://example.com").with_param("q", "rust");

        let mut cloned = base.clone();
        cloned.push_param("page", "2");

        assert_eq!(base.params().len(), 1);
        assert_eq!(cloned.params().len(), 2);
        assert_eq!(base.params()[0], ("q".to_string(), "rust".to_string()));
    }

    #[test]
    fn test_params_keep_insertion_order() {
        let t = RequestTemplate::new("https://example.com")
            .with_param("b", "2")
            .with_param("a", "1")
            .with_param("c", "3");

        let keys: Vec<&str> = t.params().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_duplicate_keys_are_allowed() {
        let t = RequestTemplate::new("https://example.com")
            .with_param("q", "first")
            .with_param("q", "second");
        assert_eq!(t.params().len(), 2);
    }
}
