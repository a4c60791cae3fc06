use std::collections::{BTreeMap, HashMap};

/// A string-keyed, multi-valued source of query parameters.
///
/// This is the seam to whatever transport carries the paging parameters
/// (an HTTP query string, a CLI, a message header). Implementations only
/// have to hand out raw values; parsing happens on the consuming side.
///
/// # Example
/// ```
/// use pageable_api::query::QuerySource;
///
/// let query = vec![("sort", "name,asc"), ("page", "2"), ("sort", "age,desc")];
/// assert_eq!(query.param("page"), Some("2"));
/// assert_eq!(query.param_values("sort"), vec!["name,asc", "age,desc"]);
/// assert!(query.param("size").is_none());
/// ```
pub trait QuerySource {
    /// All values recorded for `key`, in query order. Empty when the key is absent.
    fn param_values(&self, key: &str) -> Vec<&str>;

    /// The first value recorded for `key`
    fn param(&self, key: &str) -> Option<&str> {
        self.param_values(key).into_iter().next()
    }

    fn has_param(&self, key: &str) -> bool {
        !self.param_values(key).is_empty()
    }
}

impl<S: std::hash::BuildHasher> QuerySource for HashMap<String, Vec<String>, S> {
    fn param_values(&self, key: &str) -> Vec<&str> {
        self.get(key)
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

impl QuerySource for BTreeMap<String, Vec<String>> {
    fn param_values(&self, key: &str) -> Vec<&str> {
        self.get(key)
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> QuerySource for [(K, V)] {
    fn param_values(&self, key: &str) -> Vec<&str> {
        self.iter()
            .filter(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
            .collect()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> QuerySource for Vec<(K, V)> {
    fn param_values(&self, key: &str) -> Vec<&str> {
        self.as_slice().param_values(key)
    }
}

impl<Q: QuerySource + ?Sized> QuerySource for &Q {
    fn param_values(&self, key: &str) -> Vec<&str> {
        (**self).param_values(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_keep_query_order() {
        let query = vec![("sort", "b"), ("page", "1"), ("sort", "a")];
        assert_eq!(query.param_values("sort"), vec!["b", "a"]);
        assert_eq!(query.param("sort"), Some("b"));
        assert!(query.has_param("page"));
        assert!(!query.has_param("size"));
    }

    #[test]
    fn test_hash_map_source() {
        let mut query: HashMap<String, Vec<String>> = HashMap::new();
        query.insert("sort".into(), vec!["name,asc".into(), "age,desc".into()]);
        query.insert("page".into(), vec!["3".into()]);

        assert_eq!(query.param("page"), Some("3"));
        assert_eq!(query.param_values("sort"), vec!["name,asc", "age,desc"]);
        assert!(query.param_values("size").is_empty());
        assert_eq!(query.param("size"), None);
    }

    #[test]
    fn test_btree_map_source() {
        let mut query: BTreeMap<String, Vec<String>> = BTreeMap::new();
        query.insert("size".into(), vec!["20".into()]);
        assert_eq!(query.param("size"), Some("20"));
        assert!(!query.has_param("page"));
    }

    #[test]
    fn test_owned_pairs_and_references() {
        let query: Vec<(String, String)> = vec![("page".into(), "7".into())];
        let borrowed = &query;
        assert_eq!(borrowed.param("page"), Some("7"));
    }

    #[test]
    fn test_present_but_empty_value() {
        let query = vec![("page", "")];
        assert!(query.has_param("page"));
        assert_eq!(query.param("page"), Some(""));
    }
}
