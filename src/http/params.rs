//! Ordered query and form parameters.

use url::form_urlencoded;

/// A single parameter value: a scalar or a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Scalar(String),
    List(Vec<String>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Scalar(value.clone())
    }
}

impl<T: Into<String>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::List(values.into_iter().map(Into::into).collect())
    }
}

macro_rules! scalar_from_display {
    ($($t:ty),*) => {
        $(impl From<$t> for ParamValue {
            fn from(value: $t) -> Self {
                ParamValue::Scalar(value.to_string())
            }
        })*
    };
}

scalar_from_display!(i32, i64, u32, u64, usize);

/// Booleans go on the wire as `1` / `0`.
impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Scalar(if value { "1" } else { "0" }.to_string())
    }
}

/// Form-encode a string, also escaping `*`, which `form_urlencoded` leaves bare.
pub(crate) fn encode_component(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('*', "%2A")
}

/// Insertion-ordered parameter map.
///
/// Keys are unique; setting an existing key replaces its value in place.
/// Lists encode as `key[0]=a&key[1]=b`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            match value {
                ParamValue::Scalar(v) => {
                    serializer.append_pair(key, v);
                }
                ParamValue::List(items) => {
                    for (i, item) in items.iter().enumerate() {
                        serializer.append_pair(&format!("{key}[{i}]"), item);
                    }
                }
            }
        }
        serializer.finish().replace('*', "%2A")
    }

    /// JSON object rendering, used for trace logging.
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .pairs
            .iter()
            .map(|(k, v)| {
                let value = match v {
                    ParamValue::Scalar(s) => serde_json::Value::String(s.clone()),
                    ParamValue::List(items) => items.clone().into(),
                };
                (k.clone(), value)
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_scalars_in_order() {
        let params = Params::new().with("q", "rust lang").with("page", 2);
        assert_eq!(params.encode(), "q=rust+lang&page=2");
    }

    #[test]
    fn test_encode_lists_with_indexed_keys() {
        let params = Params::new().with("ids", vec!["7", "9"]);
        assert_eq!(params.encode(), "ids%5B0%5D=7&ids%5B1%5D=9");
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut params: Params = [("a", "1"), ("b", "2")].into_iter().collect();
        params.insert("a", "3");
        assert_eq!(params.len(), 2);
        assert_eq!(params.encode(), "a=3&b=2");
        assert_eq!(params.get("a"), Some(&ParamValue::Scalar("3".into())));
    }

    #[test]
    fn test_encode_booleans_as_digits() {
        let params = Params::new().with("active", true).with("off", false);
        assert_eq!(params.encode(), "active=1&off=0");
    }

    #[test]
    fn test_encode_escapes_asterisk() {
        let params = Params::new().with("pat", "a*b~c");
        assert_eq!(params.encode(), "pat=a%2Ab%7Ec");
        assert_eq!(encode_component("x*y z"), "x%2Ay+z");
    }

    #[test]
    fn test_empty_encodes_to_empty_string() {
        assert!(Params::new().is_empty());
        assert_eq!(Params::new().encode(), "");
    }

    #[test]
    fn test_to_json() {
        let params = Params::new().with("name", "a&b").with("tags", vec!["x"]);
        assert_eq!(
            params.to_json(),
            serde_json::json!({"name": "a&b", "tags": ["x"]})
        );
    }
}
