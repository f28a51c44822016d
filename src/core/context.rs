//! Per-call contextual data
//!
//! A [`Context`] is an insertion-ordered map of JSON values plus an optional
//! [`ExceptionInfo`] slot.

use super::exception::ExceptionInfo;
use super::json;
use serde::Serialize;
use serde_json::{Map, Value};

/// Stored in place of a value the JSON encoder rejects.
pub const UNSERIALIZABLE: &str = "<unserializable>";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    fields: Map<String, Value>,
    exception: Option<ExceptionInfo>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field (builder form)
    ///
    /// ```
    /// use rust_channel_logger::Context;
    ///
    /// let ctx = Context::new()
    ///     .with_field("key1", "value1")
    ///     .with_field("key2", 6);
    /// assert_eq!(ctx.to_json(), r#"{"key1":"value1","key2":6}"#);
    /// ```
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Serialize,
    {
        self.insert(key, value);
        self
    }

    /// Add a field (mutable form)
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Serialize,
    {
        let value =
            serde_json::to_value(value).unwrap_or_else(|_| Value::String(UNSERIALIZABLE.into()));
        self.fields.insert(key.into(), value);
    }

    #[must_use]
    pub fn with_exception(mut self, exception: ExceptionInfo) -> Self {
        self.exception = Some(exception);
        self
    }

    pub fn set_exception(&mut self, exception: ExceptionInfo) {
        self.exception = Some(exception);
    }

    pub fn exception(&self) -> Option<&ExceptionInfo> {
        self.exception.as_ref()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// True when there are no data fields (the exception slot is not counted)
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// The data fields as compact JSON, `{}` when empty
    pub fn to_json(&self) -> String {
        if self.fields.is_empty() {
            return "{}".to_string();
        }
        // A Map of Values cannot fail to encode.
        json::to_string(&self.fields).unwrap_or_else(|_| "{}".to_string())
    }
}

impl<K: Into<String>, V: Serialize> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Context::new();
        for (key, value) in iter {
            context.insert(key, value);
        }
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use std::collections::BTreeMap;

    struct Opaque;

    impl Serialize for Opaque {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("opaque handle"))
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let ctx = Context::new()
            .with_field("zeta", 1)
            .with_field("alpha", 2)
            .with_field("mid", 3);
        assert_eq!(ctx.to_json(), r#"{"zeta":1,"alpha":2,"mid":3}"#);
    }

    #[test]
    fn test_empty_context() {
        assert_eq!(Context::new().to_json(), "{}");
        let ctx = Context::new().with_exception(ExceptionInfo::new("x"));
        assert!(ctx.is_empty());
        assert_eq!(ctx.to_json(), "{}");
    }

    #[test]
    fn test_slashes_unescaped() {
        let ctx = Context::new().with_field("url", "https://example.com/a/b");
        assert_eq!(ctx.to_json(), r#"{"url":"https://example.com/a/b"}"#);
    }

    #[test]
    fn test_non_ascii_escaped() {
        let ctx = Context::new()
            .with_field("name", "café")
            .with_field("mood", "🎉");
        assert_eq!(
            ctx.to_json(),
            r#"{"name":"caf\u00e9","mood":"\ud83c\udf89"}"#
        );
    }

    #[test]
    fn test_nested_values() {
        let mut nested = BTreeMap::new();
        nested.insert("retries", 3);
        let ctx = Context::new()
            .with_field("request", nested)
            .with_field("tags", vec!["a", "b"]);
        assert_eq!(ctx.to_json(), r#"{"request":{"retries":3},"tags":["a","b"]}"#);
    }

    #[test]
    fn test_unserializable_value_is_replaced() {
        let ctx = Context::new()
            .with_field("handle", Opaque)
            .with_field("ok", true);
        assert_eq!(
            ctx.get("handle"),
            Some(&Value::String(UNSERIALIZABLE.to_string()))
        );
        assert_eq!(ctx.to_json(), r#"{"handle":"<unserializable>","ok":true}"#);
    }

    #[test]
    fn test_from_iterator() {
        let ctx: Context = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.get("b"), Some(&Value::from(2)));
    }
}
