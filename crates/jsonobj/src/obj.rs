//! Object wrapper over a native JSON mapping.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AccessError;
use crate::wrap::{unwrap, wrap_ref, Wrap, WrapRef};

/// Wrapper over a JSON object, providing explicit property-style access.
///
/// Owns a single [`Map<String, Value>`] and keeps the unwrap boundary: no
/// wrapper is ever stored inside the map — [`set`](JsonObj::set) unwraps on
/// the way in, [`get`](JsonObj::get) wraps on the way out. The map is
/// insertion-ordered, so key order survives read/modify/write round trips.
///
/// # Example
///
/// ```
/// use jsonobj::{wrap, Wrap};
/// use serde_json::json;
///
/// let Wrap::Obj(mut obj) = wrap(json!({"key": "value"})) else {
///     unreachable!()
/// };
/// assert_eq!(obj.get("key").unwrap(), json!("value"));
///
/// obj.set("foo", json!("bar"));
/// assert!(obj.contains("foo"));
///
/// obj.delete("foo").unwrap();
/// assert_eq!(obj.to_string(), r#"{"key":"value"}"#);
/// ```
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonObj {
    map: Map<String, Value>,
}

impl JsonObj {
    /// Create an empty object wrapper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys in the underlying map.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether `name` is a key in the underlying map. Does not touch the value.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Iterate over the keys in insertion order.
    ///
    /// The iterator is lazy and restartable: call `keys()` again for a fresh
    /// pass. Values are not touched.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.map.keys().map(String::as_str)
    }

    /// Read the property `name`, wrapped.
    ///
    /// Returns a borrowed [`WrapRef`] view of the stored value.
    ///
    /// # Errors
    ///
    /// [`AccessError::NoSuchKey`] if the key is absent.
    pub fn get(&self, name: &str) -> Result<WrapRef<'_>, AccessError> {
        self.map
            .get(name)
            .map(wrap_ref)
            .ok_or_else(|| AccessError::NoSuchKey(name.to_owned()))
    }

    /// Mutable access to the native value stored under `name`, for nested
    /// in-place edits.
    ///
    /// # Errors
    ///
    /// [`AccessError::NoSuchKey`] if the key is absent.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Value, AccessError> {
        self.map
            .get_mut(name)
            .ok_or_else(|| AccessError::NoSuchKey(name.to_owned()))
    }

    /// Set the property `name`, storing the unwrapped value.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Wrap>) {
        self.map.insert(name.into(), unwrap(value.into()));
    }

    /// Delete the property `name`, returning the native value that was
    /// stored. The remaining keys keep their insertion order.
    ///
    /// # Errors
    ///
    /// [`AccessError::NoSuchKey`] if the key is absent.
    pub fn delete(&mut self, name: &str) -> Result<Value, AccessError> {
        self.map
            .shift_remove(name)
            .ok_or_else(|| AccessError::NoSuchKey(name.to_owned()))
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.map
    }

    /// Mutably borrow the underlying map.
    pub fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.map
    }

    /// Consume the wrapper, returning the underlying map.
    pub fn into_map(self) -> Map<String, Value> {
        self.map
    }

    /// Read-only view of this wrapper.
    pub fn view(&self) -> ObjRef<'_> {
        ObjRef { map: &self.map }
    }
}

impl From<Map<String, Value>> for JsonObj {
    fn from(map: Map<String, Value>) -> Self {
        Self { map }
    }
}

impl From<JsonObj> for Value {
    fn from(obj: JsonObj) -> Self {
        Value::Object(obj.map)
    }
}

impl PartialEq<Map<String, Value>> for JsonObj {
    fn eq(&self, other: &Map<String, Value>) -> bool {
        self.map == *other
    }
}

impl PartialEq<Value> for JsonObj {
    fn eq(&self, other: &Value) -> bool {
        match other {
            Value::Object(map) => self.map == *map,
            _ => false,
        }
    }
}

impl PartialEq<JsonObj> for Value {
    fn eq(&self, other: &JsonObj) -> bool {
        other == self
    }
}

/// Missing keys panic with the key named; use [`JsonObj::get`] for a
/// fallible read.
impl Index<&str> for JsonObj {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        self.map
            .get(name)
            .unwrap_or_else(|| panic!("no such key: {name:?}"))
    }
}

impl fmt::Debug for JsonObj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("JsonObj").field(&self.map).finish()
    }
}

/// The JSON text encoding of the underlying map, in the codec's default
/// (compact) spacing.
impl fmt::Display for JsonObj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(&self.map).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

/// Read-only borrowed view of a JSON object, produced by reads that land on
/// a nested object. Aliases the owner's storage; `Copy`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjRef<'a> {
    pub(crate) map: &'a Map<String, Value>,
}

impl<'a> ObjRef<'a> {
    pub fn len(self) -> usize {
        self.map.len()
    }

    pub fn is_empty(self) -> bool {
        self.map.is_empty()
    }

    pub fn contains(self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn keys(self) -> impl Iterator<Item = &'a str> {
        self.map.keys().map(String::as_str)
    }

    /// Read the property `name`, wrapped. See [`JsonObj::get`].
    pub fn get(self, name: &str) -> Result<WrapRef<'a>, AccessError> {
        self.map
            .get(name)
            .map(wrap_ref)
            .ok_or_else(|| AccessError::NoSuchKey(name.to_owned()))
    }

    pub fn as_map(self) -> &'a Map<String, Value> {
        self.map
    }
}

impl PartialEq<Map<String, Value>> for ObjRef<'_> {
    fn eq(&self, other: &Map<String, Value>) -> bool {
        *self.map == *other
    }
}

impl PartialEq<Value> for ObjRef<'_> {
    fn eq(&self, other: &Value) -> bool {
        match other {
            Value::Object(map) => *self.map == *map,
            _ => false,
        }
    }
}

impl PartialEq<ObjRef<'_>> for Value {
    fn eq(&self, other: &ObjRef<'_>) -> bool {
        other == self
    }
}

impl PartialEq<JsonObj> for ObjRef<'_> {
    fn eq(&self, other: &JsonObj) -> bool {
        *self.map == other.map
    }
}

impl PartialEq<ObjRef<'_>> for JsonObj {
    fn eq(&self, other: &ObjRef<'_>) -> bool {
        self.map == *other.map
    }
}

impl fmt::Display for ObjRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self.map).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrap::wrap;
    use serde_json::json;

    fn sample() -> JsonObj {
        let Wrap::Obj(obj) = wrap(json!({"key1": "value1", "key2": {"foo": "bar"}})) else {
            panic!("expected object")
        };
        obj
    }

    #[test]
    fn test_get_wraps_nested_object() {
        let obj = sample();
        let nested = obj.get("key2").unwrap();
        assert!(matches!(nested, WrapRef::Obj(_)));
        assert_eq!(nested, json!({"foo": "bar"}));
        assert_eq!(
            nested.as_obj().unwrap().get("foo").unwrap(),
            json!("bar")
        );
    }

    #[test]
    fn test_get_missing_key() {
        let obj = sample();
        assert_eq!(
            obj.get("missing"),
            Err(AccessError::NoSuchKey("missing".to_string()))
        );
    }

    #[test]
    fn test_set_unwraps_at_boundary() {
        let mut obj = JsonObj::new();
        let Wrap::Obj(inner) = wrap(json!({"foo": "bar"})) else {
            panic!()
        };
        obj.set("nested", inner);
        // Stored form is native, not a wrapper.
        assert!(matches!(obj.as_map().get("nested"), Some(Value::Object(_))));
        assert_eq!(obj, json!({"nested": {"foo": "bar"}}));
    }

    #[test]
    fn test_set_keeps_insertion_order() {
        let mut obj = sample();
        obj.set("key1", json!("replaced"));
        obj.set("key3", json!(3));
        let keys: Vec<&str> = obj.keys().collect();
        assert_eq!(keys, ["key1", "key2", "key3"]);
    }

    #[test]
    fn test_delete() {
        let mut obj = sample();
        assert_eq!(obj.delete("key1").unwrap(), json!("value1"));
        assert!(!obj.contains("key1"));
        assert_eq!(obj.len(), 1);
        assert_eq!(
            obj.delete("key1"),
            Err(AccessError::NoSuchKey("key1".to_string()))
        );
    }

    #[test]
    fn test_delete_keeps_order_of_remaining_keys() {
        let Wrap::Obj(mut obj) = wrap(json!({"a": 1, "b": 2, "c": 3})) else {
            panic!()
        };
        obj.delete("a").unwrap();
        let keys: Vec<&str> = obj.keys().collect();
        assert_eq!(keys, ["b", "c"]);
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut obj = sample();
        *obj.get_mut("key1").unwrap() = json!("changed");
        assert_eq!(obj.get("key1").unwrap(), json!("changed"));
        assert!(obj.get_mut("nope").is_err());
    }

    #[test]
    fn test_equality_against_native_and_wrapper() {
        let obj = sample();
        let same = json!({"key1": "value1", "key2": {"foo": "bar"}});
        assert_eq!(obj, same);
        assert_eq!(obj, sample());
        assert_ne!(obj, json!({"key1": "value1"}));
        assert_ne!(obj, json!(["key1"]));
    }

    #[test]
    fn test_debug_embeds_map_repr() {
        let Wrap::Obj(obj) = wrap(json!({"k": "v"})) else { panic!() };
        assert_eq!(format!("{obj:?}"), format!("JsonObj({:?})", obj.as_map()));
    }

    #[test]
    fn test_display_is_codec_default() {
        let obj = sample();
        assert_eq!(obj.to_string(), r#"{"key1":"value1","key2":{"foo":"bar"}}"#);
    }

    #[test]
    fn test_index_sugar() {
        let obj = sample();
        assert_eq!(obj["key1"], json!("value1"));
    }

    #[test]
    #[should_panic(expected = "no such key")]
    fn test_index_sugar_panics_on_missing() {
        let _ = &sample()["missing"];
    }

    #[test]
    fn test_obj_ref_matches_owner() {
        let obj = sample();
        let view = obj.view();
        assert_eq!(view.len(), 2);
        assert!(view.contains("key2"));
        assert_eq!(view, obj);
        assert_eq!(view.keys().collect::<Vec<_>>(), ["key1", "key2"]);
        assert_eq!(view.to_string(), obj.to_string());
    }
}
