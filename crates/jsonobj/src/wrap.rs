//! Conversion between native `serde_json` values and the wrapper types.
//!
//! [`wrap`] and [`unwrap`] translate the *outermost* level only, by moving
//! the container — never by copying. Nested containers stay native inside
//! the wrapper's storage and are re-wrapped lazily on each read, as
//! borrowed [`WrapRef`] views produced by [`wrap_ref`].

use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::Value;

use crate::arr::{ArrRef, JsonArr};
use crate::obj::{JsonObj, ObjRef};

/// A wrapped JSON value: an object wrapper, an array wrapper, or a scalar.
///
/// Produced by [`wrap`]; consumed by [`unwrap`]. The `Value` arm only ever
/// holds a scalar (null, bool, number, string) because `wrap` sends
/// containers to the other two arms.
#[derive(Debug, Clone, PartialEq)]
pub enum Wrap {
    Obj(JsonObj),
    Arr(JsonArr),
    Value(Value),
}

/// Wrap a native value, converting the outermost level only.
///
/// Objects become [`JsonObj`], arrays become [`JsonArr`], scalars pass
/// through unchanged. The container is moved into the wrapper, not copied;
/// nested containers remain native until accessed.
///
/// # Example
///
/// ```
/// use jsonobj::{wrap, Wrap};
/// use serde_json::json;
///
/// assert!(matches!(wrap(json!({"key": "value"})), Wrap::Obj(_)));
/// assert!(matches!(wrap(json!(["foo", "bar"])), Wrap::Arr(_)));
/// assert!(matches!(wrap(json!(42)), Wrap::Value(_)));
/// ```
pub fn wrap(value: Value) -> Wrap {
    match value {
        Value::Object(map) => Wrap::Obj(JsonObj::from(map)),
        Value::Array(seq) => Wrap::Arr(JsonArr::from(seq)),
        other => Wrap::Value(other),
    }
}

/// Unwrap back to a native value, moving the underlying container out.
///
/// Inverse of [`wrap`]: `unwrap(wrap(v))` returns the very same allocation
/// that went in. Scalars pass through unchanged.
///
/// # Example
///
/// ```
/// use jsonobj::{unwrap, wrap};
/// use serde_json::json;
///
/// let value = json!({"key": "value"});
/// assert_eq!(unwrap(wrap(value.clone())), value);
/// ```
pub fn unwrap(value: Wrap) -> Value {
    match value {
        Wrap::Obj(obj) => Value::Object(obj.into_map()),
        Wrap::Arr(arr) => Value::Array(arr.into_vec()),
        Wrap::Value(v) => v,
    }
}

/// Wrap a borrowed value into a read-only [`WrapRef`] view.
///
/// This is the read-path counterpart of [`wrap`]: it aliases the value
/// instead of taking ownership, so reading through a wrapper never copies.
pub fn wrap_ref(value: &Value) -> WrapRef<'_> {
    match value {
        Value::Object(map) => WrapRef::Obj(ObjRef { map }),
        Value::Array(seq) => WrapRef::Arr(ArrRef {
            seq: seq.as_slice(),
        }),
        other => WrapRef::Value(other),
    }
}

impl Wrap {
    /// Borrow the object wrapper, if this is one.
    pub fn as_obj(&self) -> Option<&JsonObj> {
        match self {
            Wrap::Obj(obj) => Some(obj),
            _ => None,
        }
    }

    /// Borrow the array wrapper, if this is one.
    pub fn as_arr(&self) -> Option<&JsonArr> {
        match self {
            Wrap::Arr(arr) => Some(arr),
            _ => None,
        }
    }

    /// Borrow the scalar, if this is one.
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Wrap::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Value> for Wrap {
    fn from(value: Value) -> Self {
        wrap(value)
    }
}

impl From<JsonObj> for Wrap {
    fn from(obj: JsonObj) -> Self {
        Wrap::Obj(obj)
    }
}

impl From<JsonArr> for Wrap {
    fn from(arr: JsonArr) -> Self {
        Wrap::Arr(arr)
    }
}

impl From<Wrap> for Value {
    fn from(value: Wrap) -> Self {
        unwrap(value)
    }
}

impl PartialEq<Value> for Wrap {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Wrap::Obj(obj), Value::Object(map)) => obj.as_map() == map,
            (Wrap::Arr(arr), Value::Array(seq)) => arr.as_vec() == seq,
            (Wrap::Value(v), other) => v == other,
            _ => false,
        }
    }
}

impl PartialEq<Wrap> for Value {
    fn eq(&self, other: &Wrap) -> bool {
        other == self
    }
}

impl Serialize for Wrap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Wrap::Obj(obj) => obj.serialize(serializer),
            Wrap::Arr(arr) => arr.serialize(serializer),
            Wrap::Value(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Wrap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(wrap)
    }
}

impl fmt::Display for Wrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wrap::Obj(obj) => fmt::Display::fmt(obj, f),
            Wrap::Arr(arr) => fmt::Display::fmt(arr, f),
            Wrap::Value(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// Borrowed, lazily-wrapped view of a stored value.
///
/// Every read out of a wrapper produces one of these: containers come back
/// as [`ObjRef`]/[`ArrRef`] views that alias the owner's storage, scalars
/// come back as a plain borrow. `Copy`, so views are free to pass around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WrapRef<'a> {
    Obj(ObjRef<'a>),
    Arr(ArrRef<'a>),
    Value(&'a Value),
}

impl<'a> WrapRef<'a> {
    /// The object view, if this is one.
    pub fn as_obj(self) -> Option<ObjRef<'a>> {
        match self {
            WrapRef::Obj(obj) => Some(obj),
            _ => None,
        }
    }

    /// The array view, if this is one.
    pub fn as_arr(self) -> Option<ArrRef<'a>> {
        match self {
            WrapRef::Arr(arr) => Some(arr),
            _ => None,
        }
    }

    /// The borrowed scalar, if this is one.
    pub fn as_scalar(self) -> Option<&'a Value> {
        match self {
            WrapRef::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Clone the viewed value back into an owned native [`Value`].
    pub fn to_value(self) -> Value {
        match self {
            WrapRef::Obj(obj) => Value::Object(obj.map.clone()),
            WrapRef::Arr(arr) => Value::Array(arr.seq.to_vec()),
            WrapRef::Value(v) => v.clone(),
        }
    }
}

impl PartialEq<Value> for WrapRef<'_> {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (WrapRef::Obj(obj), Value::Object(map)) => obj.map == map,
            (WrapRef::Arr(arr), Value::Array(seq)) => arr.seq == seq.as_slice(),
            (WrapRef::Value(v), other) => *v == other,
            _ => false,
        }
    }
}

impl PartialEq<WrapRef<'_>> for Value {
    fn eq(&self, other: &WrapRef<'_>) -> bool {
        other == self
    }
}

impl fmt::Display for WrapRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WrapRef::Obj(obj) => fmt::Display::fmt(obj, f),
            WrapRef::Arr(arr) => fmt::Display::fmt(arr, f),
            WrapRef::Value(v) => fmt::Display::fmt(v, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrap_dispatches_on_outer_kind() {
        assert!(matches!(wrap(json!({})), Wrap::Obj(_)));
        assert!(matches!(wrap(json!([])), Wrap::Arr(_)));
        assert!(matches!(wrap(json!(null)), Wrap::Value(Value::Null)));
        assert!(matches!(wrap(json!(true)), Wrap::Value(_)));
        assert!(matches!(wrap(json!("text")), Wrap::Value(_)));
        assert!(matches!(wrap(json!(1.5)), Wrap::Value(_)));
    }

    #[test]
    fn test_unwrap_returns_same_allocation_for_arrays() {
        let seq = vec![json!(1), json!(2), json!(3)];
        let ptr = seq.as_ptr();
        let unwrapped = unwrap(wrap(Value::Array(seq)));
        let Value::Array(seq) = unwrapped else {
            panic!("expected array back");
        };
        assert_eq!(seq.as_ptr(), ptr);
    }

    #[test]
    fn test_unwrap_preserves_nested_allocations_for_objects() {
        let nested = vec![json!("a"), json!("b")];
        let ptr = nested.as_ptr();
        let mut map = serde_json::Map::new();
        map.insert("seq".to_string(), Value::Array(nested));

        let unwrapped = unwrap(wrap(Value::Object(map)));
        let Value::Object(map) = unwrapped else {
            panic!("expected object back");
        };
        let Some(Value::Array(nested)) = map.get("seq") else {
            panic!("expected nested array");
        };
        assert_eq!(nested.as_ptr(), ptr);
    }

    #[test]
    fn test_wrap_of_unwrap_keeps_kind() {
        let obj = wrap(json!({"key": "value"}));
        assert!(matches!(wrap(unwrap(obj.clone())), Wrap::Obj(_)));
        assert_eq!(wrap(unwrap(obj.clone())), obj);

        let arr = wrap(json!([1, 2]));
        assert!(matches!(wrap(unwrap(arr.clone())), Wrap::Arr(_)));
        assert_eq!(wrap(unwrap(arr.clone())), arr);
    }

    #[test]
    fn test_unwrap_passes_scalars_through() {
        assert_eq!(unwrap(Wrap::Value(json!(42))), json!(42));
        assert_eq!(unwrap(Wrap::Value(Value::Null)), Value::Null);
    }

    #[test]
    fn test_wrap_does_not_recurse() {
        // Nested containers stay native inside the wrapper's storage.
        let w = wrap(json!({"inner": {"foo": "bar"}}));
        let Wrap::Obj(obj) = w else { panic!() };
        assert!(matches!(obj.as_map().get("inner"), Some(Value::Object(_))));
    }

    #[test]
    fn test_from_impls_never_double_wrap() {
        let obj = JsonObj::new();
        assert!(matches!(Wrap::from(obj), Wrap::Obj(_)));
        let arr = JsonArr::new();
        assert!(matches!(Wrap::from(arr), Wrap::Arr(_)));
        assert!(matches!(Wrap::from(json!({"k": 1})), Wrap::Obj(_)));
    }

    #[test]
    fn test_wrap_equality_with_native_value() {
        assert_eq!(wrap(json!({"k": 1})), json!({"k": 1}));
        assert_eq!(wrap(json!([1, 2])), json!([1, 2]));
        assert_eq!(wrap(json!("s")), json!("s"));
        assert_ne!(wrap(json!({"k": 1})), json!([1]));
    }

    #[test]
    fn test_wrap_ref_views() {
        let doc = json!({"a": [1, 2]});
        let view = wrap_ref(&doc);
        let obj = view.as_obj().unwrap();
        let inner = obj.get("a").unwrap();
        assert!(matches!(inner, WrapRef::Arr(_)));
        assert_eq!(inner, json!([1, 2]));
        assert_eq!(inner.to_value(), json!([1, 2]));
    }

    #[test]
    fn test_display_is_codec_text() {
        assert_eq!(wrap(json!({"k": "v"})).to_string(), r#"{"k":"v"}"#);
        assert_eq!(wrap(json!([1, 2])).to_string(), "[1,2]");
        assert_eq!(wrap(json!("s")).to_string(), r#""s""#);
    }
}
