//! Serialization adapters composing the conversion layer with `serde_json`.
//!
//! Drop-in replacements for the codec's own load/dump entry points: decoded
//! results come back wrapped (outermost level only), and encoded inputs may
//! be wrappers, native values, or anything else `Serialize` — the wrapper
//! types serialize transparently as their underlying containers. Codec
//! errors pass through untranslated.

use std::io;

use serde::Serialize;
use serde_json::Value;

use crate::wrap::{wrap, Wrap};

/// Deserialize JSON text into a wrapped value.
///
/// # Errors
///
/// The codec's own error, unchanged, if the text is not valid JSON.
///
/// # Example
///
/// ```
/// use jsonobj::{from_str, Wrap};
/// use serde_json::json;
///
/// let Wrap::Obj(obj) = from_str(r#"{"key": "value"}"#).unwrap() else {
///     unreachable!()
/// };
/// assert_eq!(obj.get("key").unwrap(), json!("value"));
/// ```
pub fn from_str(text: &str) -> serde_json::Result<Wrap> {
    serde_json::from_str::<Value>(text).map(wrap)
}

/// Deserialize JSON bytes into a wrapped value.
///
/// # Errors
///
/// The codec's own error, unchanged, if the bytes are not valid JSON.
pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Wrap> {
    serde_json::from_slice::<Value>(bytes).map(wrap)
}

/// Deserialize JSON text from a reader into a wrapped value.
///
/// # Errors
///
/// The codec's own error, unchanged, on invalid JSON or I/O failure.
pub fn from_reader<R: io::Read>(reader: R) -> serde_json::Result<Wrap> {
    serde_json::from_reader::<R, Value>(reader).map(wrap)
}

/// Serialize a value (wrapped or native) to JSON text.
///
/// # Errors
///
/// The codec's own error, unchanged.
pub fn to_string<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    serde_json::to_string(value)
}

/// Serialize a value (wrapped or native) to pretty-printed JSON text.
///
/// # Errors
///
/// The codec's own error, unchanged.
pub fn to_string_pretty<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    serde_json::to_string_pretty(value)
}

/// Serialize a value (wrapped or native) as JSON text into a writer.
///
/// # Errors
///
/// The codec's own error, unchanged.
pub fn to_writer<W, T>(writer: W, value: &T) -> serde_json::Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    serde_json::to_writer(writer, value)
}

/// Serialize a value (wrapped or native) as pretty-printed JSON text into a
/// writer.
///
/// # Errors
///
/// The codec's own error, unchanged.
pub fn to_writer_pretty<W, T>(writer: W, value: &T) -> serde_json::Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    serde_json::to_writer_pretty(writer, value)
}
