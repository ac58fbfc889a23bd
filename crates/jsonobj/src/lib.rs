//! Ergonomic object and array wrappers over `serde_json` values.
//!
//! This crate is a thin layer over the [`serde_json::Value`] tree: it lets
//! callers navigate parsed JSON objects and arrays through dedicated
//! wrapper types with contract-checked accessors, while staying fully
//! interchangeable with the native collection types during serialization.
//!
//! Three pieces:
//!
//! - [`wrap`]/[`unwrap`] convert between native values and wrappers by
//!   moving the outermost container — never copying, never recursing.
//!   Nested containers stay native in storage and are re-wrapped lazily on
//!   each read, as borrowed [`WrapRef`] views.
//! - [`JsonObj`] and [`JsonArr`] own one native container each and keep the
//!   unwrap boundary: values are unwrapped on the way into storage and
//!   wrapped on the way out.
//! - [`from_str`]/[`from_reader`]/[`to_string`]/[`to_writer`] (and friends)
//!   compose the conversion layer with the codec's own entry points.
//!
//! # Example
//!
//! ```
//! use jsonobj::{from_str, to_string, Wrap};
//! use serde_json::json;
//!
//! let Wrap::Obj(mut obj) = from_str(r#"{"key1":"value1","key2":{"foo":"bar"}}"#)? else {
//!     unreachable!()
//! };
//!
//! let nested = obj.get("key2").unwrap();
//! assert_eq!(nested.as_obj().unwrap().get("foo").unwrap(), json!("bar"));
//!
//! obj.set("key3", json!([1, 2]));
//! obj.delete("key1").unwrap();
//! assert_eq!(to_string(&obj)?, r#"{"key2":{"foo":"bar"},"key3":[1,2]}"#);
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod arr;
pub mod codec;
pub mod error;
pub mod obj;
pub mod wrap;

pub use arr::{ArrRef, JsonArr};
pub use codec::{
    from_reader, from_slice, from_str, to_string, to_string_pretty, to_writer, to_writer_pretty,
};
pub use error::AccessError;
pub use obj::{JsonObj, ObjRef};
pub use wrap::{unwrap, wrap, wrap_ref, Wrap, WrapRef};
