//! Array wrapper over a native JSON sequence.

use std::fmt;
use std::ops::{AddAssign, Bound, Index, RangeBounds};
use std::slice;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AccessError;
use crate::wrap::{unwrap, wrap, wrap_ref, Wrap, WrapRef};

/// Wrapper over a JSON array, providing index and sequence operations.
///
/// Owns a single `Vec<Value>` with the same unwrap boundary as
/// [`JsonObj`](crate::JsonObj): every value entering storage is unwrapped
/// first, every value read back out is wrapped.
///
/// # Example
///
/// ```
/// use jsonobj::{wrap, Wrap};
/// use serde_json::json;
///
/// let Wrap::Arr(mut arr) = wrap(json!([{"key": "value"}])) else {
///     unreachable!()
/// };
/// assert_eq!(
///     arr.get(0).unwrap().as_obj().unwrap().get("key").unwrap(),
///     json!("value")
/// );
///
/// arr.push(json!({"foo": "bar"}));
/// assert_eq!(arr.len(), 2);
/// assert_eq!(arr.pop().unwrap(), json!({"foo": "bar"}));
/// ```
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonArr {
    seq: Vec<Value>,
}

impl JsonArr {
    /// Create an empty array wrapper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of the underlying sequence.
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Whether some element structurally equals `value`.
    pub fn contains(&self, value: &Value) -> bool {
        self.seq.contains(value)
    }

    /// Read the element at `index`, wrapped.
    ///
    /// # Errors
    ///
    /// [`AccessError::OutOfRange`] if `index` is outside the sequence.
    pub fn get(&self, index: usize) -> Result<WrapRef<'_>, AccessError> {
        self.seq
            .get(index)
            .map(wrap_ref)
            .ok_or(AccessError::OutOfRange {
                index,
                len: self.seq.len(),
            })
    }

    /// Mutable access to the native element at `index`.
    ///
    /// # Errors
    ///
    /// [`AccessError::OutOfRange`] if `index` is outside the sequence.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Value, AccessError> {
        let len = self.seq.len();
        self.seq
            .get_mut(index)
            .ok_or(AccessError::OutOfRange { index, len })
    }

    /// First element, wrapped, if any.
    pub fn first(&self) -> Option<WrapRef<'_>> {
        self.seq.first().map(wrap_ref)
    }

    /// Last element, wrapped, if any.
    pub fn last(&self) -> Option<WrapRef<'_>> {
        self.seq.last().map(wrap_ref)
    }

    /// Store the unwrapped value at `index`, replacing the element there.
    /// The sequence never grows through `set`.
    ///
    /// # Errors
    ///
    /// [`AccessError::OutOfRange`] if `index` is outside the sequence.
    pub fn set(&mut self, index: usize, value: impl Into<Wrap>) -> Result<(), AccessError> {
        let slot = self.get_mut(index)?;
        *slot = unwrap(value.into());
        Ok(())
    }

    /// Remove the element at `index`, shifting subsequent elements left,
    /// and return it in native form.
    ///
    /// # Errors
    ///
    /// [`AccessError::OutOfRange`] if `index` is outside the sequence.
    pub fn delete(&mut self, index: usize) -> Result<Value, AccessError> {
        if index >= self.seq.len() {
            return Err(AccessError::OutOfRange {
                index,
                len: self.seq.len(),
            });
        }
        Ok(self.seq.remove(index))
    }

    /// Iterate over wrapped elements in order.
    ///
    /// The iterator is lazy, restartable (call `iter()` again), and
    /// double-ended: `iter().rev()` walks last to first.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.seq.iter(),
        }
    }

    /// Index of the first element structurally equal to `value`.
    ///
    /// # Errors
    ///
    /// [`AccessError::NoSuchElement`] if no element matches.
    pub fn index_of(&self, value: &Value) -> Result<usize, AccessError> {
        self.index_in(value, ..)
    }

    /// Index of the first element equal to `value` within `range`.
    ///
    /// The returned index is absolute, not relative to the range start. The
    /// range is clamped to the sequence bounds.
    ///
    /// # Errors
    ///
    /// [`AccessError::NoSuchElement`] if no element in the range matches.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonobj::{wrap, Wrap};
    /// use serde_json::json;
    ///
    /// let Wrap::Arr(arr) = wrap(json!(["a", "b", "a"])) else {
    ///     unreachable!()
    /// };
    /// assert_eq!(arr.index_of(&json!("a")).unwrap(), 0);
    /// assert_eq!(arr.index_in(&json!("a"), 1..).unwrap(), 2);
    /// assert!(arr.index_in(&json!("a"), 1..2).is_err());
    /// ```
    pub fn index_in(
        &self,
        value: &Value,
        range: impl RangeBounds<usize>,
    ) -> Result<usize, AccessError> {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s + 1,
            Bound::Unbounded => 0,
        };
        let stop = match range.end_bound() {
            Bound::Included(&e) => e + 1,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.seq.len(),
        };
        let stop = stop.min(self.seq.len());
        if start >= stop {
            return Err(AccessError::NoSuchElement);
        }
        self.seq[start..stop]
            .iter()
            .position(|v| v == value)
            .map(|i| start + i)
            .ok_or(AccessError::NoSuchElement)
    }

    /// Number of elements structurally equal to `value`.
    pub fn count(&self, value: &Value) -> usize {
        self.seq.iter().filter(|v| *v == value).count()
    }

    /// Insert the unwrapped value at `index`, shifting subsequent elements
    /// right. `index == len` appends.
    ///
    /// # Errors
    ///
    /// [`AccessError::OutOfRange`] if `index > len`.
    pub fn insert(&mut self, index: usize, value: impl Into<Wrap>) -> Result<(), AccessError> {
        if index > self.seq.len() {
            return Err(AccessError::OutOfRange {
                index,
                len: self.seq.len(),
            });
        }
        self.seq.insert(index, unwrap(value.into()));
        Ok(())
    }

    /// Append the unwrapped value at the end.
    pub fn push(&mut self, value: impl Into<Wrap>) {
        self.seq.push(unwrap(value.into()));
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        self.seq.clear();
    }

    /// Reverse the element order in place.
    pub fn reverse(&mut self) {
        self.seq.reverse();
    }

    /// Append each of `values`, unwrapped, in order.
    pub fn extend<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Wrap>,
    {
        for value in values {
            self.seq.push(unwrap(value.into()));
        }
    }

    /// Append a copy of the current elements, doubling the array:
    /// `[a, b]` becomes `[a, b, a, b]`.
    ///
    /// Extending an array with itself requires snapshotting the source
    /// before mutation; here the snapshot is the copied prefix.
    pub fn extend_from_self(&mut self) {
        let len = self.seq.len();
        self.seq.extend_from_within(..len);
    }

    /// Remove and return the last element, wrapped.
    ///
    /// # Errors
    ///
    /// [`AccessError::OutOfRange`] if the array is empty.
    pub fn pop(&mut self) -> Result<Wrap, AccessError> {
        let len = self.seq.len();
        if len == 0 {
            return Err(AccessError::OutOfRange { index: 0, len: 0 });
        }
        self.pop_at(len - 1)
    }

    /// Remove and return the element at `index`, wrapped.
    ///
    /// # Errors
    ///
    /// [`AccessError::OutOfRange`] if `index` is outside the sequence.
    pub fn pop_at(&mut self, index: usize) -> Result<Wrap, AccessError> {
        self.delete(index).map(wrap)
    }

    /// Remove the first element structurally equal to `value`, returning it
    /// in native form.
    ///
    /// # Errors
    ///
    /// [`AccessError::NoSuchElement`] if no element matches.
    pub fn remove(&mut self, value: &Value) -> Result<Value, AccessError> {
        let index = self.index_of(value)?;
        Ok(self.seq.remove(index))
    }

    /// Borrow the underlying sequence.
    pub fn as_vec(&self) -> &Vec<Value> {
        &self.seq
    }

    /// Mutably borrow the underlying sequence.
    pub fn as_vec_mut(&mut self) -> &mut Vec<Value> {
        &mut self.seq
    }

    /// Consume the wrapper, returning the underlying sequence.
    pub fn into_vec(self) -> Vec<Value> {
        self.seq
    }

    /// Read-only view of this wrapper.
    pub fn view(&self) -> ArrRef<'_> {
        ArrRef {
            seq: self.seq.as_slice(),
        }
    }
}

impl From<Vec<Value>> for JsonArr {
    fn from(seq: Vec<Value>) -> Self {
        Self { seq }
    }
}

impl From<JsonArr> for Value {
    fn from(arr: JsonArr) -> Self {
        Value::Array(arr.seq)
    }
}

impl Extend<Value> for JsonArr {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.seq.extend(iter);
    }
}

/// In-place concatenation; equivalent to [`JsonArr::extend`].
impl AddAssign<JsonArr> for JsonArr {
    fn add_assign(&mut self, rhs: JsonArr) {
        self.seq.extend(rhs.seq);
    }
}

impl AddAssign<Vec<Value>> for JsonArr {
    fn add_assign(&mut self, rhs: Vec<Value>) {
        self.seq.extend(rhs);
    }
}

impl PartialEq<Vec<Value>> for JsonArr {
    fn eq(&self, other: &Vec<Value>) -> bool {
        self.seq == *other
    }
}

impl PartialEq<[Value]> for JsonArr {
    fn eq(&self, other: &[Value]) -> bool {
        self.seq == other
    }
}

impl PartialEq<Value> for JsonArr {
    fn eq(&self, other: &Value) -> bool {
        match other {
            Value::Array(seq) => self.seq == *seq,
            _ => false,
        }
    }
}

impl PartialEq<JsonArr> for Value {
    fn eq(&self, other: &JsonArr) -> bool {
        other == self
    }
}

/// Out-of-range indices panic; use [`JsonArr::get`] for a fallible read.
impl Index<usize> for JsonArr {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.seq[index]
    }
}

impl fmt::Debug for JsonArr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("JsonArr").field(&self.seq).finish()
    }
}

/// The JSON text encoding of the underlying sequence, in the codec's
/// default (compact) spacing.
impl fmt::Display for JsonArr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(&self.seq).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

/// Iterator of wrapped elements. See [`JsonArr::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = WrapRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(wrap_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(wrap_ref)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a JsonArr {
    type Item = WrapRef<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Consuming iteration yields native values, matching the unwrap boundary:
/// elements leave storage in native form unless read through a wrapper.
impl IntoIterator for JsonArr {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.seq.into_iter()
    }
}

/// Read-only borrowed view of a JSON array, produced by reads that land on
/// a nested array. Aliases the owner's storage; `Copy`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrRef<'a> {
    pub(crate) seq: &'a [Value],
}

impl<'a> ArrRef<'a> {
    pub fn len(self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(self) -> bool {
        self.seq.is_empty()
    }

    pub fn contains(self, value: &Value) -> bool {
        self.seq.contains(value)
    }

    /// Read the element at `index`, wrapped. See [`JsonArr::get`].
    pub fn get(self, index: usize) -> Result<WrapRef<'a>, AccessError> {
        self.seq
            .get(index)
            .map(wrap_ref)
            .ok_or(AccessError::OutOfRange {
                index,
                len: self.seq.len(),
            })
    }

    pub fn iter(self) -> Iter<'a> {
        Iter {
            inner: self.seq.iter(),
        }
    }

    pub fn count(self, value: &Value) -> usize {
        self.seq.iter().filter(|v| *v == value).count()
    }

    pub fn index_of(self, value: &Value) -> Result<usize, AccessError> {
        self.seq
            .iter()
            .position(|v| v == value)
            .ok_or(AccessError::NoSuchElement)
    }

    pub fn as_slice(self) -> &'a [Value] {
        self.seq
    }
}

impl PartialEq<[Value]> for ArrRef<'_> {
    fn eq(&self, other: &[Value]) -> bool {
        self.seq == other
    }
}

impl PartialEq<Vec<Value>> for ArrRef<'_> {
    fn eq(&self, other: &Vec<Value>) -> bool {
        self.seq == other.as_slice()
    }
}

impl PartialEq<Value> for ArrRef<'_> {
    fn eq(&self, other: &Value) -> bool {
        match other {
            Value::Array(seq) => self.seq == seq.as_slice(),
            _ => false,
        }
    }
}

impl PartialEq<ArrRef<'_>> for Value {
    fn eq(&self, other: &ArrRef<'_>) -> bool {
        other == self
    }
}

impl PartialEq<JsonArr> for ArrRef<'_> {
    fn eq(&self, other: &JsonArr) -> bool {
        self.seq == other.seq.as_slice()
    }
}

impl PartialEq<ArrRef<'_>> for JsonArr {
    fn eq(&self, other: &ArrRef<'_>) -> bool {
        self.seq.as_slice() == other.seq
    }
}

impl fmt::Display for ArrRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self.seq).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
