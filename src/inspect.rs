//! Value classification: the [`Inspect`] trait and the [`Shape`] model.
//!
//! The flattening engine needs to answer three questions about any value it
//! meets: what shape is it (record, map, slice, nullable, or plain), how do
//! I walk into it, and what is its raw dynamic representation. [`Inspect`]
//! is the capability trait that answers them. Instead of a runtime type
//! switch, each participating type declares its own classification:
//!
//! - primitives, strings, timestamps and the dynamic [`Value`] itself are
//!   [`Shape::Primitive`] and never recursed into;
//! - `Option<T>` is a [`Shape::Nullable`] wrapper, unwrapped transparently
//!   by [`classify`] and [`unwrap_nullable`];
//! - `Box<T>` is an always-present pointer and delegates to its target;
//! - `Vec<T>` and `[T; N]` are [`Shape::Slice`], `HashMap`/`BTreeMap`/
//!   [`FieldMap`](crate::FieldMap) are [`Shape::Map`];
//! - record types implement the trait through the
//!   [`inspect!`](crate::inspect) macro (or by hand for opaque types) and
//!   report [`Shape::Record`] plus their field list.
//!
//! Container shapes carry their element's *static* shape: classification
//! is type-driven, so an empty `Vec<Server>` still knows its elements are
//! records. This is what lets the engine apply its recursion rules without
//! sampling values.
//!
//! ## Examples
//!
//! ```rust
//! use serde_inspect::{classify, Shape};
//!
//! assert_eq!(classify(&42), Shape::Primitive);
//! assert_eq!(classify(&vec![1, 2, 3]), Shape::Slice(Box::new(Shape::Primitive)));
//!
//! // Nullable wrappers unwrap transparently, at any depth
//! let present: Option<Option<i32>> = Some(Some(7));
//! assert_eq!(classify(&present), Shape::Primitive);
//!
//! // An absent value classifies as primitive carrying the null representation
//! let absent: Option<i32> = None;
//! assert_eq!(classify(&absent), Shape::Primitive);
//! ```

use crate::{FieldMap, Number, Value};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Structural classification of a value.
///
/// `Map`, `Slice` and `Nullable` carry the shape of their element/inner
/// type, mirroring what a runtime type descriptor would expose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Scalars, strings, timestamps and opaque dynamic values.
    Primitive,
    /// A composite type with named fields.
    Record,
    /// An associative container; carries the value-element shape.
    Map(Box<Shape>),
    /// An ordered sequence; carries the element shape.
    Slice(Box<Shape>),
    /// A possibly-absent wrapper; carries the inner shape.
    Nullable(Box<Shape>),
}

impl Shape {
    /// Returns `true` for [`Shape::Record`].
    #[inline]
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Shape::Record)
    }

    /// Returns `true` for [`Shape::Map`].
    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Shape::Map(_))
    }

    /// Returns `true` for [`Shape::Slice`].
    #[inline]
    #[must_use]
    pub const fn is_slice(&self) -> bool {
        matches!(self, Shape::Slice(_))
    }

    /// Returns `true` for [`Shape::Primitive`].
    #[inline]
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Shape::Primitive)
    }
}

/// One field of a record: declared name, annotation tags, borrowed value.
///
/// Produced by [`Inspect::fields`] in declaration order and consumed within
/// a single flattening call. Tags are keyed by namespace so a type can carry
/// independent annotations for different consumers; see
/// [`Flattener::with_tag_name`](crate::Flattener::with_tag_name).
pub struct Field<'a> {
    /// The declared field name.
    pub name: &'static str,
    /// `(namespace, raw tag)` pairs; empty when the field carries no tags.
    pub tags: &'static [(&'static str, &'static str)],
    /// The field's current value.
    pub value: &'a dyn Inspect,
}

impl Field<'_> {
    /// Returns the raw tag registered under `namespace`, or `""` if none.
    #[must_use]
    pub fn tag(&self, namespace: &str) -> &'static str {
        self.tags
            .iter()
            .find(|(ns, _)| *ns == namespace)
            .map_or("", |&(_, tag)| tag)
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}

/// Capability trait for values the flattening engine can walk.
///
/// Most impls come from the blanket coverage in this module or from the
/// [`inspect!`](crate::inspect) macro. A hand-written impl is only needed
/// for opaque record-like types that want a custom raw representation or a
/// textual form for the `string` tag option.
pub trait Inspect {
    /// The declared structural shape of this value.
    fn shape(&self) -> Shape;

    /// The shape of the type itself, independent of any value.
    ///
    /// Containers use this to classify their element type even when empty.
    fn static_shape() -> Shape
    where
        Self: Sized,
    {
        Shape::Primitive
    }

    /// The raw structural conversion to [`Value`], with no tag policies
    /// applied.
    fn to_value(&self) -> Value;

    /// Whether this value equals its type's zero value (deep structural
    /// zero: numeric zero, empty string or container, absent option, all
    /// fields zero for records).
    fn is_zero(&self) -> bool;

    /// For nullable wrappers: `Some(Some(inner))` when present,
    /// `Some(None)` when absent. `None` for every other shape.
    fn as_nullable(&self) -> Option<Option<&dyn Inspect>> {
        None
    }

    /// Record fields in declaration order. Empty for non-records and for
    /// opaque records with no enumerable fields.
    fn fields(&self) -> Vec<Field<'_>> {
        Vec::new()
    }

    /// Map entries with stringified keys, in the container's own iteration
    /// order. Empty for non-maps.
    fn entries(&self) -> Vec<(String, &dyn Inspect)> {
        Vec::new()
    }

    /// Sequence elements in order. Empty for non-slices.
    fn elements(&self) -> Vec<&dyn Inspect> {
        Vec::new()
    }

    /// The textual form consumed by the `string` tag option, when this type
    /// has one. `None` means the capability is absent and a `string`-tagged
    /// field is dropped.
    fn as_string(&self) -> Option<String> {
        None
    }
}

/// Classifies a value, unwrapping nullable wrappers transparently.
///
/// Multiple levels of nesting collapse to the innermost non-nullable shape.
/// An absent value at any level classifies as [`Shape::Primitive`] (its
/// representation is [`Value::Null`]), not a recursive descent.
#[must_use]
pub fn classify(value: &dyn Inspect) -> Shape {
    match unwrap_nullable(value) {
        Some(inner) => inner.shape(),
        None => Shape::Primitive,
    }
}

/// Peels nullable wrappers off a value, returning the innermost present
/// value, or `None` when the value is absent at any level.
#[must_use]
pub fn unwrap_nullable(value: &dyn Inspect) -> Option<&dyn Inspect> {
    let mut current = value;
    loop {
        match current.as_nullable() {
            Some(Some(inner)) => current = inner,
            Some(None) => return None,
            None => return Some(current),
        }
    }
}

macro_rules! impl_inspect_int {
    ($($ty:ty)*) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape {
                    Shape::Primitive
                }

                fn to_value(&self) -> Value {
                    Value::Number(Number::Integer(*self as i64))
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_inspect_int!(i8 i16 i32 i64 isize u8 u16 u32);

impl Inspect for u64 {
    fn shape(&self) -> Shape {
        Shape::Primitive
    }

    fn to_value(&self) -> Value {
        if *self <= i64::MAX as u64 {
            Value::Number(Number::Integer(*self as i64))
        } else {
            Value::Number(Number::Float(*self as f64))
        }
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }
}

impl Inspect for usize {
    fn shape(&self) -> Shape {
        Shape::Primitive
    }

    fn to_value(&self) -> Value {
        (*self as u64).to_value()
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }
}

macro_rules! impl_inspect_float {
    ($($ty:ty)*) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape {
                    Shape::Primitive
                }

                fn to_value(&self) -> Value {
                    Value::Number(Number::Float(*self as f64))
                }

                fn is_zero(&self) -> bool {
                    *self == 0.0
                }
            }
        )*
    };
}

impl_inspect_float!(f32 f64);

impl Inspect for bool {
    fn shape(&self) -> Shape {
        Shape::Primitive
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn is_zero(&self) -> bool {
        !*self
    }
}

impl Inspect for char {
    fn shape(&self) -> Shape {
        Shape::Primitive
    }

    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }

    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl Inspect for String {
    fn shape(&self) -> Shape {
        Shape::Primitive
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Inspect for &str {
    fn shape(&self) -> Shape {
        Shape::Primitive
    }

    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Inspect for DateTime<Utc> {
    fn shape(&self) -> Shape {
        Shape::Primitive
    }

    fn to_value(&self) -> Value {
        Value::Date(*self)
    }

    // chrono has no Default for DateTime; the Unix epoch stands in as the
    // type's zero value.
    fn is_zero(&self) -> bool {
        *self == DateTime::<Utc>::UNIX_EPOCH
    }

    fn as_string(&self) -> Option<String> {
        Some(self.to_rfc3339())
    }
}

/// A dynamic [`Value`] is opaque to classification: slices and maps of
/// `Value` pass through the engine unmodified.
impl Inspect for Value {
    fn shape(&self) -> Shape {
        Shape::Primitive
    }

    fn to_value(&self) -> Value {
        self.clone()
    }

    fn is_zero(&self) -> bool {
        self.is_null()
    }
}

impl Inspect for FieldMap {
    fn shape(&self) -> Shape {
        Shape::Map(Box::new(Shape::Primitive))
    }

    fn static_shape() -> Shape {
        Shape::Map(Box::new(Shape::Primitive))
    }

    fn to_value(&self) -> Value {
        Value::Object(self.clone())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn entries(&self) -> Vec<(String, &dyn Inspect)> {
        self.iter()
            .map(|(k, v)| (k.clone(), v as &dyn Inspect))
            .collect()
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn shape(&self) -> Shape {
        Shape::Nullable(Box::new(T::static_shape()))
    }

    fn static_shape() -> Shape {
        Shape::Nullable(Box::new(T::static_shape()))
    }

    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, Inspect::to_value)
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn as_nullable(&self) -> Option<Option<&dyn Inspect>> {
        Some(self.as_ref().map(|inner| inner as &dyn Inspect))
    }

    fn as_string(&self) -> Option<String> {
        self.as_ref().and_then(Inspect::as_string)
    }
}

impl<T: Inspect> Inspect for Box<T> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }

    fn static_shape() -> Shape {
        T::static_shape()
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn as_nullable(&self) -> Option<Option<&dyn Inspect>> {
        (**self).as_nullable()
    }

    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }

    fn entries(&self) -> Vec<(String, &dyn Inspect)> {
        (**self).entries()
    }

    fn elements(&self) -> Vec<&dyn Inspect> {
        (**self).elements()
    }

    fn as_string(&self) -> Option<String> {
        (**self).as_string()
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn shape(&self) -> Shape {
        Shape::Slice(Box::new(T::static_shape()))
    }

    fn static_shape() -> Shape {
        Shape::Slice(Box::new(T::static_shape()))
    }

    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(Inspect::to_value).collect())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn elements(&self) -> Vec<&dyn Inspect> {
        self.iter().map(|element| element as &dyn Inspect).collect()
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn shape(&self) -> Shape {
        Shape::Slice(Box::new(T::static_shape()))
    }

    fn static_shape() -> Shape {
        Shape::Slice(Box::new(T::static_shape()))
    }

    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(Inspect::to_value).collect())
    }

    fn is_zero(&self) -> bool {
        self.iter().all(Inspect::is_zero)
    }

    fn elements(&self) -> Vec<&dyn Inspect> {
        self.iter().map(|element| element as &dyn Inspect).collect()
    }
}

impl<K: fmt::Display, V: Inspect, S> Inspect for HashMap<K, V, S> {
    fn shape(&self) -> Shape {
        Shape::Map(Box::new(V::static_shape()))
    }

    fn static_shape() -> Shape {
        Shape::Map(Box::new(V::static_shape()))
    }

    fn to_value(&self) -> Value {
        let mut map = FieldMap::with_capacity(self.len());
        for (key, value) in self {
            map.insert(key.to_string(), value.to_value());
        }
        Value::Object(map)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn entries(&self) -> Vec<(String, &dyn Inspect)> {
        self.iter()
            .map(|(k, v)| (k.to_string(), v as &dyn Inspect))
            .collect()
    }
}

impl<K: fmt::Display, V: Inspect> Inspect for BTreeMap<K, V> {
    fn shape(&self) -> Shape {
        Shape::Map(Box::new(V::static_shape()))
    }

    fn static_shape() -> Shape {
        Shape::Map(Box::new(V::static_shape()))
    }

    fn to_value(&self) -> Value {
        let mut map = FieldMap::with_capacity(self.len());
        for (key, value) in self {
            map.insert(key.to_string(), value.to_value());
        }
        Value::Object(map)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn entries(&self) -> Vec<(String, &dyn Inspect)> {
        self.iter()
            .map(|(k, v)| (k.to_string(), v as &dyn Inspect))
            .collect()
    }
}
