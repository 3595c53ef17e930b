//! The flattening engine.
//!
//! [`Flattener`] walks a record's fields and produces a
//! [`FieldMap`](crate::FieldMap), applying each field's tag directive along
//! the way. The recursion rules by shape:
//!
//! - nested records flatten to nested mappings; a record with no enumerable
//!   fields falls back to its raw representation instead of an empty mapping
//! - maps descend only when their value-element shape (one nullable level
//!   unwrapped) is a record or a slice of records; anything else passes
//!   through raw
//! - slices descend only when their element shape is a record or a nullable
//!   record; anything else, including slices of dynamic values, passes
//!   through raw
//! - primitives and opaque types pass through untouched
//!
//! Deeper container nesting (map-of-map-of-record, slice-of-slice-of-record)
//! intentionally does not descend.
//!
//! Recursion depth is proportional to input nesting depth and unguarded; a
//! hand-written [`Inspect`](crate::Inspect) impl that reaches back into its
//! own object graph will recurse without bound.
//!
//! ## Tag options
//!
//! | option      | effect                                                       |
//! |-------------|--------------------------------------------------------------|
//! | `omitempty` | skip the field when its value is the type's zero value       |
//! | `omitnested`| emit the raw structural conversion, no tag-driven recursion  |
//! | `string`    | emit the value's textual form, or drop the field without one |
//! | `flatten`   | merge a nested mapping's keys into the parent                |
//!
//! A literal `-` tag excludes the field entirely.
//!
//! ## Examples
//!
//! ```rust
//! use serde_inspect::{flatten, inspect};
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! inspect!(Point { x, y });
//!
//! let map = flatten(&Point { x: 1, y: 2 });
//! assert_eq!(map.get("x").and_then(|v| v.as_i64()), Some(1));
//! assert_eq!(map.get("y").and_then(|v| v.as_i64()), Some(2));
//! ```

use crate::inspect::{classify, unwrap_nullable, Inspect, Shape};
use crate::tag::{TagDirective, DEFAULT_TAG_NAME};
use crate::{FieldMap, Value};

/// The flattening engine, configured at construction.
///
/// A `Flattener` captures the tag namespace it reads, so "set once, apply
/// everywhere" works without process-wide state: build one and reuse it.
///
/// # Examples
///
/// ```rust
/// use serde_inspect::{inspect, Flattener};
///
/// struct Row {
///     id: u32,
/// }
///
/// inspect! {
///     Row {
///         id => { "db" => "row_id" },
///     }
/// }
///
/// let flattener = Flattener::new().with_tag_name("db");
/// let map = flattener.flatten(&Row { id: 9 });
/// assert_eq!(map.get("row_id").and_then(|v| v.as_i64()), Some(9));
/// ```
#[derive(Debug, Clone)]
pub struct Flattener {
    tag_name: String,
}

impl Default for Flattener {
    fn default() -> Self {
        Flattener {
            tag_name: DEFAULT_TAG_NAME.to_string(),
        }
    }
}

impl Flattener {
    /// Creates a flattener reading the default tag namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tag namespace this flattener consults.
    #[must_use]
    pub fn with_tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = tag_name.into();
        self
    }

    /// The tag namespace this flattener consults.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Flattens a record-shaped value into a field mapping.
    ///
    /// Nullable wrappers around the record unwrap transparently.
    ///
    /// # Panics
    ///
    /// Panics when the (unwrapped) value is not record-shaped, or is absent.
    /// That is API misuse, not a recoverable condition.
    #[must_use]
    pub fn flatten(&self, value: &dyn Inspect) -> FieldMap {
        let mut out = FieldMap::new();
        self.fill_map(value, &mut out);
        out
    }

    /// Flattens a record-shaped value into an existing mapping.
    ///
    /// # Panics
    ///
    /// Same precondition as [`flatten`](Flattener::flatten).
    pub fn fill_map(&self, value: &dyn Inspect, out: &mut FieldMap) {
        let record = match unwrap_nullable(value) {
            Some(inner) if inner.shape().is_record() => inner,
            _ => panic!("flatten requires a record-shaped value"),
        };
        self.fill(record, out);
    }

    fn fill(&self, record: &dyn Inspect, out: &mut FieldMap) {
        for field in record.fields() {
            let raw_tag = field.tag(&self.tag_name);
            if raw_tag == "-" {
                continue;
            }

            let directive = TagDirective::parse(raw_tag);
            let name = if directive.name.is_empty() {
                field.name
            } else {
                directive.name
            };

            if directive.options.has("omitempty") && field.value.is_zero() {
                continue;
            }

            // `string` short-circuits: nested and flatten are not consulted,
            // and a value without a textual form produces no entry at all.
            if directive.options.has("string") {
                if let Some(text) = field.value.as_string() {
                    out.insert(name.to_string(), Value::String(text));
                }
                continue;
            }

            let mut is_sub_struct = false;
            let final_val = if directive.options.has("omitnested") {
                field.value.to_value()
            } else {
                is_sub_struct = matches!(classify(field.value), Shape::Record | Shape::Map(_));
                self.nested(field.value)
            };

            if is_sub_struct && directive.options.has("flatten") {
                match final_val {
                    Value::Object(entries) => {
                        // collisions: the later field wins silently
                        for (key, value) in entries {
                            out.insert(key, value);
                        }
                    }
                    // opaque-record fallback has nothing to merge
                    other => {
                        out.insert(name.to_string(), other);
                    }
                }
            } else {
                out.insert(name.to_string(), final_val);
            }
        }
    }

    /// Recursive conversion of one field value, by shape.
    fn nested(&self, val: &dyn Inspect) -> Value {
        let Some(inner) = unwrap_nullable(val) else {
            return Value::Null;
        };

        match inner.shape() {
            Shape::Record => {
                let mut map = FieldMap::new();
                self.fill(inner, &mut map);
                // a record exposing no fields keeps its raw representation,
                // not an empty mapping
                if map.is_empty() {
                    inner.to_value()
                } else {
                    Value::Object(map)
                }
            }
            Shape::Map(element) => {
                let element = match *element {
                    Shape::Nullable(wrapped) => *wrapped,
                    other => other,
                };
                let descends = match &element {
                    Shape::Record => true,
                    Shape::Slice(item) => item.is_record(),
                    _ => false,
                };
                if descends {
                    let entries = inner.entries();
                    let mut map = FieldMap::with_capacity(entries.len());
                    for (key, entry) in entries {
                        map.insert(key, self.nested(entry));
                    }
                    Value::Object(map)
                } else {
                    inner.to_value()
                }
            }
            Shape::Slice(element) => {
                let descends = match &*element {
                    Shape::Record => true,
                    Shape::Nullable(wrapped) => wrapped.is_record(),
                    _ => false,
                };
                if descends {
                    Value::Array(
                        inner
                            .elements()
                            .into_iter()
                            .map(|element| self.nested(element))
                            .collect(),
                    )
                } else {
                    inner.to_value()
                }
            }
            _ => inner.to_value(),
        }
    }
}

/// Flattens a record-shaped value with the default configuration.
///
/// Shorthand for `Flattener::new().flatten(value)`.
///
/// # Panics
///
/// Panics when the (nullable-unwrapped) value is not record-shaped.
#[must_use]
pub fn flatten(value: &dyn Inspect) -> FieldMap {
    Flattener::new().flatten(value)
}
