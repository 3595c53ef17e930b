//! Human-readable dumps.
//!
//! Two flavors:
//!
//! - [`dump`]/[`print_dump`]: flatten the value and pretty-print it as JSON
//!   with the quoting stripped, the compact display format used for quick
//!   inspection;
//! - [`debug_dump`]/[`print_debug_dump`]: the `{:#?}` pretty `Debug`
//!   rendering, for values that don't participate in flattening.

use crate::inspect::{classify, Inspect, Shape};
use crate::{Error, Flattener, Result, Value};
use serde::Serialize;
use std::fmt;

/// Renders a value as a display string.
///
/// Record-shaped values are flattened first; anything else is converted
/// structurally. The result is pretty-printed JSON with every double quote
/// stripped (values containing quotes are mangled the same way): a human
/// display aid, not a data interchange encoding. An encoding failure
/// renders the error's message instead.
///
/// # Examples
///
/// ```rust
/// use serde_inspect::{dump, inspect};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// inspect!(Point { x, y });
///
/// let text = dump(&Point { x: 1, y: 2 });
/// assert!(text.contains("x: 1"));
/// assert!(!text.contains('"'));
/// ```
#[must_use]
pub fn dump(value: &dyn Inspect) -> String {
    let rendered = match classify(value) {
        Shape::Record => Value::Object(Flattener::new().flatten(value)),
        _ => value.to_value(),
    };
    match to_json_pretty(&rendered) {
        Ok(text) => text.replace('"', ""),
        Err(err) => err.to_string(),
    }
}

/// Prints [`dump`] output to stdout.
pub fn print_dump(value: &dyn Inspect) {
    println!("{}", dump(value));
}

/// Renders a value with `{:#?}` pretty `Debug` formatting.
///
/// # Examples
///
/// ```rust
/// use serde_inspect::debug_dump;
///
/// let text = debug_dump(&vec![1, 2]);
/// assert!(text.contains('1'));
/// ```
#[must_use]
pub fn debug_dump<T: fmt::Debug + ?Sized>(value: &T) -> String {
    format!("{:#?}", value)
}

/// Prints [`debug_dump`] output to stdout.
pub fn print_debug_dump<T: fmt::Debug + ?Sized>(value: &T) {
    println!("{}", debug_dump(value));
}

/// JSON with four-space indentation, the dump display convention.
pub(crate) fn to_json_pretty(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| Error::json(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| Error::json(e.to_string()))
}
