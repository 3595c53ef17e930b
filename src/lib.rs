//! # serde_inspect
//!
//! Struct-to-map flattening and debug inspection for developer tooling.
//!
//! ## What is it?
//!
//! A runtime object-introspection utility: give it a structured value
//! (a record, nested records, maps or slices of records) and it produces a
//! generic string-keyed mapping suitable for JSON encoding or tabular
//! display, plus human-readable dumps for debugging. Print values while
//! developing, render a list of records as a text table, or snapshot
//! variables to a file for offline inspection.
//!
//! ## Key Features
//!
//! - **Tag-driven flattening**: per-field policies (`omitempty`,
//!   `omitnested`, `string`, `flatten`, rename, exclude) declared next to
//!   the type with the [`inspect!`] macro
//! - **Shape-aware recursion**: nested records, maps of records and slices
//!   of records flatten recursively; primitives and opaque types pass
//!   through untouched
//! - **Deterministic output**: insertion-ordered mappings drive stable key
//!   aggregation and table column order
//! - **Serde Compatible**: any `T: Serialize` converts to a dynamic
//!   [`Value`] via [`to_value`]
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_inspect = "0.1"
//! ```
//!
//! ### Flattening a record
//!
//! ```rust
//! use serde_inspect::{flatten, inspect};
//!
//! struct User {
//!     name: String,
//!     age: u32,
//!     password: String,
//! }
//!
//! inspect! {
//!     User {
//!         name,
//!         age => ",omitempty",
//!         password => "-",
//!     }
//! }
//!
//! let user = User {
//!     name: "Alice".to_string(),
//!     age: 0,
//!     password: "secret".to_string(),
//! };
//!
//! let map = flatten(&user);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! assert!(map.get("age").is_none());      // zero value omitted
//! assert!(map.get("password").is_none()); // excluded
//! ```
//!
//! ### Rendering a table
//!
//! ```rust
//! use serde_inspect::{dump_table, inspect};
//!
//! struct Service {
//!     name: String,
//!     port: u16,
//! }
//!
//! inspect!(Service { name, port });
//!
//! let services = vec![
//!     Service { name: "gateway".to_string(), port: 8080 },
//!     Service { name: "backend".to_string(), port: 9090 },
//! ];
//!
//! let table = dump_table(&services);
//! assert!(table.contains("gateway"));
//! ```
//!
//! ### Snapshotting variables
//!
//! ```rust
//! use serde_inspect::{vars, FieldMap, Value};
//!
//! let mut snapshot = FieldMap::new();
//! snapshot.insert("attempt".to_string(), Value::from(3));
//!
//! // Appends a JSON snapshot to the file named by INSPECT_VARS,
//! // or silently does nothing when the variable is unset.
//! vars(&snapshot);
//! ```
//!
//! ## Tag Options
//!
//! | option       | effect                                                        |
//! |--------------|---------------------------------------------------------------|
//! | `omitempty`  | skip the field when its value equals the type's zero value    |
//! | `omitnested` | emit the raw structural conversion, skip tag-driven recursion |
//! | `string`     | emit the value's textual form; drop the field if it has none  |
//! | `flatten`    | merge a nested mapping's keys into the parent mapping         |
//!
//! A literal `-` tag excludes the field entirely. The first tag segment
//! renames the field.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Adapter I/O failures never propagate: dumps and snapshots are
//!   best-effort by contract
//! - The only panics are precondition violations (flattening a value that
//!   is not record-shaped), which indicate API misuse
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable walkthroughs:
//!
//! - **`inspect_basics.rs`** - flattening, dumps and snapshots
//! - **`tag_policies.rs`** - every tag option in one place
//! - **`table_dump.rs`** - table rendering with options
//!
//! Run any of them with: `cargo run --example <name>`

pub mod dump;
pub mod error;
pub mod flatten;
pub mod inspect;
pub mod keys;
pub mod macros;
pub mod map;
pub mod ser;
pub mod snapshot;
pub mod table;
pub mod tag;
pub mod value;

pub use dump::{debug_dump, dump, print_debug_dump, print_dump};
pub use error::{Error, Result};
pub use flatten::{flatten, Flattener};
pub use inspect::{classify, unwrap_nullable, Field, Inspect, Shape};
pub use keys::all_keys;
pub use map::FieldMap;
pub use ser::ValueSerializer;
pub use snapshot::{vars, INSPECT_VARS_ENV};
pub use table::{dump_table, print_dump_table, TableFilter, TableOptions};
pub use tag::{TagDirective, TagOptions, DEFAULT_TAG_NAME};
pub use value::{Number, Value};

use serde::Serialize;

/// Convert any `T: Serialize` to a [`Value`].
///
/// Useful for feeding derive-annotated types to the dump and snapshot
/// adapters without writing an [`Inspect`] impl. Tag-driven flattening
/// policies do not apply on this path.
///
/// # Examples
///
/// ```rust
/// use serde_inspect::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let value: Value = to_value(&point).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented in the dynamic value
/// model (e.g. maps with non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person {
        name: String,
        age: u32,
    }

    inspect! {
        Person {
            name => "Name",
            age => "Age,omitempty",
        }
    }

    struct Wrapper {
        inner: Person,
    }

    inspect! {
        Wrapper {
            inner => ",flatten",
        }
    }

    #[test]
    fn test_flatten_smoke() {
        let person = Person {
            name: "Alice".to_string(),
            age: 0,
        };
        let map = flatten(&person);
        assert_eq!(map.get("Name").and_then(|v| v.as_str()), Some("Alice"));
        assert!(map.get("Age").is_none());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_flatten_option_hoists_keys() {
        let wrapper = Wrapper {
            inner: Person {
                name: "Bob".to_string(),
                age: 44,
            },
        };
        let map = flatten(&wrapper);
        assert!(map.get("inner").is_none());
        assert_eq!(map.get("Name").and_then(|v| v.as_str()), Some("Bob"));
        assert_eq!(map.get("Age").and_then(|v| v.as_i64()), Some(44));
    }

    #[test]
    fn test_all_keys_matches_single_record() {
        let person = Person {
            name: "Carol".to_string(),
            age: 9,
        };
        let maps = vec![flatten(&person)];
        assert_eq!(all_keys(&maps), vec!["Name", "Age"]);
        assert_eq!(all_keys(&maps), all_keys(&maps));
    }

    #[test]
    fn test_to_value_bridge() {
        #[derive(serde::Serialize)]
        struct Raw {
            enabled: bool,
        }

        let value = to_value(&Raw { enabled: true }).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("enabled"), Some(&Value::Bool(true)));
    }
}
