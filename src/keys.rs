//! Key aggregation across flattened mappings.

use crate::FieldMap;
use indexmap::IndexSet;

/// Computes the deduplicated union of keys over a sequence of mappings.
///
/// Mappings are scanned in order, keys within each mapping in its own
/// iteration order; every key is kept the first time it is seen. The table
/// renderer uses this for automatic headers, so the output order is the
/// column order.
///
/// Pure and total: an empty input yields an empty output.
///
/// # Examples
///
/// ```rust
/// use serde_inspect::{all_keys, FieldMap, Value};
///
/// let mut first = FieldMap::new();
/// first.insert("a".to_string(), Value::from(1));
/// first.insert("b".to_string(), Value::from(2));
///
/// let mut second = FieldMap::new();
/// second.insert("b".to_string(), Value::from(3));
/// second.insert("c".to_string(), Value::from(4));
///
/// assert_eq!(all_keys(&[first, second]), vec!["a", "b", "c"]);
/// ```
#[must_use]
pub fn all_keys(maps: &[FieldMap]) -> Vec<String> {
    let mut seen: IndexSet<String> = IndexSet::new();
    for map in maps {
        for key in map.keys() {
            seen.insert(key.clone());
        }
    }
    seen.into_iter().collect()
}
