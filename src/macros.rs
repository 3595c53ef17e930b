/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Handy for snapshot payloads and test fixtures.
///
/// # Examples
///
/// ```rust
/// use serde_inspect::value;
///
/// let data = value!({
///     "name": "Alice",
///     "age": 30,
///     "tags": ["rust", "serde"]
/// });
/// assert!(data.is_object());
/// ```
#[macro_export]
macro_rules! value {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::FieldMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $val:tt),* $(,)? }) => {{
        let mut object = $crate::FieldMap::new();
        $(
            object.insert($key.to_string(), $crate::value!($val));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any expression, routed through the serde bridge
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}

/// Implements [`Inspect`](crate::Inspect) for a struct from its field list.
///
/// This is the declaration-side counterpart of struct tags: each listed
/// field may carry a raw tag string, registered under the default tag
/// namespace, or an explicit `{ "namespace" => "tag", ... }` block for
/// multiple namespaces. Unlisted fields are invisible to the flattening
/// engine, like unexported fields.
///
/// # Examples
///
/// ```rust
/// use serde_inspect::{flatten, inspect};
///
/// struct Server {
///     name: String,
///     port: u16,
///     secret: String,
/// }
///
/// inspect! {
///     Server {
///         name => "server_name",
///         port => ",omitempty",
///         secret => "-",
///     }
/// }
///
/// let server = Server {
///     name: "prod".to_string(),
///     port: 0,
///     secret: "hunter2".to_string(),
/// };
/// let map = flatten(&server);
/// assert_eq!(map.get("server_name").and_then(|v| v.as_str()), Some("prod"));
/// assert!(map.get("port").is_none());
/// assert!(map.get("secret").is_none());
/// ```
#[macro_export]
macro_rules! inspect {
    ($ty:ty { $($field:ident $(=> $spec:tt)?),* $(,)? }) => {
        impl $crate::Inspect for $ty {
            fn shape(&self) -> $crate::Shape {
                $crate::Shape::Record
            }

            fn static_shape() -> $crate::Shape {
                $crate::Shape::Record
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::Field<'_>> {
                vec![
                    $(
                        $crate::Field {
                            name: stringify!($field),
                            tags: $crate::inspect!(@tags $($spec)?),
                            value: &self.$field,
                        }
                    ),*
                ]
            }

            fn to_value(&self) -> $crate::Value {
                let mut map = $crate::FieldMap::new();
                $(
                    map.insert(
                        stringify!($field).to_string(),
                        $crate::Inspect::to_value(&self.$field),
                    );
                )*
                $crate::Value::Object(map)
            }

            fn is_zero(&self) -> bool {
                true $(&& $crate::Inspect::is_zero(&self.$field))*
            }
        }
    };

    (@tags) => {
        &[]
    };
    (@tags $tag:literal) => {
        &[($crate::DEFAULT_TAG_NAME, $tag)]
    };
    (@tags { $($ns:literal => $tag:literal),+ $(,)? }) => {
        &[$(($ns, $tag)),+]
    };
}

#[cfg(test)]
mod tests {
    use crate::{FieldMap, Inspect, Number, Shape, Value};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(42), Value::Number(Number::Integer(42)));
        assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_arrays() {
        assert_eq!(value!([]), Value::Array(vec![]));

        let arr = value!([1, 2, 3]);
        match arr {
            Value::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], Value::Number(Number::Integer(1)));
                assert_eq!(vec[1], Value::Number(Number::Integer(2)));
                assert_eq!(vec[2], Value::Number(Number::Integer(3)));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_value_macro_objects() {
        assert_eq!(value!({}), Value::Object(FieldMap::new()));

        let obj = value!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            Value::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
                assert_eq!(map.get("age"), Some(&Value::Number(Number::Integer(30))));
            }
            _ => panic!("Expected object"),
        }
    }

    struct Plain {
        id: u32,
        label: String,
    }

    inspect! {
        Plain {
            id,
            label,
        }
    }

    struct Tagged {
        id: u32,
        label: String,
    }

    inspect! {
        Tagged {
            id => { "inspect" => "identifier", "db" => "row_id" },
            label => ",omitempty",
        }
    }

    #[test]
    fn test_inspect_macro_untagged() {
        let plain = Plain {
            id: 7,
            label: "x".to_string(),
        };
        assert_eq!(plain.shape(), Shape::Record);
        let fields = plain.fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "id");
        assert_eq!(fields[0].tag("inspect"), "");
        assert_eq!(fields[1].name, "label");
    }

    #[test]
    fn test_inspect_macro_namespaces() {
        let tagged = Tagged {
            id: 7,
            label: String::new(),
        };
        let fields = tagged.fields();
        assert_eq!(fields[0].tag("inspect"), "identifier");
        assert_eq!(fields[0].tag("db"), "row_id");
        assert_eq!(fields[1].tag("inspect"), ",omitempty");
        assert_eq!(fields[1].tag("db"), "");
    }

    #[test]
    fn test_inspect_macro_structural_conversion() {
        let plain = Plain {
            id: 1,
            label: "a".to_string(),
        };
        let raw = plain.to_value();
        let obj = raw.as_object().unwrap();
        assert_eq!(obj.get("id"), Some(&Value::from(1u32)));
        assert_eq!(obj.get("label"), Some(&Value::from("a")));
    }

    #[test]
    fn test_inspect_macro_deep_zero() {
        let zero = Plain {
            id: 0,
            label: String::new(),
        };
        assert!(zero.is_zero());

        let nonzero = Plain {
            id: 0,
            label: "set".to_string(),
        };
        assert!(!nonzero.is_zero());
    }
}
