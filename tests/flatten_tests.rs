use chrono::{DateTime, TimeZone, Utc};
use serde_inspect::{flatten, inspect, Flattener, Inspect, Shape, Value};
use std::collections::BTreeMap;

struct Address {
    street: String,
    city: String,
}

inspect!(Address { street, city });

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

struct Team {
    name: String,
}

inspect! {
    Team {
        name => "team_name",
    }
}

struct Ship {
    id: u32,
}

inspect! {
    Ship {
        id => "ship_id",
    }
}

#[test]
fn test_untagged_record_keeps_declared_names() {
    let address = Address {
        street: "Main St 1".to_string(),
        city: "Springfield".to_string(),
    };
    let map = flatten(&address);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("street").and_then(Value::as_str), Some("Main St 1"));
    assert_eq!(map.get("city").and_then(Value::as_str), Some("Springfield"));

    // declaration order carries through
    let keys: Vec<_> = map.keys().cloned().collect();
    assert_eq!(keys, vec!["street", "city"]);
}

#[test]
fn test_rename_applies() {
    let person = Person {
        name: "Alice".to_string(),
        age: 30,
    };
    let map = flatten(&person);
    assert_eq!(map.get("Name").and_then(Value::as_str), Some("Alice"));
    assert_eq!(map.get("Age").and_then(Value::as_i64), Some(30));
    assert!(map.get("name").is_none());
}

#[test]
fn test_omitempty_skips_zero_only() {
    let zero_age = Person {
        name: "Alice".to_string(),
        age: 0,
    };
    let map = flatten(&zero_age);
    assert_eq!(map.len(), 1);
    assert!(map.get("Age").is_none());

    let with_age = Person {
        name: "Alice".to_string(),
        age: 1,
    };
    let map = flatten(&with_age);
    assert_eq!(map.get("Age").and_then(Value::as_i64), Some(1));
}

struct Credentials {
    user: String,
    password: String,
}

inspect! {
    Credentials {
        user,
        password => "-",
    }
}

#[test]
fn test_dash_excludes_field() {
    let credentials = Credentials {
        user: "root".to_string(),
        password: "hunter2".to_string(),
    };
    let map = flatten(&credentials);
    assert_eq!(map.len(), 1);
    assert!(map.get("password").is_none());
}

struct Profile {
    id: u32,
    inner: Address,
}

inspect! {
    Profile {
        id,
        inner => ",flatten",
    }
}

#[test]
fn test_flatten_option_hoists_nested_keys() {
    let profile = Profile {
        id: 7,
        inner: Address {
            street: "Elm".to_string(),
            city: "Shelbyville".to_string(),
        },
    };
    let map = flatten(&profile);
    assert!(map.get("inner").is_none());
    assert_eq!(map.get("street").and_then(Value::as_str), Some("Elm"));
    assert_eq!(map.get("city").and_then(Value::as_str), Some("Shelbyville"));
    assert_eq!(map.get("id").and_then(Value::as_i64), Some(7));
}

struct Collision {
    city: String,
    inner: Address,
}

inspect! {
    Collision {
        city,
        inner => ",flatten",
    }
}

#[test]
fn test_flatten_collision_later_field_wins() {
    let collision = Collision {
        city: "Ogdenville".to_string(),
        inner: Address {
            street: "Oak".to_string(),
            city: "North Haverbrook".to_string(),
        },
    };
    let map = flatten(&collision);
    // the flattened field is declared later, so its city overwrites
    assert_eq!(
        map.get("city").and_then(Value::as_str),
        Some("North Haverbrook")
    );
}

struct Wrapped {
    person: Person,
}

inspect! {
    Wrapped {
        person => ",omitnested",
    }
}

#[test]
fn test_omitnested_skips_tag_policies() {
    let wrapped = Wrapped {
        person: Person {
            name: "Bob".to_string(),
            age: 0,
        },
    };
    let map = flatten(&wrapped);
    let raw = map.get("person").and_then(Value::as_object).unwrap();
    // raw structural conversion: declared names, no rename, no omitempty
    assert_eq!(raw.get("name").and_then(Value::as_str), Some("Bob"));
    assert_eq!(raw.get("age").and_then(Value::as_i64), Some(0));
    assert!(raw.get("Name").is_none());
}

struct Event {
    label: String,
    at: DateTime<Utc>,
    attempts: u32,
}

inspect! {
    Event {
        label,
        at => ",string",
        attempts => ",string",
    }
}

#[test]
fn test_string_option_uses_textual_form_or_drops() {
    let event = Event {
        label: "deploy".to_string(),
        at: Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap(),
        attempts: 3,
    };
    let map = flatten(&event);
    // DateTime has a textual form
    let at = map.get("at").and_then(Value::as_str).unwrap();
    assert!(at.starts_with("2024-05-17T12:00:00"));
    // u32 has none, so the field vanishes entirely
    assert!(map.get("attempts").is_none());
    assert_eq!(map.len(), 2);
}

struct Nested {
    label: String,
    address: Address,
}

inspect!(Nested { label, address });

#[test]
fn test_nested_record_flattens_recursively() {
    let nested = Nested {
        label: "home".to_string(),
        address: Address {
            street: "Main".to_string(),
            city: "Springfield".to_string(),
        },
    };
    let map = flatten(&nested);
    let address = map.get("address").and_then(Value::as_object).unwrap();
    assert_eq!(address.get("street").and_then(Value::as_str), Some("Main"));
}

struct MaybeProfile {
    primary: Option<Address>,
    backup: Option<Address>,
}

inspect!(MaybeProfile { primary, backup });

#[test]
fn test_nullable_fields() {
    let profile = MaybeProfile {
        primary: Some(Address {
            street: "First".to_string(),
            city: "Springfield".to_string(),
        }),
        backup: None,
    };
    let map = flatten(&profile);
    let primary = map.get("primary").and_then(Value::as_object).unwrap();
    assert_eq!(primary.get("street").and_then(Value::as_str), Some("First"));
    assert_eq!(map.get("backup"), Some(&Value::Null));
}

#[test]
fn test_nullable_record_input_unwraps() {
    let boxed: Option<Box<Person>> = Some(Box::new(Person {
        name: "Eve".to_string(),
        age: 5,
    }));
    let map = flatten(&boxed);
    assert_eq!(map.get("Name").and_then(Value::as_str), Some("Eve"));
}

#[test]
#[should_panic(expected = "record-shaped")]
fn test_flatten_rejects_primitives() {
    flatten(&"just a string");
}

#[test]
#[should_panic(expected = "record-shaped")]
fn test_flatten_rejects_slices() {
    flatten(&vec![1, 2, 3]);
}

struct Registry {
    teams: BTreeMap<String, Team>,
    rosters: BTreeMap<String, Vec<Team>>,
    counts: BTreeMap<String, i32>,
    regions: BTreeMap<String, BTreeMap<String, Team>>,
}

inspect!(Registry {
    teams,
    rosters,
    counts,
    regions
});

fn registry() -> Registry {
    let mut teams = BTreeMap::new();
    teams.insert(
        "red".to_string(),
        Team {
            name: "Red".to_string(),
        },
    );

    let mut rosters = BTreeMap::new();
    rosters.insert(
        "north".to_string(),
        vec![Team {
            name: "Crimson".to_string(),
        }],
    );

    let mut counts = BTreeMap::new();
    counts.insert("members".to_string(), 11);

    let mut inner = BTreeMap::new();
    inner.insert(
        "east".to_string(),
        Team {
            name: "Jade".to_string(),
        },
    );
    let mut regions = BTreeMap::new();
    regions.insert("asia".to_string(), inner);

    Registry {
        teams,
        rosters,
        counts,
        regions,
    }
}

#[test]
fn test_map_of_records_descends() {
    let map = flatten(&registry());
    let teams = map.get("teams").and_then(Value::as_object).unwrap();
    let red = teams.get("red").and_then(Value::as_object).unwrap();
    // descended: the tag rename applied
    assert_eq!(red.get("team_name").and_then(Value::as_str), Some("Red"));
}

#[test]
fn test_map_of_slice_of_records_descends() {
    let map = flatten(&registry());
    let rosters = map.get("rosters").and_then(Value::as_object).unwrap();
    let north = rosters.get("north").and_then(Value::as_array).unwrap();
    let first = north[0].as_object().unwrap();
    assert_eq!(
        first.get("team_name").and_then(Value::as_str),
        Some("Crimson")
    );
}

#[test]
fn test_map_of_primitives_stays_raw() {
    let map = flatten(&registry());
    let counts = map.get("counts").and_then(Value::as_object).unwrap();
    assert_eq!(counts.get("members").and_then(Value::as_i64), Some(11));
}

#[test]
fn test_map_of_map_of_records_stays_raw() {
    let map = flatten(&registry());
    let regions = map.get("regions").and_then(Value::as_object).unwrap();
    let asia = regions.get("asia").and_then(Value::as_object).unwrap();
    let east = asia.get("east").and_then(Value::as_object).unwrap();
    // raw structural conversion: declared name, no rename
    assert_eq!(east.get("name").and_then(Value::as_str), Some("Jade"));
    assert!(east.get("team_name").is_none());
}

struct Fleet {
    ships: Vec<Ship>,
    maybe_ships: Vec<Option<Ship>>,
    ids: Vec<u32>,
    convoys: Vec<Vec<Ship>>,
    dynamics: Vec<Value>,
}

inspect!(Fleet {
    ships,
    maybe_ships,
    ids,
    convoys,
    dynamics
});

fn fleet() -> Fleet {
    Fleet {
        ships: vec![Ship { id: 1 }, Ship { id: 2 }],
        maybe_ships: vec![Some(Ship { id: 3 }), None],
        ids: vec![10, 20],
        convoys: vec![vec![Ship { id: 4 }]],
        dynamics: vec![Value::from(1), Value::from("two")],
    }
}

#[test]
fn test_slice_of_records_descends() {
    let map = flatten(&fleet());
    let ships = map.get("ships").and_then(Value::as_array).unwrap();
    assert_eq!(ships.len(), 2);
    let first = ships[0].as_object().unwrap();
    assert_eq!(first.get("ship_id").and_then(Value::as_i64), Some(1));
}

#[test]
fn test_slice_of_nullable_records_descends() {
    let map = flatten(&fleet());
    let maybe = map.get("maybe_ships").and_then(Value::as_array).unwrap();
    let first = maybe[0].as_object().unwrap();
    assert_eq!(first.get("ship_id").and_then(Value::as_i64), Some(3));
    assert_eq!(maybe[1], Value::Null);
}

#[test]
fn test_slice_of_primitives_stays_raw() {
    let map = flatten(&fleet());
    let ids = map.get("ids").and_then(Value::as_array).unwrap();
    assert_eq!(ids, &vec![Value::from(10u32), Value::from(20u32)]);
}

#[test]
fn test_slice_of_slices_stays_raw() {
    let map = flatten(&fleet());
    let convoys = map.get("convoys").and_then(Value::as_array).unwrap();
    let inner = convoys[0].as_array().unwrap();
    let ship = inner[0].as_object().unwrap();
    // raw structural conversion: declared name survives
    assert_eq!(ship.get("id").and_then(Value::as_i64), Some(4));
    assert!(ship.get("ship_id").is_none());
}

#[test]
fn test_slice_of_dynamic_values_stays_raw() {
    let map = flatten(&fleet());
    let dynamics = map.get("dynamics").and_then(Value::as_array).unwrap();
    assert_eq!(dynamics[0], Value::from(1));
    assert_eq!(dynamics[1], Value::from("two"));
}

struct Opaque;

impl Inspect for Opaque {
    fn shape(&self) -> Shape {
        Shape::Record
    }

    fn static_shape() -> Shape {
        Shape::Record
    }

    fn to_value(&self) -> Value {
        Value::String("<opaque>".to_string())
    }

    fn is_zero(&self) -> bool {
        false
    }
}

struct Holder {
    tag: String,
    blob: Opaque,
}

inspect!(Holder { tag, blob });

#[test]
fn test_empty_record_falls_back_to_raw_value() {
    let holder = Holder {
        tag: "x".to_string(),
        blob: Opaque,
    };
    let map = flatten(&holder);
    // no enumerable fields: the raw representation, not an empty mapping
    assert_eq!(map.get("blob").and_then(Value::as_str), Some("<opaque>"));
}

struct DualTag {
    id: u32,
    label: String,
}

inspect! {
    DualTag {
        id => { "inspect" => "identifier", "db" => "row_id" },
        label => { "db" => ",omitempty" },
    }
}

#[test]
fn test_alternate_tag_namespace() {
    let dual = DualTag {
        id: 3,
        label: String::new(),
    };

    let default_map = flatten(&dual);
    assert_eq!(default_map.get("identifier").and_then(Value::as_i64), Some(3));
    // the db namespace's omitempty is invisible to the default namespace
    assert_eq!(default_map.get("label").and_then(Value::as_str), Some(""));

    let db_map = Flattener::new().with_tag_name("db").flatten(&dual);
    assert_eq!(db_map.get("row_id").and_then(Value::as_i64), Some(3));
    assert!(db_map.get("label").is_none());
}

struct DeepZero {
    address: Address,
    note: String,
}

inspect! {
    DeepZero {
        address => ",omitempty",
        note,
    }
}

#[test]
fn test_omitempty_uses_deep_structural_zero() {
    let all_zero = DeepZero {
        address: Address {
            street: String::new(),
            city: String::new(),
        },
        note: "kept".to_string(),
    };
    let map = flatten(&all_zero);
    assert!(map.get("address").is_none());

    let partly_set = DeepZero {
        address: Address {
            street: "set".to_string(),
            city: String::new(),
        },
        note: "kept".to_string(),
    };
    let map = flatten(&partly_set);
    assert!(map.get("address").is_some());
}
