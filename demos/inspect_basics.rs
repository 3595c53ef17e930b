//! First steps: flatten a struct, dump it, snapshot variables.
//!
//! Run with: cargo run --example inspect_basics

use serde_inspect::{flatten, inspect, print_dump, value, vars, Value};

struct Server {
    name: String,
    host: String,
    port: u16,
}

inspect!(Server { name, host, port });

fn main() {
    let server = Server {
        name: "edge-1".to_string(),
        host: "10.0.0.7".to_string(),
        port: 8443,
    };

    // The flattened mapping keeps declaration order
    let map = flatten(&server);
    println!("keys: {:?}", map.keys().collect::<Vec<_>>());
    println!("port: {}", map.get("port").unwrap());

    // Pretty display dump (quotes stripped by design)
    print_dump(&server);

    // Snapshot a name -> value mapping; no-op unless INSPECT_VARS is set
    let payload = value!({
        "server": "edge-1",
        "attempt": 1
    });
    if let Value::Object(objs) = payload {
        vars(&objs);
    }

    println!("set INSPECT_VARS=/tmp/inspect.json to capture snapshots");
}
