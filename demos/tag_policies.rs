//! Every tag option in one place.
//!
//! Run with: cargo run --example tag_policies

use chrono::{TimeZone, Utc};
use serde_inspect::{dump, inspect, Flattener};

struct Limits {
    cpu: u32,
    memory: u32,
}

inspect!(Limits { cpu, memory });

struct Job {
    // renamed
    name: String,
    // skipped when zero
    retries: u32,
    // textual form instead of recursion
    scheduled_at: chrono::DateTime<Utc>,
    // nested mapping hoisted into the parent
    limits: Limits,
    // raw value, no tag-driven recursion
    raw_limits: Limits,
    // excluded entirely
    token: String,
}

inspect! {
    Job {
        name => { "inspect" => "job_name", "audit" => "job" },
        retries => ",omitempty",
        scheduled_at => ",string",
        limits => ",flatten",
        raw_limits => ",omitnested",
        token => { "inspect" => "-", "audit" => "-" },
    }
}

fn main() {
    let job = Job {
        name: "rebuild-index".to_string(),
        retries: 0,
        scheduled_at: Utc.with_ymd_and_hms(2024, 6, 1, 3, 30, 0).unwrap(),
        limits: Limits {
            cpu: 2,
            memory: 512,
        },
        raw_limits: Limits {
            cpu: 1,
            memory: 128,
        },
        token: "do-not-print".to_string(),
    };

    // job_name appears, retries vanishes (zero), cpu/memory are hoisted,
    // raw_limits stays nested, token never shows up
    println!("{}", dump(&job));

    // The same type can carry tags for several namespaces; pick one per
    // flattener instead of mutating global state
    let flattener = Flattener::new().with_tag_name("audit");
    let audit_view = flattener.flatten(&job);
    println!("audit keys: {:?}", audit_view.keys().collect::<Vec<_>>());
}
