//! Tabular rendering of record slices.
//!
//! Run with: cargo run --example table_dump

use serde_inspect::{inspect, print_dump_table, TableOptions};

struct Release {
    version: String,
    channel: String,
    downloads: u32,
}

inspect!(Release {
    version,
    channel,
    downloads
});

fn main() {
    let releases = vec![
        Release {
            version: "1.0.0".to_string(),
            channel: "stable".to_string(),
            downloads: 12840,
        },
        Release {
            version: "1.1.0-rc1".to_string(),
            channel: "beta".to_string(),
            downloads: 301,
        },
        Release {
            version: "1.1.0".to_string(),
            channel: "stable".to_string(),
            downloads: 5120,
        },
    ];

    // Auto headers: the aggregated key set in first-seen order
    print_dump_table(&releases);

    // Explicit headers select and order the columns
    TableOptions::new()
        .with_headers(vec!["version".to_string(), "downloads".to_string()])
        .print_dump_table(&releases);

    // The filter hook sees the constructed table before rendering
    TableOptions::new()
        .with_filter(|table| {
            table.add_row(vec!["(next)", "", ""]);
        })
        .print_dump_table(&releases);
}
