//! Simple CLI that reads a tagged transcript from stdin and outputs JSON to stdout.
//! Used by batch pipelines that shell out per document.

use rs_papermeta::parse_bytes;
use std::io::{self, Read};

fn main() {
    env_logger::init();

    let mut bytes = Vec::new();
    if io::stdin().read_to_end(&mut bytes).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let record = parse_bytes(&bytes);

    println!("{}", serde_json::to_string(&record).unwrap_or_default());
}
