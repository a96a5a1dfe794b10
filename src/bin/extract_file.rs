//! Parse one transcript file (or stdin) and print the record as pretty JSON.
//!
//! Usage: `extract_file [--strategy heuristic|ner|union] [--sections] [PATH]`
//!
//! Without PATH, or with `-`, the transcript is read from stdin. A missing file
//! prints the empty record and exits successfully.

use log::info;
use rs_papermeta::{parse_bytes_with_options, parse_file, AuthorStrategy, Options};
use std::io::{self, Read};

fn usage() -> ! {
    eprintln!("Usage: extract_file [--strategy heuristic|ner|union] [--sections] [PATH]");
    std::process::exit(2);
}

fn main() {
    env_logger::init();

    let mut options = Options::default();
    let mut path: Option<String> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--strategy" => {
                let Some(value) = args.next() else { usage() };
                match value.parse::<AuthorStrategy>() {
                    Ok(strategy) => options.author_strategy = strategy,
                    Err(err) => {
                        eprintln!("{err}");
                        usage();
                    }
                }
            }
            "--sections" => options.collect_sections = true,
            "-h" | "--help" => usage(),
            _ if path.is_none() => path = Some(arg),
            _ => usage(),
        }
    }

    // No classifier is attached here, so every strategy runs the heuristics.
    info!("author strategy: {}", options.author_strategy);

    let record = match path.as_deref() {
        None | Some("-") => {
            let mut bytes = Vec::new();
            if io::stdin().read_to_end(&mut bytes).is_err() {
                eprintln!("Failed to read from stdin");
                std::process::exit(1);
            }
            parse_bytes_with_options(&bytes, &options)
        }
        Some(path) => parse_file(path, &options),
    };

    match serde_json::to_string_pretty(&record) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("Failed to serialize record: {err}");
            std::process::exit(1);
        }
    }
}
