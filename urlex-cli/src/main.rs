//! Command-line host for the urlex extraction engine
//! Reads a document, resolves its format, runs extraction and renders the
//! result. Also exposes the line-based cleanup operations and the looser
//! link-collection pass.
//!
//! Usage:
//!   urlex extract `<path>` [--format `<tag>`] [--output text|json]
//!   urlex cleanup `<path>` --op `<dedupe|sort|sort-length>`
//!   urlex collect `<path>`
//!   urlex list-formats

use clap::{Arg, Command};
use tracing_subscriber::EnvFilter;

use urlex_config::{Loader, OutputFormat};
use urlex_engine::postprocess::{dedupe_lines, sort_lines, sort_lines_by_length};
use urlex_engine::{collect_links, extract, ExtractionResult, FormatTag};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("urlex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract, classify and clean up URLs from text documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("extract")
                .about("Extract every URL from a document")
                .arg(Arg::new("path").help("Path to the document").required(true).index(1))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Format tag (default: guessed from the file extension)"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output rendering: text or json (default: from configuration)"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Extra configuration file layered over the defaults"),
                ),
        )
        .subcommand(
            Command::new("cleanup")
                .about("Line-based cleanup of a one-URL-per-line document")
                .arg(Arg::new("path").help("Path to the document").required(true).index(1))
                .arg(
                    Arg::new("op")
                        .long("op")
                        .help("Operation: dedupe, sort or sort-length")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("collect")
                .about("Collect link-like tokens (URLs, domains, paths, anchors) from free text")
                .arg(Arg::new("path").help("Path to the document").required(true).index(1)),
        )
        .subcommand(
            Command::new("list-formats").about("List the format tags the engine accepts"),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("extract", sub)) => {
            let path = sub.get_one::<String>("path").expect("path is required");
            handle_extract(
                path,
                sub.get_one::<String>("format").map(String::as_str),
                sub.get_one::<String>("output").map(String::as_str),
                sub.get_one::<String>("config").map(String::as_str),
            );
        }
        Some(("cleanup", sub)) => {
            let path = sub.get_one::<String>("path").expect("path is required");
            let op = sub.get_one::<String>("op").expect("op is required");
            handle_cleanup(path, op);
        }
        Some(("collect", sub)) => {
            let path = sub.get_one::<String>("path").expect("path is required");
            handle_collect(path);
        }
        Some(("list-formats", _)) => {
            for tag in FormatTag::all() {
                println!("{tag}");
            }
        }
        _ => unreachable!("subcommand is required"),
    }
}

fn read_document(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Cannot read {path}: {e}");
        std::process::exit(1);
    })
}

fn handle_extract(path: &str, format: Option<&str>, output: Option<&str>, config_path: Option<&str>) {
    let mut loader = Loader::new();
    if let Some(config_path) = config_path {
        loader = loader.with_file(config_path);
    }
    let config = loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    });

    let content = read_document(path);
    if config.safety.enabled && content.len() > config.safety.size_warning_threshold {
        eprintln!(
            "Note: {path} is {} bytes, over the configured warning threshold of {}",
            content.len(),
            config.safety.size_warning_threshold
        );
    }

    let tag = format
        .map(str::to_string)
        .unwrap_or_else(|| tag_from_extension(path));
    let result = extract(&content, &tag, None);

    let as_json = match output {
        Some("json") => true,
        Some("text") => false,
        Some(other) => {
            eprintln!("Unknown output rendering '{other}' (expected text or json)");
            std::process::exit(1);
        }
        None => config.output.format == OutputFormat::Json,
    };

    if as_json {
        print_json(&result);
    } else {
        print_text(&result);
    }

    if !result.success {
        std::process::exit(1);
    }
}

fn print_json(result: &ExtractionResult) {
    let rendered = serde_json::to_string_pretty(result).unwrap_or_else(|e| {
        eprintln!("Error rendering result: {e}");
        std::process::exit(1);
    });
    println!("{rendered}");
}

fn print_text(result: &ExtractionResult) {
    for url in &result.urls {
        match &url.position {
            Some(position) => println!("{position}\t{}\t{}", url.scheme, url.value),
            None => match &url.context {
                Some(context) => println!("{context}\t{}\t{}", url.scheme, url.value),
                None => println!("-\t{}\t{}", url.scheme, url.value),
            },
        }
    }
    for error in &result.errors {
        eprintln!("{error}");
    }
}

fn handle_cleanup(path: &str, op: &str) {
    let content = read_document(path);
    let cleaned = match op {
        "dedupe" => dedupe_lines(&content),
        "sort" => sort_lines(&content),
        "sort-length" => sort_lines_by_length(&content),
        other => {
            eprintln!("Unknown cleanup operation '{other}' (expected dedupe, sort or sort-length)");
            std::process::exit(1);
        }
    };
    println!("{cleaned}");
}

fn handle_collect(path: &str) {
    let content = read_document(path);
    for url in collect_links(&content) {
        let kind = url.kind.map(|k| k.as_str()).unwrap_or("full");
        match &url.position {
            Some(position) => println!("{position}\t{kind}\t{}", url.value),
            None => println!("-\t{kind}\t{}", url.value),
        }
    }
}

/// Map a file extension onto a format tag; the dispatcher treats anything
/// unknown as Markdown anyway.
fn tag_from_extension(path: &str) -> String {
    let extension = std::path::Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let tag = match extension.as_str() {
        "html" | "htm" => "html",
        "css" => "css",
        "js" | "mjs" | "cjs" => "javascript",
        "ts" | "tsx" => "typescript",
        "json" => "json",
        "yaml" => "yaml",
        "yml" => "yml",
        "properties" | "env" => "properties",
        "toml" => "toml",
        "ini" | "cfg" | "conf" => "ini",
        "xml" | "svg" => "xml",
        _ => "markdown",
    };
    tag.to_string()
}
