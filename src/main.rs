//! Command-line interface for jpmark-rs
//!
//! Usage:
//!   jpmark [OPTIONS] <DOCUMENT>
//!   cat lesson.xml | jpmark
//!
//! Options:
//!   -f, --file <FILE>    Read the document from a file (not with <DOCUMENT>)
//!   -c, --config <FILE>  JSON configuration file
//!   -t, --tag-only       Stop after tagging, do not merge
//!   -j, --json           Output merged elements as JSON
//!   -v, --verbose        Log intermediate stages
//!   -h, --help           Show help

use jpmark_rs::{parse_elements, Config, Pipeline};
use std::env;
use std::fs;
use std::io::{self, Read};

fn print_help() {
    eprintln!(
        r#"jpmark - mark embedded Japanese inside Chinese paragraphs

USAGE:
    jpmark [OPTIONS] [DOCUMENT]
    cat lesson.xml | jpmark

OPTIONS:
    -f, --file <FILE>    Read the document from a file instead of DOCUMENT
    -c, --config <FILE>  JSON configuration file
    -t, --tag-only       Stop after tagging, do not merge
    -j, --json           Output merged elements as JSON
    -v, --verbose        Log intermediate stages (or set RUST_LOG)
    -h, --help           Show this help message

EXAMPLES:
    jpmark '<p class="ZHTW">重點：くわしい。</p>'
    jpmark -f lesson.xml -j
    jpmark -c jpmark.json < lesson.xml
"#
    );
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

/// Where the document comes from
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Argument(String),
    File(String),
    Stdin,
}

/// A document argument and `--file` are mutually exclusive
fn select_input(document: Option<String>, file_path: Option<String>) -> Result<Input, String> {
    match (document, file_path) {
        (Some(_), Some(path)) => Err(format!(
            "both a DOCUMENT argument and --file '{}' were given; use one",
            path
        )),
        (Some(d), None) => Ok(Input::Argument(d)),
        (None, Some(path)) => Ok(Input::File(path)),
        (None, None) => Ok(Input::Stdin),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut file_path: Option<String> = None;
    let mut config_path: Option<String> = None;
    let mut tag_only = false;
    let mut json_output = false;
    let mut verbose = false;
    let mut document: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-t" | "--tag-only" => {
                tag_only = true;
            }
            "-j" | "--json" => {
                json_output = true;
            }
            "-v" | "--verbose" => {
                verbose = true;
            }
            "-f" | "--file" | "-c" | "--config" => {
                let flag = args[i].clone();
                i += 1;
                if i >= args.len() {
                    fail(&format!("{} requires a file path", flag));
                }
                if flag == "-f" || flag == "--file" {
                    file_path = Some(args[i].clone());
                } else {
                    config_path = Some(args[i].clone());
                }
            }
            arg if !arg.starts_with('-') => {
                if document.is_some() {
                    fail("only one DOCUMENT argument is accepted");
                }
                document = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = match config_path {
        Some(path) => match Config::from_json_file(&path) {
            Ok(c) => c,
            Err(e) => fail(&format!("loading configuration '{}': {}", path, e)),
        },
        None => Config::default(),
    };

    let source = match select_input(document, file_path) {
        Ok(source) => source,
        Err(e) => fail(&e),
    };

    let pipeline = match Pipeline::new(config) {
        Ok(p) => p,
        Err(e) => fail(&e.to_string()),
    };

    let input = match source {
        Input::Argument(d) => d,
        Input::File(path) => match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => fail(&format!("reading document '{}': {}", path, e)),
        },
        Input::Stdin => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                fail(&format!("reading stdin: {}", e));
            }
            buf
        }
    };

    if input.trim().is_empty() {
        eprintln!("Error: No input document provided");
        print_help();
        std::process::exit(1);
    }

    log::info!("processing {} bytes", input.len());

    let output = if tag_only {
        pipeline.tag_document(&input)
    } else {
        pipeline.process(&input)
    };
    let output = match output {
        Ok(o) => o,
        Err(e) => fail(&e.to_string()),
    };

    if json_output {
        let elements = match parse_elements(&output) {
            Ok(elements) => elements,
            Err(e) => fail(&e.to_string()),
        };
        match serde_json::to_string_pretty(&elements) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&format!("serializing to JSON: {}", e)),
        }
    } else {
        println!("{}", output);
    }
}
