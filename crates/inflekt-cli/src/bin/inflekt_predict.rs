// inflekt-predict: predict inflected forms for lemma/tag queries.
//
// Loads or trains a model, then prints one predicted form per input
// line. Queries are `lemma<TAB>tag` lines, or full three-field records
// whose middle field is ignored, read from INPUT_TSV or stdin.
//
// Usage:
//   inflekt-predict (-t TRAIN_TSV | -m MODEL_JSON) [INPUT_TSV]
//
// Options:
//   -t, --train PATH   Train from a TSV of lemma<TAB>form<TAB>tag records
//   -m, --model PATH   Load a model saved by inflekt-train
//   -h, --help         Print help

use std::io::{self, Read, Write};
use std::path::Path;

use inflekt_rules::{Model, persist};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if inflekt_cli::wants_help(&args) {
        println!("inflekt-predict: predict inflected forms for lemma/tag queries.");
        println!();
        println!("Usage: inflekt-predict (-t TRAIN_TSV | -m MODEL_JSON) [INPUT_TSV]");
        println!();
        println!("Queries are lemma<TAB>tag lines (or three-field records whose");
        println!("middle field is ignored), read from INPUT_TSV or stdin.");
        println!("One predicted form is printed per query.");
        println!();
        println!("Options:");
        println!("  -t, --train PATH   Train from a TSV of lemma<TAB>form<TAB>tag records");
        println!("  -m, --model PATH   Load a model saved by inflekt-train");
        println!("  -h, --help         Print this help");
        return;
    }

    let (train_path, args) = inflekt_cli::parse_option(&args, "--train", "-t");
    let (model_path, args) = inflekt_cli::parse_option(&args, "--model", "-m");

    let model = match (train_path, model_path) {
        (Some(path), None) => {
            let records = inflekt_cli::read_records(Path::new(&path))
                .unwrap_or_else(|e| inflekt_cli::fatal(&e));
            Model::train(&records)
        }
        (None, Some(path)) => persist::load(Path::new(&path))
            .unwrap_or_else(|e| inflekt_cli::fatal(&e.to_string())),
        _ => inflekt_cli::fatal("exactly one of -t TRAIN_TSV or -m MODEL_JSON is required"),
    };

    let queries = match args.first() {
        Some(path) => inflekt_cli::read_queries(Path::new(path))
            .unwrap_or_else(|e| inflekt_cli::fatal(&e)),
        None => {
            let mut contents = String::new();
            io::stdin()
                .read_to_string(&mut contents)
                .unwrap_or_else(|e| inflekt_cli::fatal(&format!("failed to read stdin: {e}")));
            inflekt_cli::parse_queries(&contents).unwrap_or_else(|e| inflekt_cli::fatal(&e))
        }
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for query in &queries {
        let prediction = model.predict(&query.lemma, &query.tag);
        let _ = writeln!(out, "{prediction}");
    }
}
