// inflekt-train: learn edit rules from a training TSV.
//
// Reads `lemma<TAB>form<TAB>tag` records (one per line, blank lines
// skipped), trains a reinflection model, and prints a training summary.
// With -o the trained model is saved as JSON for later use with
// inflekt-predict.
//
// Usage:
//   inflekt-train TRAIN_TSV [-o MODEL_JSON]
//
// Options:
//   -o, --output PATH   Save the trained model as JSON
//   -h, --help          Print help

use std::path::Path;

use inflekt_rules::{Model, persist};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if inflekt_cli::wants_help(&args) || args.is_empty() {
        println!("inflekt-train: learn edit rules from a training TSV.");
        println!();
        println!("Usage: inflekt-train TRAIN_TSV [-o MODEL_JSON]");
        println!();
        println!("Reads lemma<TAB>form<TAB>tag records, one per line.");
        println!();
        println!("Options:");
        println!("  -o, --output PATH   Save the trained model as JSON");
        println!("  -h, --help          Print this help");
        return;
    }

    let (model_path, args) = inflekt_cli::parse_option(&args, "--output", "-o");
    let Some(train_path) = args.first() else {
        inflekt_cli::fatal("missing TRAIN_TSV argument");
    };

    let records = inflekt_cli::read_records(Path::new(train_path))
        .unwrap_or_else(|e| inflekt_cli::fatal(&e));
    let model = Model::train(&records);
    let stats = model.stats();

    println!("direction: {}", model.direction());
    println!("records: {}", stats.records);
    println!("distinct lemmas: {}", stats.distinct_lemmas);
    println!("distinct tags: {}", stats.distinct_tags);
    println!("prefix rules: {}", model.table().prefix_rule_count());
    println!("suffix rules: {}", model.table().suffix_rule_count());

    if let Some(path) = model_path {
        persist::save(&model, Path::new(&path))
            .unwrap_or_else(|e| inflekt_cli::fatal(&e.to_string()));
        println!("model saved to {path}");
    }
}
