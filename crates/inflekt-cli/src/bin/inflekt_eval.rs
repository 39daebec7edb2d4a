// inflekt-eval: score a trained model on held-out records.
//
// Trains on TRAIN_TSV, predicts a form for every record in EVAL_TSV, and
// prints the exact-match score (predictions compared against the gold
// form under NFC normalization).
//
// Usage:
//   inflekt-eval -t TRAIN_TSV EVAL_TSV
//
// Options:
//   -t, --train PATH   Training TSV of lemma<TAB>form<TAB>tag records
//   -h, --help         Print help

use std::path::Path;

use inflekt_rules::Model;
use inflekt_rules::score::exact_match;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if inflekt_cli::wants_help(&args) || args.is_empty() {
        println!("inflekt-eval: score a trained model on held-out records.");
        println!();
        println!("Usage: inflekt-eval -t TRAIN_TSV EVAL_TSV");
        println!();
        println!("Both files hold lemma<TAB>form<TAB>tag records, one per line;");
        println!("the eval form field is the gold form. Prints the exact-match");
        println!("score under NFC normalization.");
        println!();
        println!("Options:");
        println!("  -t, --train PATH   Training TSV");
        println!("  -h, --help         Print this help");
        return;
    }

    let (train_path, args) = inflekt_cli::parse_option(&args, "--train", "-t");
    let Some(train_path) = train_path else {
        inflekt_cli::fatal("missing -t TRAIN_TSV option");
    };
    let Some(eval_path) = args.first() else {
        inflekt_cli::fatal("missing EVAL_TSV argument");
    };

    let train_records = inflekt_cli::read_records(Path::new(&train_path))
        .unwrap_or_else(|e| inflekt_cli::fatal(&e));
    let eval_records = inflekt_cli::read_records(Path::new(eval_path))
        .unwrap_or_else(|e| inflekt_cli::fatal(&e));

    let model = Model::train(&train_records);

    let predictions: Vec<String> = eval_records
        .iter()
        .map(|r| model.predict(&r.lemma, &r.tag))
        .collect();
    let gold: Vec<String> = eval_records.iter().map(|r| r.form.clone()).collect();

    let score = exact_match(&gold, &predictions)
        .unwrap_or_else(|e| inflekt_cli::fatal(&e.to_string()));
    let hits = (score * eval_records.len() as f64).round() as usize;

    println!("exact match: {score:.4} ({hits}/{})", eval_records.len());
}
