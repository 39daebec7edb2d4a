// Criterion benchmarks for inflekt-rules.
//
// The corpus is generated in memory: a few hundred regular verb-like
// pairs across three tags, enough to exercise alignment, mining, and
// selection on realistic word lengths.
//
// Run:
//   cargo bench -p inflekt-rules

use criterion::{Criterion, criterion_group, criterion_main};

use inflekt_core::record::Record;
use inflekt_rules::Model;

/// Build a synthetic training corpus of regular inflections.
fn training_corpus() -> Vec<Record> {
    let stems = [
        "walk", "talk", "jump", "kiss", "play", "wait", "climb", "paint",
        "clean", "cook", "open", "close", "start", "turn", "pull", "push",
        "land", "lift", "pack", "plant", "rain", "roll", "sail", "shout",
        "stay", "wash", "watch", "work", "call", "help",
    ];
    let mut records = Vec::new();
    for stem in stems {
        records.push(Record::new(stem, format!("{stem}ed"), "V;PST"));
        records.push(Record::new(stem, format!("{stem}s"), "V;PRS;3;SG"));
        records.push(Record::new(stem, format!("{stem}ing"), "V;PTCP;PRS"));
    }
    records
}

fn bench_train(c: &mut Criterion) {
    let corpus = training_corpus();
    c.bench_function("train_90_records", |b| {
        b.iter(|| std::hint::black_box(Model::train(&corpus)));
    });
}

fn bench_predict(c: &mut Criterion) {
    let model = Model::train(&training_corpus());
    let lemmas = ["balk", "stalk", "creep", "march", "point", "wander"];

    c.bench_function("predict_18_queries", |b| {
        b.iter(|| {
            for lemma in &lemmas {
                for tag in ["V;PST", "V;PRS;3;SG", "V;PTCP;PRS"] {
                    std::hint::black_box(model.predict(lemma, tag));
                }
            }
        });
    });
}

fn bench_mine_single_pair(c: &mut Criterion) {
    c.bench_function("mine_long_pair", |b| {
        b.iter(|| {
            std::hint::black_box(inflekt_rules::miner::mine(
                "uskomattomuudella",
                "uskomattomuudellansakaan",
            ));
        });
    });
}

criterion_group!(benches, bench_train, bench_predict, bench_mine_single_pair);
criterion_main!(benches);
