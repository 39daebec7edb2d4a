// The trained model: direction bias plus frozen rule tables.

use std::collections::HashSet;

use inflekt_core::enums::Direction;
use inflekt_core::record::Record;
use inflekt_core::symbols::reverse;

use crate::table::RuleTable;
use crate::{bias, miner, select};

/// Summary statistics of one training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingStats {
    pub records: usize,
    pub distinct_lemmas: usize,
    pub distinct_tags: usize,
}

/// A trained reinflection model.
///
/// Construction runs the full training fold: one bias pass over all
/// records fixes the direction, then one mining pass accumulates rules
/// into the table. The model is immutable afterwards; prediction only
/// reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    direction: Direction,
    table: RuleTable,
    stats: TrainingStats,
}

impl Model {
    /// Train a model from an ordered sequence of records.
    ///
    /// An empty training set yields an empty table; every prediction then
    /// falls back to the identity.
    pub fn train(records: &[Record]) -> Self {
        let direction = bias::estimate(records);

        let mut table = RuleTable::new();
        let mut lemmas = HashSet::new();
        let mut tags = HashSet::new();
        for record in records {
            lemmas.insert(record.lemma.as_str());
            tags.insert(record.tag.as_str());

            let mined = if direction.is_prefixing() {
                miner::mine(&reverse(&record.lemma), &reverse(&record.form))
            } else {
                miner::mine(&record.lemma, &record.form)
            };
            table.record(&record.tag, &mined.prefix, &mined.suffix);
        }

        let stats = TrainingStats {
            records: records.len(),
            distinct_lemmas: lemmas.len(),
            distinct_tags: tags.len(),
        };
        Model {
            direction,
            table,
            stats,
        }
    }

    /// Predict the inflected form of `lemma` under `tag`.
    ///
    /// In a prefixing language the lemma is reversed on the way in and the
    /// prediction reversed back on the way out.
    pub fn predict(&self, lemma: &str, tag: &str) -> String {
        if self.direction.is_prefixing() {
            reverse(&select::apply(&self.table, &reverse(lemma), tag))
        } else {
            select::apply(&self.table, lemma, tag)
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn stats(&self) -> TrainingStats {
        self.stats
    }

    /// Rebuild a model from stored parts; used when loading a persisted
    /// model.
    pub(crate) fn from_parts(direction: Direction, table: RuleTable, stats: TrainingStats) -> Self {
        Self {
            direction,
            table,
            stats,
        }
    }
}
