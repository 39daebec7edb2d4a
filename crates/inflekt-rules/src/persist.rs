// JSON persistence of trained models.
//
// The on-disk form is a flat JSON document carrying the direction, the
// training stats, and both rule tables with counts and sequence numbers,
// so a reloaded model selects rules identically to the one that was
// saved. Tags are sorted and rules ordered by sequence number to keep the
// output stable across runs.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use inflekt_core::enums::Direction;

use crate::model::{Model, TrainingStats};
use crate::table::{Rule, RuleStats, RuleTable, TagRules};

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to read model file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write model file: {0}")]
    Write(#[source] std::io::Error),

    #[error("malformed model file: {0}")]
    Format(#[from] serde_json::Error),

    #[error("unknown direction {0:?} in model file")]
    UnknownDirection(String),
}

#[derive(Serialize, Deserialize)]
struct StoredModel {
    direction: String,
    records: usize,
    distinct_lemmas: usize,
    distinct_tags: usize,
    next_seq: u64,
    prefix: Vec<StoredTag>,
    suffix: Vec<StoredTag>,
}

#[derive(Serialize, Deserialize)]
struct StoredTag {
    tag: String,
    rules: Vec<StoredRule>,
}

#[derive(Serialize, Deserialize)]
struct StoredRule {
    input: String,
    output: String,
    count: u32,
    seq: u64,
}

/// Save a trained model as JSON.
pub fn save(model: &Model, path: &Path) -> Result<(), PersistError> {
    let stored = StoredModel {
        direction: model.direction().as_str().to_string(),
        records: model.stats().records,
        distinct_lemmas: model.stats().distinct_lemmas,
        distinct_tags: model.stats().distinct_tags,
        next_seq: model.table().next_seq(),
        prefix: store_family(model.table().prefix_table()),
        suffix: store_family(model.table().suffix_table()),
    };
    let json = serde_json::to_string_pretty(&stored)?;
    fs::write(path, json).map_err(PersistError::Write)
}

/// Load a previously saved model.
pub fn load(path: &Path) -> Result<Model, PersistError> {
    let json = fs::read_to_string(path).map_err(PersistError::Read)?;
    let stored: StoredModel = serde_json::from_str(&json)?;

    let direction = match stored.direction.as_str() {
        "suffixing" => Direction::Suffixing,
        "prefixing" => Direction::Prefixing,
        other => return Err(PersistError::UnknownDirection(other.to_string())),
    };
    let stats = TrainingStats {
        records: stored.records,
        distinct_lemmas: stored.distinct_lemmas,
        distinct_tags: stored.distinct_tags,
    };
    let table = RuleTable::from_parts(
        load_family(stored.prefix),
        load_family(stored.suffix),
        stored.next_seq,
    );
    Ok(Model::from_parts(direction, table, stats))
}

fn store_family(family: &HashMap<String, TagRules>) -> Vec<StoredTag> {
    let mut tags: Vec<StoredTag> = family
        .iter()
        .map(|(tag, rules)| {
            let mut rules: Vec<StoredRule> = rules
                .iter()
                .map(|(rule, stats)| StoredRule {
                    input: rule.input.clone(),
                    output: rule.output.clone(),
                    count: stats.count,
                    seq: stats.seq,
                })
                .collect();
            rules.sort_by_key(|r| r.seq);
            StoredTag {
                tag: tag.clone(),
                rules,
            }
        })
        .collect();
    tags.sort_by(|a, b| a.tag.cmp(&b.tag));
    tags
}

fn load_family(tags: Vec<StoredTag>) -> HashMap<String, TagRules> {
    tags.into_iter()
        .map(|stored| {
            let rules = stored
                .rules
                .into_iter()
                .map(|r| {
                    (
                        Rule::new(r.input, r.output),
                        RuleStats {
                            count: r.count,
                            seq: r.seq,
                        },
                    )
                })
                .collect();
            (stored.tag, rules)
        })
        .collect()
}
