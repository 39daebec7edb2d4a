// Per-tag rule tables with occurrence counts.

use std::collections::HashMap;

/// One learned edit rule: an input pattern replaced by an output pattern.
///
/// Prefix-class rules are anchored at the start-of-word marker and
/// suffix-class rules at the end-of-word marker; the table keeps the two
/// classes apart, so the patterns themselves are plain strings. Two rules
/// are equal iff both patterns match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pub input: String,
    pub output: String,
}

impl Rule {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Count and tie-break data for one recorded rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleStats {
    /// Number of training examples that produced this rule.
    pub count: u32,
    /// Global insertion sequence number; lower means recorded earlier.
    /// Serves as the final selection tie-break so that selection stays
    /// deterministic across identical training runs.
    pub seq: u64,
}

/// Sub-table of one tag: the recorded rules of one class with their stats.
pub type TagRules = HashMap<Rule, RuleStats>;

/// Per-tag tables of prefix-class and suffix-class rules.
///
/// Built by a single pass over the training data and frozen afterwards:
/// the selector only reads it. Sub-tables are created lazily the first
/// time a tag arrives with a non-empty rule family.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RuleTable {
    prefix: HashMap<String, TagRules>,
    suffix: HashMap<String, TagRules>,
    next_seq: u64,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the mined rule families of one example under `tag`.
    ///
    /// Already-known rules have their count incremented; new rules are
    /// assigned the next insertion sequence number, in slice order.
    pub fn record(&mut self, tag: &str, prefix_rules: &[Rule], suffix_rules: &[Rule]) {
        record_family(&mut self.prefix, &mut self.next_seq, tag, prefix_rules);
        record_family(&mut self.suffix, &mut self.next_seq, tag, suffix_rules);
    }

    /// Whether the tag is present in either class table.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.prefix.contains_key(tag) || self.suffix.contains_key(tag)
    }

    /// Prefix-class rules recorded for `tag`, if any.
    pub fn prefix_rules(&self, tag: &str) -> Option<&TagRules> {
        self.prefix.get(tag)
    }

    /// Suffix-class rules recorded for `tag`, if any.
    pub fn suffix_rules(&self, tag: &str) -> Option<&TagRules> {
        self.suffix.get(tag)
    }

    /// The full prefix-class table.
    pub fn prefix_table(&self) -> &HashMap<String, TagRules> {
        &self.prefix
    }

    /// The full suffix-class table.
    pub fn suffix_table(&self) -> &HashMap<String, TagRules> {
        &self.suffix
    }

    /// Total number of distinct prefix-class rules across all tags.
    pub fn prefix_rule_count(&self) -> usize {
        self.prefix.values().map(HashMap::len).sum()
    }

    /// Total number of distinct suffix-class rules across all tags.
    pub fn suffix_rule_count(&self) -> usize {
        self.suffix.values().map(HashMap::len).sum()
    }

    pub fn next_seq(&self) -> u64 {
        self.next_seq
    }

    /// Rebuild a table from stored parts. Only used when loading a
    /// persisted model; the parts must come from a previously built table.
    pub(crate) fn from_parts(
        prefix: HashMap<String, TagRules>,
        suffix: HashMap<String, TagRules>,
        next_seq: u64,
    ) -> Self {
        Self {
            prefix,
            suffix,
            next_seq,
        }
    }
}

fn record_family(
    family: &mut HashMap<String, TagRules>,
    next_seq: &mut u64,
    tag: &str,
    rules: &[Rule],
) {
    if rules.is_empty() {
        return;
    }
    let sub = family.entry(tag.to_string()).or_default();
    for rule in rules {
        if let Some(stats) = sub.get_mut(rule) {
            stats.count += 1;
        } else {
            sub.insert(
                rule.clone(),
                RuleStats {
                    count: 1,
                    seq: *next_seq,
                },
            );
            *next_seq += 1;
        }
    }
}
