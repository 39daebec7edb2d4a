// Best-rule selection and application.

use inflekt_core::symbols::{WORD_END, WORD_START};

use crate::table::{Rule, RuleStats, RuleTable, TagRules};

/// Apply the best matching rules for `tag` to `lemma`.
///
/// A tag present in neither class table falls back to the identity: the
/// lemma is returned unchanged. Otherwise the lemma is wrapped in word
/// anchors, the best suffix rule is applied first and the best prefix rule
/// second (always in that order), and the anchors are stripped.
///
/// A rule is applicable when its input pattern occurs as a literal
/// substring of the working string (containment, not anchored matching);
/// the first occurrence is replaced.
pub fn apply(table: &RuleTable, lemma: &str, tag: &str) -> String {
    if !table.has_tag(tag) {
        return lemma.to_string();
    }

    let mut working = format!("{WORD_START}{lemma}{WORD_END}");

    if let Some(rules) = table.suffix_rules(tag) {
        if let Some(rule) = best_rule(rules, &working, suffix_key) {
            working = working.replacen(rule.input.as_str(), &rule.output, 1);
        }
    }

    if let Some(rules) = table.prefix_rules(tag) {
        if let Some(rule) = best_rule(rules, &working, prefix_key) {
            working = working.replacen(rule.input.as_str(), &rule.output, 1);
        }
    }

    working
        .chars()
        .filter(|&c| c != WORD_START && c != WORD_END)
        .collect()
}

/// Selection key for suffix rules: longest input pattern (most specific
/// context), then highest count, then longest output pattern. Pattern
/// lengths are measured in characters.
fn suffix_key(rule: &Rule, stats: RuleStats) -> (usize, u32, usize) {
    (
        rule.input.chars().count(),
        stats.count,
        rule.output.chars().count(),
    )
}

/// Selection key for prefix rules: highest count only.
fn prefix_key(_rule: &Rule, stats: RuleStats) -> (usize, u32, usize) {
    (0, stats.count, 0)
}

/// The applicable rule maximizing `key`; exact key ties resolve to the
/// rule with the lowest insertion sequence number, so the result does not
/// depend on map iteration order.
fn best_rule<'a>(
    rules: &'a TagRules,
    working: &str,
    key: fn(&Rule, RuleStats) -> (usize, u32, usize),
) -> Option<&'a Rule> {
    let mut best: Option<(&Rule, RuleStats, (usize, u32, usize))> = None;
    for (rule, &stats) in rules {
        if !working.contains(rule.input.as_str()) {
            continue;
        }
        let k = key(rule, stats);
        let better = match &best {
            Some((_, best_stats, best_key)) => {
                k > *best_key || (k == *best_key && stats.seq < best_stats.seq)
            }
            None => true,
        };
        if better {
            best = Some((rule, stats, k));
        }
    }
    best.map(|(rule, _, _)| rule)
}
