// Direction-bias estimation.
//
// One pass over the training pairs decides whether the language is
// predominantly prefixing or suffixing. The coarse Hamming alignment is
// enough here: it pushes all gap columns to the word edges, and only the
// edge gap runs feed the statistic.

use inflekt_align::{Aligner, HammingAligner};
use inflekt_core::enums::Direction;
use inflekt_core::record::Record;

/// Estimate the dominant affixation direction of a training set.
///
/// Each pair is Hamming-aligned; the leading gap runs of both sides feed
/// the prefix score and the trailing gap runs the suffix score. Pairs whose
/// aligned strings contain a space or hyphen are skipped: those are
/// multi-word forms that would corrupt the statistic. The language counts
/// as prefixing only when the prefix score is strictly larger.
pub fn estimate(records: &[Record]) -> Direction {
    let aligner = HammingAligner;
    let mut prefix_score = 0usize;
    let mut suffix_score = 0usize;

    for record in records {
        let alignment = aligner.align(&record.lemma, &record.form);
        if alignment.contains_char(' ') || alignment.contains_char('-') {
            continue;
        }
        let (lead_s, lead_t) = alignment.leading_gaps();
        let (trail_s, trail_t) = alignment.trailing_gaps();
        prefix_score += lead_s + lead_t;
        suffix_score += trail_s + trail_t;
    }

    if prefix_score > suffix_score {
        Direction::Prefixing
    } else {
        Direction::Suffixing
    }
}
