// Coarse alignment by Hamming distance over padding sweeps.
//
// Used only for the one-shot direction-bias statistics. Padding places all
// gap columns at the word edges, which is exactly what the bias accumulator
// measures; the exact Levenshtein alignment is reserved for rule mining.

use inflekt_core::symbols::GAP;

use crate::{Aligner, Alignment};

/// Aligner that pads the shorter string against the longer and keeps the
/// padding with the fewest mismatching columns.
///
/// Two sweeps are tried: sliding `s` over a fully left-padded `t`, then
/// sliding `t` under a fully left-padded `s`. Only a strictly smaller
/// mismatch count replaces the current winner, so the first alignment found
/// in sweep order wins ties. Columns that are gap on both sides are removed
/// from the result.
pub struct HammingAligner;

impl Aligner for HammingAligner {
    fn align(&self, s: &str, t: &str) -> Alignment {
        let s: Vec<char> = s.chars().collect();
        let t: Vec<char> = t.chars().collect();
        let slen = s.len();
        let tlen = t.len();

        let mut best_s: Vec<char> = Vec::new();
        let mut best_t: Vec<char> = Vec::new();
        let mut min_score = slen + tlen + 1;

        // Sweep 1: shift `s` right by 0..=tlen against a left-padded `t`.
        for upad in 0..=tlen {
            let mut upper = vec![GAP; upad];
            upper.extend_from_slice(&s);
            upper.resize(slen + tlen, GAP);
            let mut lower = vec![GAP; slen];
            lower.extend_from_slice(&t);

            let score = mismatches(&upper, &lower);
            if score < min_score {
                best_s = upper;
                best_t = lower;
                min_score = score;
            }
        }

        // Sweep 2: shift `t` left by 0..=slen under a left-padded `s`.
        for lpad in 0..=slen {
            let mut upper = vec![GAP; tlen];
            upper.extend_from_slice(&s);
            let mut lower = vec![GAP; slen - lpad];
            lower.extend_from_slice(&t);
            lower.resize(slen + tlen, GAP);

            let score = mismatches(&upper, &lower);
            if score < min_score {
                best_s = upper;
                best_t = lower;
                min_score = score;
            }
        }

        // Drop columns that are gap on both sides.
        let mut aligned_s = Vec::with_capacity(best_s.len());
        let mut aligned_t = Vec::with_capacity(best_t.len());
        for (&x, &y) in best_s.iter().zip(&best_t) {
            if x != GAP || y != GAP {
                aligned_s.push(x);
                aligned_t.push(y);
            }
        }

        Alignment {
            s: aligned_s,
            t: aligned_t,
            cost: min_score as f64,
        }
    }
}

/// Number of positions where the two equal-length slices differ.
fn mismatches(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn align(s: &str, t: &str) -> Alignment {
        HammingAligner.align(s, t)
    }

    fn side(chars: &[char]) -> String {
        chars.iter().collect()
    }

    #[test]
    fn pure_suffix_pair() {
        let a = align("walk", "walked");
        assert_eq!(side(&a.s), "walk__");
        assert_eq!(side(&a.t), "walked");
        // Gap-versus-character columns count as mismatches.
        assert_eq!(a.cost, 2.0);
    }

    #[test]
    fn pure_prefix_pair() {
        let a = align("walk", "unwalk");
        assert_eq!(side(&a.s), "__walk");
        assert_eq!(side(&a.t), "unwalk");
        assert_eq!(a.cost, 2.0);
    }

    #[test]
    fn both_gap_columns_are_dropped() {
        // Best padding for ("ab", "b") leaves one column that is gap on
        // both sides; the result must shrink to the non-gap span.
        let a = align("ab", "b");
        assert_eq!(side(&a.s), "ab");
        assert_eq!(side(&a.t), "_b");
        assert_eq!(a.cost, 1.0);
    }

    #[test]
    fn identical_strings_align_without_gaps() {
        let a = align("talo", "talo");
        assert_eq!(side(&a.s), "talo");
        assert_eq!(side(&a.t), "talo");
        assert_eq!(a.cost, 0.0);
    }

    #[test]
    fn first_alignment_wins_ties() {
        // Several paddings of ("ab", "ba") reach mismatch count 2; the
        // earliest one in sweep order must be kept, and a later tie must
        // not replace it.
        let a = align("ab", "ba");
        assert_eq!(side(&a.s), "ab_");
        assert_eq!(side(&a.t), "_ba");
        assert_eq!(a.cost, 2.0);
    }

    #[test]
    fn empty_inputs() {
        let a = align("", "");
        assert!(a.is_empty());
        assert_eq!(a.cost, 0.0);

        let a = align("", "ab");
        assert_eq!(side(&a.s), "__");
        assert_eq!(side(&a.t), "ab");
    }

    #[test]
    fn stripping_gaps_restores_inputs() {
        for (s, t) in [("kissa", "kissalle"), ("on", "ollut"), ("a", "ba")] {
            let a = align(s, t);
            assert_eq!(a.s.len(), a.t.len());
            assert_eq!(inflekt_core::symbols::strip_gaps(&a.s), s);
            assert_eq!(inflekt_core::symbols::strip_gaps(&a.t), t);
        }
    }
}
