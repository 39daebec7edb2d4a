// Exact alignment by memoized recursion over remaining suffixes.
//
// The recursion mirrors the textbook three-way choice (substitute, insert,
// delete) but returns full gapped alignments rather than just a distance.
// The memo table is owned by a search struct created fresh for every
// top-level call: entries are keyed by the remaining-suffix start positions
// of both strings and store the alignment and cost *deltas* for that
// remainder, so they are independent of whatever prefix the caller has
// already committed. Sharing the table across top-level calls would be
// unsound, so none is shared.

use hashbrown::HashMap;
use inflekt_core::symbols::GAP;

use crate::{Aligner, Alignment};

/// Edit operation costs.
///
/// A substitution cost above 1.0 makes an insertion+deletion pair cheaper
/// than a substitution wherever the strings differ in length, so a
/// character present on only one side always aligns against a gap instead
/// of being folded into a substitution. Rule mining depends on this to get
/// pure-affix alignments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignCosts {
    pub insertion: f64,
    pub deletion: f64,
    pub substitution: f64,
}

impl Default for AlignCosts {
    fn default() -> Self {
        Self {
            insertion: 1.0,
            deletion: 1.0,
            substitution: 1.0,
        }
    }
}

impl AlignCosts {
    /// Costs used for rule mining: substitution is penalized so that
    /// length differences surface as insertions and deletions.
    pub fn affix_mining() -> Self {
        Self {
            substitution: 1.1,
            ..Self::default()
        }
    }
}

/// Aligner computing a minimal-cost edit alignment under [`AlignCosts`].
#[derive(Debug, Default)]
pub struct LevenshteinAligner {
    costs: AlignCosts,
}

impl LevenshteinAligner {
    pub fn new(costs: AlignCosts) -> Self {
        Self { costs }
    }
}

impl Aligner for LevenshteinAligner {
    fn align(&self, s: &str, t: &str) -> Alignment {
        let s: Vec<char> = s.chars().collect();
        let t: Vec<char> = t.chars().collect();
        let mut search = AlignSearch::new(&s, &t, self.costs);
        let (aligned_s, aligned_t, cost) = search.solve(0, 0);
        Alignment {
            s: aligned_s,
            t: aligned_t,
            cost,
        }
    }
}

/// One alignment computation: the two strings, the costs, and the memo
/// table for remainders already solved.
struct AlignSearch<'a> {
    s: &'a [char],
    t: &'a [char],
    costs: AlignCosts,
    memo: HashMap<(usize, usize), (Vec<char>, Vec<char>, f64)>,
}

impl<'a> AlignSearch<'a> {
    fn new(s: &'a [char], t: &'a [char], costs: AlignCosts) -> Self {
        Self {
            s,
            t,
            costs,
            memo: HashMap::new(),
        }
    }

    /// Alignment and cost delta of the remainders `s[i..]` and `t[j..]`.
    fn solve(&mut self, i: usize, j: usize) -> (Vec<char>, Vec<char>, f64) {
        if let Some(hit) = self.memo.get(&(i, j)) {
            return hit.clone();
        }
        let result = self.solve_uncached(i, j);
        self.memo.insert((i, j), result.clone());
        result
    }

    fn solve_uncached(&mut self, i: usize, j: usize) -> (Vec<char>, Vec<char>, f64) {
        let s = self.s;
        let t = self.t;
        let s_rem = &s[i..];
        let t_rem = &t[j..];

        // An exhausted side aligns the other remainder against gaps,
        // charging unit cost per remaining character.
        if s_rem.is_empty() {
            return (vec![GAP; t_rem.len()], t_rem.to_vec(), t_rem.len() as f64);
        }
        if t_rem.is_empty() {
            return (s_rem.to_vec(), vec![GAP; s_rem.len()], s_rem.len() as f64);
        }

        let subst_cost = if s_rem[0] != t_rem[0] {
            self.costs.substitution
        } else {
            0.0
        };

        // Candidates in fixed order: substitute, insert into s, delete
        // from s. Only a strictly cheaper candidate replaces the current
        // best, so the earliest of equal-cost candidates wins.
        let (s1, t1, c1) = self.solve(i + 1, j + 1);
        let mut best = (
            prepend(s[i], s1),
            prepend(t[j], t1),
            subst_cost + c1,
        );

        let (s2, t2, c2) = self.solve(i, j + 1);
        let insert = (
            prepend(GAP, s2),
            prepend(t[j], t2),
            self.costs.insertion + c2,
        );
        if insert.2 < best.2 {
            best = insert;
        }

        let (s3, t3, c3) = self.solve(i + 1, j);
        let delete = (
            prepend(s[i], s3),
            prepend(GAP, t3),
            self.costs.deletion + c3,
        );
        if delete.2 < best.2 {
            best = delete;
        }

        best
    }
}

fn prepend(c: char, mut rest: Vec<char>) -> Vec<char> {
    rest.insert(0, c);
    rest
}
