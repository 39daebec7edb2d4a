// Region splitting of an alignment into prefix, stem, and suffix.

use inflekt_align::Alignment;

/// The three aligned regions of each side of an alignment. Gap symbols are
/// retained inside the regions; stripping them from the concatenated
/// regions of one side reconstructs the original string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub lemma_prefix: Vec<char>,
    pub lemma_stem: Vec<char>,
    pub lemma_suffix: Vec<char>,
    pub form_prefix: Vec<char>,
    pub form_stem: Vec<char>,
    pub form_suffix: Vec<char>,
}

/// Split both sides of `alignment` at the longest leading and trailing gap
/// runs seen on either side.
///
/// `lead` is the larger of the two leading gap runs and `trail` the larger
/// of the two trailing runs; the prefix region is `[0, lead)`, the stem
/// `[lead, len - trail)` and the suffix `[len - trail, len)`, applied
/// identically to both sides. When `lead + trail` exceeds the aligned
/// length the stem region is empty and the prefix and suffix regions
/// overlap; this is the expected state for a fully affixal transformation.
pub fn split(alignment: &Alignment) -> Split {
    let len = alignment.len();
    let (lead_s, lead_t) = alignment.leading_gaps();
    let (trail_s, trail_t) = alignment.trailing_gaps();
    let lead = lead_s.max(lead_t);
    let trail = trail_s.max(trail_t);

    let regions = |side: &[char]| {
        let prefix = side[..lead].to_vec();
        let stem = if lead < len - trail {
            side[lead..len - trail].to_vec()
        } else {
            Vec::new()
        };
        let suffix = side[len - trail..].to_vec();
        (prefix, stem, suffix)
    };

    let (lemma_prefix, lemma_stem, lemma_suffix) = regions(&alignment.s);
    let (form_prefix, form_stem, form_suffix) = regions(&alignment.t);

    Split {
        lemma_prefix,
        lemma_stem,
        lemma_suffix,
        form_prefix,
        form_stem,
        form_suffix,
    }
}
