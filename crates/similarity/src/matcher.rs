//! Greedy longest-matching-block sequence matcher.
//!
//! The matcher finds the longest contiguous matching block between two
//! sequences, then recurses into the unmatched pieces on either side of it.
//! Summing the block sizes gives the `M` in the similarity ratio `2*M/T`.
//!
//! Ties are broken towards the block that starts earliest in `a`, and for
//! equal starts in `a`, earliest in `b`.

use std::hash::Hash;

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Sequences at least this long are subject to the popular-element heuristic
/// when autojunk is enabled.
pub const AUTOJUNK_MIN_LEN: usize = 200;

/// A matching block: `a[a..a + size] == b[b..b + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

/// Edit operation kind for [`Opcode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpTag {
    /// `a[a_start..a_end] == b[b_start..b_end]`
    Equal,
    /// `a[a_start..a_end]` should be replaced by `b[b_start..b_end]`
    Replace,
    /// `a[a_start..a_end]` should be deleted (`b_start == b_end`)
    Delete,
    /// `b[b_start..b_end]` should be inserted at `a_start` (`a_start == a_end`)
    Insert,
}

/// One step of the edit script turning `a` into `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opcode {
    pub tag: OpTag,
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

/// Sequence matcher over two borrowed slices.
///
/// Build once per pair; [`SequenceMatcher::matching_blocks`],
/// [`SequenceMatcher::opcodes`] and [`SequenceMatcher::ratio`] all derive
/// from the same recursive block search.
pub struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    // For every element of `b`, the ascending list of positions it occurs at.
    b2j: FxHashMap<&'a T, Vec<usize>>,
}

impl<'a, T> SequenceMatcher<'a, T>
where
    T: Eq + Hash,
{
    /// Build a matcher for `a` against `b`.
    ///
    /// With `autojunk`, when `b` has at least [`AUTOJUNK_MIN_LEN`] elements,
    /// elements occurring in more than 1% of `b` (plus one) are left out of
    /// the block search index. They can still extend a block found through
    /// other elements.
    pub fn new(a: &'a [T], b: &'a [T], autojunk: bool) -> Self {
        let mut b2j: FxHashMap<&'a T, Vec<usize>> = FxHashMap::default();
        for (j, elt) in b.iter().enumerate() {
            b2j.entry(elt).or_default().push(j);
        }

        let n = b.len();
        if autojunk && n >= AUTOJUNK_MIN_LEN {
            let ntest = n / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= ntest);
        }

        Self { a, b, b2j }
    }

    /// Longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Returns a zero-sized match at `(alo, blo)` when nothing matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let (a, b) = (self.a, self.b);
        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0usize);

        // j2len[j] = length of the longest block ending at a[i - 1] and b[j].
        let mut j2len: FxHashMap<usize, usize> = FxHashMap::default();
        for i in alo..ahi {
            let mut next: FxHashMap<usize, usize> = FxHashMap::default();
            if let Some(positions) = self.b2j.get(&a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let prev = if j > 0 {
                        j2len.get(&(j - 1)).copied().unwrap_or(0)
                    } else {
                        0
                    };
                    let k = prev + 1;
                    next.insert(j, k);
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            j2len = next;
        }

        // Elements dropped from the index by autojunk can still extend a block.
        while besti > alo && bestj > blo && a[besti - 1] == b[bestj - 1] {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi
            && bestj + bestsize < bhi
            && a[besti + bestsize] == b[bestj + bestsize]
        {
            bestsize += 1;
        }

        Match {
            a: besti,
            b: bestj,
            size: bestsize,
        }
    }

    /// All matching blocks, ascending, adjacent blocks merged.
    ///
    /// The last entry is always the zero-sized sentinel `(len(a), len(b), 0)`.
    pub fn matching_blocks(&self) -> Vec<Match> {
        let (la, lb) = (self.a.len(), self.b.len());

        let mut pending = vec![(0usize, la, 0usize, lb)];
        let mut found: Vec<Match> = Vec::new();
        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            found.push(m);
            if alo < m.a && blo < m.b {
                pending.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                pending.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
        }
        found.sort_unstable();

        let mut blocks: Vec<Match> = Vec::with_capacity(found.len() + 1);
        for m in found {
            match blocks.last_mut() {
                Some(last) if last.a + last.size == m.a && last.b + last.size == m.b => {
                    last.size += m.size;
                }
                _ => blocks.push(m),
            }
        }
        blocks.push(Match {
            a: la,
            b: lb,
            size: 0,
        });
        blocks
    }

    /// Edit script describing how to turn `a` into `b`.
    pub fn opcodes(&self) -> Vec<Opcode> {
        let mut ops = Vec::new();
        let (mut i, mut j) = (0usize, 0usize);
        for m in self.matching_blocks() {
            let tag = match (i < m.a, j < m.b) {
                (true, true) => Some(OpTag::Replace),
                (true, false) => Some(OpTag::Delete),
                (false, true) => Some(OpTag::Insert),
                (false, false) => None,
            };
            if let Some(tag) = tag {
                ops.push(Opcode {
                    tag,
                    a_start: i,
                    a_end: m.a,
                    b_start: j,
                    b_end: m.b,
                });
            }
            i = m.a + m.size;
            j = m.b + m.size;
            if m.size > 0 {
                ops.push(Opcode {
                    tag: OpTag::Equal,
                    a_start: m.a,
                    a_end: i,
                    b_start: m.b,
                    b_end: j,
                });
            }
        }
        ops
    }

    /// Total number of matched elements across all blocks.
    pub fn matched_len(&self) -> usize {
        self.matching_blocks().iter().map(|m| m.size).sum()
    }

    /// Similarity ratio `2*M/T` in `[0, 1]`.
    ///
    /// Two empty sequences are identical, so their ratio is 1.
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * self.matched_len() as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn longest_match_prefers_earliest_block() {
        let a = chars(" abcd");
        let b = chars("abcd abcd");
        let sm = SequenceMatcher::new(&a, &b, false);
        assert_eq!(
            sm.find_longest_match(0, 5, 0, 9),
            Match { a: 0, b: 4, size: 5 }
        );
    }

    #[test]
    fn matching_blocks_end_with_sentinel() {
        let a = chars("abxcd");
        let b = chars("abcd");
        let sm = SequenceMatcher::new(&a, &b, false);
        assert_eq!(
            sm.matching_blocks(),
            vec![
                Match { a: 0, b: 0, size: 2 },
                Match { a: 3, b: 2, size: 2 },
                Match { a: 5, b: 4, size: 0 },
            ]
        );
        assert!((sm.ratio() - 8.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn opcodes_describe_edit_script() {
        let a = chars("qabxcd");
        let b = chars("abycdf");
        let sm = SequenceMatcher::new(&a, &b, false);
        let ops: Vec<(OpTag, usize, usize, usize, usize)> = sm
            .opcodes()
            .into_iter()
            .map(|op| (op.tag, op.a_start, op.a_end, op.b_start, op.b_end))
            .collect();
        assert_eq!(
            ops,
            vec![
                (OpTag::Delete, 0, 1, 0, 0),
                (OpTag::Equal, 1, 3, 0, 2),
                (OpTag::Replace, 3, 4, 2, 3),
                (OpTag::Equal, 4, 6, 3, 5),
                (OpTag::Insert, 6, 6, 5, 6),
            ]
        );
    }

    #[test]
    fn adjacent_blocks_are_merged() {
        let a = chars("abcabc");
        let b = chars("abcabc");
        let sm = SequenceMatcher::new(&a, &b, false);
        assert_eq!(
            sm.matching_blocks(),
            vec![Match { a: 0, b: 0, size: 6 }, Match { a: 6, b: 6, size: 0 }]
        );
    }

    #[test]
    fn empty_sequences() {
        let empty: Vec<char> = Vec::new();
        let abc = chars("abc");
        assert_eq!(SequenceMatcher::new(&empty, &empty, false).ratio(), 1.0);
        assert_eq!(SequenceMatcher::new(&abc, &empty, false).ratio(), 0.0);
        assert_eq!(SequenceMatcher::new(&empty, &abc, false).ratio(), 0.0);
        assert!(SequenceMatcher::new(&empty, &abc, false)
            .opcodes()
            .iter()
            .all(|op| op.tag == OpTag::Insert));
    }

    #[test]
    fn autojunk_ignores_popular_elements() {
        let a: Vec<char> = std::iter::repeat('a').take(300).collect();
        let mut b = vec!['b'];
        b.extend(std::iter::repeat('a').take(299));

        let junked = SequenceMatcher::new(&a, &b, true);
        assert_eq!(junked.ratio(), 0.0);

        let plain = SequenceMatcher::new(&a, &b, false);
        assert!((plain.ratio() - 598.0 / 600.0).abs() < 1e-12);
    }

    #[test]
    fn works_over_words() {
        let a = ["the", "quick", "brown", "fox"];
        let b = ["the", "slow", "brown", "fox"];
        let sm = SequenceMatcher::new(&a, &b, false);
        assert_eq!(sm.matched_len(), 3);
        assert!((sm.ratio() - 0.75).abs() < 1e-12);
    }
}
