use std::ops::Range;

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use dpalign_core_rs::alignment::Alignable;
use dpalign_core_rs::alignment::pairwise::{Op, Step};

use crate::pairwise::scoring::{self, Score};

use super::aligned::{AlignedPair, GAP};

/// A pairwise alignment: run-length encoded columns over `seq1[seq1]` and `seq2[seq2]`.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Getters, Constructor, Dissolve)]
pub struct Alignment<S: Score> {
    score: S,
    steps: Vec<Step>,
    seq1: Range<usize>,
    seq2: Range<usize>,
}

impl<S: Score> Alignment<S> {
    pub fn is_empty(&self) -> bool {
        // Steps are never zero-length
        self.steps.is_empty()
    }

    /// Number of columns in the alignment.
    pub fn len(&self) -> usize {
        self.steps.iter().map(|x| *x.len() as usize).sum()
    }

    /// Column-wise operations, left to right.
    pub fn ops(&self) -> impl Iterator<Item = Op> + '_ {
        self.steps
            .iter()
            .flat_map(|x| std::iter::repeat(*x.op()).take(*x.len() as usize))
    }

    /// Returns the RLE representation of the alignment, e.g. `3=1X2v`.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps.iter())
    }

    /// The same alignment with the roles of the two sequences exchanged.
    pub fn swapped(&self) -> Self {
        let steps = Step::from_ops(self.ops().map(|x| x.swapped()));
        Self {
            score: self.score,
            steps,
            seq1: self.seq2.clone(),
            seq2: self.seq1.clone(),
        }
    }

    /// Recomputes the score column by column.
    pub fn rescore<S1, S2, Symbol, Scheme>(&self, seq1: &S1, seq2: &S2, scoring: &Scheme) -> S
    where
        S1: Alignable<Symbol = Symbol>,
        S2: Alignable<Symbol = Symbol>,
        Scheme: scoring::Scheme<Symbol, Score = S>,
    {
        let (mut s1, mut s2) = (self.seq1.start, self.seq2.start);
        let mut score = S::zero();
        for op in self.ops() {
            score = score
                + match op {
                    Op::GapFirst | Op::GapSecond => scoring.indel(),
                    Op::Match | Op::Mismatch => scoring.substitution(seq1.at(s1), seq2.at(s2)),
                };
            op.apply(&mut s1, &mut s2, 1usize);
        }
        debug_assert_eq!((s1, s2), (self.seq1.end, self.seq2.end));
        score
    }

    /// Renders the alignment as two gapped rows over the sequence symbols.
    pub fn render<S1, S2, Symbol>(&self, seq1: &S1, seq2: &S2) -> AlignedPair<S>
    where
        S1: Alignable<Symbol = Symbol>,
        S2: Alignable<Symbol = Symbol>,
        Symbol: Copy + Into<char>,
    {
        let columns = self.len();
        let (mut first, mut second) =
            (String::with_capacity(columns), String::with_capacity(columns));
        let (mut s1, mut s2) = (self.seq1.start, self.seq2.start);
        for op in self.ops() {
            match op {
                Op::GapFirst => {
                    first.push(GAP);
                    second.push((*seq2.at(s2)).into());
                }
                Op::GapSecond => {
                    first.push((*seq1.at(s1)).into());
                    second.push(GAP);
                }
                Op::Match | Op::Mismatch => {
                    first.push((*seq1.at(s1)).into());
                    second.push((*seq2.at(s2)).into());
                }
            }
            op.apply(&mut s1, &mut s2, 1usize);
        }
        AlignedPair::new(first, second, self.score)
    }
}
