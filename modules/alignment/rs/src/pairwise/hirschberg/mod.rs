use std::ops::Range;

use derive_getters::Dissolve;

use dpalign_core_rs::alignment::Alignable;
use dpalign_core_rs::alignment::pairwise::{Op, Step};

pub use row::score_row;

use super::alignment::Alignment;
use super::dp::{Tracer, tracer};
use super::nw::NeedlemanWunsch;
use super::scoring::{self, Score};

mod row;

/// Linear-space global aligner.
///
/// The first sequence is halved, the matching column of the second sequence is located with a
/// forward and a reverse score row, and both halves are solved independently. Sub-problems with a
/// single symbol on either side are delegated to the Needleman-Wunsch aligner.
///
/// The score always equals the Needleman-Wunsch score, the path may differ when optimal
/// alignments are tied.
#[derive(Clone, Debug, Dissolve)]
pub struct Hirschberg<Scheme> {
    global: NeedlemanWunsch<Scheme>,
    parallel_threshold: Option<usize>,
}

impl<Scheme> Hirschberg<Scheme> {
    pub fn new(scoring: Scheme) -> Self {
        Self {
            global: NeedlemanWunsch::new(scoring),
            parallel_threshold: None,
        }
    }

    /// Computes the forward and reverse score rows on the rayon thread pool for sub-problems
    /// with at least `cells` DP cells.
    pub fn with_parallel_threshold(mut self, cells: usize) -> Self {
        self.parallel_threshold = Some(cells);
        self
    }

    pub fn scoring(&self) -> &Scheme {
        self.global.scoring()
    }

    pub fn align<S1, S2, Symbol, S>(&self, seq1: &S1, seq2: &S2) -> Alignment<S>
    where
        S1: Alignable<Symbol = Symbol> + Sync,
        S2: Alignable<Symbol = Symbol> + Sync,
        Symbol: PartialEq,
        S: Score + Send,
        Scheme: scoring::Scheme<Symbol, Score = S> + Sync,
    {
        self.align_traced(seq1, seq2, &mut tracer::Noop)
    }

    /// Sub-problems delegated to the Needleman-Wunsch aligner report window-relative coordinates
    /// to the tracer.
    pub fn align_traced<S1, S2, Symbol, S, T>(
        &self,
        seq1: &S1,
        seq2: &S2,
        tracer: &mut T,
    ) -> Alignment<S>
    where
        S1: Alignable<Symbol = Symbol> + Sync,
        S2: Alignable<Symbol = Symbol> + Sync,
        Symbol: PartialEq,
        S: Score + Send,
        Scheme: scoring::Scheme<Symbol, Score = S> + Sync,
        T: Tracer<S>,
    {
        let indel = self.scoring().indel();

        let mut score = S::zero();
        let mut steps = Vec::new();
        // Left half is always on top of the stack: columns are produced left to right
        let mut stack = vec![(0..seq1.len(), 0..seq2.len())];
        while let Some((r1, r2)) = stack.pop() {
            if r1.is_empty() {
                for _ in r2 {
                    Step::push(&mut steps, Op::GapFirst);
                    score = score + indel;
                }
                continue;
            }
            if r2.is_empty() {
                for _ in r1 {
                    Step::push(&mut steps, Op::GapSecond);
                    score = score + indel;
                }
                continue;
            }
            if r1.len() == 1 || r2.len() == 1 {
                let (w1, w2) = (seq1.window(r1), seq2.window(r2));
                let sub = self.global.align_traced(&w1, &w2, tracer);
                for op in sub.ops() {
                    Step::push(&mut steps, op);
                }
                score = score + *sub.score();
                continue;
            }

            let mid = r1.start + r1.len() / 2;
            let split = self.split(seq1, seq2, r1.clone(), r2.clone(), mid);
            tracer.split(r1.clone(), r2.clone(), split);

            stack.push((mid..r1.end, split..r2.end));
            stack.push((r1.start..mid, r2.start..split));
        }

        let alignment = Alignment::new(score, steps, 0..seq1.len(), 0..seq2.len());
        debug_assert_eq!(alignment.rescore(seq1, seq2, self.scoring()), score);

        log::debug!(
            "Linear-space alignment of {}x{} symbols: {} ({})",
            seq1.len(),
            seq2.len(),
            alignment.score(),
            alignment.rle()
        );
        alignment
    }

    /// Column of `seq2` where an optimal path crosses row `mid` of `seq1`.
    fn split<S1, S2, Symbol, S>(
        &self,
        seq1: &S1,
        seq2: &S2,
        r1: Range<usize>,
        r2: Range<usize>,
        mid: usize,
    ) -> usize
    where
        S1: Alignable<Symbol = Symbol> + Sync,
        S2: Alignable<Symbol = Symbol> + Sync,
        S: Score + Send,
        Scheme: scoring::Scheme<Symbol, Score = S> + Sync,
    {
        let cells = r1.len() * r2.len();
        let (upper, lower) = (seq1.window(r1.start..mid), seq1.window(mid..r1.end));
        let target = seq2.window(r2.clone());
        let scoring = self.scoring();

        let forward = || score_row(&upper, &target, scoring);
        let reverse = || score_row(&lower.reversed(), &target.reversed(), scoring);
        let (forward, reverse) = match self.parallel_threshold {
            Some(threshold) if cells >= threshold => rayon::join(forward, reverse),
            _ => (forward(), reverse()),
        };

        // First maximum of forward[k] + reverse[n - k]
        let n = r2.len();
        let mut best = 0;
        for k in 1..=n {
            if forward[k] + reverse[n - k] > forward[best] + reverse[n - best] {
                best = k;
            }
        }
        r2.start + best
    }
}
