use derive_getters::Dissolve;

use dpalign_core_rs::alignment::Alignable;

use super::alignment::Alignment;
use super::dp::{Mode, Table, Tracer, tracer};
use super::scoring::{self, Score};

/// Needleman-Wunsch global aligner, optionally in overlap-detection mode.
///
/// Produces exactly one optimal alignment, ties are resolved by `dp::Trace::PRIORITY`.
#[derive(Clone, Debug, Dissolve)]
pub struct NeedlemanWunsch<Scheme> {
    scoring: Scheme,
    overlap: bool,
}

impl<Scheme> NeedlemanWunsch<Scheme> {
    pub fn new(scoring: Scheme) -> Self {
        Self {
            scoring,
            overlap: false,
        }
    }

    /// In overlap mode leading overhangs of both sequences are not penalized.
    pub fn with_overlap(mut self, overlap: bool) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn scoring(&self) -> &Scheme {
        &self.scoring
    }

    pub fn mode(&self) -> Mode {
        if self.overlap {
            Mode::Overlap
        } else {
            Mode::Global
        }
    }

    pub fn align<S1, S2, Symbol, S>(&self, seq1: &S1, seq2: &S2) -> Alignment<S>
    where
        S1: Alignable<Symbol = Symbol>,
        S2: Alignable<Symbol = Symbol>,
        Symbol: PartialEq,
        S: Score,
        Scheme: scoring::Scheme<Symbol, Score = S>,
    {
        self.align_traced(seq1, seq2, &mut tracer::Noop)
    }

    pub fn align_traced<S1, S2, Symbol, S, T>(
        &self,
        seq1: &S1,
        seq2: &S2,
        tracer: &mut T,
    ) -> Alignment<S>
    where
        S1: Alignable<Symbol = Symbol>,
        S2: Alignable<Symbol = Symbol>,
        Symbol: PartialEq,
        S: Score,
        Scheme: scoring::Scheme<Symbol, Score = S>,
        T: Tracer<S>,
    {
        let (rows, cols) = (seq1.len(), seq2.len());
        let table = Table::fill(seq1, seq2, &self.scoring, self.mode(), tracer);

        tracer.seed(rows, cols, table.score(rows, cols));
        let alignment = table.traceback(seq1, seq2, rows, cols, tracer);
        debug_assert_eq!((alignment.seq1().start, alignment.seq2().start), (0, 0));

        log::debug!(
            "{:?} alignment of {rows}x{cols} symbols: {} ({})",
            self.mode(),
            alignment.score(),
            alignment.rle()
        );
        alignment
    }
}
