use derive_getters::Dissolve;

use dpalign_core_rs::alignment::Alignable;

pub use storage::{AlignmentSeed, AllBest, Storage};

use super::alignment::Alignment;
use super::dp::tracer::{self, Chain};
use super::dp::{Mode, Table, Tracer};
use super::scoring::{self, Score};

mod storage;

/// Smith-Waterman local aligner reporting every co-optimal alignment.
///
/// One alignment is produced for each cell holding the table-wide maximum, cells are visited in
/// row-major order. Alignments are not deduplicated: distinct end cells may share a prefix.
#[derive(Clone, Debug, Dissolve)]
pub struct SmithWaterman<Scheme> {
    scoring: Scheme,
}

impl<Scheme> SmithWaterman<Scheme> {
    pub fn new(scoring: Scheme) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &Scheme {
        &self.scoring
    }

    pub fn align_all<S1, S2, Symbol, S>(&self, seq1: &S1, seq2: &S2) -> Vec<Alignment<S>>
    where
        S1: Alignable<Symbol = Symbol>,
        S2: Alignable<Symbol = Symbol>,
        Symbol: PartialEq,
        S: Score,
        Scheme: scoring::Scheme<Symbol, Score = S>,
    {
        self.align_all_traced(seq1, seq2, &mut tracer::Noop)
    }

    pub fn align_all_traced<S1, S2, Symbol, S, T>(
        &self,
        seq1: &S1,
        seq2: &S2,
        tracer: &mut T,
    ) -> Vec<Alignment<S>>
    where
        S1: Alignable<Symbol = Symbol>,
        S2: Alignable<Symbol = Symbol>,
        Symbol: PartialEq,
        S: Score,
        Scheme: scoring::Scheme<Symbol, Score = S>,
        T: Tracer<S>,
    {
        let mut storage = AllBest::<S>::new();
        storage.reset(seq1.len(), seq2.len());

        let table = Table::fill(
            seq1,
            seq2,
            &self.scoring,
            Mode::Local,
            &mut Chain::new(&mut storage, &mut *tracer),
        );

        let seeds = storage.finalize();
        log::debug!(
            "Local alignment of {}x{} symbols: {} cell(s) with the maximum score {}",
            seq1.len(),
            seq2.len(),
            seeds.len(),
            seeds.first().map(|x| x.score).unwrap_or_else(S::zero)
        );

        seeds
            .into_iter()
            .map(|seed| {
                tracer.seed(seed.row, seed.col, seed.score);
                let alignment = table.traceback(seq1, seq2, seed.row, seed.col, tracer);
                debug_assert_eq!(*alignment.score(), seed.score);
                alignment
            })
            .collect()
    }
}
