use std::ops::Range;

use crate::pairwise::scoring::Score;

use super::{Mode, Moves, Table, Trace};

/// Observer of the DP machinery. Every aligner reports what it does through a tracer,
/// tracers never influence the computed alignments.
///
/// Coordinates are table coordinates: row `i` / column `j` correspond to the prefixes
/// of length `i` / `j` of the first / second sequence.
#[allow(unused_variables)]
pub trait Tracer<S: Score> {
    /// An interior cell (`row, col >= 1`) has been computed.
    fn cell(&mut self, row: usize, col: usize, score: S, moves: Moves) {}

    /// The table is completely filled.
    fn filled(&mut self, table: &Table<S>) {}

    /// A traceback starts from the given cell.
    fn seed(&mut self, row: usize, col: usize, score: S) {}

    /// The traceback visits a cell and follows the given transition.
    fn step(&mut self, row: usize, col: usize, trace: Trace) {}

    /// The linear-space aligner divided a subproblem at `seq2` column `split`.
    fn split(&mut self, seq1: Range<usize>, seq2: Range<usize>, split: usize) {}
}

impl<S: Score, T: Tracer<S> + ?Sized> Tracer<S> for &mut T {
    #[inline(always)]
    fn cell(&mut self, row: usize, col: usize, score: S, moves: Moves) {
        (**self).cell(row, col, score, moves)
    }

    fn filled(&mut self, table: &Table<S>) {
        (**self).filled(table)
    }

    fn seed(&mut self, row: usize, col: usize, score: S) {
        (**self).seed(row, col, score)
    }

    fn step(&mut self, row: usize, col: usize, trace: Trace) {
        (**self).step(row, col, trace)
    }

    fn split(&mut self, seq1: Range<usize>, seq2: Range<usize>, split: usize) {
        (**self).split(seq1, seq2, split)
    }
}

/// Discards all events.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Noop;

impl<S: Score> Tracer<S> for Noop {}

/// Forwards events to the `log` facade at the trace level.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Log;

impl<S: Score> Tracer<S> for Log {
    fn filled(&mut self, table: &Table<S>) {
        if !log::log_enabled!(log::Level::Trace) {
            return;
        }
        let mode = match table.mode() {
            Mode::Global => "global",
            Mode::Overlap => "overlap",
            Mode::Local => "local",
        };
        log::trace!(
            "Filled {}x{} {mode} table:\n{}",
            table.rows(),
            table.cols(),
            table.render()
        );
    }

    fn seed(&mut self, row: usize, col: usize, score: S) {
        log::trace!("Starting from ({row}, {col}) with score {score}");
    }

    fn step(&mut self, row: usize, col: usize, trace: Trace) {
        log::trace!("\t({row}, {col}): moving {}", trace.symbol());
    }

    fn split(&mut self, seq1: Range<usize>, seq2: Range<usize>, split: usize) {
        log::trace!("Dividing {seq1:?} x {seq2:?} at column {split}");
    }
}

/// Feeds every event to both tracers, the first one goes first.
#[derive(Clone, Debug, Default)]
pub struct Chain<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Chain<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<S: Score, A: Tracer<S>, B: Tracer<S>> Tracer<S> for Chain<A, B> {
    #[inline(always)]
    fn cell(&mut self, row: usize, col: usize, score: S, moves: Moves) {
        self.first.cell(row, col, score, moves);
        self.second.cell(row, col, score, moves);
    }

    fn filled(&mut self, table: &Table<S>) {
        self.first.filled(table);
        self.second.filled(table);
    }

    fn seed(&mut self, row: usize, col: usize, score: S) {
        self.first.seed(row, col, score);
        self.second.seed(row, col, score);
    }

    fn step(&mut self, row: usize, col: usize, trace: Trace) {
        self.first.step(row, col, trace);
        self.second.step(row, col, trace);
    }

    fn split(&mut self, seq1: Range<usize>, seq2: Range<usize>, split: usize) {
        self.first.split(seq1.clone(), seq2.clone(), split);
        self.second.split(seq1, seq2, split);
    }
}
