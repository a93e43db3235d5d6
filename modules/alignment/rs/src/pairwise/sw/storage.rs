use derive_getters::Dissolve;

use crate::pairwise::dp::{Moves, Tracer};
use crate::pairwise::scoring::Score;

/// A cell to start the traceback from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AlignmentSeed<S: Score> {
    pub row: usize,
    pub col: usize,
    pub score: S,
}

/// Tracer collecting the seeds of the reported alignments while the table is being filled.
pub trait Storage<S: Score>: Tracer<S> {
    fn reset(&mut self, newrows: usize, newcols: usize);

    fn finalize(&mut self) -> Vec<AlignmentSeed<S>>;
}

/// Keeps every cell achieving the table-wide maximum, in row-major order.
#[derive(Clone, Debug, Eq, PartialEq, Dissolve)]
pub struct AllBest<S: Score> {
    score: S,
    cells: Vec<(usize, usize)>,
    corner: (usize, usize),
}

impl<S: Score> AllBest<S> {
    pub fn new() -> Self {
        Self {
            score: S::zero(),
            cells: Vec::new(),
            corner: (0, 0),
        }
    }
}

impl<S: Score> Default for AllBest<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Score> Tracer<S> for AllBest<S> {
    #[inline(always)]
    fn cell(&mut self, row: usize, col: usize, score: S, _: Moves) {
        if score > self.score {
            self.score = score;
            self.cells.clear();
            self.cells.push((row, col));
        } else if score == self.score {
            self.cells.push((row, col));
        }
    }
}

impl<S: Score> Storage<S> for AllBest<S> {
    fn reset(&mut self, newrows: usize, newcols: usize) {
        self.score = S::zero();
        self.cells.clear();
        self.corner = (newrows, newcols);
    }

    fn finalize(&mut self) -> Vec<AlignmentSeed<S>> {
        // Without interior cells the only candidate is the corner of the table
        if self.cells.is_empty() {
            self.cells.push(self.corner);
        }

        let score = self.score;
        self.cells
            .drain(..)
            .map(|(row, col)| AlignmentSeed { row, col, score })
            .collect()
    }
}
