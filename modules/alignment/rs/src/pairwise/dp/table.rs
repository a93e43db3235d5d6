use std::fmt::Write;

use dpalign_core_rs::alignment::Alignable;
use dpalign_core_rs::alignment::pairwise::{Op, Step};

use crate::pairwise::alignment::Alignment;
use crate::pairwise::scoring::{self, Score};

use super::{Mode, Moves, Trace, Tracer};

/// Full (m+1)x(n+1) score and backtrace grid.
///
/// Row `i` and column `j` hold the best score of the prefixes `seq1[..i]` and `seq2[..j]`.
/// The table is immutable once filled and is dropped by its owner after the traceback.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Table<S: Score> {
    mode: Mode,
    rows: usize,
    cols: usize,
    scores: Vec<S>,
    moves: Vec<Moves>,
}

impl<S: Score> Table<S> {
    /// Fills the table row by row.
    pub fn fill<S1, S2, Symbol, Scheme, T>(
        seq1: &S1,
        seq2: &S2,
        scoring: &Scheme,
        mode: Mode,
        tracer: &mut T,
    ) -> Self
    where
        S1: Alignable<Symbol = Symbol>,
        S2: Alignable<Symbol = Symbol>,
        Scheme: scoring::Scheme<Symbol, Score = S>,
        T: Tracer<S>,
    {
        let (rows, cols) = (seq1.len() + 1, seq2.len() + 1);
        let mut table = Self {
            mode,
            rows,
            cols,
            scores: vec![S::zero(); rows * cols],
            moves: vec![Moves::END; rows * cols],
        };

        let indel = scoring.indel();
        if mode != Mode::Local {
            for row in 1..rows {
                table.moves[row * cols] = Moves::END.with(Trace::Up);
            }
            for col in 1..cols {
                table.moves[col] = Moves::END.with(Trace::Left);
            }
        }
        if mode == Mode::Global {
            for row in 1..rows {
                table.scores[row * cols] = table.scores[(row - 1) * cols] + indel;
            }
            for col in 1..cols {
                table.scores[col] = table.scores[col - 1] + indel;
            }
        }

        for row in 1..rows {
            let s1 = seq1.at(row - 1);
            for col in 1..cols {
                let ind = row * cols + col;
                let candidates = [
                    (
                        Trace::Diagonal,
                        table.scores[ind - cols - 1] + scoring.substitution(s1, seq2.at(col - 1)),
                    ),
                    (Trace::Up, table.scores[ind - cols] + indel),
                    (Trace::Left, table.scores[ind - 1] + indel),
                ];
                debug_assert!(candidates.iter().map(|x| x.0).eq(Trace::PRIORITY));

                let best = candidates
                    .iter()
                    .map(|x| x.1)
                    .fold(candidates[0].1, |a, b| a.max(b));

                let (score, moves) = if mode == Mode::Local && best <= S::zero() {
                    (S::zero(), Moves::END)
                } else {
                    let moves: Moves = candidates
                        .iter()
                        .filter(|x| x.1 == best)
                        .map(|x| x.0)
                        .collect();
                    (best, moves)
                };

                table.scores[ind] = score;
                table.moves[ind] = moves;
                tracer.cell(row, col, score, moves);
            }
        }

        tracer.filled(&table);
        table
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of rows, `seq1.len() + 1`
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `seq2.len() + 1`
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn score(&self, row: usize, col: usize) -> S {
        self.scores[row * self.cols + col]
    }

    pub fn moves(&self, row: usize, col: usize) -> Moves {
        self.moves[row * self.cols + col]
    }

    /// The transition taken when backtracking through the cell.
    pub fn trace(&self, row: usize, col: usize) -> Trace {
        self.moves(row, col).best()
    }

    /// The last row of the table, e.g. scores of `seq1` against all prefixes of `seq2`.
    pub fn last_row(&self) -> &[S] {
        &self.scores[(self.rows - 1) * self.cols..]
    }

    /// Walks back from the given cell until a path start is reached.
    /// The resulting alignment carries the score of the starting cell.
    pub fn traceback<S1, S2, Symbol, T>(
        &self,
        seq1: &S1,
        seq2: &S2,
        row: usize,
        col: usize,
        tracer: &mut T,
    ) -> Alignment<S>
    where
        S1: Alignable<Symbol = Symbol>,
        S2: Alignable<Symbol = Symbol>,
        Symbol: PartialEq,
        T: Tracer<S>,
    {
        debug_assert!(row < self.rows && col < self.cols);
        debug_assert!(seq1.len() + 1 == self.rows && seq2.len() + 1 == self.cols);

        let (seq1end, seq2end) = (row, col);
        let (mut row, mut col) = (row, col);
        let mut ops = Vec::with_capacity(row + col);
        loop {
            let trace = self.trace(row, col);
            tracer.step(row, col, trace);
            match trace {
                Trace::End => break,
                Trace::Diagonal => {
                    let op = if seq1.at(row - 1) == seq2.at(col - 1) {
                        Op::Match
                    } else {
                        Op::Mismatch
                    };
                    ops.push(op);
                    row -= 1;
                    col -= 1;
                }
                Trace::Up => {
                    ops.push(Op::GapSecond);
                    row -= 1;
                }
                Trace::Left => {
                    ops.push(Op::GapFirst);
                    col -= 1;
                }
            }
        }
        ops.reverse();

        Alignment::new(
            self.score(seq1end, seq2end),
            Step::from_ops(ops),
            row..seq1end,
            col..seq2end,
        )
    }

    /// Human-readable dump of the score grid followed by the backtrace grid.
    pub fn render(&self) -> String {
        let scores: Vec<String> = self.scores.iter().map(|x| x.to_string()).collect();
        let moves: Vec<String> = self.moves.iter().map(|x| x.to_string()).collect();

        let mut result = String::new();
        for grid in [&scores, &moves] {
            let width = grid.iter().map(|x| x.len()).max().unwrap_or(0);
            for row in grid.chunks(self.cols) {
                let line: Vec<String> = row.iter().map(|x| format!("{x:>width$}")).collect();
                // Writing into a String can't fail
                let _ = writeln!(result, "{}", line.join(" "));
            }
            result.push('\n');
        }
        result
    }
}
