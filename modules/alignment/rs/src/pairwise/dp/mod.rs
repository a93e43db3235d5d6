use std::fmt::{Display, Formatter};

pub use table::Table;
pub use tracer::Tracer;

mod table;
pub mod tracer;

/// Boundary and cell-update rules of the DP table.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Mode {
    /// Needleman-Wunsch: boundary cells accumulate indel scores.
    #[default]
    Global,
    /// Global alignment with zeroed boundaries: leading overhangs are free.
    Overlap,
    /// Smith-Waterman: zeroed boundaries, cells are floored at zero.
    Local,
}

/// A single backtrace transition.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Trace {
    /// Consume a symbol from both sequences, `(i, j) -> (i - 1, j - 1)`
    Diagonal,
    /// Consume a symbol from the first sequence only, `(i, j) -> (i - 1, j)`
    Up,
    /// Consume a symbol from the second sequence only, `(i, j) -> (i, j - 1)`
    Left,
    /// The path starts here
    End,
}

impl Trace {
    /// Tie-break order used when several transitions reach the cell maximum.
    pub const PRIORITY: [Trace; 3] = [Trace::Diagonal, Trace::Up, Trace::Left];

    #[inline(always)]
    fn bit(self) -> u8 {
        match self {
            Trace::Diagonal => 0b001,
            Trace::Up => 0b010,
            Trace::Left => 0b100,
            Trace::End => 0b000,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Trace::Diagonal => 'D',
            Trace::Up => 'U',
            Trace::Left => 'L',
            Trace::End => 'E',
        }
    }
}

/// The set of transitions achieving the score of a cell. The empty set marks the start of a path.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub struct Moves(u8);

impl Moves {
    pub const END: Moves = Moves(0);

    pub fn with(self, trace: Trace) -> Self {
        Moves(self.0 | trace.bit())
    }

    pub fn contains(&self, trace: Trace) -> bool {
        trace != Trace::End && self.0 & trace.bit() != 0
    }

    pub fn is_end(&self) -> bool {
        self.0 == 0
    }

    /// The transition followed during backtracking: the first recorded move in priority order.
    pub fn best(&self) -> Trace {
        Trace::PRIORITY
            .into_iter()
            .find(|x| self.contains(*x))
            .unwrap_or(Trace::End)
    }

    /// All recorded moves in priority order.
    pub fn iter(&self) -> impl Iterator<Item = Trace> {
        let moves = *self;
        Trace::PRIORITY.into_iter().filter(move |x| moves.contains(*x))
    }
}

impl FromIterator<Trace> for Moves {
    fn from_iter<T: IntoIterator<Item = Trace>>(iter: T) -> Self {
        iter.into_iter().fold(Moves::END, Moves::with)
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_end() {
            return write!(f, "{}", Trace::End.symbol());
        }
        let moves: Vec<String> = self.iter().map(|x| x.symbol().to_string()).collect();
        write!(f, "({})", moves.join(","))
    }
}
