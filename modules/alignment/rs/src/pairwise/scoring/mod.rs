pub use dpalign_core_rs::num::PrimSInt as Score;
pub use linear::{Linear, ScoringError};

pub mod gaps;
mod linear;
pub mod symbols;

/// Linear-gap scoring model consumed by every aligner.
///
/// Implemented automatically for anything that scores both symbol pairs and indels
/// with the same score type.
pub trait Scheme<Symbol> {
    type Score: Score;

    /// Score of aligning `a` against `b` in the same column.
    fn substitution(&self, a: &Symbol, b: &Symbol) -> Self::Score;

    /// Score of aligning a symbol against the gap.
    fn indel(&self) -> Self::Score;
}

impl<T, Symbol> Scheme<Symbol> for T
where
    T: symbols::Scorer<Symbol> + gaps::Scorer<Score = <T as symbols::Scorer<Symbol>>::Score>,
{
    type Score = <T as symbols::Scorer<Symbol>>::Score;

    #[inline(always)]
    fn substitution(&self, a: &Symbol, b: &Symbol) -> Self::Score {
        symbols::Scorer::score(self, a, b)
    }

    #[inline(always)]
    fn indel(&self) -> Self::Score {
        gaps::Scorer::indel(self)
    }
}
