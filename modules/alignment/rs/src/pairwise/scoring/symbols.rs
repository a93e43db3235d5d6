use super::Score;

pub trait Scorer<Symbol> {
    type Score: Score;

    fn score(&self, a: &Symbol, b: &Symbol) -> Self::Score;
}

impl<T: Scorer<Symbol> + ?Sized, Symbol> Scorer<Symbol> for &T {
    type Score = T::Score;

    #[inline(always)]
    fn score(&self, a: &Symbol, b: &Symbol) -> Self::Score {
        (**self).score(a, b)
    }
}
