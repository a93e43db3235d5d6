use super::Score;

// Gaps are linear: every gapped column costs the same, regardless of its neighbours
pub trait Scorer {
    type Score: Score;

    fn indel(&self) -> Self::Score;
}

impl<T: Scorer + ?Sized> Scorer for &T {
    type Score = T::Score;

    #[inline(always)]
    fn indel(&self) -> Self::Score {
        (**self).indel()
    }
}
