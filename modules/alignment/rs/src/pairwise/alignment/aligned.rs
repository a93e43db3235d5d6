use std::fmt::{Display, Formatter};

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::{Result, ensure};

use crate::pairwise::scoring::Score;

/// Symbol used to pad aligned rows.
pub const GAP: char = '-';

/// Textual form of an alignment: two gapped rows of equal length and the alignment score.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve, Constructor)]
pub struct AlignedPair<S: Score> {
    first: String,
    second: String,
    score: S,
}

impl<S: Score> AlignedPair<S> {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.first.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// The first row without gaps.
    pub fn ungapped_first(&self) -> String {
        self.first.chars().filter(|x| *x != GAP).collect()
    }

    /// The second row without gaps.
    pub fn ungapped_second(&self) -> String {
        self.second.chars().filter(|x| *x != GAP).collect()
    }

    /// Checks that the rows form a valid alignment of `first` and `second`:
    /// equal lengths, no gap-only columns, and the ungapped rows reproduce the inputs.
    /// Use the aligned substrings for local alignments.
    pub fn validate(&self, first: &str, second: &str) -> Result<()> {
        let (len1, len2) = (self.first.chars().count(), self.second.chars().count());
        ensure!(
            len1 == len2,
            "Aligned rows have different lengths: {len1} vs {len2}"
        );

        if let Some(column) = self
            .first
            .chars()
            .zip(self.second.chars())
            .position(|(a, b)| a == GAP && b == GAP)
        {
            return Err(eyre::eyre!("Column {column} contains only gaps"));
        }

        let ungapped = self.ungapped_first();
        ensure!(
            ungapped == first,
            "First row doesn't reproduce the sequence: {ungapped:?} vs {first:?}"
        );
        let ungapped = self.ungapped_second();
        ensure!(
            ungapped == second,
            "Second row doesn't reproduce the sequence: {ungapped:?} vs {second:?}"
        );
        Ok(())
    }
}

impl<S: Score> Display for AlignedPair<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.first)?;
        write!(f, "{}", self.second)
    }
}
