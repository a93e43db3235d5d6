use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, Display, Error};

use super::{Score, gaps, symbols};

#[derive(Clone, PartialEq, Debug, Display, Error)]
pub enum ScoringError {
    #[display("Invalid {parameter} score {value}: expected a finite integer representable by the score type")]
    InvalidScoring { parameter: &'static str, value: f64 },
}

/// Match / mismatch / indel scoring with a single linear gap penalty.
///
/// No sign constraints are enforced: a positive indel score is unusual but valid.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve, Constructor)]
pub struct Linear<S: Score> {
    match_score: S,
    mismatch: S,
    indel: S,
}

impl<S: Score> Default for Linear<S> {
    fn default() -> Self {
        Self {
            match_score: S::one(),
            mismatch: -S::one(),
            indel: -S::one(),
        }
    }
}

impl<S: Score> Linear<S> {
    pub fn with_match(mut self, match_score: S) -> Self {
        self.match_score = match_score;
        self
    }

    pub fn with_mismatch(mut self, mismatch: S) -> Self {
        self.mismatch = mismatch;
        self
    }

    pub fn with_indel(mut self, indel: S) -> Self {
        self.indel = indel;
        self
    }

    /// Builds the scheme from untyped numbers, e.g. parsed from user input.
    /// Rejects NaN, infinities, fractional values and values overflowing `S`.
    pub fn try_from_f64(match_score: f64, mismatch: f64, indel: f64) -> Result<Self, ScoringError> {
        Ok(Self {
            match_score: Self::integral("match", match_score)?,
            mismatch: Self::integral("mismatch", mismatch)?,
            indel: Self::integral("indel", indel)?,
        })
    }

    fn integral(parameter: &'static str, value: f64) -> Result<S, ScoringError> {
        let invalid = || ScoringError::InvalidScoring { parameter, value };
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(invalid());
        }
        num::cast::<f64, S>(value).ok_or_else(invalid)
    }
}

impl<S: Score, Symbol: PartialEq> symbols::Scorer<Symbol> for Linear<S> {
    type Score = S;

    #[inline(always)]
    fn score(&self, a: &Symbol, b: &Symbol) -> Self::Score {
        if a == b { self.match_score } else { self.mismatch }
    }
}

impl<S: Score> gaps::Scorer for Linear<S> {
    type Score = S;

    #[inline(always)]
    fn indel(&self) -> Self::Score {
        self.indel
    }
}
