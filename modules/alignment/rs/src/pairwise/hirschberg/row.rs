use dpalign_core_rs::alignment::Alignable;

use crate::pairwise::scoring::{self, Score};

/// Last row of the global alignment table of `seq1` against `seq2`.
///
/// Element `j` is the best global score of `seq1` against `seq2[..j]`. Only two rows
/// are kept in memory at any time.
pub fn score_row<S1, S2, Symbol, Scheme, S>(seq1: &S1, seq2: &S2, scoring: &Scheme) -> Vec<S>
where
    S1: Alignable<Symbol = Symbol>,
    S2: Alignable<Symbol = Symbol>,
    Scheme: scoring::Scheme<Symbol, Score = S>,
    S: Score,
{
    let indel = scoring.indel();

    let mut prev = Vec::with_capacity(seq2.len() + 1);
    prev.push(S::zero());
    for col in 1..=seq2.len() {
        prev.push(prev[col - 1] + indel);
    }
    let mut curr = vec![S::zero(); prev.len()];

    for row in 1..=seq1.len() {
        let s1 = seq1.at(row - 1);
        curr[0] = prev[0] + indel;
        for col in 1..curr.len() {
            let diagonal = prev[col - 1] + scoring.substitution(s1, seq2.at(col - 1));
            let up = prev[col] + indel;
            let left = curr[col - 1] + indel;
            curr[col] = diagonal.max(up).max(left);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev
}
