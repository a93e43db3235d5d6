use dpalign_alignment_rs::pairwise::scoring::Linear;
use dpalign_alignment_rs::pairwise::{Hirschberg, NeedlemanWunsch};
use dpalign_alignment_rs::{global_align, linear_space_align};

use super::{chars, sequences};

#[test]
fn test_gattaca_gcatgcu() {
    let result = linear_space_align("GATTACA", "GCATGCU", &Linear::default());
    assert_eq!(*result.score(), 0);
    result.validate("GATTACA", "GCATGCU").unwrap();
}

#[test]
fn test_tied_paths() {
    // Same score as Needleman-Wunsch, different placement of the gap run
    let scoring = Linear::new(2, -3, -1);
    let linear = linear_space_align("ACGTACGT", "ACGTTTTACGT", &scoring);
    let global = global_align("ACGTACGT", "ACGTTTTACGT", &scoring, false);
    assert_eq!(linear.score(), global.score());
    assert_eq!(linear.first(), "ACGT---ACGT");
    assert_eq!(global.first(), "ACG---TACGT");
}

#[test]
fn test_exhaustive() {
    let seqs = sequences(&['A', 'C', 'G'], 4);
    for scoring in [Linear::default(), Linear::new(2, -1, -2), Linear::new(1, -3, -1)] {
        let global = NeedlemanWunsch::new(scoring);
        let linear = Hirschberg::new(scoring);
        for seq1 in &seqs {
            for seq2 in &seqs {
                let (s1, s2) = (chars(seq1), chars(seq2));
                let expected = global.align(&s1, &s2);
                let result = linear.align(&s1, &s2);
                assert_eq!(result.score(), expected.score(), "{seq1} vs {seq2}");
                assert_eq!(result.rescore(&s1, &s2, &scoring), *result.score());
                result.render(&s1, &s2).validate(seq1, seq2).unwrap();
            }
        }
    }
}

#[test]
fn test_long_sequences() {
    let seq1 = "ACGTTGCAAGTCCAGTAGCATTTGACCAGTAGGCATACAGTTAGCCAGT".repeat(8);
    let seq2 = "ACGTGCATGTCCAGTAGGCATTGACCAGTAGCATTACAGTAGCCCAGT".repeat(8);
    let scoring = Linear::new(2, -3, -2);

    let global = global_align(&seq1, &seq2, &scoring, false);
    let linear = linear_space_align(&seq1, &seq2, &scoring);
    assert_eq!(global.score(), linear.score());
    linear.validate(&seq1, &seq2).unwrap();

    // Parallel score rows don't change the result
    let (s1, s2) = (chars(&seq1), chars(&seq2));
    let sequential = Hirschberg::new(scoring).align(&s1, &s2);
    let parallel = Hirschberg::new(scoring)
        .with_parallel_threshold(64)
        .align(&s1, &s2);
    assert_eq!(sequential, parallel);
}
