use dpalign_alignment_rs::global_align;
use dpalign_alignment_rs::pairwise::NeedlemanWunsch;
use dpalign_alignment_rs::pairwise::scoring::Linear;

use super::{Score, chars, sequences};

struct Workload<'a> {
    seq1: &'a str,
    seq2: &'a str,
    score: Score,
    rle: &'a str,
}

fn ensure(aligner: &NeedlemanWunsch<Linear<Score>>, w: Workload<'_>) {
    let (s1, s2) = (chars(w.seq1), chars(w.seq2));
    let result = aligner.align(&s1, &s2);
    assert_eq!(*result.score(), w.score, "{} vs {}", w.seq1, w.seq2);
    assert_eq!(result.rle(), w.rle, "{} vs {}", w.seq1, w.seq2);
    assert_eq!(*result.seq1(), 0..s1.len());
    assert_eq!(*result.seq2(), 0..s2.len());

    // Swapping the sequences mirrors the alignment
    let inverted = aligner.align(&s2, &s1);
    assert_eq!(inverted, result.swapped(), "{} vs {}", w.seq2, w.seq1);
    assert_eq!(inverted.swapped(), result);
}

#[test]
fn test_gattaca_gcatgcu() {
    let result = global_align("GATTACA", "GCATGCU", &Linear::default(), false);
    assert_eq!(result.first(), "G-ATTACA");
    assert_eq!(result.second(), "GCA-TGCU");
    assert_eq!(*result.score(), 0);
    result.validate("GATTACA", "GCATGCU").unwrap();
}

#[test]
fn test_empty_boundaries() {
    let scoring = Linear::default();
    let result = global_align("", "xyz", &scoring, false);
    assert_eq!((result.first().as_str(), result.second().as_str()), ("---", "xyz"));
    assert_eq!(*result.score(), 3 * scoring.indel());

    let result = global_align("", "", &scoring, false);
    assert!(result.is_empty());
    assert_eq!(*result.score(), 0);

    let result = global_align("", "xyz", &scoring.with_indel(-4), false);
    assert_eq!(*result.score(), -12);
}

#[test]
fn test_unicode() {
    let result = global_align("αβγ", "αγ", &Linear::default(), false);
    assert_eq!(result.first(), "αβγ");
    assert_eq!(result.second(), "α-γ");
    assert_eq!(*result.score(), 1);
}

#[test]
fn test_workloads() {
    let aligner = NeedlemanWunsch::new(Linear::default());
    for w in [
        Workload { seq1: "ACGT", seq2: "ACGT", score: 4, rle: "4=" },
        Workload { seq1: "ACGT", seq2: "AGT", score: 2, rle: "1=1^2=" },
        Workload { seq1: "AAAA", seq2: "CCCC", score: -4, rle: "4X" },
        Workload { seq1: "ACGT", seq2: "", score: -4, rle: "4^" },
    ] {
        ensure(&aligner, w);
    }

    let aligner = NeedlemanWunsch::new(Linear::new(2, -3, -1));
    for w in [
        Workload { seq1: "ACGTTTTACGT", seq2: "ACGTACGT", score: 13, rle: "3=3^5=" },
        Workload { seq1: "AAAACCCCGGGG", seq2: "AAAAGGGG", score: 12, rle: "4=4^4=" },
    ] {
        ensure(&aligner, w);
    }
}

#[test]
fn test_overlap() {
    let scoring = Linear::default();
    let result = global_align("ACGT", "TTACGT", &scoring, true);
    assert_eq!(result.first(), "--ACGT");
    assert_eq!(result.second(), "TTACGT");
    assert_eq!(*result.score(), 4);
    result.validate("ACGT", "TTACGT").unwrap();

    // Overlap scores are never below the global ones
    for (a, b) in [("GATTACA", "GCATGCU"), ("AAAC", "CGGG"), ("", "ACG")] {
        let overlap = global_align(a, b, &scoring, true);
        overlap.validate(a, b).unwrap();
        assert!(*overlap.score() >= *global_align(a, b, &scoring, false).score());
    }
}

#[test]
fn test_exhaustive() {
    let seqs = sequences(&['A', 'C', 'G'], 4);
    for scoring in [Linear::default(), Linear::new(2, -1, -2), Linear::new(1, -3, -1)] {
        let aligner = NeedlemanWunsch::new(scoring);
        for seq1 in &seqs {
            for seq2 in &seqs {
                let result = global_align(seq1, seq2, &scoring, false);
                result.validate(seq1, seq2).unwrap();

                // Symmetry
                let swapped = global_align(seq2, seq1, &scoring, false);
                assert_eq!(result.score(), swapped.score(), "{seq1} vs {seq2}");

                // Determinism
                assert_eq!(result, global_align(seq1, seq2, &scoring, false));

                // Reported scores match the alignment columns
                let (s1, s2) = (chars(seq1), chars(seq2));
                let alignment = aligner.align(&s1, &s2);
                assert_eq!(alignment.rescore(&s1, &s2, &scoring), *alignment.score());
                assert_eq!(alignment.score(), result.score());
            }
        }
    }
}
