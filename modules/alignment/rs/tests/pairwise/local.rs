use dpalign_alignment_rs::local_align;
use dpalign_alignment_rs::pairwise::SmithWaterman;
use dpalign_alignment_rs::pairwise::scoring::Linear;

use super::{Score, chars, sequences};

struct Workload<'a> {
    seq1: (&'a str, usize),
    seq2: (&'a str, usize),
    score: Score,
    rle: &'a str,
}

fn ensure(aligner: &SmithWaterman<Linear<Score>>, w: Workload<'_>) {
    let (s1, s2) = (chars(w.seq1.0), chars(w.seq2.0));
    let mut result = aligner.align_all(&s1, &s2);
    assert_eq!(result.len(), 1, "{} vs {}", w.seq1.0, w.seq2.0);
    let result = result.pop().unwrap();
    assert_eq!(result.seq1().start, w.seq1.1);
    assert_eq!(result.seq2().start, w.seq2.1);
    assert_eq!(*result.score(), w.score);
    assert_eq!(result.rle(), w.rle);

    // Swapping the sequences mirrors the alignment
    let inverted = aligner.align_all(&s2, &s1);
    assert_eq!(inverted, [result.swapped()], "{} vs {}", w.seq2.0, w.seq1.0);
}

#[test]
fn test_no_gaps() {
    let aligner = SmithWaterman::new(Linear::new(1, -2, -2));
    for w in [
        Workload { seq1: ("AAGAA", 1), seq2: ("AGA", 0), score: 3, rle: "3=" },
        Workload { seq1: ("AGTCCCGTGTCCCAGGGG", 0), seq2: ("AGTC", 0), score: 4, rle: "4=" },
        Workload { seq1: ("CGCGCGCGTTT", 6), seq2: ("CGTTT", 0), score: 5, rle: "5=" },
        Workload { seq1: ("AAAA", 0), seq2: ("AAAA", 0), score: 4, rle: "4=" },
        Workload {
            seq1: ("ACGTACGTACGT____", 0),
            seq2: ("____ACGTACGTACGT", 4),
            score: 12,
            rle: "12=",
        },
        Workload { seq1: ("ACGTTTTACGT", 6), seq2: ("ACGTACGT", 3), score: 5, rle: "5=" },
    ] {
        ensure(&aligner, w);
    }
}

#[test]
fn test_gaps() {
    let aligner = SmithWaterman::new(Linear::new(2, -3, -1));
    for w in [
        Workload { seq1: ("ACGTTTTACGT", 0), seq2: ("ACGTACGT", 0), score: 13, rle: "3=3^5=" },
        Workload { seq1: ("AAAACCCCGGGG", 0), seq2: ("AAAAGGGG", 0), score: 12, rle: "4=4^4=" },
    ] {
        ensure(&aligner, w);
    }
}

#[test]
fn test_co_optimal() {
    let scoring = Linear::new(1, -2, -2);
    let (seq1, seq2) = (chars("AGAAAAAAAGGAAAAAAAGGGGG"), chars("G"));
    let result = SmithWaterman::new(scoring).align_all(&seq1, &seq2);
    assert_eq!(
        result.iter().map(|x| x.seq1().start).collect::<Vec<_>>(),
        [1, 9, 10, 18, 19, 20, 21, 22]
    );
    assert!(result.iter().all(|x| *x.score() == 1 && x.rle() == "1="));

    // Distinct end cells, same start: the results are not deduplicated
    let (seq1, seq2) = (chars("AAAGGGAGGGTTTA"), chars("GGGGGGG"));
    let result = SmithWaterman::new(scoring).align_all(&seq1, &seq2);
    assert_eq!(
        result.iter().map(|x| x.rle()).collect::<Vec<_>>(),
        ["3=1^3=", "3=1X3="]
    );
    assert!(result.iter().all(|x| x.seq1().start == 3 && x.seq2().start == 0));
}

#[test]
fn test_gattaca_gcatgcu() {
    let result = local_align("GATTACA", "GCATGCU", &Linear::default());
    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|x| *x.score() == 2));
    assert_eq!((result[0].first().as_str(), result[0].second().as_str()), ("AT", "AT"));
    assert_eq!((result[1].first().as_str(), result[1].second().as_str()), ("CA", "CA"));
}

#[test]
fn test_degenerate() {
    // Mismatches are too expensive to ever pay off
    let result = local_align("AAAA", "CCCC", &Linear::new(1, -10, -10));
    assert_eq!(result.len(), 16);
    assert!(result.iter().all(|x| x.is_empty() && *x.score() == 0));

    for (a, b) in [("", "ACGT"), ("ACGT", ""), ("", "")] {
        let result = local_align(a, b, &Linear::default());
        assert_eq!(result.len(), 1);
        assert!(result[0].is_empty());
        assert_eq!(*result[0].score(), 0);
    }
}

#[test]
fn test_exhaustive() {
    let seqs = sequences(&['A', 'C', 'G'], 4);
    for scoring in [Linear::default(), Linear::new(2, -1, -2), Linear::new(1, -3, -1)] {
        let aligner = SmithWaterman::new(scoring);
        for seq1 in &seqs {
            for seq2 in &seqs {
                let (s1, s2) = (chars(seq1), chars(seq2));
                let result = aligner.align_all(&s1, &s2);
                assert!(!result.is_empty());

                let best = *result[0].score();
                assert!(best >= 0);
                for alignment in &result {
                    assert_eq!(*alignment.score(), best);
                    assert_eq!(alignment.rescore(&s1, &s2, &scoring), best);

                    // Rows reproduce the aligned substrings
                    let (r1, r2) = (alignment.seq1().clone(), alignment.seq2().clone());
                    let expected1: String = s1[r1].iter().collect();
                    let expected2: String = s2[r2].iter().collect();
                    alignment.render(&s1, &s2).validate(&expected1, &expected2).unwrap();
                }

                // The best local score is at least the best single match
                if seq1.chars().any(|x| seq2.contains(x)) {
                    assert!(best >= *scoring.match_score());
                }
                assert_eq!(result, aligner.align_all(&s1, &s2));
            }
        }
    }
}
