pub use alignment::{AlignedPair, Alignment, GAP};
pub use hirschberg::{Hirschberg, score_row};
pub use nw::NeedlemanWunsch;
pub use sw::SmithWaterman;

pub mod alignment;
pub mod dp;
pub mod hirschberg;
pub mod nw;
pub mod scoring;
pub mod sw;

/// Needleman-Wunsch alignment of two strings, aligned per Unicode scalar value.
pub fn global_align(
    a: &str,
    b: &str,
    scoring: &scoring::Linear<i32>,
    overlap: bool,
) -> AlignedPair<i32> {
    let (a, b) = (symbols(a), symbols(b));
    NeedlemanWunsch::new(scoring)
        .with_overlap(overlap)
        .align(&a, &b)
        .render(&a, &b)
}

/// All co-optimal Smith-Waterman alignments of two strings.
pub fn local_align(a: &str, b: &str, scoring: &scoring::Linear<i32>) -> Vec<AlignedPair<i32>> {
    let (a, b) = (symbols(a), symbols(b));
    SmithWaterman::new(scoring)
        .align_all(&a, &b)
        .iter()
        .map(|x| x.render(&a, &b))
        .collect()
}

/// Linear-space global alignment of two strings.
pub fn linear_space_align(a: &str, b: &str, scoring: &scoring::Linear<i32>) -> AlignedPair<i32> {
    let (a, b) = (symbols(a), symbols(b));
    Hirschberg::new(scoring).align(&a, &b).render(&a, &b)
}

fn symbols(seq: &str) -> Vec<char> {
    seq.chars().collect()
}
