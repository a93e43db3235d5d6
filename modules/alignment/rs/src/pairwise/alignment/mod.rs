pub use aligned::{AlignedPair, GAP};
pub use alignment::Alignment;

mod aligned;
mod alignment;
