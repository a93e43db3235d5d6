pub use dpalign_core_rs::alignment::{Alignable, Reversed, Window};
pub use dpalign_core_rs::alignment::pairwise::{Op, Step};
pub use pairwise::{global_align, linear_space_align, local_align};

pub mod pairwise;
