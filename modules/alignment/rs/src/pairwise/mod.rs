pub use alignment::{Alignment, AlignmentSet};
pub use ranking::Ranker;
pub use swalign_core_rs::alignment::pairwise::{Op, Step};

pub mod alignment;
pub mod ranking;
pub mod scoring;
pub mod sw;
