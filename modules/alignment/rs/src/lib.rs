use num::traits::AsPrimitive;

use swalign_core_rs::num::PrimSInt;

pub use report::{align, AlignmentReport, Mode};
pub use swalign_core_rs::alignment::Alignable;
pub use swalign_core_rs::Sequence;

pub mod pairwise;
pub mod report;

/// Alignment score - any signed primitive integer.
pub trait Score: PrimSInt + AsPrimitive<f64> {}

impl<T: PrimSInt + AsPrimitive<f64>> Score for T {}
