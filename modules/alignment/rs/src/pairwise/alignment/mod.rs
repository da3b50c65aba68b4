pub use alignment::{Alignment, GAP};
pub use set::AlignmentSet;

#[allow(clippy::module_inception)]
mod alignment;
mod set;
pub mod utils;
