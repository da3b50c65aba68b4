pub use sequence::Sequence;

pub mod alignment;
pub mod num;
mod sequence;
