pub use engine::Engine;
pub use matrix::{Cell, Matrix, ScoreMatrix};
pub use scan::Scan;

pub mod algo;
mod engine;
mod matrix;
mod scan;
pub mod storage;
pub mod traceback;
