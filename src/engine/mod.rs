//! Core engine — the validate → fetch signals → score pipeline.

pub mod evaluator;
pub mod runner;

pub use evaluator::Evaluator;
pub use runner::BatchRunner;
