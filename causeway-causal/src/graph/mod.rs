//! Graph transformations: do-calculus surgery and topology diagnostics.

pub mod surgery;
pub mod topology;

pub use surgery::perform_surgery;
pub use topology::{find_cycles, summarize};
