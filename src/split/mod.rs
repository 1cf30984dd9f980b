//! The splitting core: interval segmentation, refinement, and the
//! unknown-word fallback.

pub mod engine;
pub mod fallback;
pub mod refine;

pub use engine::generate_compound;
pub use fallback::{unknown_word_compounding, FallbackResult};
pub use refine::{append_suffix_and_prefix, Refined};
