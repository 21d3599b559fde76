//! Alignment-and-feedback engine for grading translation attempts.
//!
//! Given two annotated sentences (the learner's attempt and the reference
//! translation), the engine aligns them with a minimum-edit-distance pass,
//! runs POS-specific heuristics over each difference to guess *why* it
//! happened, and renders two parallel feedback streams: vague hints and
//! explicit token-level fixes.
//!
//! The engine is synchronous, stateless, and deterministic; the only outside
//! dependency is the [`SynonymLookup`] seam, which callers implement with
//! whatever synonym source they have available.

pub mod align;
pub mod classify;
pub mod render;

pub use align::{EditOp, align};
pub use classify::{HintFragment, NoSynonyms, SynonymLookup, classify};
pub use render::{Feedback, SummaryKind, compare};
