//! Application-layer operations over the card records: editing, refinement,
//! and export policy.

pub mod editor;
pub mod export;
pub mod refine;
