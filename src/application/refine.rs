//! Refinement orchestration rules.
//!
//! The async call itself lives in the UI layer (it is spawned onto the shared
//! runtime); the gating and state-transition rules live here so they can be
//! tested without a collaborator.

use crate::domain::{CardContent, RefinedNote};

/// Whether a refine request should run at all.
///
/// Empty (or whitespace-only) bodies are a no-op and the collaborator is
/// never invoked; while a refinement is in flight, further requests are
/// ignored rather than queued.
pub fn should_refine(body: &str, in_flight: bool) -> bool {
    !body.trim().is_empty() && !in_flight
}

/// Applies a successful refinement to the card.
///
/// Title, body, and tags are replaced together; author and date are never
/// touched. On failure this function is simply not called, which is what
/// keeps the record unchanged.
pub fn apply_refinement(card: &CardContent, refined: &RefinedNote) -> CardContent {
    CardContent {
        title: refined.title.clone(),
        body: refined.body.clone(),
        tags: refined.tags.clone(),
        author: card.author.clone(),
        date: card.date.clone(),
    }
}
