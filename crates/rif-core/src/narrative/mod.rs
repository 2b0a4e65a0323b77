//! Narrative field extraction module.

mod bb;
mod bradesco;
mod generic;
mod institution;
mod nubank;
pub mod rules;

pub use bb::BancoDoBrasilExtractor;
pub use bradesco::BradescoExtractor;
pub use generic::GenericExtractor;
pub use institution::Institution;
pub use nubank::NubankExtractor;

use crate::models::narrative::ParsedNarrative;

/// Trait implemented by every per-institution narrative extractor.
///
/// Extractors are pure synchronous functions over the narrative text: no
/// I/O, no shared mutable state, safe to call concurrently. They never
/// fail: a clause that matches no known template leaves its field at the
/// canonical default.
pub trait NarrativeExtractor: Sync {
    /// Extract a canonical record from narrative free text.
    fn extract(&self, text: &str) -> ParsedNarrative;
}

/// Extract a structured record from a narrative, dispatching on the declared
/// reporting-institution name.
pub fn extract(text: &str, institution_name: &str) -> ParsedNarrative {
    Institution::detect(institution_name).extractor().extract(text)
}
