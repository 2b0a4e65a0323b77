//! Core library for RIF (financial-intelligence report) narrative analysis.
//!
//! This crate provides:
//! - Bank-aware dispatch over the declared reporting-institution name
//! - Per-institution narrative extractors (Bradesco, Banco do Brasil, Nubank)
//!   plus a generic fallback for everything else
//! - Brazilian-locale numeric normalization and crime-keyword scanning
//! - The canonical [`ParsedNarrative`] record shared by all extractors
//!
//! Extraction never fails: clauses that match no known template leave the
//! corresponding fields at their canonical defaults, so downstream
//! aggregation is never blocked by a single malformed report.

pub mod error;
pub mod models;
pub mod narrative;

pub use error::{Result, RifError};
pub use models::config::{RifConfig, RiskThresholds};
pub use models::narrative::{
    Boleto, Counterparty, Credits, Debits, EntryType, FinancialSummary, ParsedNarrative, Period,
};
pub use narrative::rules::money::{format_brl, normalize_brl};
pub use narrative::{extract, Institution, NarrativeExtractor};
