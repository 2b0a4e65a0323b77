//! Shared extraction primitives: compiled patterns, the Brazilian numeric
//! normalizer, crime-keyword scanning, bullet-note collection and tabular
//! counterparty recovery.

pub mod keywords;
pub mod money;
pub mod notes;
pub mod parties;
pub mod patterns;

pub use keywords::scan_crime_keywords;
pub use money::{format_brl, normalize_brl};
pub use notes::collect_bullet_notes;
pub use parties::{extract_name_first_rows, extract_value_first_rows};
