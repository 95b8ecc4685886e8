// src/query/mod.rs
//! The parameter-to-query compiler shared by every endpoint builder.
//!
//! Two error philosophies live side by side here: optional enum-like values
//! are normalized or silently dropped (`vocabulary`), while identifiers and
//! ranges are validated strictly (`ids`, `range`). `assembler` only runs once
//! both have passed.

pub mod assembler;
pub mod ids;
pub mod range;
pub mod vocabulary;

pub use assembler::{Authentication, CompiledRequest, QueryParams, RequestPlan};
pub use ids::{dedup_serials, require_serial_number, require_site_id, sanitize_site_ids};
pub use range::{DateRange, RangeEncoding, SpanCeiling, TimeUnit};
pub use vocabulary::Vocabulary;
