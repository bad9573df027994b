//! Coordinate descriptor validation
//!
//! Validation runs in stages over one descriptor field:
//!
//! 1. **Subfields** ([`subfield`]): presence, cardinality and lexical shape of
//!    `$d $e $f $g`, each role checked independently
//! 2. **Conversion** ([`coordinate`]): `hdddmmss` to signed decimal degrees
//! 3. **Geometry** ([`geometry`]): coordinate ranges, bounding-box order and
//!    the non-point warning, only when all four subfields converted
//! 4. **Evaluation** ([`evaluator`]): merges findings, decides the verdict and
//!    writes invalid records to the report sink
//!
//! # Example
//!
//! ```rust
//! use geodesc_validator::config::ValidationPolicy;
//! use geodesc_validator::models::DescriptorField;
//! use geodesc_validator::validation::RecordEvaluator;
//!
//! let field = DescriptorField::from_subfields([
//!     ('d', "E0150000"),
//!     ('e', "E0150000"),
//!     ('f', "N0500000"),
//!     ('g', "N0500000"),
//! ]);
//!
//! let evaluator = RecordEvaluator::new(&ValidationPolicy::default());
//! let outcome = evaluator.validate(&field);
//! assert!(outcome.is_valid);
//! assert!(outcome.issues.is_empty());
//! ```

pub mod coordinate;
pub mod evaluator;
pub mod geometry;
pub mod subfield;

#[cfg(test)]
pub mod tests;

pub use coordinate::{DmsParts, parse_dms};
pub use evaluator::{RecordContext, RecordEvaluator};
pub use geometry::check_geometry;
pub use subfield::{SubfieldReport, SubfieldValidator};
