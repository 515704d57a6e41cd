//! # dials-algorithm
//!
//! Stable identifiers for the stages of a DIALS crystallography
//! processing pipeline.
//!
//! A pipeline orchestrator, job router or job store uses [`AlgorithmKind`]
//! to name a stage unambiguously, sort stage references, and encode them
//! either as text (the symbolic name) or as a compact integer tag.
//!
//! ```
//! use dials_algorithm::AlgorithmKind;
//!
//! let kind = AlgorithmKind::from_tag(3)?;
//! assert_eq!(kind, AlgorithmKind::Index);
//! assert_eq!(kind, AlgorithmKind::from_name("dials_index")?);
//! assert_eq!(kind.command(), "dials.index");
//! # Ok::<(), dials_algorithm::AlgorithmError>(())
//! ```
//!
//! ## Architectural Constraints
//!
//! - The variant set and tag table are fixed at compile time
//! - Unknown tags and names are errors, never mapped to a default stage
//! - Pure: no I/O, no async, no global state

// =============================================================================
// MODULES
// =============================================================================

pub mod formats;
pub mod primitives;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use formats::{WireError, from_bytes, sequence_from_bytes, sequence_to_bytes, to_bytes};
pub use types::{AlgorithmError, AlgorithmKind};
