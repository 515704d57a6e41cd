//! # Wire Format
//!
//! Binary encoding of stage references for job records and messages.
//!
//! Format: postcard.
//! - One reference: a single byte, the tag.
//! - A sequence: varint length, then one tag byte per stage, in order.
//!
//! ## Validation
//!
//! Decoding rejects, in this order:
//! - sequence payloads larger than `MAX_SEQUENCE_PAYLOAD_SIZE`
//! - truncated or malformed postcard data
//! - trailing bytes after the encoded value
//! - tags outside the table (reported as `AlgorithmError::UnknownTag`)

use crate::primitives::MAX_SEQUENCE_PAYLOAD_SIZE;
use crate::{AlgorithmError, AlgorithmKind};
use thiserror::Error;

// =============================================================================
// ERRORS
// =============================================================================

/// Errors raised while encoding or decoding stage references.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// The payload decoded cleanly but names no known stage.
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),

    /// The payload is not a valid encoding.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

fn serialization_error(message: String) -> WireError {
    #[cfg(feature = "tracing")]
    tracing::debug!(%message, "rejected stage wire payload");
    WireError::Serialization(message)
}

fn reject_trailing(rest: &[u8]) -> Result<(), WireError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(serialization_error(format!(
            "{} trailing bytes after encoded value",
            rest.len()
        )))
    }
}

// =============================================================================
// SINGLE REFERENCE
// =============================================================================

/// Encode one stage reference.
pub fn to_bytes(kind: AlgorithmKind) -> Result<Vec<u8>, WireError> {
    postcard::to_stdvec(&kind).map_err(|e| WireError::Serialization(e.to_string()))
}

/// Decode one stage reference.
pub fn from_bytes(bytes: &[u8]) -> Result<AlgorithmKind, WireError> {
    // Raw tag first: an unknown tag must surface as AlgorithmError, not as
    // an opaque postcard message.
    let (tag, rest): (u8, &[u8]) = postcard::take_from_bytes(bytes)
        .map_err(|e| serialization_error(format!("Failed to decode algorithm tag: {}", e)))?;
    reject_trailing(rest)?;

    AlgorithmKind::from_tag(i64::from(tag)).map_err(WireError::from)
}

// =============================================================================
// SEQUENCES
// =============================================================================

/// Encode an ordered list of stage references.
pub fn sequence_to_bytes(kinds: &[AlgorithmKind]) -> Result<Vec<u8>, WireError> {
    postcard::to_stdvec(&kinds).map_err(|e| WireError::Serialization(e.to_string()))
}

/// Decode an ordered list of stage references.
///
/// The size limit is enforced before any decoding. The first unknown tag
/// aborts the whole decode.
pub fn sequence_from_bytes(bytes: &[u8]) -> Result<Vec<AlgorithmKind>, WireError> {
    if bytes.len() > MAX_SEQUENCE_PAYLOAD_SIZE {
        return Err(serialization_error(format!(
            "Data size {} bytes exceeds maximum allowed {} bytes",
            bytes.len(),
            MAX_SEQUENCE_PAYLOAD_SIZE
        )));
    }

    let (tags, rest): (Vec<u8>, &[u8]) = postcard::take_from_bytes(bytes).map_err(|e| {
        serialization_error(format!("Failed to decode algorithm sequence: {}", e))
    })?;
    reject_trailing(rest)?;

    tags.into_iter()
        .map(|tag| AlgorithmKind::from_tag(i64::from(tag)).map_err(WireError::from))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
