//! # Identifier Primitives
//!
//! Compiled-in constants of the stage identifier contract.
//!
//! Tags are persisted and transmitted by collaborators (job records,
//! websocket messages), so every value here is part of the external
//! contract. Changing any of them requires a compatibility review.

/// Number of defined stages.
pub const ALGORITHM_COUNT: usize = 7;

/// Smallest assigned tag.
pub const MIN_TAG: u8 = 1;

/// Largest assigned tag.
///
/// Tags are dense: every value in `MIN_TAG..=MAX_TAG` names exactly one stage.
pub const MAX_TAG: u8 = 7;

/// Prefix shared by every symbolic stage name (`dials_index`).
pub const NAME_PREFIX: &str = "dials_";

/// Prefix shared by every DIALS program name (`dials.index`).
pub const COMMAND_PREFIX: &str = "dials.";

// =============================================================================
// WIRE LIMITS
// =============================================================================

/// Maximum accepted size of an encoded stage sequence.
///
/// Checked before any decoding takes place. A real processing history is a
/// handful of stages; 64 KiB leaves generous headroom for repeated runs.
pub const MAX_SEQUENCE_PAYLOAD_SIZE: usize = 64 * 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_range_covers_every_stage() {
        assert_eq!(usize::from(MAX_TAG - MIN_TAG) + 1, ALGORITHM_COUNT);
    }

    #[test]
    fn prefixes_differ_only_in_separator() {
        assert_eq!(NAME_PREFIX.trim_end_matches('_'), "dials");
        assert_eq!(COMMAND_PREFIX.trim_end_matches('.'), "dials");
    }
}
