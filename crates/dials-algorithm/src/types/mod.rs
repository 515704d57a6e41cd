//! # Stage Identifiers
//!
//! The closed set of DIALS processing stages and the errors raised when
//! decoding a stage reference.
//!
//! ## Tag Table
//!
//! | Name | Tag | Command | Log channel |
//! |------|-----|---------|-------------|
//! | `dials_import` | 1 | `dials.import` | `update_import_log` |
//! | `dials_find_spots` | 2 | `dials.find_spots` | `update_find_spots_log` |
//! | `dials_index` | 3 | `dials.index` | `update_index_log` |
//! | `dials_refine` | 4 | `dials.refine` | `update_refine_log` |
//! | `dials_integrate` | 5 | `dials.integrate` | `update_integrate_log` |
//! | `dials_refine_bravais_settings` | 6 | `dials.refine_bravais_settings` | - |
//! | `dials_reindex` | 7 | `dials.reindex` | - |
//!
//! Tags may be persisted by collaborators. They are dense, start at 1 and
//! follow declaration order, so the derived `Ord` is tag order.
//!
//! ## Decoding Rules
//!
//! - Names and commands match byte-for-byte: no case folding, no trimming.
//! - Unknown input is an error. There is no default stage.

use crate::primitives::{ALGORITHM_COUNT, COMMAND_PREFIX, NAME_PREFIX};
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// ALGORITHM KIND
// =============================================================================

/// A stage of the DIALS processing pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum AlgorithmKind {
    /// `dials_import`: read raw images into an experiment list.
    Import = 1,
    /// `dials_find_spots`: locate strong spots on the images.
    FindSpots = 2,
    /// `dials_index`: assign Miller indices and a unit cell.
    Index = 3,
    /// `dials_refine`: refine the experimental geometry.
    Refine = 4,
    /// `dials_integrate`: integrate reflection intensities.
    Integrate = 5,
    /// `dials_refine_bravais_settings`: refine candidate Bravais lattices.
    RefineBravaisSettings = 6,
    /// `dials_reindex`: reindex into a chosen setting.
    Reindex = 7,
}

impl AlgorithmKind {
    /// Every stage, in declaration (and tag) order.
    pub const ALL: [AlgorithmKind; ALGORITHM_COUNT] = [
        AlgorithmKind::Import,
        AlgorithmKind::FindSpots,
        AlgorithmKind::Index,
        AlgorithmKind::Refine,
        AlgorithmKind::Integrate,
        AlgorithmKind::RefineBravaisSettings,
        AlgorithmKind::Reindex,
    ];

    /// All stages in declaration order.
    #[must_use]
    pub fn variants() -> &'static [AlgorithmKind] {
        &Self::ALL
    }

    /// The stable integer tag.
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Decode a stage from its integer tag.
    ///
    /// Accepts a signed value so that corrupted or hostile input (`0`, `-1`)
    /// is reported as-is rather than wrapped.
    pub fn from_tag(tag: i64) -> Result<Self, AlgorithmError> {
        match tag {
            1 => Ok(AlgorithmKind::Import),
            2 => Ok(AlgorithmKind::FindSpots),
            3 => Ok(AlgorithmKind::Index),
            4 => Ok(AlgorithmKind::Refine),
            5 => Ok(AlgorithmKind::Integrate),
            6 => Ok(AlgorithmKind::RefineBravaisSettings),
            7 => Ok(AlgorithmKind::Reindex),
            _ => Err(unknown_tag(tag)),
        }
    }

    /// The symbolic name, e.g. `dials_index`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Import => "dials_import",
            AlgorithmKind::FindSpots => "dials_find_spots",
            AlgorithmKind::Index => "dials_index",
            AlgorithmKind::Refine => "dials_refine",
            AlgorithmKind::Integrate => "dials_integrate",
            AlgorithmKind::RefineBravaisSettings => "dials_refine_bravais_settings",
            AlgorithmKind::Reindex => "dials_reindex",
        }
    }

    /// Decode a stage from its exact symbolic name.
    pub fn from_name(name: &str) -> Result<Self, AlgorithmError> {
        match name {
            "dials_import" => Ok(AlgorithmKind::Import),
            "dials_find_spots" => Ok(AlgorithmKind::FindSpots),
            "dials_index" => Ok(AlgorithmKind::Index),
            "dials_refine" => Ok(AlgorithmKind::Refine),
            "dials_integrate" => Ok(AlgorithmKind::Integrate),
            "dials_refine_bravais_settings" => Ok(AlgorithmKind::RefineBravaisSettings),
            "dials_reindex" => Ok(AlgorithmKind::Reindex),
            _ => Err(unknown_name(name)),
        }
    }

    /// The DIALS program that runs this stage, e.g. `dials.find_spots`.
    ///
    /// This is the `command` a GUI sends to the server to start the stage.
    #[must_use]
    pub const fn command(self) -> &'static str {
        match self {
            AlgorithmKind::Import => "dials.import",
            AlgorithmKind::FindSpots => "dials.find_spots",
            AlgorithmKind::Index => "dials.index",
            AlgorithmKind::Refine => "dials.refine",
            AlgorithmKind::Integrate => "dials.integrate",
            AlgorithmKind::RefineBravaisSettings => "dials.refine_bravais_settings",
            AlgorithmKind::Reindex => "dials.reindex",
        }
    }

    /// Decode a stage from its exact DIALS program name.
    ///
    /// Rejections are reported as [`AlgorithmError::UnknownName`].
    pub fn from_command(command: &str) -> Result<Self, AlgorithmError> {
        let Some(program) = command.strip_prefix(COMMAND_PREFIX) else {
            return Err(unknown_name(command));
        };

        Self::ALL
            .into_iter()
            .find(|kind| kind.name().strip_prefix(NAME_PREFIX) == Some(program))
            .ok_or_else(|| unknown_name(command))
    }

    /// The GUI command carrying this stage's log output, if the stage has a
    /// log panel.
    #[must_use]
    pub const fn log_channel(self) -> Option<&'static str> {
        match self {
            AlgorithmKind::Import => Some("update_import_log"),
            AlgorithmKind::FindSpots => Some("update_find_spots_log"),
            AlgorithmKind::Index => Some("update_index_log"),
            AlgorithmKind::Refine => Some("update_refine_log"),
            AlgorithmKind::Integrate => Some("update_integrate_log"),
            AlgorithmKind::RefineBravaisSettings | AlgorithmKind::Reindex => None,
        }
    }

    /// Human-readable title.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AlgorithmKind::Import => "Import",
            AlgorithmKind::FindSpots => "Find Spots",
            AlgorithmKind::Index => "Index",
            AlgorithmKind::Refine => "Refine",
            AlgorithmKind::Integrate => "Integrate",
            AlgorithmKind::RefineBravaisSettings => "Refine Bravais Settings",
            AlgorithmKind::Reindex => "Reindex",
        }
    }
}

fn unknown_tag(tag: i64) -> AlgorithmError {
    #[cfg(feature = "tracing")]
    tracing::debug!(tag, "rejected unknown algorithm tag");
    AlgorithmError::UnknownTag(tag)
}

fn unknown_name(name: &str) -> AlgorithmError {
    #[cfg(feature = "tracing")]
    tracing::debug!(name, "rejected unknown algorithm name");
    AlgorithmError::UnknownName(name.to_owned())
}

// =============================================================================
// STANDARD CONVERSIONS
// =============================================================================

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl From<AlgorithmKind> for u8 {
    fn from(kind: AlgorithmKind) -> Self {
        kind.tag()
    }
}

impl TryFrom<u8> for AlgorithmKind {
    type Error = AlgorithmError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::from_tag(i64::from(tag))
    }
}

impl TryFrom<i64> for AlgorithmKind {
    type Error = AlgorithmError;

    fn try_from(tag: i64) -> Result<Self, Self::Error> {
        Self::from_tag(tag)
    }
}

// =============================================================================
// SERDE
// =============================================================================

/// Human-readable formats carry the name, binary formats carry the tag.
impl Serialize for AlgorithmKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(self.name())
        } else {
            serializer.serialize_u8(self.tag())
        }
    }
}

/// Human-readable formats accept either the name or the tag.
impl<'de> Deserialize<'de> for AlgorithmKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(AlgorithmKindVisitor)
        } else {
            deserializer.deserialize_u8(AlgorithmKindVisitor)
        }
    }
}

struct AlgorithmKindVisitor;

impl Visitor<'_> for AlgorithmKindVisitor {
    type Value = AlgorithmKind;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a DIALS algorithm name or integer tag")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        AlgorithmKind::from_name(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        AlgorithmKind::from_tag(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        match i64::try_from(v) {
            Ok(tag) => AlgorithmKind::from_tag(tag).map_err(E::custom),
            Err(_) => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised when decoding a stage reference.
///
/// Both are input-validation failures. They are returned to the caller
/// unchanged; nothing in this crate retries or substitutes a stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgorithmError {
    /// The integer is not an assigned tag.
    #[error("Unknown algorithm tag: {0}")]
    UnknownTag(i64),

    /// The string is not an exact stage name (or program name).
    #[error("Unknown algorithm name: {0:?}")]
    UnknownName(String),
}

// =============================================================================
// TESTS
// =============================================================================
