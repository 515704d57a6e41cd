//! # Formats Module
//!
//! Compact binary encodings of stage references.
//!
//! The text form needs no module of its own: it is the symbolic name,
//! produced by `Display` and parsed by `FromStr`.

pub mod wire;

pub use wire::*;
