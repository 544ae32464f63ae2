// Copyright 2025 Irreducible Inc.
//! Core datatypes shared by the sighash crates.
//!
//! Most importantly it hosts [`Word128`], the two-limb 128-bit value the hash mixes in, and the
//! big-endian byte serialization used to build protocol payloads.

#![warn(missing_docs)]

pub mod serialization;
pub mod word;

pub use bytes;
pub use serialization::{DeserializeBytes, SerializationError, SerializeBytes};
pub use word::Word128;
