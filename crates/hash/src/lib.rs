// Copyright 2025 Irreducible Inc.

//! A 64-bit multiply-accumulate hash used to sign protocol payloads.
//!
//! The input is cut into 128-byte blocks. Each block is [absorbed](absorb::absorb) into a 126-bit
//! value, which is [combined](combine::combine) into a running accumulator with arithmetic modulo
//! `2^127 - 1`. The accumulator is [finalized](finalize::finalize) modulo `2^64 - 257`.
//!
//! The hash is not cryptographic. Its output is fixed by an external service, so every step
//! reproduces the reference arithmetic bit for bit.
//!
//! [`digest64`] hashes raw bytes. The [`seeded`] and [`payload`] modules build the protocol's
//! signature fields on top of it.

pub mod absorb;
pub mod combine;
pub mod constants;
pub mod finalize;
pub mod hasher;
pub mod parallel;
pub mod payload;
pub mod seeded;

pub use hasher::{SigHasher, digest64};
pub use parallel::{digest64_batch, hash64_batch_with_seed64};
pub use payload::{
	Location, SESSION_HASH, hash_location, hash_location_with_ticket, hash_request,
	hash_requests, session_hash,
};
pub use seeded::{
	DEFAULT_SEED, Seed, fold32, hash32, hash32_with_seed, hash64, hash64_with_seed,
	hash64_with_seed64,
};
