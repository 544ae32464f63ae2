// Copyright 2025 Irreducible Inc.
//! Seeded variants of the digest.
//!
//! A seeded hash is the raw digest of the seed's big-endian bytes followed by the buffer.

use crate::hasher::SigHasher;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u32 = 0x6124_7FBF;

/// A seed prepended to the hashed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
	/// Prepended as 4 big-endian bytes.
	U32(u32),
	/// Prepended as 8 big-endian bytes.
	U64(u64),
}

impl Default for Seed {
	fn default() -> Self {
		Seed::U32(DEFAULT_SEED)
	}
}

impl From<u32> for Seed {
	fn from(seed: u32) -> Self {
		Seed::U32(seed)
	}
}

impl From<u64> for Seed {
	fn from(seed: u64) -> Self {
		Seed::U64(seed)
	}
}

impl Seed {
	/// A hasher that has already absorbed the seed bytes.
	pub fn hasher(self) -> SigHasher {
		let mut hasher = SigHasher::new();
		match self {
			Seed::U32(seed) => hasher.update(&seed.to_be_bytes()),
			Seed::U64(seed) => hasher.update(&seed.to_be_bytes()),
		}
		hasher
	}

	pub fn hash64(self, data: &[u8]) -> u64 {
		let mut hasher = self.hasher();
		hasher.update(data);
		hasher.finish_u64()
	}

	pub fn hash32(self, data: &[u8]) -> u32 {
		fold32(self.hash64(data))
	}
}

/// Folds a 64-bit digest into 32 bits by XOR-ing its halves.
#[inline]
pub fn fold32(x: u64) -> u32 {
	(x as u32) ^ ((x >> 32) as u32)
}

/// 64-bit digest of `data` with [`DEFAULT_SEED`].
pub fn hash64(data: &[u8]) -> u64 {
	Seed::default().hash64(data)
}

pub fn hash64_with_seed(data: &[u8], seed: u32) -> u64 {
	Seed::U32(seed).hash64(data)
}

pub fn hash64_with_seed64(data: &[u8], seed: u64) -> u64 {
	Seed::U64(seed).hash64(data)
}

/// 32-bit digest of `data` with [`DEFAULT_SEED`].
pub fn hash32(data: &[u8]) -> u32 {
	Seed::default().hash32(data)
}

pub fn hash32_with_seed(data: &[u8], seed: u32) -> u32 {
	Seed::U32(seed).hash32(data)
}
