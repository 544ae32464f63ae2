// Copyright 2025 Irreducible Inc.
//! One-shot and incremental drivers of the absorber, combiner and finalizer.

use std::hash::Hasher;

use digest::{
	FixedOutput, FixedOutputReset, HashMarker, OutputSizeUser, Reset, Update,
	consts::{U8, U128},
	core_api::BlockSizeUser,
};
use sighash_core::Word128;

use crate::{
	absorb::{absorb, absorb_tail},
	combine::combine,
	constants::{BLOCK_SIZE, ROUND_CONSTANT},
	finalize::finalize,
};

/// Hashes `input` as raw bytes, with no seed, into a 64-bit digest.
///
/// The first full block (or the padded tail, when the input is shorter than a block) seeds the
/// accumulator. Every later block, and finally a non-empty tail, is folded in with [`combine`].
/// Blocks are processed strictly in input order.
pub fn digest64(input: &[u8]) -> u64 {
	let mut blocks = input.chunks_exact(BLOCK_SIZE);
	let tail = blocks.remainder();

	let Some(first) = blocks.next() else {
		return finalize(absorb_tail(tail).wrapping_add(ROUND_CONSTANT), tail.len());
	};

	let mut hash = absorb(first).wrapping_add(ROUND_CONSTANT);
	for block in blocks {
		hash = combine(hash, ROUND_CONSTANT, absorb(block));
	}
	if !tail.is_empty() {
		hash = combine(hash, ROUND_CONSTANT, absorb_tail(tail));
	}
	finalize(hash, tail.len())
}

/// Incremental form of [`digest64`].
///
/// Any sequence of updates produces the same digest as a single [`digest64`] call over their
/// concatenation. Full blocks are folded as soon as they are buffered, so memory use is constant.
///
/// The [`digest::Digest`] output is the 64-bit digest in big-endian byte order.
#[derive(Clone)]
pub struct SigHasher {
	state: Option<Word128>,
	buffer: [u8; BLOCK_SIZE],
	filled_bytes: usize,
}

impl Default for SigHasher {
	fn default() -> Self {
		Self {
			state: None,
			buffer: [0; BLOCK_SIZE],
			filled_bytes: 0,
		}
	}
}

impl SigHasher {
	pub fn new() -> Self {
		Self::default()
	}

	/// Feeds more input.
	pub fn update(&mut self, mut data: &[u8]) {
		if self.filled_bytes != 0 {
			let to_copy = std::cmp::min(data.len(), BLOCK_SIZE - self.filled_bytes);
			self.buffer[self.filled_bytes..self.filled_bytes + to_copy]
				.copy_from_slice(&data[..to_copy]);
			data = &data[to_copy..];
			self.filled_bytes += to_copy;

			if self.filled_bytes == BLOCK_SIZE {
				let block = self.buffer;
				self.fold_block(&block);
				self.filled_bytes = 0;
			}
		}

		let mut chunks = data.chunks_exact(BLOCK_SIZE);
		for chunk in &mut chunks {
			self.fold_block(chunk);
		}

		let remaining = chunks.remainder();
		if !remaining.is_empty() {
			self.buffer[..remaining.len()].copy_from_slice(remaining);
			self.filled_bytes = remaining.len();
		}
	}

	/// Returns the digest of everything fed so far. The hasher state is left untouched.
	pub fn finish_u64(&self) -> u64 {
		let tail = &self.buffer[..self.filled_bytes];
		let hash = match self.state {
			None => absorb_tail(tail).wrapping_add(ROUND_CONSTANT),
			Some(hash) if !tail.is_empty() => combine(hash, ROUND_CONSTANT, absorb_tail(tail)),
			Some(hash) => hash,
		};
		finalize(hash, tail.len())
	}

	fn fold_block(&mut self, block: &[u8]) {
		let block_hash = absorb(block);
		self.state = Some(match self.state {
			None => block_hash.wrapping_add(ROUND_CONSTANT),
			Some(hash) => combine(hash, ROUND_CONSTANT, block_hash),
		});
	}
}

impl HashMarker for SigHasher {}

impl Update for SigHasher {
	fn update(&mut self, data: &[u8]) {
		SigHasher::update(self, data);
	}
}

impl OutputSizeUser for SigHasher {
	type OutputSize = U8;
}

impl BlockSizeUser for SigHasher {
	type BlockSize = U128;
}

impl FixedOutput for SigHasher {
	fn finalize_into(self, out: &mut digest::Output<Self>) {
		out.copy_from_slice(&self.finish_u64().to_be_bytes());
	}
}

impl FixedOutputReset for SigHasher {
	fn finalize_into_reset(&mut self, out: &mut digest::Output<Self>) {
		out.copy_from_slice(&self.finish_u64().to_be_bytes());
		Reset::reset(self);
	}
}

impl Reset for SigHasher {
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl Hasher for SigHasher {
	fn write(&mut self, bytes: &[u8]) {
		SigHasher::update(self, bytes);
	}

	fn finish(&self) -> u64 {
		self.finish_u64()
	}
}
