// Copyright 2025 Irreducible Inc.
//! Block absorber: reduces up to one block of input to a 126-bit value.

use bytes::Buf;
use sighash_core::Word128;

use crate::constants::{BLOCK_SIZE, LANE_SIZE, MAGIC_TABLE};

/// Absorbs a block whose length is a multiple of [`LANE_SIZE`] and at most [`BLOCK_SIZE`].
///
/// Each 16-byte lane is read as two little-endian words `a` and `b`. The next two entries of
/// [`MAGIC_TABLE`] are added to them and the 128-bit product `a * b` is accumulated. The sum is
/// masked to 126 bits. An empty block absorbs to zero.
pub fn absorb(block: &[u8]) -> Word128 {
	debug_assert!(block.len() <= BLOCK_SIZE && block.len() % LANE_SIZE == 0);

	let mut sum = Word128::ZERO;
	for (mut lane, magic) in block.chunks_exact(LANE_SIZE).zip(MAGIC_TABLE.chunks_exact(2)) {
		let a = lane.get_u64_le().wrapping_add(magic[0]);
		let b = lane.get_u64_le().wrapping_add(magic[1]);
		sum = sum.wrapping_add(Word128::imul(a, b));
	}
	sum & Word128::MASK_126
}

/// Absorbs a tail shorter than [`BLOCK_SIZE`].
///
/// The tail is zero-padded to the next multiple of [`LANE_SIZE`]. Only the lanes the tail
/// touches are absorbed, so a 5-byte tail is a single lane and an empty tail is no lane at all.
pub fn absorb_tail(tail: &[u8]) -> Word128 {
	debug_assert!(tail.len() < BLOCK_SIZE);

	let mut padded = [0u8; BLOCK_SIZE];
	padded[..tail.len()].copy_from_slice(tail);
	absorb(&padded[..tail.len().next_multiple_of(LANE_SIZE)])
}
