// Copyright 2025 Irreducible Inc.
//! Finalizer: turns the 128-bit accumulator into a canonical 64-bit digest.
//!
//! Finalization runs in two stages. The accumulator is first reduced modulo the Mersenne prime
//! `2^127 - 1`. The reduced value is then split into two 64-bit lanes, offset, multiplied and
//! reduced modulo `2^64 - 257`.

use sighash_core::Word128;

use crate::constants::{DIGEST_MODULUS_OFFSET, FINAL_CONSTANT, MAX_CANONICAL_DIGEST};

/// Produces the digest from the accumulator and the length in bytes of the un-padded tail.
pub fn finalize(hash: Word128, tail_len: usize) -> u64 {
	reduce_to_digest(reduce_mersenne_127(hash, tail_len))
}

/// First stage. Mixes in the tail bit length and reduces modulo `2^127 - 1`.
///
/// The bit length goes into the high limb. The result is always below `2^127`.
pub fn reduce_mersenne_127(hash: Word128, tail_len: usize) -> Word128 {
	let tail_bits = (tail_len as u64).wrapping_mul(8);
	let mut hash = hash.wrapping_add(Word128::new(tail_bits, 0));
	if hash >= Word128::MASK_127 {
		hash = hash.wrapping_add(Word128::ONE);
	}
	hash & Word128::MASK_127
}

/// Second stage. Folds a value below `2^127` into a digest below `2^64 - 257`.
pub fn reduce_to_digest(hash: Word128) -> u64 {
	let x = hash.hi.wrapping_add(hash.lo >> 32);
	let x = (x.wrapping_add(x >> 32).wrapping_add(1) >> 32).wrapping_add(hash.hi);
	let y = (x << 32).wrapping_add(hash.lo);

	let a = add_mod_digest(x, FINAL_CONSTANT.hi);
	let b = add_mod_digest(y, FINAL_CONSTANT.lo);

	let mut hash = Word128::imul(a, b);
	for _ in 0..2 {
		hash = Word128::imul(hash.hi, DIGEST_MODULUS_OFFSET).wrapping_add(Word128::from_lo(hash.lo));
	}

	let mut result = hash.lo;
	if hash.hi != 0 {
		result = result.wrapping_add(DIGEST_MODULUS_OFFSET);
	}
	if result > MAX_CANONICAL_DIGEST {
		result = result.wrapping_add(DIGEST_MODULUS_OFFSET);
	}
	result
}

/// Adds modulo `2^64 - 257`: a wrapped sum gets the dropped `2^64` back as `257`.
#[inline(always)]
fn add_mod_digest(x: u64, offset: u64) -> u64 {
	let sum = x.wrapping_add(offset);
	if sum < x {
		sum.wrapping_add(DIGEST_MODULUS_OFFSET)
	} else {
		sum
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_finalize_reference_vectors() {
		assert_eq!(finalize(Word128::ZERO, 0), 0x546a3c15d3c2ada5);
		assert_eq!(finalize(Word128::ZERO, 5), 0x9c9511951c4738d0);
		assert_eq!(
			finalize(Word128::new(0x0123456789ABCDEF, 0xFEDCBA9876543210), 17),
			0x405dfa61a307cf49
		);
	}

	#[test]
	fn test_mersenne_modulus_reduces_to_zero() {
		assert_eq!(reduce_mersenne_127(Word128::MASK_127, 0), Word128::ZERO);
		assert_eq!(reduce_mersenne_127(Word128::ALL_ONE, 0), Word128::ZERO);
		assert_eq!(finalize(Word128::MASK_127, 0), finalize(Word128::ZERO, 0));
	}

	#[test]
	fn test_tail_bits_land_in_high_limb() {
		assert_eq!(reduce_mersenne_127(Word128::ZERO, 3), Word128::new(24, 0));
		assert_eq!(reduce_mersenne_127(Word128::new(0, 7), 1), Word128::new(8, 7));
	}

	#[test]
	fn test_add_mod_digest_wraparound() {
		assert_eq!(add_mod_digest(1, 2), 3);
		assert_eq!(add_mod_digest(u64::MAX, 1), DIGEST_MODULUS_OFFSET);
		assert_eq!(add_mod_digest(u64::MAX, u64::MAX), 255);
	}

	proptest! {
		#[test]
		fn prop_first_stage_below_2_127(hash in any::<u128>(), tail_len in 0usize..128) {
			let reduced = reduce_mersenne_127(Word128::from(hash), tail_len);
			prop_assert!(reduced.as_u128() < 1 << 127);
		}

		#[test]
		fn prop_digest_is_canonical(hash in 0u128..1 << 127) {
			prop_assert!(reduce_to_digest(Word128::from(hash)) <= MAX_CANONICAL_DIGEST);
		}
	}
}
