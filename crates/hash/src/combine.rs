// Copyright 2025 Irreducible Inc.
//! Block combiner: folds a freshly absorbed block into the running accumulator.

use sighash_core::Word128;

const LOW_32: u64 = 0xFFFF_FFFF;

/// Splits a 128-bit value into four 32-bit limbs, least significant first.
#[inline(always)]
fn limbs32(x: Word128) -> [u64; 4] {
	[x.lo & LOW_32, x.lo >> 32, x.hi & LOW_32, x.hi >> 32]
}

/// Computes `h * m + a` with the reduction of arithmetic modulo `2^127 - 1`.
///
/// The product is formed schoolbook-style on 32-bit limbs. The top three diagonals are folded
/// back doubled, because `2^128 = 2 (mod 2^127 - 1)`. The limb shifts used for carry
/// propagation and reassembly truncate on purpose. The result is therefore not the canonical
/// residue, but it is the exact value every other implementation of the hash produces.
pub fn combine(h: Word128, m: Word128, a: Word128) -> Word128 {
	let [h0, h1, h2, h3] = limbs32(h);
	let [m0, m1, m2, m3] = limbs32(m);
	let a0 = a.lo & LOW_32;
	let a1 = a.lo >> 32;
	let a23 = a.hi;

	// 32x32-bit products fit a u64, only their sums wrap.
	let c0 = h0 * m0;
	let c1 = (h0 * m1).wrapping_add(h1 * m0);
	let c2 = (h0 * m2).wrapping_add(h1 * m1).wrapping_add(h2 * m0);
	let c3 = (h0 * m3)
		.wrapping_add(h1 * m2)
		.wrapping_add(h2 * m1)
		.wrapping_add(h3 * m0);
	let c4 = (h1 * m3).wrapping_add(h2 * m2).wrapping_add(h3 * m1);
	let c5 = (h2 * m3).wrapping_add(h3 * m2);
	let c6 = h3 * m3;

	let r2 = c2.wrapping_add(c6 << 1).wrapping_add(a23);
	let r3 = c3.wrapping_add(r2 >> 32);
	let r0 = c0
		.wrapping_add(c4 << 1)
		.wrapping_add(a0)
		.wrapping_add(r3 >> 31);
	let r1 = c1
		.wrapping_add(c5 << 1)
		.wrapping_add(a1)
		.wrapping_add(r0 >> 32);

	Word128::new(
		((r3 << 33 >> 1) | (r2 << 32 >> 32)).wrapping_add(r1 >> 32),
		(r1 << 32) | (r0 << 32 >> 32),
	)
}
