// Copyright 2025 Irreducible Inc.
//! Fixed parameters of the hash. Changing any of these breaks interoperability.

use sighash_core::Word128;

/// Number of input bytes folded per absorber call.
pub const BLOCK_SIZE: usize = 128;

/// Bytes per absorber lane: two little-endian 64-bit words.
pub const LANE_SIZE: usize = 16;

/// Words added to the input words before lane multiplication, two per lane.
pub const MAGIC_TABLE: [u64; 2 * BLOCK_SIZE / LANE_SIZE] = [
	0x95C05F4D1512959E,
	0xE4F3C46EEF0DCF07,
	0x6238DC228F980AD2,
	0x53F3E3BC49607092,
	0x4E7BE7069078D625,
	0x1016D709D1AD25FC,
	0x044E89B8AC76E045,
	0xE0B684DDA364BFA1,
	0x90C533B835E89E5F,
	0x3DAF462A74FA874F,
	0xFEA54965DD3EF5A0,
	0x287A5D7CCB31B970,
	0xAE681046800752F8,
	0x121C2D6EAF66EC6E,
	0xEE8F8CA7E090FB20,
	0xCE1AE25F48FE0A52,
];

/// Multiplier of the block combiner, also added to the first absorbed block.
pub const ROUND_CONSTANT: Word128 = Word128::new(0x78F32468CD48D6DE, 0x14C983660183C0AE);

/// Offsets added to the two folded lanes during finalization.
pub const FINAL_CONSTANT: Word128 = Word128::new(0xBDB31B10864F3F87, 0x5B7E9E828A9B8ABD);

/// The digest is reduced modulo `2^64 - DIGEST_MODULUS_OFFSET`.
pub const DIGEST_MODULUS_OFFSET: u64 = 0x101;

/// Largest canonical digest, `2^64 - DIGEST_MODULUS_OFFSET - 1`.
pub const MAX_CANONICAL_DIGEST: u64 = 0xFFFF_FFFF_FFFF_FEFE;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_max_canonical_digest_sits_below_modulus() {
		assert_eq!(MAX_CANONICAL_DIGEST, u64::MAX - DIGEST_MODULUS_OFFSET);
		assert_eq!(MAGIC_TABLE.len(), 16);
	}
}
