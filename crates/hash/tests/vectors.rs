// Copyright 2025 Irreducible Inc.
//! Golden vectors captured from the reference implementation.

use sighash_hash::{
	Location, SigHasher, digest64, fold32, hash32, hash32_with_seed, hash64, hash64_with_seed,
	hash64_with_seed64, hash_location, hash_location_with_ticket, hash_request, session_hash,
};

/// Deterministic filler: byte `i` is `i * 31 + 7`.
fn pattern(len: usize) -> Vec<u8> {
	(0..len).map(|i| (i * 31 + 7) as u8).collect()
}

const BOUNDARY_VECTORS: &[(usize, u64)] = &[
	(0, 0x491f07c9e1221676),
	(1, 0x0d7ac0cd9e3d99ef),
	(15, 0xbea3b582dca01abb),
	(16, 0x863de4971e339321),
	(17, 0x46ddb9992e960ab1),
	(31, 0xf05724fc1584f00f),
	(32, 0x8bfcec7e945f41b7),
	(127, 0x40868c2681f50e2e),
	(128, 0x5aec25076e8f1ef5),
	(129, 0xc8606fafad2095d5),
	(144, 0x60d230ce70396c16),
	(255, 0xb5af490c09cea78d),
	(256, 0x745e98064d49d93b),
	(257, 0xfaf3600edf76d74d),
	(384, 0x8652e1a051f81d39),
	(1000, 0x6400995b766d3b60),
];

#[test]
fn test_boundary_lengths() {
	for &(len, expected) in BOUNDARY_VECTORS {
		assert_eq!(digest64(&pattern(len)), expected, "length {len}");
	}
}

#[test]
fn test_boundary_lengths_streamed_byte_by_byte() {
	for &(len, expected) in BOUNDARY_VECTORS {
		let mut hasher = SigHasher::new();
		for byte in pattern(len) {
			hasher.update(&[byte]);
		}
		assert_eq!(hasher.finish_u64(), expected, "length {len}");
	}
}

#[test]
fn test_same_bytes_from_different_constructions() {
	let direct = pattern(300);

	let mut assembled = Vec::with_capacity(8);
	assembled.extend_from_slice(&direct[..150]);
	assembled.extend(direct[150..].iter().copied());

	let mut oversized = vec![0xEE; 1024];
	oversized[100..400].copy_from_slice(&direct);

	assert_eq!(digest64(&assembled), digest64(&direct));
	assert_eq!(digest64(&oversized[100..400]), digest64(&direct));
}

#[test]
fn test_seeded_fixtures() {
	assert_eq!(hash64(b""), 0x8bd5714ce56909d8);
	assert_eq!(hash64_with_seed(b"test", 0), 0xf65deea94725fd0b);
	assert_eq!(hash32_with_seed(b"test", 0), 0xb17813a2);
	assert_eq!(hash32(b""), 0x6ebc7894);
	assert_eq!(hash64_with_seed64(b"test", 0x1122334455667788), 0x1ecb3bda80a1ccfa);
}

#[test]
fn test_payload_fixtures() {
	let ticket = b"auth-ticket-bytes";
	let location = Location::new(40.7128, -74.006, 10.0);
	assert_eq!(hash_location_with_ticket(ticket, &location), 0xeba3631e);
	assert_eq!(hash_location(&location), 0x8ab135df);
	assert_eq!(hash_request(ticket, b"request-body"), 0x3f8906ad8257d297);
	assert_eq!(session_hash(), -8408506833887075802);
}

#[test]
fn test_repeated_calls_agree() {
	let data = pattern(777);
	assert_eq!(digest64(&data), digest64(&data));
	assert_eq!(hash32(&data), fold32(hash64(&data)));
}

#[test]
fn test_single_byte_flips_change_digest() {
	for len in [1, 16, 127, 128, 129, 300] {
		let data = pattern(len);
		let reference = digest64(&data);
		for position in 0..len {
			let mut flipped = data.clone();
			flipped[position] ^= 0x01;
			assert_ne!(digest64(&flipped), reference, "length {len}, byte {position}");
		}
	}
}

#[test]
fn test_trailing_zero_changes_digest() {
	for len in [0, 15, 16, 127, 128] {
		let data = pattern(len);
		let mut extended = data.clone();
		extended.push(0);
		assert_ne!(digest64(&extended), digest64(&data), "length {len}");
	}
}
