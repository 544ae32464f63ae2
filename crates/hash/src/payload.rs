// Copyright 2025 Irreducible Inc.
//! Signature fields of the request envelope.
//!
//! The location and request hashes are seeded with a digest of the session's auth ticket. This
//! binds every signed field to the session it was issued for.

use bytes::{Buf, BufMut};
use sighash_core::{DeserializeBytes, SerializationError, SerializeBytes};

use crate::{
	parallel::hash64_batch_with_seed64,
	seeded::{hash32, hash32_with_seed, hash64, hash64_with_seed64},
};

/// Serialized size of a [`Location`].
pub const LOCATION_BYTES: usize = 3 * std::mem::size_of::<f64>();

/// Value of the fixed session hash field.
pub const SESSION_HASH: i64 = -8408506833887075802;

/// A device position, serialized as three big-endian IEEE-754 doubles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Location {
	pub latitude: f64,
	pub longitude: f64,
	pub altitude: f64,
}

impl Location {
	pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
		Self {
			latitude,
			longitude,
			altitude,
		}
	}

	pub fn to_bytes(&self) -> [u8; LOCATION_BYTES] {
		let mut bytes = [0u8; LOCATION_BYTES];
		self.serialize(&mut bytes[..])
			.expect("location fits in LOCATION_BYTES");
		bytes
	}
}

impl SerializeBytes for Location {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), SerializationError> {
		self.latitude.serialize(&mut write_buf)?;
		self.longitude.serialize(&mut write_buf)?;
		self.altitude.serialize(write_buf)
	}
}

impl DeserializeBytes for Location {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, SerializationError>
	where
		Self: Sized,
	{
		let latitude = f64::deserialize(&mut read_buf)?;
		let longitude = f64::deserialize(&mut read_buf)?;
		let altitude = f64::deserialize(read_buf)?;
		Ok(Self::new(latitude, longitude, altitude))
	}
}

/// Location hash bound to a session: seeded with the 32-bit digest of `auth_ticket`.
pub fn hash_location_with_ticket(auth_ticket: &[u8], location: &Location) -> u32 {
	hash32_with_seed(&location.to_bytes(), hash32(auth_ticket))
}

/// Location hash with the default seed.
pub fn hash_location(location: &Location) -> u32 {
	hash32(&location.to_bytes())
}

/// Request hash bound to a session: seeded with the 64-bit digest of `auth_ticket`.
#[tracing::instrument(
	level = "trace",
	skip_all,
	fields(ticket_len = auth_ticket.len(), request_len = request.len())
)]
pub fn hash_request(auth_ticket: &[u8], request: &[u8]) -> u64 {
	hash64_with_seed64(request, hash64(auth_ticket))
}

/// [`hash_request`] for every request of an envelope, in order. The ticket is hashed once.
#[tracing::instrument(level = "debug", skip_all, fields(count = requests.len()))]
pub fn hash_requests<T: AsRef<[u8]> + Sync>(auth_ticket: &[u8], requests: &[T]) -> Vec<u64> {
	hash64_batch_with_seed64(requests, hash64(auth_ticket))
}

/// The fixed session hash field. It does not depend on any input.
pub const fn session_hash() -> i64 {
	SESSION_HASH
}

#[cfg(test)]
mod tests {
	use super::*;

	const TICKET: &[u8] = b"auth-ticket-bytes";

	fn sample_location() -> Location {
		Location::new(40.7128, -74.006, 10.0)
	}

	#[test]
	fn test_session_hash_bits() {
		assert_eq!(session_hash(), -8408506833887075802);
		assert_eq!(session_hash() as u64, 0x8B4E_FB95_B2B7_6226);
	}

	#[test]
	fn test_location_layout() {
		let bytes = Location::new(1.0, -2.0, 0.0).to_bytes();
		assert_eq!(&bytes[0..8], 1.0f64.to_be_bytes());
		assert_eq!(&bytes[8..16], (-2.0f64).to_be_bytes());
		assert_eq!(&bytes[16..24], [0; 8]);
		assert_eq!(Location::deserialize(&bytes[..]).unwrap(), Location::new(1.0, -2.0, 0.0));
	}

	#[test]
	fn test_truncated_location() {
		let bytes = sample_location().to_bytes();
		assert_eq!(
			Location::deserialize(&bytes[..LOCATION_BYTES - 1]),
			Err(SerializationError::NotEnoughBytes)
		);
	}

	#[test]
	fn test_location_hashes() {
		assert_eq!(hash_location_with_ticket(TICKET, &sample_location()), 0xeba3631e);
		assert_eq!(hash_location(&sample_location()), 0x8ab135df);
	}

	#[test]
	fn test_request_hash() {
		assert_eq!(hash_request(TICKET, b"request-body"), 0x3f8906ad8257d297);
	}

	#[test]
	fn test_request_batch_matches_single() {
		let long = [7u8; 300];
		let requests = [&b"request-body"[..], &b""[..], &long[..]];
		let hashes = hash_requests(TICKET, &requests);
		assert_eq!(hashes.len(), 3);
		for (request, hash) in requests.iter().zip(hashes) {
			assert_eq!(hash, hash_request(TICKET, request));
		}
	}
}
