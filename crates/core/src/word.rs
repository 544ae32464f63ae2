// Copyright 2025 Irreducible Inc.
//! [`Word128`] related definitions.

use std::{cmp::Ordering, fmt, ops::BitAnd};

use bytes::{Buf, BufMut};

use crate::serialization::{DeserializeBytes, SerializationError, SerializeBytes};

/// [`Word128`] is a 128-bit unsigned value held as two 64-bit limbs. The value is
/// `hi * 2^64 + lo`.
///
/// All hash state is carried in this type. The limbs are kept separate, rather than using a native
/// `u128`, so that every carry and mask happens at the same limb boundary as the reference
/// arithmetic.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Word128 {
	/// Most significant 64 bits.
	pub hi: u64,
	/// Least significant 64 bits.
	pub lo: u64,
}

impl Word128 {
	/// All zero bit pattern.
	pub const ZERO: Word128 = Word128::new(0, 0);
	/// 1.
	pub const ONE: Word128 = Word128::new(0, 1);
	/// All bits set to one.
	pub const ALL_ONE: Word128 = Word128::new(u64::MAX, u64::MAX);
	/// The 126 low bits are set to one, the top two bits are zero.
	pub const MASK_126: Word128 = Word128::new(u64::MAX >> 2, u64::MAX);
	/// The 127 low bits are set to one, the top bit is zero.
	///
	/// Numerically this is the Mersenne prime `2^127 - 1`.
	pub const MASK_127: Word128 = Word128::new(u64::MAX >> 1, u64::MAX);
}

impl fmt::Debug for Word128 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Word128({:#018x}, {:#018x})", self.hi, self.lo)
	}
}

impl fmt::LowerHex for Word128 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:016x}{:016x}", self.hi, self.lo)
	}
}

impl BitAnd for Word128 {
	type Output = Self;

	fn bitand(self, rhs: Self) -> Self::Output {
		Word128::new(self.hi & rhs.hi, self.lo & rhs.lo)
	}
}

impl Ord for Word128 {
	/// Unsigned comparison. The low limbs decide only when the high limbs are equal.
	fn cmp(&self, other: &Self) -> Ordering {
		if self.hi == other.hi {
			self.lo.cmp(&other.lo)
		} else {
			self.hi.cmp(&other.hi)
		}
	}
}

impl PartialOrd for Word128 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl From<u128> for Word128 {
	fn from(value: u128) -> Self {
		Word128::new((value >> 64) as u64, value as u64)
	}
}

impl From<Word128> for u128 {
	fn from(value: Word128) -> Self {
		((value.hi as u128) << 64) | value.lo as u128
	}
}

impl Word128 {
	/// Creates a new `Word128` from its high and low limbs.
	pub const fn new(hi: u64, lo: u64) -> Word128 {
		Word128 { hi, lo }
	}

	/// Creates a `Word128` whose high limb is zero.
	pub const fn from_lo(lo: u64) -> Word128 {
		Word128::new(0, lo)
	}

	/// Integer addition modulo `2^128`.
	///
	/// Each limb wraps independently. A carry moves into the high limb exactly when the wrapped
	/// low limb is smaller than `rhs.lo`.
	pub const fn wrapping_add(self, rhs: Word128) -> Word128 {
		let lo = self.lo.wrapping_add(rhs.lo);
		let mut hi = self.hi.wrapping_add(rhs.hi);
		if lo < rhs.lo {
			hi = hi.wrapping_add(1);
		}
		Word128::new(hi, lo)
	}

	/// Unsigned integer multiplication.
	///
	/// Multiplies two 64-bit unsigned integers and returns the exact 128-bit product.
	pub const fn imul(lhs: u64, rhs: u64) -> Word128 {
		let result = (lhs as u128) * (rhs as u128);
		Word128::new((result >> 64) as u64, result as u64)
	}

	/// Returns the value as a native 128-bit unsigned integer.
	pub fn as_u128(self) -> u128 {
		self.into()
	}
}

impl SerializeBytes for Word128 {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), SerializationError> {
		self.hi.serialize(&mut write_buf)?;
		self.lo.serialize(write_buf)
	}
}

impl DeserializeBytes for Word128 {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, SerializationError>
	where
		Self: Sized,
	{
		let hi = u64::deserialize(&mut read_buf)?;
		let lo = u64::deserialize(read_buf)?;
		Ok(Word128::new(hi, lo))
	}
}
