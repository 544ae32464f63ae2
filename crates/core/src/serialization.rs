// Copyright 2025 Irreducible Inc.
//! Byte serialization for protocol payloads.
//!
//! Every multi-byte value is written big-endian (network order). This is the order the signing
//! protocol uses when it packs seeds and coordinates ahead of hashing.

use bytes::{Buf, BufMut};
use thiserror::Error;

/// Serialize a value into a byte buffer.
pub trait SerializeBytes {
	/// Writes `self` to `write_buf`, failing if the buffer has insufficient space.
	fn serialize(&self, write_buf: impl BufMut) -> Result<(), SerializationError>;
}

/// Deserialize a value from a byte buffer.
pub trait DeserializeBytes {
	/// Reads a value from `read_buf`, failing if the buffer is too short.
	fn deserialize(read_buf: impl Buf) -> Result<Self, SerializationError>
	where
		Self: Sized;
}

#[allow(missing_docs)] // errors are self-documenting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
	#[error("Write buffer is full")]
	WriteBufferFull,
	#[error("Not enough data in read buffer to deserialize")]
	NotEnoughBytes,
}

impl<T: SerializeBytes + ?Sized> SerializeBytes for &T {
	fn serialize(&self, write_buf: impl BufMut) -> Result<(), SerializationError> {
		(**self).serialize(write_buf)
	}
}

impl SerializeBytes for u64 {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), SerializationError> {
		assert_enough_space_for(&write_buf, std::mem::size_of::<Self>())?;
		write_buf.put_u64(*self);
		Ok(())
	}
}

impl DeserializeBytes for u64 {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, SerializationError>
	where
		Self: Sized,
	{
		assert_enough_data_for(&read_buf, std::mem::size_of::<Self>())?;
		Ok(read_buf.get_u64())
	}
}

impl SerializeBytes for u32 {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), SerializationError> {
		assert_enough_space_for(&write_buf, std::mem::size_of::<Self>())?;
		write_buf.put_u32(*self);
		Ok(())
	}
}

impl DeserializeBytes for u32 {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, SerializationError>
	where
		Self: Sized,
	{
		assert_enough_data_for(&read_buf, std::mem::size_of::<Self>())?;
		Ok(read_buf.get_u32())
	}
}

/// IEEE-754 binary64, written as its raw bit pattern.
impl SerializeBytes for f64 {
	fn serialize(&self, write_buf: impl BufMut) -> Result<(), SerializationError> {
		self.to_bits().serialize(write_buf)
	}
}

impl DeserializeBytes for f64 {
	fn deserialize(read_buf: impl Buf) -> Result<Self, SerializationError>
	where
		Self: Sized,
	{
		Ok(f64::from_bits(u64::deserialize(read_buf)?))
	}
}

/// Fails with [`SerializationError::WriteBufferFull`] unless `size` more bytes fit.
#[inline]
pub fn assert_enough_space_for(
	write_buf: &impl BufMut,
	size: usize,
) -> Result<(), SerializationError> {
	if write_buf.remaining_mut() < size {
		return Err(SerializationError::WriteBufferFull);
	}
	Ok(())
}

/// Fails with [`SerializationError::NotEnoughBytes`] unless `size` more bytes are readable.
#[inline]
pub fn assert_enough_data_for(read_buf: &impl Buf, size: usize) -> Result<(), SerializationError> {
	if read_buf.remaining() < size {
		return Err(SerializationError::NotEnoughBytes);
	}
	Ok(())
}
