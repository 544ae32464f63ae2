// Copyright 2025 Irreducible Inc.
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
	/// Zero-padded, `0x`-prefixed hexadecimal
	Hex,
	/// Base 10
	Decimal,
}

/// A hash value as printed by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashValue {
	U32(u32),
	U64(u64),
	/// Signed fields are printed in hex as their two's complement bit pattern.
	I64(i64),
}

impl HashValue {
	pub fn render(self, format: Format) -> String {
		match (self, format) {
			(HashValue::U32(value), Format::Hex) => format!("{value:#010x}"),
			(HashValue::U64(value), Format::Hex) => format!("{value:#018x}"),
			(HashValue::I64(value), Format::Hex) => format!("{:#018x}", value as u64),
			(HashValue::U32(value), Format::Decimal) => value.to_string(),
			(HashValue::U64(value), Format::Decimal) => value.to_string(),
			(HashValue::I64(value), Format::Decimal) => value.to_string(),
		}
	}
}
