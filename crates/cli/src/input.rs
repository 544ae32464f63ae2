// Copyright 2025 Irreducible Inc.
//! Where hashed bytes come from.

use std::{
	fs,
	io::{self, Read},
	num::ParseIntError,
	path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Args;

/// Bytes to hash. Standard input is read when no source is given.
#[derive(Debug, Args)]
#[group(multiple = false)]
pub struct InputArgs {
	/// Input given as a hex string, optionally `0x`-prefixed
	#[arg(long)]
	pub hex: Option<String>,

	/// Input given as UTF-8 text
	#[arg(long)]
	pub text: Option<String>,

	/// Path of a file holding the input
	#[arg(long)]
	pub file: Option<PathBuf>,
}

impl InputArgs {
	pub fn read(&self) -> Result<Vec<u8>> {
		if let Some(hex) = &self.hex {
			return decode_hex(hex);
		}
		if let Some(text) = &self.text {
			return Ok(text.as_bytes().to_vec());
		}
		if let Some(path) = &self.file {
			return fs::read(path)
				.with_context(|| format!("Failed to read input from {}", path.display()));
		}

		let mut buf = Vec::new();
		io::stdin()
			.read_to_end(&mut buf)
			.context("Failed to read input from stdin")?;
		Ok(buf)
	}
}

/// The session's auth ticket.
#[derive(Debug, Args)]
#[group(multiple = false)]
pub struct TicketArgs {
	/// Auth ticket given as a hex string
	#[arg(long = "ticket-hex")]
	pub ticket_hex: Option<String>,

	/// Path of a file holding the serialized auth ticket
	#[arg(long = "ticket-file")]
	pub ticket_file: Option<PathBuf>,
}

impl TicketArgs {
	/// Returns `None` when no ticket was given.
	pub fn read(&self) -> Result<Option<Vec<u8>>> {
		if let Some(hex) = &self.ticket_hex {
			return decode_hex(hex).map(Some);
		}
		if let Some(path) = &self.ticket_file {
			let ticket = fs::read(path)
				.with_context(|| format!("Failed to read auth ticket from {}", path.display()))?;
			return Ok(Some(ticket));
		}
		Ok(None)
	}
}

pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
	let digits = s.trim();
	let digits = digits.strip_prefix("0x").unwrap_or(digits);
	hex::decode(digits).with_context(|| format!("Invalid hex input '{s}'"))
}

/// Parses a decimal or `0x`-prefixed hexadecimal integer.
pub fn parse_u64(s: &str) -> Result<u64, ParseIntError> {
	match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
		Some(digits) => u64::from_str_radix(digits, 16),
		None => s.parse(),
	}
}

/// 32-bit form of [`parse_u64`].
pub fn parse_u32(s: &str) -> Result<u32, ParseIntError> {
	match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
		Some(digits) => u32::from_str_radix(digits, 16),
		None => s.parse(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_decode_hex() {
		assert_eq!(decode_hex("74657374").unwrap(), b"test");
		assert_eq!(decode_hex("0x0aFF").unwrap(), [0x0a, 0xff]);
		assert!(decode_hex("abc").is_err());
		assert!(decode_hex("zz").is_err());
	}

	#[test]
	fn test_parse_integers() {
		assert_eq!(parse_u32("0x61247FBF").unwrap(), 0x61247FBF);
		assert_eq!(parse_u32("42").unwrap(), 42);
		assert!(parse_u32("0x1_0000_0000").is_err());
		assert!(parse_u32("4294967296").is_err());
		assert_eq!(parse_u64("0X1122334455667788").unwrap(), 0x1122334455667788);
		assert_eq!(parse_u64("18446744073709551615").unwrap(), u64::MAX);
	}

	#[test]
	fn test_text_input() {
		let args = InputArgs {
			hex: None,
			text: Some("test".to_string()),
			file: None,
		};
		assert_eq!(args.read().unwrap(), b"test");
	}

	#[test]
	fn test_missing_ticket_file() {
		let args = TicketArgs {
			ticket_hex: None,
			ticket_file: Some(PathBuf::from("/nonexistent/ticket.bin")),
		};
		let err = args.read().unwrap_err();
		assert!(err.to_string().contains("Failed to read auth ticket"));
	}
}
