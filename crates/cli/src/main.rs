// Copyright 2025 Irreducible Inc.
mod input;
mod output;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use sighash_hash::{
	Location, Seed, digest64, hash_location, hash_location_with_ticket, hash_request,
	session_hash,
};

use crate::{
	input::{InputArgs, TicketArgs, parse_u32, parse_u64},
	output::{Format, HashValue},
};

/// Signature hash CLI: compute the hashes that sign protocol payloads.
#[derive(Debug, Parser)]
#[command(name = "sighash", version, about = "Compute protocol payload signature hashes")]
struct Cli {
	/// How to print the resulting hash
	#[arg(long, value_enum, default_value_t = Format::Hex, global = true)]
	format: Format,

	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Unseeded 64-bit digest of the raw input
	Digest {
		#[command(flatten)]
		input: InputArgs,
	},
	/// 64-bit hash of the input behind a 32-bit or 64-bit seed
	Hash64 {
		#[command(flatten)]
		input: InputArgs,

		/// 32-bit seed, decimal or 0x-prefixed hex
		#[arg(long, env = "SIGHASH_SEED", value_parser = parse_u32)]
		seed: Option<u32>,

		/// 64-bit seed, decimal or 0x-prefixed hex. Takes precedence over --seed
		#[arg(long, value_parser = parse_u64)]
		seed64: Option<u64>,
	},
	/// 32-bit hash of the input behind a 32-bit seed
	Hash32 {
		#[command(flatten)]
		input: InputArgs,

		/// 32-bit seed, decimal or 0x-prefixed hex
		#[arg(long, env = "SIGHASH_SEED", value_parser = parse_u32)]
		seed: Option<u32>,
	},
	/// 32-bit location hash, bound to the auth ticket when one is given
	Location {
		/// Latitude in degrees
		#[arg(long, allow_negative_numbers = true)]
		lat: f64,

		/// Longitude in degrees
		#[arg(long, allow_negative_numbers = true)]
		lng: f64,

		/// Altitude in meters
		#[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
		alt: f64,

		#[command(flatten)]
		ticket: TicketArgs,
	},
	/// 64-bit request hash bound to the auth ticket
	Request {
		#[command(flatten)]
		ticket: TicketArgs,

		#[command(flatten)]
		input: InputArgs,
	},
	/// The fixed session hash field
	Session,
}

fn run(command: Command) -> Result<HashValue> {
	let value = match command {
		Command::Digest { input } => {
			let data = input.read()?;
			tracing::debug!(len = data.len(), "unseeded digest");
			HashValue::U64(digest64(&data))
		}
		Command::Hash64 {
			input,
			seed,
			seed64,
		} => {
			let seed = match (seed64, seed) {
				(Some(seed64), _) => Seed::U64(seed64),
				(None, Some(seed)) => Seed::U32(seed),
				(None, None) => Seed::default(),
			};
			let data = input.read()?;
			tracing::debug!(len = data.len(), ?seed, "seeded 64-bit hash");
			HashValue::U64(seed.hash64(&data))
		}
		Command::Hash32 { input, seed } => {
			let seed = seed.map(Seed::U32).unwrap_or_default();
			let data = input.read()?;
			tracing::debug!(len = data.len(), ?seed, "seeded 32-bit hash");
			HashValue::U32(seed.hash32(&data))
		}
		Command::Location {
			lat,
			lng,
			alt,
			ticket,
		} => {
			let location = Location::new(lat, lng, alt);
			match ticket.read()? {
				Some(ticket) => HashValue::U32(hash_location_with_ticket(&ticket, &location)),
				None => HashValue::U32(hash_location(&location)),
			}
		}
		Command::Request { ticket, input } => {
			let Some(ticket) = ticket.read()? else {
				bail!("The request hash needs an auth ticket (--ticket-hex or --ticket-file)");
			};
			let request = input.read()?;
			tracing::debug!(
				ticket_len = ticket.len(),
				request_len = request.len(),
				"request hash"
			);
			HashValue::U64(hash_request(&ticket, &request))
		}
		Command::Session => HashValue::I64(session_hash()),
	};
	Ok(value)
}

fn main() -> Result<()> {
	let _tracing_guard = tracing_profile::init_tracing().ok();
	let cli = Cli::parse();

	let value = run(cli.command)?;
	println!("{}", value.render(cli.format));
	Ok(())
}
