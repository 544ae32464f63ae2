// Copyright 2025 Irreducible Inc.
//! Batch hashing of independent inputs.
//!
//! Inputs are spread over the rayon thread pool when the `rayon` feature is enabled. Each input
//! is still hashed block by block, in order, on a single thread.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::{hasher::digest64, seeded::hash64_with_seed64};

/// [`digest64`] of every input, in input order.
#[tracing::instrument(level = "debug", skip_all, fields(count = inputs.len()))]
pub fn digest64_batch<T: AsRef<[u8]> + Sync>(inputs: &[T]) -> Vec<u64> {
	map_inputs(inputs, digest64)
}

/// [`hash64_with_seed64`] of every input under one shared seed, in input order.
#[tracing::instrument(level = "debug", skip_all, fields(count = inputs.len()))]
pub fn hash64_batch_with_seed64<T: AsRef<[u8]> + Sync>(inputs: &[T], seed: u64) -> Vec<u64> {
	map_inputs(inputs, |input| hash64_with_seed64(input, seed))
}

fn map_inputs<T, F>(inputs: &[T], hash: F) -> Vec<u64>
where
	T: AsRef<[u8]> + Sync,
	F: Fn(&[u8]) -> u64 + Sync + Send,
{
	#[cfg(feature = "rayon")]
	let iter = inputs.par_iter();
	#[cfg(not(feature = "rayon"))]
	let iter = inputs.iter();

	iter.map(|input| hash(input.as_ref())).collect()
}
