//! Shared helpers for the integration test suite.

use std::collections::BTreeMap;
use std::sync::Once;

static LOG_INIT: Once = Once::new();

/// Initializes `env_logger` once per test binary so `RUST_LOG=trace` shows
/// the driver's/table builder's `trace!`/`debug!` output when a test is
/// run with `--nocapture`. Safe to call from every test; only the first
/// call takes effect.
pub fn init_logging() {
    LOG_INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

use ans_codec::model::FrequencyModel;
use ans_codec::Symbol;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Builds a [`FrequencyModel`] from `(symbol, freq)` pairs.
pub fn model(pairs: &[(Symbol, u64)]) -> FrequencyModel {
    FrequencyModel::new(pairs.iter().copied().collect::<BTreeMap<_, _>>()).unwrap()
}

/// Draws `len` symbols from `model`'s distribution, seeded for
/// reproducibility across test runs.
pub fn random_sequence(model: &FrequencyModel, len: usize, seed: u64) -> Vec<Symbol> {
    let symbols: Vec<Symbol> = model.alphabet().collect();
    let weights: Vec<u64> = symbols.iter().map(|&s| model.freq(s).unwrap()).collect();
    let dist = WeightedIndex::new(&weights).unwrap();
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..len).map(|_| symbols[dist.sample(&mut rng)]).collect()
}

/// A sequence containing exactly `freq(s)` copies of each symbol `s`
/// (length `M`), shuffled. Unlike [`random_sequence`]'s i.i.d. draws, this
/// keeps the sequence's empirical distribution identical to the model's,
/// which is what a Shannon-bound comparison assumes.
pub fn exact_multiplicity_sequence(model: &FrequencyModel, seed: u64) -> Vec<Symbol> {
    let mut sequence = Vec::with_capacity(model.total() as usize);
    for s in model.alphabet() {
        let freq = model.freq(s).unwrap();
        sequence.extend(std::iter::repeat(s).take(freq as usize));
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    sequence.shuffle(&mut rng);
    sequence
}

/// The Shannon bound, in bits, for encoding one symbol drawn from `model`
/// for every occurrence the model itself records (`sum freq(s)*log2(M/freq(s))`).
pub fn shannon_bound_bits(model: &FrequencyModel) -> f64 {
    let m = model.total() as f64;
    model
        .alphabet()
        .map(|s| {
            let f = model.freq(s).unwrap() as f64;
            f * (m / f).log2()
        })
        .sum()
}
