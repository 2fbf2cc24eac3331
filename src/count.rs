//! Building a [`FrequencyModel`] from a concrete byte sequence is outside
//! this crate's core — frequency estimation from a corpus is a caller
//! concern — but tests and benchmarks still need *some* model to drive the
//! coders with. A simple histogram over observed bytes, wired to
//! [`FrequencyModel`], is enough for that.

use std::collections::BTreeMap;

use crate::error::AnsError;
use crate::model::FrequencyModel;
use crate::Symbol;

/// Counts byte occurrences and builds a [`FrequencyModel`] over exactly
/// the symbols that occur in `src`.
pub fn model_from_bytes(src: &[u8]) -> Result<FrequencyModel, AnsError> {
    let mut histogram: BTreeMap<Symbol, u64> = BTreeMap::new();
    for &byte in src {
        *histogram.entry(byte as Symbol).or_insert(0) += 1;
    }
    FrequencyModel::new(histogram)
}
