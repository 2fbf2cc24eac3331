//! The frequency model, component A of the codec: an immutable mapping from
//! symbol to positive integer frequency, with precomputed total mass and
//! cumulative starts.

use std::collections::{BTreeMap, HashMap};

use log::trace;

use crate::error::AnsError;
use crate::Symbol;

/// An immutable `symbol -> freq` mapping, plus the derived total mass `M`
/// and cumulative starts `base(·)`.
///
/// Construction is the only place frequencies are validated; every other
/// method is infallible given a symbol actually in the model's alphabet.
#[derive(Clone, Debug)]
pub struct FrequencyModel {
    /// Symbols in ascending order; `symbols[i]` pairs with `freqs[i]`.
    symbols: Vec<Symbol>,
    /// `freqs[i] == freq(symbols[i])`.
    freqs: Vec<u64>,
    /// `cumulative[i] == base(symbols[i])`; `cumulative[n] == M`.
    cumulative: Vec<u64>,
    /// `symbol -> index into symbols/freqs/cumulative`.
    index: HashMap<Symbol, usize>,
    /// `M`, the total frequency mass.
    total: u64,
}

impl FrequencyModel {
    /// Builds a model from a non-empty `symbol -> freq` mapping. Every
    /// frequency must be strictly positive.
    ///
    /// The symbol's natural ordering (its integer value) fixes `base(s)`;
    /// a `BTreeMap` input makes that ordering explicit rather than relying
    /// on a caller-supplied iteration order.
    pub fn new(frequencies: BTreeMap<Symbol, u64>) -> Result<Self, AnsError> {
        if frequencies.is_empty() {
            return Err(AnsError::InvalidModel("alphabet must not be empty"));
        }
        if frequencies.values().any(|&f| f == 0) {
            return Err(AnsError::InvalidModel(
                "every symbol frequency must be strictly positive",
            ));
        }

        let n = frequencies.len();
        let mut symbols = Vec::with_capacity(n);
        let mut freqs = Vec::with_capacity(n);
        let mut cumulative = Vec::with_capacity(n + 1);
        let mut index = HashMap::with_capacity(n);
        let mut acc = 0u64;

        for (i, (symbol, freq)) in frequencies.into_iter().enumerate() {
            cumulative.push(acc);
            index.insert(symbol, i);
            acc += freq;
            symbols.push(symbol);
            freqs.push(freq);
        }
        cumulative.push(acc);

        trace!(
            "built frequency model: {} symbols, M = {}",
            symbols.len(),
            acc
        );

        Ok(Self {
            symbols,
            freqs,
            cumulative,
            index,
            total: acc,
        })
    }

    /// `M`, the sum of all symbol frequencies.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the alphabet is empty. Always `false` for a constructed
    /// model; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The alphabet, in ascending symbol order.
    pub fn alphabet(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }

    pub(crate) fn index_of(&self, symbol: Symbol) -> Result<usize, AnsError> {
        self.index.get(&symbol).copied().ok_or(AnsError::UnknownSymbol(symbol))
    }

    /// `freq(s)`.
    pub fn freq(&self, symbol: Symbol) -> Result<u64, AnsError> {
        self.index_of(symbol).map(|i| self.freqs[i])
    }

    /// `base(s)`, the cumulative sum of frequencies strictly below `s` in
    /// the alphabet's natural ordering.
    pub fn base(&self, symbol: Symbol) -> Result<u64, AnsError> {
        self.index_of(symbol).map(|i| self.cumulative[i])
    }

    /// The unique `s` such that `base(s) <= r < base(s) + freq(s)`, found
    /// by binary search over the cumulative array (`O(log |alphabet|)`).
    ///
    /// `r` must be in `[0, M)`; values outside that range still resolve to
    /// the first or last symbol rather than erroring, since callers within
    /// this crate (the rANS/tANS coders) only ever pass `r = x mod M`.
    pub fn symbol_of(&self, r: u64) -> Symbol {
        // partition_point finds the first index i with cumulative[i] > r;
        // the owning symbol is at i - 1.
        let i = self.cumulative.partition_point(|&base| base <= r);
        self.symbols[i.saturating_sub(1).min(self.symbols.len() - 1)]
    }
}
