//! The tANS table and its table-driven coder.
//!
//! The table is built once by [`TansTable::build`], Duda's "precise
//! initialization": a min-priority queue seeded with one entry per symbol,
//! popped `(b-1)*l*M` times to assign each destination state `y ∈ I` to
//! exactly one `(symbol, source state)` pair. The ordering key is
//! `(value, prob)` compared as exact rationals so the resulting table is a
//! pure function of `(F, b, l)`, stored as two direct-lookup arrays rather
//! than a hash map.
//!
//! A cyclic-step spread table (assigning each symbol's states at a fixed
//! stride through `I`) and a "range-fill" form (where each pop claims the
//! whole range of source states since that symbol's previous pop) are both
//! non-conformant alternatives: neither produces the one-destination-
//! per-pop bijection this table's invariants require.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::debug;

use crate::coder::Coder;
use crate::error::AnsError;
use crate::model::FrequencyModel;
use crate::rational::Rational;
use crate::{State, Symbol};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct HeapEntry {
    symbol_index: usize,
    symbol: Symbol,
    state: State,
    prob: Rational,
    value: Rational,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Pop order: value ascending, then prob ascending (ties broken in
        // favor of the less frequent symbol). `BinaryHeap` is a max-heap,
        // so this `Ord` is consumed through `Reverse` at push/pop sites.
        self.value
            .cmp(&other.value)
            .then_with(|| self.prob.cmp(&other.prob))
    }
}

/// The `enc`/`dec` direct-lookup tables a tANS coder is driven by.
///
/// `dec` is indexed by `y - l*M` for `y ∈ I`. `enc` holds one array per
/// symbol (in the model's alphabet order), indexed by `x - l*freq(s)` for
/// `x` in that symbol's domain `[l*freq(s), b*l*freq(s))`.
#[derive(Clone, Debug)]
pub struct TansTable<'m> {
    model: &'m FrequencyModel,
    b: u64,
    l: u64,
    lower: u64,
    dec: Vec<(Symbol, State)>,
    enc: Vec<Vec<State>>,
}

impl<'m> TansTable<'m> {
    /// Builds the table for `(model, b, l)`. `O(b*l*M * log|alphabet|)`.
    pub fn build(model: &'m FrequencyModel, b: u64, l: u64) -> Result<Self, AnsError> {
        if b < 2 {
            return Err(AnsError::InvalidParameter("b must be >= 2"));
        }
        if l < 1 {
            return Err(AnsError::InvalidParameter("l must be >= 1"));
        }

        let m = model.total();
        let lower = l * m;
        let upper = b * l * m;
        let domain_size = (upper - lower) as usize;

        let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::with_capacity(model.len());
        let mut enc: Vec<Vec<State>> = Vec::with_capacity(model.len());

        for (index, symbol) in model.alphabet().enumerate() {
            let freq = model.freq(symbol)?;
            let prob = Rational::new(freq, m);
            // value = 1/(2*prob) = M/(2*freq)
            let value = Rational::new(m, 2 * freq);
            heap.push(Reverse(HeapEntry {
                symbol_index: index,
                symbol,
                state: l * freq,
                prob,
                value,
            }));
            enc.push(vec![0; ((b - 1) * l * freq) as usize]);
        }

        let mut dec = vec![(0u32, 0u64); domain_size];

        for y in lower..upper {
            let Reverse(entry) = heap.pop().ok_or(AnsError::TableLookupMiss)?;
            dec[(y - lower) as usize] = (entry.symbol, entry.state);

            let freq = model.freq(entry.symbol)?;
            let enc_offset = l * freq;
            enc[entry.symbol_index][(entry.state - enc_offset) as usize] = y;

            // value += 1/prob = M/freq
            let next_value = entry.value.add(m, freq);
            heap.push(Reverse(HeapEntry {
                symbol_index: entry.symbol_index,
                symbol: entry.symbol,
                state: entry.state + 1,
                prob: entry.prob,
                value: next_value,
            }));
        }

        debug!(
            "built tANS table: |alphabet| = {}, |dec| = {}, b = {}, l = {}",
            model.len(),
            dec.len(),
            b,
            l
        );

        Ok(Self {
            model,
            b,
            l,
            lower,
            dec,
            enc,
        })
    }

    /// `b`.
    pub fn b(&self) -> u64 {
        self.b
    }

    /// `l`.
    pub fn l(&self) -> u64 {
        self.l
    }

    /// Number of entries in `dec`, equal to `(b-1)*l*M`.
    pub fn dec_len(&self) -> usize {
        self.dec.len()
    }

    /// Count of `y ∈ I` with `dec(y).0 == symbol`, used by the table
    /// invariant tests.
    pub fn symbol_count(&self, symbol: Symbol) -> usize {
        self.dec.iter().filter(|(s, _)| *s == symbol).count()
    }
}

/// The table-driven coder: `C(s, x) = enc(s, x)`, `D(x) = dec(x)`, both
/// `O(1)` after [`TansTable::build`].
#[derive(Clone, Debug)]
pub struct TansCoder<'t, 'm> {
    table: &'t TansTable<'m>,
}

impl<'t, 'm> TansCoder<'t, 'm> {
    pub fn new(table: &'t TansTable<'m>) -> Self {
        Self { table }
    }
}

impl Coder for TansCoder<'_, '_> {
    fn total(&self) -> u64 {
        self.table.model.total()
    }

    fn freq(&self, symbol: Symbol) -> Result<u64, AnsError> {
        self.table.model.freq(symbol)
    }

    fn encode_step(&self, symbol: Symbol, state: State) -> Result<State, AnsError> {
        let index = self.table.model.index_of(symbol)?;
        let freq = self.table.model.freq(symbol)?;
        let offset = self.table.l * freq;
        let slot = state.checked_sub(offset).ok_or(AnsError::TableLookupMiss)?;
        self.table
            .enc
            .get(index)
            .and_then(|row| row.get(slot as usize))
            .copied()
            .ok_or(AnsError::TableLookupMiss)
    }

    fn decode_step(&self, state: State) -> Result<(Symbol, State), AnsError> {
        let slot = state
            .checked_sub(self.table.lower)
            .ok_or(AnsError::StateOutOfDomain(state))?;
        self.table
            .dec
            .get(slot as usize)
            .copied()
            .ok_or(AnsError::TableLookupMiss)
    }
}
