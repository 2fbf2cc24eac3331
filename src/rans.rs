//! Component B: the rANS coder. Closed-form `C`/`D` driven entirely by a
//! [`FrequencyModel`]'s `M`, `freq(·)` and `base(·)`.
//!
//! Derived from the `rANS` prototype (`coder.py`): `C` and `D` are defined
//! together and must be verified as mutual inverses, not derived
//! independently — the Design Notes call out a real divergence between
//! prototype drafts over whether `base` is added before or after the
//! modulus. Only `M*(x div freq(s)) + base(s) + (x mod freq(s))` satisfies
//! the inverse law; that's the form implemented here.

use crate::coder::Coder;
use crate::error::AnsError;
use crate::model::FrequencyModel;
use crate::{State, Symbol};

/// rANS coder: `C(s, x) = M*(x div freq(s)) + base(s) + (x mod freq(s))`,
/// `D(x) = (s, freq(s)*(x div M) + (x mod M) - base(s))` where
/// `s = symbolOf(x mod M)`.
#[derive(Clone, Debug)]
pub struct RansCoder<'m> {
    model: &'m FrequencyModel,
}

impl<'m> RansCoder<'m> {
    pub fn new(model: &'m FrequencyModel) -> Self {
        Self { model }
    }
}

impl Coder for RansCoder<'_> {
    fn total(&self) -> u64 {
        self.model.total()
    }

    fn freq(&self, symbol: Symbol) -> Result<u64, AnsError> {
        self.model.freq(symbol)
    }

    fn encode_step(&self, symbol: Symbol, state: State) -> Result<State, AnsError> {
        let freq = self.model.freq(symbol)?;
        let base = self.model.base(symbol)?;
        let m = self.model.total();
        Ok(m * (state / freq) + base + (state % freq))
    }

    fn decode_step(&self, state: State) -> Result<(Symbol, State), AnsError> {
        let m = self.model.total();
        if state < m {
            return Err(AnsError::StateOutOfDomain(state));
        }
        let r = state % m;
        let symbol = self.model.symbol_of(r);
        let freq = self.model.freq(symbol)?;
        let base = self.model.base(symbol)?;
        Ok((symbol, freq * (state / m) + r - base))
    }
}
