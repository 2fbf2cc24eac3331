//! The streaming driver. Wraps any [`Coder`] and renormalizes its state
//! into `I = [l*M, b*l*M)` at every symbol boundary, generalizing one
//! renormalize/step loop over all three coder variants through the shared
//! trait instead of duplicating it per coder.
//!
//! Encode processes symbols in input order; decode necessarily produces
//! them in reverse order — callers must reverse before comparing against
//! the original sequence. [`StreamingDriver::decode`] returns the reversed
//! order literally, so its unit tests can assert the exact intermediate
//! shape; [`StreamingDriver::decode_in_order`] is the convenience wrapper
//! most callers want.

use log::trace;

use crate::coder::Coder;
use crate::error::AnsError;
use crate::{State, Symbol};

/// Couples a [`Coder`] to the digit base `b` and interval-floor multiplier
/// `l` that define `I = [l*M, b*l*M)`.
#[derive(Clone, Copy, Debug)]
pub struct StreamingDriver {
    b: u64,
    l: u64,
}

impl StreamingDriver {
    /// Builds a driver for `(b, l)`. `b` must be at least 2, `l` at least 1.
    pub fn new(b: u64, l: u64) -> Result<Self, AnsError> {
        if b < 2 {
            return Err(AnsError::InvalidParameter("b must be >= 2"));
        }
        if l < 1 {
            return Err(AnsError::InvalidParameter("l must be >= 1"));
        }
        Ok(Self { b, l })
    }

    /// `I`'s lower bound, `l*M`, also the encoder's initial state.
    fn lower(&self, coder: &impl Coder) -> State {
        self.l * coder.total()
    }

    /// Encodes `symbols` in order. Returns the digit stack (last-in,
    /// first-out from decode's perspective) and the final state.
    ///
    /// Per symbol: renormalize (shift low-order digits of `state` into the
    /// output while `state >= b*l*freq(s)`) then apply `C(s, state)`.
    pub fn encode(
        &self,
        coder: &impl Coder,
        symbols: &[Symbol],
    ) -> Result<(Vec<u64>, State), AnsError> {
        let mut state = self.lower(coder);
        let mut digits = Vec::new();

        for &symbol in symbols {
            let freq = coder.freq(symbol)?;
            let bound = self.b * self.l * freq;
            while state >= bound {
                digits.push(state % self.b);
                state /= self.b;
            }
            state = coder.encode_step(symbol, state)?;
        }

        trace!(
            "encoded {} symbols: {} digits emitted, final state {}",
            symbols.len(),
            digits.len(),
            state
        );
        Ok((digits, state))
    }

    /// Decodes exactly `count` symbols from `(digits, state)`, the output
    /// of [`Self::encode`]. `digits` is consumed as a stack (popped from
    /// the tail), matching how it was produced.
    ///
    /// Returns symbols in the **reverse** of their original order — this
    /// is the ANS decode contract, not an implementation artifact. See
    /// [`Self::decode_in_order`] to undo the reversal.
    pub fn decode(
        &self,
        coder: &impl Coder,
        mut digits: Vec<u64>,
        mut state: State,
        count: usize,
    ) -> Result<Vec<Symbol>, AnsError> {
        let lower = self.lower(coder);
        let mut out = Vec::with_capacity(count);

        for _ in 0..count {
            let (symbol, next_state) = coder.decode_step(state)?;
            out.push(symbol);
            state = next_state;
            while state < lower {
                let digit = digits.pop().ok_or(AnsError::Truncated)?;
                state = state * self.b + digit;
            }
        }

        trace!("decoded {} symbols, {} digits left unread", count, digits.len());
        Ok(out)
    }

    /// [`Self::decode`], then reversed back into original input order.
    pub fn decode_in_order(
        &self,
        coder: &impl Coder,
        digits: Vec<u64>,
        state: State,
        count: usize,
    ) -> Result<Vec<Symbol>, AnsError> {
        let mut reversed = self.decode(coder, digits, state, count)?;
        reversed.reverse();
        Ok(reversed)
    }
}
