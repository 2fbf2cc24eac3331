//! The uABS coder, a closed-form binary variant parameterized by
//! `p = p_num/p_den ∈ (0,1)`, the probability of symbol `1`.
//!
//! Computing `p` as an `f64` is precision-losing: an intermediate value
//! like `30.000000000000004` ceils to `31` instead of `30`, and that drift
//! compounds across a long stream until decode diverges from encode. This
//! implementation never converts `p` to a float; every `ceil`/`floor` is
//! computed from `(p_num, p_den)` by exact integer division.
//!
//! To let the streaming driver treat uABS like any other [`Coder`] (which
//! needs `M` and `freq(·)` to compute renormalization thresholds), `p`'s
//! denominator doubles as `M` and its numerator as `freq(1)`:
//! `freq(1) = p_num`, `freq(0) = p_den - p_num`, `M = p_den`.

use crate::coder::Coder;
use crate::error::AnsError;
use crate::{State, Symbol};

/// `p = p_num / p_den`, the probability of symbol `1`, represented as an
/// exact rational to avoid floating-point precision drift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UabsCoder {
    p_num: u64,
    p_den: u64,
}

impl UabsCoder {
    /// Builds a coder from `p = p_num/p_den`. Requires `0 < p_num < p_den`.
    pub fn new(p_num: u64, p_den: u64) -> Result<Self, AnsError> {
        if p_den == 0 || p_num == 0 || p_num >= p_den {
            return Err(AnsError::InvalidParameter(
                "uABS requires 0 < p_num < p_den",
            ));
        }
        Ok(Self { p_num, p_den })
    }

    /// `⌈x*p⌉`, computed as `(x*p_num + p_den - 1) div p_den`.
    fn ceil_x_p(&self, x: u64) -> u64 {
        let num = x as u128 * self.p_num as u128 + self.p_den as u128 - 1;
        (num / self.p_den as u128) as u64
    }

    fn check_symbol(symbol: Symbol) -> Result<(), AnsError> {
        if symbol > 1 {
            return Err(AnsError::UnknownSymbol(symbol));
        }
        Ok(())
    }
}

impl Coder for UabsCoder {
    fn total(&self) -> u64 {
        self.p_den
    }

    fn freq(&self, symbol: Symbol) -> Result<u64, AnsError> {
        match symbol {
            0 => Ok(self.p_den - self.p_num),
            1 => Ok(self.p_num),
            _ => Err(AnsError::UnknownSymbol(symbol)),
        }
    }

    fn encode_step(&self, symbol: Symbol, state: State) -> Result<State, AnsError> {
        Self::check_symbol(symbol)?;
        match symbol {
            // C(0, x) = ceil((x+1)/(1-p)) - 1
            //         = ((x+1)*p_den + (p_den-p_num) - 1) div (p_den-p_num) - 1
            0 => {
                let den = self.p_den - self.p_num;
                let num = (state as u128 + 1) * self.p_den as u128 + den as u128 - 1;
                Ok((num / den as u128) as u64 - 1)
            }
            // C(1, x) = floor(x/p) = (x*p_den) div p_num
            1 => Ok((state as u128 * self.p_den as u128 / self.p_num as u128) as u64),
            _ => unreachable!("checked above"),
        }
    }

    fn decode_step(&self, state: State) -> Result<(Symbol, State), AnsError> {
        let cx = self.ceil_x_p(state);
        let cx1 = self.ceil_x_p(state + 1);
        let symbol = cx1 - cx;
        match symbol {
            0 => Ok((0, state - cx)),
            1 => Ok((1, cx)),
            _ => Err(AnsError::TableLookupMiss),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_probability() {
        assert!(UabsCoder::new(0, 10).is_err());
        assert!(UabsCoder::new(10, 10).is_err());
        assert!(UabsCoder::new(11, 10).is_err());
    }

    #[test]
    fn freq_matches_rational_probability() {
        let c = UabsCoder::new(3, 10).unwrap();
        assert_eq!(c.total(), 10);
        assert_eq!(c.freq(1).unwrap(), 3);
        assert_eq!(c.freq(0).unwrap(), 7);
    }

    #[test]
    fn inverse_law_holds_well_beyond_f64_precision() {
        let c = UabsCoder::new(3, 10).unwrap();
        // Exercise states near 2^40, the range spec.md flags as where an
        // f64-based ceil would start to drift.
        for x in (1u64 << 40)..(1u64 << 40) + 2000 {
            for s in [0u32, 1] {
                let encoded = c.encode_step(s, x).unwrap();
                assert_eq!(c.decode_step(encoded).unwrap(), (s, x));
            }
        }
    }

    #[test]
    fn rejects_non_binary_symbol() {
        let c = UabsCoder::new(3, 10).unwrap();
        assert_eq!(c.encode_step(2, 5), Err(AnsError::UnknownSymbol(2)));
    }
}
