//! The coder contract shared by all three variants: a pair of mutual-inverse
//! integer functions `C` (encode-step) and `D` (decode-step), plus the
//! accessors the streaming driver needs to compute renormalization
//! thresholds without knowing which concrete coder it's driving.

use crate::error::AnsError;
use crate::{State, Symbol};

/// Any coder the streaming driver can renormalize around.
///
/// `encode_step` is total on `x` restricted to the per-symbol domain the
/// driver maintains (`[l*freq(s), b*l*freq(s))`); `decode_step` is total on
/// `x ∈ I`. Implementations may still return an error for a defensive
/// out-of-domain probe rather than relying on the caller.
pub trait Coder {
    /// `M`, the total frequency mass this coder was built over.
    fn total(&self) -> u64;

    /// `freq(s)`.
    fn freq(&self, symbol: Symbol) -> Result<u64, AnsError>;

    /// `C(s, x) -> x'`.
    fn encode_step(&self, symbol: Symbol, state: State) -> Result<State, AnsError>;

    /// `D(x) -> (s, x')`.
    fn decode_step(&self, state: State) -> Result<(Symbol, State), AnsError>;
}
