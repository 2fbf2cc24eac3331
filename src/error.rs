//! Error taxonomy for the ANS codec.
//!
//! Every fallible operation in this crate returns a [`AnsError`] rather than
//! panicking. `StateOutOfDomain` and `TableLookupMiss` are driver-internal
//! conditions: a correctly implemented streaming driver never triggers them,
//! but a coder used directly (bypassing the driver) can.

use thiserror::Error;

/// Errors raised by the frequency model, the three coders, the tANS table
/// builder and the streaming driver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnsError {
    /// The alphabet was empty, or some symbol had a non-positive frequency.
    #[error("invalid frequency model: {0}")]
    InvalidModel(&'static str),

    /// A streaming or coder parameter was out of its valid range
    /// (`b < 2`, `l < 1`, a uABS probability outside `(0, 1)`, ...).
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// `encode_step` was asked to encode a symbol absent from the model.
    #[error("symbol {0} is not present in the frequency model")]
    UnknownSymbol(u32),

    /// `decode_step` was handed a state below `l * M`. The streaming driver
    /// is responsible for never doing this; seeing it means the caller
    /// invoked a coder directly with an unrenormalized state.
    #[error("state {0} fell below the renormalization interval")]
    StateOutOfDomain(u64),

    /// Decoding exhausted the bit buffer before producing the expected
    /// number of symbols.
    #[error("bit buffer exhausted before decoding the expected symbol count")]
    Truncated,

    /// A tANS `enc`/`dec` lookup fell outside the table's constructed
    /// domain. Indicates a bug in the driver or in table construction.
    #[error("tANS table lookup outside its constructed domain")]
    TableLookupMiss,
}
