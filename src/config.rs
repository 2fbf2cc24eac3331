//! The configuration surface `{variant, b, l, frequency_model,
//! (p_num,p_den) for uABS}`, validated in one place before any coder or
//! driver is constructed from it. No CLI surface here — parsing arguments
//! into this struct is left to the caller.

use std::collections::BTreeMap;

use crate::coder::Coder;
use crate::error::AnsError;
use crate::format::Variant;
use crate::model::FrequencyModel;
use crate::uabs::UabsCoder;
use crate::Symbol;

/// A table-backed variant's construction cost is proportional to
/// `(b-1)*l*M` lookup entries; beyond this many, `Config::validate`
/// rejects the configuration rather than let table construction exhaust
/// memory silently.
pub const MAX_TANS_TABLE_ENTRIES: u64 = 64 * 1024 * 1024;

/// The validated, immutable set of parameters a coder and
/// [`crate::driver::StreamingDriver`] are built from.
#[derive(Clone, Debug)]
pub struct Config {
    pub variant: Variant,
    pub b: u64,
    pub l: u64,
    pub frequencies: BTreeMap<Symbol, u64>,
    /// Required, and only meaningful, when `variant == Variant::Uabs`.
    pub uabs_probability: Option<(u64, u64)>,
}

impl Config {
    /// Validates `b >= 2` and `l >= 1`, then branches on `self.variant`:
    ///
    /// - [`Variant::Uabs`] validates `uabs_probability` (via
    ///   [`Self::uabs_coder`]) and never looks at `frequencies` — uABS's
    ///   alphabet is the fixed `{0,1}` derived entirely from
    ///   `p_num/p_den`. The returned [`FrequencyModel`] is built from that
    ///   derived `{0: p_den-p_num, 1: p_num}` mapping, not from
    ///   `frequencies`.
    /// - [`Variant::Rans`]/[`Variant::Tans`] validate `frequencies`
    ///   (non-empty, every `freq >= 1`) into a [`FrequencyModel`]; for
    ///   [`Variant::Tans`] additionally checks the resulting table would
    ///   fit within [`MAX_TANS_TABLE_ENTRIES`].
    pub fn validate(&self) -> Result<FrequencyModel, AnsError> {
        if self.b < 2 {
            return Err(AnsError::InvalidParameter("b must be >= 2"));
        }
        if self.l < 1 {
            return Err(AnsError::InvalidParameter("l must be >= 1"));
        }

        if self.variant == Variant::Uabs {
            let coder = self.uabs_coder()?;
            let frequencies =
                BTreeMap::from([(0u32, coder.freq(0)?), (1u32, coder.freq(1)?)]);
            return FrequencyModel::new(frequencies);
        }

        let model = FrequencyModel::new(self.frequencies.clone())?;

        if self.variant == Variant::Tans {
            let entries = (self.b - 1) * self.l * model.total();
            if entries > MAX_TANS_TABLE_ENTRIES {
                return Err(AnsError::InvalidParameter(
                    "tANS table would exceed the configured entry budget",
                ));
            }
        }

        Ok(model)
    }

    /// Builds the [`UabsCoder`] for a [`Variant::Uabs`] configuration.
    /// Errors if `uabs_probability` is absent or out of `(0, 1)`.
    pub fn uabs_coder(&self) -> Result<UabsCoder, AnsError> {
        let (num, den) = self.uabs_probability.ok_or(AnsError::InvalidParameter(
            "uabs_probability is required for the uABS variant",
        ))?;
        UabsCoder::new(num, den)
    }
}
