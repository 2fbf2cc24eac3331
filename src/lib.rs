//! A streaming asymmetric numeral systems (ANS) entropy codec.
//!
//! Three coder variants share one renormalizing driver:
//!
//! - [`rans::RansCoder`] — range ANS, driven by a [`model::FrequencyModel`].
//! - [`uabs::UabsCoder`] — the binary variant, parameterized by an exact
//!   rational probability `p_num/p_den`.
//! - [`tans::TansCoder`] — table ANS, driven by a [`tans::TansTable`] built
//!   once via Duda's priority-queue "precise initialization".
//!
//! [`driver::StreamingDriver`] renormalizes any of them into the interval
//! `I = [l*M, b*l*M)`. [`format`] serializes an encode pass's output into
//! the crate's canonical on-disk payload.
//!
//! ```
//! use std::collections::BTreeMap;
//! use ans_codec::coder::Coder;
//! use ans_codec::driver::StreamingDriver;
//! use ans_codec::model::FrequencyModel;
//! use ans_codec::rans::RansCoder;
//!
//! let model = FrequencyModel::new(BTreeMap::from([(0u32, 3), (1, 3), (2, 2)])).unwrap();
//! let coder = RansCoder::new(&model);
//! let driver = StreamingDriver::new(2, 1).unwrap();
//!
//! let input = vec![0, 1, 0, 2, 2, 0, 2, 1, 2];
//! let (digits, state) = driver.encode(&coder, &input).unwrap();
//! let decoded = driver.decode_in_order(&coder, digits, state, input.len()).unwrap();
//! assert_eq!(decoded, input);
//! ```

pub mod coder;
pub mod config;
pub mod count;
pub mod driver;
pub mod error;
pub mod format;
pub mod model;
pub mod rans;
pub mod rational;
pub mod tans;
pub mod uabs;

/// Non-negative integer symbol identifier.
pub type Symbol = u32;

/// Coder/driver state. Conceptually unbounded; the streaming driver keeps
/// it within `I = [l*M, b*l*M)` at every symbol boundary.
pub type State = u64;
