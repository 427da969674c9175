//! The name hash scheme.
//!
//! A label is packed into two 248-bit preimage signals, and a dotted name is
//! hashed by folding its labels through a 3-input hash, top-level label first.
//! Revealed signals decode back into the name.

pub mod bits;
mod chain;
mod decode;
mod label;

pub use chain::{fold_labels, fold_name};
pub use decode::decode_signals;
pub use label::{encode_label, pack_label, SignalPair, HALF_LEN, LABEL_LEN, SIGNAL_BITS};
