mod error;
mod record_key;

pub use error::{Error, Result};
pub use record_key::RecordKey;
