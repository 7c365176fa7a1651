//! Small utilities shared across the workspace: the input-validation error
//! type, logging setup, string helpers, base-36 encoding and unique ids.

pub mod base36;
pub mod error;
pub mod log_setup;
pub mod string_ext;
pub mod unique_id;

pub use base36::{base36_encode, encode_base36};
pub use error::{InvalidInput, Result};
pub use string_ext::{digits_after_last_separator, DigitsAfterLast};
pub use unique_id::{generate_unique_id, Clock, SystemClock, UniqueIdGenerator, DEFAULT_ID_LENGTH};
