pub mod accumulator;
pub mod coerce;
pub mod error;
pub mod policy;

// Re-export commonly used types
pub use accumulator::{Accumulator, Snapshot};
pub use coerce::{parse_number_or, parse_raw_number_or};
pub use error::CoreError;
pub use policy::Validation;
