//! Prelude exposes all the types for the `entity-sanitizers` crate.

pub use crate::error::{SanitizeError, SanitizeResult};
pub use crate::options::SanitizeOptions;
pub use crate::pipeline::{SanitizeFailure, Sanitized};
pub use crate::registry::{DEFAULT_WEIGHT, Sanitizers};
pub use crate::sanitize::*;
pub use crate::value::Value;
