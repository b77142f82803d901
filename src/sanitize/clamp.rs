use async_trait::async_trait;

use crate::prelude::{Sanitize, SanitizeOptions, SanitizeResult, Value};

/// Sanitizer that clamps integer values within a specified range.
///
/// # Example
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use entity_sanitizers::prelude::{ClampSanitizer, SanitizeOptions, Value, Sanitize as _};
///
/// let original = Value::Integer(150);
/// let mut options = SanitizeOptions::new();
/// let sanitizer = ClampSanitizer { min: 0, max: 100 };
/// let sanitized_value = sanitizer
///     .sanitize(&original, original.clone(), &mut options)
///     .await
///     .unwrap();
/// assert_eq!(sanitized_value, Value::Integer(100));
/// # }
/// ```
pub struct ClampSanitizer {
    pub min: i64,
    pub max: i64,
}

#[async_trait]
impl Sanitize for ClampSanitizer {
    async fn sanitize(
        &self,
        _original: &Value,
        value: Value,
        _options: &mut SanitizeOptions,
    ) -> SanitizeResult<Value> {
        match value {
            Value::Integer(num) => Ok(Value::Integer(num.clamp(self.min, self.max))),
            other => Ok(other),
        }
    }
}

/// Sanitizer that clamps unsigned integer values within a specified range.
///
/// # Example
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use entity_sanitizers::prelude::{ClampUnsignedSanitizer, SanitizeOptions, Value, Sanitize as _};
///
/// let original = Value::Unsigned(150);
/// let mut options = SanitizeOptions::new();
/// let sanitizer = ClampUnsignedSanitizer { min: 0, max: 100 };
/// let sanitized_value = sanitizer
///     .sanitize(&original, original.clone(), &mut options)
///     .await
///     .unwrap();
/// assert_eq!(sanitized_value, Value::Unsigned(100));
/// # }
/// ```
pub struct ClampUnsignedSanitizer {
    pub min: u64,
    pub max: u64,
}

#[async_trait]
impl Sanitize for ClampUnsignedSanitizer {
    async fn sanitize(
        &self,
        _original: &Value,
        value: Value,
        _options: &mut SanitizeOptions,
    ) -> SanitizeResult<Value> {
        match value {
            Value::Unsigned(num) => Ok(Value::Unsigned(num.clamp(self.min, self.max))),
            other => Ok(other),
        }
    }
}
