use async_trait::async_trait;

use crate::prelude::{Sanitize, SanitizeError, SanitizeOptions, SanitizeResult, Value};

/// Sanitizer that trims leading and trailing whitespace from strings.
///
/// This is the sanitizer behind the built-in `trim` rule. Unlike the other built-in sanitizers it
/// is strict: a non-text value is rejected with [`SanitizeError::InvalidValue`] instead of being
/// passed through.
///
/// # Example
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use entity_sanitizers::prelude::{TrimSanitizer, SanitizeOptions, Value, Sanitize as _};
///
/// let original = Value::Text("  Hello, World!  ".into());
/// let mut options = SanitizeOptions::new();
/// let sanitized_value = TrimSanitizer
///     .sanitize(&original, original.clone(), &mut options)
///     .await
///     .unwrap();
/// assert_eq!(sanitized_value, Value::Text("Hello, World!".into()));
/// # }
/// ```
pub struct TrimSanitizer;

#[async_trait]
impl Sanitize for TrimSanitizer {
    async fn sanitize(
        &self,
        _original: &Value,
        value: Value,
        _options: &mut SanitizeOptions,
    ) -> SanitizeResult<Value> {
        match value {
            Value::Text(text) => Ok(Value::Text(text.trim().into())),
            other => Err(SanitizeError::InvalidValue(other)),
        }
    }
}
