use async_trait::async_trait;

use crate::prelude::{Sanitize, SanitizeOptions, SanitizeResult, Value};

/// Sanitizer that converts strings to uppercase.
///
/// # Example
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use entity_sanitizers::prelude::{UpperCaseSanitizer, SanitizeOptions, Value, Sanitize as _};
///
/// let original = Value::Text("Hello, World!".into());
/// let mut options = SanitizeOptions::new();
/// let sanitized_value = UpperCaseSanitizer
///     .sanitize(&original, original.clone(), &mut options)
///     .await
///     .unwrap();
/// assert_eq!(sanitized_value, Value::Text("HELLO, WORLD!".into()));
/// # }
/// ```
pub struct UpperCaseSanitizer;

#[async_trait]
impl Sanitize for UpperCaseSanitizer {
    async fn sanitize(
        &self,
        _original: &Value,
        value: Value,
        _options: &mut SanitizeOptions,
    ) -> SanitizeResult<Value> {
        match value {
            Value::Text(text) => Ok(Value::Text(text.to_uppercase())),
            other => Ok(other),
        }
    }
}
