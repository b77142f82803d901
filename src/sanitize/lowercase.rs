use async_trait::async_trait;

use crate::prelude::{Sanitize, SanitizeOptions, SanitizeResult, Value};

/// Sanitizer that converts strings to lowercase.
///
/// # Example
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use entity_sanitizers::prelude::{LowerCaseSanitizer, SanitizeOptions, Value, Sanitize as _};
///
/// let original = Value::Text("Hello, World!".into());
/// let mut options = SanitizeOptions::new();
/// let sanitized_value = LowerCaseSanitizer
///     .sanitize(&original, original.clone(), &mut options)
///     .await
///     .unwrap();
/// assert_eq!(sanitized_value, Value::Text("hello, world!".into()));
/// # }
/// ```
pub struct LowerCaseSanitizer;

#[async_trait]
impl Sanitize for LowerCaseSanitizer {
    async fn sanitize(
        &self,
        _original: &Value,
        value: Value,
        _options: &mut SanitizeOptions,
    ) -> SanitizeResult<Value> {
        match value {
            Value::Text(text) => Ok(Value::Text(text.to_lowercase())),
            other => Ok(other),
        }
    }
}
