use async_trait::async_trait;

use crate::prelude::{Sanitize, SanitizeOptions, SanitizeResult, Value};

/// Sanitizer URL-encodes strings by converting them to percent-encoded format.
///
/// # Example
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use entity_sanitizers::prelude::{UrlEncodingSanitizer, SanitizeOptions, Value, Sanitize as _};
///
/// let original = Value::Text("你好 rust".into());
/// let mut options = SanitizeOptions::new();
/// let sanitized_value = UrlEncodingSanitizer
///     .sanitize(&original, original.clone(), &mut options)
///     .await
///     .unwrap();
/// assert_eq!(sanitized_value, Value::Text("%E4%BD%A0%E5%A5%BD%20rust".into()));
/// # }
/// ```
pub struct UrlEncodingSanitizer;

#[async_trait]
impl Sanitize for UrlEncodingSanitizer {
    async fn sanitize(
        &self,
        _original: &Value,
        value: Value,
        _options: &mut SanitizeOptions,
    ) -> SanitizeResult<Value> {
        match value {
            Value::Text(text) => {
                let encoded = percent_encoding::utf8_percent_encode(
                    text.as_str(),
                    percent_encoding::NON_ALPHANUMERIC,
                )
                .to_string();
                Ok(Value::Text(encoded))
            }
            other => Ok(other),
        }
    }
}
