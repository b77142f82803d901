use async_trait::async_trait;

use crate::prelude::{Sanitize, SanitizeOptions, SanitizeResult, Value};

/// Sanitizer that collapses multiple whitespace characters into a single space in strings.
///
/// # Example
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use entity_sanitizers::prelude::{CollapseWhitespaceSanitizer, SanitizeOptions, Value, Sanitize as _};
///
/// let original = Value::Text("  Hello,       World!  ".into());
/// let mut options = SanitizeOptions::new();
/// let sanitized_value = CollapseWhitespaceSanitizer
///     .sanitize(&original, original.clone(), &mut options)
///     .await
///     .unwrap();
/// assert_eq!(sanitized_value, Value::Text("Hello, World!".into()));
/// # }
/// ```
pub struct CollapseWhitespaceSanitizer;

#[async_trait]
impl Sanitize for CollapseWhitespaceSanitizer {
    async fn sanitize(
        &self,
        _original: &Value,
        value: Value,
        _options: &mut SanitizeOptions,
    ) -> SanitizeResult<Value> {
        match value {
            Value::Text(text) => Ok(Value::Text(
                text.split_whitespace().collect::<Vec<_>>().join(" "),
            )),
            other => Ok(other),
        }
    }
}
