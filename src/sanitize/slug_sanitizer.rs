use async_trait::async_trait;

use crate::prelude::{Sanitize, SanitizeOptions, SanitizeResult, Value};

/// Sanitizer sluggifies strings by converting them to lowercase, replacing spaces with hyphens,
/// and removing non-alphanumeric characters.
///
/// # Example
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use entity_sanitizers::prelude::{SlugSanitizer, SanitizeOptions, Value, Sanitize as _};
///
/// let original = Value::Text("  Hello,       World!  ".into());
/// let mut options = SanitizeOptions::new();
/// let sanitized_value = SlugSanitizer
///     .sanitize(&original, original.clone(), &mut options)
///     .await
///     .unwrap();
/// assert_eq!(sanitized_value, Value::Text("hello-world".into()));
/// # }
/// ```
pub struct SlugSanitizer;

#[async_trait]
impl Sanitize for SlugSanitizer {
    async fn sanitize(
        &self,
        _original: &Value,
        value: Value,
        _options: &mut SanitizeOptions,
    ) -> SanitizeResult<Value> {
        match value {
            Value::Text(text) => {
                let slug = text
                    .to_lowercase()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join("-")
                    .chars()
                    .filter(|c| c.is_alphanumeric() || *c == '-')
                    .collect::<String>();
                Ok(Value::Text(slug))
            }
            other => Ok(other),
        }
    }
}
