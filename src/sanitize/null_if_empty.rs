use async_trait::async_trait;

use crate::prelude::{Sanitize, SanitizeOptions, SanitizeResult, Value};

/// The [`NullIfEmptySanitizer`] struct is used to sanitize input by converting empty strings to
/// null values.
///
/// This [`Sanitize`] never returns an error.
///
/// # Example
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use entity_sanitizers::prelude::{NullIfEmptySanitizer, SanitizeOptions, Value, Sanitize as _};
///
/// let original = Value::Text("".into());
/// let mut options = SanitizeOptions::new();
/// let sanitized_value = NullIfEmptySanitizer
///     .sanitize(&original, original.clone(), &mut options)
///     .await
///     .unwrap();
/// assert_eq!(sanitized_value, Value::Null);
/// # }
/// ```
pub struct NullIfEmptySanitizer;

#[async_trait]
impl Sanitize for NullIfEmptySanitizer {
    async fn sanitize(
        &self,
        _original: &Value,
        value: Value,
        _options: &mut SanitizeOptions,
    ) -> SanitizeResult<Value> {
        match value {
            Value::Text(text) if text.is_empty() => Ok(Value::Null),
            other => Ok(other),
        }
    }
}
