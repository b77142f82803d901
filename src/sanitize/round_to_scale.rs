use async_trait::async_trait;

use crate::prelude::{Sanitize, SanitizeOptions, SanitizeResult, Value};

/// Sanitizer that rounds [`rust_decimal::Decimal`] values to a specified scale.
///
/// # Example
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use entity_sanitizers::prelude::{RoundToScaleSanitizer, SanitizeOptions, Value, Sanitize as _};
/// use rust_decimal::Decimal;
///
/// let original = Value::Decimal(Decimal::new(123456, 4)); // 12.3456
/// let mut options = SanitizeOptions::new();
/// let sanitizer = RoundToScaleSanitizer(2);
/// let sanitized_value = sanitizer
///     .sanitize(&original, original.clone(), &mut options)
///     .await
///     .unwrap();
/// assert_eq!(sanitized_value, Value::Decimal(Decimal::new(1235, 2))); // 12.35
/// # }
/// ```
pub struct RoundToScaleSanitizer(pub u32);

#[async_trait]
impl Sanitize for RoundToScaleSanitizer {
    async fn sanitize(
        &self,
        _original: &Value,
        value: Value,
        _options: &mut SanitizeOptions,
    ) -> SanitizeResult<Value> {
        match value {
            Value::Decimal(num) => Ok(Value::Decimal(num.round_dp(self.0))),
            other => Ok(other),
        }
    }
}
