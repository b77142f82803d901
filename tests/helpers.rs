use async_trait::async_trait;
use entity_sanitizers::prelude::{
    Sanitize, SanitizeError, SanitizeOptions, SanitizeResult, Value,
};

/// A sanitizer that appends one character to text values, to make execution order observable.
#[allow(dead_code)]
pub struct PushCharSanitizer(pub char);

#[async_trait]
impl Sanitize for PushCharSanitizer {
    async fn sanitize(
        &self,
        _original: &Value,
        value: Value,
        _options: &mut SanitizeOptions,
    ) -> SanitizeResult<Value> {
        match value {
            Value::Text(mut text) => {
                text.push(self.0);
                Ok(Value::Text(text))
            }
            other => Ok(other),
        }
    }
}

/// A sanitizer that suspends once before appending a character to text values.
#[allow(dead_code)]
pub struct YieldingPushSanitizer(pub char);

#[async_trait]
impl Sanitize for YieldingPushSanitizer {
    async fn sanitize(
        &self,
        _original: &Value,
        value: Value,
        _options: &mut SanitizeOptions,
    ) -> SanitizeResult<Value> {
        tokio::task::yield_now().await;
        match value {
            Value::Text(mut text) => {
                text.push(self.0);
                Ok(Value::Text(text))
            }
            other => Ok(other),
        }
    }
}

/// A sanitizer that replaces spaces with dashes in text values.
#[allow(dead_code)]
pub struct SpaceToDashSanitizer;

#[async_trait]
impl Sanitize for SpaceToDashSanitizer {
    async fn sanitize(
        &self,
        _original: &Value,
        value: Value,
        _options: &mut SanitizeOptions,
    ) -> SanitizeResult<Value> {
        match value {
            Value::Text(text) => Ok(Value::Text(text.replace(' ', "-"))),
            other => Ok(other),
        }
    }
}

/// A sanitizer that always fails with a custom error.
#[allow(dead_code)]
pub struct FailingSanitizer(pub &'static str);

#[async_trait]
impl Sanitize for FailingSanitizer {
    async fn sanitize(
        &self,
        _original: &Value,
        _value: Value,
        _options: &mut SanitizeOptions,
    ) -> SanitizeResult<Value> {
        Err(SanitizeError::Custom(self.0.to_string()))
    }
}

/// A sanitizer that suspends once before failing with a custom error.
#[allow(dead_code)]
pub struct YieldingFailSanitizer(pub &'static str);

#[async_trait]
impl Sanitize for YieldingFailSanitizer {
    async fn sanitize(
        &self,
        _original: &Value,
        _value: Value,
        _options: &mut SanitizeOptions,
    ) -> SanitizeResult<Value> {
        tokio::task::yield_now().await;
        Err(SanitizeError::Custom(self.0.to_string()))
    }
}

/// A sanitizer that sets an option for later stages to observe.
#[allow(dead_code)]
pub struct SetOptionSanitizer {
    pub key: &'static str,
    pub value: Value,
}

#[async_trait]
impl Sanitize for SetOptionSanitizer {
    async fn sanitize(
        &self,
        _original: &Value,
        value: Value,
        options: &mut SanitizeOptions,
    ) -> SanitizeResult<Value> {
        options.insert(self.key, self.value.clone());
        Ok(value)
    }
}

/// A sanitizer that appends the text stored under an option key, when set.
#[allow(dead_code)]
pub struct AppendOptionSanitizer {
    pub key: &'static str,
}

#[async_trait]
impl Sanitize for AppendOptionSanitizer {
    async fn sanitize(
        &self,
        _original: &Value,
        value: Value,
        options: &mut SanitizeOptions,
    ) -> SanitizeResult<Value> {
        match (value, options.get(self.key)) {
            (Value::Text(mut text), Some(Value::Text(suffix))) => {
                text.push_str(suffix);
                Ok(Value::Text(text))
            }
            (other, _) => Ok(other),
        }
    }
}
