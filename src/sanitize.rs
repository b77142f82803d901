//! This module contains all the built-in sanitizers which can be registered on a rule.
//!
//! Each sanitizer takes the original [`crate::prelude::Value`], the current working value and the
//! run options, and returns a `SanitizeResult<crate::prelude::Value>` with the sanitized value or
//! an error if the value could not be sanitized.
//!
//! This module contains the [`Sanitize`] trait which should be implemented by all sanitizers.

use std::sync::Arc;

use async_trait::async_trait;

mod clamp;
mod collapse_whitespace;
mod lowercase;
mod null_if_empty;
mod round_to_scale;
mod slug_sanitizer;
mod trim;
mod uppercase;
mod url_encoding;

pub use self::clamp::{ClampSanitizer, ClampUnsignedSanitizer};
pub use self::collapse_whitespace::CollapseWhitespaceSanitizer;
pub use self::lowercase::LowerCaseSanitizer;
pub use self::null_if_empty::NullIfEmptySanitizer;
pub use self::round_to_scale::RoundToScaleSanitizer;
pub use self::slug_sanitizer::SlugSanitizer;
pub use self::trim::TrimSanitizer;
pub use self::uppercase::UpperCaseSanitizer;
pub use self::url_encoding::UrlEncodingSanitizer;
use crate::prelude::{SanitizeOptions, SanitizeResult, Value};

/// Trait for sanitizing [`Value`]s.
#[async_trait]
pub trait Sanitize: Send + Sync {
    /// Sanitizes the given [`Value`].
    ///
    /// `original` is the value the run started from, `value` is the output of the previous stage
    /// and `options` is shared by every stage of the run. A stage may complete synchronously or
    /// suspend; the run awaits it either way before moving on.
    ///
    /// In case of error it should return a [`crate::prelude::SanitizeError`]; the run stops at the
    /// first failing stage.
    ///
    /// Sanitizers should not return an error if the value is not of the expected type, they should
    /// just return the value as is. [`TrimSanitizer`] is the exception: it rejects non-text values
    /// with [`crate::prelude::SanitizeError::InvalidValue`].
    async fn sanitize(
        &self,
        original: &Value,
        value: Value,
        options: &mut SanitizeOptions,
    ) -> SanitizeResult<Value>;
}

/// Shared handle to a [`Sanitize`] implementor.
///
/// The handle allocation is the callback identity used by
/// [`crate::prelude::Sanitizers::unregister`]: clones of one handle refer to the same
/// sanitizer, while two separately created handles never match, even for the
/// same underlying type.
pub type SanitizerRef = Arc<dyn Sanitize>;
