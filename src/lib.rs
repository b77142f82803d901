#![crate_name = "entity_sanitizers"]
#![crate_type = "lib"]

//! # Entity Sanitizers
//!
//! This crate exposes named, weighted, chainable sanitizer pipelines used to normalize entity
//! field values before they are persisted.
//!
//! You can import all the useful types and traits by using the prelude module:
//!
//! ```rust
//! use entity_sanitizers::prelude::*;
//! ```
//!
//! ## Get started
//!
//! A [`Sanitizers`](crate::prelude::Sanitizers) registry maps each rule name to an ordered list
//! of sanitizers. Sanitizers run in ascending weight order and the first failing one stops the
//! run. The `trim` rule is registered out of the box.
//!
//! ```rust
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! use std::sync::Arc;
//!
//! use entity_sanitizers::prelude::*;
//!
//! let mut sanitizers = Sanitizers::new();
//! sanitizers
//!     .register("slug", Arc::new(TrimSanitizer), -10)
//!     .register("slug", Arc::new(SlugSanitizer), DEFAULT_WEIGHT);
//!
//! let sanitized = sanitizers
//!     .sanitize("slug", Value::Text("  Hello World  ".into()), None)
//!     .await
//!     .unwrap();
//! assert_eq!(sanitized.value, Value::Text("hello-world".into()));
//! # }
//! ```
//!
//! ## Types
//!
//! ### Registry
//!
//! - [`Sanitizers`](crate::prelude::Sanitizers)
//! - [`Sanitized`](crate::prelude::Sanitized)
//! - [`SanitizeFailure`](crate::prelude::SanitizeFailure)
//! - [`SanitizeOptions`](crate::prelude::SanitizeOptions)
//!
//! ### Sanitizers
//!
//! - [`Sanitize`](crate::prelude::Sanitize)
//! - [`SanitizerRef`](crate::prelude::SanitizerRef)
//! - [`ClampSanitizer`](crate::prelude::ClampSanitizer)
//! - [`ClampUnsignedSanitizer`](crate::prelude::ClampUnsignedSanitizer)
//! - [`CollapseWhitespaceSanitizer`](crate::prelude::CollapseWhitespaceSanitizer)
//! - [`LowerCaseSanitizer`](crate::prelude::LowerCaseSanitizer)
//! - [`NullIfEmptySanitizer`](crate::prelude::NullIfEmptySanitizer)
//! - [`RoundToScaleSanitizer`](crate::prelude::RoundToScaleSanitizer)
//! - [`SlugSanitizer`](crate::prelude::SlugSanitizer)
//! - [`TrimSanitizer`](crate::prelude::TrimSanitizer)
//! - [`UpperCaseSanitizer`](crate::prelude::UpperCaseSanitizer)
//! - [`UrlEncodingSanitizer`](crate::prelude::UrlEncodingSanitizer)
//!
//! ### Value
//!
//! - [`Value`](crate::prelude::Value)
//!
//! ### Errors
//!
//! - [`SanitizeError`](crate::prelude::SanitizeError)
//! - [`SanitizeResult`](crate::prelude::SanitizeResult)

#![doc(html_playground_url = "https://play.rust-lang.org")]

mod error;
mod options;
mod pipeline;
pub mod prelude;
mod registry;
mod sanitize;
mod value;
