use log::{debug, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prelude::{SanitizeError, SanitizeOptions, Value};
use crate::registry::SanitizerEntry;

/// Successful outcome of a sanitize run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sanitized {
    /// The value the run started from.
    pub original: Value,
    /// The value produced by the last stage.
    pub value: Value,
}

/// Failed outcome of a sanitize run.
///
/// Alongside the error it reports the value the run started from and the working value that was
/// handed to the failing stage.
#[derive(Debug, Error, Serialize, Deserialize)]
#[error("{error}")]
pub struct SanitizeFailure {
    /// The error returned by the failing stage, or
    /// [`SanitizeError::UnknownSanitizer`] if the rule does not exist.
    pub error: SanitizeError,
    /// The value the run started from.
    pub original: Value,
    /// The working value passed to the failing stage.
    pub value: Value,
}

/// Ordered execution of the stages registered on one rule.
///
/// Stages run strictly in sequence; each one is awaited before the next is invoked and the first
/// error stops the run.
pub(crate) struct Pipeline<'a> {
    rule: &'a str,
    entries: &'a [SanitizerEntry],
}

impl<'a> Pipeline<'a> {
    pub(crate) fn new(rule: &'a str, entries: &'a [SanitizerEntry]) -> Self {
        Self { rule, entries }
    }

    pub(crate) async fn run(
        self,
        value: Value,
        options: &mut SanitizeOptions,
    ) -> Result<Sanitized, SanitizeFailure> {
        let original = value.clone();
        let mut working = value;

        for (index, entry) in self.entries.iter().enumerate() {
            trace!("Running stage {} of rule '{}'", index, self.rule);
            // working is only advanced on success, so on error it still holds the
            // failing stage's input
            match entry
                .callback
                .sanitize(&original, working.clone(), options)
                .await
            {
                Ok(next) => working = next,
                Err(error) => {
                    debug!("Rule '{}' halted at stage {}: {}", self.rule, index, error);
                    return Err(SanitizeFailure {
                        error,
                        original,
                        value: working,
                    });
                }
            }
        }

        Ok(Sanitized {
            original,
            value: working,
        })
    }
}
