use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::pipeline::Pipeline;
use crate::prelude::{
    SanitizeError, SanitizeFailure, SanitizeOptions, SanitizeResult, Sanitized, SanitizerRef,
    TrimSanitizer, Value,
};

/// Weight assigned to sanitizers registered without an ordering requirement.
pub const DEFAULT_WEIGHT: i32 = 0;

/// Name of the rule registered at construction time.
const TRIM_RULE: &str = "trim";

/// One registered (callback, weight) pair of a rule.
pub(crate) struct SanitizerEntry {
    pub(crate) callback: SanitizerRef,
    pub(crate) weight: i32,
    /// Registration sequence number; keeps equal weights in registration order.
    pub(crate) seq: u64,
}

/// Registry of named sanitizer pipelines.
///
/// Each rule name maps to an ordered list of sanitizers. Within a rule, sanitizers run in
/// ascending weight order and two sanitizers with the same weight run in registration order. A
/// single built-in rule, `trim`, is registered at construction time.
///
/// [`Sanitizers::register`] and [`Sanitizers::unregister`] take `&mut self` while
/// [`Sanitizers::sanitize`] borrows the registry shared, so the compiler rules out mutating the
/// registry while a run is in flight. Callers that need to mutate a registry shared between tasks
/// wrap it in a lock of their choosing.
///
/// # Example
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use std::sync::Arc;
///
/// use entity_sanitizers::prelude::{Sanitizers, LowerCaseSanitizer, Value, DEFAULT_WEIGHT};
///
/// let mut sanitizers = Sanitizers::new();
/// sanitizers.register("username", Arc::new(LowerCaseSanitizer), DEFAULT_WEIGHT);
///
/// let sanitized = sanitizers
///     .sanitize("username", Value::Text("John".into()), None)
///     .await
///     .unwrap();
/// assert_eq!(sanitized.value, Value::Text("john".into()));
/// # }
/// ```
pub struct Sanitizers {
    rules: HashMap<String, Vec<SanitizerEntry>>,
    /// Rule names in first-registration order.
    order: Vec<String>,
    /// Monotonic registration counter.
    seq: u64,
    owner: Option<Box<dyn Any + Send + Sync>>,
}

impl Default for Sanitizers {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizers {
    /// Creates a registry with the built-in `trim` rule registered.
    pub fn new() -> Self {
        let mut sanitizers = Self {
            rules: HashMap::new(),
            order: Vec::new(),
            seq: 0,
            owner: None,
        };
        sanitizers.register(TRIM_RULE, Arc::new(TrimSanitizer), DEFAULT_WEIGHT);

        sanitizers
    }

    /// Creates a registry holding a back-reference to its owning context.
    ///
    /// The registry never reads the owner; it is kept for the embedding framework, which can get
    /// it back with [`Sanitizers::owner`] and downcast it.
    pub fn with_owner(owner: impl Any + Send + Sync) -> Self {
        let mut sanitizers = Self::new();
        sanitizers.owner = Some(Box::new(owner));

        sanitizers
    }

    /// Returns the owning context attached with [`Sanitizers::with_owner`], if any.
    pub fn owner(&self) -> Option<&(dyn Any + Send + Sync)> {
        self.owner.as_deref()
    }

    /// Registers `callback` under `name` with the provided `weight`.
    ///
    /// The rule is created on first registration. Entries with a lower weight run earlier;
    /// entries with the same weight run in registration order. Registering the same callback
    /// handle more than once is allowed and yields distinct entries.
    ///
    /// Returns `&mut Self` so registrations can be chained.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        callback: SanitizerRef,
        weight: i32,
    ) -> &mut Self {
        let name = name.into();
        let seq = self.seq;
        self.seq += 1;

        if !self.rules.contains_key(&name) {
            self.order.push(name.clone());
        }
        let entries = self.rules.entry(name.clone()).or_default();
        entries.push(SanitizerEntry {
            callback,
            weight,
            seq,
        });
        entries.sort_by_key(|entry| (entry.weight, entry.seq));

        debug!(
            "Registered sanitizer on rule '{}' with weight {} ({} total)",
            name,
            weight,
            entries.len()
        );

        self
    }

    /// Returns whether at least one sanitizer is registered under `name`.
    pub fn registered(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Unregisters sanitizers from `name`.
    ///
    /// With `None` the whole rule is removed. With `Some(callback)` every entry holding that
    /// callback handle is removed, duplicates included; if no entry is left the rule itself is
    /// removed. A rule without entries never exists, so [`Sanitizers::registered`] turns false as
    /// soon as the last entry is gone.
    ///
    /// # Errors
    ///
    /// [`SanitizeError::UnknownSanitizer`] if no rule is registered under `name`.
    pub fn unregister(
        &mut self,
        name: &str,
        callback: Option<&SanitizerRef>,
    ) -> SanitizeResult<&mut Self> {
        if !self.rules.contains_key(name) {
            return Err(SanitizeError::UnknownSanitizer(name.to_string()));
        }

        match callback {
            None => {
                self.rules.remove(name);
            }
            Some(callback) => {
                if let Some(entries) = self.rules.get_mut(name) {
                    entries.retain(|entry| !Arc::ptr_eq(&entry.callback, callback));
                    if entries.is_empty() {
                        self.rules.remove(name);
                    }
                }
            }
        }

        if self.rules.contains_key(name) {
            debug!("Unregistered sanitizer from rule '{}'", name);
        } else {
            self.order.retain(|rule| rule != name);
            debug!("Removed rule '{}'", name);
        }

        Ok(self)
    }

    /// Runs the pipeline registered under `name` against `value`.
    ///
    /// Stages execute strictly in order; each is awaited before the next starts, and the first
    /// stage error stops the run. `options` is shared by every stage of the run; when `None`, the
    /// run gets a fresh empty set.
    ///
    /// On success the returned [`Sanitized`] carries the untouched original next to the final
    /// value. On failure the [`SanitizeFailure`] carries the stage error, the original and the
    /// working value the failing stage received. An unknown `name` fails with
    /// [`SanitizeError::UnknownSanitizer`] before any stage runs.
    pub async fn sanitize(
        &self,
        name: &str,
        value: Value,
        options: Option<&mut SanitizeOptions>,
    ) -> Result<Sanitized, SanitizeFailure> {
        let Some(entries) = self.rules.get(name) else {
            return Err(SanitizeFailure {
                error: SanitizeError::UnknownSanitizer(name.to_string()),
                original: value.clone(),
                value,
            });
        };

        let mut scratch = SanitizeOptions::new();
        let options = options.unwrap_or(&mut scratch);

        Pipeline::new(name, entries).run(value, options).await
    }

    /// Returns the registered rule names in first-registration order.
    pub fn rules(&self) -> &[String] {
        &self.order
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::tests::{FailingSanitizer, IdentitySanitizer, PushCharSanitizer};

    #[test]
    fn test_should_init_sanitizers_with_trim_rule() {
        let sanitizers = Sanitizers::new();

        assert!(sanitizers.registered("trim"));
        assert_eq!(sanitizers.rules(), ["trim".to_string()]);
    }

    #[test]
    fn test_should_register_sanitizers_with_chaining() {
        let mut sanitizers = Sanitizers::new();
        sanitizers
            .register("slug", Arc::new(IdentitySanitizer), DEFAULT_WEIGHT)
            .register("email", Arc::new(IdentitySanitizer), DEFAULT_WEIGHT);

        assert!(sanitizers.registered("slug"));
        assert!(sanitizers.registered("email"));
        assert_eq!(
            sanitizers.rules(),
            [
                "trim".to_string(),
                "slug".to_string(),
                "email".to_string()
            ]
        );
    }

    #[test]
    fn test_should_report_unregistered_rule() {
        let sanitizers = Sanitizers::new();

        assert!(!sanitizers.registered("slug"));
    }

    #[test]
    fn test_should_sort_entries_by_weight() {
        let mut sanitizers = Sanitizers::new();
        sanitizers
            .register("chain", Arc::new(PushCharSanitizer('a')), 10)
            .register("chain", Arc::new(PushCharSanitizer('b')), -10)
            .register("chain", Arc::new(PushCharSanitizer('c')), 0);

        let entries = sanitizers
            .rules
            .get("chain")
            .expect("failed to get rule entries");
        let weights: Vec<i32> = entries.iter().map(|entry| entry.weight).collect();

        assert_eq!(weights, [-10, 0, 10]);
    }

    #[test]
    fn test_should_keep_equal_weights_in_registration_order() {
        let mut sanitizers = Sanitizers::new();
        sanitizers
            .register("chain", Arc::new(PushCharSanitizer('a')), 0)
            .register("chain", Arc::new(PushCharSanitizer('b')), 0)
            .register("chain", Arc::new(PushCharSanitizer('c')), 0);

        let entries = sanitizers
            .rules
            .get("chain")
            .expect("failed to get rule entries");
        let seqs: Vec<u64> = entries.iter().map(|entry| entry.seq).collect();

        assert_eq!(seqs, [1, 2, 3]);
    }

    #[test]
    fn test_should_unregister_whole_rule() {
        let mut sanitizers = Sanitizers::new();
        sanitizers.register("slug", Arc::new(IdentitySanitizer), DEFAULT_WEIGHT);

        sanitizers
            .unregister("slug", None)
            .expect("failed to unregister rule");

        assert!(!sanitizers.registered("slug"));
        assert_eq!(sanitizers.rules(), ["trim".to_string()]);
    }

    #[test]
    fn test_should_unregister_only_matching_callback() {
        let kept: SanitizerRef = Arc::new(PushCharSanitizer('k'));
        let removed: SanitizerRef = Arc::new(PushCharSanitizer('r'));

        let mut sanitizers = Sanitizers::new();
        sanitizers
            .register("chain", kept.clone(), 0)
            .register("chain", removed.clone(), 1)
            .register("chain", kept.clone(), 2);

        sanitizers
            .unregister("chain", Some(&removed))
            .expect("failed to unregister callback");

        let entries = sanitizers
            .rules
            .get("chain")
            .expect("failed to get rule entries");
        assert_eq!(entries.len(), 2);
        assert!(
            entries
                .iter()
                .all(|entry| Arc::ptr_eq(&entry.callback, &kept))
        );
    }

    #[test]
    fn test_should_remove_rule_when_last_callback_unregistered() {
        let callback: SanitizerRef = Arc::new(IdentitySanitizer);

        let mut sanitizers = Sanitizers::new();
        sanitizers.register("slug", callback.clone(), DEFAULT_WEIGHT);

        sanitizers
            .unregister("slug", Some(&callback))
            .expect("failed to unregister callback");

        assert!(!sanitizers.registered("slug"));
        assert!(!sanitizers.rules().contains(&"slug".to_string()));
    }

    #[test]
    fn test_should_fail_unregistering_unknown_rule() {
        let mut sanitizers = Sanitizers::new();

        let error = sanitizers
            .unregister("slug", None)
            .err()
            .expect("unregister should have failed");

        assert_eq!(error.to_string(), "Unknown sanitizer: slug");
        assert!(matches!(error, SanitizeError::UnknownSanitizer(name) if name == "slug"));
    }

    #[test]
    fn test_should_attach_owner() {
        #[derive(Debug, PartialEq)]
        struct EntityContext {
            entity: &'static str,
        }

        let sanitizers = Sanitizers::with_owner(EntityContext { entity: "user" });

        let owner = sanitizers
            .owner()
            .and_then(|owner| owner.downcast_ref::<EntityContext>())
            .expect("failed to downcast owner");
        assert_eq!(owner, &EntityContext { entity: "user" });

        assert!(Sanitizers::new().owner().is_none());
    }

    #[tokio::test]
    async fn test_should_sanitize_with_trim_rule() {
        let sanitizers = Sanitizers::new();

        let sanitized = sanitizers
            .sanitize("trim", Value::Text("  john  ".into()), None)
            .await
            .expect("failed to sanitize");

        assert_eq!(sanitized.original, Value::Text("  john  ".into()));
        assert_eq!(sanitized.value, Value::Text("john".into()));
    }

    #[tokio::test]
    async fn test_should_fail_sanitizing_with_unknown_rule() {
        let sanitizers = Sanitizers::new();

        let failure = sanitizers
            .sanitize("slug", Value::Text("john".into()), None)
            .await
            .expect_err("sanitize should have failed");

        assert_eq!(failure.to_string(), "Unknown sanitizer: slug");
        assert_eq!(failure.original, Value::Text("john".into()));
        assert_eq!(failure.value, Value::Text("john".into()));
    }

    #[tokio::test]
    async fn test_should_not_run_stages_for_unknown_rule() {
        let mut sanitizers = Sanitizers::new();
        sanitizers.register("strict", Arc::new(FailingSanitizer::new("boom")), 0);

        let failure = sanitizers
            .sanitize("other", Value::Null, None)
            .await
            .expect_err("sanitize should have failed");

        // the failing stage never ran; the error is the lookup failure
        assert!(matches!(failure.error, SanitizeError::UnknownSanitizer(_)));
    }
}
