//! The composition root: validate, then call the capability
//!
//! [`Pipeline::run`] builds one deferred computation per raw input. Forcing
//! it validates the input and, only if every field passed, calls the
//! capability found in the environment exactly once. Both failure modes
//! come back as a [`StructuredError`] value.
//!
//! [`Pipeline::force`] is the convenience form for callers that would rather
//! use `?` than match: it runs the same computation and converts a
//! structured error into an [`anyhow::Error`].
//!
//! # Example
//!
//! ```rust
//! use sluice::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let send = |message: Message| async move {
//!     Ok::<_, String>(format!("sent {} chars", message.payload.chars().count()))
//! };
//!
//! let pipeline = Pipeline::new(MessageValidator::default());
//!
//! let raw = pipeline.validator().record("+3581234567", "Hello world!");
//! assert_eq!(pipeline.run(raw).execute(&send).await, Ok("sent 12 chars".to_string()));
//!
//! let raw = pipeline.validator().record("bad", "x".repeat(161));
//! let err = pipeline.run(raw).execute(&send).await.unwrap_err();
//! assert_eq!(err.reason, "input validation failure");
//! assert_eq!(err.violations().map(|v| v.len()), Some(2));
//! # });
//! ```

use crate::effect::prelude::*;
use crate::error::StructuredError;
use crate::validator::Validator;

/// Validator followed by a capability call.
///
/// Holds no resources and no state between runs. The capability is
/// supplied per run, as the effect's environment.
#[derive(Debug, Clone, Default)]
pub struct Pipeline<V> {
    validator: V,
}

impl<V> Pipeline<V>
where
    V: Validator + Clone + Send,
    V::Raw: Send,
    V::Valid: Send,
{
    /// A pipeline validating with `validator`.
    pub fn new(validator: V) -> Self {
        Pipeline { validator }
    }

    /// The validator in use.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Defer one run over `raw`.
    ///
    /// Nothing happens until the returned effect is forced with a
    /// capability. Invalid input fails with every violation listed and the
    /// capability untouched; valid input is passed to the capability once.
    pub fn run<C>(
        &self,
        raw: V::Raw,
    ) -> impl Effect<Output = C::Output, Error = StructuredError<C::Fault>, Env = C>
    where
        C: Capability<V::Valid> + Clone,
    {
        let validator = self.validator.clone();

        from_fn(move |_: &C| {
            tracing::debug!("validating");
            validator.validate_inputs(raw).map_err(|err| {
                let count = err.violations().map_or(0, |v| v.len());
                tracing::warn!(violations = count, "validation failed");
                err.widen::<C::Fault>()
            })
        })
        .and_then(TryCall::<C, V::Valid>::new)
        .instrument(tracing::debug_span!("pipeline"))
    }

    /// Run over `raw` with `capability` and return the output, or the
    /// structured error as an [`anyhow::Error`].
    ///
    /// The error downcasts back to `StructuredError<C::Fault>` unchanged.
    ///
    /// ```rust
    /// use sluice::prelude::*;
    ///
    /// # tokio_test::block_on(async {
    /// let refuse = |_: Message| async { Err::<(), _>("gateway refused".to_string()) };
    /// let pipeline = Pipeline::new(MessageValidator::default());
    ///
    /// let raw = pipeline.validator().record("+3581234567", "Hi");
    /// let err = pipeline.force(raw, &refuse).await.unwrap_err();
    ///
    /// let structured = err.downcast_ref::<StructuredError<String>>().unwrap();
    /// assert_eq!(structured.fault(), Some(&"gateway refused".to_string()));
    /// # });
    /// ```
    pub async fn force<C>(&self, raw: V::Raw, capability: &C) -> anyhow::Result<C::Output>
    where
        C: Capability<V::Valid> + Clone,
        C::Fault: std::fmt::Debug + Sync + 'static,
    {
        let output = self.run(raw).execute(capability).await?;
        Ok(output)
    }
}
