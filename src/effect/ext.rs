//! Extension trait providing combinator methods for all effects.

use crate::effect::combinators::{AndThen, Instrument, Map, MapErr, Provide, TapErr};
use crate::effect::trait_def::Effect;

/// Combinator methods, implemented for every [`Effect`].
///
/// # Example
///
/// ```rust
/// use sluice::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let length = from_fn(|body: &String| Ok::<_, &str>(body.chars().count()))
///     .and_then(|n| if n <= 160 { pure(n) } else { fail("too long") })
///     .map_err(|e| format!("payload: {e}"));
///
/// assert_eq!(length.execute(&"Hello world!".to_string()).await, Ok(12));
/// # });
/// ```
pub trait EffectExt: Effect {
    /// Apply `f` to the output once the effect succeeds.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnOnce(Self::Output) -> U + Send,
        U: Send,
    {
        Map { inner: self, f }
    }

    /// Apply `f` to the error once the effect fails.
    fn map_err<E2, F>(self, f: F) -> MapErr<Self, F>
    where
        F: FnOnce(Self::Error) -> E2 + Send,
        E2: Send,
    {
        MapErr { inner: self, f }
    }

    /// Chain a dependent effect. Skipped entirely when `self` fails.
    fn and_then<Next, F>(self, f: F) -> AndThen<Self, F>
    where
        Next: Effect<Error = Self::Error, Env = Self::Env>,
        F: FnOnce(Self::Output) -> Next + Send,
    {
        AndThen {
            inner: self,
            next: f,
        }
    }

    /// Look at the error on its way out, e.g. to log it.
    ///
    /// ```rust
    /// use sluice::effect::prelude::*;
    ///
    /// # tokio_test::block_on(async {
    /// let effect = fail::<(), _, ()>("refused")
    ///     .tap_err(|e| tracing::warn!(error = e, "send failed"));
    /// assert_eq!(effect.execute(&()).await, Err("refused"));
    /// # });
    /// ```
    fn tap_err<F>(self, f: F) -> TapErr<Self, F>
    where
        F: FnOnce(&Self::Error) + Send,
    {
        TapErr { inner: self, f }
    }

    /// Bind the environment now, leaving an effect that needs none.
    ///
    /// ```rust
    /// use sluice::effect::prelude::*;
    ///
    /// # tokio_test::block_on(async {
    /// let bound = from_fn(|n: &i32| Ok::<_, String>(n + 1)).provide(41);
    /// assert_eq!(bound.execute(&()).await, Ok(42));
    /// # });
    /// ```
    fn provide(self, env: Self::Env) -> Provide<Self> {
        Provide { inner: self, env }
    }

    /// Run inside a tracing span.
    fn instrument(self, span: tracing::Span) -> Instrument<Self> {
        Instrument { inner: self, span }
    }

    /// Force the effect: run it against `env` and await the outcome.
    async fn execute(self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        self.run(env).await
    }
}

impl<E: Effect> EffectExt for E {}
