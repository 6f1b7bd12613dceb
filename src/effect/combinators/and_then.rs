//! AndThen - sequencing where the second step depends on the first.

use std::fmt;

use crate::effect::trait_def::Effect;

/// Runs `inner`, feeds its output to `next`, and runs the effect that
/// returns.
///
/// When `inner` fails, `next` is never called and the error is returned
/// as is. The pipeline relies on this to keep invalid input away from the
/// capability.
pub struct AndThen<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) next: F,
}

impl<Inner: fmt::Debug, F> fmt::Debug for AndThen<Inner, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndThen")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<Inner, F, Next> Effect for AndThen<Inner, F>
where
    Inner: Effect,
    Next: Effect<Error = Inner::Error, Env = Inner::Env>,
    F: FnOnce(Inner::Output) -> Next + Send,
{
    type Output = Next::Output;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(self, env: &Inner::Env) -> Result<Next::Output, Inner::Error> {
        match self.inner.run(env).await {
            Ok(value) => (self.next)(value).run(env).await,
            Err(error) => Err(error),
        }
    }
}
