//! Provide combinator - closes over the environment an effect needs.

use crate::effect::trait_def::Effect;

/// Runs the inner effect against a captured environment.
///
/// The result needs no environment (`Env = ()`), which is how a capability
/// gets bound to a deferred call ahead of time.
pub struct Provide<Inner: Effect> {
    pub(crate) inner: Inner,
    pub(crate) env: Inner::Env,
}

impl<Inner> std::fmt::Debug for Provide<Inner>
where
    Inner: Effect + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provide")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<Inner: Effect> Effect for Provide<Inner> {
    type Output = Inner::Output;
    type Error = Inner::Error;
    type Env = ();

    async fn run(self, _env: &()) -> Result<Self::Output, Self::Error> {
        self.inner.run(&self.env).await
    }
}
