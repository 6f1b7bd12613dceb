//! Combinators that reshape an effect's outcome without adding work.

use std::fmt;

use crate::effect::trait_def::Effect;

/// Applies a function to the success value. Errors pass through untouched.
pub struct Map<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

/// Applies a function to the error value. Successes pass through untouched.
pub struct MapErr<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

/// Shows the error to a callback, then passes it on unchanged.
///
/// Handy for logging a failure at the point it happens.
pub struct TapErr<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner: fmt::Debug, F> fmt::Debug for Map<Inner, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<Inner: fmt::Debug, F> fmt::Debug for MapErr<Inner, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapErr")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<Inner: fmt::Debug, F> fmt::Debug for TapErr<Inner, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TapErr")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<Inner, F, U> Effect for Map<Inner, F>
where
    Inner: Effect,
    F: FnOnce(Inner::Output) -> U + Send,
    U: Send,
{
    type Output = U;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(self, env: &Inner::Env) -> Result<U, Inner::Error> {
        let Self { inner, f } = self;
        inner.run(env).await.map(f)
    }
}

impl<Inner, F, E2> Effect for MapErr<Inner, F>
where
    Inner: Effect,
    F: FnOnce(Inner::Error) -> E2 + Send,
    E2: Send,
{
    type Output = Inner::Output;
    type Error = E2;
    type Env = Inner::Env;

    async fn run(self, env: &Inner::Env) -> Result<Inner::Output, E2> {
        let Self { inner, f } = self;
        inner.run(env).await.map_err(f)
    }
}

impl<Inner, F> Effect for TapErr<Inner, F>
where
    Inner: Effect,
    F: FnOnce(&Inner::Error) + Send,
{
    type Output = Inner::Output;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(self, env: &Inner::Env) -> Result<Inner::Output, Inner::Error> {
        let Self { inner, f } = self;
        inner.run(env).await.inspect_err(f)
    }
}
