//! Effects built from plain functions of the environment.

use std::fmt;
use std::future::Future;
use std::marker::PhantomData;

use crate::effect::trait_def::Effect;

/// Calls a synchronous function with the environment once forced.
///
/// Building one calls nothing.
pub struct FromFn<F, Env> {
    pub(crate) f: F,
    pub(crate) _env: PhantomData<fn(&Env)>,
}

/// Calls an async function with the environment once forced, then awaits
/// the future it returns.
pub struct FromAsync<F, Env> {
    pub(crate) f: F,
    pub(crate) _env: PhantomData<fn(&Env)>,
}

impl<F, Env> fmt::Debug for FromFn<F, Env> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<F, Env> fmt::Debug for FromAsync<F, Env> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromAsync").finish_non_exhaustive()
    }
}

impl<F, T, E, Env> Effect for FromFn<F, Env>
where
    F: FnOnce(&Env) -> Result<T, E> + Send,
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(self, env: &Env) -> Result<T, E> {
        (self.f)(env)
    }
}

impl<F, Fut, T, E, Env> Effect for FromAsync<F, Env>
where
    F: FnOnce(&Env) -> Fut + Send,
    Fut: Future<Output = Result<T, E>> + Send,
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(self, env: &Env) -> Result<T, E> {
        let pending = (self.f)(env);
        pending.await
    }
}
