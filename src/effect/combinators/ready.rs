//! Ready - an effect whose outcome is already known.

use std::fmt;
use std::marker::PhantomData;

use crate::effect::trait_def::Effect;

/// Resolves to a stored `Result` without touching the environment.
///
/// Built by [`pure`](crate::effect::pure), [`fail`](crate::effect::fail),
/// [`from_result`](crate::effect::from_result) and
/// [`from_validation`](crate::effect::from_validation).
pub struct Ready<T, E, Env> {
    pub(crate) outcome: Result<T, E>,
    pub(crate) _env: PhantomData<fn(&Env)>,
}

impl<T, E, Env> Ready<T, E, Env> {
    pub(crate) fn new(outcome: Result<T, E>) -> Self {
        Ready {
            outcome,
            _env: PhantomData,
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug, Env> fmt::Debug for Ready<T, E, Env> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ready").field(&self.outcome).finish()
    }
}

impl<T, E, Env> Effect for Ready<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(self, _: &Env) -> Result<T, E> {
        self.outcome
    }
}
