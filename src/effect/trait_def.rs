//! Effect trait definition - the deferred computation at the heart of a pipeline.
//!
//! An effect describes work without doing it. Nothing runs until
//! [`Effect::run`] is called and the returned future is polled, and `run`
//! consumes the effect, so a given effect can be forced at most once.
//!
//! Dependencies arrive through the environment (`Env`). The pipeline uses
//! this to inject the wrapped capability at run time instead of storing it.

use std::future::Future;

/// A lazy computation that resolves to `Ok(Output)` or `Err(Error)`.
///
/// Combinators return concrete types, the same way `Future` and `Iterator`
/// adapters do.
///
/// # Example
///
/// ```rust
/// use sluice::effect::prelude::*;
///
/// fn double(x: i32) -> impl Effect<Output = i32, Error = String, Env = ()> {
///     pure(x).map(|x| x * 2)
/// }
///
/// # tokio_test::block_on(async {
/// assert_eq!(double(21).execute(&()).await, Ok(42));
/// # });
/// ```
pub trait Effect: Sized + Send {
    /// The success type produced by this effect.
    type Output: Send;

    /// The error type that may be produced.
    type Error: Send;

    /// The environment type required to run this effect.
    type Env: Clone + Send + Sync;

    /// Execute this effect with the given environment.
    ///
    /// Dropping the returned future before completion cancels the work;
    /// it never resolves to a partial result.
    fn run(self, env: &Self::Env)
        -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;
}
