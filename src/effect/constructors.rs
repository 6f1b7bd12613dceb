//! Functions that start an effect chain.
//!
//! ```rust
//! use sluice::effect::prelude::*;
//! use sluice::Validation;
//!
//! # tokio_test::block_on(async {
//! let ok = from_validation::<_, Vec<&str>, ()>(Validation::success(1));
//! assert_eq!(ok.execute(&()).await, Ok(1));
//!
//! let env_read = from_fn(|env: &i32| Ok::<_, String>(*env * 2));
//! assert_eq!(env_read.execute(&21).await, Ok(42));
//!
//! let awaited = from_async(|env: &u64| {
//!     let n = *env;
//!     async move { Ok::<_, String>(n + 1) }
//! });
//! assert_eq!(awaited.execute(&41).await, Ok(42));
//! # });
//! ```

use std::future::Future;
use std::marker::PhantomData;

use crate::effect::combinators::{FromAsync, FromFn, Ready};
use crate::Validation;

/// Succeed with `value`.
pub fn pure<T, E, Env>(value: T) -> Ready<T, E, Env> {
    Ready::new(Ok(value))
}

/// Fail with `error`.
pub fn fail<T, E, Env>(error: E) -> Ready<T, E, Env> {
    Ready::new(Err(error))
}

/// Resolve to `result` as is.
pub fn from_result<T, E, Env>(result: Result<T, E>) -> Ready<T, E, Env> {
    Ready::new(result)
}

/// Resolve to a finished [`Validation`], its accumulated errors becoming
/// the effect's error.
pub fn from_validation<T, E, Env>(validation: Validation<T, E>) -> Ready<T, E, Env> {
    Ready::new(validation.into_result())
}

/// Call `f` with the environment when forced.
pub fn from_fn<T, E, Env, F>(f: F) -> FromFn<F, Env>
where
    F: FnOnce(&Env) -> Result<T, E> + Send,
{
    FromFn {
        f,
        _env: PhantomData,
    }
}

/// Call `f` with the environment when forced, and await its future.
///
/// The future must not borrow the environment; clone what it needs.
pub fn from_async<T, E, Env, F, Fut>(f: F) -> FromAsync<F, Env>
where
    F: FnOnce(&Env) -> Fut + Send,
    Fut: Future<Output = Result<T, E>> + Send,
{
    FromAsync {
        f,
        _env: PhantomData,
    }
}
