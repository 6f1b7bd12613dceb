//! Effect adapter: fallible capabilities as value-returning effects
//!
//! A [`Capability`] is the external, side-effecting call being wrapped:
//! sending a message, writing a row, poking a device. It may return an
//! error, and it may panic. [`TryCall`] invokes it exactly once and
//! converts both outcomes into a [`StructuredError`] with reason
//! [`LIBRARY_CALL_FAILURE`](crate::error::LIBRARY_CALL_FAILURE), so no
//! fault crosses this boundary as anything other than a value.
//!
//! No retries happen here. A caller that wants them wraps the pipeline.
//!
//! # Example
//!
//! ```rust
//! use sluice::effect::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let flaky = |n: u32| async move {
//!     if n % 2 == 0 { Ok(n) } else { Err(format!("{n} is odd")) }
//! };
//!
//! let adapter = wrap(flaky);
//! assert_eq!(adapter.call(4).execute(&()).await, Ok(4));
//!
//! let err = adapter.call(3).execute(&()).await.unwrap_err();
//! assert_eq!(err.reason, "library call failure");
//! assert_eq!(err.fault(), Some(&"3 is odd".to_string()));
//! # });
//! ```

use std::any::Any;
use std::future::Future;
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use crate::effect::combinators::Provide;
use crate::effect::ext::EffectExt;
use crate::effect::trait_def::Effect;
use crate::error::StructuredError;

/// An external operation taking `I`, succeeding with `Output` or failing
/// with `Fault`.
///
/// Implemented for any `Fn(I) -> impl Future<Output = Result<T, E>>`
/// closure, so plain async closures can be wrapped directly.
pub trait Capability<I>: Send + Sync {
    /// Success value
    type Output: Send;

    /// Failure value, carried verbatim in the resulting error
    type Fault: Send;

    /// Perform the operation.
    fn call(&self, input: I) -> impl Future<Output = Result<Self::Output, Self::Fault>> + Send;
}

impl<I, F, Fut, T, E> Capability<I> for F
where
    F: Fn(I) -> Fut + Send + Sync,
    Fut: Future<Output = Result<T, E>> + Send,
    T: Send,
    E: Send,
{
    type Output = T;
    type Fault = E;

    fn call(&self, input: I) -> impl Future<Output = Result<T, E>> + Send {
        self(input)
    }
}

/// One deferred invocation of the capability found in the environment.
///
/// Forcing it calls [`Capability::call`] exactly once. A returned fault
/// becomes [`Detail::Fault`](crate::error::Detail::Fault); a panic, whether
/// raised while starting the call or while awaiting it, becomes
/// [`Detail::Panic`](crate::error::Detail::Panic).
pub struct TryCall<C, I> {
    input: I,
    _capability: PhantomData<fn(&C)>,
}

impl<C, I> TryCall<C, I> {
    /// Defer a call with `input`. Nothing runs yet.
    pub fn new(input: I) -> Self {
        TryCall {
            input,
            _capability: PhantomData,
        }
    }
}

impl<C, I: std::fmt::Debug> std::fmt::Debug for TryCall<C, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryCall")
            .field("input", &self.input)
            .field("capability", &std::any::type_name::<C>())
            .finish()
    }
}

impl<C, I> Effect for TryCall<C, I>
where
    C: Capability<I> + Clone,
    I: Send,
{
    type Output = C::Output;
    type Error = StructuredError<C::Fault>;
    type Env = C;

    async fn run(self, capability: &C) -> Result<C::Output, StructuredError<C::Fault>> {
        tracing::debug!("invoking capability");

        let call = match panic::catch_unwind(AssertUnwindSafe(|| capability.call(self.input))) {
            Ok(call) => call,
            Err(payload) => return Err(panicked(&*payload)),
        };

        match AssertUnwindSafe(call).catch_unwind().await {
            Ok(Ok(output)) => {
                tracing::debug!("capability succeeded");
                Ok(output)
            }
            Ok(Err(fault)) => {
                tracing::warn!("capability returned a fault");
                Err(StructuredError::library_call(fault))
            }
            Err(payload) => Err(panicked(&*payload)),
        }
    }
}

fn panicked<F>(payload: &(dyn Any + Send)) -> StructuredError<F> {
    let message = panic_message(payload);
    tracing::error!(panic = %message, "capability panicked");
    StructuredError::library_panic(message)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// A capability bound ahead of time, producing environment-free calls.
///
/// Created by [`wrap`].
#[derive(Debug, Clone)]
pub struct Adapter<C> {
    capability: C,
}

/// Wrap a capability so each call becomes a deferred, non-panicking effect.
pub fn wrap<C>(capability: C) -> Adapter<C> {
    Adapter { capability }
}

impl<C: Clone> Adapter<C> {
    /// Defer one call. The capability is not touched until the returned
    /// effect is forced.
    pub fn call<I>(&self, input: I) -> Provide<TryCall<C, I>>
    where
        C: Capability<I>,
        I: Send,
    {
        TryCall::new(input).provide(self.capability.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::error::{Detail, LIBRARY_CALL_FAILURE};

    #[tokio::test]
    async fn test_success_passes_output_through() {
        let adapter = wrap(|x: i32| async move { Ok::<_, String>(x * 2) });
        assert_eq!(adapter.call(21).execute(&()).await, Ok(42));
    }

    #[tokio::test]
    async fn test_fault_is_carried_verbatim() {
        #[derive(Debug, Clone, PartialEq)]
        struct Refused {
            code: u16,
        }

        let adapter = wrap(|_: ()| async { Err::<(), _>(Refused { code: 503 }) });
        let err = adapter.call(()).execute(&()).await.unwrap_err();

        assert_eq!(err.reason, LIBRARY_CALL_FAILURE);
        assert_eq!(err.debug, Some(Detail::Fault(Refused { code: 503 })));
    }

    #[tokio::test]
    async fn test_panic_while_polling_is_captured() {
        let adapter = wrap(|_: ()| async {
            if true {
                panic!("network stack exploded");
            }
            Ok::<(), String>(())
        });

        let err = adapter.call(()).execute(&()).await.unwrap_err();
        assert_eq!(err.reason, LIBRARY_CALL_FAILURE);
        assert_eq!(
            err.debug,
            Some(Detail::Panic("network stack exploded".to_string()))
        );
    }

    #[derive(Clone)]
    struct PanicsBeforeFuture;

    impl Capability<u8> for PanicsBeforeFuture {
        type Output = ();
        type Fault = String;

        #[allow(unreachable_code)]
        fn call(&self, input: u8) -> impl Future<Output = Result<(), String>> + Send {
            panic!("rejected {input} synchronously");
            async { Ok(()) }
        }
    }

    #[tokio::test]
    async fn test_panic_while_starting_is_captured() {
        let err = TryCall::<PanicsBeforeFuture, u8>::new(7)
            .execute(&PanicsBeforeFuture)
            .await
            .unwrap_err();
        assert_eq!(
            err.debug,
            Some(Detail::Panic("rejected 7 synchronously".to_string()))
        );
    }

    #[tokio::test]
    async fn test_called_exactly_once_per_force() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let adapter = wrap(move |_: ()| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, String>(()) }
        });

        let effect = adapter.call(());
        assert_eq!(calls.load(Ordering::SeqCst), 0, "building must not call");

        effect.execute(&()).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_dropped_before_polling_never_calls() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let adapter = wrap(move |_: ()| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, String>(()) }
        });

        let pending = adapter.call(()).run(&());
        drop(pending);

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_panic_message_fallback() {
        let payload: Box<dyn Any + Send> = Box::new(42_u32);
        assert_eq!(panic_message(&*payload), "unknown panic payload");
    }
}
