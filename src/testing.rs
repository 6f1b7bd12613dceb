//! Testing utilities: capability doubles and assertion macros
//!
//! # Examples
//!
//! ## Counting capability
//!
//! ```rust
//! use sluice::prelude::*;
//! use sluice::testing::{Behavior, CountingCapability};
//!
//! # tokio_test::block_on(async {
//! let capability = CountingCapability::new(Behavior::Fail("offline".into()));
//! let pipeline = Pipeline::new(MessageValidator::default());
//!
//! let raw = pipeline.validator().record("not a number", "Hi");
//! assert!(pipeline.run(raw).execute(&capability).await.is_err());
//! assert_eq!(capability.calls(), 0);
//! # });
//! ```
//!
//! ## Assertion macros
//!
//! ```rust
//! use sluice::{Validation, assert_success, assert_failure};
//!
//! let success = Validation::<_, Vec<String>>::success(42);
//! assert_success!(success);
//!
//! let failure = Validation::<i32, _>::failure(vec!["error".to_string()]);
//! assert_failure!(failure);
//! ```

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::effect::Capability;
use crate::error::NoFault;
use crate::validator::Message;

/// What a [`CountingCapability`] does when called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Behavior {
    /// Echo the input back
    Succeed,
    /// Return this fault
    Fail(String),
    /// Panic with this message while being awaited
    Panic(String),
}

/// A capability double that records how often it was called.
///
/// Clones share the counter, so a test can keep one handle and give the
/// other to the pipeline.
#[derive(Debug, Clone)]
pub struct CountingCapability {
    calls: Arc<AtomicUsize>,
    behavior: Behavior,
}

impl CountingCapability {
    /// A fresh double with a zero counter.
    pub fn new(behavior: Behavior) -> Self {
        CountingCapability {
            calls: Arc::new(AtomicUsize::new(0)),
            behavior,
        }
    }

    /// How many times the capability has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<I: Send> Capability<I> for CountingCapability {
    type Output = I;
    type Fault = String;

    fn call(&self, input: I) -> impl Future<Output = Result<I, String>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let behavior = self.behavior.clone();
        async move {
            match behavior {
                Behavior::Succeed => Ok(input),
                Behavior::Fail(fault) => Err(fault),
                Behavior::Panic(message) => panic!("{message}"),
            }
        }
    }
}

/// A capability that "sends" a message by logging it.
///
/// Emits `sending to <identifier>: <payload>` at `info` level and never
/// fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingCapability;

impl Capability<Message> for LoggingCapability {
    type Output = ();
    type Fault = NoFault;

    fn call(&self, message: Message) -> impl Future<Output = Result<(), NoFault>> + Send {
        tracing::info!("sending to {}: {}", message.identifier, message.payload);
        async { Ok(()) }
    }
}

/// Assert that a validation succeeds.
///
/// This macro will panic if the validation is a `Failure`.
///
/// ```rust
/// use sluice::{Validation, assert_success};
///
/// let val = Validation::<_, Vec<String>>::success(42);
/// assert_success!(val);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
///
/// This macro will panic if the validation is a `Success`.
///
/// ```rust
/// use sluice::{Validation, assert_failure};
///
/// let val = Validation::<i32, _>::failure(vec!["error".to_string()]);
/// assert_failure!(val);
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation failed on exactly these fields, in this order.
///
/// ```rust
/// use sluice::assert_violations;
/// use sluice::validator::{MessageValidator, Validator};
///
/// let validator = MessageValidator::default();
/// let raw = validator.record("+3581234567", "x".repeat(161));
/// assert_violations!(validator.validate(raw), ["payload"]);
/// ```
#[macro_export]
macro_rules! assert_violations {
    ($validation:expr, [$($field:expr),* $(,)?]) => {
        match $validation {
            $crate::Validation::Failure(violations) => {
                let expected: ::std::vec::Vec<&str> = ::std::vec![$($field),*];
                assert_eq!(violations.fields(), expected, "violations: {}", violations);
            }
            $crate::Validation::Success(v) => {
                panic!("Expected violations, got Success: {:?}", v);
            }
        }
    };
}
