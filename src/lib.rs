//! # Sluice
//!
//! Validate untrusted input into branded values, then call a fallible
//! external capability, with every failure reported as a value.
//!
//! ## Pieces
//!
//! - [`refined`]: branded values such as [`Identifier`](refined::Identifier)
//!   and [`Payload`](refined::Payload) that exist only if their check passed
//! - [`validation`]: an error-accumulating [`Validation`]
//! - [`validator`]: turns a raw record into branded values, listing every
//!   bad field at once
//! - [`effect`]: lazy computations and the adapter that captures a
//!   capability's faults and panics
//! - [`pipeline`]: validator then adapter, as one deferred computation
//! - [`error`]: the [`StructuredError`](error::StructuredError) every failure
//!   ends up as
//!
//! ## Quick Example
//!
//! ```rust
//! use sluice::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let send = |message: Message| async move {
//!     if message.payload.is_empty() {
//!         Err("nothing to send".to_string())
//!     } else {
//!         Ok(())
//!     }
//! };
//!
//! let pipeline = Pipeline::new(MessageValidator::default());
//!
//! let raw = pipeline.validator().record("+3581234567", "Hello world!");
//! assert_eq!(pipeline.run(raw).execute(&send).await, Ok(()));
//!
//! let raw = pipeline.validator().record("+3581234567", "");
//! let err = pipeline.run(raw).execute(&send).await.unwrap_err();
//! assert_eq!(err.reason, "library call failure");
//! assert_eq!(err.fault(), Some(&"nothing to send".to_string()));
//! # });
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod effect;
pub mod error;
pub mod pipeline;
pub mod refined;
pub mod semigroup;
pub mod testing;
pub mod validation;
pub mod validator;

// Re-exports
pub use effect::{Capability, Effect, EffectExt};
pub use error::{make_error, StructuredError};
pub use pipeline::Pipeline;
pub use refined::{Identifier, Payload, Refined};
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use validator::{Message, MessageValidator, Validator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::effect::prelude::*;
    pub use crate::error::{
        make_error, Detail, FieldError, NoFault, StructuredError, Violations,
        INPUT_VALIDATION_FAILURE, LIBRARY_CALL_FAILURE,
    };
    pub use crate::pipeline::Pipeline;
    pub use crate::refined::{Identifier, Payload, Predicate, Refined};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::{ValidateAll, Validation};
    pub use crate::validator::{FieldNames, Message, MessageValidator, RawRecord, Validator};
}
